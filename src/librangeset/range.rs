// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Convex subset of a totally ordered type.
//!
//! A range is described by two [cuts](../cut/index.html), hence each endpoint is independently open, closed or unbounded. The usual mathematical notation is used for printing: `[1..5)` is the range `1 <= x < 5` and `(-∞..3]` the range `x <= 3`.
//!
//! # Examples
//!
//! ```rust
//! use rangeset::Range;
//!
//! let a = Range::closed_open(1, 5);
//! let b = Range::at_least(5);
//! assert!(a.is_connected(&b));
//! assert!(a.intersection(&b).unwrap().is_empty());
//! assert_eq!(a.span(&b).to_string(), "[1..+∞)");
//! ```
//!
//! A range with equal cuts such as `[3..3)` is valid but empty. Constructors taking plain endpoints panic when the bounds are inverted, use `Range::new` for a fallible construction.

use crate::cut::Cut;
use crate::cut::Cut::*;
use crate::discrete_domain::DiscreteDomain;
use crate::error::{Error, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::cmp::{max, min, Ordering};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundType {
  Open,
  Closed
}

impl BoundType
{
  pub fn from_inclusive(inclusive: bool) -> BoundType {
    if inclusive { BoundType::Closed } else { BoundType::Open }
  }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range<C> {
  lower: Cut<C>,
  upper: Cut<C>
}

impl<C> Range<C>
{
  pub fn lower_bound(&self) -> &Cut<C> {
    &self.lower
  }

  pub fn upper_bound(&self) -> &Cut<C> {
    &self.upper
  }

  pub fn has_lower_bound(&self) -> bool {
    self.lower.is_bounded()
  }

  pub fn has_upper_bound(&self) -> bool {
    self.upper.is_bounded()
  }

  pub fn lower_endpoint(&self) -> Option<&C> {
    self.lower.endpoint()
  }

  pub fn upper_endpoint(&self) -> Option<&C> {
    self.upper.endpoint()
  }

  pub fn lower_bound_type(&self) -> Option<BoundType> {
    self.lower.lower_bound_type()
  }

  pub fn upper_bound_type(&self) -> Option<BoundType> {
    self.upper.upper_bound_type()
  }

  pub fn into_bounds(self) -> (Cut<C>, Cut<C>) {
    (self.lower, self.upper)
  }

  /// The range `(-∞..+∞)`.
  pub fn all() -> Range<C> {
    Range { lower: BelowAll, upper: AboveAll }
  }
}

impl<C: Ord> Range<C>
{
  /// Builds the range between two cuts.
  ///
  /// Fails if `lower` is above `upper`, if `lower` is `AboveAll` or if `upper` is `BelowAll`.
  pub fn new(lower: Cut<C>, upper: Cut<C>) -> Result<Range<C>> {
    if lower > upper {
      Err(Error::illegal_argument("invalid range: the lower bound is above the upper bound"))
    }
    else if lower == AboveAll || upper == BelowAll {
      Err(Error::illegal_argument("invalid range: +∞ cannot be a lower bound and -∞ cannot be an upper bound"))
    }
    else {
      Ok(Range { lower, upper })
    }
  }

  /// Cuts must already satisfy the invariants of `Range::new`.
  pub(crate) fn create(lower: Cut<C>, upper: Cut<C>) -> Range<C> {
    debug_assert!(lower <= upper && lower != AboveAll && upper != BelowAll,
      "Invalid range: the cuts are inverted or infinite on the wrong side.");
    Range { lower, upper }
  }

  fn checked(lower: Cut<C>, upper: Cut<C>) -> Range<C> {
    assert!(lower <= upper, "Invalid range: the lower bound must not be above the upper bound.");
    Range { lower, upper }
  }

  /// `(lower..upper)`, panics unless `lower < upper`.
  pub fn open(lower: C, upper: C) -> Range<C> {
    Range::checked(AboveValue(lower), BelowValue(upper))
  }

  /// `[lower..upper]`, panics unless `lower <= upper`.
  pub fn closed(lower: C, upper: C) -> Range<C> {
    Range::checked(BelowValue(lower), AboveValue(upper))
  }

  pub fn closed_open(lower: C, upper: C) -> Range<C> {
    Range::checked(BelowValue(lower), BelowValue(upper))
  }

  pub fn open_closed(lower: C, upper: C) -> Range<C> {
    Range::checked(AboveValue(lower), AboveValue(upper))
  }

  pub fn range(lower: C, lower_type: BoundType, upper: C, upper_type: BoundType) -> Range<C> {
    let lower = match lower_type {
      BoundType::Open => AboveValue(lower),
      BoundType::Closed => BelowValue(lower)
    };
    let upper = match upper_type {
      BoundType::Open => BelowValue(upper),
      BoundType::Closed => AboveValue(upper)
    };
    Range::checked(lower, upper)
  }

  pub fn less_than(upper: C) -> Range<C> {
    Range { lower: BelowAll, upper: BelowValue(upper) }
  }

  pub fn at_most(upper: C) -> Range<C> {
    Range { lower: BelowAll, upper: AboveValue(upper) }
  }

  pub fn up_to(upper: C, bound_type: BoundType) -> Range<C> {
    match bound_type {
      BoundType::Open => Range::less_than(upper),
      BoundType::Closed => Range::at_most(upper)
    }
  }

  pub fn greater_than(lower: C) -> Range<C> {
    Range { lower: AboveValue(lower), upper: AboveAll }
  }

  pub fn at_least(lower: C) -> Range<C> {
    Range { lower: BelowValue(lower), upper: AboveAll }
  }

  pub fn down_to(lower: C, bound_type: BoundType) -> Range<C> {
    match bound_type {
      BoundType::Open => Range::greater_than(lower),
      BoundType::Closed => Range::at_least(lower)
    }
  }

  pub fn is_empty(&self) -> bool {
    self.lower == self.upper
  }

  pub fn is_all(&self) -> bool {
    self.lower == BelowAll && self.upper == AboveAll
  }

  pub fn contains(&self, value: &C) -> bool {
    self.lower.is_less_than(value) && !self.upper.is_less_than(value)
  }

  pub fn contains_all<'a, I>(&self, values: I) -> bool where
   I: IntoIterator<Item=&'a C>,
   C: 'a
  {
    values.into_iter().all(|v| self.contains(v))
  }

  pub fn encloses(&self, other: &Range<C>) -> bool {
    self.lower <= other.lower && other.upper <= self.upper
  }

  /// `true` if no value lies strictly between the two ranges, that is, if they overlap or touch.
  pub fn is_connected(&self, other: &Range<C>) -> bool {
    self.lower <= other.upper && other.lower <= self.upper
  }
}

impl<C: Ord + Clone> Range<C>
{
  pub fn singleton(value: C) -> Range<C> {
    Range::closed(value.clone(), value)
  }

  /// Largest range enclosed by both ranges, `None` when they are not connected.
  /// The result is empty when the ranges only touch, `[1..3)` and `[3..5]` intersect in `[3..3)`.
  pub fn intersection(&self, other: &Range<C>) -> Option<Range<C>> {
    if self.is_connected(other) {
      Some(self.intersect_connected(other))
    }
    else {
      None
    }
  }

  /// `true` if the ranges share a non-empty intersection, touching ranges such as `[1..3)` and `[3..5]` do not overlap.
  pub fn overlaps(&self, other: &Range<C>) -> bool {
    self.is_connected(other) && !self.intersect_connected(other).is_empty()
  }

  pub(crate) fn intersect_connected(&self, other: &Range<C>) -> Range<C> {
    debug_assert!(self.is_connected(other));
    if self.encloses(other) {
      other.clone()
    }
    else if other.encloses(self) {
      self.clone()
    }
    else {
      Range::create(
        max(&self.lower, &other.lower).clone(),
        min(&self.upper, &other.upper).clone())
    }
  }

  /// Range lying between two ranges, `None` when they overlap.
  /// Touching ranges have an empty gap.
  pub fn gap(&self, other: &Range<C>) -> Option<Range<C>> {
    if self.lower < other.upper && other.lower < self.upper {
      None
    }
    else {
      let (first, second) = if self.lower < other.lower { (self, other) } else { (other, self) };
      Some(Range::create(first.upper.clone(), second.lower.clone()))
    }
  }

  /// Smallest range enclosing both ranges.
  pub fn span(&self, other: &Range<C>) -> Range<C> {
    Range::create(
      min(&self.lower, &other.lower).clone(),
      max(&self.upper, &other.upper).clone())
  }

  /// Canonical form of this range in `domain`: lower bound closed and upper bound open whenever the domain allows it.
  /// Two ranges denoting the same values of the domain have the same canonical form, e.g. `(1..4]` and `[2..5)` in the integers.
  pub fn canonical<D>(&self, domain: &D) -> Range<C> where
   D: DiscreteDomain<C> + ?Sized
  {
    let lower = self.lower.canonical(domain);
    let upper = self.upper.canonical(domain);
    if lower == self.lower && upper == self.upper {
      self.clone()
    }
    else if lower == AboveAll {
      // Nothing of the domain lies above the lower bound.
      Range::create(self.lower.clone(), self.lower.clone())
    }
    else {
      Range::create(lower, upper)
    }
  }
}

impl<C: Ord> PartialOrd for Range<C>
{
  fn partial_cmp(&self, other: &Range<C>) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Lexicographic order on the lower bound, then the upper bound.
impl<C: Ord> Ord for Range<C>
{
  fn cmp(&self, other: &Range<C>) -> Ordering {
    self.lower.cmp(&other.lower)
      .then_with(|| self.upper.cmp(&other.upper))
  }
}

macro_rules! range_fmt_impl
{
  ( $( $fmt_trait: ident ),* ) =>
  {$(
    impl<C: fmt::$fmt_trait> fmt::$fmt_trait for Range<C>
    {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.lower {
          BelowAll => f.write_str("(-∞")?,
          BelowValue(v) => { f.write_str("[")?; fmt::$fmt_trait::fmt(v, f)?; }
          AboveValue(v) => { f.write_str("(")?; fmt::$fmt_trait::fmt(v, f)?; }
          AboveAll => f.write_str("(+∞")?
        }
        f.write_str("..")?;
        match &self.upper {
          BelowAll => f.write_str("-∞)"),
          BelowValue(v) => { fmt::$fmt_trait::fmt(v, f)?; f.write_str(")") }
          AboveValue(v) => { fmt::$fmt_trait::fmt(v, f)?; f.write_str("]") }
          AboveAll => f.write_str("+∞)")
        }
      }
    }
  )*}
}

range_fmt_impl!(Display, Debug);

#[derive(Deserialize)]
#[serde(rename = "Range")]
struct RawRange<C> {
  lower: Cut<C>,
  upper: Cut<C>
}

impl<'de, C> Deserialize<'de> for Range<C> where
 C: Ord + Deserialize<'de>
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<Range<C>, D::Error> where
   D: Deserializer<'de>
  {
    let raw = RawRange::deserialize(deserializer)?;
    Range::new(raw.lower, raw.upper).map_err(de::Error::custom)
  }
}
