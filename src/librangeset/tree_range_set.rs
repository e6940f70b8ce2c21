// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Mutable range set backed by a `BTreeMap` from lower bounds to ranges.
//!
//! Adding a range coalesces it with every stored range it is connected to, removing a range splits the stored ranges it cuts through. It serves as the scratch structure of the set algebra of [`ImmutableRangeSet`](../immutable_range_set/struct.ImmutableRangeSet.html), but it is a complete range set on its own.
//!
//! # Examples
//!
//! ```rust
//! use rangeset::{Range, TreeRangeSet};
//!
//! let mut set = TreeRangeSet::new();
//! set.add(Range::closed(1, 10));
//! set.add(Range::closed_open(10, 12));
//! set.remove(&Range::open(3, 5));
//! assert_eq!(set.iter().cloned().collect::<Vec<_>>(),
//!   vec![Range::closed(1, 3), Range::closed_open(5, 12)]);
//! ```

use crate::cut::Cut;
use crate::cut::Cut::*;
use crate::error::{Error, Result};
use crate::range::Range;
use crate::range_set::RangeSet;
use log::trace;
use std::collections::btree_map::{BTreeMap, Values};
use std::fmt;
use std::iter::FromIterator;
use std::ops::Bound::{Excluded, Included, Unbounded};

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TreeRangeSet<C> {
  ranges_by_lower_bound: BTreeMap<Cut<C>, Range<C>>
}

impl<C: Ord + Clone> TreeRangeSet<C>
{
  pub fn new() -> TreeRangeSet<C> {
    TreeRangeSet { ranges_by_lower_bound: BTreeMap::new() }
  }

  /// Union of `ranges`, empty ranges are ignored.
  pub fn create<I>(ranges: I) -> TreeRangeSet<C> where
   I: IntoIterator<Item=Range<C>>
  {
    let mut set = TreeRangeSet::new();
    set.add_ranges(ranges);
    set
  }

  pub fn from_range_set(other: &dyn RangeSet<C>) -> TreeRangeSet<C> {
    TreeRangeSet::create(other.ranges())
  }

  /// Number of stored ranges.
  pub fn len(&self) -> usize {
    self.ranges_by_lower_bound.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ranges_by_lower_bound.is_empty()
  }

  pub fn iter(&self) -> Values<'_, Cut<C>, Range<C>> {
    self.ranges_by_lower_bound.values()
  }

  fn lower_entry(&self, cut: &Cut<C>) -> Option<&Range<C>> {
    self.ranges_by_lower_bound.range((Unbounded, Excluded(cut))).next_back().map(|(_, r)| r)
  }

  fn floor_entry(&self, cut: &Cut<C>) -> Option<&Range<C>> {
    self.ranges_by_lower_bound.range((Unbounded, Included(cut))).next_back().map(|(_, r)| r)
  }

  fn ceiling_entry(&self, cut: &Cut<C>) -> Option<&Range<C>> {
    self.ranges_by_lower_bound.range((Included(cut), Unbounded)).next().map(|(_, r)| r)
  }

  // Removes every range whose lower bound lies in `[lower..upper)`.
  fn clear_between(&mut self, lower: &Cut<C>, upper: &Cut<C>) {
    let keys: Vec<Cut<C>> = self.ranges_by_lower_bound
      .range((Included(lower), Excluded(upper)))
      .map(|(k, _)| k.clone())
      .collect();
    for key in keys {
      self.ranges_by_lower_bound.remove(&key);
    }
  }

  fn replace_range_with_same_lower_bound(&mut self, range: Range<C>) {
    if range.is_empty() {
      self.ranges_by_lower_bound.remove(range.lower_bound());
    }
    else {
      self.ranges_by_lower_bound.insert(range.lower_bound().clone(), range);
    }
  }

  pub fn add(&mut self, range: Range<C>) {
    if range.is_empty() {
      return;
    }
    let (mut lower, mut upper) = range.into_bounds();
    if let Some(below) = self.lower_entry(&lower) {
      if below.upper_bound() >= &lower {
        if below.upper_bound() >= &upper {
          upper = below.upper_bound().clone();
        }
        lower = below.lower_bound().clone();
      }
    }
    if let Some(below) = self.floor_entry(&upper) {
      if below.upper_bound() >= &upper {
        upper = below.upper_bound().clone();
      }
    }
    self.clear_between(&lower, &upper);
    self.replace_range_with_same_lower_bound(Range::create(lower, upper));
    trace!("range added, {} disjoint ranges stored", self.len());
  }

  pub fn remove(&mut self, range: &Range<C>) {
    if range.is_empty() {
      return;
    }
    let lower = range.lower_bound();
    let upper = range.upper_bound();
    let mut remainders = vec![];
    if let Some(below) = self.lower_entry(lower) {
      if below.upper_bound() > lower {
        if range.has_upper_bound() && below.upper_bound() > upper {
          remainders.push(Range::create(upper.clone(), below.upper_bound().clone()));
        }
        remainders.push(Range::create(below.lower_bound().clone(), lower.clone()));
      }
    }
    if let Some(below) = self.floor_entry(upper) {
      if range.has_upper_bound() && below.upper_bound() > upper {
        remainders.push(Range::create(upper.clone(), below.upper_bound().clone()));
      }
    }
    self.clear_between(lower, upper);
    for remainder in remainders {
      self.replace_range_with_same_lower_bound(remainder);
    }
    trace!("range removed, {} disjoint ranges stored", self.len());
  }

  pub fn add_ranges<I>(&mut self, ranges: I) where
   I: IntoIterator<Item=Range<C>>
  {
    for range in ranges {
      self.add(range);
    }
  }

  pub fn remove_ranges<I>(&mut self, ranges: I) where
   I: IntoIterator<Item=Range<C>>
  {
    for range in ranges {
      self.remove(&range);
    }
  }

  pub fn range_containing(&self, value: &C) -> Option<Range<C>> {
    self.floor_entry(&BelowValue(value.clone()))
      .filter(|r| r.contains(value))
      .cloned()
  }

  pub fn contains(&self, value: &C) -> bool {
    self.range_containing(value).is_some()
  }

  pub fn intersects(&self, range: &Range<C>) -> bool {
    self.ceiling_entry(range.lower_bound()).map_or(false, |r| r.overlaps(range))
    || self.lower_entry(range.lower_bound()).map_or(false, |r| r.overlaps(range))
  }

  pub fn encloses(&self, range: &Range<C>) -> bool {
    self.floor_entry(range.lower_bound()).map_or(false, |r| r.encloses(range))
  }

  pub fn span(&self) -> Result<Range<C>> {
    let first = self.ranges_by_lower_bound.values().next();
    let last = self.ranges_by_lower_bound.values().next_back();
    match (first, last) {
      (Some(first), Some(last)) => Ok(first.span(last)),
      _ => Err(Error::no_such_element("an empty range set has no span"))
    }
  }

  pub fn complement(&self) -> TreeRangeSet<C> {
    let mut complement = TreeRangeSet::new();
    let mut lower = BelowAll;
    for range in self.iter() {
      if &lower < range.lower_bound() {
        complement.replace_range_with_same_lower_bound(Range::create(lower, range.lower_bound().clone()));
      }
      lower = range.upper_bound().clone();
    }
    if lower != AboveAll {
      complement.replace_range_with_same_lower_bound(Range::create(lower, AboveAll));
    }
    complement
  }
}

impl<C: Ord + Clone> Default for TreeRangeSet<C>
{
  fn default() -> TreeRangeSet<C> {
    TreeRangeSet::new()
  }
}

impl<C: Ord + Clone> RangeSet<C> for TreeRangeSet<C>
{
  fn range_containing(&self, value: &C) -> Option<Range<C>> {
    TreeRangeSet::range_containing(self, value)
  }

  fn intersects(&self, range: &Range<C>) -> bool {
    TreeRangeSet::intersects(self, range)
  }

  fn encloses(&self, range: &Range<C>) -> bool {
    TreeRangeSet::encloses(self, range)
  }

  fn is_empty(&self) -> bool {
    TreeRangeSet::is_empty(self)
  }

  fn span(&self) -> Result<Range<C>> {
    TreeRangeSet::span(self)
  }

  fn ranges(&self) -> Box<dyn Iterator<Item=Range<C>> + '_> {
    Box::new(self.iter().cloned())
  }

  fn complement(&self) -> TreeRangeSet<C> {
    TreeRangeSet::complement(self)
  }

  fn add(&mut self, range: Range<C>) -> Result<()> {
    TreeRangeSet::add(self, range);
    Ok(())
  }

  fn remove(&mut self, range: &Range<C>) -> Result<()> {
    TreeRangeSet::remove(self, range);
    Ok(())
  }
}

impl<C: Ord + Clone> FromIterator<Range<C>> for TreeRangeSet<C>
{
  fn from_iter<I: IntoIterator<Item=Range<C>>>(iter: I) -> TreeRangeSet<C> {
    TreeRangeSet::create(iter)
  }
}

impl<C: Ord + Clone> Extend<Range<C>> for TreeRangeSet<C>
{
  fn extend<I: IntoIterator<Item=Range<C>>>(&mut self, iter: I) {
    self.add_ranges(iter);
  }
}

impl<C: fmt::Debug> fmt::Debug for TreeRangeSet<C>
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_list().entries(self.ranges_by_lower_bound.values()).finish()
  }
}
