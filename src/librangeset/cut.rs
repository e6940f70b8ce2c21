// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Endpoint of a range.
//!
//! A cut sits *between* values of the ordered type: `BelowValue(v)` is the cut just before `v` and `AboveValue(v)` the cut just after it. This lets open and closed endpoints share a single total order:
//!
//! ```text
//! BelowAll < BelowValue(1) < AboveValue(1) < BelowValue(2) < ... < AboveAll
//! ```
//!
//! `BelowAll` and `AboveAll` are not values of `C`, they stand for the infinities.

use crate::discrete_domain::DiscreteDomain;
use crate::range::BoundType;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cut<C> {
  BelowAll,
  BelowValue(C),
  AboveValue(C),
  AboveAll
}

use self::Cut::*;

impl<C> Cut<C>
{
  pub fn endpoint(&self) -> Option<&C> {
    match self {
      BelowValue(v) | AboveValue(v) => Some(v),
      BelowAll | AboveAll => None
    }
  }

  pub fn is_bounded(&self) -> bool {
    self.endpoint().is_some()
  }

  /// Bound type of this cut when used as the lower bound of a range.
  /// `None` for the infinities.
  pub fn lower_bound_type(&self) -> Option<BoundType> {
    match self {
      BelowValue(_) => Some(BoundType::Closed),
      AboveValue(_) => Some(BoundType::Open),
      _ => None
    }
  }

  /// Bound type of this cut when used as the upper bound of a range.
  pub fn upper_bound_type(&self) -> Option<BoundType> {
    match self {
      BelowValue(_) => Some(BoundType::Open),
      AboveValue(_) => Some(BoundType::Closed),
      _ => None
    }
  }
}

impl<C: Ord> Cut<C>
{
  /// `true` if this cut lies before `value`.
  pub fn is_less_than(&self, value: &C) -> bool {
    match self {
      BelowAll => true,
      AboveAll => false,
      BelowValue(v) => v <= value,
      AboveValue(v) => v < value
    }
  }
}

impl<C: Ord + Clone> Cut<C>
{
  /// Smallest value of `domain` lying after this cut.
  pub fn least_value_above<D>(&self, domain: &D) -> Option<C> where
   D: DiscreteDomain<C> + ?Sized
  {
    match self {
      BelowAll => domain.min_value().ok(),
      BelowValue(v) => Some(v.clone()),
      AboveValue(v) => domain.next(v),
      AboveAll => None
    }
  }

  /// Greatest value of `domain` lying before this cut.
  pub fn greatest_value_below<D>(&self, domain: &D) -> Option<C> where
   D: DiscreteDomain<C> + ?Sized
  {
    match self {
      BelowAll => None,
      BelowValue(v) => domain.previous(v),
      AboveValue(v) => Some(v.clone()),
      AboveAll => domain.max_value().ok()
    }
  }

  /// In a discrete domain, the cuts `AboveValue(v)` and `BelowValue(v + 1)` denote the same position.
  /// The canonical form always prefers `BelowValue`, and replaces `BelowAll` by the domain minimum when it exists.
  pub fn canonical<D>(&self, domain: &D) -> Cut<C> where
   D: DiscreteDomain<C> + ?Sized
  {
    match self {
      BelowAll => domain.min_value().map_or(BelowAll, BelowValue),
      AboveValue(v) => domain.next(v).map_or(AboveAll, BelowValue),
      BelowValue(_) | AboveAll => self.clone()
    }
  }
}

impl<C: Ord> PartialOrd for Cut<C>
{
  fn partial_cmp(&self, other: &Cut<C>) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<C: Ord> Ord for Cut<C>
{
  fn cmp(&self, other: &Cut<C>) -> Ordering {
    match (self, other) {
      (BelowAll, BelowAll) | (AboveAll, AboveAll) => Ordering::Equal,
      (BelowAll, _) | (_, AboveAll) => Ordering::Less,
      (AboveAll, _) | (_, BelowAll) => Ordering::Greater,
      (BelowValue(a), BelowValue(b)) | (AboveValue(a), AboveValue(b)) => a.cmp(b),
      (BelowValue(a), AboveValue(b)) => a.cmp(b).then(Ordering::Less),
      (AboveValue(a), BelowValue(b)) => a.cmp(b).then(Ordering::Greater)
    }
  }
}
