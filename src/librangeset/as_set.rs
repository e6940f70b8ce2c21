// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! View of a range set as the sorted set of the values it contains in a discrete domain.
//!
//! ```rust
//! use rangeset::{ImmutableRangeSet, Integers, Range};
//!
//! let set = ImmutableRangeSet::union_of(vec![Range::closed(1, 3), Range::open(9, 13)]);
//! let values = set.as_set(Integers)?;
//! assert_eq!(values.size(), 6);
//! assert_eq!(values.index_of(&11), Some(4));
//! assert_eq!(values.iter().collect::<Vec<_>>(), vec![1, 2, 3, 10, 11, 12]);
//! # Ok::<(), rangeset::Error>(())
//! ```
//!
//! The view is only available when every range of the set can be enumerated: a set unbounded below requires a domain with a minimum, and similarly for a set unbounded above.

use crate::discrete_domain::DiscreteDomain;
use crate::error::{Error, Result};
use crate::immutable_range_set::{ImmutableRangeSet, Ranges};
use crate::range::{BoundType, Range};
use log::debug;
use num_traits::ToPrimitive;
use std::any::Any;
use std::fmt;
use std::sync::OnceLock;

impl<C: Ord + Clone> ImmutableRangeSet<C>
{
  /// The values of this set in `domain`, fails if the set cannot be enumerated in `domain`.
  pub fn as_set<D>(&self, domain: D) -> Result<AsSet<C, D>> where
   D: DiscreteDomain<C>
  {
    if let Ok(span) = self.span() {
      let span = span.canonical(&domain);
      if !span.has_lower_bound() {
        debug!("discretization rejected: {} ranges unbounded below", self.range_count());
        return Err(Error::UnboundedBelow);
      }
      if !span.has_upper_bound() && domain.max_value().is_err() {
        debug!("discretization rejected: {} ranges unbounded above", self.range_count());
        return Err(Error::UnboundedAbove);
      }
    }
    Ok(AsSet::from_parts(self.clone(), domain))
  }
}

#[derive(Clone)]
pub struct AsSet<C, D> {
  set: ImmutableRangeSet<C>,
  domain: D,
  size: OnceLock<u32>
}

impl<C, D> AsSet<C, D>
{
  pub(crate) fn from_parts(set: ImmutableRangeSet<C>, domain: D) -> AsSet<C, D> {
    AsSet { set, domain, size: OnceLock::new() }
  }
}

/// First and last values of `domain` in `range`, `None` if there are none.
fn endpoints<C, D>(range: &Range<C>, domain: &D) -> Option<(C, C)> where
 C: Ord + Clone,
 D: DiscreteDomain<C> + ?Sized
{
  let low = range.lower_bound().least_value_above(domain)?;
  let high = range.upper_bound().greatest_value_below(domain)?;
  if low <= high { Some((low, high)) } else { None }
}

fn range_size<C, D>(range: &Range<C>, domain: &D) -> u64 where
 C: Ord + Clone,
 D: DiscreteDomain<C> + ?Sized
{
  endpoints(range, domain)
    .map_or(0, |(low, high)| (domain.distance(&low, &high) as u64).saturating_add(1))
}

/// Counts above `i32::max_value()` are reported as `i32::max_value()`.
fn saturate(count: u64) -> u32 {
  count.to_i32().map_or(i32::max_value() as u32, |count| count as u32)
}

impl<C, D> AsSet<C, D> where
 C: Ord + Clone,
 D: DiscreteDomain<C>
{
  /// Number of values, saturated to `i32::max_value()`. Computed once.
  pub fn size(&self) -> u32 {
    *self.size.get_or_init(|| {
      let total = self.set.as_ranges()
        .map(|range| range_size(&range, &self.domain))
        .fold(0u64, u64::saturating_add);
      saturate(total)
    })
  }

  pub fn is_empty(&self) -> bool {
    self.size() == 0
  }

  pub fn contains(&self, value: &C) -> bool {
    self.set.contains(value)
  }

  /// As `contains`, `false` when `value` is not a `C`.
  pub fn contains_any(&self, value: &dyn Any) -> bool where
   C: 'static
  {
    value.downcast_ref::<C>().map_or(false, |value| self.contains(value))
  }

  /// Position of `value` in ascending order, saturated to `i32::max_value()`.
  pub fn index_of(&self, value: &C) -> Option<u32> {
    let mut preceding = 0u64;
    for range in self.set.as_ranges() {
      if range.contains(value) {
        let (low, _) = endpoints(&range, &self.domain)?;
        let offset = self.domain.distance(&low, value) as u64;
        return Some(saturate(preceding.saturating_add(offset)));
      }
      preceding = preceding.saturating_add(range_size(&range, &self.domain));
    }
    None
  }

  pub fn first(&self) -> Option<C> {
    self.iter().next()
  }

  pub fn last(&self) -> Option<C> {
    self.iter_descending().next()
  }

  pub fn iter(&self) -> Iter<'_, C, D> {
    Iter::new(self, true)
  }

  pub fn iter_descending(&self) -> Iter<'_, C, D> {
    Iter::new(self, false)
  }

  /// The underlying range set.
  pub fn range_set(&self) -> &ImmutableRangeSet<C> {
    &self.set
  }

  pub fn domain(&self) -> &D {
    &self.domain
  }
}

impl<C, D> AsSet<C, D> where
 C: Ord + Clone,
 D: DiscreteDomain<C> + Clone
{
  fn restricted(&self, range: Range<C>) -> Result<AsSet<C, D>> {
    self.set.sub_range_set(&range).as_set(self.domain.clone())
  }

  /// Values lower than `to`, or equal to it when `inclusive`.
  pub fn head_set(&self, to: C, inclusive: bool) -> Result<AsSet<C, D>> {
    self.restricted(Range::up_to(to, BoundType::from_inclusive(inclusive)))
  }

  /// Values greater than `from`, or equal to it when `inclusive`.
  pub fn tail_set(&self, from: C, inclusive: bool) -> Result<AsSet<C, D>> {
    self.restricted(Range::down_to(from, BoundType::from_inclusive(inclusive)))
  }

  pub fn sub_set(&self, from: C, from_inclusive: bool, to: C, to_inclusive: bool) -> Result<AsSet<C, D>> {
    if from > to {
      return Err(Error::illegal_argument("sub_set: the first element is above the last element"));
    }
    if from == to && !from_inclusive && !to_inclusive {
      return ImmutableRangeSet::of().as_set(self.domain.clone());
    }
    self.restricted(Range::range(from, BoundType::from_inclusive(from_inclusive),
      to, BoundType::from_inclusive(to_inclusive)))
  }
}

/// Values of an [`AsSet`](struct.AsSet.html), each range being enumerated on demand.
pub struct Iter<'a, C, D> {
  ranges: Ranges<'a, C>,
  domain: &'a D,
  ascending: bool,
  // Next value to yield and last value of the current range.
  cursor: Option<(C, C)>
}

impl<'a, C, D> Iter<'a, C, D> where
 C: Ord + Clone,
 D: DiscreteDomain<C>
{
  fn new(set: &'a AsSet<C, D>, ascending: bool) -> Iter<'a, C, D> {
    Iter {
      ranges: set.set.as_ranges(),
      domain: &set.domain,
      ascending,
      cursor: None
    }
  }
}

impl<'a, C, D> Iterator for Iter<'a, C, D> where
 C: Ord + Clone,
 D: DiscreteDomain<C>
{
  type Item = C;

  fn next(&mut self) -> Option<C> {
    let ascending = self.ascending;
    loop {
      if let Some((next, last)) = self.cursor.take() {
        if next != last {
          let step = if ascending { self.domain.next(&next) } else { self.domain.previous(&next) };
          self.cursor = step.map(|step| (step, last));
        }
        return Some(next);
      }
      let range = if ascending { self.ranges.next() } else { self.ranges.next_back() }?;
      self.cursor = endpoints(&range, self.domain)
        .map(|(low, high)| if ascending { (low, high) } else { (high, low) });
    }
  }
}

impl<'a, C, D> IntoIterator for &'a AsSet<C, D> where
 C: Ord + Clone,
 D: DiscreteDomain<C>
{
  type Item = C;
  type IntoIter = Iter<'a, C, D>;

  fn into_iter(self) -> Iter<'a, C, D> {
    self.iter()
  }
}

impl<C, D> fmt::Display for AsSet<C, D> where
 C: Ord + Clone + fmt::Display
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.set)
  }
}

impl<C, D> fmt::Debug for AsSet<C, D> where
 C: Ord + Clone + fmt::Debug
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_tuple("AsSet").field(&self.set).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::discrete_domain::Integers;

  /// Integers without minimum nor maximum.
  struct Unbounded;

  impl DiscreteDomain<i32> for Unbounded
  {
    fn next(&self, value: &i32) -> Option<i32> { value.checked_add(1) }
    fn previous(&self, value: &i32) -> Option<i32> { value.checked_sub(1) }
    fn distance(&self, start: &i32, end: &i32) -> i64 { *end as i64 - *start as i64 }
  }

  fn set(ranges: Vec<Range<i32>>) -> ImmutableRangeSet<i32> {
    ImmutableRangeSet::union_of(ranges)
  }

  fn values(view: &AsSet<i32, Integers>) -> Vec<i32> {
    view.iter().collect()
  }

  #[test]
  fn enumeration() {
    // The first number is the test id, then the ranges and the expected values.
    let cases = vec![
      (1, vec![], vec![]),
      (2, vec![Range::closed(1, 3), Range::closed(10, 12)], vec![1, 2, 3, 10, 11, 12]),
      (3, vec![Range::open_closed(0, 3), Range::closed_open(5, 7)], vec![1, 2, 3, 5, 6]),
      (4, vec![Range::open(1, 2), Range::singleton(4)], vec![4]),
      (5, vec![Range::open(1, 2)], vec![]),
      (6, vec![Range::greater_than(i32::max_value())], vec![]),
      (7, vec![Range::at_least(i32::max_value() - 1)], vec![i32::max_value() - 1, i32::max_value()]),
      (8, vec![Range::less_than(i32::min_value() + 2)], vec![i32::min_value(), i32::min_value() + 1])
    ];
    for (id, ranges, expected) in cases {
      let view = set(ranges).as_set(Integers);
      assert!(view.is_ok(), "test #{} of as_set", id);
      if let Ok(view) = view {
        assert_eq!(values(&view), expected, "test #{} of iter", id);
        let mut descending = expected.clone();
        descending.reverse();
        assert_eq!(view.iter_descending().collect::<Vec<_>>(), descending, "test #{} of iter_descending", id);
        assert_eq!(view.size() as usize, expected.len(), "test #{} of size", id);
        assert_eq!(view.is_empty(), expected.is_empty(), "test #{} of is_empty", id);
        assert_eq!(view.first(), expected.first().cloned(), "test #{} of first", id);
        assert_eq!(view.last(), expected.last().cloned(), "test #{} of last", id);
        for (index, value) in expected.iter().enumerate() {
          assert_eq!(view.index_of(value), Some(index as u32), "test #{} of index_of({})", id, value);
          assert!(view.contains(value), "test #{} of contains({})", id, value);
        }
      }
    }
  }

  #[test]
  fn membership() {
    let view = set(vec![Range::closed(1, 3), Range::closed(10, 12)]).as_set(Integers);
    assert!(view.is_ok());
    if let Ok(view) = view {
      assert_eq!(view.size(), 6);
      assert_eq!(view.index_of(&11), Some(4));
      assert_eq!(view.index_of(&5), None);
      assert!(!view.contains(&5));
      assert!(view.contains_any(&11i32));
      assert!(!view.contains_any(&11i64));
      assert!(!view.contains_any(&"11"));
      assert_eq!((&view).into_iter().count(), 6);
      assert_eq!(view.to_string(), "[[1..3], [10..12]]");
      assert_eq!(format!("{:?}", view), "AsSet([[1..3], [10..12]])");
    }
  }

  #[test]
  fn saturated_size() {
    let cap = i32::max_value() as u32;
    let view = ImmutableRangeSet::of_range(Range::at_most(5i64)).as_set(Integers);
    assert_eq!(view.as_ref().map(|v| v.size()), Ok(cap));
    assert_eq!(view.as_ref().map(|v| v.first()), Ok(Some(i64::min_value())));
    assert_eq!(view.as_ref().map(|v| v.last()), Ok(Some(5)));
    assert_eq!(view.as_ref().map(|v| v.index_of(&5)), Ok(Some(cap)));
    assert_eq!(view.map(|v| v.index_of(&i64::min_value())), Ok(Some(0)));
    let all = ImmutableRangeSet::of_range(Range::<u64>::all()).as_set(Integers);
    assert_eq!(all.as_ref().map(|v| v.size()), Ok(cap));
    assert_eq!(all.as_ref().map(|v| v.index_of(&u64::max_value())), Ok(Some(cap)));
    assert_eq!(all.as_ref().map(|v| v.index_of(&(cap as u64 - 1))), Ok(Some(cap - 1)));
    assert_eq!(all.map(|v| v.index_of(&(cap as u64 + 1))), Ok(Some(cap)));
    let exact = ImmutableRangeSet::of_range(Range::closed_open(0u64, cap as u64)).as_set(Integers);
    assert_eq!(exact.map(|v| v.size()), Ok(cap));
  }

  #[test]
  fn unbounded_domains() {
    assert_eq!(set(vec![Range::at_most(5)]).as_set(Unbounded).err(), Some(Error::UnboundedBelow));
    assert_eq!(set(vec![Range::at_least(5)]).as_set(Unbounded).err(), Some(Error::UnboundedAbove));
    assert_eq!(ImmutableRangeSet::all().as_set(Unbounded).err(), Some(Error::UnboundedBelow));
    assert!(ImmutableRangeSet::<i32>::of().as_set(Unbounded).is_ok());
    let bounded = set(vec![Range::closed(1, 2), Range::open(4, 7)]).as_set(Unbounded);
    assert_eq!(bounded.map(|v| v.iter().collect::<Vec<_>>()), Ok(vec![1, 2, 5, 6]));
    let all = ImmutableRangeSet::<u8>::all().as_set(Integers);
    assert_eq!(all.as_ref().map(|v| v.size()), Ok(256));
    assert_eq!(all.map(|v| v.index_of(&200)), Ok(Some(200)));
  }

  #[test]
  fn sub_sets() {
    let view = set(vec![Range::closed(1, 3), Range::closed(10, 12)]).as_set(Integers);
    assert!(view.is_ok());
    if let Ok(view) = view {
      // The first number is the test id, then the restricted view and the expected values.
      let cases = vec![
        (1, view.head_set(10, false), vec![1, 2, 3]),
        (2, view.head_set(10, true), vec![1, 2, 3, 10]),
        (3, view.tail_set(3, false), vec![10, 11, 12]),
        (4, view.tail_set(3, true), vec![3, 10, 11, 12]),
        (5, view.sub_set(2, true, 11, false), vec![2, 3, 10]),
        (6, view.sub_set(2, false, 11, true), vec![3, 10, 11]),
        (7, view.sub_set(5, false, 5, false), vec![]),
        (8, view.sub_set(2, false, 2, true), vec![]),
        (9, view.sub_set(2, true, 2, true), vec![2]),
        (10, view.sub_set(4, true, 9, true), vec![])
      ];
      for (id, restricted, expected) in cases {
        assert_eq!(restricted.map(|v| values(&v)), Ok(expected), "test #{} of sub-sets", id);
      }
      assert!(view.sub_set(11, true, 2, true).is_err());
      assert!(view.head_set(100, true).map(|v| v.range_set().same_instance(view.range_set())).unwrap_or(false));
    }
  }
}
