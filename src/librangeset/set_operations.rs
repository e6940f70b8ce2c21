// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Implementation of the `gcollections` operations for ranges, range sets and their discrete views.
//!
//! A range is not closed under union and difference, hence these operations on ranges produce an [`ImmutableRangeSet`](../immutable_range_set/struct.ImmutableRangeSet.html). Operations on [`AsSet`](../as_set/struct.AsSet.html) compare the values of the domain rather than the ranges: `{[1..2], [3..4]}` and `{[1..4]}` are equal sets of integers.

use crate::as_set::AsSet;
use crate::discrete_domain::DiscreteDomain;
use crate::error::Result;
use crate::immutable_range_set::ImmutableRangeSet;
use crate::range::Range;
use gcollections::kind::*;
use gcollections::ops::*;

impl<C> Collection for Range<C>
{
  type Item = C;
}

impl<C: Ord> Contains for Range<C>
{
  fn contains(&self, value: &C) -> bool {
    Range::contains(self, value)
  }
}

impl<C: Ord> IsEmpty for Range<C>
{
  fn is_empty(&self) -> bool {
    Range::is_empty(self)
  }
}

impl<C: Ord + Clone> Singleton for Range<C>
{
  fn singleton(value: C) -> Range<C> {
    Range::singleton(value)
  }
}

impl<C: Ord + Clone> Intersection for Range<C>
{
  type Output = ImmutableRangeSet<C>;

  fn intersection(&self, rhs: &Range<C>) -> ImmutableRangeSet<C> {
    Range::intersection(self, rhs)
      .map_or_else(ImmutableRangeSet::of, ImmutableRangeSet::of_range)
  }
}

impl<C: Ord + Clone> Union for Range<C>
{
  type Output = ImmutableRangeSet<C>;

  fn union(&self, rhs: &Range<C>) -> ImmutableRangeSet<C> {
    ImmutableRangeSet::union_of(vec![self.clone(), rhs.clone()])
  }
}

impl<C: Ord + Clone> Difference for Range<C>
{
  type Output = ImmutableRangeSet<C>;

  fn difference(&self, rhs: &Range<C>) -> ImmutableRangeSet<C> {
    ImmutableRangeSet::of_range(self.clone())
      .difference(&ImmutableRangeSet::of_range(rhs.clone()))
  }
}

impl<C: Ord> Subset for Range<C>
{
  fn is_subset(&self, rhs: &Range<C>) -> bool {
    rhs.encloses(self)
  }
}

impl<C: Ord + Clone> Overlap for Range<C>
{
  fn overlap(&self, rhs: &Range<C>) -> bool {
    self.overlaps(rhs)
  }
}

impl<C: Ord + Clone> Disjoint for Range<C>
{
  fn is_disjoint(&self, rhs: &Range<C>) -> bool {
    !self.overlaps(rhs)
  }
}

impl<C> Collection for ImmutableRangeSet<C>
{
  type Item = C;
}

impl<C: Ord + Clone> Contains for ImmutableRangeSet<C>
{
  fn contains(&self, value: &C) -> bool {
    ImmutableRangeSet::contains(self, value)
  }
}

impl<C> IsEmpty for ImmutableRangeSet<C>
{
  fn is_empty(&self) -> bool {
    ImmutableRangeSet::is_empty(self)
  }
}

impl<C> Empty for ImmutableRangeSet<C>
{
  fn empty() -> ImmutableRangeSet<C> {
    ImmutableRangeSet::of()
  }
}

impl<C: Ord + Clone> Singleton for ImmutableRangeSet<C>
{
  fn singleton(value: C) -> ImmutableRangeSet<C> {
    ImmutableRangeSet::of_range(Range::singleton(value))
  }
}

macro_rules! range_set_op_impl
{
  ( $( $op: ident, $method: ident );* ) =>
  {$(
    impl<C: Ord + Clone> $op for ImmutableRangeSet<C>
    {
      type Output = ImmutableRangeSet<C>;

      fn $method(&self, rhs: &ImmutableRangeSet<C>) -> ImmutableRangeSet<C> {
        ImmutableRangeSet::$method(self, rhs)
      }
    }

    impl<C: Ord + Clone> $op<Range<C>> for ImmutableRangeSet<C>
    {
      type Output = ImmutableRangeSet<C>;

      fn $method(&self, rhs: &Range<C>) -> ImmutableRangeSet<C> {
        ImmutableRangeSet::$method(self, &ImmutableRangeSet::of_range(rhs.clone()))
      }
    }
  )*}
}

range_set_op_impl!(Intersection, intersection; Union, union; Difference, difference);

impl<C: Ord + Clone> Complement for ImmutableRangeSet<C>
{
  fn complement(&self) -> ImmutableRangeSet<C> {
    ImmutableRangeSet::complement(self)
  }
}

impl<C: Ord + Clone> Subset for ImmutableRangeSet<C>
{
  fn is_subset(&self, rhs: &ImmutableRangeSet<C>) -> bool {
    rhs.encloses_all(self)
  }
}

impl<C: Ord + Clone> Overlap for ImmutableRangeSet<C>
{
  fn overlap(&self, rhs: &ImmutableRangeSet<C>) -> bool {
    self.as_ranges().any(|range| rhs.intersects(&range))
  }
}

impl<C: Ord + Clone> Disjoint for ImmutableRangeSet<C>
{
  fn is_disjoint(&self, rhs: &ImmutableRangeSet<C>) -> bool {
    !self.overlap(rhs)
  }
}

// Ranges in canonical form are adjacent exactly when no value of the domain separates them, so merging them compares the sets value-wise.
fn canonical_set<C, D>(set: &AsSet<C, D>) -> ImmutableRangeSet<C> where
 C: Ord + Clone,
 D: DiscreteDomain<C>
{
  ImmutableRangeSet::union_of(set.range_set().as_ranges().map(|range| range.canonical(set.domain())))
}

impl<C, D> Collection for AsSet<C, D>
{
  type Item = C;
}

impl<C: Ord + Clone, D: DiscreteDomain<C>> Contains for AsSet<C, D>
{
  fn contains(&self, value: &C) -> bool {
    AsSet::contains(self, value)
  }
}

// `IsEmpty` comes with `Cardinality`.
impl<C: Ord + Clone, D: DiscreteDomain<C>> Cardinality for AsSet<C, D>
{
  type Size = u32;

  fn size(&self) -> u32 {
    AsSet::size(self)
  }
}

impl<C, D: Default> Empty for AsSet<C, D>
{
  fn empty() -> AsSet<C, D> {
    AsSet::from_parts(ImmutableRangeSet::of(), D::default())
  }
}

macro_rules! as_set_op_impl
{
  ( $( $op: ident, $method: ident );* ) =>
  {$(
    impl<C, D> $op for AsSet<C, D> where
     C: Ord + Clone,
     D: DiscreteDomain<C> + Clone
    {
      type Output = Result<AsSet<C, D>>;

      fn $method(&self, rhs: &AsSet<C, D>) -> Result<AsSet<C, D>> {
        self.range_set().$method(rhs.range_set()).as_set(self.domain().clone())
      }
    }
  )*}
}

as_set_op_impl!(Intersection, intersection; Union, union; Difference, difference);

impl<C: Ord + Clone, D: DiscreteDomain<C>> Subset for AsSet<C, D>
{
  fn is_subset(&self, rhs: &AsSet<C, D>) -> bool {
    canonical_set(rhs).encloses_all(&canonical_set(self))
  }
}

impl<C: Ord + Clone, D: DiscreteDomain<C>> Overlap for AsSet<C, D>
{
  fn overlap(&self, rhs: &AsSet<C, D>) -> bool {
    Overlap::overlap(&canonical_set(self), &canonical_set(rhs))
  }
}

impl<C: Ord + Clone, D: DiscreteDomain<C>> Disjoint for AsSet<C, D>
{
  fn is_disjoint(&self, rhs: &AsSet<C, D>) -> bool {
    !self.overlap(rhs)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::discrete_domain::Integers;

  fn set(ranges: Vec<(i32, i32)>) -> ImmutableRangeSet<i32> {
    ImmutableRangeSet::union_of(ranges.into_iter().map(|(l, u)| Range::closed(l, u)))
  }

  fn values(view: &Result<AsSet<i32, Integers>>) -> Vec<i32> {
    view.as_ref().map(|v| v.iter().collect()).unwrap_or_default()
  }

  #[test]
  fn range_operations() {
    let a = Range::closed(1, 5);
    let b = Range::closed(3, 8);
    let c = Range::closed(10, 12);
    assert_eq!(Intersection::intersection(&a, &b), set(vec![(3, 5)]));
    assert!(Intersection::intersection(&a, &c).is_empty());
    assert_eq!(Union::union(&a, &b), set(vec![(1, 8)]));
    assert_eq!(Union::union(&a, &c), set(vec![(1, 5), (10, 12)]));
    assert_eq!(Difference::difference(&a, &b).as_ranges().collect::<Vec<_>>(), vec![Range::closed_open(1, 3)]);
    assert_eq!(Difference::difference(&b, &Range::closed(4, 5)).as_ranges().collect::<Vec<_>>(),
      vec![Range::closed_open(3, 4), Range::open_closed(5, 8)]);
    assert!(Range::closed(2, 3).is_subset(&a));
    assert!(!b.is_subset(&a));
    assert!(a.overlap(&b) && !a.overlap(&c));
    assert!(a.is_disjoint(&c));
    assert!(Range::closed_open(1, 3).is_disjoint(&Range::closed(3, 4)));
    assert!(Contains::contains(&a, &5) && !Contains::contains(&a, &6));
    assert!(IsEmpty::is_empty(&Range::open_closed(2, 2)));
    assert_eq!(<Range<i32> as Singleton>::singleton(4), Range::closed(4, 4));
  }

  #[test]
  fn range_set_operations() {
    let a = set(vec![(1, 5), (10, 20)]);
    let b = set(vec![(4, 12)]);
    assert_eq!(Intersection::intersection(&a, &b), set(vec![(4, 5), (10, 12)]));
    assert_eq!(Union::union(&a, &b), set(vec![(1, 20)]));
    assert_eq!(Difference::difference(&a, &Range::closed(4, 12)).as_ranges().collect::<Vec<_>>(),
      vec![Range::closed_open(1, 4), Range::open_closed(12, 20)]);
    assert_eq!(Intersection::intersection(&a, &Range::closed(0, 2)), set(vec![(1, 2)]));
    assert_eq!(Union::union(&a, &Range::closed(6, 9)).range_count(), 3);
    assert_eq!(Complement::complement(&Complement::complement(&a)), a);
    assert!(set(vec![(2, 3), (11, 12)]).is_subset(&a));
    assert!(!b.is_subset(&a));
    assert!(<ImmutableRangeSet<i32> as Empty>::empty().is_subset(&a));
    assert!(a.overlap(&b));
    assert!(a.is_disjoint(&set(vec![(6, 9), (21, 30)])));
    assert!(Contains::contains(&a, &15) && !Contains::contains(&a, &7));
    assert!(IsEmpty::is_empty(&<ImmutableRangeSet<i32> as Empty>::empty()));
    assert_eq!(<ImmutableRangeSet<i32> as Singleton>::singleton(7), set(vec![(7, 7)]));
  }

  #[test]
  fn as_set_operations() {
    let a = set(vec![(1, 2), (3, 4)]).as_set(Integers);
    let b = ImmutableRangeSet::of_range(Range::open(0, 5)).as_set(Integers);
    let c = set(vec![(3, 8)]).as_set(Integers);
    assert!(a.is_ok() && b.is_ok() && c.is_ok());
    if let (Ok(a), Ok(b), Ok(c)) = (a, b, c) {
      assert!(a.is_subset(&b) && b.is_subset(&a));
      assert!(!c.is_subset(&a));
      assert!(a.overlap(&c));
      assert!(a.is_disjoint(&set(vec![(5, 9)]).as_set(Integers).unwrap_or_else(|_| AsSet::empty())));
      assert_eq!(Cardinality::size(&a), 4);
      assert_eq!(values(&Intersection::intersection(&a, &c)), vec![3, 4]);
      assert_eq!(values(&Union::union(&a, &c)), vec![1, 2, 3, 4, 5, 6, 7, 8]);
      assert_eq!(values(&Difference::difference(&c, &b)), vec![5, 6, 7, 8]);
      assert!(Contains::contains(&c, &8));
      let empty: AsSet<i32, Integers> = Empty::empty();
      assert!(IsEmpty::is_empty(&empty));
      assert_eq!(Cardinality::size(&empty), 0);
      assert!(empty.is_subset(&a));
      assert!(!IsEmpty::is_empty(&a));
      // No integer lies in `(1..2)`.
      let gap = ImmutableRangeSet::of_range(Range::open(1, 2)).as_set(Integers);
      assert_eq!(gap.map(|v| IsEmpty::is_empty(&v)), Ok(true));
    }
  }
}
