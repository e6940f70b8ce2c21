// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Accumulates disjoint ranges and builds an [`ImmutableRangeSet`](../immutable_range_set/struct.ImmutableRangeSet.html).
//!
//! Ranges may be added in any order. Connected ranges such as `[1..3)` and `[3..5]` are merged when building, but ranges sharing at least one value are rejected: use `ImmutableRangeSet::union_of` to coalesce overlapping ranges instead.

use crate::error::{Error, Result};
use crate::immutable_range_set::ImmutableRangeSet;
use crate::range::Range;
use crate::range_set::RangeSet;
use log::trace;
use std::fmt;

#[derive(Clone, Debug)]
pub struct Builder<C> {
  ranges: Vec<Range<C>>
}

impl<C: Ord + Clone + fmt::Debug> Builder<C>
{
  pub fn new() -> Builder<C> {
    Builder { ranges: vec![] }
  }

  /// Adds `range`, fails if it is empty.
  pub fn add(&mut self, range: Range<C>) -> Result<&mut Builder<C>> {
    if range.is_empty() {
      return Err(Error::EmptyRange { range: format!("{:?}", range) });
    }
    self.ranges.push(range);
    Ok(self)
  }

  /// Adds every range of `ranges`, stops at the first empty one.
  pub fn add_all<I>(&mut self, ranges: I) -> Result<&mut Builder<C>> where
   I: IntoIterator<Item=Range<C>>
  {
    for range in ranges {
      self.add(range)?;
    }
    Ok(self)
  }

  pub fn add_range_set(&mut self, set: &dyn RangeSet<C>) -> Result<&mut Builder<C>> {
    self.add_all(set.ranges())
  }

  /// Adds the ranges accumulated by `other`.
  pub fn combine(&mut self, other: &Builder<C>) -> &mut Builder<C> {
    self.ranges.extend(other.ranges.iter().cloned());
    self
  }

  /// Sorts and merges the accumulated ranges. The builder is left untouched and can be reused.
  pub fn build(&self) -> Result<ImmutableRangeSet<C>> {
    let mut sorted = self.ranges.clone();
    sorted.sort();
    let mut merged: Vec<Range<C>> = Vec::with_capacity(sorted.len());
    for range in sorted {
      match merged.last_mut() {
        Some(last) if last.is_connected(&range) => {
          if last.overlaps(&range) {
            return Err(Error::OverlappingRanges {
              first: format!("{:?}", last),
              second: format!("{:?}", range)
            });
          }
          *last = last.span(&range);
        }
        _ => merged.push(range)
      }
    }
    trace!("built a range set of {} ranges from {} added ranges", merged.len(), self.ranges.len());
    Ok(ImmutableRangeSet::from_canonical(merged))
  }
}

impl<C: Ord + Clone + fmt::Debug> Default for Builder<C>
{
  fn default() -> Builder<C> {
    Builder::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn build(ranges: Vec<Range<i32>>) -> Result<Vec<Range<i32>>> {
    let mut builder = Builder::new();
    builder.add_all(ranges)?;
    builder.build().map(|set| set.as_ranges().collect())
  }

  fn overlapping(first: Range<i32>, second: Range<i32>) -> Error {
    Error::OverlappingRanges { first: format!("{:?}", first), second: format!("{:?}", second) }
  }

  #[test]
  fn merge_and_reject() {
    // The first number is the test id, then the added ranges and the expected outcome.
    let cases = vec![
      (1, vec![], Ok(vec![])),
      (2, vec![Range::closed(5, 7), Range::closed(1, 3)], Ok(vec![Range::closed(1, 3), Range::closed(5, 7)])),
      (3, vec![Range::closed_open(1, 5), Range::closed(5, 7)], Ok(vec![Range::closed(1, 7)])),
      (4, vec![Range::closed(5, 7), Range::closed_open(1, 5)], Ok(vec![Range::closed(1, 7)])),
      (5, vec![Range::closed(1, 5), Range::closed(5, 7)], Err(overlapping(Range::closed(1, 5), Range::closed(5, 7)))),
      (6, vec![Range::closed(3, 7), Range::closed(1, 5)], Err(overlapping(Range::closed(1, 5), Range::closed(3, 7)))),
      (7, vec![Range::open(1, 3), Range::open(3, 5)], Ok(vec![Range::open(1, 3), Range::open(3, 5)])),
      (8, vec![Range::less_than(0), Range::closed_open(0, 2), Range::at_least(2)], Ok(vec![Range::all()])),
      (9, vec![Range::closed(1, 9), Range::closed(2, 3)], Err(overlapping(Range::closed(1, 9), Range::closed(2, 3)))),
      (10, vec![Range::closed(1, 2), Range::closed(1, 2)], Err(overlapping(Range::closed(1, 2), Range::closed(1, 2)))),
      (11, vec![Range::closed_open(1, 2), Range::closed_open(2, 3), Range::closed_open(3, 4)], Ok(vec![Range::closed_open(1, 4)]))
    ];
    for (id, added, expected) in cases {
      assert_eq!(build(added), expected, "test #{} of build", id);
    }
  }

  #[test]
  fn empty_ranges_are_rejected() {
    let mut builder = Builder::new();
    assert_eq!(builder.add(Range::closed_open(3, 3)).err(),
      Some(Error::EmptyRange { range: "[3..3)".to_string() }));
    assert_eq!(builder.add(Range::closed(1, 2)).map(|_| ()), Ok(()));
    assert!(builder.add_all(vec![Range::closed(4, 5), Range::open_closed(6, 6)]).is_err());
    assert_eq!(builder.build().map(|set| set.range_count()), Ok(2));
  }

  #[test]
  fn universal_and_empty_results() {
    let all = Builder::new().add(Range::<i32>::all()).and_then(|b| b.build());
    assert!(all.map(|set| set.same_instance(&ImmutableRangeSet::all())).unwrap_or(false));
    let empty = Builder::<i32>::new().build();
    assert!(empty.map(|set| set.same_instance(&ImmutableRangeSet::of())).unwrap_or(false));
  }

  #[test]
  fn combine_and_range_sets() {
    let mut left = Builder::new();
    let mut right = Builder::new();
    assert!(left.add(Range::closed(1, 2)).is_ok());
    assert!(right.add(Range::closed(5, 6)).is_ok());
    left.combine(&right);
    let set = left.build();
    assert_eq!(set.as_ref().map(|s| s.as_ranges().collect::<Vec<_>>()),
      Ok(vec![Range::closed(1, 2), Range::closed(5, 6)]));
    let complement = set.map(|s| s.complement()).unwrap_or_default();
    let mut builder = Builder::new();
    assert!(builder.add_range_set(&complement).is_ok());
    assert_eq!(builder.build(), Ok(complement));
    // Reusing a builder keeps what was added before.
    assert!(right.add(Range::closed(8, 9)).is_ok());
    assert_eq!(right.build().map(|s| s.range_count()), Ok(2));
  }
}
