// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Operations shared by every range set.
//!
//! A range set stores a canonical sequence of ranges: sorted, pairwise disconnected and non-empty. Connected ranges are always merged, so `[1..3)` and `[3..5]` are stored as `[1..5]`.

use crate::error::Result;
use crate::immutable_range_set::ImmutableRangeSet;
use crate::range::Range;

pub trait RangeSet<C: Ord + Clone>
{
  /// The stored range containing `value`, if any.
  fn range_containing(&self, value: &C) -> Option<Range<C>>;

  fn contains(&self, value: &C) -> bool {
    self.range_containing(value).is_some()
  }

  /// `true` if a stored range has a non-empty intersection with `range`.
  fn intersects(&self, range: &Range<C>) -> bool;

  /// `true` if a single stored range encloses `range`.
  fn encloses(&self, range: &Range<C>) -> bool;

  fn encloses_all(&self, other: &dyn RangeSet<C>) -> bool {
    other.ranges().all(|range| self.encloses(&range))
  }

  fn is_empty(&self) -> bool;

  /// Smallest range enclosing every stored range, fails on an empty set.
  fn span(&self) -> Result<Range<C>>;

  /// The canonical ranges in ascending order.
  fn ranges(&self) -> Box<dyn Iterator<Item=Range<C>> + '_>;

  fn complement(&self) -> Self where Self: Sized;

  fn add(&mut self, range: Range<C>) -> Result<()>;

  fn remove(&mut self, range: &Range<C>) -> Result<()>;

  fn add_all(&mut self, other: &dyn RangeSet<C>) -> Result<()> {
    for range in other.ranges() {
      self.add(range)?;
    }
    Ok(())
  }

  fn remove_all(&mut self, other: &dyn RangeSet<C>) -> Result<()> {
    for range in other.ranges() {
      self.remove(&range)?;
    }
    Ok(())
  }

  /// Downcast used by `ImmutableRangeSet::copy_of` to share an existing immutable set.
  fn as_immutable(&self) -> Option<&ImmutableRangeSet<C>> {
    None
  }
}
