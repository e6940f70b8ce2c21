// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Immutable set of values described by a canonical sequence of ranges.
//!
//! The set is stored as a sorted sequence of pairwise disconnected ranges, for example `[1..3] U (5..8)` is stored as `{[1..3], (5..8)}`. Queries are binary searches over this sequence (see [search](../search/index.html)), so `contains`, `intersects`, `encloses` and `range_containing` run in `O(log n)`.
//!
//! Sets are cheap to clone: the sequence is shared behind an `Arc`. Complement and sub-range sets are views computing their ranges on demand from the shared sequence, and `s.complement().complement()` is the very same instance as `s` (see `same_instance`).
//!
//! # Examples
//!
//! ```rust
//! use rangeset::{ImmutableRangeSet, Range};
//!
//! let set = ImmutableRangeSet::builder()
//!   .add(Range::closed(1, 3))?
//!   .add(Range::closed_open(10, 12))?
//!   .add(Range::open_closed(3, 5))?
//!   .build()?;
//! assert_eq!(set.to_string(), "[[1..5], [10..12)]");
//! assert!(set.contains(&4));
//! assert_eq!(set.complement().to_string(), "[(-∞..1), (5..10), [12..+∞)]");
//! assert!(set.complement().complement().same_instance(&set));
//! # Ok::<(), rangeset::Error>(())
//! ```

use crate::builder::Builder;
use crate::cut::Cut;
use crate::error::{Error, Result};
use crate::range::Range;
use crate::range_set::RangeSet;
use crate::search::binary_search_by;
use crate::search::KeyAbsentBehavior::*;
use crate::search::KeyPresentBehavior::*;
use crate::search::{KeyAbsentBehavior, KeyPresentBehavior};
use crate::tree_range_set::TreeRangeSet;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::sync::{Arc, OnceLock};

#[derive(Clone)]
pub struct ImmutableRangeSet<C> {
  repr: Repr<C>
}

#[derive(Clone)]
enum Repr<C> {
  Empty,
  All,
  // Never empty and never the single range `(-∞..+∞)`.
  Ranges(RangeList<C>)
}

/// Canonical sequence of ranges shared between a set, its complement and its sub-range sets.
struct RangeList<C> {
  node: Arc<Node<C>>,
  complemented: bool
}

struct Node<C> {
  source: Source<C>,
  complement: OnceLock<ComplementShape>
}

enum Source<C> {
  Stored(Box<[Range<C>]>),
  Slice(Slice<C>)
}

// Ranges `from..from+len` of `parent`, the first and last one being restricted to `restriction`.
struct Slice<C> {
  parent: RangeList<C>,
  from: usize,
  len: usize,
  restriction: Range<C>
}

#[derive(Clone, Copy)]
struct ComplementShape {
  bounded_below: bool,
  bounded_above: bool,
  len: usize
}

impl<C> Clone for RangeList<C>
{
  fn clone(&self) -> RangeList<C> {
    RangeList {
      node: Arc::clone(&self.node),
      complemented: self.complemented
    }
  }
}

impl<C: Ord + Clone> Source<C>
{
  fn len(&self) -> usize {
    match self {
      Source::Stored(ranges) => ranges.len(),
      Source::Slice(slice) => slice.len
    }
  }

  fn get(&self, index: usize) -> Range<C> {
    match self {
      Source::Stored(ranges) => ranges[index].clone(),
      Source::Slice(slice) => {
        assert!(index < slice.len, "index {} out of bounds of a slice of length {}", index, slice.len);
        let range = slice.parent.get(slice.from + index);
        if index == 0 || index == slice.len - 1 {
          range.intersect_connected(&slice.restriction)
        }
        else {
          range
        }
      }
    }
  }
}

impl<C: Ord + Clone> Node<C>
{
  fn complement_shape(&self) -> ComplementShape {
    *self.complement.get_or_init(|| {
      let len = self.source.len();
      let bounded_below = self.source.get(0).has_lower_bound();
      let bounded_above = self.source.get(len - 1).has_upper_bound();
      ComplementShape {
        bounded_below,
        bounded_above,
        len: len - 1 + bounded_below as usize + bounded_above as usize
      }
    })
  }
}

impl<C: Ord + Clone> RangeList<C>
{
  fn new(source: Source<C>) -> RangeList<C> {
    RangeList {
      node: Arc::new(Node { source, complement: OnceLock::new() }),
      complemented: false
    }
  }

  fn len(&self) -> usize {
    if self.complemented {
      self.node.complement_shape().len
    }
    else {
      self.node.source.len()
    }
  }

  fn get(&self, index: usize) -> Range<C> {
    if !self.complemented {
      return self.node.source.get(index);
    }
    let shape = self.node.complement_shape();
    assert!(index < shape.len, "index {} out of bounds of a complement of length {}", index, shape.len);
    let positive = &self.node.source;
    let lower =
      if !shape.bounded_below { positive.get(index).upper_bound().clone() }
      else if index == 0 { Cut::BelowAll }
      else { positive.get(index - 1).upper_bound().clone() };
    let upper =
      if shape.bounded_above && index == shape.len - 1 { Cut::AboveAll }
      else { positive.get(index + (!shape.bounded_below) as usize).lower_bound().clone() };
    Range::create(lower, upper)
  }

  fn first(&self) -> Range<C> {
    self.get(0)
  }

  fn last(&self) -> Range<C> {
    self.get(self.len() - 1)
  }

  fn span(&self) -> Range<C> {
    Range::create(self.first().lower_bound().clone(), self.last().upper_bound().clone())
  }

  fn complement(&self) -> RangeList<C> {
    RangeList {
      node: Arc::clone(&self.node),
      complemented: !self.complemented
    }
  }

  fn same_instance(&self, other: &RangeList<C>) -> bool {
    Arc::ptr_eq(&self.node, &other.node) && self.complemented == other.complemented
  }

  fn is_partial_view(&self) -> bool {
    self.complemented || match self.node.source {
      Source::Slice(_) => true,
      Source::Stored(_) => false
    }
  }

  fn search<F>(&self, key: &Cut<C>, bound: F, present: KeyPresentBehavior, absent: KeyAbsentBehavior) -> isize where
   F: Fn(&Range<C>) -> &Cut<C>
  {
    binary_search_by(self.len(), present, absent, |i| key.cmp(bound(&self.get(i))))
  }

  fn overlaps_at(&self, index: isize, range: &Range<C>) -> bool {
    index >= 0 && (index as usize) < self.len() && self.get(index as usize).overlaps(range)
  }

  fn intersects(&self, range: &Range<C>) -> bool {
    let ceiling = self.search(range.lower_bound(), Range::lower_bound, AnyPresent, NextHigher);
    self.overlaps_at(ceiling, range) || self.overlaps_at(ceiling - 1, range)
  }

  fn encloses(&self, range: &Range<C>) -> bool {
    let index = self.search(range.lower_bound(), Range::lower_bound, AnyPresent, NextLower);
    index != -1 && self.get(index as usize).encloses(range)
  }

  fn range_containing(&self, value: &C) -> Option<Range<C>> {
    let index = self.search(&Cut::BelowValue(value.clone()), Range::lower_bound, AnyPresent, NextLower);
    if index == -1 {
      None
    }
    else {
      Some(self.get(index as usize)).filter(|range| range.contains(value))
    }
  }

  /// Non-empty intersections of `range` with the stored ranges, `None` if there are none.
  fn intersect_ranges(&self, range: &Range<C>) -> Option<RangeList<C>> {
    if range.is_empty() {
      return None;
    }
    let from =
      if range.has_lower_bound() {
        self.search(range.lower_bound(), Range::upper_bound, FirstAfter, NextHigher) as usize
      }
      else { 0 };
    let to =
      if range.has_upper_bound() {
        self.search(range.upper_bound(), Range::lower_bound, FirstPresent, NextHigher) as usize
      }
      else { self.len() };
    let len = to.saturating_sub(from);
    if len == 0 {
      None
    }
    else if self.is_partial_view() {
      // Slices only sit over stored ranges, so that nested views keep a constant access cost.
      let stored: Vec<Range<C>> = (from..to).map(|i| self.get(i)).collect();
      Some(RangeList::new(Source::Slice(Slice {
        parent: RangeList::new(Source::Stored(stored.into_boxed_slice())),
        from: 0,
        len,
        restriction: range.clone()
      })))
    }
    else {
      Some(RangeList::new(Source::Slice(Slice {
        parent: self.clone(),
        from,
        len,
        restriction: range.clone()
      })))
    }
  }

  #[cfg(test)]
  fn view_depth(&self) -> usize {
    let source_depth = match &self.node.source {
      Source::Stored(_) => 0,
      Source::Slice(slice) => 1 + slice.parent.view_depth()
    };
    source_depth + self.complemented as usize
  }
}

impl<C> ImmutableRangeSet<C>
{
  /// The empty range set.
  pub fn of() -> ImmutableRangeSet<C> {
    ImmutableRangeSet { repr: Repr::Empty }
  }

  /// The range set containing every value, `{(-∞..+∞)}`.
  pub fn all() -> ImmutableRangeSet<C> {
    ImmutableRangeSet { repr: Repr::All }
  }

  pub fn is_empty(&self) -> bool {
    match self.repr {
      Repr::Empty => true,
      _ => false
    }
  }

  pub fn is_all(&self) -> bool {
    match self.repr {
      Repr::All => true,
      _ => false
    }
  }

  /// `true` if both sets are the same instance: the same singleton, or views over the same shared sequence with the same polarity.
  pub fn same_instance(&self, other: &ImmutableRangeSet<C>) -> bool where
   C: Ord + Clone
  {
    match (&self.repr, &other.repr) {
      (Repr::Empty, Repr::Empty) | (Repr::All, Repr::All) => true,
      (Repr::Ranges(a), Repr::Ranges(b)) => a.same_instance(b),
      _ => false
    }
  }
}

impl<C: Ord + Clone> ImmutableRangeSet<C>
{
  pub fn of_range(range: Range<C>) -> ImmutableRangeSet<C> {
    if range.is_empty() {
      ImmutableRangeSet::of()
    }
    else if range.is_all() {
      ImmutableRangeSet::all()
    }
    else {
      ImmutableRangeSet::from_list(RangeList::new(Source::Stored(vec![range].into_boxed_slice())))
    }
  }

  /// `ranges` must be canonical: sorted, non-empty and pairwise disconnected.
  pub(crate) fn from_canonical(ranges: Vec<Range<C>>) -> ImmutableRangeSet<C> {
    if ranges.is_empty() {
      ImmutableRangeSet::of()
    }
    else if ranges.len() == 1 && ranges[0].is_all() {
      ImmutableRangeSet::all()
    }
    else {
      ImmutableRangeSet::from_list(RangeList::new(Source::Stored(ranges.into_boxed_slice())))
    }
  }

  fn from_list(list: RangeList<C>) -> ImmutableRangeSet<C> {
    ImmutableRangeSet { repr: Repr::Ranges(list) }
  }

  /// Immutable copy of `set`. An immutable set which is not a partial view is shared rather than copied.
  pub fn copy_of<S>(set: &S) -> ImmutableRangeSet<C> where
   S: RangeSet<C> + ?Sized
  {
    if set.is_empty() {
      return ImmutableRangeSet::of();
    }
    if set.encloses(&Range::all()) {
      return ImmutableRangeSet::all();
    }
    if let Some(immutable) = set.as_immutable() {
      if !immutable.is_partial_view() {
        return immutable.clone();
      }
    }
    ImmutableRangeSet::from_canonical(set.ranges().collect())
  }

  /// Set of the disjoint `ranges`; connected ranges are merged but overlapping or empty ranges are rejected.
  pub fn copy_of_ranges<I>(ranges: I) -> Result<ImmutableRangeSet<C>> where
   I: IntoIterator<Item=Range<C>>,
   C: fmt::Debug
  {
    let mut builder = Builder::new();
    builder.add_all(ranges)?;
    builder.build()
  }

  /// Union of `ranges`: the smallest set enclosing each of them. Overlapping ranges are coalesced and empty ranges ignored.
  pub fn union_of<I>(ranges: I) -> ImmutableRangeSet<C> where
   I: IntoIterator<Item=Range<C>>
  {
    ImmutableRangeSet::copy_of(&TreeRangeSet::create(ranges))
  }

  pub fn builder() -> Builder<C> where
   C: fmt::Debug
  {
    Builder::new()
  }

  /// Number of ranges in the canonical sequence.
  pub fn range_count(&self) -> usize {
    match &self.repr {
      Repr::Empty => 0,
      Repr::All => 1,
      Repr::Ranges(list) => list.len()
    }
  }

  fn range_at(&self, index: usize) -> Range<C> {
    match &self.repr {
      Repr::Ranges(list) => list.get(index),
      Repr::All => Range::all(),
      Repr::Empty => panic!("no range at index {} of an empty range set", index)
    }
  }

  pub fn intersects(&self, range: &Range<C>) -> bool {
    match &self.repr {
      Repr::Empty => false,
      Repr::All => !range.is_empty(),
      Repr::Ranges(list) => list.intersects(range)
    }
  }

  pub fn encloses(&self, range: &Range<C>) -> bool {
    match &self.repr {
      Repr::Empty => false,
      Repr::All => true,
      Repr::Ranges(list) => list.encloses(range)
    }
  }

  pub fn encloses_all(&self, other: &dyn RangeSet<C>) -> bool {
    other.ranges().all(|range| self.encloses(&range))
  }

  pub fn range_containing(&self, value: &C) -> Option<Range<C>> {
    match &self.repr {
      Repr::Empty => None,
      Repr::All => Some(Range::all()),
      Repr::Ranges(list) => list.range_containing(value)
    }
  }

  pub fn contains(&self, value: &C) -> bool {
    self.range_containing(value).is_some()
  }

  pub fn span(&self) -> Result<Range<C>> {
    match &self.repr {
      Repr::Empty => Err(Error::no_such_element("an empty range set has no span")),
      Repr::All => Ok(Range::all()),
      Repr::Ranges(list) => Ok(list.span())
    }
  }

  /// The canonical ranges in ascending order, see `as_descending_ranges` for the reverse.
  pub fn as_ranges(&self) -> Ranges<'_, C> {
    Ranges {
      set: self,
      front: 0,
      back: self.range_count()
    }
  }

  pub fn as_descending_ranges(&self) -> std::iter::Rev<Ranges<'_, C>> {
    self.as_ranges().rev()
  }

  /// Set of the values not contained in this set. The result is computed on demand and shares this set's sequence.
  pub fn complement(&self) -> ImmutableRangeSet<C> {
    match &self.repr {
      Repr::Empty => ImmutableRangeSet::all(),
      Repr::All => ImmutableRangeSet::of(),
      Repr::Ranges(list) => ImmutableRangeSet::from_list(list.complement())
    }
  }

  pub fn union<S>(&self, other: &S) -> ImmutableRangeSet<C> where
   S: RangeSet<C> + ?Sized
  {
    ImmutableRangeSet::union_of(self.as_ranges().chain(other.ranges()))
  }

  pub fn intersection<S>(&self, other: &S) -> ImmutableRangeSet<C> where
   S: RangeSet<C>
  {
    let mut copy = TreeRangeSet::create(self.as_ranges());
    copy.remove_ranges(other.complement().ranges());
    ImmutableRangeSet::copy_of(&copy)
  }

  pub fn difference<S>(&self, other: &S) -> ImmutableRangeSet<C> where
   S: RangeSet<C> + ?Sized
  {
    let mut copy = TreeRangeSet::create(self.as_ranges());
    copy.remove_ranges(other.ranges());
    ImmutableRangeSet::copy_of(&copy)
  }

  /// View of the intersection of this set with `range`.
  ///
  /// Returns this very instance when `range` encloses the span of the set.
  pub fn sub_range_set(&self, range: &Range<C>) -> ImmutableRangeSet<C> {
    match &self.repr {
      Repr::Empty => ImmutableRangeSet::of(),
      Repr::All => ImmutableRangeSet::of_range(range.clone()),
      Repr::Ranges(list) => {
        let span = list.span();
        if range.encloses(&span) {
          self.clone()
        }
        else if range.is_connected(&span) {
          list.intersect_ranges(range)
            .map_or_else(ImmutableRangeSet::of, ImmutableRangeSet::from_list)
        }
        else {
          ImmutableRangeSet::of()
        }
      }
    }
  }

  /// `true` if the ranges are computed from another sequence (complement or sub-range views).
  /// `copy_of` materializes such sets instead of sharing them.
  pub fn is_partial_view(&self) -> bool {
    match &self.repr {
      Repr::Ranges(list) => list.is_partial_view(),
      _ => false
    }
  }
}

/// Iterator over the ranges of an [`ImmutableRangeSet`](struct.ImmutableRangeSet.html).
pub struct Ranges<'a, C> {
  set: &'a ImmutableRangeSet<C>,
  front: usize,
  back: usize
}

impl<'a, C: Ord + Clone> Iterator for Ranges<'a, C>
{
  type Item = Range<C>;

  fn next(&mut self) -> Option<Range<C>> {
    if self.front < self.back {
      self.front += 1;
      Some(self.set.range_at(self.front - 1))
    }
    else {
      None
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.back - self.front;
    (len, Some(len))
  }
}

impl<'a, C: Ord + Clone> DoubleEndedIterator for Ranges<'a, C>
{
  fn next_back(&mut self) -> Option<Range<C>> {
    if self.front < self.back {
      self.back -= 1;
      Some(self.set.range_at(self.back))
    }
    else {
      None
    }
  }
}

impl<'a, C: Ord + Clone> ExactSizeIterator for Ranges<'a, C> {}

impl<'a, C: Ord + Clone> IntoIterator for &'a ImmutableRangeSet<C>
{
  type Item = Range<C>;
  type IntoIter = Ranges<'a, C>;

  fn into_iter(self) -> Ranges<'a, C> {
    self.as_ranges()
  }
}

impl<C: Ord + Clone> RangeSet<C> for ImmutableRangeSet<C>
{
  fn range_containing(&self, value: &C) -> Option<Range<C>> {
    ImmutableRangeSet::range_containing(self, value)
  }

  fn intersects(&self, range: &Range<C>) -> bool {
    ImmutableRangeSet::intersects(self, range)
  }

  fn encloses(&self, range: &Range<C>) -> bool {
    ImmutableRangeSet::encloses(self, range)
  }

  fn is_empty(&self) -> bool {
    ImmutableRangeSet::is_empty(self)
  }

  fn span(&self) -> Result<Range<C>> {
    ImmutableRangeSet::span(self)
  }

  fn ranges(&self) -> Box<dyn Iterator<Item=Range<C>> + '_> {
    Box::new(self.as_ranges())
  }

  fn complement(&self) -> ImmutableRangeSet<C> {
    ImmutableRangeSet::complement(self)
  }

  fn add(&mut self, _range: Range<C>) -> Result<()> {
    Err(Error::unsupported("add"))
  }

  fn remove(&mut self, _range: &Range<C>) -> Result<()> {
    Err(Error::unsupported("remove"))
  }

  fn add_all(&mut self, _other: &dyn RangeSet<C>) -> Result<()> {
    Err(Error::unsupported("add_all"))
  }

  fn remove_all(&mut self, _other: &dyn RangeSet<C>) -> Result<()> {
    Err(Error::unsupported("remove_all"))
  }

  fn as_immutable(&self) -> Option<&ImmutableRangeSet<C>> {
    Some(self)
  }
}

impl<C> Default for ImmutableRangeSet<C>
{
  fn default() -> ImmutableRangeSet<C> {
    ImmutableRangeSet::of()
  }
}

impl<C: Ord + Clone> PartialEq for ImmutableRangeSet<C>
{
  fn eq(&self, other: &ImmutableRangeSet<C>) -> bool {
    self.same_instance(other) || self.as_ranges().eq(other.as_ranges())
  }
}

impl<C: Ord + Clone> Eq for ImmutableRangeSet<C> {}

impl<C: Ord + Clone + Hash> Hash for ImmutableRangeSet<C>
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write_usize(self.range_count());
    for range in self.as_ranges() {
      range.hash(state);
    }
  }
}

/// Union of the ranges, as `union_of`.
impl<C: Ord + Clone> FromIterator<Range<C>> for ImmutableRangeSet<C>
{
  fn from_iter<I: IntoIterator<Item=Range<C>>>(iter: I) -> ImmutableRangeSet<C> {
    ImmutableRangeSet::union_of(iter)
  }
}

impl<C: Ord + Clone + fmt::Debug> fmt::Debug for ImmutableRangeSet<C>
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_list().entries(self.as_ranges()).finish()
  }
}

impl<C: Ord + Clone + fmt::Display> fmt::Display for ImmutableRangeSet<C>
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("[")?;
    for (i, range) in self.as_ranges().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      write!(f, "{}", range)?;
    }
    f.write_str("]")
  }
}

/// Only the canonical sequence is written.
impl<C: Ord + Clone + Serialize> Serialize for ImmutableRangeSet<C>
{
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where
   S: Serializer
  {
    serializer.collect_seq(self.as_ranges())
  }
}

/// The sequence is validated and merged again, the empty and universal sets come back as the singletons.
impl<'de, C> Deserialize<'de> for ImmutableRangeSet<C> where
 C: Ord + Clone + fmt::Debug + Deserialize<'de>
{
  fn deserialize<D>(deserializer: D) -> std::result::Result<ImmutableRangeSet<C>, D::Error> where
   D: Deserializer<'de>
  {
    let ranges = Vec::<Range<C>>::deserialize(deserializer)?;
    ImmutableRangeSet::copy_of_ranges(ranges).map_err(de::Error::custom)
  }
}
