// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Binary search over sorted sequences with explicit policies for duplicate and missing keys.
//!
//! The sequence is sorted by a key projected from each element. When the searched key is present (possibly several times), a [`KeyPresentBehavior`](enum.KeyPresentBehavior.html) selects the index returned; when it is absent, a [`KeyAbsentBehavior`](enum.KeyAbsentBehavior.html) does.
//!
//! The result is an `isize`: `-1` stands for "no element" below the first one (`NextLower`, `LastBefore`), `len` for "no element" above the last one (`NextHigher`, `FirstAfter`), and `InvertedInsertionIndex` yields `!insertion_point`, always negative.
//!
//! # Examples
//!
//! ```rust
//! use rangeset::search::*;
//!
//! let keys = [1, 3, 3, 3, 7];
//! let first = binary_search(&keys, |k| k, &3, KeyPresentBehavior::FirstPresent, KeyAbsentBehavior::NextHigher);
//! let after = binary_search(&keys, |k| k, &3, KeyPresentBehavior::FirstAfter, KeyAbsentBehavior::NextHigher);
//! let lower = binary_search(&keys, |k| k, &5, KeyPresentBehavior::AnyPresent, KeyAbsentBehavior::NextLower);
//! assert_eq!((first, after, lower), (1, 4, 3));
//! ```

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPresentBehavior {
  /// Index of any element matching the key.
  AnyPresent,
  /// Index of the last element matching the key.
  LastPresent,
  /// Index of the first element matching the key.
  FirstPresent,
  /// Index of the first element greater than the key.
  FirstAfter,
  /// Index of the last element smaller than the key.
  LastBefore
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAbsentBehavior {
  /// Index of the greatest element smaller than the key, `-1` if there is none.
  NextLower,
  /// Index of the smallest element greater than the key, `len` if there is none.
  NextHigher,
  /// `!i` where `i` is the index at which the key would be inserted.
  InvertedInsertionIndex
}

impl KeyPresentBehavior
{
  // `found` matches the key and every index in `lower..=upper` is a candidate.
  fn result_index<F>(self, compare: &mut F, lower: usize, found: usize, upper: usize) -> isize where
   F: FnMut(usize) -> Ordering
  {
    match self {
      KeyPresentBehavior::AnyPresent => found as isize,
      KeyPresentBehavior::LastPresent => last_present(compare, found, upper) as isize,
      KeyPresentBehavior::FirstPresent => first_present(compare, lower, found) as isize,
      KeyPresentBehavior::FirstAfter => last_present(compare, found, upper) as isize + 1,
      KeyPresentBehavior::LastBefore => first_present(compare, lower, found) as isize - 1
    }
  }
}

impl KeyAbsentBehavior
{
  fn result_index(self, higher: usize) -> isize {
    match self {
      KeyAbsentBehavior::NextLower => higher as isize - 1,
      KeyAbsentBehavior::NextHigher => higher as isize,
      KeyAbsentBehavior::InvertedInsertionIndex => !(higher as isize)
    }
  }
}

fn last_present<F>(compare: &mut F, mut lower: usize, mut upper: usize) -> usize where
 F: FnMut(usize) -> Ordering
{
  // Invariant: `lower` matches the key, nothing above `upper` does.
  while lower < upper {
    let middle = lower + (upper - lower + 1) / 2;
    match compare(middle) {
      Ordering::Less => upper = middle - 1,
      _ => lower = middle
    }
  }
  lower
}

fn first_present<F>(compare: &mut F, mut lower: usize, mut upper: usize) -> usize where
 F: FnMut(usize) -> Ordering
{
  // Invariant: `upper` matches the key, nothing below `lower` does.
  while lower < upper {
    let middle = lower + (upper - lower) / 2;
    match compare(middle) {
      Ordering::Greater => lower = middle + 1,
      _ => upper = middle
    }
  }
  lower
}

/// Searches a random-access sequence of length `len`.
///
/// `compare(i)` compares the searched key to the key of the element at index `i`; the sequence must be sorted so that these comparisons go from `Greater` to `Equal` to `Less` as `i` increases.
pub fn binary_search_by<F>(len: usize, present: KeyPresentBehavior, absent: KeyAbsentBehavior, mut compare: F) -> isize where
 F: FnMut(usize) -> Ordering
{
  // Candidates lie in `lower..upper`.
  let mut lower = 0;
  let mut upper = len;
  while lower < upper {
    let middle = lower + (upper - lower) / 2;
    match compare(middle) {
      Ordering::Less => upper = middle,
      Ordering::Greater => lower = middle + 1,
      Ordering::Equal => return present.result_index(&mut compare, lower, middle, upper - 1)
    }
  }
  absent.result_index(lower)
}

/// Searches `list`, sorted by `key_fn`, for `key`.
pub fn binary_search<E, K, F>(list: &[E], key_fn: F, key: &K, present: KeyPresentBehavior, absent: KeyAbsentBehavior) -> isize where
 K: Ord + ?Sized,
 F: Fn(&E) -> &K
{
  binary_search_by(list.len(), present, absent, |i| key.cmp(key_fn(&list[i])))
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::KeyPresentBehavior::*;
  use super::KeyAbsentBehavior::*;

  fn search(list: &[i32], key: i32, present: KeyPresentBehavior, absent: KeyAbsentBehavior) -> isize {
    binary_search(list, |x| x, &key, present, absent)
  }

  const PRESENT: [KeyPresentBehavior; 5] = [AnyPresent, LastPresent, FirstPresent, FirstAfter, LastBefore];
  const ABSENT: [KeyAbsentBehavior; 3] = [NextLower, NextHigher, InvertedInsertionIndex];

  // Linear reference implementation.
  fn expected(list: &[i32], key: i32, present: KeyPresentBehavior, absent: KeyAbsentBehavior) -> Option<isize> {
    let first = list.iter().position(|&x| x == key);
    let last = list.iter().rposition(|&x| x == key);
    let insertion = list.iter().filter(|&&x| x < key).count() as isize;
    match (first, last) {
      (Some(first), Some(last)) => match present {
        // Any index of the run is accepted, checked separately.
        AnyPresent => None,
        LastPresent => Some(last as isize),
        FirstPresent => Some(first as isize),
        FirstAfter => Some(last as isize + 1),
        LastBefore => Some(first as isize - 1)
      },
      _ => Some(match absent {
        NextLower => insertion - 1,
        NextHigher => insertion,
        InvertedInsertionIndex => !insertion
      })
    }
  }

  #[test]
  fn every_policy_against_linear_scan() {
    let lists: Vec<Vec<i32>> = vec![
      vec![],
      vec![5],
      vec![1, 3, 5, 7],
      vec![2, 2, 2, 2],
      vec![1, 1, 2, 3, 3, 3, 3, 4, 9, 9],
      vec![0, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 8]
    ];
    for list in &lists {
      for key in -1..11 {
        for &present in PRESENT.iter() {
          for &absent in ABSENT.iter() {
            let result = search(list, key, present, absent);
            match expected(list, key, present, absent) {
              Some(index) => assert_eq!(result, index,
                "search of {} in {:?} with {:?}/{:?}", key, list, present, absent),
              None => assert_eq!(list[result as usize], key,
                "search of {} in {:?} with {:?}/{:?}", key, list, present, absent)
            }
          }
        }
      }
    }
  }

  #[test]
  fn sentinels() {
    let list = [10, 20, 30];
    assert_eq!(search(&list, 5, AnyPresent, NextLower), -1);
    assert_eq!(search(&list, 35, AnyPresent, NextHigher), 3);
    assert_eq!(search(&list, 5, AnyPresent, InvertedInsertionIndex), !0);
    assert_eq!(search(&list, 10, LastBefore, NextLower), -1);
    assert_eq!(search(&list, 30, FirstAfter, NextHigher), 3);
  }

  #[test]
  fn projected_keys() {
    let pairs = [(1, 'a'), (4, 'b'), (4, 'c'), (9, 'd')];
    let index = binary_search(&pairs, |p| &p.0, &4, LastPresent, NextHigher);
    assert_eq!(pairs[index as usize].1, 'c');
    let index = binary_search_by(pairs.len(), FirstPresent, NextHigher, |i| 4i32.cmp(&pairs[i].0));
    assert_eq!(pairs[index as usize].1, 'b');
  }

  #[test]
  fn logarithmic_comparisons() {
    let list: Vec<i32> = (0..1024).map(|x| x / 8).collect();
    for &present in PRESENT.iter() {
      let mut comparisons = 0;
      binary_search_by(list.len(), present, NextHigher, |i| { comparisons += 1; 64i32.cmp(&list[i]) });
      assert!(comparisons <= 2 * 11, "{:?} used {} comparisons", present, comparisons);
    }
  }
}
