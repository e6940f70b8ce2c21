// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Enumeration of an ordered type.
//!
//! A discrete domain turns a range into a finite sequence of values, which is needed to view a range set as a set of elements (see [`AsSet`](../as_set/struct.AsSet.html)). The integer types are covered by [`Integers`](struct.Integers.html); implement the trait for other enumerable types.

use crate::error::{Error, Result};
use num_traits::{Bounded, CheckedAdd, CheckedSub, One, ToPrimitive};

pub trait DiscreteDomain<C>
{
  /// Successor of `value`, `None` if `value` is the greatest value of the domain.
  fn next(&self, value: &C) -> Option<C>;

  /// Predecessor of `value`, `None` if `value` is the smallest value of the domain.
  fn previous(&self, value: &C) -> Option<C>;

  /// Signed number of steps from `start` to `end`, saturated to the bounds of `i64`.
  fn distance(&self, start: &C, end: &C) -> i64;

  fn min_value(&self) -> Result<C> {
    Err(Error::no_such_element("the discrete domain has no minimum value"))
  }

  fn max_value(&self) -> Result<C> {
    Err(Error::no_such_element("the discrete domain has no maximum value"))
  }
}

/// The domain of a primitive integer type, bounded by its `min_value()` and `max_value()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Integers;

macro_rules! integer_domain_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl DiscreteDomain<$t> for Integers
    {
      fn next(&self, value: &$t) -> Option<$t> {
        CheckedAdd::checked_add(value, &<$t as One>::one())
      }

      fn previous(&self, value: &$t) -> Option<$t> {
        CheckedSub::checked_sub(value, &<$t as One>::one())
      }

      fn distance(&self, start: &$t, end: &$t) -> i64 {
        let distance = (*end as i128) - (*start as i128);
        distance.to_i64().unwrap_or(
          if distance < 0 { i64::min_value() } else { i64::max_value() })
      }

      fn min_value(&self) -> Result<$t> {
        Ok(<$t as Bounded>::min_value())
      }

      fn max_value(&self) -> Result<$t> {
        Ok(<$t as Bounded>::max_value())
      }
    }
  )*}
}

integer_domain_impl!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn successors() {
    assert_eq!(Integers.next(&4i32), Some(5));
    assert_eq!(Integers.previous(&4i32), Some(3));
    assert_eq!(Integers.next(&u8::max_value()), None);
    assert_eq!(Integers.previous(&0u8), None);
    assert_eq!(Integers.previous(&i64::min_value()), None);
  }

  #[test]
  fn distance() {
    let cases = vec![
      (1, 0i64, 0i64, 0i64),
      (2, 1, 10, 9),
      (3, 10, 1, -9),
      (4, i64::min_value(), i64::max_value(), i64::max_value()),
      (5, i64::max_value(), i64::min_value(), i64::min_value()),
      (6, -5, 5, 10)
    ];
    for (id, start, end, expected) in cases {
      assert_eq!(Integers.distance(&start, &end), expected, "test #{} of distance", id);
    }
    assert_eq!(Integers.distance(&0u64, &u64::max_value()), i64::max_value());
    assert_eq!(Integers.distance(&u8::min_value(), &u8::max_value()), 255);
  }

  #[test]
  fn bounds() {
    assert_eq!(DiscreteDomain::<i16>::min_value(&Integers), Ok(i16::min_value()));
    assert_eq!(DiscreteDomain::<u32>::max_value(&Integers), Ok(u32::max_value()));
  }

  struct Naturals;

  impl DiscreteDomain<u64> for Naturals {
    fn next(&self, value: &u64) -> Option<u64> { u64::checked_add(*value, 1) }
    fn previous(&self, value: &u64) -> Option<u64> { u64::checked_sub(*value, 1) }
    fn distance(&self, start: &u64, end: &u64) -> i64 { Integers.distance(start, end) }
  }

  #[test]
  fn unbounded_domain() {
    assert!(Naturals.min_value().is_err());
    assert_eq!(Naturals.max_value(), Err(Error::no_such_element("the discrete domain has no maximum value")));
  }
}
