// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library represents sets of values of a totally ordered type as a minimal sequence of disjoint ranges. A [range](range/index.html) has independently open, closed or unbounded endpoints, and an [immutable range set](immutable_range_set/index.html) keeps its ranges sorted and maximally merged so that membership and enclosure queries are binary searches. Complement and sub-range sets are views sharing the storage of the set they come from.
//!
//! The second part of this library connects range sets with enumerable types: a [discrete domain](discrete_domain/index.html) views a range set as the sorted set of its values ([as_set](as_set/index.html)), and the operations of `gcollections` are implemented in [set_operations](set_operations/index.html).
//!
//! # Examples
//!
//! ```rust
//! use rangeset::{ImmutableRangeSet, Integers, Range};
//!
//! let weekdays = ImmutableRangeSet::union_of(vec![Range::closed(1, 5), Range::closed(8, 12)]);
//! let holidays = ImmutableRangeSet::of_range(Range::closed(4, 9));
//! let working = weekdays.difference(&holidays);
//! assert_eq!(working.to_string(), "[[1..4), (9..12]]");
//! assert_eq!(working.as_set(Integers)?.iter().collect::<Vec<_>>(), vec![1, 2, 3, 10, 11, 12]);
//! # Ok::<(), rangeset::Error>(())
//! ```
//!
//! # References
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)

pub mod as_set;
pub mod builder;
pub mod cut;
pub mod discrete_domain;
pub mod error;
pub mod immutable_range_set;
pub mod range;
pub mod range_set;
pub mod search;
pub mod set_operations;
pub mod tree_range_set;

pub use crate::as_set::AsSet;
pub use crate::builder::Builder;
pub use crate::cut::Cut;
pub use crate::discrete_domain::{DiscreteDomain, Integers};
pub use crate::error::{Error, Result};
pub use crate::immutable_range_set::ImmutableRangeSet;
pub use crate::range::{BoundType, Range};
pub use crate::range_set::RangeSet;
pub use crate::search::{KeyAbsentBehavior, KeyPresentBehavior};
pub use crate::tree_range_set::TreeRangeSet;
