// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors reported by range and range set operations.
//!
//! Every failure is local and recoverable: it names the rejected input and the reason, and no operation is partially applied before failing.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("range must not be empty, but was {range}")]
  EmptyRange { range: String },

  #[error("overlapping ranges not permitted but found {first} overlapping {second}")]
  OverlappingRanges { first: String, second: String },

  /// Structural mutation attempted on an immutable range set.
  #[error("unsupported operation `{operation}`: the range set is immutable")]
  Unsupported { operation: &'static str },

  #[error("no such element: {what}")]
  NoSuchElement { what: &'static str },

  #[error("illegal argument: {message}")]
  IllegalArgument { message: String },

  #[error("neither the discrete domain nor this range set are bounded below")]
  UnboundedBelow,

  #[error("neither the discrete domain nor this range set are bounded above")]
  UnboundedAbove,
}

impl Error
{
  pub fn unsupported(operation: &'static str) -> Error {
    Error::Unsupported { operation }
  }

  pub fn no_such_element(what: &'static str) -> Error {
    Error::NoSuchElement { what }
  }

  pub fn illegal_argument(message: impl Into<String>) -> Error {
    Error::IllegalArgument { message: message.into() }
  }
}
