// Copyright 2024 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error kinds shared by every adapter in this crate.

/// Everything that can go wrong when using a wrapper, view or iterator.
///
/// None of these are transient: retrying the same call
/// against the same state fails the same way.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An index outside of a fixed-length sequence.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// The rejected index
        index: usize,
        /// The sequence's length at the time of the call
        len: usize,
    },

    /// `next` or `previous` called with nothing left in that direction.
    #[error("no element remains in this direction")]
    Exhausted,

    /// An operation which would change the length of a fixed-length
    /// sequence, or which a read-only adapter does not allow.
    #[error("unsupported operation `{0}` on a fixed-length or read-only sequence")]
    UnsupportedMutation(&'static str),

    /// A required argument was absent, or a call was made
    /// in a state which does not allow it.
    #[error("precondition violated: {0}")]
    PreconditionViolation(&'static str),
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
    /// Checks `index` against `len`, the way every indexed accessor does.
    ///
    /// # Example
    /// ```
    /// use wrapkit::Error;
    /// assert_eq!(Error::check_index(0, 1), Ok(0));
    /// assert_eq!(Error::check_index(1, 1), Err(Error::OutOfBounds { index: 1, len: 1 }));
    /// ```
    #[inline]
    pub fn check_index(index: usize, len: usize) -> Result<usize> {
        if index < len {
            Ok(index)
        } else {
            Err(Error::OutOfBounds { index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_test() {
        assert_eq!(
            Error::OutOfBounds { index: 3, len: 1 }.to_string(),
            "index 3 out of bounds for length 1"
        );
        assert_eq!(
            Error::UnsupportedMutation("push").to_string(),
            "unsupported operation `push` on a fixed-length or read-only sequence"
        );
        assert_eq!(
            Error::PreconditionViolation("producer is absent").to_string(),
            "precondition violated: producer is absent"
        );
    }
}
