// Copyright 2024 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Small building blocks for single values and fixed-length sequences.
//!
//! [`Wrapper`] holds exactly one mutable value,
//! and can also be treated as a read-only list of length 1
//! whose only element can be replaced in place.
//! Since it compares, orders and hashes like the one-element slice
//! it represents, a wrapper can be looked up in a set of slices
//! and vice versa.
//!
//! ```
//! use wrapkit::{FixedList, Wrapper, Error};
//!
//! let mut w = Wrapper::of(1);
//! assert_eq!(w.apply(|i| i + 1), &2);
//! assert_eq!(w.as_slice(), &[2]);
//! assert_eq!(w.set_at(0, 5), Ok(&5));
//! assert_eq!(w.push(6), Err(Error::UnsupportedMutation("push")));
//! ```
//!
//! The [`iter`] module provides list iterators which can walk
//! in both directions, along with empty and singleton iterators,
//! while the [`view`] module provides read-through views
//! over borrowed slices and collections.
//!
//! [`MemoizingSupplier`] and [`ConcurrentMemoizingSupplier`]
//! compute a value on first use and hand out the cached value thereafter,
//! the latter running its producer exactly once
//! no matter how many threads ask for it.
//!
//! Enabling the `serde` feature allows [`Wrapper`]
//! to be serialized as its value alone.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod function;
pub mod iter;
mod list;
mod memo;
pub mod view;
mod wrapper;

pub use error::{Error, Result};
pub use list::FixedList;
pub use memo::{ConcurrentMemoizingSupplier, MemoizingSupplier};
pub use wrapper::Wrapper;
