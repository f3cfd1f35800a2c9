// Copyright 2024 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The list surface shared by [`Wrapper`](crate::Wrapper)
//! and [`ArrayView`](crate::view::ArrayView).

use crate::error::{Error, Result};

/// A list whose length can never change through its own interface.
///
/// Reads are bounds-checked and return [`Error::OutOfBounds`]
/// instead of panicking.
/// Every operation which would grow or shrink the list
/// fails with [`Error::UnsupportedMutation`]
/// and leaves the list untouched.
/// Element replacement through [`FixedList::set_at`] is also rejected
/// unless an implementation opts into it.
///
/// # Example
/// ```
/// use wrapkit::{Error, FixedList, Wrapper};
///
/// let mut w = Wrapper::of(1);
/// assert_eq!(w.push(2), Err(Error::UnsupportedMutation("push")));
/// assert_eq!(w.get_at(0), Ok(&1));
/// ```
pub trait FixedList<T> {
    /// Borrows the list's elements as a slice.
    fn as_slice(&self) -> &[T];

    /// Returns the number of elements, as of this call.
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    #[inline]
    fn get_at(&self, index: usize) -> Result<&T> {
        let slice = self.as_slice();
        Error::check_index(index, slice.len()).map(|i| &slice[i])
    }

    /// Replaces the element at `index` and returns the new element.
    ///
    /// Read-only lists reject this with [`Error::UnsupportedMutation`].
    fn set_at(&mut self, index: usize, value: T) -> Result<&T> {
        let _ = (index, value);
        Err(Error::UnsupportedMutation("set"))
    }

    /// Returns `true` if any element equals `value`.
    #[inline]
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    /// Returns `true` if every item of `values` is present in the list.
    fn contains_all<'v, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'v T>,
        T: PartialEq + 'v,
    {
        values.into_iter().all(|v| self.contains(v))
    }

    /// Returns the position of the first element equal to `value`.
    #[inline]
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|x| x == value)
    }

    /// Returns the position of the last element equal to `value`.
    #[inline]
    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().rposition(|x| x == value)
    }

    /// Copies the list's elements into a new `Vec`.
    #[inline]
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Always fails, since appending would change the list's length.
    fn push(&mut self, value: T) -> Result<()> {
        let _ = value;
        Err(Error::UnsupportedMutation("push"))
    }

    /// Always fails, since inserting would change the list's length.
    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let _ = (index, value);
        Err(Error::UnsupportedMutation("insert"))
    }

    /// Always fails, since removal would change the list's length.
    fn remove(&mut self, index: usize) -> Result<T> {
        let _ = index;
        Err(Error::UnsupportedMutation("remove"))
    }

    /// Always fails, since clearing would change the list's length.
    fn clear(&mut self) -> Result<()> {
        Err(Error::UnsupportedMutation("clear"))
    }
}
