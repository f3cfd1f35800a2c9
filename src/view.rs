// Copyright 2024 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Read-through views over borrowed slices and collections.
//!
//! A view never copies its backing store.
//! Every call re-reads the store, so the view's length and elements
//! are always those of the store at the time of the call.
//! Since a view holds a shared borrow,
//! the store can only change underneath it through interior mutability,
//! such as a slice of [`Cell`](core::cell::Cell)s:
//!
//! ```
//! use std::cell::Cell;
//! use wrapkit::{view::ArrayView, FixedList};
//!
//! let backing = [Cell::new('a'), Cell::new('b'), Cell::new('c')];
//! let view = ArrayView::new(&backing);
//! assert_eq!(view.len(), 3);
//! assert_eq!(view.get_at(1).unwrap().get(), 'b');
//!
//! backing[1].set('d');
//! assert_eq!(view.get_at(1).unwrap().get(), 'd');
//! ```
//!
//! A view can never outlive the store it borrows.

use core::iter::Map;

use crate::error::{Error, Result};
use crate::iter::{ArrayIter, ArrayListIter};
use crate::list::FixedList;

/// A read-only list view of a borrowed slice.
pub struct ArrayView<'a, T> {
    array: &'a [T],
}

impl<'a, T> ArrayView<'a, T> {
    /// Constructs a view of `array`
    #[inline]
    pub const fn new(array: &'a [T]) -> Self {
        Self { array }
    }

    /// Iterates over the view's elements in order.
    #[inline]
    pub fn iter(&self) -> ArrayIter<'a, T> {
        ArrayIter::new(self.array)
    }

    /// Returns a list iterator positioned before the first element.
    #[inline]
    pub fn list_iter(&self) -> ArrayListIter<'a, T> {
        ArrayListIter::new(self.array)
    }

    /// Returns a list iterator positioned before the element at `index`,
    /// where `index` may be anything from 0 up to and including the length.
    #[inline]
    pub fn list_iter_at(&self, index: usize) -> Result<ArrayListIter<'a, T>> {
        ArrayListIter::at(self.array, index)
    }
}

impl<T> Clone for ArrayView<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayView<'_, T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for ArrayView<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.array).finish()
    }
}

impl<T> FixedList<T> for ArrayView<'_, T> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        self.array
    }
}

impl<T: PartialEq> PartialEq for ArrayView<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.array == other.array
    }
}

impl<T: Eq> Eq for ArrayView<'_, T> {}

impl<T: PartialEq> PartialEq<[T]> for ArrayView<'_, T> {
    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        self.array == other
    }
}

impl<'a, T> IntoIterator for ArrayView<'a, T> {
    type Item = &'a T;

    type IntoIter = ArrayIter<'a, T>;

    #[inline]
    fn into_iter(self) -> ArrayIter<'a, T> {
        ArrayIter::new(self.array)
    }
}

impl<'a, T> IntoIterator for &ArrayView<'a, T> {
    type Item = &'a T;

    type IntoIter = ArrayIter<'a, T>;

    #[inline]
    fn into_iter(self) -> ArrayIter<'a, T> {
        ArrayIter::new(self.array)
    }
}

/// Returns a read-only list view of `array`.
#[inline]
pub const fn array_view<T>(array: &[T]) -> ArrayView<'_, T> {
    ArrayView::new(array)
}

/// A read-only view of a borrowed slice
/// which passes every element through a mapping function.
///
/// The mapper runs on every access and its results are never cached,
/// so reading the same position twice calls it twice.
pub struct MappedArrayView<'a, T, F> {
    array: &'a [T],
    mapper: F,
}

impl<'a, T, F> MappedArrayView<'a, T, F> {
    /// Constructs a view of `array` mapped through `mapper`
    #[inline]
    pub const fn new(array: &'a [T], mapper: F) -> Self {
        Self { array, mapper }
    }

    /// Returns the number of elements in the backing slice.
    #[inline]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Returns `true` if the backing slice is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Returns the mapped element at `index`.
    ///
    /// # Example
    /// ```
    /// use wrapkit::{view::MappedArrayView, Error};
    /// let words = ["one", "three"];
    /// let v = MappedArrayView::new(&words, |s: &&str| s.len());
    /// assert_eq!(v.get(1), Ok(5));
    /// assert_eq!(v.get(2), Err(Error::OutOfBounds { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn get<R>(&self, index: usize) -> Result<R>
    where
        F: Fn(&'a T) -> R,
    {
        let array: &'a [T] = self.array;
        Error::check_index(index, array.len()).map(|i| (self.mapper)(&array[i]))
    }

    /// Iterates over the mapped elements in order.
    #[inline]
    pub fn iter<R>(&self) -> Map<ArrayIter<'a, T>, &F>
    where
        F: Fn(&'a T) -> R,
    {
        ArrayIter::new(self.array).map(&self.mapper)
    }
}

/// Returns a view of `array` whose elements are passed through `mapper`.
#[inline]
pub const fn mapped_array_view<T, F>(array: &[T], mapper: F) -> MappedArrayView<'_, T, F> {
    MappedArrayView::new(array, mapper)
}

/// A read-only view of a borrowed collection
/// which passes every element through a mapping function.
///
/// Works with any collection whose borrowing iterator knows its length,
/// such as `Vec`, `VecDeque`, `HashSet` or `BTreeMap`.
/// As with [`MappedArrayView`], mapping happens on every access.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use wrapkit::view::MappedView;
///
/// let set = BTreeSet::from([1, 2, 3]);
/// let doubled = MappedView::new(&set, |i: &i32| i * 2);
/// assert_eq!(doubled.len(), 3);
/// assert_eq!(doubled.iter().collect::<Vec<_>>(), [2, 4, 6]);
/// ```
pub struct MappedView<'a, C: ?Sized, F> {
    collection: &'a C,
    mapper: F,
}

impl<'a, C, F> MappedView<'a, C, F>
where
    C: ?Sized,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::IntoIter: ExactSizeIterator,
{
    /// Constructs a view of `collection` mapped through `mapper`
    #[inline]
    pub const fn new(collection: &'a C, mapper: F) -> Self {
        Self { collection, mapper }
    }

    /// Returns the number of elements in the backing collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.collection.into_iter().len()
    }

    /// Returns `true` if the backing collection is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the mapped elements in the collection's own order.
    #[inline]
    pub fn iter<R>(&self) -> Map<<&'a C as IntoIterator>::IntoIter, &F>
    where
        F: Fn(<&'a C as IntoIterator>::Item) -> R,
    {
        self.collection.into_iter().map(&self.mapper)
    }
}

/// Returns a view of `collection` whose elements are passed through `mapper`.
#[inline]
pub fn mapped_view<'a, C, F>(collection: &'a C, mapper: F) -> MappedView<'a, C, F>
where
    C: ?Sized,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::IntoIter: ExactSizeIterator,
{
    MappedView::new(collection, mapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iter::ListIterator;
    use core::cell::Cell;

    #[test]
    fn array_view_test() {
        let a = ['a', 'b', 'c'];
        let v = array_view(&a);
        assert_eq!(v.len(), 3);
        assert_eq!(v.get_at(1), Ok(&'b'));
        assert_eq!(v.get_at(3), Err(Error::OutOfBounds { index: 3, len: 3 }));
        assert_eq!(v.iter().collect::<String>(), "abc");
        assert_eq!(v.to_vec(), a);
        assert!(v == a[..]);
        assert_eq!(format!("{v:?}"), "['a', 'b', 'c']");
    }

    #[test]
    fn array_view_read_through_test() {
        let backing = [Cell::new('a'), Cell::new('b'), Cell::new('c')];
        let v = ArrayView::new(&backing);
        let mut i = v.list_iter();
        assert_eq!(i.next().map(Cell::get), Some('a'));

        backing[1].set('d');
        assert_eq!(v.get_at(1).map(Cell::get), Ok('d'));
        assert_eq!(i.next().map(Cell::get), Some('d'));
        assert_eq!(i.previous().map(Cell::get), Some('d'));
    }

    #[test]
    fn array_view_mutation_test() {
        let a = [1, 2, 3];
        let mut v = ArrayView::new(&a);
        assert_eq!(v.set_at(0, 5), Err(Error::UnsupportedMutation("set")));
        assert_eq!(v.push(4), Err(Error::UnsupportedMutation("push")));
        assert_eq!(v.clear(), Err(Error::UnsupportedMutation("clear")));
        assert_eq!(v.list_iter().set(5), Err(Error::UnsupportedMutation("set")));
        assert_eq!(a, [1, 2, 3]);
    }

    #[test]
    fn list_iter_at_test() {
        let a = [1, 2, 3];
        let v = ArrayView::new(&a);
        let mut i = v.list_iter_at(2).unwrap();
        assert_eq!(i.next(), Some(&3));
        assert_eq!(i.next(), None);
        assert!(v.list_iter_at(3).is_ok());
        assert!(v.list_iter_at(4).is_err());
    }

    #[test]
    fn mapped_array_view_test() {
        let calls = Cell::new(0);
        let backing = [Cell::new(1), Cell::new(2)];
        let v = mapped_array_view(&backing, |c: &Cell<i32>| {
            calls.set(calls.get() + 1);
            c.get() * 10
        });

        assert_eq!(v.len(), 2);
        assert_eq!(v.get(0), Ok(10));
        assert_eq!(v.get(0), Ok(10));
        assert_eq!(calls.get(), 2);

        backing[0].set(3);
        assert_eq!(v.iter().collect::<Vec<_>>(), [30, 20]);
        assert_eq!(calls.get(), 4);
        assert_eq!(v.get(2), Err(Error::OutOfBounds { index: 2, len: 2 }));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn mapped_view_test() {
        let words = vec![String::from("a"), String::from("bcd")];
        let v = mapped_view(&words, String::len);
        assert_eq!(v.len(), 2);
        assert!(!v.is_empty());
        assert_eq!(v.iter().sum::<usize>(), 4);

        let empty: std::collections::HashMap<u8, u8> = Default::default();
        let v = mapped_view(&empty, |(k, _): (&u8, &u8)| *k);
        assert!(v.is_empty());
        assert_eq!(v.iter().count(), 0);
    }
}
