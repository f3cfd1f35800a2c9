// Copyright 2024 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Small iterators over nothing, a single element, or a borrowed slice.
//!
//! Forward-only iterators are plain [`Iterator`]s.
//! Bidirectional ones also implement [`ListIterator`],
//! a cursor which sits *between* elements
//! and can step in either direction.
//!
//! List iterators are read-only unless constructed as a `*Mut` variant,
//! and even those only permit replacing elements in place.

use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::error::{Error, Result};

/// Fallible stepping for any iterator.
pub trait IteratorExt: Iterator {
    /// Like `next`, but reports running out of elements as [`Error::Exhausted`].
    ///
    /// # Example
    /// ```
    /// use wrapkit::{iter::IteratorExt, Error};
    /// let mut i = wrapkit::iter::singleton("only");
    /// assert_eq!(i.try_next(), Ok("only"));
    /// assert_eq!(i.try_next(), Err(Error::Exhausted));
    /// ```
    #[inline]
    fn try_next(&mut self) -> Result<Self::Item> {
        self.next().ok_or(Error::Exhausted)
    }
}

impl<I: Iterator + ?Sized> IteratorExt for I {}

/// A bidirectional cursor over a fixed-length sequence of `T`.
///
/// The cursor starts before the element at [`ListIterator::next_index`].
/// `next` returns that element and moves the cursor forward;
/// [`ListIterator::previous`] returns the element before the cursor
/// and moves it back, so alternating the two
/// yields the same element over and over.
///
/// Structural changes are never supported.
/// [`ListIterator::set`] is supported only by the mutable variants.
pub trait ListIterator<T>: Iterator {
    /// Returns `true` if `next` would yield an element.
    fn has_next(&self) -> bool;

    /// Returns `true` if [`ListIterator::previous`] would yield an element.
    fn has_previous(&self) -> bool;

    /// Moves the cursor back and returns the element it passed over.
    fn previous(&mut self) -> Option<Self::Item>;

    /// Index of the element `next` would return.
    fn next_index(&self) -> usize;

    /// Index of the element [`ListIterator::previous`] would return,
    /// or `None` at the front.
    #[inline]
    fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    /// Like [`ListIterator::previous`], but reports reaching the front
    /// as [`Error::Exhausted`].
    #[inline]
    fn try_previous(&mut self) -> Result<Self::Item> {
        self.previous().ok_or(Error::Exhausted)
    }

    /// Replaces the element most recently returned by
    /// `next` or [`ListIterator::previous`].
    fn set(&mut self, value: T) -> Result<()> {
        let _ = value;
        Err(Error::UnsupportedMutation("set"))
    }

    /// Always fails, since inserting would change the sequence's length.
    fn add(&mut self, value: T) -> Result<()> {
        let _ = value;
        Err(Error::UnsupportedMutation("add"))
    }

    /// Always fails, since removal would change the sequence's length.
    fn remove(&mut self) -> Result<()> {
        Err(Error::UnsupportedMutation("remove"))
    }
}

/// An iterator which never yields anything.
///
/// Zero-sized, so every empty iterator is as good as a shared one.
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> Empty<T> {
    /// Constructs a new empty iterator
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Empty<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Empty<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> core::fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Iterator for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }
}

impl<T> ExactSizeIterator for Empty<T> {}

impl<T> FusedIterator for Empty<T> {}

impl<T> ListIterator<T> for Empty<T> {
    #[inline]
    fn has_next(&self) -> bool {
        false
    }

    #[inline]
    fn has_previous(&self) -> bool {
        false
    }

    #[inline]
    fn previous(&mut self) -> Option<T> {
        None
    }

    #[inline]
    fn next_index(&self) -> usize {
        0
    }
}

/// Returns an iterator which never yields anything.
#[inline]
pub const fn empty<T>() -> Empty<T> {
    Empty::new()
}

/// An owning iterator which yields exactly one element.
#[derive(Clone, Debug)]
pub struct Singleton<T> {
    element: Option<T>,
}

impl<T> Singleton<T> {
    /// Constructs an iterator over the single `element`
    #[inline]
    pub const fn new(element: T) -> Self {
        Self {
            element: Some(element),
        }
    }

    /// Returns `true` until the element has been taken.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.element.is_some()
    }
}

impl<T> Iterator for Singleton<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.element.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.element.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Singleton<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.element.take()
    }
}

impl<T> ExactSizeIterator for Singleton<T> {}

impl<T> FusedIterator for Singleton<T> {}

/// Returns an iterator which yields `element` once.
///
/// # Example
/// ```
/// let mut i = wrapkit::iter::singleton("only");
/// assert!(i.has_next());
/// assert_eq!(i.next(), Some("only"));
/// assert!(!i.has_next());
/// assert_eq!(i.next(), None);
/// ```
#[inline]
pub const fn singleton<T>(element: T) -> Singleton<T> {
    Singleton::new(element)
}

/// A read-only list iterator over a single borrowed element.
#[derive(Clone, Debug)]
pub struct SingletonListIter<'a, T> {
    element: &'a T,
    iterated: bool,
}

impl<'a, T> SingletonListIter<'a, T> {
    /// Constructs a list iterator positioned before `element`
    #[inline]
    pub const fn new(element: &'a T) -> Self {
        Self {
            element,
            iterated: false,
        }
    }
}

impl<'a, T> Iterator for SingletonListIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.iterated {
            None
        } else {
            self.iterated = true;
            Some(self.element)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(!self.iterated);
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for SingletonListIter<'_, T> {}

impl<'a, T> ListIterator<T> for SingletonListIter<'a, T> {
    #[inline]
    fn has_next(&self) -> bool {
        !self.iterated
    }

    #[inline]
    fn has_previous(&self) -> bool {
        self.iterated
    }

    #[inline]
    fn previous(&mut self) -> Option<&'a T> {
        if self.iterated {
            self.iterated = false;
            Some(self.element)
        } else {
            None
        }
    }

    #[inline]
    fn next_index(&self) -> usize {
        usize::from(self.iterated)
    }
}

/// A list iterator over a single mutably-borrowed element
/// which allows replacing that element.
///
/// Elements are yielded as clones,
/// since the iterator keeps the only mutable borrow
/// for its own [`ListIterator::set`].
#[derive(Debug)]
pub struct SingletonListIterMut<'a, T> {
    element: &'a mut T,
    iterated: bool,
    returned: bool,
}

impl<'a, T> SingletonListIterMut<'a, T> {
    /// Constructs a mutable list iterator positioned before `element`
    #[inline]
    pub fn new(element: &'a mut T) -> Self {
        Self {
            element,
            iterated: false,
            returned: false,
        }
    }
}

impl<T: Clone> Iterator for SingletonListIterMut<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.iterated {
            None
        } else {
            self.iterated = true;
            self.returned = true;
            Some(self.element.clone())
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(!self.iterated);
        (len, Some(len))
    }
}

impl<T: Clone> ExactSizeIterator for SingletonListIterMut<'_, T> {}

impl<T: Clone> ListIterator<T> for SingletonListIterMut<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        !self.iterated
    }

    #[inline]
    fn has_previous(&self) -> bool {
        self.iterated
    }

    #[inline]
    fn previous(&mut self) -> Option<T> {
        if self.iterated {
            self.iterated = false;
            self.returned = true;
            Some(self.element.clone())
        } else {
            None
        }
    }

    #[inline]
    fn next_index(&self) -> usize {
        usize::from(self.iterated)
    }

    fn set(&mut self, value: T) -> Result<()> {
        if self.returned {
            *self.element = value;
            Ok(())
        } else {
            Err(Error::PreconditionViolation(
                "set called before next or previous",
            ))
        }
    }
}

/// A forward iterator over a borrowed slice.
///
/// Every step is checked against the slice's length at the time of the call.
#[derive(Clone, Debug)]
pub struct ArrayIter<'a, T> {
    array: &'a [T],
    cursor: usize,
}

impl<'a, T> ArrayIter<'a, T> {
    /// Constructs an iterator over all of `array`
    #[inline]
    pub const fn new(array: &'a [T]) -> Self {
        Self { array, cursor: 0 }
    }

    /// Returns `true` if `next` would yield an element.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.cursor < self.array.len()
    }
}

impl<'a, T> Iterator for ArrayIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let item = self.array.get(self.cursor)?;
        self.cursor += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.array.len().saturating_sub(self.cursor);
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for ArrayIter<'_, T> {}

impl<T> FusedIterator for ArrayIter<'_, T> {}

/// A read-only list iterator over a borrowed slice.
#[derive(Clone, Debug)]
pub struct ArrayListIter<'a, T> {
    array: &'a [T],
    cursor: usize,
}

impl<'a, T> ArrayListIter<'a, T> {
    /// Constructs a list iterator positioned before the first element
    #[inline]
    pub const fn new(array: &'a [T]) -> Self {
        Self { array, cursor: 0 }
    }

    /// Constructs a list iterator positioned before `array[index]`.
    ///
    /// `index` may equal the slice's length,
    /// which positions the cursor after the last element.
    ///
    /// # Example
    /// ```
    /// use wrapkit::iter::{ArrayListIter, ListIterator};
    /// let mut i = ArrayListIter::at(&[1, 2, 3], 3).unwrap();
    /// assert_eq!(i.previous(), Some(&3));
    /// assert!(ArrayListIter::at(&[1, 2, 3], 4).is_err());
    /// ```
    #[inline]
    pub fn at(array: &'a [T], index: usize) -> Result<Self> {
        Error::check_index(index, array.len() + 1).map(|cursor| Self { array, cursor })
    }
}

impl<'a, T> Iterator for ArrayListIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let item = self.array.get(self.cursor)?;
        self.cursor += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.array.len().saturating_sub(self.cursor);
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for ArrayListIter<'_, T> {}

impl<'a, T> ListIterator<T> for ArrayListIter<'a, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.cursor < self.array.len()
    }

    #[inline]
    fn has_previous(&self) -> bool {
        self.cursor != 0
    }

    #[inline]
    fn previous(&mut self) -> Option<&'a T> {
        let index = self.cursor.checked_sub(1)?;
        let item = self.array.get(index)?;
        self.cursor = index;
        Some(item)
    }

    #[inline]
    fn next_index(&self) -> usize {
        self.cursor
    }
}

/// A list iterator over a mutably-borrowed slice
/// which allows replacing elements in place.
///
/// Elements are yielded as clones,
/// since the iterator keeps the only mutable borrow
/// for its own [`ListIterator::set`].
#[derive(Debug)]
pub struct ArrayListIterMut<'a, T> {
    array: &'a mut [T],
    cursor: usize,
    last: Option<usize>,
}

impl<'a, T> ArrayListIterMut<'a, T> {
    /// Constructs a mutable list iterator positioned before the first element
    #[inline]
    pub fn new(array: &'a mut [T]) -> Self {
        Self {
            array,
            cursor: 0,
            last: None,
        }
    }
}

impl<T: Clone> Iterator for ArrayListIterMut<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let item = self.array.get(self.cursor)?.clone();
        self.last = Some(self.cursor);
        self.cursor += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.array.len().saturating_sub(self.cursor);
        (len, Some(len))
    }
}

impl<T: Clone> ExactSizeIterator for ArrayListIterMut<'_, T> {}

impl<T: Clone> ListIterator<T> for ArrayListIterMut<'_, T> {
    #[inline]
    fn has_next(&self) -> bool {
        self.cursor < self.array.len()
    }

    #[inline]
    fn has_previous(&self) -> bool {
        self.cursor != 0
    }

    #[inline]
    fn previous(&mut self) -> Option<T> {
        let index = self.cursor.checked_sub(1)?;
        let item = self.array.get(index)?.clone();
        self.cursor = index;
        self.last = Some(index);
        Some(item)
    }

    #[inline]
    fn next_index(&self) -> usize {
        self.cursor
    }

    fn set(&mut self, value: T) -> Result<()> {
        let index = self.last.ok_or(Error::PreconditionViolation(
            "set called before next or previous",
        ))?;
        let len = self.array.len();
        let slot = self
            .array
            .get_mut(index)
            .ok_or(Error::OutOfBounds { index, len })?;
        *slot = value;
        Ok(())
    }
}

/// A read-only list iterator over a slice of any length.
///
/// Picks the cheapest representation for the slice it was built from,
/// but iterates the same `&T` regardless.
#[derive(Clone, Debug)]
pub enum SliceListIter<'a, T> {
    /// Over an empty slice
    Empty(Empty<&'a T>),
    /// Over a slice of exactly one element
    One(SingletonListIter<'a, T>),
    /// Over a slice of two or more elements
    Many(ArrayListIter<'a, T>),
}

impl<'a, T> Iterator for SliceListIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        match self {
            Self::Empty(i) => i.next(),
            Self::One(i) => i.next(),
            Self::Many(i) => i.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Empty(i) => i.size_hint(),
            Self::One(i) => i.size_hint(),
            Self::Many(i) => i.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for SliceListIter<'_, T> {}

impl<'a, T> ListIterator<T> for SliceListIter<'a, T> {
    #[inline]
    fn has_next(&self) -> bool {
        match self {
            Self::Empty(_) => false,
            Self::One(i) => ListIterator::<T>::has_next(i),
            Self::Many(i) => ListIterator::<T>::has_next(i),
        }
    }

    #[inline]
    fn has_previous(&self) -> bool {
        match self {
            Self::Empty(_) => false,
            Self::One(i) => ListIterator::<T>::has_previous(i),
            Self::Many(i) => ListIterator::<T>::has_previous(i),
        }
    }

    #[inline]
    fn previous(&mut self) -> Option<&'a T> {
        match self {
            Self::Empty(_) => None,
            Self::One(i) => ListIterator::<T>::previous(i),
            Self::Many(i) => ListIterator::<T>::previous(i),
        }
    }

    #[inline]
    fn next_index(&self) -> usize {
        match self {
            Self::Empty(_) => 0,
            Self::One(i) => ListIterator::<T>::next_index(i),
            Self::Many(i) => ListIterator::<T>::next_index(i),
        }
    }
}

/// Returns a read-only list iterator over `elements`.
///
/// # Example
/// ```
/// use wrapkit::iter::{list_iter_of, SliceListIter};
/// assert!(matches!(list_iter_of::<i32>(&[]), SliceListIter::Empty(_)));
/// assert!(matches!(list_iter_of(&[1]), SliceListIter::One(_)));
/// assert!(matches!(list_iter_of(&[1, 2]), SliceListIter::Many(_)));
/// ```
#[inline]
pub fn list_iter_of<T>(elements: &[T]) -> SliceListIter<'_, T> {
    match elements {
        [] => SliceListIter::Empty(Empty::new()),
        [one] => SliceListIter::One(SingletonListIter::new(one)),
        _ => SliceListIter::Many(ArrayListIter::new(elements)),
    }
}

/// Wraps another iterator, forwarding traversal
/// but rejecting any change to the underlying sequence.
#[derive(Clone, Debug)]
pub struct Unmodifiable<I>(I);

impl<I: Iterator> Iterator for Unmodifiable<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<I: ExactSizeIterator> ExactSizeIterator for Unmodifiable<I> {}

impl<T, I: ListIterator<T>> ListIterator<T> for Unmodifiable<I> {
    #[inline]
    fn has_next(&self) -> bool {
        self.0.has_next()
    }

    #[inline]
    fn has_previous(&self) -> bool {
        self.0.has_previous()
    }

    #[inline]
    fn previous(&mut self) -> Option<I::Item> {
        self.0.previous()
    }

    #[inline]
    fn next_index(&self) -> usize {
        self.0.next_index()
    }
}

/// Wraps `iter` so that its elements can be traversed but never replaced.
///
/// # Example
/// ```
/// use wrapkit::iter::{unmodifiable, ArrayListIterMut, ListIterator};
/// use wrapkit::Error;
///
/// let mut array = [1, 2];
/// let mut i = unmodifiable(ArrayListIterMut::new(&mut array));
/// assert_eq!(i.next(), Some(1));
/// assert_eq!(i.set(5), Err(Error::UnsupportedMutation("set")));
/// ```
#[inline]
pub fn unmodifiable<I: Iterator>(iter: I) -> Unmodifiable<I> {
    Unmodifiable(iter)
}

/// An iterable with nothing in it.
pub struct EmptyIterable<T>(PhantomData<fn() -> T>);

impl<T> Clone for EmptyIterable<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EmptyIterable<T> {}

impl<T> core::fmt::Debug for EmptyIterable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("EmptyIterable")
    }
}

impl<T> IntoIterator for EmptyIterable<T> {
    type Item = T;

    type IntoIter = Empty<T>;

    #[inline]
    fn into_iter(self) -> Empty<T> {
        Empty::new()
    }
}

impl<'a, T> IntoIterator for &'a EmptyIterable<T> {
    type Item = &'a T;

    type IntoIter = Empty<&'a T>;

    #[inline]
    fn into_iter(self) -> Empty<&'a T> {
        Empty::new()
    }
}

/// Returns an iterable with nothing in it.
#[inline]
pub const fn empty_iterable<T>() -> EmptyIterable<T> {
    EmptyIterable(PhantomData)
}

/// An iterable holding a single element,
/// which may be iterated by reference any number of times.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SingletonIterable<T>(T);

impl<T> IntoIterator for SingletonIterable<T> {
    type Item = T;

    type IntoIter = Singleton<T>;

    #[inline]
    fn into_iter(self) -> Singleton<T> {
        Singleton::new(self.0)
    }
}

impl<'a, T> IntoIterator for &'a SingletonIterable<T> {
    type Item = &'a T;

    type IntoIter = SingletonListIter<'a, T>;

    #[inline]
    fn into_iter(self) -> SingletonListIter<'a, T> {
        SingletonListIter::new(&self.0)
    }
}

/// Returns an iterable holding only `element`.
///
/// # Example
/// ```
/// let i = wrapkit::iter::singleton_iterable(7);
/// assert_eq!((&i).into_iter().count(), 1);
/// assert_eq!((&i).into_iter().count(), 1);
/// ```
#[inline]
pub const fn singleton_iterable<T>(element: T) -> SingletonIterable<T> {
    SingletonIterable(element)
}

/// Adds every element of `iterable` to `collection`.
///
/// # Example
/// ```
/// let mut v = vec![1];
/// wrapkit::iter::add_all([2, 3], &mut v);
/// assert_eq!(v, [1, 2, 3]);
/// ```
#[inline]
pub fn add_all<T, I, C>(iterable: I, collection: &mut C)
where
    I: IntoIterator<Item = T>,
    C: Extend<T> + ?Sized,
{
    collection.extend(iterable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_test() {
        let mut i = empty::<u8>();
        assert!(!i.has_next());
        assert!(!i.has_previous());
        assert_eq!(i.next(), None);
        assert_eq!(i.try_next(), Err(Error::Exhausted));
        assert_eq!(i.try_previous(), Err(Error::Exhausted));
        assert_eq!(i.previous_index(), None);
        assert_eq!(core::mem::size_of::<Empty<String>>(), 0);

        let e = empty_iterable::<u8>();
        assert_eq!((&e).into_iter().count(), 0);
        assert_eq!(e.into_iter().count(), 0);
    }

    #[test]
    fn singleton_test() {
        let mut i = singleton("only");
        assert!(i.has_next());
        assert_eq!(i.len(), 1);
        assert_eq!(i.try_next(), Ok("only"));
        assert!(!i.has_next());
        assert_eq!(i.try_next(), Err(Error::Exhausted));
        assert_eq!(i.next(), None);
    }

    #[test]
    fn singleton_list_iter_test() {
        let s = String::from("only");
        let mut i = SingletonListIter::new(&s);
        assert_eq!((i.next_index(), i.previous_index()), (0, None));
        assert!(!i.has_previous());
        assert_eq!(i.try_previous(), Err(Error::Exhausted));

        assert_eq!(i.next(), Some(&s));
        assert_eq!((i.next_index(), i.previous_index()), (1, Some(0)));
        assert!(!i.has_next());
        assert!(i.has_previous());
        assert_eq!(i.try_next(), Err(Error::Exhausted));

        assert_eq!(i.previous(), Some(&s));
        assert_eq!((i.next_index(), i.previous_index()), (0, None));
        assert_eq!(i.next(), Some(&s));

        assert_eq!(i.set("other".into()), Err(Error::UnsupportedMutation("set")));
        assert_eq!(i.add("other".into()), Err(Error::UnsupportedMutation("add")));
        assert_eq!(i.remove(), Err(Error::UnsupportedMutation("remove")));
    }

    #[test]
    fn singleton_list_iter_mut_test() {
        let mut value = 1;
        {
            let mut i = SingletonListIterMut::new(&mut value);
            assert_eq!(
                i.set(2),
                Err(Error::PreconditionViolation(
                    "set called before next or previous"
                ))
            );
            assert_eq!(i.next(), Some(1));
            assert_eq!(i.set(2), Ok(()));
            assert_eq!(i.previous(), Some(2));
            assert_eq!(i.add(3), Err(Error::UnsupportedMutation("add")));
            assert_eq!(i.remove(), Err(Error::UnsupportedMutation("remove")));
        }
        assert_eq!(value, 2);
    }

    #[test]
    fn array_iter_test() {
        let a = ['a', 'b', 'c'];
        let mut i = ArrayIter::new(&a);
        assert_eq!(i.len(), 3);
        assert_eq!(i.next(), Some(&'a'));
        assert_eq!(i.len(), 2);
        assert_eq!(i.by_ref().copied().collect::<String>(), "bc");
        assert!(!i.has_next());
        assert_eq!(i.try_next(), Err(Error::Exhausted));
    }

    #[test]
    fn array_list_iter_test() {
        let a = [1, 2, 3];
        let mut i = ArrayListIter::new(&a);
        assert_eq!(i.previous(), None);
        assert_eq!(i.next(), Some(&1));
        assert_eq!(i.next(), Some(&2));
        assert_eq!((i.next_index(), i.previous_index()), (2, Some(1)));
        assert_eq!(i.previous(), Some(&2));
        assert_eq!(i.previous(), Some(&1));
        assert!(!i.has_previous());
        assert_eq!(i.set(9), Err(Error::UnsupportedMutation("set")));

        let mut i = ArrayListIter::at(&a, 1).unwrap();
        assert_eq!(i.previous(), Some(&1));

        assert_eq!(
            ArrayListIter::at(&a, 4).err(),
            Some(Error::OutOfBounds { index: 4, len: 4 })
        );
    }

    #[test]
    fn array_list_iter_mut_test() {
        let mut a = [1, 2, 3];
        {
            let mut i = ArrayListIterMut::new(&mut a);
            assert!(i.set(0).is_err());
            assert_eq!(i.next(), Some(1));
            assert_eq!(i.next(), Some(2));
            i.set(20).unwrap();
            assert_eq!(i.previous(), Some(20));
            assert_eq!(i.previous(), Some(1));
            i.set(10).unwrap();
            assert_eq!(i.add(0), Err(Error::UnsupportedMutation("add")));
            assert_eq!(i.remove(), Err(Error::UnsupportedMutation("remove")));
        }
        assert_eq!(a, [10, 20, 3]);
    }

    #[test]
    fn slice_list_iter_test() {
        let mut i = list_iter_of(&[1, 2]);
        assert_eq!(i.next(), Some(&1));
        assert_eq!(i.previous(), Some(&1));
        assert_eq!(i.copied().sum::<i32>(), 3);

        let mut i = list_iter_of(&[5]);
        assert_eq!(i.next(), Some(&5));
        assert!(!i.has_next());
        assert_eq!(i.next_index(), 1);

        let mut i = list_iter_of::<i32>(&[]);
        assert!(!i.has_next());
        assert_eq!(i.try_next(), Err(Error::Exhausted));
    }

    #[test]
    fn add_all_test() {
        let mut set = std::collections::BTreeSet::from([3]);
        add_all(&singleton_iterable(1), &mut set);
        add_all(empty_iterable::<i32>(), &mut set);
        add_all(singleton(2), &mut set);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
    }
}
