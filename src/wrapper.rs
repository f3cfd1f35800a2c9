// Copyright 2024 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A mutable single-value box which is also a list of length one.

use crate::error::{Error, Result};
use crate::function::Supplier;
use crate::iter::{Singleton, SingletonListIter, SingletonListIterMut};
use crate::list::FixedList;

/// A mutable container for exactly one value.
///
/// Useful for getting a value out of a closure
/// or simulating pass-by-reference,
/// and also usable anywhere a one-element list is expected:
/// `Wrapper` dereferences to a slice of length 1,
/// implements [`FixedList`],
/// and compares and hashes exactly like the one-element slice
/// holding its value.
///
/// A wrapper which may be empty is a `Wrapper<Option<T>>`;
/// it still counts as one element when holding `None`.
///
/// # Example
/// ```
/// use wrapkit::Wrapper;
///
/// let mut total = Wrapper::of(0);
/// [1, 2, 3].iter().for_each(|i| {
///     total.apply(|t| t + i);
/// });
/// assert_eq!(total.get(), &6);
/// assert_eq!(total, [6]);
/// assert_eq!(total.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Wrapper<T> {
    value: T,
}

impl<T> Wrapper<T> {
    /// Constructs a new `Wrapper` holding `value`
    #[inline]
    pub const fn of(value: T) -> Self {
        Self { value }
    }

    /// Returns the wrapper's current value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns the wrapper's current value mutably.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the wrapper's value and returns the new value.
    ///
    /// # Example
    /// ```
    /// let mut w = wrapkit::Wrapper::of("old");
    /// assert_eq!(w.set("new"), &"new");
    /// assert_eq!(w.get(), &"new");
    /// ```
    #[inline]
    pub fn set(&mut self, value: T) -> &T {
        self.value = value;
        &self.value
    }

    /// Replaces the wrapper's value and returns the old one.
    #[inline]
    pub fn replace(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }

    /// Consumes the wrapper, returning its value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Returns a new wrapper holding the result of `f` applied to this value,
    /// leaving this wrapper unchanged.
    ///
    /// # Example
    /// ```
    /// use wrapkit::Wrapper;
    /// let w = Wrapper::of("x");
    /// assert_eq!(w.map(|s| s.len()), Wrapper::of(1));
    /// assert_eq!(w.get(), &"x");
    /// ```
    #[inline]
    pub fn map<U>(&self, f: impl FnOnce(&T) -> U) -> Wrapper<U> {
        Wrapper::of(f(&self.value))
    }

    /// Replaces this wrapper's value with the result of `f`
    /// applied to it, and returns the new value.
    #[inline]
    pub fn apply(&mut self, f: impl FnOnce(&T) -> T) -> &T {
        let value = f(&self.value);
        self.set(value)
    }

    /// Like [`Wrapper::apply`], but leaves the value unchanged
    /// if `f` fails.
    ///
    /// # Example
    /// ```
    /// let mut w = wrapkit::Wrapper::of(u8::MAX - 1);
    /// assert_eq!(w.try_apply(|v| v.checked_add(1).ok_or("overflow")), Ok(&u8::MAX));
    /// assert_eq!(w.try_apply(|v| v.checked_add(1).ok_or("overflow")), Err("overflow"));
    /// assert_eq!(w.get(), &u8::MAX);
    /// ```
    #[inline]
    pub fn try_apply<E>(&mut self, f: impl FnOnce(&T) -> Result<T, E>) -> Result<&T, E> {
        let value = f(&self.value)?;
        Ok(self.set(value))
    }

    /// Extracts a one-element slice holding the value.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        core::slice::from_ref(&self.value)
    }

    /// Extracts a mutable one-element slice holding the value.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        core::slice::from_mut(&mut self.value)
    }

    /// Returns a read-only list iterator over the value.
    #[inline]
    pub fn list_iter(&self) -> SingletonListIter<'_, T> {
        SingletonListIter::new(&self.value)
    }

    /// Returns a list iterator over the value
    /// whose `set` replaces the wrapper's value.
    ///
    /// # Example
    /// ```
    /// use wrapkit::{iter::ListIterator, Wrapper};
    /// let mut w = Wrapper::of(1);
    /// let mut i = w.list_iter_mut();
    /// assert_eq!(i.next(), Some(1));
    /// i.set(2).unwrap();
    /// assert_eq!(w.get(), &2);
    /// ```
    #[inline]
    pub fn list_iter_mut(&mut self) -> SingletonListIterMut<'_, T>
    where
        T: Clone,
    {
        SingletonListIterMut::new(&mut self.value)
    }
}

impl<T> Wrapper<Option<T>> {
    /// Constructs a new `Wrapper` holding `None`
    #[inline]
    pub const fn of_none() -> Self {
        Self { value: None }
    }

    /// Returns the value, or `None` if the wrapper holds `None`.
    ///
    /// # Example
    /// ```
    /// let mut w = wrapkit::Wrapper::of_none();
    /// assert_eq!(w.to_option(), None);
    /// w.set(Some(1));
    /// assert_eq!(w.to_option(), Some(&1));
    /// ```
    #[inline]
    pub fn to_option(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> FixedList<T> for Wrapper<T> {
    #[inline]
    fn as_slice(&self) -> &[T] {
        core::slice::from_ref(&self.value)
    }

    #[inline]
    fn len(&self) -> usize {
        1
    }

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn get_at(&self, index: usize) -> Result<&T> {
        Error::check_index(index, 1).map(|_| &self.value)
    }

    #[inline]
    fn set_at(&mut self, index: usize, value: T) -> Result<&T> {
        Error::check_index(index, 1)?;
        Ok(self.set(value))
    }
}

impl<T> Supplier<T> for Wrapper<T> {
    #[inline]
    fn get(&self) -> &T {
        &self.value
    }
}

// compares and hashes the same as the one-element slice holding its value

impl<T: PartialEq> PartialEq for Wrapper<T> {
    #[inline]
    fn eq(&self, other: &Wrapper<T>) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Wrapper<T> {}

impl<T: PartialEq> PartialEq<[T]> for Wrapper<T> {
    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Wrapper<T> {
    #[inline]
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Wrapper<T> {
    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Wrapper<T>> for [T] {
    #[inline]
    fn eq(&self, other: &Wrapper<T>) -> bool {
        self == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Wrapper<T>> for Vec<T> {
    #[inline]
    fn eq(&self, other: &Wrapper<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<Wrapper<T>> for [T; N] {
    #[inline]
    fn eq(&self, other: &Wrapper<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Ord> Ord for Wrapper<T> {
    #[inline]
    fn cmp(&self, other: &Wrapper<T>) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: PartialOrd> PartialOrd for Wrapper<T> {
    #[inline]
    fn partial_cmp(&self, other: &Wrapper<T>) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: core::hash::Hash> core::hash::Hash for Wrapper<T> {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, h: &mut H) {
        self.as_slice().hash(h)
    }
}

impl<T> core::borrow::Borrow<[T]> for Wrapper<T> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> core::borrow::BorrowMut<[T]> for Wrapper<T> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Wrapper<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Wrapper<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> core::ops::Deref for Wrapper<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> core::ops::DerefMut for Wrapper<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> IntoIterator for Wrapper<T> {
    type Item = T;

    type IntoIter = Singleton<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Singleton::new(self.value)
    }
}

impl<'t, T> IntoIterator for &'t Wrapper<T> {
    type Item = &'t T;

    type IntoIter = <&'t [T] as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'t, T> IntoIterator for &'t mut Wrapper<T> {
    type Item = &'t mut T;

    type IntoIter = <&'t mut [T] as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> From<T> for Wrapper<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::of(value)
    }
}

impl<T> From<Wrapper<T>> for Vec<T> {
    #[inline]
    fn from(w: Wrapper<T>) -> Self {
        vec![w.value]
    }
}

impl<T> TryFrom<Vec<T>> for Wrapper<T> {
    type Error = Vec<T>;

    /// Succeeds only for a `Vec` of exactly one element,
    /// returning the `Vec` unchanged otherwise.
    ///
    /// Since `From<T>` also builds a `Wrapper<Vec<T>>` from a `Vec<T>`,
    /// callers must name the element type.
    ///
    /// # Example
    /// ```
    /// use wrapkit::Wrapper;
    /// assert_eq!(Wrapper::<u8>::try_from(vec![1]), Ok(Wrapper::of(1)));
    /// assert_eq!(Wrapper::<u8>::try_from(vec![1, 2]), Err(vec![1, 2]));
    /// ```
    #[inline]
    fn try_from(mut v: Vec<T>) -> core::result::Result<Self, Self::Error> {
        match v.len() {
            1 => v.pop().map(Self::of).ok_or(v),
            _ => Err(v),
        }
    }
}
