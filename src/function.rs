// Copyright 2024 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Function shapes the standard closure traits don't name directly.
//!
//! Each shape is blanket-implemented for matching closures,
//! so any closure of the right signature can be passed
//! wherever one is expected.

/// Something which hands out a reference to a value on demand.
///
/// Implemented by [`Wrapper`](crate::Wrapper)
/// and both memoizing suppliers.
pub trait Supplier<T: ?Sized> {
    /// Returns the supplied value.
    fn get(&self) -> &T;
}

/// A function of three arguments.
///
/// # Example
/// ```
/// use wrapkit::function::TriFunction;
///
/// fn fold3<F: TriFunction<i32, i32, i32, Output = i32>>(f: F) -> i32 {
///     f.apply(1, 2, 3)
/// }
///
/// assert_eq!(fold3(|a: i32, b: i32, c: i32| a * b * c), 6);
/// ```
pub trait TriFunction<A, B, C> {
    /// The function's return type
    type Output;

    /// Calls the function.
    fn apply(&self, a: A, b: B, c: C) -> Self::Output;
}

impl<A, B, C, R, F> TriFunction<A, B, C> for F
where
    F: Fn(A, B, C) -> R,
{
    type Output = R;

    #[inline]
    fn apply(&self, a: A, b: B, c: C) -> R {
        self(a, b, c)
    }
}

/// A consumer of one value which may fail.
pub trait ThrowingConsumer<T, E> {
    /// Consumes `t`.
    fn accept(&mut self, t: T) -> Result<(), E>;
}

impl<T, E, F> ThrowingConsumer<T, E> for F
where
    F: FnMut(T) -> Result<(), E>,
{
    #[inline]
    fn accept(&mut self, t: T) -> Result<(), E> {
        self(t)
    }
}

/// A consumer of two values which may fail.
pub trait ThrowingBiConsumer<T, U, E> {
    /// Consumes `t` and `u`.
    fn accept(&mut self, t: T, u: U) -> Result<(), E>;
}

impl<T, U, E, F> ThrowingBiConsumer<T, U, E> for F
where
    F: FnMut(T, U) -> Result<(), E>,
{
    #[inline]
    fn accept(&mut self, t: T, u: U) -> Result<(), E> {
        self(t, u)
    }
}

/// A function of two arguments which may fail.
pub trait ThrowingBiFunction<T, U, E> {
    /// The function's successful return type
    type Output;

    /// Calls the function.
    fn apply(&mut self, t: T, u: U) -> Result<Self::Output, E>;
}

impl<T, U, E, R, F> ThrowingBiFunction<T, U, E> for F
where
    F: FnMut(T, U) -> Result<R, E>,
{
    type Output = R;

    #[inline]
    fn apply(&mut self, t: T, u: U) -> Result<R, E> {
        self(t, u)
    }
}
