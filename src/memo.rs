// Copyright 2024 Brian Langenberger
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Suppliers which run their producer once and cache the result.
//!
//! Both variants share the same contract:
//! the first `get` runs the producer and caches whatever it returns,
//! including `None`; every later `get` returns the cached value.
//! [`MemoizingSupplier`] is for use by a single thread,
//! while [`ConcurrentMemoizingSupplier`] may be shared between threads
//! and still runs its producer exactly once.
//!
//! A producer which panics is not retried.
//! The panic propagates to the caller of `get`,
//! and every later `get` panics as well,
//! since the producer was consumed by the failed attempt.

use std::cell::{Cell, OnceCell};
use std::sync::{Mutex, OnceLock, PoisonError};

use crate::error::Error;
use crate::function::Supplier;

const PRODUCER_FAILED: &str = "memoizing supplier's producer panicked during an earlier evaluation";

const PRODUCER_REENTERED: &str = "memoizing supplier's producer called `get` on its own supplier";

// clears the running flag however the producer exits
struct Running<'a>(&'a Cell<bool>);

impl Drop for Running<'_> {
    #[inline]
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// A lazily-evaluated value for use by a single thread.
///
/// This type is not `Sync`, so it cannot be shared between threads
/// in the first place.
///
/// # Example
/// ```
/// use wrapkit::MemoizingSupplier;
///
/// let s = MemoizingSupplier::new(|| vec![1, 2, 3]);
/// assert!(!s.is_evaluated());
/// assert_eq!(s.get(), &[1, 2, 3]);
/// assert!(s.is_evaluated());
/// assert!(std::ptr::eq(s.get(), s.get()));
/// ```
pub struct MemoizingSupplier<T, F = fn() -> T> {
    cached: OnceCell<T>,
    producer: Cell<Option<F>>,
    running: Cell<bool>,
}

impl<T, F: FnOnce() -> T> MemoizingSupplier<T, F> {
    /// Constructs a new supplier which will call `producer` at most once
    #[inline]
    pub const fn new(producer: F) -> Self {
        Self {
            cached: OnceCell::new(),
            producer: Cell::new(Some(producer)),
            running: Cell::new(false),
        }
    }

    /// Returns the cached value, running the producer first
    /// if this is the first call.
    ///
    /// # Panics
    ///
    /// Panics if the producer panics,
    /// if an earlier call's producer panicked,
    /// or if the producer calls `get` on this same supplier.
    #[inline]
    pub fn get(&self) -> &T {
        self.cached.get_or_init(|| match self.producer.take() {
            Some(producer) => {
                log::trace!("evaluating single-threaded memoized producer");
                self.running.set(true);
                let _running = Running(&self.running);
                producer()
            }
            None if self.running.get() => panic!("{}", PRODUCER_REENTERED),
            None => panic!("{}", PRODUCER_FAILED),
        })
    }
}

impl<T, F> MemoizingSupplier<T, F> {
    /// Returns `true` once the producer has run successfully.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.cached.get().is_some()
    }

    /// Consumes the supplier, returning its value
    /// if the producer has run.
    #[inline]
    pub fn into_inner(self) -> Option<T> {
        self.cached.into_inner()
    }
}

impl<T, F: FnOnce() -> T> TryFrom<Option<F>> for MemoizingSupplier<T, F> {
    type Error = Error;

    /// Fails with [`Error::PreconditionViolation`] if `producer` is absent.
    #[inline]
    fn try_from(producer: Option<F>) -> Result<Self, Error> {
        producer
            .map(Self::new)
            .ok_or(Error::PreconditionViolation("producer is absent"))
    }
}

impl<T, F: FnOnce() -> T> Supplier<T> for MemoizingSupplier<T, F> {
    #[inline]
    fn get(&self) -> &T {
        MemoizingSupplier::get(self)
    }
}

impl<T: core::fmt::Debug, F> core::fmt::Debug for MemoizingSupplier<T, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoizingSupplier")
            .field("value", &self.cached.get())
            .finish_non_exhaustive()
    }
}

/// A lazily-evaluated value which may be shared between threads.
///
/// However many threads call [`ConcurrentMemoizingSupplier::get`]
/// at once, the producer runs exactly once,
/// and every caller sees the same value.
/// Once the value is published, `get` takes no lock at all.
/// A producer which never returns blocks every caller forever.
///
/// # Example
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use wrapkit::ConcurrentMemoizingSupplier;
///
/// static CALLS: AtomicUsize = AtomicUsize::new(0);
///
/// let s = ConcurrentMemoizingSupplier::new(|| CALLS.fetch_add(1, Ordering::SeqCst));
/// std::thread::scope(|scope| {
///     for _ in 0..4 {
///         scope.spawn(|| assert_eq!(s.get(), &0));
///     }
/// });
/// assert_eq!(CALLS.load(Ordering::SeqCst), 1);
/// ```
pub struct ConcurrentMemoizingSupplier<T, F = fn() -> T> {
    // published only once fully computed,
    // so a successful `get` here is the lock-free fast path
    value: OnceLock<T>,
    producer: Mutex<Option<F>>,
}

impl<T, F: FnOnce() -> T> ConcurrentMemoizingSupplier<T, F> {
    /// Constructs a new supplier which will call `producer` exactly once
    #[inline]
    pub const fn new(producer: F) -> Self {
        Self {
            value: OnceLock::new(),
            producer: Mutex::new(Some(producer)),
        }
    }

    /// Returns the cached value, running the producer first
    /// if no thread has done so yet.
    ///
    /// # Panics
    ///
    /// Panics if the producer panics,
    /// or if an earlier call's producer panicked.
    ///
    /// A producer must not call `get` on its own supplier:
    /// that call waits on a lock its own thread already holds,
    /// which deadlocks or panics.
    #[inline]
    pub fn get(&self) -> &T {
        match self.value.get() {
            Some(value) => value,
            None => self.evaluate(),
        }
    }

    #[cold]
    fn evaluate(&self) -> &T {
        // a panicking producer poisons the lock,
        // but leaves nothing half-written behind it
        let mut producer = self
            .producer
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // another thread may have finished while we waited
        if let Some(value) = self.value.get() {
            log::debug!("memoized value was published while waiting for the lock");
            return value;
        }

        let producer = match producer.take() {
            Some(producer) => producer,
            None => panic!("{}", PRODUCER_FAILED),
        };

        log::trace!("evaluating concurrent memoized producer");
        self.value.get_or_init(producer)
    }
}

impl<T, F> ConcurrentMemoizingSupplier<T, F> {
    /// Returns `true` once the producer has run successfully.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Consumes the supplier, returning its value
    /// if the producer has run.
    #[inline]
    pub fn into_inner(self) -> Option<T> {
        self.value.into_inner()
    }
}

impl<T, F: FnOnce() -> T> TryFrom<Option<F>> for ConcurrentMemoizingSupplier<T, F> {
    type Error = Error;

    /// Fails with [`Error::PreconditionViolation`] if `producer` is absent.
    #[inline]
    fn try_from(producer: Option<F>) -> Result<Self, Error> {
        producer
            .map(Self::new)
            .ok_or(Error::PreconditionViolation("producer is absent"))
    }
}

impl<T, F: FnOnce() -> T> Supplier<T> for ConcurrentMemoizingSupplier<T, F> {
    #[inline]
    fn get(&self) -> &T {
        ConcurrentMemoizingSupplier::get(self)
    }
}

impl<T: core::fmt::Debug, F> core::fmt::Debug for ConcurrentMemoizingSupplier<T, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentMemoizingSupplier")
            .field("value", &self.value.get())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(ConcurrentMemoizingSupplier<String>: Send, Sync);
static_assertions::assert_impl_all!(MemoizingSupplier<String>: Send);
static_assertions::assert_not_impl_any!(MemoizingSupplier<String>: Sync);

#[cfg(test)]
mod tests {
    use super::{ConcurrentMemoizingSupplier, MemoizingSupplier, PRODUCER_FAILED, PRODUCER_REENTERED};
    use crate::function::Supplier;
    use crate::Error;
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};

    #[derive(Debug)]
    struct TestObject(u64);

    #[test]
    fn object_identity_test() {
        let counter = Cell::new(0);
        let s = MemoizingSupplier::new(|| {
            counter.set(counter.get() + 1);
            Box::new(TestObject(1))
        });

        let first: *const TestObject = &**s.get();
        assert_eq!(counter.get(), 1);

        let fresh = Box::new(TestObject(1));
        assert!(!std::ptr::eq(first, &*fresh));
        assert_eq!(s.get().0, fresh.0);

        for _ in 0..100 {
            assert!(std::ptr::eq(first, &**s.get()));
            assert_eq!(counter.get(), 1);
        }
    }

    #[test]
    fn none_value_test() {
        let counter = Cell::new(0);
        let s = MemoizingSupplier::new(|| {
            counter.set(counter.get() + 1);
            None::<u8>
        });

        for _ in 0..100 {
            assert_eq!(s.get(), &None);
        }
        assert_eq!(counter.get(), 1);
        assert!(s.is_evaluated());
        assert_eq!(s.into_inner(), Some(None));
    }

    #[test]
    fn absent_producer_test() {
        assert!(matches!(
            MemoizingSupplier::<u8, fn() -> u8>::try_from(None),
            Err(Error::PreconditionViolation(_))
        ));
        assert!(matches!(
            ConcurrentMemoizingSupplier::<u8, fn() -> u8>::try_from(None),
            Err(Error::PreconditionViolation(_))
        ));

        let s = MemoizingSupplier::try_from(Some(|| 5)).unwrap();
        assert_eq!(s.get(), &5);
        let s = ConcurrentMemoizingSupplier::try_from(Some(|| 5)).unwrap();
        assert_eq!(s.get(), &5);
    }

    #[test]
    fn unevaluated_test() {
        let s = MemoizingSupplier::new(|| -> u8 { unreachable!() });
        assert!(!s.is_evaluated());
        assert_eq!(s.into_inner(), None);

        let s = ConcurrentMemoizingSupplier::new(|| -> u8 { unreachable!() });
        assert!(!s.is_evaluated());
        assert_eq!(format!("{s:?}"), "ConcurrentMemoizingSupplier { value: None, .. }");
    }

    #[test]
    fn panicking_producer_test() {
        let s = MemoizingSupplier::new(|| -> u8 { panic!("first") });
        assert!(catch_unwind(AssertUnwindSafe(|| *s.get())).is_err());
        assert!(catch_unwind(AssertUnwindSafe(|| *s.get())).is_err());
        assert!(!s.is_evaluated());

        let s = ConcurrentMemoizingSupplier::new(|| -> u8 { panic!("first") });
        assert!(catch_unwind(AssertUnwindSafe(|| *s.get())).is_err());
        assert!(catch_unwind(AssertUnwindSafe(|| *s.get())).is_err());
        assert!(!s.is_evaluated());
    }

    #[test]
    fn reentrant_producer_test() {
        use std::cell::OnceCell;
        use std::rc::{Rc, Weak};

        type Boxed = MemoizingSupplier<u8, Box<dyn FnOnce() -> u8>>;

        fn panic_message(f: impl FnOnce() -> u8) -> Option<String> {
            catch_unwind(AssertUnwindSafe(f))
                .err()
                .and_then(|e| e.downcast::<String>().ok())
                .map(|s| *s)
        }

        let own: Rc<OnceCell<Weak<Boxed>>> = Rc::default();
        let producer: Box<dyn FnOnce() -> u8> = {
            let own = Rc::clone(&own);
            Box::new(move || own.get().and_then(Weak::upgrade).map_or(0, |s| *s.get()))
        };
        let s: Rc<Boxed> = Rc::new(MemoizingSupplier::new(producer));
        assert!(own.set(Rc::downgrade(&s)).is_ok());

        assert_eq!(
            panic_message(|| *s.get()).as_deref(),
            Some(PRODUCER_REENTERED)
        );
        assert!(!s.is_evaluated());
        assert_eq!(
            panic_message(|| *s.get()).as_deref(),
            Some(PRODUCER_FAILED)
        );
    }

    #[test]
    fn concurrent_test() {
        const CALLERS: usize = 16;

        let counter = Arc::new(AtomicUsize::new(0));
        let s = {
            let counter = Arc::clone(&counter);
            ConcurrentMemoizingSupplier::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                std::thread::sleep(std::time::Duration::from_millis(10));
                Box::new(TestObject(1))
            })
        };
        let barrier = Barrier::new(CALLERS);

        let seen: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..CALLERS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        &**s.get() as *const TestObject as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(seen.iter().all(|p| *p == seen[0]));
        assert_eq!(seen[0], &**s.get() as *const TestObject as usize);

        let fresh = Box::new(TestObject(1));
        assert_ne!(seen[0], &*fresh as *const TestObject as usize);
    }

    #[test]
    fn concurrent_none_value_test() {
        let counter = AtomicUsize::new(0);
        let s = ConcurrentMemoizingSupplier::new(|| {
            counter.fetch_add(1, Ordering::SeqCst);
            None::<String>
        });

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| assert_eq!(s.get(), &None));
            }
        });
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn supplier_test() {
        fn supplied<S: Supplier<str>>(s: &S) -> &str {
            s.get()
        }

        fn len_of<T, S: Supplier<T>>(s: &S, len: impl Fn(&T) -> usize) -> usize {
            len(s.get())
        }

        struct Name(String);

        impl Supplier<str> for Name {
            fn get(&self) -> &str {
                &self.0
            }
        }

        assert_eq!(supplied(&Name("name".into())), "name");
        assert_eq!(len_of(&MemoizingSupplier::new(|| vec![1, 2]), Vec::len), 2);
        assert_eq!(len_of(&ConcurrentMemoizingSupplier::new(|| "abc"), |s: &&str| s.len()), 3);
        assert_eq!(len_of(&crate::Wrapper::of([0u8; 4]), |a: &[u8; 4]| a.len()), 4);
    }
}
