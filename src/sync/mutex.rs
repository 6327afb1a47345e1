/*!
 * Value-Owning Mutex
 *
 * A mutex that owns the value it protects: the only way to reach the value
 * is through a guard returned by a successful `lock()`, and the guard's
 * teardown is the only unlock path. Construction and locking report
 * failures as data instead of aborting.
 */

use super::error::{SyncError, SyncResult};
use super::raw::RawMutex;
use crate::result::Result;
use std::cell::UnsafeCell;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// Mutual-exclusion lock bound to the value it protects
///
/// # Examples
///
/// ```
/// use holdfast::sync::Mutex;
///
/// let mutex = Mutex::make(41).unwrap();
/// {
///     let mut guard = mutex.lock().unwrap();
///     *guard += 1;
/// } // unlocked here
/// assert_eq!(*mutex.lock().unwrap(), 42);
/// ```
pub struct Mutex<T> {
    raw: RawMutex,
    value: UnsafeCell<T>,
}

// UnsafeCell is !Sync; access to the value is serialized by the platform
// mutex, so sharing is safe whenever the value itself can move between
// threads.
unsafe impl<T: Send> Send for Mutex<T> {}
unsafe impl<T: Send> Sync for Mutex<T> {}

impl<T> Mutex<T> {
    /// Create a mutex protecting `value`
    ///
    /// Returns `Err(SyncError::MutexCreation)` when the platform denies a
    /// mutex handle. The value is moved in place, never copied.
    pub fn make(value: T) -> SyncResult<Self> {
        match RawMutex::create() {
            Some(raw) => Result::ok(Self {
                raw,
                value: UnsafeCell::new(value),
            }),
            None => Result::err(SyncError::MutexCreation),
        }
    }

    /// Block until exclusive access is granted, then return a guard
    ///
    /// May block indefinitely; there is no timeout. Re-locking from the
    /// thread already holding the guard deadlocks. Returns
    /// `Err(SyncError::InvalidMutex)` on an invalid handle and
    /// `Err(SyncError::MutexLock)` when the platform lock call fails.
    pub fn lock(&self) -> SyncResult<MutexGuard<'_, T>> {
        self.raw.lock().map(|()| MutexGuard {
            mutex: self,
            _not_send: PhantomData,
        })
    }

    #[cfg(test)]
    pub(crate) fn make_invalid(value: T) -> Self {
        Self {
            raw: RawMutex::invalid(),
            value: UnsafeCell::new(value),
        }
    }
}

/// Scoped proof of exclusive access to a [`Mutex`]'s value
///
/// Dereferences to the protected value. Dropping the guard releases the
/// platform mutex exactly once, on every exit path.
pub struct MutexGuard<'a, T> {
    mutex: &'a Mutex<T>,
    // pthread requires the unlock to happen on the locking thread
    _not_send: PhantomData<*const ()>,
}

unsafe impl<T: Sync> Sync for MutexGuard<'_, T> {}

impl<T> MutexGuard<'_, T> {
    pub(crate) fn raw(&self) -> &RawMutex {
        &self.mutex.raw
    }
}

impl<T> Deref for MutexGuard<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        // A live guard is proof the lock is held
        unsafe { &*self.mutex.value.get() }
    }
}

impl<T> DerefMut for MutexGuard<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        unsafe { &mut *self.mutex.value.get() }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for MutexGuard<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&**self, f)
    }
}

impl<T> Drop for MutexGuard<'_, T> {
    fn drop(&mut self) {
        self.mutex.raw.unlock();
    }
}
