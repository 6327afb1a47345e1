/*!
 * Condition Variable
 *
 * Monitor-style wait/signal/broadcast over a platform condition variable.
 * Every operation takes a live [`MutexGuard`] as proof that the caller
 * holds the associated mutex; pairing a `CondVar` with the same `Mutex`
 * for its whole lifetime is documented discipline, not a type guarantee.
 *
 * Wakeup order among blocked waiters is whatever the platform does; no
 * FIFO fairness is guaranteed.
 */

use super::error::{SyncError, SyncResult};
use super::mutex::MutexGuard;
use super::raw::RawCondvar;
use crate::result::Result;

/// Cross-thread wakeup signal with no owned data
///
/// # Examples
///
/// ```
/// use holdfast::sync::{CondVar, Mutex};
/// use std::sync::Arc;
/// use std::thread;
///
/// let shared = Arc::new((Mutex::make(false).unwrap(), CondVar::make().unwrap()));
///
/// let waiter = {
///     let shared = shared.clone();
///     thread::spawn(move || {
///         let (mutex, cond) = &*shared;
///         let mut ready = mutex.lock().unwrap();
///         // Re-check the predicate: wakeups may be spurious
///         while !*ready {
///             cond.wait(&mut ready).unwrap();
///         }
///     })
/// };
///
/// let (mutex, cond) = &*shared;
/// {
///     let mut ready = mutex.lock().unwrap();
///     *ready = true;
///     cond.signal(&ready).unwrap();
/// }
/// waiter.join().unwrap();
/// ```
pub struct CondVar {
    raw: RawCondvar,
}

impl CondVar {
    /// Create a condition variable
    ///
    /// Returns `Err(SyncError::CondVarCreation)` when the platform denies
    /// a handle.
    pub fn make() -> SyncResult<Self> {
        match RawCondvar::create() {
            Some(raw) => Result::ok(Self { raw }),
            None => Result::err(SyncError::CondVarCreation),
        }
    }

    /// Atomically release the guard's mutex and suspend until woken, then
    /// reacquire the mutex before returning
    ///
    /// Wakeups may be spurious or meant for a different condition; callers
    /// must re-check their predicate in a loop. Blocks indefinitely, no
    /// timeout.
    pub fn wait<T>(&self, guard: &mut MutexGuard<'_, T>) -> SyncResult<()> {
        self.raw.wait(guard.raw())
    }

    /// Wake at least one thread blocked on this condition variable
    ///
    /// A successful no-op when no one is waiting. The guard proves the
    /// caller holds the associated mutex, which closes the lost-wakeup
    /// race.
    pub fn signal<T>(&self, _guard: &MutexGuard<'_, T>) -> SyncResult<()> {
        self.raw.signal()
    }

    /// Wake every thread currently blocked on this condition variable
    ///
    /// A successful no-op when no one is waiting.
    pub fn broadcast<T>(&self, _guard: &MutexGuard<'_, T>) -> SyncResult<()> {
        self.raw.broadcast()
    }

    #[cfg(test)]
    pub(crate) fn make_invalid() -> Self {
        Self {
            raw: RawCondvar::invalid(),
        }
    }
}
