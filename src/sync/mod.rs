/*!
 * Blocking Synchronization Primitives
 *
 * A value-owning [`Mutex`] with a RAII [`MutexGuard`], and a monitor-style
 * [`CondVar`], built over the platform threading capability. Every failure
 * is reported as data through [`SyncResult`]; nothing here panics, aborts,
 * or throws.
 *
 * # Architecture
 *
 * - `raw`: private FFI layer over platform mutex/condvar handles
 * - `mutex`: the lock bound to its protected value, plus its guard
 * - `condvar`: wakeup signalling against a held guard
 *
 * # Concurrency model
 *
 * Parallel OS threads only; `lock()` and `wait()` block without timeout or
 * cancellation. The only legitimately shared mutable state is the value a
 * `Mutex` owns, and all access to it goes through a live guard. Locks are
 * not reentrant: re-locking from the holding thread deadlocks.
 */

mod condvar;
mod error;
mod mutex;
mod raw;

pub use condvar::CondVar;
pub use error::{SyncError, SyncResult};
pub use mutex::{Mutex, MutexGuard};
