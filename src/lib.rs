/*!
 * holdfast
 *
 * Explicit-error concurrency primitives: a generic success/failure
 * container ([`result::Result`]) and a thread-safety layer built on it: a
 * value-owning [`sync::Mutex`] with a scoped guard, and a monitor-style
 * [`sync::CondVar`].
 *
 * Higher-level code never calls raw platform synchronization functions
 * directly, and never sees failure as an exception or a silent abort: every
 * recoverable failure is data. The one deliberate exception is extracting
 * the wrong `Result` variant, which is a caller bug and panics.
 */

pub mod result;
pub mod sync;

// Re-exports
pub use sync::{CondVar, Mutex, MutexGuard, SyncError, SyncResult};
