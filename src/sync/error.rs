/*!
 * Synchronization Error Taxonomy
 *
 * Every recoverable failure of the primitives is one of these kinds;
 * nothing in this module panics or aborts.
 */

use thiserror::Error;

/// Errors reported by [`Mutex`](super::Mutex) and [`CondVar`](super::CondVar)
///
/// Creation kinds mean the platform denied a handle; `Invalid*` kinds mean
/// an operation hit a null handle; the remaining kinds mean the platform
/// call itself failed (rare, distinct from the expected blocking case).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncError {
    #[error("failed to create platform mutex")]
    MutexCreation,

    #[error("platform mutex lock failed")]
    MutexLock,

    #[error("operation on an invalid mutex handle")]
    InvalidMutex,

    #[error("failed to create platform condition variable")]
    CondVarCreation,

    #[error("condition variable wait failed")]
    CondVarWait,

    #[error("condition variable signal failed")]
    CondVarSignal,

    #[error("condition variable broadcast failed")]
    CondVarBroadcast,

    #[error("operation on an invalid condition variable handle")]
    InvalidCondVar,
}

/// Result type for synchronization operations
pub type SyncResult<T> = crate::result::Result<T, SyncError>;
