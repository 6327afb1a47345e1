/*!
 * Platform Threading Capability
 *
 * Thin FFI layer over POSIX mutexes and condition variables. Handles are
 * heap-allocated so their addresses stay stable while the owning wrapper
 * moves, which pthread requires.
 *
 * A null pointer is the invalid-handle sentinel: every operation on it
 * returns the matching `Invalid*` error instead of touching the FFI.
 */

use super::error::{SyncError, SyncResult};
use crate::result::Result;
use std::io;
use std::ptr;

#[inline]
fn os_error(code: i32) -> io::Error {
    io::Error::from_raw_os_error(code)
}

/// Owned handle to one platform mutex
pub(crate) struct RawMutex {
    ptr: *mut libc::pthread_mutex_t,
}

// The handle is just a stable address; pthread serializes all access to it.
unsafe impl Send for RawMutex {}
unsafe impl Sync for RawMutex {}

impl RawMutex {
    /// Request a mutex handle from the platform
    pub(crate) fn create() -> Option<Self> {
        let ptr = Box::into_raw(Box::new(libc::PTHREAD_MUTEX_INITIALIZER));
        let rc = unsafe { libc::pthread_mutex_init(ptr, ptr::null()) };
        if rc != 0 {
            log::error!("failed to create mutex: {}", os_error(rc));
            unsafe { drop(Box::from_raw(ptr)) };
            return None;
        }
        log::debug!("created mutex handle {:p}", ptr);
        Some(Self { ptr })
    }

    /// A null-handle mutex; every operation on it fails cleanly
    #[cfg(test)]
    pub(crate) const fn invalid() -> Self {
        Self {
            ptr: ptr::null_mut(),
        }
    }

    /// Block until exclusive ownership is granted
    pub(crate) fn lock(&self) -> SyncResult<()> {
        if self.ptr.is_null() {
            return Result::err(SyncError::InvalidMutex);
        }
        let rc = unsafe { libc::pthread_mutex_lock(self.ptr) };
        if rc != 0 {
            log::error!("failed to lock mutex: {}", os_error(rc));
            return Result::err(SyncError::MutexLock);
        }
        Result::ok(())
    }

    /// Release ownership
    ///
    /// Called from guard teardown, which must not panic; failures are
    /// logged instead of reported.
    pub(crate) fn unlock(&self) {
        if self.ptr.is_null() {
            return;
        }
        let rc = unsafe { libc::pthread_mutex_unlock(self.ptr) };
        if rc != 0 {
            log::error!("failed to unlock mutex: {}", os_error(rc));
        }
    }

    fn as_ptr(&self) -> *mut libc::pthread_mutex_t {
        self.ptr
    }
}

impl Drop for RawMutex {
    fn drop(&mut self) {
        if self.ptr.is_null() {
            return;
        }
        log::debug!("destroying mutex handle {:p}", self.ptr);
        unsafe {
            libc::pthread_mutex_destroy(self.ptr);
            drop(Box::from_raw(self.ptr));
        }
    }
}

/// Owned handle to one platform condition variable
pub(crate) struct RawCondvar {
    ptr: *mut libc::pthread_cond_t,
}

unsafe impl Send for RawCondvar {}
unsafe impl Sync for RawCondvar {}

impl RawCondvar {
    /// Request a condition-variable handle from the platform
    pub(crate) fn create() -> Option<Self> {
        let ptr = Box::into_raw(Box::new(libc::PTHREAD_COND_INITIALIZER));
        let rc = unsafe { libc::pthread_cond_init(ptr, ptr::null()) };
        if rc != 0 {
            log::error!("failed to create condition variable: {}", os_error(rc));
            unsafe { drop(Box::from_raw(ptr)) };
            return None;
        }
        log::debug!("created condition variable handle {:p}", ptr);
        Some(Self { ptr })
    }

    /// A null-handle condition variable; every operation on it fails cleanly
    #[cfg(test)]
    pub(crate) const fn invalid() -> Self {
        Self {
            ptr: ptr::null_mut(),
        }
    }

    /// Atomically release `mutex` and suspend until woken, then reacquire
    ///
    /// The caller must currently hold `mutex`. Wakeups may be spurious.
    pub(crate) fn wait(&self, mutex: &RawMutex) -> SyncResult<()> {
        if self.ptr.is_null() {
            return Result::err(SyncError::InvalidCondVar);
        }
        let rc = unsafe { libc::pthread_cond_wait(self.ptr, mutex.as_ptr()) };
        if rc != 0 {
            log::error!("failed to wait on condition variable: {}", os_error(rc));
            return Result::err(SyncError::CondVarWait);
        }
        Result::ok(())
    }

    /// Wake at least one waiter; a no-op success when none are blocked
    pub(crate) fn signal(&self) -> SyncResult<()> {
        if self.ptr.is_null() {
            return Result::err(SyncError::InvalidCondVar);
        }
        let rc = unsafe { libc::pthread_cond_signal(self.ptr) };
        if rc != 0 {
            log::error!("failed to signal condition variable: {}", os_error(rc));
            return Result::err(SyncError::CondVarSignal);
        }
        Result::ok(())
    }

    /// Wake every current waiter; a no-op success when none are blocked
    pub(crate) fn broadcast(&self) -> SyncResult<()> {
        if self.ptr.is_null() {
            return Result::err(SyncError::InvalidCondVar);
        }
        let rc = unsafe { libc::pthread_cond_broadcast(self.ptr) };
        if rc != 0 {
            log::error!("failed to broadcast condition variable: {}", os_error(rc));
            return Result::err(SyncError::CondVarBroadcast);
        }
        Result::ok(())
    }
}

impl Drop for RawCondvar {
    fn drop(&mut self) {
        if self.ptr.is_null() {
            return;
        }
        log::debug!("destroying condition variable handle {:p}", self.ptr);
        unsafe {
            libc::pthread_cond_destroy(self.ptr);
            drop(Box::from_raw(self.ptr));
        }
    }
}
