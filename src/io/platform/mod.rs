//! Capturing and decoding raw operating system error codes.
//!
//! [`PlatformError`] holds one native error code (`errno` on Unix, the
//! `GetLastError` DWORD on Windows). The code is sampled once, when the value
//! is created, and decoded into an [`ErrorKind`] through a fixed per-platform
//! table. Codes missing from the table decode to [`ErrorKind::Other`].

use alloc::string::String;
use core::fmt;

use super::ErrorKind;

#[cfg(unix)]
#[path = "unix.rs"]
mod sys;

#[cfg(windows)]
#[path = "windows.rs"]
mod sys;

#[cfg(not(any(unix, windows)))]
#[path = "unsupported.rs"]
mod sys;

/// The native integer type of an operating system error code.
#[cfg(not(windows))]
pub type RawOsError = i32;

/// The native integer type of an operating system error code.
#[cfg(windows)]
pub type RawOsError = u32;

/// A raw operating system error code captured at the moment of failure.
///
/// # Examples
///
/// ```
/// # #[cfg(unix)] {
/// use violet::io::{ErrorKind, PlatformError};
///
/// let error = PlatformError::from_raw(libc::ENOENT);
/// assert_eq!(error.raw(), libc::ENOENT);
/// assert_eq!(error.kind(), ErrorKind::NotFound);
/// # }
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformError {
    code: RawOsError,
}

impl PlatformError {
    /// Captures the calling thread's last operating system error.
    ///
    /// Call this immediately after the failing system call: anything in
    /// between, including allocation or logging, may overwrite the ambient
    /// error indicator.
    ///
    /// The indicator must hold a non-zero code. Calling this when no system
    /// call has failed is a bug and panics in debug builds.
    #[must_use]
    pub fn current() -> Self {
        let code = sys::last_error();
        debug_assert_ne!(code, 0, "no operating system error to capture");

        #[cfg(feature = "tracing")]
        tracing::trace!(code, "captured operating system error");

        Self { code }
    }

    /// Wraps an error code obtained by other means, e.g. returned directly by
    /// an API that does not use the ambient error indicator.
    #[must_use]
    pub const fn from_raw(code: RawOsError) -> Self {
        Self { code }
    }

    /// Returns the captured code.
    #[must_use]
    pub const fn raw(&self) -> RawOsError {
        self.code
    }

    /// Decodes the captured code into a portable [`ErrorKind`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        sys::decode_error_kind(self.code)
    }

    /// Returns the platform's human-readable message for the code.
    #[must_use]
    pub fn describe(&self) -> String {
        sys::describe(self.code)
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlatformError")
            .field("code", &self.code)
            .field("kind", &self.kind())
            .field("message", &self.describe())
            .finish()
    }
}

impl core::error::Error for PlatformError {}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_errno_spot_checks() {
        let table = [
            (libc::EACCES, ErrorKind::PermissionDenied),
            (libc::EPERM, ErrorKind::PermissionDenied),
            (libc::EEXIST, ErrorKind::AlreadyExists),
            (libc::ENOENT, ErrorKind::NotFound),
            (libc::EAGAIN, ErrorKind::WouldBlock),
            (libc::EWOULDBLOCK, ErrorKind::WouldBlock),
            (libc::EINVAL, ErrorKind::InvalidInput),
            (libc::ETIMEDOUT, ErrorKind::TimedOut),
            (libc::ENOSYS, ErrorKind::Unsupported),
            (libc::EOPNOTSUPP, ErrorKind::Unsupported),
            (libc::ENOTSUP, ErrorKind::Unsupported),
            (libc::ELOOP, ErrorKind::FilesystemLoop),
            (libc::EXDEV, ErrorKind::CrossesDevices),
            (libc::E2BIG, ErrorKind::ArgumentListTooLong),
            (libc::EINPROGRESS, ErrorKind::InProgress),
        ];

        for (code, kind) in table {
            assert_eq!(PlatformError::from_raw(code).kind(), kind, "errno {code}");
        }
    }

    #[test]
    fn test_unknown_errno_is_other() {
        assert_eq!(PlatformError::from_raw(99_999).kind(), ErrorKind::Other);
        assert_eq!(PlatformError::from_raw(-1).kind(), ErrorKind::Other);
    }

    #[test]
    fn test_current_captures_thread_error() {
        // SAFETY: `close` on a descriptor that was never opened only sets errno
        let result = unsafe { libc::close(-1) };
        let error = PlatformError::current();

        assert_eq!(result, -1);
        assert_eq!(error.raw(), libc::EBADF);
        assert_eq!(error.kind(), ErrorKind::Other);
    }

    #[cfg(all(target_os = "linux", debug_assertions))]
    #[test]
    #[should_panic = "no operating system error to capture"]
    fn test_current_requires_an_error() {
        // SAFETY: `__errno_location` returns the calling thread's errno slot.
        let errno = unsafe { libc::__errno_location() };
        // SAFETY: the slot is valid and exclusively used by this thread.
        unsafe { errno.write(0) };

        let _ = PlatformError::current();
    }

    #[test]
    fn test_describe() {
        let message = PlatformError::from_raw(libc::ENOENT).describe();
        assert!(!message.is_empty());
        assert!(!message.contains("os error"));
        assert_eq!(PlatformError::from_raw(libc::ENOENT).to_string(), message);
    }
}
