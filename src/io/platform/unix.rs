use alloc::string::{String, ToString};
use core::ffi::CStr;

use crate::io::ErrorKind;

pub(super) fn last_error() -> i32 {
    std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

pub(super) fn decode_error_kind(errno: i32) -> ErrorKind {
    use ErrorKind::*;

    match errno {
        libc::E2BIG => ArgumentListTooLong,
        libc::EADDRINUSE => AddrInUse,
        libc::EADDRNOTAVAIL => AddrNotAvailable,
        libc::EBUSY => ResourceBusy,
        libc::ECONNABORTED => ConnectionAborted,
        libc::ECONNREFUSED => ConnectionRefused,
        libc::ECONNRESET => ConnectionReset,
        libc::EDEADLK => Deadlock,
        libc::EDQUOT => QuotaExceeded,
        libc::EEXIST => AlreadyExists,
        libc::EFBIG => FileTooLarge,
        libc::EHOSTUNREACH => HostUnreachable,
        libc::EINTR => Interrupted,
        libc::EINVAL => InvalidInput,
        libc::EISDIR => IsADirectory,
        libc::ELOOP => FilesystemLoop,
        libc::ENOENT => NotFound,
        libc::ENOMEM => OutOfMemory,
        libc::ENOSPC => StorageFull,
        libc::ENOSYS => Unsupported,
        libc::EMLINK => TooManyLinks,
        libc::ENAMETOOLONG => InvalidFilename,
        libc::ENETDOWN => NetworkDown,
        libc::ENETUNREACH => NetworkUnreachable,
        libc::ENOTCONN => NotConnected,
        libc::ENOTDIR => NotADirectory,
        libc::ENOTEMPTY => DirectoryNotEmpty,
        libc::EPIPE => BrokenPipe,
        libc::EROFS => ReadOnlyFilesystem,
        libc::ESPIPE => NotSeekable,
        libc::ESTALE => StaleNetworkFileHandle,
        libc::ETIMEDOUT => TimedOut,
        libc::ETXTBSY => ExecutableFileBusy,
        libc::EXDEV => CrossesDevices,
        libc::EINPROGRESS => InProgress,
        libc::EOPNOTSUPP => Unsupported,
        libc::EACCES | libc::EPERM => PermissionDenied,

        // EAGAIN and EWOULDBLOCK share a value on most platforms, which rules
        // out listing both as patterns.
        x if x == libc::EAGAIN || x == libc::EWOULDBLOCK => WouldBlock,
        // Distinct from EOPNOTSUPP on some platforms only.
        x if x == libc::ENOTSUP => Unsupported,

        _ => Other,
    }
}

pub(super) fn describe(errno: i32) -> String {
    let mut buf = [0 as libc::c_char; 128];

    // SAFETY: `buf` is writable for `buf.len()` bytes; `strerror_r` writes a
    // NUL-terminated string of at most that length into it.
    let result = unsafe { libc::strerror_r(errno, buf.as_mut_ptr(), buf.len()) };
    if result != 0 {
        return format!("unknown error {errno}");
    }

    // SAFETY: `c_char` and `u8` have the same size and alignment, and the
    // whole buffer is initialized.
    let bytes: &[u8] = unsafe { core::slice::from_raw_parts(buf.as_ptr().cast::<u8>(), buf.len()) };
    match CStr::from_bytes_until_nul(bytes) {
        Ok(message) => message.to_string_lossy().to_string(),
        Err(_) => format!("unknown error {errno}"),
    }
}
