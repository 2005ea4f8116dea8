use alloc::string::{String, ToString};

use crate::io::ErrorKind;

pub(super) fn last_error() -> u32 {
    std::io::Error::last_os_error()
        .raw_os_error()
        .map_or(0, i32::cast_unsigned)
}

// Win32 system error codes (winerror.h) and WinSock codes (winsock2.h).
const ERROR_FILE_NOT_FOUND: u32 = 2;
const ERROR_PATH_NOT_FOUND: u32 = 3;
const ERROR_ACCESS_DENIED: u32 = 5;
const ERROR_NOT_ENOUGH_MEMORY: u32 = 8;
const ERROR_INVALID_DATA: u32 = 13;
const ERROR_OUTOFMEMORY: u32 = 14;
const ERROR_NOT_SAME_DEVICE: u32 = 17;
const ERROR_WRITE_PROTECT: u32 = 19;
const ERROR_HANDLE_DISK_FULL: u32 = 39;
const ERROR_NOT_SUPPORTED: u32 = 50;
const ERROR_FILE_EXISTS: u32 = 80;
const ERROR_INVALID_PARAMETER: u32 = 87;
const ERROR_BROKEN_PIPE: u32 = 109;
const ERROR_DISK_FULL: u32 = 112;
const ERROR_CALL_NOT_IMPLEMENTED: u32 = 120;
const ERROR_SEM_TIMEOUT: u32 = 121;
const ERROR_NEGATIVE_SEEK: u32 = 131;
const ERROR_SEEK_ON_DEVICE: u32 = 132;
const ERROR_DIR_NOT_EMPTY: u32 = 145;
const ERROR_BUSY: u32 = 170;
const ERROR_ALREADY_EXISTS: u32 = 183;
const ERROR_FILENAME_EXCED_RANGE: u32 = 206;
const ERROR_FILE_TOO_LARGE: u32 = 223;
const ERROR_NO_DATA: u32 = 232;
const WAIT_TIMEOUT: u32 = 258;
const ERROR_DIRECTORY: u32 = 267;
const ERROR_DIRECTORY_NOT_SUPPORTED: u32 = 336;
const ERROR_INVALID_NAME: u32 = 123;
const ERROR_POSSIBLE_DEADLOCK: u32 = 1131;
const ERROR_TOO_MANY_LINKS: u32 = 1142;
const ERROR_DISK_QUOTA_EXCEEDED: u32 = 1295;
const ERROR_TIMEOUT: u32 = 1460;
const ERROR_CANT_RESOLVE_FILENAME: u32 = 1921;

const WSAEINTR: u32 = 10004;
const WSAEACCES: u32 = 10013;
const WSAEINVAL: u32 = 10022;
const WSAEWOULDBLOCK: u32 = 10035;
const WSAEINPROGRESS: u32 = 10036;
const WSAEADDRINUSE: u32 = 10048;
const WSAEADDRNOTAVAIL: u32 = 10049;
const WSAENETDOWN: u32 = 10050;
const WSAENETUNREACH: u32 = 10051;
const WSAECONNABORTED: u32 = 10053;
const WSAECONNRESET: u32 = 10054;
const WSAENOTCONN: u32 = 10057;
const WSAETIMEDOUT: u32 = 10060;
const WSAECONNREFUSED: u32 = 10061;
const WSAEHOSTUNREACH: u32 = 10065;

pub(super) fn decode_error_kind(code: u32) -> ErrorKind {
    use ErrorKind::*;

    match code {
        ERROR_FILE_NOT_FOUND | ERROR_PATH_NOT_FOUND => NotFound,
        ERROR_ACCESS_DENIED => PermissionDenied,
        ERROR_NOT_ENOUGH_MEMORY | ERROR_OUTOFMEMORY => OutOfMemory,
        ERROR_INVALID_DATA => InvalidData,
        ERROR_NOT_SAME_DEVICE => CrossesDevices,
        ERROR_WRITE_PROTECT => ReadOnlyFilesystem,
        ERROR_HANDLE_DISK_FULL | ERROR_DISK_FULL => StorageFull,
        ERROR_NOT_SUPPORTED | ERROR_CALL_NOT_IMPLEMENTED => Unsupported,
        ERROR_FILE_EXISTS | ERROR_ALREADY_EXISTS => AlreadyExists,
        ERROR_INVALID_PARAMETER | ERROR_NEGATIVE_SEEK => InvalidInput,
        ERROR_BROKEN_PIPE | ERROR_NO_DATA => BrokenPipe,
        ERROR_SEM_TIMEOUT | WAIT_TIMEOUT | ERROR_TIMEOUT => TimedOut,
        ERROR_SEEK_ON_DEVICE => NotSeekable,
        ERROR_DIR_NOT_EMPTY => DirectoryNotEmpty,
        ERROR_BUSY => ResourceBusy,
        ERROR_INVALID_NAME | ERROR_FILENAME_EXCED_RANGE => InvalidFilename,
        ERROR_FILE_TOO_LARGE => FileTooLarge,
        ERROR_DIRECTORY => NotADirectory,
        ERROR_DIRECTORY_NOT_SUPPORTED => IsADirectory,
        ERROR_POSSIBLE_DEADLOCK => Deadlock,
        ERROR_TOO_MANY_LINKS => TooManyLinks,
        ERROR_DISK_QUOTA_EXCEEDED => QuotaExceeded,
        ERROR_CANT_RESOLVE_FILENAME => FilesystemLoop,

        WSAEINTR => Interrupted,
        WSAEACCES => PermissionDenied,
        WSAEINVAL => InvalidInput,
        WSAEWOULDBLOCK => WouldBlock,
        WSAEINPROGRESS => InProgress,
        WSAEADDRINUSE => AddrInUse,
        WSAEADDRNOTAVAIL => AddrNotAvailable,
        WSAENETDOWN => NetworkDown,
        WSAENETUNREACH => NetworkUnreachable,
        WSAECONNABORTED => ConnectionAborted,
        WSAECONNRESET => ConnectionReset,
        WSAENOTCONN => NotConnected,
        WSAETIMEDOUT => TimedOut,
        WSAECONNREFUSED => ConnectionRefused,
        WSAEHOSTUNREACH => HostUnreachable,

        _ => Other,
    }
}

pub(super) fn describe(code: u32) -> String {
    // The standard library already wraps `FormatMessageW`; strip its
    // " (os error N)" suffix so only the system message remains.
    let rendered = std::io::Error::from_raw_os_error(code.cast_signed()).to_string();
    match rendered.rfind(" (os error ") {
        Some(index) => rendered[..index].to_string(),
        None => rendered,
    }
}
