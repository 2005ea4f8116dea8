use core::fmt;

/// A portable category for I/O failures, independent of the operating system
/// that produced them.
///
/// The set is closed: code that needs finer distinctions should carry them in
/// the payload of an [`IoError`](super::IoError) created with
/// [`IoError::new`](super::IoError::new) rather than expect new variants here.
///
/// # Examples
///
/// ```
/// use violet::io::ErrorKind;
///
/// assert_eq!(ErrorKind::NotFound.to_string(), "entity not found");
/// assert!(ErrorKind::NotFound < ErrorKind::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// An entity was not found, often a file.
    NotFound,
    /// The operation lacked the necessary privileges to complete.
    PermissionDenied,
    /// An entity already exists, often a file.
    AlreadyExists,
    /// A parameter was incorrect.
    InvalidInput,
    /// Data not valid for the operation were encountered.
    InvalidData,
    /// A filename was invalid, e.g. too long.
    InvalidFilename,
    /// The filesystem object is, unexpectedly, a directory.
    IsADirectory,
    /// A filesystem object is, unexpectedly, not a directory.
    NotADirectory,
    /// A non-empty directory was specified where an empty directory was
    /// expected.
    DirectoryNotEmpty,
    /// The filesystem or storage medium is read-only.
    ReadOnlyFilesystem,
    /// Loop in the filesystem or too many levels of symbolic links.
    FilesystemLoop,
    /// The underlying storage is full.
    StorageFull,
    /// A file is larger than allowed or supported.
    FileTooLarge,
    /// Too many (hard) links to the same filesystem object.
    TooManyLinks,
    /// The filesystem quota was exceeded.
    QuotaExceeded,
    /// A resource is busy.
    ResourceBusy,
    /// An executable file is busy, e.g. it is being written to.
    ExecutableFileBusy,
    /// A link or rename crossed filesystems or devices.
    CrossesDevices,
    /// A network file handle became invalid.
    StaleNetworkFileHandle,
    /// The other end of a pipe or socket was closed.
    BrokenPipe,
    /// The operation was interrupted and can usually be retried.
    Interrupted,
    /// The operation needs to block to complete, but blocking was not
    /// requested.
    WouldBlock,
    /// The operation was started and continues in the background.
    InProgress,
    /// The operation's timeout expired.
    TimedOut,
    /// A socket address is already in use elsewhere.
    AddrInUse,
    /// A nonexistent interface was requested or the address was not local.
    AddrNotAvailable,
    /// The connection was aborted by the remote peer.
    ConnectionAborted,
    /// The connection was refused by the remote peer.
    ConnectionRefused,
    /// The connection was reset by the remote peer.
    ConnectionReset,
    /// The operation needs a connection but none is established.
    NotConnected,
    /// The system's networking is down.
    NetworkDown,
    /// The network containing the remote host is not reachable.
    NetworkUnreachable,
    /// The remote host is not reachable.
    HostUnreachable,
    /// The argument list of a program was too long.
    ArgumentListTooLong,
    /// A deadlock was detected and the operation was refused.
    Deadlock,
    /// An allocation needed to complete the operation failed.
    OutOfMemory,
    /// A seek was attempted on something that cannot seek, e.g. a pipe.
    NotSeekable,
    /// The operation is not supported on this platform or object.
    Unsupported,
    /// A write returned `Ok(0)` before all data was written.
    WriteZero,
    /// The input ended before the expected amount of data was read.
    UnexpectedEof,
    /// Any failure that does not fit the other kinds.
    Other,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 41] = [
        Self::NotFound,
        Self::PermissionDenied,
        Self::AlreadyExists,
        Self::InvalidInput,
        Self::InvalidData,
        Self::InvalidFilename,
        Self::IsADirectory,
        Self::NotADirectory,
        Self::DirectoryNotEmpty,
        Self::ReadOnlyFilesystem,
        Self::FilesystemLoop,
        Self::StorageFull,
        Self::FileTooLarge,
        Self::TooManyLinks,
        Self::QuotaExceeded,
        Self::ResourceBusy,
        Self::ExecutableFileBusy,
        Self::CrossesDevices,
        Self::StaleNetworkFileHandle,
        Self::BrokenPipe,
        Self::Interrupted,
        Self::WouldBlock,
        Self::InProgress,
        Self::TimedOut,
        Self::AddrInUse,
        Self::AddrNotAvailable,
        Self::ConnectionAborted,
        Self::ConnectionRefused,
        Self::ConnectionReset,
        Self::NotConnected,
        Self::NetworkDown,
        Self::NetworkUnreachable,
        Self::HostUnreachable,
        Self::ArgumentListTooLong,
        Self::Deadlock,
        Self::OutOfMemory,
        Self::NotSeekable,
        Self::Unsupported,
        Self::WriteZero,
        Self::UnexpectedEof,
        Self::Other,
    ];

    /// Returns the short, lowercase description of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "entity not found",
            Self::PermissionDenied => "permission denied",
            Self::AlreadyExists => "entity already exists",
            Self::InvalidInput => "invalid input parameter",
            Self::InvalidData => "invalid data",
            Self::InvalidFilename => "invalid filename",
            Self::IsADirectory => "is a directory",
            Self::NotADirectory => "not a directory",
            Self::DirectoryNotEmpty => "directory not empty",
            Self::ReadOnlyFilesystem => "read-only filesystem or storage medium",
            Self::FilesystemLoop => "filesystem loop or indirection limit (e.g. symlink loop)",
            Self::StorageFull => "no storage space",
            Self::FileTooLarge => "file too large",
            Self::TooManyLinks => "too many links",
            Self::QuotaExceeded => "quota exceeded",
            Self::ResourceBusy => "resource busy",
            Self::ExecutableFileBusy => "executable file busy",
            Self::CrossesDevices => "cross-device link or rename",
            Self::StaleNetworkFileHandle => "stale network file handle",
            Self::BrokenPipe => "broken pipe",
            Self::Interrupted => "operation interrupted",
            Self::WouldBlock => "operation would block",
            Self::InProgress => "in progress",
            Self::TimedOut => "timed out",
            Self::AddrInUse => "address in use",
            Self::AddrNotAvailable => "address not available",
            Self::ConnectionAborted => "connection aborted",
            Self::ConnectionRefused => "connection refused",
            Self::ConnectionReset => "connection reset",
            Self::NotConnected => "not connected",
            Self::NetworkDown => "network down",
            Self::NetworkUnreachable => "network unreachable",
            Self::HostUnreachable => "host unreachable",
            Self::ArgumentListTooLong => "argument list too long",
            Self::Deadlock => "deadlock",
            Self::OutOfMemory => "out of memory",
            Self::NotSeekable => "seek on unseekable file",
            Self::Unsupported => "unsupported",
            Self::WriteZero => "write zero",
            Self::UnexpectedEof => "unexpected end of file",
            Self::Other => "other error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<std::io::ErrorKind> for ErrorKind {
    /// Maps the standard library's kind onto the closest portable kind.
    ///
    /// Kinds without a counterpart, including any added to the standard
    /// library in the future, become [`ErrorKind::Other`].
    fn from(kind: std::io::ErrorKind) -> Self {
        use std::io::ErrorKind as Std;

        match kind {
            Std::NotFound => Self::NotFound,
            Std::PermissionDenied => Self::PermissionDenied,
            Std::AlreadyExists => Self::AlreadyExists,
            Std::InvalidInput => Self::InvalidInput,
            Std::InvalidData => Self::InvalidData,
            Std::InvalidFilename => Self::InvalidFilename,
            Std::IsADirectory => Self::IsADirectory,
            Std::NotADirectory => Self::NotADirectory,
            Std::DirectoryNotEmpty => Self::DirectoryNotEmpty,
            Std::ReadOnlyFilesystem => Self::ReadOnlyFilesystem,
            Std::StorageFull => Self::StorageFull,
            Std::FileTooLarge => Self::FileTooLarge,
            Std::TooManyLinks => Self::TooManyLinks,
            Std::QuotaExceeded => Self::QuotaExceeded,
            Std::ResourceBusy => Self::ResourceBusy,
            Std::ExecutableFileBusy => Self::ExecutableFileBusy,
            Std::CrossesDevices => Self::CrossesDevices,
            Std::StaleNetworkFileHandle => Self::StaleNetworkFileHandle,
            Std::BrokenPipe => Self::BrokenPipe,
            Std::Interrupted => Self::Interrupted,
            Std::WouldBlock => Self::WouldBlock,
            Std::TimedOut => Self::TimedOut,
            Std::AddrInUse => Self::AddrInUse,
            Std::AddrNotAvailable => Self::AddrNotAvailable,
            Std::ConnectionAborted => Self::ConnectionAborted,
            Std::ConnectionRefused => Self::ConnectionRefused,
            Std::ConnectionReset => Self::ConnectionReset,
            Std::NotConnected => Self::NotConnected,
            Std::NetworkDown => Self::NetworkDown,
            Std::NetworkUnreachable => Self::NetworkUnreachable,
            Std::HostUnreachable => Self::HostUnreachable,
            Std::ArgumentListTooLong => Self::ArgumentListTooLong,
            Std::Deadlock => Self::Deadlock,
            Std::OutOfMemory => Self::OutOfMemory,
            Std::NotSeekable => Self::NotSeekable,
            Std::Unsupported => Self::Unsupported,
            Std::WriteZero => Self::WriteZero,
            Std::UnexpectedEof => Self::UnexpectedEof,
            _ => Self::Other,
        }
    }
}

impl From<ErrorKind> for std::io::ErrorKind {
    fn from(kind: ErrorKind) -> Self {
        use std::io::ErrorKind as Std;

        match kind {
            ErrorKind::NotFound => Std::NotFound,
            ErrorKind::PermissionDenied => Std::PermissionDenied,
            ErrorKind::AlreadyExists => Std::AlreadyExists,
            ErrorKind::InvalidInput => Std::InvalidInput,
            ErrorKind::InvalidData => Std::InvalidData,
            ErrorKind::InvalidFilename => Std::InvalidFilename,
            ErrorKind::IsADirectory => Std::IsADirectory,
            ErrorKind::NotADirectory => Std::NotADirectory,
            ErrorKind::DirectoryNotEmpty => Std::DirectoryNotEmpty,
            ErrorKind::ReadOnlyFilesystem => Std::ReadOnlyFilesystem,
            ErrorKind::StorageFull => Std::StorageFull,
            ErrorKind::FileTooLarge => Std::FileTooLarge,
            ErrorKind::TooManyLinks => Std::TooManyLinks,
            ErrorKind::QuotaExceeded => Std::QuotaExceeded,
            ErrorKind::ResourceBusy => Std::ResourceBusy,
            ErrorKind::ExecutableFileBusy => Std::ExecutableFileBusy,
            ErrorKind::CrossesDevices => Std::CrossesDevices,
            ErrorKind::StaleNetworkFileHandle => Std::StaleNetworkFileHandle,
            ErrorKind::BrokenPipe => Std::BrokenPipe,
            ErrorKind::Interrupted => Std::Interrupted,
            ErrorKind::WouldBlock => Std::WouldBlock,
            ErrorKind::TimedOut => Std::TimedOut,
            ErrorKind::AddrInUse => Std::AddrInUse,
            ErrorKind::AddrNotAvailable => Std::AddrNotAvailable,
            ErrorKind::ConnectionAborted => Std::ConnectionAborted,
            ErrorKind::ConnectionRefused => Std::ConnectionRefused,
            ErrorKind::ConnectionReset => Std::ConnectionReset,
            ErrorKind::NotConnected => Std::NotConnected,
            ErrorKind::NetworkDown => Std::NetworkDown,
            ErrorKind::NetworkUnreachable => Std::NetworkUnreachable,
            ErrorKind::HostUnreachable => Std::HostUnreachable,
            ErrorKind::ArgumentListTooLong => Std::ArgumentListTooLong,
            ErrorKind::Deadlock => Std::Deadlock,
            ErrorKind::OutOfMemory => Std::OutOfMemory,
            ErrorKind::NotSeekable => Std::NotSeekable,
            ErrorKind::Unsupported => Std::Unsupported,
            ErrorKind::WriteZero => Std::WriteZero,
            ErrorKind::UnexpectedEof => Std::UnexpectedEof,
            ErrorKind::FilesystemLoop | ErrorKind::InProgress | ErrorKind::Other => Std::Other,
        }
    }
}
