use alloc::{borrow::Cow, boxed::Box};
use core::{any::Any, fmt};

use super::{ErrorKind, PlatformError, RawOsError};

/// The error type of I/O-adjacent operations.
///
/// An `IoError` has exactly one of four shapes:
///
/// - an operating system error captured with [`IoError::last_os_error`] or
///   [`IoError::from_raw_os_error`],
/// - a bare [`ErrorKind`], created with [`IoError::from_kind`],
/// - a kind plus a short message, created with [`IoError::with_message`],
/// - a kind plus an arbitrary payload, created with [`IoError::new`].
///
/// [`raw_os_error`](IoError::raw_os_error) is `Some` for the first shape
/// only. [`kind`](IoError::kind) never allocates.
///
/// # Examples
///
/// ```
/// use violet::io::{ErrorKind, IoError};
///
/// let error = IoError::with_message(ErrorKind::InvalidData, "checksum mismatch");
/// assert_eq!(error.kind(), ErrorKind::InvalidData);
/// assert_eq!(error.raw_os_error(), None);
/// assert_eq!(error.to_string(), "I/O error (invalid data): checksum mismatch");
/// ```
#[derive(Clone)]
pub struct IoError {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Os(PlatformError),
    Simple(ErrorKind),
    SimpleMessage(ErrorKind, Cow<'static, str>),
    Custom(Box<Custom>),
}

struct Custom {
    kind: ErrorKind,
    payload: Box<dyn Payload>,
}

impl Clone for Custom {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            payload: self.payload.clone_box(),
        }
    }
}

/// Object-safe view of a rich payload.
trait Payload: fmt::Display + fmt::Debug + Send + Sync + 'static {
    fn clone_box(&self) -> Box<dyn Payload>;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync>;
}

impl<T> Payload for T
where
    T: Clone + fmt::Display + fmt::Debug + Send + Sync + 'static,
{
    fn clone_box(&self) -> Box<dyn Payload> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync> {
        self
    }
}

impl IoError {
    /// Captures the calling thread's last operating system error.
    ///
    /// Like [`PlatformError::current`], this must run directly after the
    /// failing system call, while the error indicator holds a non-zero code.
    /// Debug builds panic otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(unix)] {
    /// use violet::io::{ErrorKind, IoError};
    ///
    /// let path = c"/does/not/exist/xyzzy";
    /// // SAFETY: `path` is a valid NUL-terminated string
    /// let fd = unsafe { libc::open(path.as_ptr(), libc::O_RDONLY) };
    /// assert_eq!(fd, -1);
    ///
    /// let error = IoError::last_os_error();
    /// assert_eq!(error.kind(), ErrorKind::NotFound);
    /// assert_eq!(error.raw_os_error(), Some(libc::ENOENT));
    /// # }
    /// ```
    #[must_use]
    pub fn last_os_error() -> Self {
        Self {
            repr: Repr::Os(PlatformError::current()),
        }
    }

    /// Creates an error from a raw operating system error code.
    #[must_use]
    pub const fn from_raw_os_error(code: RawOsError) -> Self {
        Self {
            repr: Repr::Os(PlatformError::from_raw(code)),
        }
    }

    /// Creates an error that carries nothing but a kind.
    #[must_use]
    pub const fn from_kind(kind: ErrorKind) -> Self {
        Self {
            repr: Repr::Simple(kind),
        }
    }

    /// Creates an error from a kind and a short message.
    ///
    /// Static strings are stored without allocating.
    #[must_use]
    pub fn with_message(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            repr: Repr::SimpleMessage(kind, message.into()),
        }
    }

    /// Creates an error from a kind and an arbitrary payload.
    ///
    /// The payload can be recovered with [`downcast_ref`](Self::downcast_ref)
    /// or [`into_inner`](Self::into_inner). It is cloned together with the
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use violet::io::{ErrorKind, IoError};
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct Offset(u64);
    ///
    /// impl std::fmt::Display for Offset {
    ///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    ///         write!(f, "corrupt block at offset {}", self.0)
    ///     }
    /// }
    ///
    /// let error = IoError::new(ErrorKind::InvalidData, Offset(4096));
    /// assert_eq!(error.downcast_ref::<Offset>(), Some(&Offset(4096)));
    /// assert_eq!(
    ///     error.to_string(),
    ///     "I/O error (invalid data): corrupt block at offset 4096"
    /// );
    /// ```
    #[must_use]
    pub fn new<P>(kind: ErrorKind, payload: P) -> Self
    where
        P: Clone + fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self {
            repr: Repr::Custom(Box::new(Custom {
                kind,
                payload: Box::new(payload),
            })),
        }
    }

    /// Returns the portable kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match &self.repr {
            Repr::Os(error) => error.kind(),
            Repr::Simple(kind) | Repr::SimpleMessage(kind, _) => *kind,
            Repr::Custom(custom) => custom.kind,
        }
    }

    /// Returns the raw operating system code, if this error was captured from
    /// the operating system.
    #[must_use]
    pub fn raw_os_error(&self) -> Option<RawOsError> {
        self.platform_error().map(|error| error.raw())
    }

    /// Returns the captured [`PlatformError`], if any.
    #[must_use]
    pub fn platform_error(&self) -> Option<PlatformError> {
        match &self.repr {
            Repr::Os(error) => Some(*error),
            _ => None,
        }
    }

    /// Returns the message of an error created with
    /// [`with_message`](Self::with_message).
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.repr {
            Repr::SimpleMessage(_, message) => Some(&**message),
            _ => None,
        }
    }

    /// Returns a reference to the payload if the error was created with
    /// [`IoError::new`] and the payload is a `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match &self.repr {
            Repr::Custom(custom) => custom.payload.as_any().downcast_ref(),
            _ => None,
        }
    }

    /// Consumes the error and returns the payload of an error created with
    /// [`IoError::new`].
    #[must_use]
    pub fn into_inner(self) -> Option<Box<dyn Any + Send + Sync>> {
        match self.repr {
            Repr::Custom(custom) => Some(custom.payload.into_any()),
            _ => None,
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Os(error) => write!(
                f,
                "I/O error (system error «{}»): {}",
                error.raw(),
                error.describe()
            ),
            Repr::Simple(kind) => write!(f, "I/O error: {kind}"),
            Repr::SimpleMessage(kind, message) => write!(f, "I/O error ({kind}): {message}"),
            Repr::Custom(custom) => write!(f, "I/O error ({}): {}", custom.kind, custom.payload),
        }
    }
}

impl fmt::Debug for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Os(error) => fmt::Debug::fmt(error, f),
            Repr::Simple(kind) => f.debug_tuple("Kind").field(kind).finish(),
            Repr::SimpleMessage(kind, message) => f
                .debug_struct("Error")
                .field("kind", kind)
                .field("message", message)
                .finish(),
            Repr::Custom(custom) => f
                .debug_struct("Custom")
                .field("kind", &custom.kind)
                .field("payload", &custom.payload)
                .finish(),
        }
    }
}

impl core::error::Error for IoError {}

impl From<ErrorKind> for IoError {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

impl From<PlatformError> for IoError {
    fn from(error: PlatformError) -> Self {
        Self {
            repr: Repr::Os(error),
        }
    }
}

impl From<std::io::Error> for IoError {
    /// Keeps the operating system code when there is one; otherwise maps the
    /// kind and keeps the message of the wrapped error, if any.
    fn from(error: std::io::Error) -> Self {
        if let Some(code) = error.raw_os_error() {
            #[cfg(windows)]
            let code = code.cast_unsigned();
            return Self::from_raw_os_error(code);
        }

        let kind = ErrorKind::from(error.kind());
        match error.into_inner() {
            Some(inner) => Self::with_message(kind, inner.to_string()),
            None => Self::from_kind(kind),
        }
    }
}

impl From<IoError> for std::io::Error {
    fn from(error: IoError) -> Self {
        let kind = std::io::ErrorKind::from(error.kind());
        match error.repr {
            #[cfg(windows)]
            Repr::Os(os) => std::io::Error::from_raw_os_error(os.raw().cast_signed()),
            #[cfg(not(windows))]
            Repr::Os(os) => std::io::Error::from_raw_os_error(os.raw()),
            Repr::Simple(_) => std::io::Error::from(kind),
            Repr::SimpleMessage(_, message) => std::io::Error::new(kind, message.into_owned()),
            Repr::Custom(custom) => std::io::Error::new(
                kind,
                IoError {
                    repr: Repr::Custom(custom),
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(IoError: Send, Sync, Clone, core::error::Error);

    #[derive(Debug, Clone, PartialEq)]
    struct Sector(u32);

    impl fmt::Display for Sector {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "bad sector {}", self.0)
        }
    }

    #[test]
    fn test_kind_is_preserved() {
        for kind in ErrorKind::ALL {
            assert_eq!(IoError::from_kind(kind).kind(), kind);
            assert_eq!(IoError::with_message(kind, "m").kind(), kind);
            assert_eq!(IoError::new(kind, Sector(1)).kind(), kind);
            assert_eq!(IoError::from(kind).raw_os_error(), None);
        }
    }

    #[test]
    fn test_display_shapes() {
        assert_eq!(
            IoError::from_kind(ErrorKind::TimedOut).to_string(),
            "I/O error: timed out"
        );
        assert_eq!(
            IoError::with_message(ErrorKind::NotFound, String::from("no config")).to_string(),
            "I/O error (entity not found): no config"
        );
        assert_eq!(
            IoError::new(ErrorKind::InvalidData, Sector(7)).to_string(),
            "I/O error (invalid data): bad sector 7"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_os_shape() {
        let error = IoError::from_raw_os_error(libc::ENOENT);
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.raw_os_error(), Some(libc::ENOENT));

        let expected = format!(
            "I/O error (system error «{}»): {}",
            libc::ENOENT,
            PlatformError::from_raw(libc::ENOENT).describe()
        );
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_rich_payload() {
        let error = IoError::new(ErrorKind::Other, Sector(3));
        let cloned = error.clone();

        assert_eq!(error.downcast_ref::<Sector>(), Some(&Sector(3)));
        assert_eq!(error.downcast_ref::<String>(), None);
        assert_eq!(cloned.downcast_ref::<Sector>(), Some(&Sector(3)));
        assert!(IoError::from_kind(ErrorKind::Other).downcast_ref::<Sector>().is_none());

        let payload = error.into_inner().unwrap();
        assert_eq!(payload.downcast_ref::<Sector>(), Some(&Sector(3)));
        assert!(cloned.clone().into_inner().is_some());
        assert!(IoError::with_message(ErrorKind::Other, "x").into_inner().is_none());
    }

    #[test]
    fn test_message() {
        assert_eq!(
            IoError::with_message(ErrorKind::Other, "static").message(),
            Some("static")
        );
        assert_eq!(IoError::from_kind(ErrorKind::Other).message(), None);
    }

    #[test]
    fn test_std_interop() {
        let std_error = std::io::Error::new(std::io::ErrorKind::InvalidInput, "bad flag");
        let error = IoError::from(std_error);
        assert_eq!(error.kind(), ErrorKind::InvalidInput);
        assert_eq!(error.message(), Some("bad flag"));

        let back = std::io::Error::from(error);
        assert_eq!(back.kind(), std::io::ErrorKind::InvalidInput);
        assert_eq!(back.to_string(), "bad flag");

        let bare = std::io::Error::from(IoError::from_kind(ErrorKind::BrokenPipe));
        assert_eq!(bare.kind(), std::io::ErrorKind::BrokenPipe);

        let rich = std::io::Error::from(IoError::new(ErrorKind::InvalidData, Sector(9)));
        assert_eq!(rich.kind(), std::io::ErrorKind::InvalidData);
        assert_eq!(rich.to_string(), "I/O error (invalid data): bad sector 9");
    }

    #[cfg(unix)]
    #[test]
    fn test_std_os_interop() {
        let std_error = std::io::Error::from_raw_os_error(libc::EACCES);
        let error = IoError::from(std_error);
        assert_eq!(error.raw_os_error(), Some(libc::EACCES));
        assert_eq!(error.kind(), ErrorKind::PermissionDenied);

        let back = std::io::Error::from(error);
        assert_eq!(back.raw_os_error(), Some(libc::EACCES));
        assert_eq!(back.kind(), std::io::ErrorKind::PermissionDenied);
    }
}
