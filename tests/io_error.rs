use violet::{
    io::{self, ErrorKind, IoError, PlatformError},
    prelude::*,
};

const MISSING: &str = "/does/not/exist/xyzzy";

#[test]
fn test_std_open_not_found() {
    let error = IoError::from(std::fs::File::open(MISSING).unwrap_err());
    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert!(error.raw_os_error().is_some());

    #[cfg(unix)]
    assert_eq!(error.raw_os_error(), Some(libc::ENOENT));
}

#[cfg(unix)]
#[test]
fn test_syscall_open_not_found() {
    fn open(path: &core::ffi::CStr) -> io::Result<libc::c_int> {
        // SAFETY: `path` is a valid NUL-terminated string.
        let fd = unsafe { libc::open(path.as_ptr(), libc::O_RDONLY) };
        if fd == -1 {
            return Err(IoError::last_os_error());
        }
        Ok(fd)
    }

    let error = open(c"/does/not/exist/xyzzy").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert_eq!(error.raw_os_error(), Some(libc::ENOENT));

    let rendered = error.to_string();
    let expected_prefix = format!("I/O error (system error «{}»): ", libc::ENOENT);
    assert!(rendered.starts_with(&expected_prefix), "{rendered}");
}

#[cfg(unix)]
#[test]
fn test_errno_table() {
    let cases = [
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
    ];

    for (code, kind) in cases {
        let error = IoError::from_raw_os_error(code);
        assert_eq!(error.kind(), kind, "errno {code}");
        assert_eq!(error.raw_os_error(), Some(code));
    }

    assert_eq!(PlatformError::from_raw(100_000).kind(), ErrorKind::Other);
}

#[test]
fn test_explicit_kinds_are_stable() {
    for kind in ErrorKind::ALL {
        assert_eq!(IoError::from_kind(kind).kind(), kind);
        assert_eq!(IoError::with_message(kind, "message").kind(), kind);
        assert_eq!(IoError::new(kind, 7u8).kind(), kind);
        assert_eq!(IoError::from(kind).raw_os_error(), None);
    }
}

#[test]
fn test_io_error_into_report() {
    fn read_header() -> io::Result<u32> {
        Err(IoError::with_message(ErrorKind::UnexpectedEof, "header truncated"))
    }

    fn load() -> Result<u32, Report> {
        let header = read_header()?;
        Ok(header)
    }

    let report = load().unwrap_err();
    assert_eq!(report.node_count(), 1);
    assert_eq!(report.to_string(), "I/O error (unexpected end of file): header truncated");
    assert_eq!(
        report.downcast_current::<IoError>().map(IoError::kind),
        Some(ErrorKind::UnexpectedEof)
    );
}

#[test]
fn test_clone_keeps_payload() {
    let error = IoError::new(ErrorKind::InvalidData, String::from("bad block"));
    let clone = error.clone();
    drop(error);
    assert_eq!(clone.downcast_ref::<String>().map(String::as_str), Some("bad block"));

    let payload = clone.into_inner().unwrap().downcast::<String>().unwrap();
    assert_eq!(*payload, "bad block");
}
