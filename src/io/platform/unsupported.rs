use alloc::string::String;

use crate::io::ErrorKind;

pub(super) fn last_error() -> i32 {
    std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

pub(super) fn decode_error_kind(_code: i32) -> ErrorKind {
    ErrorKind::Other
}

pub(super) fn describe(code: i32) -> String {
    format!("unknown error {code}")
}
