//! Module containing the type-erased chain node

pub(crate) mod data;
mod raw;
pub(crate) mod vtable;

pub use self::raw::{RawNode, RawNodeRef};
