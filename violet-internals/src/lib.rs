#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::missing_docs_in_private_items,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`violet`].
//!
//! # Overview
//!
//! This crate contains the low-level, type-erased chain node and the unsafe
//! operations that power the `Report` type of the [`violet`] crate. A report
//! is a singly linked list of these nodes; every node owns one payload of an
//! arbitrary type, the source location that created it, and the rest of the
//! chain below it.
//!
//! **This crate is an implementation detail.** No semantic versioning
//! guarantees are provided. Users should depend on the [`violet`] crate, not
//! this one.
//!
//! # Architecture
//!
//! - **[`node`]**: Type-erased node storage
//!   - [`RawNode`]: Owned node with [`Box`]-based allocation
//!   - [`RawNodeRef`]: Borrowed reference to a node
//!   - [`NodeData`]: `#[repr(C)]` wrapper enabling field access on erased
//!     types
//!   - [`NodeVtable`]: Function pointers for type-erased dispatch
//!
//! - **[`handlers`]**: The [`PayloadHandler`] trait, which defines how a
//!   payload is formatted
//!
//! # Safety Strategy
//!
//! When we erase a type like `NodeData<MyError>` to `NodeData<Erased>`, we
//! must ensure that the vtable function pointers still match the concrete
//! type stored in memory. This crate maintains that through:
//!
//! - **Module-based encapsulation**: the pointer and the vtable are private to
//!   the module that creates them, so the invariants can be checked locally
//! - **`#[repr(C)]` layout**: the header fields (vtable, location, next) sit
//!   in front of the payload and can be projected without knowing the payload
//!   type
//! - **Documented vtable contracts**: every vtable method states exactly when
//!   it may be called
//!
//! [`violet`]: https://docs.rs/violet/latest/violet/
//! [`NodeData`]: node::data::NodeData
//! [`NodeVtable`]: node::vtable::NodeVtable
//! [`PayloadHandler`]: handlers::PayloadHandler
//! [`Box`]: alloc::boxed::Box

extern crate alloc;

pub mod handlers;
mod node;
mod util;

pub use node::{RawNode, RawNodeRef};
