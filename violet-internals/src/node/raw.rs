//! Type-erased node pointer types.
//!
//! This module encapsulates the `ptr` field of [`RawNode`] and
//! [`RawNodeRef`], ensuring it is only visible within this module. This
//! visibility restriction guarantees the safety invariant: **the pointer always
//! comes from `Box<NodeData<C>>`**.
//!
//! # Safety Invariant
//!
//! Since the `ptr` field can only be set via [`RawNode::new`] (which creates it
//! from `Box::into_raw`), and cannot be modified afterward, the pointer
//! provenance remains valid throughout the value's lifetime.
//!
//! # Type Erasure
//!
//! The concrete type parameter `C` is erased by casting to
//! `NodeData<Erased>`. The vtable stored within the `NodeData` provides the
//! runtime type information needed to safely downcast and format payloads.
//!
//! # Allocation Strategy
//!
//! Every node is a separate `Box` allocation with exactly one owner: either
//! the report holding the head of the chain or the node in front of it.
//! Nodes are never shared, so no reference counting is involved.

use core::{any::TypeId, panic::Location, ptr::NonNull};

use alloc::boxed::Box;

use crate::{handlers::PayloadHandler, node::data::NodeData, util::Erased};

/// A pointer to a [`NodeData`] that is guaranteed to point to an initialized
/// instance of a [`NodeData<C>`] for some specific `C`, though we do not know
/// which actual `C` it is.
///
/// However, the pointer is allowed to transition into a non-initialized state
/// inside the [`RawNode::drop`] method.
///
/// The pointer is guaranteed to have been created using [`Box::into_raw`].
#[repr(transparent)]
pub struct RawNode {
    /// Pointer to the inner node data
    ///
    /// # Safety
    ///
    /// The following safety invariants are guaranteed to be upheld as long as
    /// this struct exists:
    ///
    /// 1. The pointer must have been created from a `Box<NodeData<C>>` for
    ///    some `C: Send + Sync` using `Box::into_raw`.
    /// 2. The pointer will point to the same `NodeData<C>` for the entire
    ///    lifetime of this object.
    ptr: NonNull<NodeData<Erased>>,
}

// SAFETY: `RawNode` owns its `NodeData<C>` exactly like a `Box` would, and
// `RawNode::new` only accepts payloads that are `Send + Sync`. The header
// fields (vtable, location, tail) are `Send + Sync` themselves.
unsafe impl Send for RawNode {}

// SAFETY: Shared access only ever hands out `&C` for a payload that is
// `Sync`, as required by `RawNode::new`.
unsafe impl Sync for RawNode {}

impl RawNode {
    /// Creates a new [`RawNode`] with the specified handler, payload, creation
    /// location and tail.
    ///
    /// `next` becomes the older part of the chain; it is owned by the new
    /// node from now on.
    #[inline]
    pub fn new<C, H>(
        payload: C,
        location: &'static Location<'static>,
        next: Option<RawNode>,
    ) -> Self
    where
        C: Send + Sync + 'static,
        H: PayloadHandler<C>,
    {
        let data = Box::new(NodeData::new::<H>(payload, location, next));
        let ptr: *mut NodeData<C> = Box::into_raw(data);
        let ptr: *mut NodeData<Erased> = ptr.cast::<NodeData<Erased>>();

        // SAFETY: `Box::into_raw` returns a non-null pointer
        let ptr: NonNull<NodeData<Erased>> = unsafe { NonNull::new_unchecked(ptr) };

        Self {
            // SAFETY:
            // 1. We just created the pointer using `Box::into_raw` and `C` is
            //    `Send + Sync` by the bounds above.
            // 2. We are creating the object here and we are not changing the pointer.
            ptr,
        }
    }

    /// Returns a reference to the [`NodeData`] instance.
    #[inline]
    pub fn as_ref(&self) -> RawNodeRef<'_> {
        RawNodeRef {
            ptr: self.ptr,
            _marker: core::marker::PhantomData,
        }
    }

    /// Returns a raw mutable pointer to the [`NodeData`] instance.
    ///
    /// The pointer carries the provenance of the original `Box`.
    #[inline]
    pub(super) fn as_mut_ptr(&mut self) -> *mut NodeData<Erased> {
        self.ptr.as_ptr()
    }
}

impl core::ops::Drop for RawNode {
    fn drop(&mut self) {
        // Detach the tail first and walk it in a loop, so that dropping a
        // long chain does not recurse once per node.
        let mut next = self.take_next();
        while let Some(mut node) = next {
            next = node.take_next();
        }

        let vtable = self.as_ref().vtable();

        // SAFETY:
        // 1. The pointer comes from `Box::into_raw` (guaranteed by `RawNode::new`)
        // 2. The vtable returned by `self.as_ref().vtable()` is guaranteed to match the
        //    data in the `NodeData`.
        // 3. The pointer is not used after this call (we're in the drop function)
        unsafe {
            vtable.drop(self.ptr);
        }
    }
}

/// A lifetime-bound pointer to a [`NodeData`] that is guaranteed to point
/// to an initialized instance of a [`NodeData<C>`] for some specific `C`,
/// though we do not know which actual `C` it is.
///
/// We cannot use a [`&'a NodeData<C>`] directly, because that would require
/// us to know the actual type of the payload, which we do not.
///
/// [`&'a NodeData<C>`]: NodeData
///
/// # Safety invariants
///
/// This reference behaves like a `&'a NodeData<C>` for some unknown
/// `C` and upholds the usual safety invariants of shared references:
///
/// 1. The pointee is properly initialized for the entire lifetime `'a`.
/// 2. The pointee is not mutated for the entire lifetime `'a`.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct RawNodeRef<'a> {
    /// Pointer to the inner node data
    ///
    /// # Safety
    ///
    /// The following safety invariants are guaranteed to be upheld as long as
    /// this struct exists:
    ///
    /// 1. The pointer must have been created from a `Box<NodeData<C>>` for
    ///    some `C: Send + Sync` using `Box::into_raw`.
    /// 2. The pointer will point to the same `NodeData<C>` for the entire
    ///    lifetime of this object.
    ptr: NonNull<NodeData<Erased>>,

    /// Marker to tell the compiler that we should
    /// behave the same as a `&'a NodeData<Erased>`
    _marker: core::marker::PhantomData<&'a NodeData<Erased>>,
}

// SAFETY: A `RawNodeRef<'a>` is a shared borrow of a `RawNode`, which is
// `Sync`.
unsafe impl Send for RawNodeRef<'_> {}

// SAFETY: See above.
unsafe impl Sync for RawNodeRef<'_> {}

impl<'a> RawNodeRef<'a> {
    /// Casts the [`RawNodeRef`] to a [`NodeData<C>`] reference.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The type `C` matches the actual payload type stored in the
    ///    [`NodeData`]
    #[inline]
    pub(super) unsafe fn cast_inner<C>(self) -> &'a NodeData<C> {
        // Debug assertion to catch type mismatches in case of bugs
        debug_assert_eq!(self.vtable().type_id(), TypeId::of::<C>());

        let this = self.ptr.cast::<NodeData<C>>();
        // SAFETY: Converting the NonNull pointer to a reference is sound because:
        // - The pointer is non-null, properly aligned, and dereferenceable (guaranteed
        //   by RawNodeRef's type invariants)
        // - The pointee is properly initialized (RawNodeRef's doc comment guarantees
        //   it points to an initialized NodeData<C> for some C)
        // - The type `C` matches the actual payload type (guaranteed by caller)
        // - Shared access is allowed
        // - The reference lifetime 'a is valid (tied to RawNodeRef<'a>'s lifetime)
        unsafe { this.as_ref() }
    }

    /// Returns a raw pointer to the [`NodeData`] instance.
    #[inline]
    pub(super) fn as_ptr(self) -> *const NodeData<Erased> {
        self.ptr.as_ptr()
    }

    /// Returns the [`TypeId`] of the payload.
    #[inline]
    pub fn payload_type_id(self) -> TypeId {
        self.vtable().type_id()
    }

    /// Returns the [`core::any::type_name`] of the payload.
    #[inline]
    pub fn payload_type_name(self) -> &'static str {
        self.vtable().type_name()
    }

    /// Returns the [`TypeId`] of the handler the node was created with.
    #[inline]
    pub fn handler_type_id(self) -> TypeId {
        self.vtable().handler_type_id()
    }

    /// Formats the payload by using the [`PayloadHandler::display`] method
    /// specified by the handler used to create the [`NodeData`].
    #[inline]
    pub fn payload_display(self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let vtable = self.vtable();
        // SAFETY:
        // 1. The vtable returned by `self.vtable()` is guaranteed to match the data in
        //    the `NodeData`.
        unsafe { vtable.display(self, formatter) }
    }

    /// Formats the payload by using the [`PayloadHandler::debug`] method
    /// specified by the handler used to create the [`NodeData`].
    #[inline]
    pub fn payload_debug(self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let vtable = self.vtable();
        // SAFETY:
        // 1. The vtable returned by `self.vtable()` is guaranteed to match the data in
        //    the `NodeData`.
        unsafe { vtable.debug(self, formatter) }
    }

    /// Returns `true` if both references point to the same node.
    #[inline]
    pub fn ptr_eq(self, other: RawNodeRef<'_>) -> bool {
        core::ptr::eq(self.as_ptr(), other.as_ptr())
    }
}
