//! Vtable for type-erased node operations.
//!
//! This module contains the [`NodeVtable`] which enables calling handler
//! methods on nodes when their concrete payload type `C` and handler type `H`
//! have been erased. The vtable stores function pointers that dispatch to the
//! correct typed implementations.
//!
//! This module encapsulates the fields of [`NodeVtable`] so they cannot be
//! accessed directly. This visibility restriction guarantees the safety
//! invariant: **the vtable's type parameters must match the actual payload
//! type and handler stored in the `NodeData`**.
//!
//! # Safety Invariant
//!
//! This invariant is maintained because vtables are created as `&'static`
//! references via [`NodeVtable::new`], which pairs the function pointers
//! with specific types `C` and `H` at compile time.

use alloc::boxed::Box;
use core::{any::TypeId, ptr::NonNull};

use crate::{
    handlers::PayloadHandler,
    node::{data::NodeData, raw::RawNodeRef},
    util::Erased,
};

/// Vtable for type-erased node operations.
///
/// # Safety
///
/// The following safety invariants are guaranteed to be upheld as long as this
/// struct exists:
///
/// * The fields `drop`, `display` and `debug` all point to the functions
///   defined below
/// * The concrete pointers are all instantiated with the same payload type `C`
///   and handler type `H` that were used to create this `NodeVtable`.
pub(crate) struct NodeVtable {
    /// Gets the [`TypeId`] of the payload type that was used to create this
    /// [`NodeVtable`].
    type_id: fn() -> TypeId,
    /// Gets the [`core::any::type_name`] of the payload type that was used to
    /// create this [`NodeVtable`].
    type_name: fn() -> &'static str,
    /// Gets the [`TypeId`] of the handler that was used to create this
    /// [`NodeVtable`].
    handler_type_id: fn() -> TypeId,
    /// Method to drop the [`Box<NodeData<C>>`] instance pointed to by this
    /// pointer.
    drop: unsafe fn(NonNull<NodeData<Erased>>),
    /// Formats the payload using the `display` method on the handler.
    display: unsafe fn(RawNodeRef<'_>, &mut core::fmt::Formatter<'_>) -> core::fmt::Result,
    /// Formats the payload using the `debug` method on the handler.
    debug: unsafe fn(RawNodeRef<'_>, &mut core::fmt::Formatter<'_>) -> core::fmt::Result,
}

impl NodeVtable {
    /// Creates a new [`NodeVtable`] for the payload type `C` and the handler
    /// type `H`.
    pub(super) const fn new<C: 'static, H: PayloadHandler<C>>() -> &'static Self {
        const {
            &Self {
                type_id: TypeId::of::<C>,
                type_name: core::any::type_name::<C>,
                handler_type_id: TypeId::of::<H>,
                drop: drop::<C>,
                display: display::<C, H>,
                debug: debug::<C, H>,
            }
        }
    }

    /// Gets the [`TypeId`] of the payload type that was used to create this
    /// [`NodeVtable`].
    #[inline]
    pub(super) fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Gets the [`core::any::type_name`] of the payload type that was used to
    /// create this [`NodeVtable`].
    #[inline]
    pub(super) fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Gets the [`TypeId`] of the handler that was used to create this
    /// [`NodeVtable`].
    #[inline]
    pub(super) fn handler_type_id(&self) -> TypeId {
        (self.handler_type_id)()
    }

    /// Drops the `Box<NodeData<C>>` instance pointed to by this pointer.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The pointer comes from a [`Box<NodeData<C>>`] turned into a pointer
    ///    via [`Box::into_raw`]
    /// 2. This [`NodeVtable`] must be a vtable for the payload type stored in
    ///    the [`NodeData`].
    /// 3. The pointer is not used after calling this method.
    #[inline]
    pub(super) unsafe fn drop(&self, ptr: NonNull<NodeData<Erased>>) {
        // SAFETY: We know that `self.drop` points to the function `drop::<C>` below.
        // That function's safety requirements are upheld:
        // 1. Guaranteed by the caller
        // 2. Guaranteed by the caller
        // 3. Guaranteed by the caller
        unsafe {
            (self.drop)(ptr);
        }
    }

    /// Formats the payload using the [`H::display`] function used when
    /// creating this [`NodeVtable`].
    ///
    /// [`H::display`]: PayloadHandler::display
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. This [`NodeVtable`] must be a vtable for the payload type stored in
    ///    the [`RawNodeRef`].
    #[inline]
    pub(super) unsafe fn display(
        &self,
        ptr: RawNodeRef<'_>,
        formatter: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        // SAFETY: We know that `self.display` points to the function `display::<C, H>`
        // below. That function's safety requirements are upheld:
        // 1. Guaranteed by the caller
        unsafe { (self.display)(ptr, formatter) }
    }

    /// Formats the payload using the [`H::debug`] function used when creating
    /// this [`NodeVtable`].
    ///
    /// [`H::debug`]: PayloadHandler::debug
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. This [`NodeVtable`] must be a vtable for the payload type stored in
    ///    the [`RawNodeRef`].
    #[inline]
    pub(super) unsafe fn debug(
        &self,
        ptr: RawNodeRef<'_>,
        formatter: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        // SAFETY: We know that `self.debug` points to the function `debug::<C, H>`
        // below. That function's safety requirements are upheld:
        // 1. Guaranteed by the caller
        unsafe { (self.debug)(ptr, formatter) }
    }
}

/// Drops the [`Box<NodeData<C>>`] instance pointed to by this pointer.
///
/// The tail of the node must have been detached beforehand, otherwise it is
/// dropped recursively together with this node.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. The pointer comes from [`Box<NodeData<C>>`] via [`Box::into_raw`]
/// 2. The payload type `C` matches the actual payload type stored in the
///    [`NodeData`]
/// 3. The pointer is not used after calling this method.
unsafe fn drop<C: 'static>(ptr: NonNull<NodeData<Erased>>) {
    let ptr: NonNull<NodeData<C>> = ptr.cast();
    let ptr = ptr.as_ptr();
    // SAFETY:
    // 1. The pointer has the correct type and came from `Box::into_raw` (guaranteed
    //    by caller)
    // 2. After `from_raw`, the pointer is consumed and not accessed again
    let boxed = unsafe { Box::from_raw(ptr) };
    core::mem::drop(boxed);
}

/// Formats a node payload using its handler's display implementation.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. The type `C` matches the actual payload type stored in the [`NodeData`]
unsafe fn display<C: 'static, H: PayloadHandler<C>>(
    ptr: RawNodeRef<'_>,
    formatter: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    // SAFETY:
    // 1. Guaranteed by the caller
    let payload: &C = unsafe { ptr.payload_downcast_unchecked::<C>() };
    H::display(payload, formatter)
}

/// Formats a node payload using its handler's debug implementation.
///
/// # Safety
///
/// The caller must ensure:
///
/// 1. The type `C` matches the actual payload type stored in the [`NodeData`]
unsafe fn debug<C: 'static, H: PayloadHandler<C>>(
    ptr: RawNodeRef<'_>,
    formatter: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    // SAFETY:
    // 1. Guaranteed by the caller
    let payload: &C = unsafe { ptr.payload_downcast_unchecked::<C>() };
    H::debug(payload, formatter)
}

#[cfg(test)]
mod tests {
    use core::fmt;

    use super::*;

    struct HandlerI32;
    impl PayloadHandler<i32> for HandlerI32 {
        fn display(value: &i32, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(value, formatter)
        }

        fn debug(value: &i32, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Debug::fmt(value, formatter)
        }
    }

    struct OtherHandlerI32;
    impl PayloadHandler<i32> for OtherHandlerI32 {
        fn display(value: &i32, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "#{value}")
        }

        fn debug(value: &i32, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "Other({value})")
        }
    }

    #[test]
    fn test_node_vtable_eq() {
        let vtable1 = NodeVtable::new::<i32, HandlerI32>();
        let vtable2 = NodeVtable::new::<i32, HandlerI32>();

        // Both should be the exact same static instance
        assert!(core::ptr::eq(vtable1, vtable2));
    }

    #[test]
    fn test_node_vtable_per_handler() {
        let vtable1 = NodeVtable::new::<i32, HandlerI32>();
        let vtable2 = NodeVtable::new::<i32, OtherHandlerI32>();

        assert!(!core::ptr::eq(vtable1, vtable2));
        assert_eq!(vtable1.type_id(), vtable2.type_id());
        assert_ne!(vtable1.handler_type_id(), vtable2.handler_type_id());
    }

    #[test]
    fn test_node_type_id_and_name() {
        let vtable = NodeVtable::new::<i32, HandlerI32>();
        assert_eq!(vtable.type_id(), TypeId::of::<i32>());
        assert_eq!(vtable.type_name(), "i32");
        assert_eq!(vtable.handler_type_id(), TypeId::of::<HandlerI32>());
    }
}
