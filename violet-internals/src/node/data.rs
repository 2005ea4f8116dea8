//! This module encapsulates the fields of the [`NodeData`]. Since this is the
//! only place they are visible, the type of the [`NodeVtable`] is guaranteed
//! to always be in sync with the type of the actual payload. This follows from
//! the fact that they are in sync when created and that the API offers no way
//! to change the [`NodeVtable`] or payload type after creation.

use core::panic::Location;

use crate::{
    handlers::PayloadHandler,
    node::{
        raw::{RawNode, RawNodeRef},
        vtable::NodeVtable,
    },
};

/// Type-erased node data structure with vtable-based dispatch.
///
/// This struct uses `#[repr(C)]` to enable safe field access in type-erased
/// contexts, allowing access to the vtable, the location and the tail even
/// when the concrete payload type `C` is unknown.
#[repr(C)]
pub(crate) struct NodeData<C: 'static> {
    /// Reference to the vtable of this node
    vtable: &'static NodeVtable,
    /// Where the node was created
    location: &'static Location<'static>,
    /// The older part of the chain
    next: Option<RawNode>,
    /// The payload of this node
    payload: C,
}

impl<C: 'static> NodeData<C> {
    /// Creates a new [`NodeData`] with the specified handler, payload, location
    /// and tail.
    pub(super) fn new<H: PayloadHandler<C>>(
        payload: C,
        location: &'static Location<'static>,
        next: Option<RawNode>,
    ) -> Self {
        Self {
            vtable: NodeVtable::new::<C, H>(),
            location,
            next,
            payload,
        }
    }
}

impl RawNode {
    /// Returns a mutable reference to the slot holding the tail of this node.
    ///
    /// Writing `None` into the slot detaches the tail without dropping it only
    /// if the previous value was moved out first, e.g. with
    /// [`Option::take`].
    pub fn next_slot_mut(&mut self) -> &mut Option<RawNode> {
        let ptr = self.as_mut_ptr();

        // SAFETY: We don't know the actual inner payload type, but we do know
        // that it points to an instance of `NodeData<C>` for some specific `C`.
        // Since `NodeData<C>` is `#[repr(C)]`, that means we can access
        // the fields before the actual payload.
        //
        // We need to take care to avoid creating an actual reference to
        // the `NodeData` itself though, as that would still be undefined behavior
        // since we don't have the right type.
        let next_ptr: *mut Option<RawNode> = unsafe { &raw mut (*ptr).next };

        // SAFETY: We turn the `*mut` pointer into a `&mut` reference bound to
        // the borrow of `self`. `RawNode` uniquely owns its allocation, so the
        // exclusive borrow of `self` implies exclusive access to the field.
        unsafe { &mut *next_ptr }
    }

    /// Detaches and returns the tail of this node, leaving it without one.
    pub fn take_next(&mut self) -> Option<RawNode> {
        self.next_slot_mut().take()
    }
}

impl<'a> RawNodeRef<'a> {
    /// Returns a reference to the [`NodeVtable`] of the [`NodeData`] instance.
    pub(super) fn vtable(self) -> &'static NodeVtable {
        let ptr = self.as_ptr();
        // SAFETY: We don't know the actual inner payload type, but we do know
        // that it points to an instance of `NodeData<C>` for some specific `C`.
        // Since `NodeData<C>` is `#[repr(C)]`, that means we can access
        // the fields before the actual payload.
        //
        // We need to take care to avoid creating an actual reference to
        // the `NodeData` itself though, as that would still be undefined behavior
        // since we don't have the right type.
        let vtable_ptr: *const &'static NodeVtable = unsafe { &raw const (*ptr).vtable };

        // SAFETY: Dereferencing the pointer and getting out the `&'static NodeVtable`
        // is valid for the same reasons
        unsafe { *vtable_ptr }
    }

    /// Returns the source location at which this node was created.
    pub fn location(self) -> &'static Location<'static> {
        let ptr = self.as_ptr();
        // SAFETY: The `location` field precedes the payload in a `#[repr(C)]`
        // struct, so it can be projected without knowing the payload type.
        let location_ptr: *const &'static Location<'static> =
            unsafe { &raw const (*ptr).location };

        // SAFETY: The field is initialized for as long as the node exists and
        // the value is a `Copy` reference with a `'static` lifetime.
        unsafe { *location_ptr }
    }

    /// Returns the next (older) node of the chain, if any.
    pub fn next(self) -> Option<RawNodeRef<'a>> {
        let ptr = self.as_ptr();
        // SAFETY: The `next` field precedes the payload in a `#[repr(C)]`
        // struct, so it can be projected without knowing the payload type.
        let next_ptr: *const Option<RawNode> = unsafe { &raw const (*ptr).next };

        // SAFETY: We turn the `*const` pointer into a `&'a` reference. This is
        // valid because the existence of the `RawNodeRef<'a>` already implies
        // that we have readable access to the node for the 'a lifetime.
        let next: &'a Option<RawNode> = unsafe { &*next_ptr };
        next.as_ref().map(RawNode::as_ref)
    }

    /// Accesses the payload of the [`NodeData`] instance as a reference to the
    /// specified type.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. The type `C` matches the actual payload type stored in the
    ///    [`NodeData`]
    pub unsafe fn payload_downcast_unchecked<C: 'static>(self) -> &'a C {
        // SAFETY:
        // 1. Guaranteed by the caller
        let this = unsafe { self.cast_inner::<C>() };
        &this.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_data_field_offsets() {
        use core::mem::{offset_of, size_of};

        fn check<T: 'static>() {
            // Header fields must come first, in this order: vtable, location, next
            assert_eq!(offset_of!(NodeData<T>, vtable), 0);
            assert_eq!(
                offset_of!(NodeData<T>, location),
                size_of::<&'static NodeVtable>()
            );
            assert_eq!(
                offset_of!(NodeData<T>, next),
                size_of::<&'static NodeVtable>() + size_of::<&'static Location<'static>>()
            );
            assert!(
                offset_of!(NodeData<T>, payload)
                    >= size_of::<&'static NodeVtable>()
                        + size_of::<&'static Location<'static>>()
                        + size_of::<Option<RawNode>>()
            );
        }

        #[repr(align(32))]
        struct LargeAlignment {
            _value: u8,
        }

        check::<()>();
        check::<u8>();
        check::<i32>();
        check::<[u64; 4]>();
        check::<LargeAlignment>();
    }
}
