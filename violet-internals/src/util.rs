//! Internal utility types.

/// Marker type used when type-erasing node payloads.
///
/// This zero-sized type serves as a placeholder in generic type parameters
/// when the actual payload type has been erased. `NodeData<Erased>` is never
/// constructed; pointers to it are only read through the `#[repr(C)]` header
/// fields or cast back to the concrete `NodeData<C>` recorded in the vtable.
pub(crate) struct Erased;
