use core::{any::TypeId, fmt, panic::Location};

use violet_internals::RawNodeRef;

/// A borrowed view of one frame of a [`Report`](crate::Report).
///
/// A frame is either the root cause of a report or one of the contexts pushed
/// on top of it. Frames are obtained with [`Report::iter`](crate::Report::iter),
/// [`Report::current_context`](crate::Report::current_context) and
/// [`Report::root_cause`](crate::Report::root_cause).
///
/// The [`Display`](fmt::Display) implementation renders the payload's message,
/// honouring any override registered with
/// [`register_display_override`](crate::hooks::display_overrides::register_display_override).
#[derive(Clone, Copy)]
pub struct ReportFrame<'a> {
    node: RawNodeRef<'a>,
}

impl<'a> ReportFrame<'a> {
    pub(crate) fn from_raw(node: RawNodeRef<'a>) -> Self {
        Self { node }
    }

    /// Returns the source location at which this frame was created.
    #[must_use]
    pub fn location(self) -> &'static Location<'static> {
        self.node.location()
    }

    /// Returns the [`TypeId`] of the payload.
    #[must_use]
    pub fn type_id(self) -> TypeId {
        self.node.payload_type_id()
    }

    /// Returns the type name of the payload.
    #[must_use]
    pub fn type_name(self) -> &'static str {
        self.node.payload_type_name()
    }

    /// Returns the [`TypeId`] of the handler that renders the payload.
    #[must_use]
    pub fn handler_type_id(self) -> TypeId {
        self.node.handler_type_id()
    }

    /// Returns `true` if the payload is a `T`.
    #[must_use]
    pub fn is<T: 'static>(self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }

    /// Returns a reference to the payload if it is a `T`.
    ///
    /// ```
    /// use violet::prelude::*;
    ///
    /// let report = Report::new(404u16).context("while fetching the index");
    /// let root = report.root_cause().unwrap();
    /// assert_eq!(root.downcast_ref::<u16>(), Some(&404));
    /// assert_eq!(root.downcast_ref::<&str>(), None);
    /// ```
    #[must_use]
    pub fn downcast_ref<T: 'static>(self) -> Option<&'a T> {
        if self.is::<T>() {
            // SAFETY:
            // 1. The payload type was just checked to be `T`.
            Some(unsafe { self.node.payload_downcast_unchecked::<T>() })
        } else {
            None
        }
    }

    /// Renders the payload with its handler, ignoring display overrides.
    #[must_use]
    pub fn display_unhooked(self) -> impl fmt::Display + 'a {
        Unhooked(self.node)
    }
}

struct Unhooked<'a>(RawNodeRef<'a>);

impl fmt::Display for Unhooked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.payload_display(f)
    }
}

impl fmt::Display for ReportFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::hooks::display_overrides::display_frame(*self, f)
    }
}

impl fmt::Debug for ReportFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Payload<'a>(RawNodeRef<'a>);

        impl fmt::Debug for Payload<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.payload_debug(f)
            }
        }

        f.debug_struct("ReportFrame")
            .field("payload", &Payload(self.node))
            .field("type_name", &self.type_name())
            .field("location", &self.location())
            .finish()
    }
}
