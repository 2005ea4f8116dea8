use core::iter::FusedIterator;

use violet_internals::RawNodeRef;

use crate::report::ReportFrame;

/// An iterator over the frames of a report, most recent context first.
///
/// The last frame yielded is the root cause.
#[must_use]
#[derive(Clone)]
pub struct Frames<'a> {
    next: Option<RawNodeRef<'a>>,
}

impl<'a> Frames<'a> {
    pub(crate) fn from_raw(head: Option<RawNodeRef<'a>>) -> Self {
        Self { next: head }
    }
}

impl<'a> Iterator for Frames<'a> {
    type Item = ReportFrame<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next();
        Some(ReportFrame::from_raw(current))
    }
}

impl FusedIterator for Frames<'_> {}
