use core::{fmt, panic::Location};

use violet_internals::RawNode;

use crate::{
    handlers::{self, PayloadHandler},
    report::{Frames, FormattingOptions, ReportFrame},
};

/// An error report: a chain of frames that starts at a root cause and grows
/// one context at a time.
///
/// Every frame owns one payload of an arbitrary type and remembers the source
/// location where it was created. New frames are only ever pushed on top of
/// the chain, so the most recent context is always the head and the root cause
/// is always the tail.
///
/// A report is the only owner of its chain. It can be moved but not cloned,
/// and dropping it releases every frame exactly once. A report may also be
/// empty, which is what [`Report::empty`], [`Default`] and [`Report::take`]
/// leave behind.
///
/// # Examples
///
/// ```
/// use violet::prelude::*;
///
/// let report = Report::new("disk full [/dev/sda1]")
///     .context("while trying to save `user_data.json`");
///
/// assert_eq!(report.node_count(), 2);
/// assert_eq!(report.to_string(), "while trying to save `user_data.json`");
/// assert_eq!(
///     format!("{report:#}"),
///     "while trying to save `user_data.json`: disk full [/dev/sda1]"
/// );
/// ```
///
/// Any error converts into a report with `?`:
///
/// ```
/// use violet::prelude::*;
///
/// fn parse(input: &str) -> Result<u32, Report> {
///     Ok(input.parse::<u32>()?)
/// }
///
/// let report = parse("twelve").unwrap_err();
/// assert_eq!(report.to_string(), "invalid digit found in string");
/// ```
#[must_use]
pub struct Report {
    head: Option<RawNode>,
}

impl Report {
    /// Creates a report with a single frame owning `context`.
    ///
    /// The frame is rendered with [`handlers::Display`] and records the
    /// caller's location.
    #[track_caller]
    pub fn new<C>(context: C) -> Self
    where
        C: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::new_custom::<handlers::Display, C>(context)
    }

    /// Creates a report with a single frame owning `context`, rendered by the
    /// handler `H`.
    ///
    /// ```
    /// use violet::{handlers, prelude::*};
    ///
    /// struct Opaque;
    ///
    /// let report = Report::new_custom::<handlers::Any, _>(Opaque);
    /// assert_eq!(report.node_count(), 1);
    /// ```
    #[track_caller]
    pub fn new_custom<H, C>(context: C) -> Self
    where
        C: Send + Sync + 'static,
        H: PayloadHandler<C>,
    {
        Self {
            head: Some(RawNode::new::<C, H>(context, Location::caller(), None)),
        }
    }

    /// Creates a report without any frames.
    pub const fn empty() -> Self {
        Self { head: None }
    }

    /// Returns `true` if the report holds no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of frames in the chain.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Pushes `context` on top of the chain.
    ///
    /// The new frame becomes the head and records the caller's location. The
    /// previous chain is moved underneath it unchanged. Pushing onto an empty
    /// report yields a single-frame report.
    #[track_caller]
    pub fn context<C>(self, context: C) -> Self
    where
        C: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.context_custom::<handlers::Display, C>(context)
    }

    /// Pushes `context` on top of the chain, rendered by the handler `H`.
    #[track_caller]
    pub fn context_custom<H, C>(mut self, context: C) -> Self
    where
        C: Send + Sync + 'static,
        H: PayloadHandler<C>,
    {
        let next = self.head.take();
        Self {
            head: Some(RawNode::new::<C, H>(context, Location::caller(), next)),
        }
    }

    /// Places the whole chain of `self` underneath the chain of `other`.
    ///
    /// The root cause of `other` ends up directly on top of the head of
    /// `self`, so `other`'s frames all read as context for `self`. Both
    /// reports are consumed and no frame is created or dropped. If either
    /// side is empty the other one is returned as is.
    ///
    /// ```
    /// use violet::prelude::*;
    ///
    /// let cause = Report::new("a").context("b");
    /// let context = Report::new("c").context("d");
    ///
    /// let merged = cause.context_report(context);
    /// assert_eq!(format!("{merged:#}"), "d: c: b: a");
    /// ```
    pub fn context_report(mut self, mut other: Report) -> Self {
        let Some(mut head) = other.head.take() else {
            return self;
        };

        if let Some(tail) = self.head.take() {
            let mut slot = head.next_slot_mut();
            while let Some(node) = slot {
                slot = node.next_slot_mut();
            }
            *slot = Some(tail);
        }

        Self { head: Some(head) }
    }

    /// Moves the chain out of `self` into a new report, leaving `self` empty.
    ///
    /// ```
    /// use violet::prelude::*;
    ///
    /// let mut source = Report::new("a").context("b");
    /// let moved = source.take();
    ///
    /// assert!(source.is_empty());
    /// assert_eq!(moved.node_count(), 2);
    /// ```
    pub fn take(&mut self) -> Report {
        Self {
            head: self.head.take(),
        }
    }

    /// Returns an iterator over the frames, from the most recent context
    /// down to the root cause.
    pub fn iter(&self) -> Frames<'_> {
        Frames::from_raw(self.head.as_ref().map(RawNode::as_ref))
    }

    /// Returns the most recently pushed frame.
    #[must_use]
    pub fn current_context(&self) -> Option<ReportFrame<'_>> {
        self.head.as_ref().map(|head| ReportFrame::from_raw(head.as_ref()))
    }

    /// Returns the first frame of the chain, the one every later context was
    /// pushed on top of.
    #[must_use]
    pub fn root_cause(&self) -> Option<ReportFrame<'_>> {
        self.iter().last()
    }

    /// Returns the payload of the most recent frame if it is a `T`.
    #[must_use]
    pub fn downcast_current<T: 'static>(&self) -> Option<&T> {
        self.current_context()?.downcast_ref()
    }

    /// Returns the payload of the most recent frame holding a `T`.
    ///
    /// ```
    /// use violet::{io::{ErrorKind, IoError}, prelude::*};
    ///
    /// let report = Report::from(IoError::from_kind(ErrorKind::NotFound))
    ///     .context("while opening the cache");
    ///
    /// let error = report.find::<IoError>().unwrap();
    /// assert_eq!(error.kind(), ErrorKind::NotFound);
    /// ```
    #[must_use]
    pub fn find<T: 'static>(&self) -> Option<&T> {
        self.iter().find_map(ReportFrame::downcast_ref)
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> From<E> for Report
where
    E: core::error::Error + Send + Sync + 'static,
{
    #[track_caller]
    fn from(error: E) -> Self {
        Self::new_custom::<handlers::Error, E>(error)
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = ReportFrame<'a>;
    type IntoIter = Frames<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return match self.current_context() {
                Some(frame) => fmt::Display::fmt(&frame, f),
                None => Ok(()),
            };
        }

        for (index, frame) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(": ")?;
            }
            fmt::Display::fmt(&frame, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::hooks::report_formatter::format_report(self, FormattingOptions::PLAIN, f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::String, vec::Vec};

    use super::*;

    fn messages(report: &Report) -> Vec<String> {
        report.iter().map(|frame| format!("{frame}")).collect()
    }

    #[test]
    fn test_report_send_sync() {
        static_assertions::assert_impl_all!(Report: Send, Sync);
        static_assertions::assert_not_impl_any!(Report: Clone, core::error::Error);
        static_assertions::assert_eq_size!(Report, usize);
    }

    #[test]
    fn test_context_push() {
        let report = Report::new("a").context("b").context("c");
        assert_eq!(report.node_count(), 3);
        assert_eq!(messages(&report), ["c", "b", "a"]);
        assert_eq!(report.downcast_current::<&str>(), Some(&"c"));
        assert_eq!(report.root_cause().and_then(|frame| frame.downcast_ref::<&str>()), Some(&"a"));
    }

    #[test]
    fn test_empty() {
        let report = Report::empty();
        assert!(report.is_empty());
        assert_eq!(report.node_count(), 0);
        assert!(report.current_context().is_none());
        assert!(report.root_cause().is_none());
        assert_eq!(format!("{report}"), "");
        assert_eq!(format!("{report:#}"), "");

        let report = Report::default().context("only");
        assert_eq!(messages(&report), ["only"]);
    }

    #[test]
    fn test_context_report() {
        let merged = Report::new("a").context("b").context_report(Report::new("c"));
        assert_eq!(messages(&merged), ["c", "b", "a"]);

        let merged = Report::new("a").context_report(Report::empty());
        assert_eq!(messages(&merged), ["a"]);

        let merged = Report::empty().context_report(Report::new("x").context("y"));
        assert_eq!(messages(&merged), ["y", "x"]);

        assert!(Report::empty().context_report(Report::empty()).is_empty());
    }

    #[test]
    fn test_find() {
        let report = Report::new(7u8).context("middle").context(9u8);
        assert_eq!(report.find::<u8>(), Some(&9));
        assert_eq!(report.find::<&str>(), Some(&"middle"));
        assert_eq!(report.find::<u16>(), None);
    }
}
