//! Process-wide hooks that customize how reports are displayed.
//!
//! Most programs never need hooks: the default layout and the handlers picked
//! by [`report!`](crate::report!) cover the common cases. Hooks exist for the
//! remaining ones:
//!
//! - **[`report_formatter`]**: replace the layout of a whole rendered report
//!   (banner, root cause line, context lines).
//! - **[`display_overrides`]**: replace how payloads of one type are
//!   displayed, wherever they appear.
//! - **[`builtin_hooks`]**: the default report layout.
//!
//! Hooks are stored behind spin locks that never poison. Registering a hook
//! replaces the previous one for the same slot.

pub mod builtin_hooks;
pub mod display_overrides;
mod hook_lock;
pub mod report_formatter;
