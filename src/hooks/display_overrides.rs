//! Overrides for how payloads of a given type are displayed.
//!
//! A payload's handler is chosen once, when its frame is created. A display
//! override replaces that choice process-wide for every frame whose payload
//! has a given type, including frames created before the override was
//! registered. This is useful for types from other crates whose `Display`
//! output is not suitable for error reports.
//!
//! ```
//! use std::fmt;
//!
//! use violet::{hooks::display_overrides::register_display_override, prelude::*};
//!
//! #[derive(Debug)]
//! struct Password(String);
//!
//! impl fmt::Display for Password {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str(&self.0)
//!     }
//! }
//!
//! register_display_override::<Password, _>(|_: &Password, f: &mut fmt::Formatter<'_>| {
//!     f.write_str("<redacted>")
//! });
//!
//! let report = Report::new(Password("hunter2".into()));
//! assert_eq!(report.to_string(), "<redacted>");
//! assert_eq!(
//!     report.current_context().unwrap().display_unhooked().to_string(),
//!     "hunter2"
//! );
//! ```

use core::{any::TypeId, fmt, marker::PhantomData, panic::Location};

use hashbrown::HashMap;
use triomphe::Arc;
use unsize::CoerceUnsize;

use crate::{hooks::hook_lock::HookLock, report::ReportFrame};

type HookMap = HashMap<TypeId, Arc<dyn UntypedDisplayOverride>, rustc_hash::FxBuildHasher>;

static HOOKS: HookLock<HookMap> = HookLock::new();

fn get_hook(type_id: TypeId) -> Option<Arc<dyn UntypedDisplayOverride>> {
    HOOKS.read().get()?.get(&type_id).cloned()
}

/// Replaces the `Display` rendering of payloads of type `T`.
///
/// Implemented for every `Fn(&T, &mut Formatter) -> fmt::Result` closure.
pub trait DisplayOverride<T>: 'static + Send + Sync {
    /// Renders `payload`, which belongs to `frame`.
    fn display(
        &self,
        payload: &T,
        frame: ReportFrame<'_>,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result;
}

impl<T, F> DisplayOverride<T> for F
where
    F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result + 'static + Send + Sync,
{
    fn display(
        &self,
        payload: &T,
        _frame: ReportFrame<'_>,
        formatter: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        self(payload, formatter)
    }
}

struct Hook<T, H>
where
    T: 'static,
{
    hook: H,
    added_at: &'static Location<'static>,
    _hooked_type: PhantomData<fn(T) -> T>,
}

impl<T, H> fmt::Display for Hook<T, H>
where
    T: 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "display override {} for payload type {} registered at {}:{}",
            core::any::type_name::<H>(),
            core::any::type_name::<T>(),
            self.added_at.file(),
            self.added_at.line()
        )
    }
}

trait UntypedDisplayOverride: 'static + Send + Sync + fmt::Display {
    fn display(&self, frame: ReportFrame<'_>, formatter: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T, H> UntypedDisplayOverride for Hook<T, H>
where
    T: 'static,
    H: DisplayOverride<T>,
{
    fn display(&self, frame: ReportFrame<'_>, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match frame.downcast_ref::<T>() {
            Some(payload) => self.hook.display(payload, frame, formatter),
            None => fmt::Display::fmt(&frame.display_unhooked(), formatter),
        }
    }
}

/// Registers `hook` as the display override for payloads of type `T`,
/// replacing any previous override for `T`.
#[track_caller]
pub fn register_display_override<T, H>(hook: H)
where
    T: 'static,
    H: DisplayOverride<T>,
{
    let hook: Hook<T, H> = Hook {
        hook,
        added_at: Location::caller(),
        _hooked_type: PhantomData,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(%hook, "registering display override");

    let hook: Arc<Hook<T, H>> = Arc::new(hook);
    let hook = hook.unsize(unsize::Coercion!(to dyn UntypedDisplayOverride));

    HOOKS
        .write()
        .get()
        .get_or_insert_default()
        .insert(TypeId::of::<T>(), hook);
}

/// Removes the display override for payloads of type `T`, if any.
///
/// Returns `true` if an override was registered.
pub fn remove_display_override<T: 'static>() -> bool {
    HOOKS
        .write()
        .get()
        .as_mut()
        .is_some_and(|hooks| hooks.remove(&TypeId::of::<T>()).is_some())
}

pub(crate) fn display_frame(
    frame: ReportFrame<'_>,
    formatter: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    match get_hook(frame.type_id()) {
        Some(hook) => hook.display(frame, formatter),
        None => fmt::Display::fmt(&frame.display_unhooked(), formatter),
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString};

    use super::*;
    use crate::Report;

    #[derive(Debug)]
    struct Celsius(f64);

    impl fmt::Display for Celsius {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    struct WithLocation;

    impl DisplayOverride<Celsius> for WithLocation {
        fn display(
            &self,
            payload: &Celsius,
            frame: ReportFrame<'_>,
            formatter: &mut fmt::Formatter<'_>,
        ) -> fmt::Result {
            write!(formatter, "{}°C (line {})", payload.0, frame.location().line())
        }
    }

    #[test]
    fn test_override_lifecycle() {
        let report = Report::new(Celsius(21.5));
        assert_eq!(report.to_string(), "21.5");

        register_display_override::<Celsius, _>(WithLocation);
        let line = report.current_context().unwrap().location().line();
        assert_eq!(report.to_string(), format!("21.5°C (line {line})"));
        assert_eq!(
            report.current_context().unwrap().display_unhooked().to_string(),
            "21.5"
        );

        assert!(remove_display_override::<Celsius>());
        assert!(!remove_display_override::<Celsius>());
        assert_eq!(report.to_string(), "21.5");
    }

    #[test]
    fn test_hook_description() {
        let hook: Hook<Celsius, WithLocation> = Hook {
            hook: WithLocation,
            added_at: Location::caller(),
            _hooked_type: PhantomData,
        };
        let description = hook.to_string();
        assert!(description.starts_with("display override "));
        assert!(description.contains("Celsius"));
        assert!(description.contains(file!()));
    }
}
