//! crates/commands/src/call_state.rs
//! Per-thread sticky configuration for individual log calls.

use std::cell::RefCell;

use symbols::{Facility, Severity};

/// Default per-call message template: the message text verbatim.
pub const DEFAULT_FORMAT: &str = "%s";

thread_local! {
    static CALL_STATE: RefCell<CallState> = RefCell::new(CallState::new());
}

/// Sticky per-thread configuration for `log` invocations.
///
/// Created lazily on a thread's first command and kept as the "last used"
/// configuration, so repeated calls need not re-specify level, format or
/// facility. The message itself is never stored here; it is borrowed for
/// the duration of a single call.
#[derive(Clone, Debug)]
pub struct CallState {
    format: String,
    level: Severity,
    facility_override: Option<Facility>,
}

impl CallState {
    /// Creates the startup call state: `"%s"` format, `debug` level, no
    /// facility override.
    #[must_use]
    pub fn new() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_owned(),
            level: Severity::default(),
            facility_override: None,
        }
    }

    /// Returns the message template.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Returns the sticky severity.
    #[must_use]
    pub const fn level(&self) -> Severity {
        self.level
    }

    /// Returns the per-call facility override, if one is set.
    #[must_use]
    pub const fn facility_override(&self) -> Option<Facility> {
        self.facility_override
    }

    /// Replaces the message template. The previous owned value is dropped.
    pub fn set_format(&mut self, format: &str) {
        self.format = format.to_owned();
    }

    /// Replaces the sticky severity.
    pub const fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    /// Sets the per-call facility override.
    pub const fn set_facility_override(&mut self, facility: Facility) {
        self.facility_override = Some(facility);
    }

    /// Renders a message through the template: the first `%s` is replaced by
    /// the message text; a template without `%s` is emitted unchanged.
    #[must_use]
    pub fn render(&self, message: &str) -> String {
        if self.format.contains("%s") {
            self.format.replacen("%s", message, 1)
        } else {
            self.format.clone()
        }
    }

    /// Returns the priority code for the next emission: the severity code,
    /// OR-ed with the override facility's code when one is set.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.facility_override
            .map_or_else(|| self.level.code(), |f| f.code() | self.level.code())
    }
}

impl Default for CallState {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs `f` over the invoking thread's call state, creating it on first use.
pub fn with_call_state<R>(f: impl FnOnce(&mut CallState) -> R) -> R {
    CALL_STATE.with(|state| f(&mut state.borrow_mut()))
}
