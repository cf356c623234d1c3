//! crates/symbols/src/severity.rs
//! Severity (level) names and their POSIX syslog(3) priority codes.

use std::fmt;

/// Syslog severity levels matching the POSIX syslog(3) priority constants.
///
/// The command surface calls these "levels"; both `-level` and `-priority`
/// flags resolve through this table. Name lookup is exact and case-sensitive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Severity {
    /// System is unusable (LOG_EMERG).
    Emergency = 0,
    /// Action must be taken immediately (LOG_ALERT).
    Alert = 1,
    /// Critical conditions (LOG_CRIT).
    Critical = 2,
    /// Error conditions (LOG_ERR).
    Error = 3,
    /// Warning conditions (LOG_WARNING).
    Warning = 4,
    /// Normal but significant condition (LOG_NOTICE).
    Notice = 5,
    /// Informational messages (LOG_INFO).
    Info = 6,
    /// Debug-level messages (LOG_DEBUG) — the sticky default for a fresh
    /// call context.
    Debug = 7,
}

/// Every registered severity, in priority order.
const ENTRIES: [Severity; 8] = [
    Severity::Emergency,
    Severity::Alert,
    Severity::Critical,
    Severity::Error,
    Severity::Warning,
    Severity::Notice,
    Severity::Info,
    Severity::Debug,
];

impl Severity {
    /// Parses a severity name into the corresponding constant.
    ///
    /// Exact, case-sensitive match; returns `None` for unregistered names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        ENTRIES.iter().copied().find(|s| s.as_str() == name)
    }

    /// Reverse lookup from a priority code, used only for introspection.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        ENTRIES.iter().copied().find(|s| s.code() == code)
    }

    /// Returns the severity name as accepted on the command surface.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Alert => "alert",
            Self::Critical => "critical",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Returns the POSIX priority code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Iterates over every registered severity in priority order.
    pub fn all() -> impl Iterator<Item = Self> {
        ENTRIES.iter().copied()
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::Debug
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
