//! crates/symbols/src/facility.rs
//! Facility names and their POSIX syslog(3) codes.

use std::fmt;

/// Syslog facility codes matching the POSIX syslog(3) constants.
///
/// The discriminants are the `LOG_*` facility values from `<syslog.h>`
/// (category index shifted left by three). Name lookup is exact and
/// case-sensitive: the command surface accepts `local3`, not `LOCAL3`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Facility {
    /// Kernel messages (LOG_KERN).
    Kern = 0,
    /// User-level messages (LOG_USER) — the startup default for the channel.
    User = 8,
    /// Mail system (LOG_MAIL).
    Mail = 16,
    /// System daemons (LOG_DAEMON).
    Daemon = 24,
    /// Security/authorization messages (LOG_AUTH).
    Auth = 32,
    /// Messages generated internally by syslogd (LOG_SYSLOG).
    Syslog = 40,
    /// Line printer subsystem (LOG_LPR).
    Lpr = 48,
    /// Network news subsystem (LOG_NEWS).
    News = 56,
    /// UUCP subsystem (LOG_UUCP).
    Uucp = 64,
    /// Clock daemon (LOG_CRON).
    Cron = 72,
    /// Private security/authorization messages (LOG_AUTHPRIV).
    Authpriv = 80,
    /// FTP daemon (LOG_FTP).
    Ftp = 88,
    /// Reserved for local use (LOG_LOCAL0).
    Local0 = 128,
    /// Reserved for local use (LOG_LOCAL1).
    Local1 = 136,
    /// Reserved for local use (LOG_LOCAL2).
    Local2 = 144,
    /// Reserved for local use (LOG_LOCAL3).
    Local3 = 152,
    /// Reserved for local use (LOG_LOCAL4).
    Local4 = 160,
    /// Reserved for local use (LOG_LOCAL5).
    Local5 = 168,
    /// Reserved for local use (LOG_LOCAL6).
    Local6 = 176,
    /// Reserved for local use (LOG_LOCAL7).
    Local7 = 184,
}

/// Every registered facility, in table order.
const ENTRIES: [Facility; 20] = [
    Facility::Kern,
    Facility::User,
    Facility::Mail,
    Facility::Daemon,
    Facility::Auth,
    Facility::Syslog,
    Facility::Lpr,
    Facility::News,
    Facility::Uucp,
    Facility::Cron,
    Facility::Authpriv,
    Facility::Ftp,
    Facility::Local0,
    Facility::Local1,
    Facility::Local2,
    Facility::Local3,
    Facility::Local4,
    Facility::Local5,
    Facility::Local6,
    Facility::Local7,
];

impl Facility {
    /// Returns the default facility for a channel that was never configured.
    #[must_use]
    pub const fn default_channel() -> Self {
        Self::User
    }

    /// Parses a facility name into the corresponding constant.
    ///
    /// The match is exact and case-sensitive; returns `None` for anything
    /// not in the registry.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        ENTRIES.iter().copied().find(|f| f.as_str() == name)
    }

    /// Reverse lookup from a facility code, used only for introspection.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        ENTRIES.iter().copied().find(|f| f.code() == code)
    }

    /// Returns the facility name as accepted on the command surface.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kern => "kern",
            Self::User => "user",
            Self::Mail => "mail",
            Self::Daemon => "daemon",
            Self::Auth => "auth",
            Self::Syslog => "syslog",
            Self::Lpr => "lpr",
            Self::News => "news",
            Self::Uucp => "uucp",
            Self::Cron => "cron",
            Self::Authpriv => "authpriv",
            Self::Ftp => "ftp",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }

    /// Returns the POSIX facility code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Iterates over every registered facility in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        ENTRIES.iter().copied()
    }
}

impl Default for Facility {
    fn default() -> Self {
        Self::default_channel()
    }
}

impl fmt::Display for Facility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
