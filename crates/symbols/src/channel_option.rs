//! crates/symbols/src/channel_option.rs
//! Boolean openlog(3) options and their bit values.

use std::fmt;

/// Boolean channel options, each mapping to one bit of the openlog(3)
/// option mask.
///
/// The bit values match the glibc/BSD `LOG_*` option constants. These
/// options are connection-wide: setting one marks the channel for a reopen
/// before the next emission.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum ChannelOption {
    /// Include the caller's PID in each message (LOG_PID).
    Pid = 0x01,
    /// Write directly to the system console if the logger is unreachable
    /// (LOG_CONS).
    Console = 0x02,
    /// Open the connection immediately instead of on first message
    /// (LOG_NDELAY).
    NoDelay = 0x08,
    /// Also print the message to stderr (LOG_PERROR).
    Perror = 0x20,
}

/// Every registered channel option, in flag-table order.
const ENTRIES: [ChannelOption; 4] = [
    ChannelOption::Pid,
    ChannelOption::Perror,
    ChannelOption::Console,
    ChannelOption::NoDelay,
];

impl ChannelOption {
    /// Parses an option name (without the leading dash) into its constant.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        ENTRIES.iter().copied().find(|o| o.as_str() == name)
    }

    /// Returns the option name as accepted on the command surface,
    /// without the leading dash.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pid => "pid",
            Self::Perror => "perror",
            Self::Console => "console",
            Self::NoDelay => "nodelay",
        }
    }

    /// Returns the option's bit in the openlog(3) option mask.
    #[must_use]
    pub const fn bit(self) -> i32 {
        self as i32
    }

    /// Returns true when this option's bit is set in `mask`.
    #[must_use]
    pub const fn is_set(self, mask: i32) -> bool {
        mask & self.bit() != 0
    }

    /// Iterates over every registered channel option in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        ENTRIES.iter().copied()
    }
}

impl fmt::Display for ChannelOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
