#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `symbols` holds the fixed, immutable registry that maps the symbolic names
//! accepted on the command surface to the small integer codes understood by
//! the POSIX syslog(3) primitive. Three categories exist:
//!
//! - [`Facility`] — the origin category attached to an open logging channel
//!   (`kern`, `user`, `mail`, ..., `local7`).
//! - [`Severity`] — the per-message level (`emergency` through `debug`).
//! - [`ChannelOption`] — boolean openlog(3) options, each contributing one
//!   bit to the channel's option mask (`pid`, `perror`, `console`, `nodelay`).
//!
//! # Design
//!
//! Each category is an ordinary Rust enum with explicit discriminants equal
//! to the POSIX constants, so conversion to a wire code is a cast and the
//! tables need no runtime construction. Forward lookup
//! ([`Facility::from_name`] and friends) is an exact, case-sensitive string
//! match; reverse lookup ([`Facility::from_code`]) is a linear scan over the
//! category's entries and exists only to support configuration introspection.
//!
//! # Invariants
//!
//! - For every registered name `n` in a category,
//!   `from_code(from_name(n).code())` yields the entry whose `as_str()` is
//!   `n` again.
//! - Lookups never allocate and the tables are never mutated.
//!
//! # Examples
//!
//! ```
//! use symbols::{Facility, Severity};
//!
//! let mail = Facility::from_name("mail").unwrap();
//! assert_eq!(mail.code(), 16);
//! assert_eq!(Facility::from_code(16), Some(Facility::Mail));
//! assert_eq!(Severity::from_name("error").map(Severity::code), Some(3));
//! ```

mod channel_option;
mod facility;
mod severity;

pub use channel_option::ChannelOption;
pub use facility::Facility;
pub use severity::Severity;

use std::fmt;

/// Identifies which registry category a symbolic value belongs to.
///
/// Carried by error reports so callers can tell whether an unresolvable
/// symbol was offered as a facility, a level or a boolean option.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolKind {
    /// A facility name such as `daemon` or `local3`.
    Facility,
    /// A severity (level) name such as `error` or `debug`.
    Severity,
    /// A boolean channel option name such as `pid` or `nodelay`.
    ChannelOption,
}

impl SymbolKind {
    /// Returns the category name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Facility => "facility",
            Self::Severity => "level",
            Self::ChannelOption => "option",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
