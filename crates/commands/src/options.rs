//! crates/commands/src/options.rs
//! The option descriptor table and scope classification.

use std::ops::{BitOr, BitOrAssign};

use symbols::ChannelOption;

/// Classifies an option by the state record it mutates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scope {
    /// Mutates the process-wide connection configuration.
    Global,
    /// Mutates only the invoking context's call state.
    PerCall,
    /// Accepted in either scope; applies to whichever the command permits,
    /// preferring the connection-wide record.
    Both,
}

impl Scope {
    /// Returns the scope as a mask for permission checks.
    #[must_use]
    pub const fn mask(self) -> ScopeMask {
        match self {
            Self::Global => ScopeMask::GLOBAL,
            Self::PerCall => ScopeMask::PER_CALL,
            Self::Both => ScopeMask::BOTH,
        }
    }
}

/// Bitmask over option scopes, used both as a command's permission set and
/// as the accumulated record of which scopes a scan actually modified.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScopeMask(u8);

impl ScopeMask {
    /// No scope.
    pub const EMPTY: Self = Self(0);
    /// Connection-wide scope.
    pub const GLOBAL: Self = Self(0b01);
    /// Per-call scope.
    pub const PER_CALL: Self = Self(0b10);
    /// Both scopes.
    pub const BOTH: Self = Self(0b11);

    /// Returns true when every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true when `self` and `other` share at least one bit.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns true when no bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ScopeMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ScopeMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A registered option flag, resolved from its surface spelling.
///
/// The table is fixed: `-ident` and the boolean flags are connection-wide,
/// `-level`/`-priority` and `-format` are per-call, and `-facility` belongs
/// to both scopes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OptionFlag {
    /// `-ident <string>` — identity attached to emitted messages.
    Ident,
    /// `-facility <name>` — connection facility, or a per-call override.
    Facility,
    /// `-level <name>` / `-priority <name>` — per-call severity.
    Level,
    /// `-format <template>` — per-call message template.
    Format,
    /// A boolean openlog(3) option such as `-pid`.
    Boolean(ChannelOption),
}

impl OptionFlag {
    /// Resolves a token into a registered option flag.
    ///
    /// Returns `None` for anything not in the table, including tokens that
    /// merely start with the option marker.
    #[must_use]
    pub fn lookup(token: &str) -> Option<Self> {
        match token {
            "-ident" => Some(Self::Ident),
            "-facility" => Some(Self::Facility),
            "-level" | "-priority" => Some(Self::Level),
            "-format" => Some(Self::Format),
            _ => token
                .strip_prefix('-')
                .and_then(ChannelOption::from_name)
                .map(Self::Boolean),
        }
    }

    /// Returns the scope this option belongs to.
    #[must_use]
    pub const fn scope(self) -> Scope {
        match self {
            Self::Ident | Self::Boolean(_) => Scope::Global,
            Self::Facility => Scope::Both,
            Self::Level | Self::Format => Scope::PerCall,
        }
    }

    /// Returns true when the flag consumes the following token as its value.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        match self {
            Self::Ident | Self::Facility | Self::Level | Self::Format => true,
            Self::Boolean(_) => false,
        }
    }
}
