//! crates/channel/src/state.rs
//! The process-wide connection configuration record.

use symbols::{ChannelOption, Facility};

/// Configuration of the process-wide logging connection.
///
/// A single instance exists per process, created lazily and guarded by the
/// channel mutex. Closing the connection never resets this record: ident,
/// facility and options persist until process exit.
#[derive(Debug)]
pub struct GlobalState {
    ident: Option<String>,
    facility: Facility,
    options: i32,
    opened: bool,
    dirty: bool,
}

impl GlobalState {
    /// Creates the startup configuration: no ident, `user` facility, no
    /// options, connection closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ident: None,
            facility: Facility::default_channel(),
            options: 0,
            opened: false,
            dirty: false,
        }
    }

    /// Returns the identity string attached to emitted messages, if set.
    #[must_use]
    pub fn ident(&self) -> Option<&str> {
        self.ident.as_deref()
    }

    /// Returns the connection-wide facility.
    #[must_use]
    pub const fn facility(&self) -> Facility {
        self.facility
    }

    /// Returns the openlog(3) option bitmask.
    #[must_use]
    pub const fn options(&self) -> i32 {
        self.options
    }

    /// Returns true while the underlying connection is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.opened
    }

    /// Returns true when the configuration changed since the connection was
    /// last opened, meaning the next emission must reopen first.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replaces the identity string. The previous owned value is dropped.
    pub fn set_ident(&mut self, ident: &str) {
        self.ident = Some(ident.to_owned());
        self.dirty = true;
    }

    /// Replaces the connection-wide facility.
    pub fn set_facility(&mut self, facility: Facility) {
        self.facility = facility;
        self.dirty = true;
    }

    /// Sets one boolean option bit in the option mask.
    pub fn set_option(&mut self, option: ChannelOption) {
        self.options |= option.bit();
        self.dirty = true;
    }

    /// Returns the boolean options currently set, in registry order.
    pub fn set_options(&self) -> impl Iterator<Item = ChannelOption> + '_ {
        ChannelOption::all().filter(|o| o.is_set(self.options))
    }

    pub(crate) const fn note_opened(&mut self) {
        self.opened = true;
        self.dirty = false;
    }

    pub(crate) const fn note_closed(&mut self) {
        self.opened = false;
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}
