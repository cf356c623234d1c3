//! crates/channel/src/manager.rs
//! Connection lifecycle: the mutex-guarded channel and its session guard.

use std::sync::{Mutex, MutexGuard, OnceLock};

use crate::backend::SyslogBackend;
use crate::state::GlobalState;

struct Inner {
    state: GlobalState,
    backend: Box<dyn SyslogBackend>,
}

/// The process-wide logging channel.
///
/// Wraps the connection configuration and the backend behind one mutex.
/// All work happens through a [`Session`] obtained from [`Channel::session`],
/// so open/close/emit sequences are atomic relative to each other.
pub struct Channel {
    inner: Mutex<Inner>,
}

impl Channel {
    /// Creates a channel over the given backend, starting closed with the
    /// default configuration.
    #[must_use]
    pub fn new(backend: Box<dyn SyslogBackend>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: GlobalState::new(),
                backend,
            }),
        }
    }

    /// Returns the lazily constructed process-wide channel.
    ///
    /// On Unix this talks to syslog(3); elsewhere it records into memory.
    #[must_use]
    pub fn global() -> &'static Self {
        static CHANNEL: OnceLock<Channel> = OnceLock::new();
        CHANNEL.get_or_init(|| {
            #[cfg(unix)]
            let backend = Box::new(crate::libc_backend::LibcBackend::default());
            #[cfg(not(unix))]
            let backend = Box::new(crate::backend::MemoryBackend::default());
            Self::new(backend)
        })
    }

    /// Acquires the channel lock for a full command invocation.
    ///
    /// The returned guard is held across state reads, mutations, reopen
    /// decisions and the emission itself.
    #[must_use]
    pub fn session(&self) -> Session<'_> {
        Session {
            guard: self.inner.lock().expect("channel mutex poisoned"),
        }
    }
}

/// Exclusive access to the channel for the duration of one command.
pub struct Session<'a> {
    guard: MutexGuard<'a, Inner>,
}

impl Session<'_> {
    /// Returns the connection configuration.
    #[must_use]
    pub fn state(&self) -> &GlobalState {
        &self.guard.state
    }

    /// Returns the connection configuration for mutation.
    pub fn state_mut(&mut self) -> &mut GlobalState {
        &mut self.guard.state
    }

    /// Returns true while the connection is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.guard.state.is_open()
    }

    /// Opens the connection with the current configuration.
    ///
    /// No-op when already open. A successful open clears the dirty flag.
    pub fn open(&mut self) {
        if self.guard.state.is_open() {
            return;
        }
        let inner = &mut *self.guard;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            facility = %inner.state.facility(),
            options = inner.state.options(),
            "opening syslog channel"
        );
        inner.backend.open(
            inner.state.ident(),
            inner.state.options(),
            inner.state.facility().code(),
        );
        inner.state.note_opened();
    }

    /// Closes the connection. No-op when not open; the configuration record
    /// is preserved.
    pub fn close(&mut self) {
        if !self.guard.state.is_open() {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!("closing syslog channel");
        let inner = &mut *self.guard;
        inner.backend.close();
        inner.state.note_closed();
    }

    /// Unconditionally closes (if open) and reopens with the current
    /// configuration.
    pub fn reopen(&mut self) {
        self.close();
        self.open();
    }

    /// Brings the connection into the state required before an emission:
    /// reopens when the configuration changed since the last open, opens
    /// when closed, otherwise leaves it alone.
    pub fn ensure_open(&mut self) {
        if self.guard.state.is_open() && self.guard.state.is_dirty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("configuration changed, reopening before emit");
            self.close();
        }
        self.open();
    }

    /// Emits one message through the backend at the given priority code.
    pub fn emit(&mut self, priority: i32, message: &str) {
        self.guard.backend.emit(priority, message);
    }
}
