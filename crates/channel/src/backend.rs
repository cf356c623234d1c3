//! crates/channel/src/backend.rs
//! The logging primitive seam and an in-memory recording implementation.

use std::sync::{Arc, Mutex};

/// The external message-logging primitive, treated as a black box.
///
/// Implementations are invoked only while the channel mutex is held, so they
/// need no internal synchronisation. The primitive is assumed synchronous and
/// non-failing at this layer: none of the operations return a result.
pub trait SyslogBackend: Send {
    /// Establish the connection with the given identity, option mask and
    /// facility code.
    fn open(&mut self, ident: Option<&str>, options: i32, facility: i32);

    /// Emit one message at the given priority code.
    fn emit(&mut self, priority: i32, message: &str);

    /// Tear the connection down.
    fn close(&mut self);
}

/// One recorded backend invocation, in call order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BackendEvent {
    /// The connection was opened with this configuration.
    Opened {
        /// Identity string passed to the primitive, if any.
        ident: Option<String>,
        /// Option bitmask passed to the primitive.
        options: i32,
        /// Facility code passed to the primitive.
        facility: i32,
    },
    /// A message was emitted.
    Emitted {
        /// Priority code of the emission.
        priority: i32,
        /// The rendered message text.
        message: String,
    },
    /// The connection was closed.
    Closed,
}

/// Shared handle over a [`MemoryBackend`]'s recorded events.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<BackendEvent>>>,
}

impl Recorder {
    /// Returns a snapshot of every event recorded so far, in call order.
    #[must_use]
    pub fn events(&self) -> Vec<BackendEvent> {
        self.events.lock().expect("recorder mutex poisoned").clone()
    }

    fn push(&self, event: BackendEvent) {
        self.events.lock().expect("recorder mutex poisoned").push(event);
    }
}

/// Backend that records every call instead of talking to syslogd.
///
/// Serves as the test double everywhere and as the fallback backend on
/// platforms without syslog(3).
#[derive(Debug, Default)]
pub struct MemoryBackend {
    recorder: Recorder,
}

impl MemoryBackend {
    /// Returns a handle that observes this backend's recorded events.
    #[must_use]
    pub fn recorder(&self) -> Recorder {
        self.recorder.clone()
    }
}

impl SyslogBackend for MemoryBackend {
    fn open(&mut self, ident: Option<&str>, options: i32, facility: i32) {
        self.recorder.push(BackendEvent::Opened {
            ident: ident.map(str::to_owned),
            options,
            facility,
        });
    }

    fn emit(&mut self, priority: i32, message: &str) {
        self.recorder.push(BackendEvent::Emitted {
            priority,
            message: message.to_owned(),
        });
    }

    fn close(&mut self) {
        self.recorder.push(BackendEvent::Closed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_records_calls_in_order() {
        let mut backend = MemoryBackend::default();
        let recorder = backend.recorder();

        backend.open(Some("svc"), 0x01, 16);
        backend.emit(3, "disk full");
        backend.close();

        assert_eq!(
            recorder.events(),
            vec![
                BackendEvent::Opened {
                    ident: Some("svc".to_owned()),
                    options: 0x01,
                    facility: 16,
                },
                BackendEvent::Emitted {
                    priority: 3,
                    message: "disk full".to_owned(),
                },
                BackendEvent::Closed,
            ]
        );
    }

    #[test]
    fn recorder_snapshot_does_not_drain() {
        let mut backend = MemoryBackend::default();
        let recorder = backend.recorder();

        backend.emit(7, "one");
        assert_eq!(recorder.events().len(), 1);
        assert_eq!(recorder.events().len(), 1);
    }

    #[test]
    fn open_without_ident_records_none() {
        let mut backend = MemoryBackend::default();
        let recorder = backend.recorder();

        backend.open(None, 0, 8);
        assert_eq!(
            recorder.events(),
            vec![BackendEvent::Opened {
                ident: None,
                options: 0,
                facility: 8,
            }]
        );
    }
}
