#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `channel` owns the single process-wide syslog connection: its
//! configuration record ([`GlobalState`]), the black-box logging primitive
//! behind it ([`SyslogBackend`]), and the lifecycle rules that decide when
//! the connection is torn down and reopened ([`Channel`] / [`Session`]).
//!
//! # Design
//!
//! The connection state and the backend live together behind one
//! `std::sync::Mutex`. Callers obtain a [`Session`] guard and perform every
//! read, mutation, open/close transition and emission while holding it, so
//! an emission can never observe a half-applied configuration and two reopen
//! sequences can never interleave.
//!
//! Configuration setters on [`GlobalState`] mark the record dirty. The
//! pre-emission step [`Session::ensure_open`] turns a dirty open connection
//! into a close-then-open cycle, guaranteeing that every message is
//! attributed to the latest ident/facility/options.
//!
//! # Invariants
//!
//! - `close` only flips the open flag; ident, facility and options survive
//!   until process exit.
//! - The backend is invoked only while the mutex is held.
//! - A dirty record is cleaned exclusively by a successful `open`.
//!
//! # Examples
//!
//! ```
//! use channel::{Channel, MemoryBackend};
//! use symbols::Facility;
//!
//! let backend = MemoryBackend::default();
//! let channel = Channel::new(Box::new(backend));
//!
//! let mut session = channel.session();
//! session.state_mut().set_ident("svc");
//! session.state_mut().set_facility(Facility::Mail);
//! session.ensure_open();
//! session.emit(3, "disk full");
//! assert!(session.is_open());
//! ```

mod backend;
mod manager;
mod state;

#[cfg(unix)]
#[allow(unsafe_code)]
mod libc_backend;

pub use backend::{BackendEvent, MemoryBackend, Recorder, SyslogBackend};
pub use manager::{Channel, Session};
pub use state::GlobalState;

#[cfg(unix)]
pub use libc_backend::LibcBackend;
