#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `commands` implements the user-visible logging command surface: `open`,
//! `close`, `isopen`, `configure`/`cget`, `log`, and the single-shot form
//! that combines connection setup with an emission. The crate owns the
//! option descriptor table, the scope-gated argument scanner, the per-thread
//! sticky call state and the error taxonomy; the connection itself lives in
//! the `channel` crate.
//!
//! # Design
//!
//! Every handler follows the same shape: build a [`ScanContext`] bound to
//! the command's permitted option scopes, run [`scan`] over the argument
//! list (mutating the connection record and the call state as options are
//! applied), validate the remaining positional arguments against the
//! command's arity, then — for emitting commands — let the channel reopen
//! if a connection-wide option changed and emit under the same lock.
//!
//! # Invariants
//!
//! - Symbolic facility and level values resolve through the `symbols`
//!   registry before any state mutation; an unresolvable symbol aborts the
//!   command with no further tokens consumed.
//! - Options applied before a scan failure stay applied; there is no
//!   rollback.
//! - All connection-state access and the emission happen inside one channel
//!   session, so no emission observes a half-applied configuration.
//!
//! # Errors
//!
//! Every failure is a [`CommandError`] carrying a machine-matchable
//! category tag, the offending argument index and the scanned argument
//! vector.
//!
//! # Examples
//!
//! ```
//! use channel::{Channel, MemoryBackend};
//! use commands::{Reply, dispatch};
//!
//! let backend = MemoryBackend::default();
//! let channel = Channel::new(Box::new(backend));
//!
//! let argv: Vec<String> = ["open", "-facility", "mail", "-ident", "svc"]
//!     .iter()
//!     .map(|s| (*s).to_owned())
//!     .collect();
//! assert_eq!(dispatch(&channel, &argv).unwrap(), Reply::None);
//!
//! let argv: Vec<String> = ["isopen"].iter().map(|s| (*s).to_owned()).collect();
//! assert_eq!(dispatch(&channel, &argv).unwrap(), Reply::IsOpen(true));
//! ```

mod call_state;
mod dispatch;
mod error;
mod handlers;
mod options;
mod scanner;

pub use call_state::{CallState, DEFAULT_FORMAT, with_call_state};
pub use dispatch::{Reply, dispatch};
pub use error::{CommandError, CommandResult};
pub use handlers::{cget, close, combined, configure, is_open, log, open};
pub use options::{OptionFlag, Scope, ScopeMask};
pub use scanner::{ScanContext, ScanOutcome, scan};
