//! crates/channel/src/libc_backend.rs
//! Backend over the POSIX openlog(3)/syslog(3)/closelog(3) primitives.

use std::ffi::CString;

use crate::backend::SyslogBackend;

/// Backend routing messages to syslog(3) via `libc`.
///
/// The ident `CString` handed to `openlog` is stored in the backend because
/// syslog(3) keeps the pointer rather than copying the string. It is only
/// replaced on the next `open`, which the channel always precedes with a
/// `close` when a connection is active.
#[derive(Debug, Default)]
pub struct LibcBackend {
    // Keeps the ident pointer passed to openlog alive until the next open.
    ident: Option<CString>,
}

impl SyslogBackend for LibcBackend {
    fn open(&mut self, ident: Option<&str>, options: i32, facility: i32) {
        self.ident = ident.and_then(|i| CString::new(i).ok());
        let ident_ptr = self
            .ident
            .as_ref()
            .map_or(std::ptr::null(), |c| c.as_ptr());

        // SAFETY: `ident_ptr` is either null (openlog falls back to the
        // program name) or points into `self.ident`, which outlives the
        // connection because it is only replaced by the next call to `open`.
        unsafe {
            libc::openlog(ident_ptr, options, facility);
        }
    }

    fn emit(&mut self, priority: i32, message: &str) {
        // syslog(3) interprets `%` in its format argument. Passing the text
        // through a literal "%s" avoids format-string injection.
        let Ok(c_message) = CString::new(message) else {
            return;
        };

        // SAFETY: both pointers are valid NUL-terminated C strings for the
        // duration of the call.
        unsafe {
            libc::syslog(priority, FORMAT.as_ptr().cast::<libc::c_char>(), c_message.as_ptr());
        }
    }

    fn close(&mut self) {
        // SAFETY: closelog has no preconditions; calling it without a prior
        // openlog is defined and harmless.
        unsafe {
            libc::closelog();
        }
    }
}

const FORMAT: &[u8] = b"%s\0";
