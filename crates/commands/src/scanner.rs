//! crates/commands/src/scanner.rs
//! The option scanner: scope-gated, order-sensitive, no rollback.

use channel::GlobalState;
use symbols::{Facility, Severity, SymbolKind};

use crate::call_state::CallState;
use crate::error::CommandError;
use crate::options::{OptionFlag, ScopeMask};

/// Explicit end-of-options marker.
const END_OF_OPTIONS: &str = "--";

/// Everything a scan needs: the invoking command's identity and permitted
/// scopes, plus the two state records options mutate.
pub struct ScanContext<'a> {
    /// The command name, used in diagnostics.
    pub command: &'a str,
    /// Scopes the invoking command permits.
    pub allowed: ScopeMask,
    /// The connection-wide record, borrowed from the channel session.
    pub global: &'a mut GlobalState,
    /// The invoking thread's call state.
    pub call: &'a mut CallState,
}

/// Result of a successful scan.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScanOutcome {
    /// Number of options applied.
    pub applied: usize,
    /// Index of the last consumed option token (its value token for
    /// value-taking options). Equals the start index when nothing was
    /// consumed.
    pub last_option: usize,
    /// Index of the first positional token; `args.len()` when the argument
    /// list held options only.
    pub next_index: usize,
    /// Scopes actually modified by applied options.
    pub modified: ScopeMask,
}

/// Scans `args` from `start`, applying recognized, permitted options to the
/// state records in `ctx` as it goes.
///
/// The scan stops at the first positional token or at the end-of-options
/// marker. Failures abort immediately: options applied earlier in the same
/// scan stay applied.
pub fn scan(
    ctx: &mut ScanContext<'_>,
    args: &[String],
    start: usize,
) -> Result<ScanOutcome, CommandError> {
    let mut index = start;
    let mut applied = 0;
    let mut last_option = start;
    let mut modified = ScopeMask::EMPTY;

    while index < args.len() {
        let token = args[index].as_str();

        if token == END_OF_OPTIONS {
            // The marker must be followed by at least one positional.
            if index == args.len() - 1 {
                return Err(CommandError::missing_option_value(ctx.command, index, args));
            }
            index += 1;
            break;
        }

        let Some(flag) = OptionFlag::lookup(token) else {
            if token.starts_with('-') {
                return Err(CommandError::unrecognized_option(index, args));
            }
            break;
        };

        if !flag.scope().mask().intersects(ctx.allowed) {
            return Err(CommandError::wrong_option_class(ctx.command, index, args));
        }

        match flag {
            OptionFlag::Ident => {
                let value = expect_value(ctx.command, args, &mut index)?;
                ctx.global.set_ident(value);
                modified |= ScopeMask::GLOBAL;
            }
            OptionFlag::Facility => {
                let value = expect_value(ctx.command, args, &mut index)?;
                let facility = Facility::from_name(value).ok_or_else(|| {
                    CommandError::unknown_symbol(SymbolKind::Facility, index, args)
                })?;
                // Under a command permitting both scopes the flag configures
                // the connection; under log it only overrides one call.
                if ctx.allowed.contains(ScopeMask::GLOBAL) {
                    ctx.global.set_facility(facility);
                    modified |= ScopeMask::GLOBAL;
                } else {
                    ctx.call.set_facility_override(facility);
                    modified |= ScopeMask::PER_CALL;
                }
            }
            OptionFlag::Level => {
                let value = expect_value(ctx.command, args, &mut index)?;
                let level = Severity::from_name(value).ok_or_else(|| {
                    CommandError::unknown_symbol(SymbolKind::Severity, index, args)
                })?;
                ctx.call.set_level(level);
                modified |= ScopeMask::PER_CALL;
            }
            OptionFlag::Format => {
                let value = expect_value(ctx.command, args, &mut index)?;
                ctx.call.set_format(value);
                modified |= ScopeMask::PER_CALL;
            }
            OptionFlag::Boolean(option) => {
                ctx.global.set_option(option);
                modified |= ScopeMask::GLOBAL;
            }
        }

        applied += 1;
        last_option = index;
        index += 1;
    }

    Ok(ScanOutcome {
        applied,
        last_option,
        next_index: index,
        modified,
    })
}

/// Consumes the token after the flag at `*index` as the flag's value.
fn expect_value<'a>(
    command: &str,
    args: &'a [String],
    index: &mut usize,
) -> Result<&'a str, CommandError> {
    if *index == args.len() - 1 {
        return Err(CommandError::missing_option_value(command, *index, args));
    }
    *index += 1;
    Ok(args[*index].as_str())
}
