//! crates/commands/src/handlers.rs
//! The user-visible commands, composed from scanner, state and channel.

use channel::{Channel, GlobalState};
use symbols::{Severity, SymbolKind};

use crate::call_state::{CallState, with_call_state};
use crate::error::{CommandError, CommandResult};
use crate::options::ScopeMask;
use crate::scanner::{ScanContext, scan};

/// `open ?-ident i? ?-facility f? ?-pid? ?-perror? ?-console? ?-nodelay?`
///
/// Applies connection-wide options and brings the connection up. When the
/// configuration changed (or the channel was still closed) the connection is
/// (re)opened so it reflects the latest state; an untouched open connection
/// is left alone.
pub fn open(channel: &Channel, args: &[String]) -> CommandResult<()> {
    with_call_state(|call| {
        let mut session = channel.session();
        let outcome = scan(
            &mut ScanContext {
                command: "open",
                allowed: ScopeMask::GLOBAL,
                global: session.state_mut(),
                call,
            },
            args,
            0,
        )?;
        if outcome.next_index < args.len() {
            return Err(CommandError::wrong_argument_count(
                "open",
                outcome.next_index,
                args,
            ));
        }
        session.ensure_open();
        Ok(())
    })
}

/// `close`
///
/// Tears the connection down. The configuration record survives: a later
/// `open` or `log` reuses ident, facility and options unchanged.
pub fn close(channel: &Channel, args: &[String]) -> CommandResult<()> {
    reject_arguments(channel, "close", args)?;
    channel.session().close();
    Ok(())
}

/// `isopen`
///
/// Reports whether the connection is currently open.
pub fn is_open(channel: &Channel, args: &[String]) -> CommandResult<bool> {
    reject_arguments(channel, "isopen", args)?;
    Ok(channel.session().is_open())
}

/// `configure ?option value? ...`
///
/// Applies connection-wide and per-call options without emitting. A
/// connection-wide change while the channel is open is picked up by the
/// reopen that precedes the next emission.
pub fn configure(channel: &Channel, args: &[String]) -> CommandResult<()> {
    with_call_state(|call| {
        let mut session = channel.session();
        let outcome = scan(
            &mut ScanContext {
                command: "configure",
                allowed: ScopeMask::BOTH,
                global: session.state_mut(),
                call,
            },
            args,
            0,
        )?;
        if outcome.next_index < args.len() {
            return Err(CommandError::wrong_argument_count(
                "configure",
                outcome.next_index,
                args,
            ));
        }
        Ok(())
    })
}

/// `cget ?-global?`
///
/// Without arguments, describes the invoking thread's call state; with
/// `-global`, describes the connection-wide record. Values are returned as
/// `(flag, value)` pairs with symbolic names resolved through the registry.
pub fn cget(channel: &Channel, args: &[String]) -> CommandResult<Vec<(String, String)>> {
    match args {
        [] => Ok(with_call_state(call_pairs)),
        [flag] if flag == "-global" => Ok(global_pairs(channel.session().state())),
        _ => {
            if args[0] == "-global" {
                return Err(CommandError::wrong_argument_count("cget", 1, args));
            }
            // Classify the bad argument list the same way a scan would.
            reject_arguments(channel, "cget", args).map(|()| Vec::new())
        }
    }
}

/// `log ?-level l? ?-facility f? ?-format fmt? ?level? ?message?`
///
/// Per-call options only. With no positionals the sticky call state is
/// updated without emitting; one positional is the message; two are an
/// explicit level followed by the message.
pub fn log(channel: &Channel, args: &[String]) -> CommandResult<()> {
    emit_command(channel, "log", ScopeMask::PER_CALL, args)
}

/// The single-shot form: connection-wide and per-call options followed by
/// an optional level and message, all in one invocation.
pub fn combined(channel: &Channel, args: &[String]) -> CommandResult<()> {
    emit_command(channel, "syslog", ScopeMask::BOTH, args)
}

fn emit_command(
    channel: &Channel,
    command: &str,
    allowed: ScopeMask,
    args: &[String],
) -> CommandResult<()> {
    with_call_state(|call| {
        let mut session = channel.session();
        let outcome = scan(
            &mut ScanContext {
                command,
                allowed,
                global: session.state_mut(),
                call,
            },
            args,
            0,
        )?;

        let rest = &args[outcome.next_index..];
        let message = match rest {
            [] => return Ok(()),
            [message] => message.as_str(),
            [level, message] => {
                let level = Severity::from_name(level).ok_or_else(|| {
                    CommandError::unknown_symbol(SymbolKind::Severity, outcome.next_index, args)
                })?;
                call.set_level(level);
                message.as_str()
            }
            _ => {
                return Err(CommandError::wrong_argument_count(
                    command,
                    outcome.next_index + 2,
                    args,
                ));
            }
        };

        session.ensure_open();
        let text = call.render(message);
        session.emit(call.priority(), &text);
        Ok(())
    })
}

/// Runs a scan that permits nothing, turning any argument into the
/// appropriate error for a command that accepts none.
fn reject_arguments(channel: &Channel, command: &str, args: &[String]) -> CommandResult<()> {
    if args.is_empty() {
        return Ok(());
    }
    with_call_state(|call| {
        let mut session = channel.session();
        let outcome = scan(
            &mut ScanContext {
                command,
                allowed: ScopeMask::EMPTY,
                global: session.state_mut(),
                call,
            },
            args,
            0,
        )?;
        Err(CommandError::wrong_argument_count(
            command,
            outcome.next_index,
            args,
        ))
    })
}

fn global_pairs(state: &GlobalState) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Some(ident) = state.ident() {
        pairs.push(("-ident".to_owned(), ident.to_owned()));
    }
    pairs.push(("-facility".to_owned(), state.facility().as_str().to_owned()));
    for option in state.set_options() {
        pairs.push((format!("-{option}"), "1".to_owned()));
    }
    pairs
}

fn call_pairs(call: &mut CallState) -> Vec<(String, String)> {
    let mut pairs = vec![
        ("-format".to_owned(), call.format().to_owned()),
        ("-level".to_owned(), call.level().as_str().to_owned()),
    ];
    if let Some(facility) = call.facility_override() {
        pairs.push(("-facility".to_owned(), facility.as_str().to_owned()));
    }
    pairs
}
