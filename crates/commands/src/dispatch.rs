//! crates/commands/src/dispatch.rs
//! Maps an argument vector onto the command surface.

use channel::Channel;

use crate::error::{CommandError, CommandResult};
use crate::handlers;

/// Successful command output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reply {
    /// The command produced no value.
    None,
    /// Answer from `isopen`.
    IsOpen(bool),
    /// `(flag, value)` pairs from `cget`.
    Pairs(Vec<(String, String)>),
}

/// Dispatches one command.
///
/// `argv[0]` selects the subcommand; a first token that is not a known
/// subcommand selects the single-shot form, which consumes the whole vector
/// as its argument list.
pub fn dispatch(channel: &Channel, argv: &[String]) -> CommandResult<Reply> {
    let Some(first) = argv.first() else {
        return Err(CommandError::wrong_argument_count("syslog", 0, argv));
    };
    let rest = &argv[1..];
    match first.as_str() {
        "open" => handlers::open(channel, rest).map(|()| Reply::None),
        "close" => handlers::close(channel, rest).map(|()| Reply::None),
        "isopen" => handlers::is_open(channel, rest).map(Reply::IsOpen),
        "configure" => handlers::configure(channel, rest).map(|()| Reply::None),
        "cget" => handlers::cget(channel, rest).map(Reply::Pairs),
        "log" => handlers::log(channel, rest).map(|()| Reply::None),
        _ => handlers::combined(channel, argv).map(|()| Reply::None),
    }
}
