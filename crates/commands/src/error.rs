//! crates/commands/src/error.rs
//! The error taxonomy shared by the scanner and the command handlers.

use symbols::SymbolKind;
use thiserror::Error;

/// Result type for command handlers.
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors surfaced while parsing or executing a command.
///
/// Every variant records the offending argument index and the argument
/// vector the handler scanned (the command word itself is not part of that
/// vector), so callers can match errors programmatically. All variants are
/// detected synchronously and abort the command; options applied earlier in
/// the same scan are deliberately not rolled back.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CommandError {
    /// A value-taking option was the last token of the argument list.
    #[error("missing value for option '{option}' in {command}")]
    MissingOptionValue {
        /// The command being parsed.
        command: String,
        /// The option flag lacking its value.
        option: String,
        /// Index of the flag in the argument vector.
        index: usize,
        /// The scanned argument vector.
        argv: Vec<String>,
    },
    /// A token starting with the option marker matched no registered option.
    #[error("unrecognized option '{option}'")]
    UnrecognizedOption {
        /// The unrecognized token.
        option: String,
        /// Index of the token in the argument vector.
        index: usize,
        /// The scanned argument vector.
        argv: Vec<String>,
    },
    /// A registered option is not permitted for the invoking command.
    #[error("option '{option}' is not accepted by {command}")]
    WrongOptionClass {
        /// The command being parsed.
        command: String,
        /// The disallowed option flag.
        option: String,
        /// Index of the flag in the argument vector.
        index: usize,
        /// The scanned argument vector.
        argv: Vec<String>,
    },
    /// A facility or level value did not resolve through the registry.
    #[error("unknown {kind} '{value}'")]
    UnknownSymbol {
        /// The registry category the value was offered for.
        kind: SymbolKind,
        /// The unresolvable symbolic value.
        value: String,
        /// Index of the value token in the argument vector.
        index: usize,
        /// The scanned argument vector.
        argv: Vec<String>,
    },
    /// The positional arguments left after option parsing do not match the
    /// command's arity.
    #[error("wrong number of arguments to {command}")]
    WrongArgumentCount {
        /// The command being parsed.
        command: String,
        /// Index of the first argument outside the accepted arity.
        index: usize,
        /// The scanned argument vector.
        argv: Vec<String>,
    },
}

impl CommandError {
    /// Returns the machine-matchable category tag for this error.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::MissingOptionValue { .. } => "missing_argument_value",
            Self::UnrecognizedOption { .. } => "invalid_option",
            Self::WrongOptionClass { .. } => "wrong_option_class",
            Self::UnknownSymbol { .. } => "unknown_symbol",
            Self::WrongArgumentCount { .. } => "wrong_arguments",
        }
    }

    /// Returns the index of the offending argument.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::MissingOptionValue { index, .. }
            | Self::UnrecognizedOption { index, .. }
            | Self::WrongOptionClass { index, .. }
            | Self::UnknownSymbol { index, .. }
            | Self::WrongArgumentCount { index, .. } => *index,
        }
    }

    /// Returns the argument vector the failing scan ran over.
    #[must_use]
    pub fn argv(&self) -> &[String] {
        match self {
            Self::MissingOptionValue { argv, .. }
            | Self::UnrecognizedOption { argv, .. }
            | Self::WrongOptionClass { argv, .. }
            | Self::UnknownSymbol { argv, .. }
            | Self::WrongArgumentCount { argv, .. } => argv,
        }
    }

    pub(crate) fn missing_option_value(command: &str, index: usize, args: &[String]) -> Self {
        Self::MissingOptionValue {
            command: command.to_owned(),
            option: args[index].clone(),
            index,
            argv: args.to_vec(),
        }
    }

    pub(crate) fn unrecognized_option(index: usize, args: &[String]) -> Self {
        Self::UnrecognizedOption {
            option: args[index].clone(),
            index,
            argv: args.to_vec(),
        }
    }

    pub(crate) fn wrong_option_class(command: &str, index: usize, args: &[String]) -> Self {
        Self::WrongOptionClass {
            command: command.to_owned(),
            option: args[index].clone(),
            index,
            argv: args.to_vec(),
        }
    }

    pub(crate) fn unknown_symbol(kind: SymbolKind, index: usize, args: &[String]) -> Self {
        Self::UnknownSymbol {
            kind,
            value: args[index].clone(),
            index,
            argv: args.to_vec(),
        }
    }

    pub(crate) fn wrong_argument_count(command: &str, index: usize, args: &[String]) -> Self {
        Self::WrongArgumentCount {
            command: command.to_owned(),
            index,
            argv: args.to_vec(),
        }
    }
}
