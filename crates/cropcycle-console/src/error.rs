//! Error types for the operator console.

/// A console input line that could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    /// The first word is not a known command.
    #[error("unknown command `{command}` (try `help`)")]
    UnknownCommand {
        /// The word that was typed.
        command: String,
    },

    /// A command was given the wrong number of arguments.
    #[error("usage: {usage}")]
    Usage {
        /// The expected form.
        usage: &'static str,
    },

    /// A numeric argument did not parse.
    #[error("invalid number `{value}`")]
    InvalidNumber {
        /// The offending text.
        value: String,
    },

    /// An item name did not match any known item.
    #[error("unknown item `{name}`")]
    UnknownItem {
        /// The offending text.
        name: String,
    },
}
