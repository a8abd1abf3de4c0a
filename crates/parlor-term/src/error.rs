//! Text front-end errors.

/// Errors that can occur while reading or parsing front-end commands.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// A command is missing one of its arguments.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// The argument that was expected.
        argument: &'static str,
    },

    /// A square was not valid algebraic notation.
    #[error("invalid square: {text}")]
    InvalidSquare {
        /// The text that failed to parse.
        text: String,
    },

    /// A numeric argument could not be parsed.
    #[error("invalid number for {argument}: {value}")]
    InvalidNumber {
        /// Which argument was being read.
        argument: &'static str,
        /// The text that failed to parse.
        value: String,
    },

    /// `setoption` without the `name <id> value <v>` shape.
    #[error("malformed setoption command")]
    MalformedSetOption,

    /// `setoption` for an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name given.
        name: String,
    },

    /// An option value was out of range or unparseable.
    #[error("invalid value for option {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred on the input or output stream.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
