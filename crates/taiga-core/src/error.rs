use thiserror::Error;

/// Errors from parsing an explicit bot command. All of these are
/// user-facing: the message is reported back to the channel and the
/// request is dropped, with no retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no command given")]
    Empty,

    #[error("unknown command `{0}` (expected id, title, person, or studio)")]
    UnknownCommand(String),

    #[error("`{0}` needs at least one argument")]
    MissingArgument(&'static str),

    #[error("`{0}` is not a numeric id")]
    InvalidId(String),

    #[error("unterminated quote in arguments")]
    UnterminatedQuote,
}
