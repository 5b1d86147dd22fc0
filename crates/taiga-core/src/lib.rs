//! Gateway-agnostic pieces of the lookup pipeline: the quote-aware
//! command parser, the inline `{anime}` / `<manga>` mention scanner,
//! and the card renderer. Everything in this crate is pure and
//! synchronous; network and gateway concerns live elsewhere.

pub mod card;
pub mod command;
pub mod error;
pub mod mention;
mod tokenizer;

pub use card::{render, Card, CardField};
pub use command::parse_command;
pub use error::ParseError;
pub use mention::scan_mentions;
