//! The explicit command path of the Media Query Builder.
//!
//! Grammar (prefix already stripped by the router):
//!
//! ```text
//! [anime|manga] <id|title|person|studio> <args...>
//! ```
//!
//! The optional leading type token is case-insensitive, and each
//! remaining argument yields one independent query.

use taiga_api::{EntityRef, MediaKind, MediaQuery, TitleSort};

use crate::error::ParseError;
use crate::tokenizer::tokenize;

/// Explicit commands resolve each argument to a single best card.
const COMMAND_MAX_RESULTS: u32 = 1;

/// Parse the body of an explicit command into one query per argument.
pub fn parse_command(input: &str) -> Result<Vec<MediaQuery>, ParseError> {
    let tokens = tokenize(input)?;
    let mut rest = tokens.as_slice();

    let kind = match rest.first().map(|t| t.to_ascii_lowercase()).as_deref() {
        Some("anime") => {
            rest = &rest[1..];
            Some(MediaKind::Anime)
        }
        Some("manga") => {
            rest = &rest[1..];
            Some(MediaKind::Manga)
        }
        _ => None,
    };

    let Some((command, args)) = rest.split_first() else {
        return Err(ParseError::Empty);
    };

    match command.as_str() {
        "id" => {
            require_args(args, "id")?;
            args.iter()
                .map(|arg| {
                    let id = arg
                        .parse::<u64>()
                        .map_err(|_| ParseError::InvalidId(arg.clone()))?;
                    Ok(MediaQuery::ById { id })
                })
                .collect()
        }
        "title" => {
            require_args(args, "title")?;
            Ok(args
                .iter()
                .map(|title| MediaQuery::ByTitle {
                    title: title.clone(),
                    kind,
                    sort: TitleSort::Relevance,
                    max_results: COMMAND_MAX_RESULTS,
                })
                .collect())
        }
        "person" => {
            require_args(args, "person")?;
            Ok(args
                .iter()
                .map(|name| MediaQuery::ByPerson {
                    person: EntityRef::name(name.clone()),
                    kind,
                    max_results: COMMAND_MAX_RESULTS,
                })
                .collect())
        }
        "studio" => {
            require_args(args, "studio")?;
            Ok(args
                .iter()
                .map(|name| MediaQuery::ByStudio {
                    studio: EntityRef::name(name.clone()),
                    max_results: COMMAND_MAX_RESULTS,
                })
                .collect())
        }
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn require_args(args: &[String], command: &'static str) -> Result<(), ParseError> {
    if args.is_empty() {
        Err(ParseError::MissingArgument(command))
    } else {
        Ok(())
    }
}
