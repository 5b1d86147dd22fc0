use crate::error::ParseError;

/// Split a command string into space-delimited, quote-aware tokens.
/// `"Attack on Titan"` is a single token; runs of whitespace between
/// bare tokens are collapsed.
pub(crate) fn tokenize(input: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in input.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err(ParseError::UnterminatedQuote);
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_tokens() {
        assert_eq!(tokenize("id 123 456").unwrap(), vec!["id", "123", "456"]);
    }

    #[test]
    fn test_quoted_token_keeps_spaces() {
        assert_eq!(
            tokenize(r#"title "Attack on Titan""#).unwrap(),
            vec!["title", "Attack on Titan"]
        );
    }

    #[test]
    fn test_quote_mid_token() {
        assert_eq!(tokenize(r#"ti"tl"e"#).unwrap(), vec!["title"]);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(tokenize("  title   Berserk  ").unwrap(), vec!["title", "Berserk"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_unterminated_quote() {
        assert_eq!(
            tokenize(r#"title "Attack on"#).unwrap_err(),
            ParseError::UnterminatedQuote
        );
    }
}
