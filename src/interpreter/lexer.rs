use logos::Logos;

/// Errors the lexer can attach to a token slice.
///
/// Logos yields the default variant for any character no pattern accepts; the
/// tokenizer turns that into a `BadChar` carrying the offending character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LexError {
    /// No token pattern matched at this position.
    #[default]
    UnexpectedChar,
    /// A run of digits and dots that is not a valid number.
    BadNumber(String),
}

/// Represents a lexical token in the source input.
///
/// This is the raw token stream; the tokenizer converts it into
/// [`crate::token::Token`] values while tracking parenthesis balance and
/// parity buckets.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexError)]
// Unicode space separators except the no-break spaces U+00A0, U+2007 and U+202F.
#[logos(skip r"[\t\n\x0B\x0C\r\x1C-\x1F \x{1680}\x{2000}-\x{2006}\x{2008}-\x{200A}\x{2028}\x{2029}\x{205F}\x{3000}]+")]
pub enum RawToken {
    /// A maximal run of digits and dots, such as `3`, `4.25`, `.5` or the
    /// invalid `1.2.3`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexError::BadNumber)`: If the slice is not a valid number, for
///   example a lone `.` or a run with two dots.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Result<f64, LexError> {
    let slice = lex.slice();
    slice.parse().map_err(|_| LexError::BadNumber(slice.to_string()))
}

#[cfg(test)]
mod tests {
    use logos::Logos;

    use super::{LexError, RawToken};

    fn lex_all(source: &str) -> Vec<Result<RawToken, LexError>> {
        RawToken::lexer(source).collect()
    }

    #[test]
    fn numbers_and_operators() {
        assert_eq!(lex_all("12.5 * (3)"),
                   vec![Ok(RawToken::Number(12.5)),
                        Ok(RawToken::Star),
                        Ok(RawToken::LParen),
                        Ok(RawToken::Number(3.0)),
                        Ok(RawToken::RParen)]);
    }

    #[test]
    fn digit_runs_are_maximal() {
        assert_eq!(lex_all("1.2.3"), vec![Err(LexError::BadNumber("1.2.3".to_string()))]);
        assert_eq!(lex_all("."), vec![Err(LexError::BadNumber(".".to_string()))]);
    }

    #[test]
    fn unknown_characters_use_default_error() {
        assert_eq!(lex_all("x"), vec![Err(LexError::UnexpectedChar)]);
    }

    #[test]
    fn unicode_spaces_are_skipped() {
        let expected = vec![Ok(RawToken::Number(1.0)), Ok(RawToken::Plus), Ok(RawToken::Number(2.0))];
        for space in ['\u{0B}', '\u{1F}', '\u{2003}', '\u{2028}', '\u{3000}'] {
            assert_eq!(lex_all(&format!("1{space}+{space}2")), expected, "{space:?}");
        }
    }

    #[test]
    fn no_break_spaces_are_not_whitespace() {
        for space in ['\u{A0}', '\u{2007}', '\u{202F}'] {
            assert!(lex_all(&format!("1{space}2")).contains(&Err(LexError::UnexpectedChar)),
                    "{space:?}");
        }
    }
}
