//! Lexer and line-tracking cursor for TFC netlists.
//!
//! TFC is line oriented: a statement is a leading word followed by the rest
//! of its line. The lexer therefore only distinguishes words from line
//! breaks, and the [`Cursor`] hands out either the next word or the raw
//! remainder of the current line.

use logos::Logos;

use crate::error::{ParseError, ParseResult};

/// Tokens for TFC.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\x0B\x0C]+")]
pub enum Token<'src> {
    #[token("\n")]
    Newline,

    /// Any run of printable characters. Control characters are not text.
    #[regex(r"[^\x00-\x20\x7F]+", |lex| lex.slice())]
    Word(&'src str),
}

/// A word together with the line it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'src> {
    pub text: &'src str,
    pub line: usize,
}

/// Forward-only cursor over a TFC source.
///
/// Tracks a 1-based line counter. The cursor never rewinds.
pub struct Cursor<'src> {
    source: &'src str,
    lexer: logos::Lexer<'src, Token<'src>>,
    line: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            lexer: Token::lexer(source),
            line: 1,
        }
    }

    /// Current 1-based line.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    fn next_token(&mut self) -> ParseResult<Option<Token<'src>>> {
        match self.lexer.next() {
            None => Ok(None),
            Some(Ok(token)) => Ok(Some(token)),
            Some(Err(())) => Err(ParseError::LexerError {
                line: self.line,
                position: self.lexer.span().start,
            }),
        }
    }

    /// Read the next word, skipping line breaks. `None` at end of input.
    pub fn next_word(&mut self) -> ParseResult<Option<Word<'src>>> {
        loop {
            match self.next_token()? {
                None => return Ok(None),
                Some(Token::Newline) => self.line += 1,
                Some(Token::Word(text)) => {
                    return Ok(Some(Word {
                        text,
                        line: self.line,
                    }));
                }
            }
        }
    }

    /// Consume the remainder of the current line, including its line break.
    ///
    /// Returns the text between the first and last word on the rest of the
    /// line, with inner whitespace preserved. Empty if nothing follows.
    pub fn rest_of_line(&mut self) -> ParseResult<&'src str> {
        let mut span: Option<(usize, usize)> = None;
        loop {
            match self.next_token()? {
                None => break,
                Some(Token::Newline) => {
                    self.line += 1;
                    break;
                }
                Some(Token::Word(_)) => {
                    let current = self.lexer.span();
                    span = Some(match span {
                        None => (current.start, current.end),
                        Some((start, _)) => (start, current.end),
                    });
                }
            }
        }
        Ok(span.map_or("", |(start, end)| &self.source[start..end]))
    }

    /// Discard the remainder of the current line.
    pub fn skip_line(&mut self) -> ParseResult<()> {
        self.rest_of_line().map(|_| ())
    }
}

/// Split a comma-separated list into trimmed items.
///
/// An empty or all-whitespace input yields no items.
pub fn split_list(list: &str) -> Vec<&str> {
    if list.trim().is_empty() {
        return Vec::new();
    }
    list.split(',').map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokens() {
        let tokens: Vec<_> = Token::lexer(".v a,b\nBEGIN")
            .filter_map(Result::ok)
            .collect();

        assert_eq!(
            tokens,
            vec![
                Token::Word(".v"),
                Token::Word("a,b"),
                Token::Newline,
                Token::Word("BEGIN"),
            ]
        );
    }

    #[test]
    fn test_cursor_tracks_lines() {
        let mut cursor = Cursor::new("\n\n  .v a\r\n\nBEGIN\n");
        let word = cursor.next_word().unwrap().unwrap();
        assert_eq!(word.text, ".v");
        assert_eq!(word.line, 3);

        assert_eq!(cursor.rest_of_line().unwrap(), "a");
        assert_eq!(cursor.line(), 4);

        let word = cursor.next_word().unwrap().unwrap();
        assert_eq!(word.text, "BEGIN");
        assert_eq!(word.line, 5);
        assert!(cursor.next_word().unwrap().is_none());
    }

    #[test]
    fn test_rest_of_line_keeps_inner_spacing() {
        let mut cursor = Cursor::new("t3 a, b' ,c  \nEND");
        cursor.next_word().unwrap();
        assert_eq!(cursor.rest_of_line().unwrap(), "a, b' ,c");
        assert_eq!(cursor.next_word().unwrap().unwrap().text, "END");
    }

    #[test]
    fn test_rest_of_line_empty_at_eof() {
        let mut cursor = Cursor::new(".ol");
        cursor.next_word().unwrap();
        assert_eq!(cursor.rest_of_line().unwrap(), "");
        assert!(cursor.next_word().unwrap().is_none());
    }

    #[test]
    fn test_skip_line() {
        let mut cursor = Cursor::new("# a comment, with words\nBEGIN");
        cursor.next_word().unwrap();
        cursor.skip_line().unwrap();
        let word = cursor.next_word().unwrap().unwrap();
        assert_eq!((word.text, word.line), ("BEGIN", 2));
    }

    #[test]
    fn test_control_character_is_rejected() {
        let mut cursor = Cursor::new("# ok\n.v a\x01b\n");
        cursor.next_word().unwrap();
        cursor.skip_line().unwrap();
        cursor.next_word().unwrap();

        let err = cursor.rest_of_line().unwrap_err();
        assert!(matches!(err, ParseError::LexerError { line: 2, .. }));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("a,b, c"), vec!["a", "b", "c"]);
        assert_eq!(split_list("x"), vec!["x"]);
        assert!(split_list("").is_empty());
        assert_eq!(split_list("a,,b"), vec!["a", "", "b"]);
    }
}
