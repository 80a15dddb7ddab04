//! Low-level byte-by-byte parser for ASCII text.
//!
//! This module provides [ByteParser] for text-based literal notation with support
//! for peeking, consuming, pattern matching, and quote-aware label parsing. Used as
//! the foundation for the tuple literal reader in [crate::literal].

use crate::parser::byte_source::{ByteSource, SliceByteSource};
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte parser for ASCII text with support for peeking, consuming, and pattern matching.
///
/// # Features
/// - Works with any [ByteSource]
/// - Whitespace skipping
/// - Quote-aware label parsing (single or double quotes, backslash escapes)
/// - Number token extraction
/// - Context extraction for error reporting
///
/// # Example
/// ```
/// use phylotuple::parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("  ('A', None)");
/// parser.skip_whitespace();
/// assert!(parser.consume_if(b'('));
/// assert_eq!(parser.parse_quoted_label().unwrap(), "A");
/// assert!(parser.consume_if(b','));
/// parser.skip_whitespace();
/// assert!(parser.consume_if_word("None"));
/// ```
#[derive(Debug)]
pub struct ByteParser<S: ByteSource> {
    source: S,
}

impl<'a> ByteParser<SliceByteSource<'a>> {
    /// Creates a new `ByteParser` reading the given string in place.
    pub fn for_str(input: &'a str) -> Self {
        Self::new(SliceByteSource::from(input))
    }
}

impl<S: ByteSource> ByteParser<S> {
    /// Creates a new `ByteParser` from a byte source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Peeks at the current byte without consuming it.
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.source.peek()
    }

    /// Gets the current byte and advances the position (consumes it).
    #[inline(always)]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<u8> {
        self.source.advance()
    }

    /// Skips ASCII whitespace, so literals may span several lines.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.next();
        }
    }

    /// Checks if the current byte matches the target byte exactly.
    pub fn peek_is(&self, ch: u8) -> bool {
        self.peek() == Some(ch)
    }

    /// Consumes the current byte if it matches the target byte.
    ///
    /// # Returns
    /// `true` if the byte was matched and consumed, `false` otherwise
    pub fn consume_if(&mut self, ch: u8) -> bool {
        if self.peek_is(ch) {
            self.next();
            true
        } else {
            false
        }
    }

    /// Consumes the next bytes if they spell the given word (case-sensitive)
    /// and the word is not directly followed by another identifier character.
    ///
    /// Only consumes on a full match; on a mismatch the position is unchanged.
    ///
    /// # Returns
    /// `true` if the word was matched and consumed, `false` otherwise
    pub fn consume_if_word(&mut self, word: &str) -> bool {
        let bytes = word.as_bytes();
        if self.source.lookahead(bytes.len()) != bytes {
            return false;
        }
        if self
            .source
            .peek_at(bytes.len())
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            return false;
        }

        for _ in 0..bytes.len() {
            self.next();
        }
        true
    }

    /// Returns whether the end of data (EOF) has been reached.
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    /// Returns the current parser position in the input.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Returns a string from up to `k` bytes from the current position for error context.
    ///
    /// Invalid UTF-8 sequences are replaced with the Unicode replacement character.
    pub fn get_context_as_string(&self, k: usize) -> String {
        String::from_utf8_lossy(self.source.lookahead(k)).into_owned()
    }

    /// Parses a quoted label enclosed in single or double quotes.
    ///
    /// Expects the parser at the opening quote, which also determines the
    /// closing quote. A backslash escapes the following byte
    /// (e.g. `'Wilson\'s'` becomes `Wilson's`).
    ///
    /// # Returns
    /// The parsed label string without the enclosing quotes
    ///
    /// # Errors
    /// Returns an error if the parser is not at a quote or the label is not closed.
    pub fn parse_quoted_label(&mut self) -> Result<String, ParsingError> {
        let quote = match self.peek() {
            Some(q @ (b'\'' | b'"')) => q,
            Some(b) => {
                return Err(ParsingError::unexpected_character(
                    self,
                    format!("expected quote but found {:?}", char::from(b)),
                ));
            }
            None => return Err(ParsingError::unexpected_eof(self)),
        };
        self.next(); // consume opening quote

        let mut bytes = Vec::new();
        loop {
            match self.next() {
                Some(b'\\') => match self.next() {
                    Some(escaped) => bytes.push(escaped),
                    None => {
                        return Err(ParsingError::from_parser(
                            ParsingErrorType::UnclosedLabel,
                            self,
                        ));
                    }
                },
                Some(b) if b == quote => break,
                Some(b) => bytes.push(b),
                None => {
                    return Err(ParsingError::from_parser(
                        ParsingErrorType::UnclosedLabel,
                        self,
                    ));
                }
            }
        }

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Consumes and returns a number token: an optional sign followed by
    /// digits, `.`, `_`, exponent markers and exponent signs.
    ///
    /// No validation happens here; the caller decides how to interpret the token.
    pub fn parse_number_token(&mut self) -> String {
        let mut token = String::new();
        if let Some(sign @ (b'+' | b'-')) = self.peek() {
            token.push(char::from(sign));
            self.next();
        }

        while let Some(b) = self.peek() {
            let after_exponent = token.ends_with(['e', 'E']);
            let accepted = b.is_ascii_digit()
                || matches!(b, b'.' | b'_' | b'e' | b'E')
                || (after_exponent && matches!(b, b'+' | b'-'));
            if !accepted {
                break;
            }
            token.push(char::from(b));
            self.next();
        }

        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_whitespace() {
        let mut parser = ByteParser::for_str(" \t\r\n(");
        parser.skip_whitespace();
        assert_eq!(parser.peek(), Some(b'('));
        assert_eq!(parser.position(), 4);
    }

    #[test]
    fn test_consume_if_word_requires_word_boundary() {
        let mut parser = ByteParser::for_str("Nonesuch");
        assert!(!parser.consume_if_word("None"));
        assert_eq!(parser.position(), 0);

        let mut parser = ByteParser::for_str("None,");
        assert!(parser.consume_if_word("None"));
        assert_eq!(parser.peek(), Some(b','));
    }

    #[test]
    fn test_parse_quoted_label_with_escape() {
        let mut parser = ByteParser::for_str(r"'Wilson\'s Storm-petrel' rest");
        assert_eq!(parser.parse_quoted_label().unwrap(), "Wilson's Storm-petrel");
        assert_eq!(parser.peek(), Some(b' '));
    }

    #[test]
    fn test_parse_double_quoted_label_keeps_single_quote() {
        let mut parser = ByteParser::for_str("\"Baillon's Crake\"");
        assert_eq!(parser.parse_quoted_label().unwrap(), "Baillon's Crake");
        assert!(parser.is_eof());
    }

    #[test]
    fn test_parse_quoted_label_unclosed() {
        let mut parser = ByteParser::for_str("'Kakapo");
        let err = parser.parse_quoted_label().unwrap_err();
        assert_eq!(err.kind(), &ParsingErrorType::UnclosedLabel);
    }

    #[test]
    fn test_parse_number_token() {
        let mut parser = ByteParser::for_str("-1.5e-3, 2");
        assert_eq!(parser.parse_number_token(), "-1.5e-3");
        assert_eq!(parser.peek(), Some(b','));
    }
}
