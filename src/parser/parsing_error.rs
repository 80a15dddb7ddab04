//! Error types for the tuple literal parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while reading tree literals from text.

use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use thiserror::Error;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 30;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================€=
/// Error types that can occur while parsing a literal.
#[derive(Error, PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    /// Input ended in the middle of a literal
    #[error("Unexpected end of input")]
    UnexpectedEOF,
    /// Input contained nothing but whitespace
    #[error("Empty input")]
    EmptyInput,
    /// Quoted label without closing quote
    #[error("Unclosed label quote")]
    UnclosedLabel,
    /// Number token that is neither an integer nor a float
    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
    /// Character that cannot start or continue a literal here
    #[error("Unexpected character - {0}")]
    UnexpectedCharacter(String),
    /// More input after a complete literal
    #[error("Trailing input after literal")]
    TrailingInput,
    /// Tuples or lists nested deeper than the given limit
    #[error("Nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================$=
/// Parsing error with contextual information (position and surrounding bytes).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{} at position {}{}", .kind, .position, context_suffix(.context))]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

fn context_suffix(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!("\n  Context (next {} bytes): {}", context.len(), context)
    }
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser<S: ByteSource>(kind: ParsingErrorType, parser: &ByteParser<S>) -> Self {
        Self {
            kind,
            position: parser.position(),
            context: parser.get_context_as_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for UnexpectedEOF
    pub fn unexpected_eof<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::UnexpectedEOF, parser)
    }

    /// Convenience constructor for UnexpectedCharacter
    pub fn unexpected_character<S: ByteSource>(parser: &ByteParser<S>, msg: String) -> Self {
        Self::from_parser(ParsingErrorType::UnexpectedCharacter(msg), parser)
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }
}
