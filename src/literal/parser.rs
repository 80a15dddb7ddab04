//! Reader for tuple literal notation.

use crate::literal::Literal;
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::parsing_error::{ParsingError, ParsingErrorType};
use log::trace;

/// Deepest nesting of tuples and lists accepted by [parse_literal]
pub const MAX_NESTING_DEPTH: usize = 1024;

/// Parses a single literal from its tuple notation.
///
/// # Errors
/// Returns a [ParsingError] if the input is empty, malformed, or has
/// trailing input after the literal. Tuples and lists nested deeper than
/// [MAX_NESTING_DEPTH] fail with [ParsingErrorType::NestingTooDeep].
///
/// # Example
/// ```
/// use phylotuple::literal::{parse_literal, Literal};
///
/// let literal = parse_literal("('A', (), None)").unwrap();
/// assert_eq!(
///     literal,
///     Literal::tuple([Literal::str("A"), Literal::empty(), Literal::None])
/// );
/// ```
pub fn parse_literal<S: AsRef<str>>(input: S) -> Result<Literal, ParsingError> {
    let mut parser = ByteParser::for_str(input.as_ref());

    parser.skip_whitespace();
    if parser.is_eof() {
        return Err(ParsingError::from_parser(ParsingErrorType::EmptyInput, &parser));
    }

    let literal = parse_value(&mut parser, 0)?;

    parser.skip_whitespace();
    if !parser.is_eof() {
        return Err(ParsingError::from_parser(ParsingErrorType::TrailingInput, &parser));
    }

    trace!("Parsed {} literal", literal.kind_name());
    Ok(literal)
}

/// Parses any literal, dispatching on its first byte:
/// - Skips leading whitespace
/// - `(` tuple or grouping, `[` list, quotes label, sign/digit/`.` number, `None`
///
/// `depth` counts the containers already open around this value.
fn parse_value<B: ByteSource>(
    parser: &mut ByteParser<B>,
    depth: usize,
) -> Result<Literal, ParsingError> {
    parser.skip_whitespace();

    match parser.peek() {
        None => Err(ParsingError::unexpected_eof(parser)),
        Some(b'(' | b'[') if depth >= MAX_NESTING_DEPTH => {
            trace!("Container at depth {depth} exceeds the nesting limit");
            Err(ParsingError::from_parser(
                ParsingErrorType::NestingTooDeep(MAX_NESTING_DEPTH),
                parser,
            ))
        }
        Some(b'(') => parse_parenthesized(parser, depth),
        Some(b'[') => {
            let (items, _) = parse_sequence(parser, b'[', b']', depth)?;
            Ok(Literal::List(items))
        }
        Some(b'\'' | b'"') => Ok(Literal::Str(parser.parse_quoted_label()?)),
        Some(b) if b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.') => parse_number(parser),
        Some(_) if parser.consume_if_word("None") => Ok(Literal::None),
        Some(b) => Err(ParsingError::unexpected_character(
            parser,
            format!("{:?} cannot start a literal", char::from(b)),
        )),
    }
}

/// Parses `( ... )`, which is a tuple unless it holds exactly one element
/// without trailing comma, in which case the parentheses only group.
fn parse_parenthesized<B: ByteSource>(
    parser: &mut ByteParser<B>,
    depth: usize,
) -> Result<Literal, ParsingError> {
    let (mut items, trailing_comma) = parse_sequence(parser, b'(', b')', depth)?;

    if items.len() == 1 && !trailing_comma {
        return Ok(items.remove(0));
    }

    Ok(Literal::Tuple(items))
}

/// Parses comma separated values between `open` and `close`.
///
/// # Returns
/// - the parsed items
/// - whether the last item was followed by a comma
fn parse_sequence<B: ByteSource>(
    parser: &mut ByteParser<B>,
    open: u8,
    close: u8,
    depth: usize,
) -> Result<(Vec<Literal>, bool), ParsingError> {
    // Calling method has peeked at the opening byte
    parser.consume_if(open);

    let mut items = Vec::new();
    let mut trailing_comma = false;
    loop {
        parser.skip_whitespace();
        if parser.consume_if(close) {
            break;
        }

        items.push(parse_value(parser, depth + 1)?);

        parser.skip_whitespace();
        if parser.consume_if(b',') {
            trailing_comma = true;
            continue;
        }
        trailing_comma = false;

        if parser.consume_if(close) {
            break;
        }
        return match parser.peek() {
            None => Err(ParsingError::unexpected_eof(parser)),
            Some(b) => Err(ParsingError::unexpected_character(
                parser,
                format!(
                    "expected ',' or {:?} but found {:?}",
                    char::from(close),
                    char::from(b)
                ),
            )),
        };
    }

    Ok((items, trailing_comma))
}

/// Parses an integer, or a float if the token has a fraction or exponent.
fn parse_number<B: ByteSource>(parser: &mut ByteParser<B>) -> Result<Literal, ParsingError> {
    let start = parser.position();
    let token = parser.parse_number_token();
    let cleaned = token.replace('_', "");

    let is_float = cleaned.contains(['.', 'e', 'E']);
    let parsed = if is_float {
        cleaned.parse::<f64>().ok().map(Literal::Float)
    } else {
        cleaned.parse::<i64>().ok().map(Literal::Int)
    };

    parsed.ok_or_else(|| {
        trace!("Invalid number token {token:?} starting at {start}");
        ParsingError::from_parser(ParsingErrorType::InvalidNumber(token), parser)
    })
}
