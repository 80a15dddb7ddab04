//! Byte sources for the literal parser.
//!
//! [ByteSource] is the cursor [ByteParser](crate::parser::ByteParser) reads
//! through; [SliceByteSource] reads a borrowed string without copying it.

// =#========================================================================#=
// BYTE SOURCE (Trait)
// =#========================================================================#=
/// Forward-only cursor over bytes with bounded lookahead.
pub trait ByteSource {
    /// Returns the byte `offset` positions ahead without consuming anything,
    /// or `None` past the end.
    fn peek_at(&self, offset: usize) -> Option<u8>;

    /// Returns the current byte without consuming it.
    fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// Consumes and returns the current byte, `None` at the end.
    fn advance(&mut self) -> Option<u8>;

    /// Returns up to `k` upcoming bytes, fewer near the end.
    fn lookahead(&self, k: usize) -> &[u8];

    /// Number of bytes consumed so far.
    fn position(&self) -> usize;

    fn is_eof(&self) -> bool {
        self.peek().is_none()
    }
}

// =#========================================================================#=
// SLICE BYTE SOURCE
// =#========================================================================$=
/// Byte source over a borrowed byte slice.
#[derive(Debug, Clone, Copy)]
pub struct SliceByteSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceByteSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        SliceByteSource { bytes, pos: 0 }
    }

    /// Returns the bytes not consumed yet.
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos.min(self.bytes.len())..]
    }
}

impl<'a> From<&'a str> for SliceByteSource<'a> {
    fn from(input: &'a str) -> Self {
        SliceByteSource::new(input.as_bytes())
    }
}

impl ByteSource for SliceByteSource<'_> {
    #[inline]
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    #[inline]
    fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn lookahead(&self, k: usize) -> &[u8] {
        let rest = self.rest();
        &rest[..k.min(rest.len())]
    }

    #[inline]
    fn position(&self) -> usize {
        self.pos
    }
}
