//! Header, block and scope values.

use cl_ir::{Location, TokenKind, TokenRange};

/// A function signature.
#[derive(Clone, Debug)]
pub struct Header<'a> {
    pub name: String,
    pub range: TokenRange<'a>,
}

impl<'a> Header<'a> {
    /// Header named after the first identifier in `range`, or its first
    /// token when there is none.
    pub fn from_range(range: TokenRange<'a>) -> Self {
        let name = range
            .tokens()
            .iter()
            .find(|token| token.kind == TokenKind::Name)
            .or_else(|| range.first())
            .map(|token| token.value.clone())
            .unwrap_or_default();
        Header { name, range }
    }
}

/// A balanced-delimiter body, delimiters included.
#[derive(Clone, Debug)]
pub struct Block<'a> {
    pub range: TokenRange<'a>,
}

impl<'a> Block<'a> {
    pub fn new(range: TokenRange<'a>) -> Self {
        Block { range }
    }

    /// Index of the opening delimiter in the token stream.
    #[inline]
    pub fn start(&self) -> usize {
        self.range.start()
    }
}

/// A header and the block that forms its body.
#[derive(Clone, Debug)]
pub struct Scope<'a> {
    pub header: Header<'a>,
    pub block: Block<'a>,
}

impl Scope<'_> {
    pub fn name(&self) -> &str {
        &self.header.name
    }

    /// Where the signature begins.
    pub fn start_location(&self) -> Option<Location> {
        self.header.range.start_location()
    }

    /// Just past the closing delimiter.
    pub fn end_location(&self) -> Option<Location> {
        self.block.range.end_location()
    }
}
