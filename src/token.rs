// Rust Bscript Library
// Written by
//   The Bscript developers
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! # Tokens
//!
//! The value type shared by the raw codec, the asm codec and the template
//! engine.
//!

use std::fmt;

use crate::hex;
use crate::opcodes;

/// One element of a script.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    /// Pushed data, without its length prefix
    Literal(Vec<u8>),
    /// A standalone opcode. Never in the implicit push range [1, 78].
    Opcode(u8),
    /// A template slot, e.g. `20-byte-pubkey-hash` or `OP_1-OP_16`
    Placeholder(String),
    /// The previous template entry may occur zero or more times
    Repeat,
}

impl Token {
    /// Whether this is a [`Token::Literal`].
    pub fn is_literal(&self) -> bool {
        matches!(*self, Token::Literal(..))
    }

    /// Whether this token can appear in a concrete script.
    pub fn is_concrete(&self) -> bool {
        match *self {
            Token::Literal(..) | Token::Opcode(..) => true,
            Token::Placeholder(..) | Token::Repeat => false,
        }
    }

    /// The pushed bytes of a literal.
    pub fn as_literal(&self) -> Option<&[u8]> {
        match *self {
            Token::Literal(ref data) => Some(data),
            _ => None,
        }
    }

    /// The value of an opcode.
    pub fn as_opcode(&self) -> Option<u8> {
        match *self {
            Token::Opcode(code) => Some(code),
            _ => None,
        }
    }

    /// A short name for the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match *self {
            Token::Literal(..) => "literal",
            Token::Opcode(..) => "opcode",
            Token::Placeholder(..) => "placeholder",
            Token::Repeat => "repeat",
        }
    }

    /// Whether an opcode token respects the implicit push invariant.
    /// Other variants always do.
    pub fn is_well_formed(&self) -> bool {
        match *self {
            Token::Opcode(code) => !opcodes::is_push_opcode(code),
            _ => true,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Token::Literal(ref data) => {
                f.write_str("Literal(")?;
                hex::format_hex(data, f)?;
                f.write_str(")")
            }
            Token::Opcode(code) => write!(f, "Opcode({})", code),
            Token::Placeholder(ref spec) => write!(f, "Placeholder({:?})", spec),
            Token::Repeat => f.write_str("Repeat"),
        }
    }
}

impl From<Vec<u8>> for Token {
    fn from(data: Vec<u8>) -> Token {
        Token::Literal(data)
    }
}

impl<'a> From<&'a [u8]> for Token {
    fn from(data: &'a [u8]) -> Token {
        Token::Literal(data.to_vec())
    }
}

/// Source offsets of a token: characters for asm text, bytes for raw
/// scripts. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Span {
    /// First offset of the token
    pub start: usize,
    /// One past the last offset of the token
    pub end: usize,
}

impl Span {
    /// Creates a span.
    pub fn new(start: usize, end: usize) -> Span {
        Span { start, end }
    }

    /// Number of offsets covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A token with the place it came from. The span is diagnostic only and
/// plays no part in encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Spanned {
    /// The token
    pub token: Token,
    /// Where it was found
    pub span: Span,
}

impl Spanned {
    /// Pairs a token with its span.
    pub fn new(token: Token, span: Span) -> Spanned {
        Spanned { token, span }
    }

    /// Drops the span.
    pub fn into_token(self) -> Token {
        self.token
    }
}

/// Strips spans from a decoded sequence.
pub fn strip_spans(spanned: Vec<Spanned>) -> Vec<Token> {
    spanned.into_iter().map(Spanned::into_token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let lit = Token::from(vec![0xab, 0xcd]);
        assert!(lit.is_literal());
        assert!(lit.is_concrete());
        assert_eq!(lit.as_literal(), Some(&[0xab, 0xcd][..]));
        assert_eq!(lit.as_opcode(), None);
        assert_eq!(lit.kind(), "literal");

        let op = Token::Opcode(0xa9);
        assert_eq!(op.as_opcode(), Some(0xa9));
        assert!(op.is_well_formed());
        assert!(!Token::Opcode(0x4c).is_well_formed());
        assert!(Token::Opcode(0).is_well_formed());

        assert!(!Token::Repeat.is_concrete());
        assert!(!Token::Placeholder("x".into()).is_concrete());
        assert_eq!(Token::Repeat.kind(), "repeat");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Token::from(&[0x01, 0xff][..])), "Literal(01ff)");
        assert_eq!(format!("{:?}", Token::Opcode(135)), "Opcode(135)");
        assert_eq!(format!("{:?}", Token::Placeholder("20-byte".into())), "Placeholder(\"20-byte\")");
    }

    #[test]
    fn spans() {
        let span = Span::new(7, 18);
        assert_eq!(span.len(), 11);
        assert!(!span.is_empty());
        assert_eq!(span.to_string(), "7..18");
        let tokens = strip_spans(vec![Spanned::new(Token::Repeat, span)]);
        assert_eq!(tokens, vec![Token::Repeat]);
    }
}
