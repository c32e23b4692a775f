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

//! Contains the error type shared by every stage of the codec.
//!
//! Positions are character offsets for asm text and byte offsets for raw
//! scripts.

use std::{error, fmt};

use bitcoin::base58;
use bitcoin::base64;
use bitcoin::hex::HexToBytesError;

/// Script conversion error
#[derive(Debug)]
pub enum Error {
    /// The argument had the wrong shape for the requested conversion
    MalformedInput(&'static str),
    /// Unsupported transcoding name
    InvalidEncoding(String),
    /// Unsupported literal style name
    InvalidLiteralStyle(String),
    /// Unsupported opcode style name
    InvalidOpcodeStyle(String),

    /// A push claimed more bytes than remain in the raw script
    TruncatedScript {
        /// Offset of the push opcode
        position: usize,
        /// Number of bytes the push required
        needed: usize,
        /// Number of bytes left in the buffer
        available: usize,
    },
    /// An opcode with no table entry, or one that cannot stand alone
    InvalidOpcode {
        /// The opcode value
        opcode: u8,
        /// Where it was found
        position: usize,
    },
    /// A literal too long for any push length prefix
    LiteralTooLarge(usize),
    /// A placeholder or repeat marker reached the raw encoder
    UnencodableToken(&'static str),

    /// A `[` literal was never closed
    UnterminatedLiteral(usize),
    /// A `<` placeholder was never closed
    UnterminatedPlaceholder(usize),
    /// A character that cannot start or continue a token
    UnexpectedCharacter(usize),
    /// A hex literal with an odd number of digits
    InvalidHexLiteral(usize),
    /// A term that is neither an override nor a known word
    UnknownTerm {
        /// The normalized term
        term: String,
        /// Where the term started
        position: usize,
    },
    /// The size inside `PUSHDATA(..)` is missing or not a decimal number
    InvalidPushdataSize(usize),
    /// `PUSHDATA(n)` was not followed by a literal
    PushdataMissingLiteral(usize),
    /// `PUSHDATA(n)` was followed by a literal of a different size
    PushdataSizeMismatch {
        /// Where the literal started
        position: usize,
        /// The declared size
        expected: usize,
        /// The literal's actual size
        actual: usize,
    },

    /// The address matched neither the bech32 nor the base58 form
    UnrecognizedAddress(String),
    /// The configured bech32 human-readable part is not valid
    InvalidBech32Prefix(String),

    /// Template instantiation ran out of values
    TooFewValues,
    /// Template instantiation was given more values than placeholders
    TooManyValues,
    /// The template contains an entry instantiation cannot materialize
    UnsupportedInstantiation(String),
    /// A value does not fit a sized placeholder
    PlaceholderSizeMismatch {
        /// The placeholder text
        placeholder: String,
        /// The size of the value supplied
        actual: usize,
    },
    /// The template is not well formed
    InvalidTemplate(&'static str),

    /// A word with no opcode table entry
    UnknownWord(String),
    /// A number with no opcode table entry
    InvalidOpcodeNumber(i64),

    /// Base58 checksum decoding error
    Base58(base58::Error),
    /// Bech32 decoding error
    Bech32(bech32::DecodeError),
    /// Hex transcoding error
    Hex(HexToBytesError),
    /// Base64 transcoding error
    Base64(base64::DecodeError),
    /// Options JSON was invalid
    #[cfg(feature = "json-options")]
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::MalformedInput(s) => write!(f, "malformed input: {}", s),
            Error::InvalidEncoding(ref s) => {
                write!(f, "encoding must be one of none, \"hex\" or \"base64\", not {:?}", s)
            }
            Error::InvalidLiteralStyle(ref s) => write!(
                f,
                "literal style must be one of \"normal\", \"brackets\", \"prefixed\" or \"verbose\", not {:?}",
                s
            ),
            Error::InvalidOpcodeStyle(ref s) => {
                write!(f, "opcode style must be one of \"normal\" or \"short\", not {:?}", s)
            }
            Error::TruncatedScript { position, needed, available } => write!(
                f,
                "push at index {} needs {} bytes but only {} remain",
                position, needed, available
            ),
            Error::InvalidOpcode { opcode, position } => {
                write!(f, "opcode {} at index {} is not valid", opcode, position)
            }
            Error::LiteralTooLarge(len) => write!(f, "literal of {} bytes is too large", len),
            Error::UnencodableToken(kind) => write!(f, "a {} token has no raw encoding", kind),
            Error::UnterminatedLiteral(pos) => {
                write!(f, "unterminated literal starting at position {}", pos)
            }
            Error::UnterminatedPlaceholder(pos) => {
                write!(f, "unterminated placeholder starting at position {}", pos)
            }
            Error::UnexpectedCharacter(pos) => write!(f, "unexpected character at position {}", pos),
            Error::InvalidHexLiteral(pos) => {
                write!(f, "odd number of hex digits in literal starting at position {}", pos)
            }
            Error::UnknownTerm { ref term, position } => {
                write!(f, "unknown term {} found at position {}", term, position)
            }
            Error::InvalidPushdataSize(pos) => {
                write!(f, "invalid PUSHDATA size starting at position {}", pos)
            }
            Error::PushdataMissingLiteral(pos) => {
                write!(f, "PUSHDATA at {} requires a literal to follow it", pos)
            }
            Error::PushdataSizeMismatch { position, expected, actual } => write!(
                f,
                "PUSHDATA value at {} has {} bytes, expected {}",
                position, actual, expected
            ),
            Error::UnrecognizedAddress(ref a) => write!(f, "could not convert {} to a script", a),
            Error::InvalidBech32Prefix(ref p) => write!(f, "invalid bech32 prefix {:?}", p),
            Error::TooFewValues => f.write_str("too few values to instantiate the template"),
            Error::TooManyValues => f.write_str("too many values to instantiate the template"),
            Error::UnsupportedInstantiation(ref e) => {
                write!(f, "template entry {} cannot be instantiated", e)
            }
            Error::PlaceholderSizeMismatch { ref placeholder, actual } => {
                write!(f, "a {}-byte value does not fit <{}>", actual, placeholder)
            }
            Error::InvalidTemplate(s) => write!(f, "invalid template: {}", s),
            Error::UnknownWord(ref w) => write!(f, "{} is not a valid term", w),
            Error::InvalidOpcodeNumber(n) => write!(f, "{} is not a valid opcode", n),
            Error::Base58(ref e) => write!(f, "base58 error: {}", e),
            Error::Bech32(ref e) => write!(f, "bech32 error: {}", e),
            Error::Hex(ref e) => write!(f, "hex error: {}", e),
            Error::Base64(ref e) => write!(f, "base64 error: {}", e),
            #[cfg(feature = "json-options")]
            Error::Json(ref e) => write!(f, "invalid JSON options: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Base58(ref e) => Some(e),
            Error::Bech32(ref e) => Some(e),
            Error::Hex(ref e) => Some(e),
            Error::Base64(ref e) => Some(e),
            #[cfg(feature = "json-options")]
            Error::Json(ref e) => Some(e),
            _ => None,
        }
    }
}

#[doc(hidden)]
impl From<base58::Error> for Error {
    fn from(e: base58::Error) -> Error {
        Error::Base58(e)
    }
}

#[doc(hidden)]
impl From<bech32::DecodeError> for Error {
    fn from(e: bech32::DecodeError) -> Error {
        Error::Bech32(e)
    }
}

#[doc(hidden)]
impl From<HexToBytesError> for Error {
    fn from(e: HexToBytesError) -> Error {
        Error::Hex(e)
    }
}

#[doc(hidden)]
impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Error {
        Error::Base64(e)
    }
}

#[cfg(feature = "json-options")]
#[doc(hidden)]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json(e)
    }
}
