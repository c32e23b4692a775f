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

//! # Scripts
//!
//! A [`Script`] is an immutable token sequence obtained from raw bytes, asm
//! text or an address, and rendered back to any of the three.
//!
//! ```
//! use bscript::{Options, Script, ScriptType};
//!
//! let script = Script::from_hex("a914c664139327b98043febeab6434eba89bb196d1af87").unwrap();
//! assert_eq!(script.script_type(), Some(ScriptType::P2sh));
//! assert_eq!(
//!     script.to_asm(&Options::default()).unwrap(),
//!     "OP_HASH160 c664139327b98043febeab6434eba89bb196d1af OP_EQUAL",
//! );
//! ```
//!

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::address;
use crate::asm;
use crate::opcode_table::OpcodeTable;
use crate::options::{Encoding, Options};
use crate::raw;
use crate::template::{self, ScriptType};
use crate::token::Token;
use crate::Error;

/// A raw script as supplied by a caller: bytes, or text to be transcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput<'a> {
    /// Raw bytes
    Bytes(&'a [u8]),
    /// Hex or base64 text
    Text(&'a str),
}

impl<'a> From<&'a [u8]> for RawInput<'a> {
    fn from(bytes: &'a [u8]) -> RawInput<'a> {
        RawInput::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for RawInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> RawInput<'a> {
        RawInput::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(text: &'a str) -> RawInput<'a> {
        RawInput::Text(text)
    }
}

/// A raw script as returned to a caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawOutput {
    /// Raw bytes, for [`Encoding::None`]
    Bytes(Vec<u8>),
    /// Hex or base64 text
    Text(String),
}

impl RawOutput {
    /// The text form, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match *self {
            RawOutput::Text(ref s) => Some(s),
            RawOutput::Bytes(..) => None,
        }
    }

    /// The bytes, if these are bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match *self {
            RawOutput::Bytes(ref b) => Some(b),
            RawOutput::Text(..) => None,
        }
    }
}

impl fmt::Display for RawOutput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RawOutput::Text(ref s) => f.write_str(s),
            RawOutput::Bytes(ref b) => crate::hex::format_hex(b, f),
        }
    }
}

/// A parsed script.
///
/// Every method works against [`OpcodeTable::standard`]. Scripts over a
/// custom table are handled with the [`raw`], [`asm`] and [`template`]
/// functions, which take the table explicitly, and wrapped with
/// [`Script::new`].
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Script {
    tokens: Vec<Token>,
}

impl Script {
    /// Wraps an already decoded token sequence.
    pub fn new(tokens: Vec<Token>) -> Script {
        Script { tokens }
    }

    /// The script's tokens.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consumes the script, returning its tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Decodes a raw script, transcoding text input with `encoding` first.
    pub fn from_raw<'a, I: Into<RawInput<'a>>>(input: I, encoding: Encoding) -> Result<Script, Error> {
        match input.into() {
            RawInput::Bytes(bytes) => Script::from_bytes(bytes),
            RawInput::Text(text) => Script::from_bytes(&encoding.decode_text(text)?),
        }
    }

    /// Decodes raw script bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Script, Error> {
        Ok(Script::new(raw::decode(bytes, OpcodeTable::standard())?))
    }

    /// Decodes a hex encoded raw script.
    pub fn from_hex(hex: &str) -> Result<Script, Error> {
        Script::from_raw(hex, Encoding::Hex)
    }

    /// Parses asm text.
    pub fn from_asm(text: &str, options: &Options) -> Result<Script, Error> {
        Ok(Script::new(asm::decode(text, options, OpcodeTable::standard())?))
    }

    /// Reconstructs the script an address pays to.
    pub fn from_address(addr: &str, options: &Options) -> Result<Script, Error> {
        Ok(Script::new(address::from_address(addr, options, OpcodeTable::standard())?))
    }

    /// Renders the script as asm.
    pub fn to_asm(&self, options: &Options) -> Result<String, Error> {
        asm::format(&self.tokens, options, OpcodeTable::standard())
    }

    /// Encodes the script, as bytes or as text depending on `encoding`.
    pub fn to_raw(&self, encoding: Encoding) -> Result<RawOutput, Error> {
        let bytes = self.to_bytes()?;
        Ok(match encoding.encode_bytes(&bytes) {
            Some(text) => RawOutput::Text(text),
            None => RawOutput::Bytes(bytes),
        })
    }

    /// Encodes the script as raw bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        raw::encode(&self.tokens)
    }

    /// Encodes the script as lowercase hex.
    pub fn to_hex(&self) -> Result<String, Error> {
        Ok(crate::hex::ToHex::to_hex(&self.to_bytes()?))
    }

    /// The address of the script, or `None` if its shape has none.
    pub fn to_address(&self, options: &Options) -> Result<Option<String>, Error> {
        address::to_address(&self.tokens, options, OpcodeTable::standard())
    }

    /// The standard shape of the script, if any.
    pub fn script_type(&self) -> Option<ScriptType> {
        template::classify(&self.tokens, OpcodeTable::standard())
    }

    /// Whether [`Script::to_address`] yields an address.
    pub fn has_address(&self) -> bool {
        self.script_type().map_or(false, ScriptType::has_address)
    }

    /// The script pushed by a p2sh scriptSig: defined when this script is a
    /// single literal that itself decodes as a raw script.
    pub fn redeem_script(&self) -> Option<Script> {
        let data = match self.tokens.as_slice() {
            [Token::Literal(data)] => data,
            _ => return None,
        };
        match raw::decode(data, OpcodeTable::standard()) {
            Ok(tokens) => Some(Script::new(tokens)),
            Err(e) => {
                debug!("single literal is not a redeem script: {}", e);
                None
            }
        }
    }
}

impl From<Vec<Token>> for Script {
    fn from(tokens: Vec<Token>) -> Script {
        Script::new(tokens)
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Script(")?;
        fmt::Display::fmt(self, f)?;
        f.write_str(")")
    }
}

/// Asm with default options. Falls back to the token list if the script
/// holds an opcode with no word.
impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_asm(&Options::default()) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{:?}", self.tokens),
        }
    }
}

/// Parses asm with default options.
impl FromStr for Script {
    type Err = Error;

    fn from_str(s: &str) -> Result<Script, Error> {
        Script::from_asm(s, &Options::default())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Script {
    fn deserialize<D>(deserializer: D) -> Result<Script, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Script;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a hex encoded raw script")
            }

            fn visit_str<E>(self, v: &str) -> Result<Script, E>
            where
                E: serde::de::Error,
            {
                Script::from_hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Script {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let hex = self.to_hex().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&hex)
    }
}

/// Converts a raw script to asm. Text input is transcoded with
/// `options.encoding`.
pub fn raw_to_asm<'a, I: Into<RawInput<'a>>>(input: I, options: &Options) -> Result<String, Error> {
    Script::from_raw(input, options.encoding)?.to_asm(options)
}

/// Converts asm to a raw script encoded with `options.encoding`.
pub fn asm_to_raw(text: &str, options: &Options) -> Result<RawOutput, Error> {
    Script::from_asm(text, options)?.to_raw(options.encoding)
}

/// Re-renders asm text with the styles of `options`.
pub fn format_asm(text: &str, options: &Options) -> Result<String, Error> {
    Script::from_asm(text, options)?.to_asm(options)
}
