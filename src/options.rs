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

//! # Options
//!
//! Configuration shared by the asm codec, the raw transcoding layer and
//! address conversion. Every field has a default; enumerated fields parse
//! from the names used on the command line and in JSON.
//!

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use bitcoin::base64::prelude::{Engine as _, BASE64_STANDARD};

use crate::address::AddressParams;
use crate::hex::{FromHex, ToHex};
use crate::Error;

/// How a raw script is carried when it is text rather than bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Encoding {
    /// Raw bytes, no transcoding
    None,
    /// Lowercase hexadecimal
    Hex,
    /// Standard base64 with padding
    Base64,
}

impl Default for Encoding {
    fn default() -> Encoding {
        Encoding::Hex
    }
}

impl Encoding {
    /// Decodes `text` to raw script bytes.
    pub fn decode_text(self, text: &str) -> Result<Vec<u8>, Error> {
        match self {
            Encoding::None => Err(Error::MalformedInput("text input requires a hex or base64 encoding")),
            Encoding::Hex => Ok(Vec::<u8>::from_hex(text)?),
            Encoding::Base64 => Ok(BASE64_STANDARD.decode(text)?),
        }
    }

    /// Encodes raw script bytes as text, or `None` when no transcoding
    /// is configured.
    pub fn encode_bytes(self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::None => None,
            Encoding::Hex => Some(bytes.to_hex()),
            Encoding::Base64 => Some(BASE64_STANDARD.encode(bytes)),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Encoding::None => "none",
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
        })
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Encoding, Error> {
        match s {
            "none" | "null" => Ok(Encoding::None),
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            _ => Err(Error::InvalidEncoding(s.to_owned())),
        }
    }
}

// `null` in JSON means no transcoding, so this cannot use the plain string impl.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Encoding {
    fn deserialize<D>(deserializer: D) -> Result<Encoding, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Encoding;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("null, \"hex\" or \"base64\"")
            }

            fn visit_none<E: serde::de::Error>(self) -> Result<Encoding, E> {
                Ok(Encoding::None)
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Encoding, E> {
                Ok(Encoding::None)
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Encoding, E> {
                Encoding::from_str(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Encoding {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Encoding::None => serializer.serialize_none(),
            _ => serializer.collect_str(self),
        }
    }
}

/// How literals are rendered as asm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LiteralStyle {
    /// `abcdef`, or `0` when empty
    Normal,
    /// `[abcdef]`
    Brackets,
    /// `0xabcdef`, or `0` when empty
    Prefixed,
    /// `PUSHDATA(3)[abcdef]`
    Verbose,
}

impl Default for LiteralStyle {
    fn default() -> LiteralStyle {
        LiteralStyle::Normal
    }
}

impl fmt::Display for LiteralStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            LiteralStyle::Normal => "normal",
            LiteralStyle::Brackets => "brackets",
            LiteralStyle::Prefixed => "prefixed",
            LiteralStyle::Verbose => "verbose",
        })
    }
}

impl FromStr for LiteralStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<LiteralStyle, Error> {
        match s {
            "normal" => Ok(LiteralStyle::Normal),
            "brackets" => Ok(LiteralStyle::Brackets),
            "prefixed" => Ok(LiteralStyle::Prefixed),
            "verbose" => Ok(LiteralStyle::Verbose),
            _ => Err(Error::InvalidLiteralStyle(s.to_owned())),
        }
    }
}
serde_string_impl!(LiteralStyle, "a literal style");

/// How opcodes are rendered as asm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OpcodeStyle {
    /// `OP_HASH160`
    Normal,
    /// `HASH160`
    Short,
}

impl Default for OpcodeStyle {
    fn default() -> OpcodeStyle {
        OpcodeStyle::Normal
    }
}

impl fmt::Display for OpcodeStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            OpcodeStyle::Normal => "normal",
            OpcodeStyle::Short => "short",
        })
    }
}

impl FromStr for OpcodeStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<OpcodeStyle, Error> {
        match s {
            "normal" => Ok(OpcodeStyle::Normal),
            "short" => Ok(OpcodeStyle::Short),
            _ => Err(Error::InvalidOpcodeStyle(s.to_owned())),
        }
    }
}
serde_string_impl!(OpcodeStyle, "an opcode style");

/// Uppercases a term and prefixes it with `OP_` unless already present.
pub fn normalize_term(term: &str) -> String {
    let upper = term.to_ascii_uppercase();
    if upper.starts_with("OP_") {
        upper
    } else {
        format!("OP_{}", upper)
    }
}

/// Conversion options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(crate = "actual_serde"))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Options {
    /// Transcoding of raw scripts supplied or requested as text
    pub encoding: Encoding,
    /// Rendering of literals in asm
    pub literal_style: LiteralStyle,
    /// Rendering of opcodes in asm
    pub opcode_style: OpcodeStyle,
    /// Extra or overriding words for the asm lexer, keyed by normalized
    /// word (see [`normalize_term`])
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_terms"))]
    pub terms: HashMap<String, u8>,
    /// Overriding words for the asm formatter, keyed by opcode
    pub opcodes: HashMap<u8, String>,
    /// Base58 version byte of pay-to-pubkey-hash addresses
    pub pub_key_hash: u8,
    /// Base58 version byte of pay-to-script-hash addresses
    pub script_hash: u8,
    /// Human-readable part of bech32 addresses
    pub bech32: String,
    /// Whether the asm lexer accepts `<placeholder>` and `...`
    #[cfg_attr(feature = "serde", serde(alias = "allowPlaceHolders"))]
    pub allow_placeholders: bool,
}

impl Default for Options {
    fn default() -> Options {
        let params = &AddressParams::BITCOIN;
        Options {
            encoding: Encoding::default(),
            literal_style: LiteralStyle::default(),
            opcode_style: OpcodeStyle::default(),
            terms: HashMap::new(),
            opcodes: HashMap::new(),
            pub_key_hash: params.pub_key_hash,
            script_hash: params.script_hash,
            bech32: params.bech_hrp.to_owned(),
            allow_placeholders: false,
        }
    }
}

impl From<Encoding> for Options {
    fn from(encoding: Encoding) -> Options {
        Options { encoding, ..Default::default() }
    }
}

impl<'a> From<&'a AddressParams> for Options {
    fn from(params: &'a AddressParams) -> Options {
        Options::default().with_address_params(params)
    }
}

impl Options {
    /// Sets the raw transcoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Options {
        self.encoding = encoding;
        self
    }

    /// Sets the literal style.
    pub fn with_literal_style(mut self, style: LiteralStyle) -> Options {
        self.literal_style = style;
        self
    }

    /// Sets the opcode style.
    pub fn with_opcode_style(mut self, style: OpcodeStyle) -> Options {
        self.opcode_style = style;
        self
    }

    /// Adds a lexer override; `word` is normalized first.
    pub fn with_term(mut self, word: &str, opcode: u8) -> Options {
        self.terms.insert(normalize_term(word), opcode);
        self
    }

    /// Adds a formatter override.
    pub fn with_opcode_word(mut self, opcode: u8, word: &str) -> Options {
        self.opcodes.insert(opcode, word.to_owned());
        self
    }

    /// Uses the version bytes and bech32 prefix of `params`.
    pub fn with_address_params(mut self, params: &AddressParams) -> Options {
        self.pub_key_hash = params.pub_key_hash;
        self.script_hash = params.script_hash;
        self.bech32 = params.bech_hrp.to_owned();
        self
    }

    /// Allows or forbids placeholder syntax in asm.
    pub fn with_placeholders(mut self, allow: bool) -> Options {
        self.allow_placeholders = allow;
        self
    }

    /// Parses options from a JSON object using the camelCase field names,
    /// e.g. `{"literalStyle": "brackets", "encoding": null}`.
    #[cfg(feature = "json-options")]
    pub fn from_json(json: &str) -> Result<Options, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(feature = "serde")]
fn deserialize_terms<'de, D>(deserializer: D) -> Result<HashMap<String, u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: HashMap<String, u8> = serde::Deserialize::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(k, v)| (normalize_term(&k), v)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = Options::default();
        assert_eq!(opts.encoding, Encoding::Hex);
        assert_eq!(opts.literal_style, LiteralStyle::Normal);
        assert_eq!(opts.opcode_style, OpcodeStyle::Normal);
        assert!(opts.terms.is_empty());
        assert!(opts.opcodes.is_empty());
        assert_eq!(opts.pub_key_hash, 0x00);
        assert_eq!(opts.script_hash, 0x05);
        assert_eq!(opts.bech32, "bc");
        assert!(!opts.allow_placeholders);
    }

    #[test]
    fn enum_names() {
        assert_eq!("hex".parse::<Encoding>().unwrap(), Encoding::Hex);
        assert_eq!("base64".parse::<Encoding>().unwrap(), Encoding::Base64);
        assert_eq!("none".parse::<Encoding>().unwrap(), Encoding::None);
        assert!(matches!("utf8".parse::<Encoding>(), Err(Error::InvalidEncoding(_))));

        for style in &["normal", "brackets", "prefixed", "verbose"] {
            assert_eq!(style.parse::<LiteralStyle>().unwrap().to_string(), *style);
        }
        assert!(matches!("fancy".parse::<LiteralStyle>(), Err(Error::InvalidLiteralStyle(_))));

        assert_eq!("short".parse::<OpcodeStyle>().unwrap(), OpcodeStyle::Short);
        assert!(matches!("long".parse::<OpcodeStyle>(), Err(Error::InvalidOpcodeStyle(_))));
    }

    #[test]
    fn transcoding() {
        let bytes = [0xa9, 0x14, 0x00, 0xff];
        assert_eq!(Encoding::Hex.encode_bytes(&bytes).unwrap(), "a91400ff");
        assert_eq!(Encoding::Base64.encode_bytes(&bytes).unwrap(), "qRQA/w==");
        assert_eq!(Encoding::None.encode_bytes(&bytes), None);
        assert_eq!(Encoding::Hex.decode_text("A91400FF").unwrap(), bytes);
        assert_eq!(Encoding::Base64.decode_text("qRQA/w==").unwrap(), bytes);
        assert!(matches!(Encoding::Hex.decode_text("a9z"), Err(Error::Hex(_))));
        assert!(matches!(Encoding::Base64.decode_text("***"), Err(Error::Base64(_))));
        assert!(matches!(Encoding::None.decode_text("a9"), Err(Error::MalformedInput(_))));
    }

    #[test]
    fn builders() {
        let opts = Options::from(Encoding::Base64)
            .with_term("foo", 0xb0)
            .with_opcode_word(0xb0, "FOO")
            .with_address_params(&AddressParams::TESTNET)
            .with_literal_style(LiteralStyle::Verbose)
            .with_opcode_style(OpcodeStyle::Short)
            .with_placeholders(true);
        assert_eq!(opts.encoding, Encoding::Base64);
        assert_eq!(opts.terms.get("OP_FOO"), Some(&0xb0));
        assert_eq!(opts.opcodes.get(&0xb0).map(String::as_str), Some("FOO"));
        assert_eq!(opts.pub_key_hash, 0x6f);
        assert_eq!(opts.script_hash, 0xc4);
        assert_eq!(opts.bech32, "tb");
        assert!(opts.allow_placeholders);

        let regtest = Options::from(&AddressParams::REGTEST);
        assert_eq!(regtest.bech32, "bcrt");
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_term("dup"), "OP_DUP");
        assert_eq!(normalize_term("op_dup"), "OP_DUP");
        assert_eq!(normalize_term("OP_DUP"), "OP_DUP");
    }

    #[cfg(feature = "json-options")]
    #[test]
    fn json() {
        let opts = Options::from_json(
            r#"{
                "encoding": null,
                "literalStyle": "brackets",
                "opcodeStyle": "short",
                "terms": {"foo": 176},
                "opcodes": {"176": "FOO"},
                "pubKeyHash": 111,
                "bech32": "tb",
                "allowPlaceHolders": true
            }"#,
        )
        .unwrap();
        assert_eq!(opts.encoding, Encoding::None);
        assert_eq!(opts.literal_style, LiteralStyle::Brackets);
        assert_eq!(opts.opcode_style, OpcodeStyle::Short);
        assert_eq!(opts.terms.get("OP_FOO"), Some(&176));
        assert_eq!(opts.opcodes.get(&176).map(String::as_str), Some("FOO"));
        assert_eq!(opts.pub_key_hash, 111);
        assert_eq!(opts.script_hash, 0x05);
        assert_eq!(opts.bech32, "tb");
        assert!(opts.allow_placeholders);

        assert_eq!(Options::from_json("{}").unwrap(), Options::default());
        assert!(matches!(Options::from_json(r#"{"encoding": "utf8"}"#), Err(Error::Json(_))));
        assert!(matches!(Options::from_json(r#"{"literalStyle": 3}"#), Err(Error::Json(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_tokens() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(&LiteralStyle::Verbose, &[Token::Str("verbose")]);
        assert_tokens(&OpcodeStyle::Short, &[Token::Str("short")]);
        assert_tokens(&Encoding::Base64, &[Token::Str("base64")]);
        assert_tokens(&Encoding::None, &[Token::None]);
    }
}
