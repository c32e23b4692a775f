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

//! # Templates
//!
//! Token patterns describing standard script shapes. A template is written
//! in asm with placeholders enabled:
//!
//! * `<20-byte-pubkey-hash>` matches a literal of exactly 20 bytes;
//! * `<OP_1-OP_16>` matches an opcode in the inclusive range, and a single
//!   word such as `<OP_CHECKSIG>` matches just that opcode;
//! * any other `<placeholder>` matches a literal of any length;
//! * `...` lets the previous entry match zero or more times.
//!
//! Matching walks the script and the template in lockstep. Repeats are
//! greedy and never backtrack, so a script that could only match by giving
//! tokens back to a repeat does not match.
//!

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::asm;
use crate::opcode_table::OpcodeTable;
use crate::options::Options;
use crate::token::Token;
use crate::Error;

/// What a placeholder accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderSpec {
    /// A literal of exactly this many bytes
    Bytes(usize),
    /// An opcode within the inclusive range
    OpcodeRange(u8, u8),
    /// Any literal
    Any,
}

impl PlaceholderSpec {
    /// Interprets placeholder text against `table`.
    pub fn parse(spec: &str, table: &OpcodeTable) -> PlaceholderSpec {
        if let Some(n) = byte_count(spec) {
            return PlaceholderSpec::Bytes(n);
        }
        if let Ok(code) = table.opcode_for_word(spec) {
            return PlaceholderSpec::OpcodeRange(code, code);
        }
        if let Some((lo, hi)) = spec.split_once('-') {
            if let (Ok(lo), Ok(hi)) = (table.opcode_for_word(lo), table.opcode_for_word(hi)) {
                return PlaceholderSpec::OpcodeRange(lo, hi);
            }
        }
        PlaceholderSpec::Any
    }

    /// Whether `candidate` fills this placeholder.
    pub fn accepts(&self, candidate: &Token) -> bool {
        match (*self, candidate) {
            (PlaceholderSpec::Bytes(n), Token::Literal(data)) => data.len() == n,
            (PlaceholderSpec::OpcodeRange(lo, hi), Token::Opcode(code)) => lo <= *code && *code <= hi,
            (PlaceholderSpec::Any, Token::Literal(..)) => true,
            _ => false,
        }
    }
}

/// Parses the leading `<n>-byte` of a placeholder.
fn byte_count(spec: &str) -> Option<usize> {
    let digits = spec.len() - spec.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 || !spec[digits..].starts_with("-byte") {
        return None;
    }
    spec[..digits].parse().ok()
}

/// Whether `candidate` satisfies one template entry.
pub fn token_matches(candidate: &Token, entry: &Token, table: &OpcodeTable) -> bool {
    match *entry {
        Token::Opcode(code) => *candidate == Token::Opcode(code),
        Token::Literal(ref data) => candidate.as_literal() == Some(&data[..]),
        Token::Placeholder(ref spec) => PlaceholderSpec::parse(spec, table).accepts(candidate),
        Token::Repeat => false,
    }
}

/// Whether the whole of `tokens` matches `template`.
///
/// A template starting with a repeat is malformed and matches nothing.
pub fn matches(tokens: &[Token], template: &[Token], table: &OpcodeTable) -> bool {
    let mut pos = 0;
    for (i, entry) in template.iter().enumerate() {
        if *entry == Token::Repeat {
            let prev = match i.checked_sub(1) {
                Some(prev) => &template[prev],
                None => return false,
            };
            while pos < tokens.len() && token_matches(&tokens[pos], prev, table) {
                pos += 1;
            }
        } else {
            if pos >= tokens.len() || !token_matches(&tokens[pos], entry, table) {
                return false;
            }
            pos += 1;
        }
    }
    pos == tokens.len()
}

/// Fills the placeholders of `template` with literals taken from `values`
/// in order.
///
/// Only fixed templates can be instantiated: repeats and opcode-range
/// placeholders are rejected.
pub fn instantiate(
    template: &[Token],
    values: Vec<Vec<u8>>,
    table: &OpcodeTable,
) -> Result<Vec<Token>, Error> {
    let mut values = values.into_iter();
    let mut out = Vec::with_capacity(template.len());
    for entry in template {
        match *entry {
            Token::Literal(..) | Token::Opcode(..) => out.push(entry.clone()),
            Token::Repeat => return Err(Error::UnsupportedInstantiation("...".to_owned())),
            Token::Placeholder(ref spec) => {
                let parsed = PlaceholderSpec::parse(spec, table);
                if let PlaceholderSpec::OpcodeRange(..) = parsed {
                    return Err(Error::UnsupportedInstantiation(format!("<{}>", spec)));
                }
                let value = values.next().ok_or(Error::TooFewValues)?;
                if let PlaceholderSpec::Bytes(n) = parsed {
                    if value.len() != n {
                        return Err(Error::PlaceholderSizeMismatch {
                            placeholder: spec.clone(),
                            actual: value.len(),
                        });
                    }
                }
                out.push(Token::Literal(value));
            }
        }
    }
    if values.next().is_some() {
        return Err(Error::TooManyValues);
    }
    Ok(out)
}

/// An immutable, validated template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<Token>,
}

impl Template {
    /// Parses a template from asm, with placeholders enabled.
    pub fn parse(text: &str, table: &OpcodeTable) -> Result<Template, Error> {
        let opts = Options::default().with_placeholders(true);
        let tokens = asm::decode(text, &opts, table)?;
        Template::from_tokens(tokens)
    }

    /// Wraps a token sequence, checking that every repeat follows an entry
    /// it can repeat.
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Template, Error> {
        for (i, tok) in tokens.iter().enumerate() {
            if *tok != Token::Repeat {
                continue;
            }
            match i.checked_sub(1).map(|p| &tokens[p]) {
                None => return Err(Error::InvalidTemplate("a template cannot start with a repeat")),
                Some(Token::Repeat) => {
                    return Err(Error::InvalidTemplate("a repeat cannot follow another repeat"))
                }
                Some(_) => {}
            }
        }
        Ok(Template { tokens })
    }

    /// The template's entries.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether `tokens` has this template's shape.
    pub fn matches(&self, tokens: &[Token], table: &OpcodeTable) -> bool {
        matches(tokens, &self.tokens, table)
    }

    /// See [`instantiate`].
    pub fn instantiate(&self, values: Vec<Vec<u8>>, table: &OpcodeTable) -> Result<Vec<Token>, Error> {
        instantiate(&self.tokens, values, table)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = asm::format(&self.tokens, &Options::default(), OpcodeTable::standard())
            .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// The recognized standard script shapes, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScriptType {
    /// Pay to public key
    P2pk,
    /// Pay to public key hash
    P2pkh,
    /// Pay to script hash
    P2sh,
    /// Pay to witness public key hash
    P2wpkh,
    /// Pay to witness script hash
    P2wsh,
    /// Bare m-of-n multisig
    Multisig,
}

impl ScriptType {
    /// Every type, in the order classification tries them.
    pub const ALL: [ScriptType; 6] = [
        ScriptType::P2pk,
        ScriptType::P2pkh,
        ScriptType::P2sh,
        ScriptType::P2wpkh,
        ScriptType::P2wsh,
        ScriptType::Multisig,
    ];

    fn source(self) -> &'static str {
        match self {
            ScriptType::P2pk => "<65-byte-pubkey> OP_CHECKSIG",
            ScriptType::P2pkh => {
                "OP_DUP OP_HASH160 <20-byte-pubkey-hash> OP_EQUALVERIFY OP_CHECKSIG"
            }
            ScriptType::P2sh => "OP_HASH160 <20-byte-script-hash> OP_EQUAL",
            ScriptType::P2wpkh => "0 <20-byte-pubkey-hash>",
            ScriptType::P2wsh => "0 <32-byte-hash>",
            ScriptType::Multisig => "<OP_1-OP_16> <pubkey> ... <OP_1-OP_16> OP_CHECKMULTISIG",
        }
    }

    /// The template describing this shape, parsed once against the
    /// standard table.
    pub fn template(self) -> &'static Template {
        static TEMPLATES: OnceLock<Vec<Template>> = OnceLock::new();
        let all = TEMPLATES.get_or_init(|| {
            ScriptType::ALL
                .iter()
                .map(|t| {
                    Template::parse(t.source(), OpcodeTable::standard())
                        .expect("standard templates are valid")
                })
                .collect()
        });
        &all[self as usize]
    }

    /// Whether scripts of this shape have an address.
    pub fn has_address(self) -> bool {
        match self {
            ScriptType::P2pkh | ScriptType::P2sh | ScriptType::P2wpkh | ScriptType::P2wsh => true,
            ScriptType::P2pk | ScriptType::Multisig => false,
        }
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            ScriptType::P2pk => "p2pk",
            ScriptType::P2pkh => "p2pkh",
            ScriptType::P2sh => "p2sh",
            ScriptType::P2wpkh => "p2wpkh",
            ScriptType::P2wsh => "p2wsh",
            ScriptType::Multisig => "multisig",
        })
    }
}

impl FromStr for ScriptType {
    type Err = Error;

    fn from_str(s: &str) -> Result<ScriptType, Error> {
        ScriptType::ALL
            .iter()
            .copied()
            .find(|t| t.to_string() == s)
            .ok_or(Error::MalformedInput("unknown script type"))
    }
}
serde_string_impl!(ScriptType, "a script type name");

/// Returns the first standard shape `tokens` matches.
pub fn classify(tokens: &[Token], table: &OpcodeTable) -> Option<ScriptType> {
    ScriptType::ALL.iter().copied().find(|t| t.template().matches(tokens, table))
}
