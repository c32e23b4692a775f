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

//! # Raw Scripts
//!
//! Conversion between the binary script encoding and token sequences.
//!
//! Data pushes use the smallest length prefix that fits: the length byte
//! itself below 76, then `OP_PUSHDATA1`, `OP_PUSHDATA2` and `OP_PUSHDATA4`
//! with little-endian lengths. Decoding never truncates: a push that claims
//! more bytes than remain is an error.
//!

use crate::opcode_table::OpcodeTable;
use crate::opcodes::{self, all};
use crate::token::{self, Span, Spanned, Token};
use crate::Error;

/// Decodes a raw script into tokens.
pub fn decode(bytes: &[u8], table: &OpcodeTable) -> Result<Vec<Token>, Error> {
    decode_spanned(bytes, table).map(token::strip_spans)
}

/// Decodes a raw script, keeping the byte range of every token.
pub fn decode_spanned(bytes: &[u8], table: &OpcodeTable) -> Result<Vec<Spanned>, Error> {
    let mut tokens = vec![];
    let mut idx = 0;
    while idx < bytes.len() {
        let start = idx;
        let op = bytes[idx];
        idx += 1;

        let token = if opcodes::is_push_opcode(op) {
            let len = match op {
                all::OP_PUSHDATA1 => read_len(bytes, &mut idx, 1, start)?,
                all::OP_PUSHDATA2 => read_len(bytes, &mut idx, 2, start)?,
                all::OP_PUSHDATA4 => read_len(bytes, &mut idx, 4, start)?,
                n => usize::from(n),
            };
            let data = take(bytes, &mut idx, len, start)?;
            Token::Literal(data.to_vec())
        } else if table.opcode_is_valid(op) {
            Token::Opcode(op)
        } else {
            return Err(Error::InvalidOpcode { opcode: op, position: start });
        };
        tokens.push(Spanned::new(token, Span::new(start, idx)));
    }
    Ok(tokens)
}

fn take<'a>(bytes: &'a [u8], idx: &mut usize, len: usize, position: usize) -> Result<&'a [u8], Error> {
    let available = bytes.len() - *idx;
    if len > available {
        return Err(Error::TruncatedScript { position, needed: len, available });
    }
    let data = &bytes[*idx..*idx + len];
    *idx += len;
    Ok(data)
}

fn read_len(bytes: &[u8], idx: &mut usize, width: usize, position: usize) -> Result<usize, Error> {
    let raw = take(bytes, idx, width, position)?;
    let mut buf = [0u8; 4];
    buf[..width].copy_from_slice(raw);
    Ok(u32::from_le_bytes(buf) as usize)
}

/// Encodes tokens as a raw script.
///
/// Placeholders and repeat markers only exist in templates and have no
/// binary form, so they are rejected with [`Error::UnencodableToken`].
pub fn encode(tokens: &[Token]) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(encoded_len_hint(tokens));
    for tok in tokens {
        encode_token(tok, &mut out)?;
    }
    Ok(out)
}

fn encoded_len_hint(tokens: &[Token]) -> usize {
    tokens.iter().map(|t| t.as_literal().map_or(1, |d| d.len() + 5)).sum()
}

/// Appends the raw form of a single token to `out`.
pub fn encode_token(token: &Token, out: &mut Vec<u8>) -> Result<(), Error> {
    match *token {
        Token::Literal(ref data) => push_literal(data, out),
        Token::Opcode(code) => {
            if opcodes::is_push_opcode(code) {
                return Err(Error::InvalidOpcode { opcode: code, position: out.len() });
            }
            out.push(code);
            Ok(())
        }
        Token::Placeholder(..) | Token::Repeat => Err(Error::UnencodableToken(token.kind())),
    }
}

fn push_literal(data: &[u8], out: &mut Vec<u8>) -> Result<(), Error> {
    let len = data.len();
    if len <= usize::from(opcodes::MAX_IMPLICIT_PUSH) {
        out.push(len as u8);
    } else if len < 0x100 {
        out.push(all::OP_PUSHDATA1);
        out.push(len as u8);
    } else if len < 0x10000 {
        out.push(all::OP_PUSHDATA2);
        out.extend_from_slice(&(len as u16).to_le_bytes());
    } else if (len as u64) < 0x1_0000_0000 {
        out.push(all::OP_PUSHDATA4);
        out.extend_from_slice(&(len as u32).to_le_bytes());
    } else {
        return Err(Error::LiteralTooLarge(len));
    }
    out.extend_from_slice(data);
    Ok(())
}
