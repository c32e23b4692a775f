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

//! Hex Encoding and Decoding
//!
//! Thin layer over the `bitcoin::hex` primitives, plus the character
//! classes the asm lexer needs.

use std::fmt;

use bitcoin::hex::{DisplayHex, HexToBytesError};

/// Trait for objects that can be serialized as hex strings.
pub trait ToHex {
    /// Converts to a lowercase hexadecimal representation of the object.
    fn to_hex(&self) -> String;
}

/// Trait for objects that can be deserialized from hex strings.
pub trait FromHex: Sized {
    /// Produces an object from a hex string.
    fn from_hex(s: &str) -> Result<Self, HexToBytesError>;
}

impl ToHex for [u8] {
    fn to_hex(&self) -> String {
        self.to_lower_hex_string()
    }
}

impl ToHex for Vec<u8> {
    fn to_hex(&self) -> String {
        self[..].to_hex()
    }
}

impl FromHex for Vec<u8> {
    fn from_hex(s: &str) -> Result<Self, HexToBytesError> {
        bitcoin::hex::FromHex::from_hex(s)
    }
}

/// Outputs hex into an object implementing `fmt::Write`.
///
/// This is usually more efficient than going through a `String` using [`ToHex`].
pub fn format_hex(data: &[u8], f: &mut fmt::Formatter) -> fmt::Result {
    for ch in data {
        write!(f, "{:02x}", *ch)?;
    }
    Ok(())
}

/// Whether `c` is a hex digit of either case.
#[inline]
pub fn is_hex_char(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Decodes a string already known to contain only hex digits.
///
/// Returns `None` for an odd number of digits.
pub(crate) fn decode_digits(digits: &str) -> Option<Vec<u8>> {
    if digits.len() % 2 == 1 {
        return None;
    }
    FromHex::from_hex(digits).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let expected = "0123456789abcdef";
        let expected_up = "0123456789ABCDEF";

        let parse: Vec<u8> = FromHex::from_hex(expected).expect("parse lowercase string");
        assert_eq!(parse, vec![0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
        let ser = parse.to_hex();
        assert_eq!(ser, expected);

        let parse: Vec<u8> = FromHex::from_hex(expected_up).expect("parse uppercase string");
        assert_eq!(parse, vec![0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
        let ser = parse.to_hex();
        assert_eq!(ser, expected);
    }

    #[test]
    fn hex_formatter() {
        struct HexBytes(Vec<u8>);
        impl fmt::Display for HexBytes {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                format_hex(&self.0, f)
            }
        }

        let bytes = HexBytes(vec![1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        assert_eq!(bytes.to_string(), "0102030405060708090a");
        assert_eq!(HexBytes(vec![]).to_string(), "");
    }

    #[test]
    fn digits() {
        assert_eq!(decode_digits("a9"), Some(vec![0xa9]));
        assert_eq!(decode_digits(""), Some(vec![]));
        assert_eq!(decode_digits("abc"), None);
        assert!(is_hex_char('F'));
        assert!(!is_hex_char('g'));
        assert!(Vec::<u8>::from_hex("zz").is_err());
    }
}
