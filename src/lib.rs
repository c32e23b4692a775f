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

//! # Rust Bscript Library
//!
//! Conversion of Bitcoin scripts between their raw binary form, their
//! textual assembly and, for standard shapes, their address.
//!
//! The pieces build on each other: an [`OpcodeTable`] names opcodes, the
//! [`raw`] and [`asm`] codecs turn bytes and text into [`Token`]s and back,
//! the [`template`] engine classifies token sequences, and [`Script`] ties
//! them together.
//!

// Coding conventions
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(missing_docs)]

pub extern crate bech32;
pub extern crate bitcoin;
#[cfg(feature = "serde")]
#[macro_use]
extern crate actual_serde as serde;

#[macro_use]
mod internal_macros;
pub mod address;
pub mod asm;
mod error;
pub mod hex;
pub mod opcode_table;
pub mod opcodes;
pub mod options;
pub mod raw;
pub mod script;
pub mod template;
pub mod token;

// export everything at the top level so it can be used as `bscript::Script` etc.
pub use crate::address::AddressParams;
pub use crate::error::Error;
pub use crate::opcode_table::OpcodeTable;
pub use crate::opcodes::OpcodeInfo;
pub use crate::options::{Encoding, LiteralStyle, OpcodeStyle, Options};
pub use crate::script::{asm_to_raw, format_asm, raw_to_asm, RawInput, RawOutput, Script};
pub use crate::template::{ScriptType, Template};
pub use crate::token::{Span, Spanned, Token};
