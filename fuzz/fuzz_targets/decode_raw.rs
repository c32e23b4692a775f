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

extern crate bscript;

use bscript::opcodes::all;
use bscript::{raw, OpcodeTable, Token};

fn do_test(data: &[u8]) {
    let table = OpcodeTable::standard();
    match raw::decode(data, table) {
        Err(_) => {},
        Ok(tokens) => {
            let reser = raw::encode(&tokens).expect("decoded tokens encode");
            // an empty push re-encodes as OP_0
            let expected: Vec<Token> = tokens
                .iter()
                .map(|t| match t.as_literal() {
                    Some(data) if data.is_empty() => Token::Opcode(all::OP_0),
                    _ => t.clone(),
                })
                .collect();
            assert_eq!(raw::decode(&reser, table).expect("encoded tokens decode"), expected);
            if !data.iter().any(|b| matches!(*b, 0x4c..=0x4e)) {
                assert_eq!(data, &reser[..]);
            }
        },
    }
}

#[cfg(feature = "afl")]
extern crate afl;
#[cfg(feature = "afl")]
fn main() {
    afl::read_stdio_bytes(|data| {
        do_test(&data);
    });
}

#[cfg(feature = "honggfuzz")]
#[macro_use] extern crate honggfuzz;
#[cfg(feature = "honggfuzz")]
fn main() {
    loop {
        fuzz!(|data| {
            do_test(data);
        });
    }
}
