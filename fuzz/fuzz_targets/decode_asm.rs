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

use bscript::{asm, LiteralStyle, OpcodeTable, Options};

fn do_test(data: &[u8]) {
    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(_) => return,
    };
    let table = OpcodeTable::standard();
    let opts = Options::default().with_literal_style(LiteralStyle::Brackets);
    if let Ok(tokens) = asm::decode(text, &opts, table) {
        let formatted = asm::format(&tokens, &opts, table).expect("decoded tokens format");
        assert_eq!(asm::decode(&formatted, &opts, table).expect("formatted text parses"), tokens);
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

#[cfg(test)]
mod tests {
    #[test]
    fn odd_inputs() {
        super::do_test(b"PUSHDATA(1)[ab] 0x 0notequal");
        super::do_test(b"[");
        super::do_test(&[0xff, 0xfe]);
    }
}
