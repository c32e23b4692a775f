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

//! Opcodes
//!
//! Bitcoin's script uses a stack-based assembly language. This module defines
//! the opcode values and the static data behind [`crate::OpcodeTable`]: one
//! [`OpcodeInfo`] per row of the reference opcode table, with its words,
//! descriptions and disabled flag.
//!

#![allow(non_upper_case_globals)]

pub mod all {
    //! Opcode values

    /// Push an empty array onto the stack
    pub const OP_0: u8 = 0x00;
    /// Read the next byte as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA1: u8 = 0x4c;
    /// Read the next 2 bytes as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA2: u8 = 0x4d;
    /// Read the next 4 bytes as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA4: u8 = 0x4e;
    /// Push the array [0x81] onto the stack
    pub const OP_1NEGATE: u8 = 0x4f;
    /// Synonym for OP_RETURN
    pub const OP_RESERVED: u8 = 0x50;
    /// Push the array [0x01] onto the stack
    pub const OP_1: u8 = 0x51;
    /// Push the array [0x02] onto the stack
    pub const OP_2: u8 = 0x52;
    /// Push the array [0x03] onto the stack
    pub const OP_3: u8 = 0x53;
    /// Push the array [0x04] onto the stack
    pub const OP_4: u8 = 0x54;
    /// Push the array [0x05] onto the stack
    pub const OP_5: u8 = 0x55;
    /// Push the array [0x06] onto the stack
    pub const OP_6: u8 = 0x56;
    /// Push the array [0x07] onto the stack
    pub const OP_7: u8 = 0x57;
    /// Push the array [0x08] onto the stack
    pub const OP_8: u8 = 0x58;
    /// Push the array [0x09] onto the stack
    pub const OP_9: u8 = 0x59;
    /// Push the array [0x0a] onto the stack
    pub const OP_10: u8 = 0x5a;
    /// Push the array [0x0b] onto the stack
    pub const OP_11: u8 = 0x5b;
    /// Push the array [0x0c] onto the stack
    pub const OP_12: u8 = 0x5c;
    /// Push the array [0x0d] onto the stack
    pub const OP_13: u8 = 0x5d;
    /// Push the array [0x0e] onto the stack
    pub const OP_14: u8 = 0x5e;
    /// Push the array [0x0f] onto the stack
    pub const OP_15: u8 = 0x5f;
    /// Push the array [0x10] onto the stack
    pub const OP_16: u8 = 0x60;
    /// Does nothing
    pub const OP_NOP: u8 = 0x61;
    /// Synonym for OP_RETURN
    pub const OP_VER: u8 = 0x62;
    /// Pop and execute the next statements if a nonzero element was popped
    pub const OP_IF: u8 = 0x63;
    /// Pop and execute the next statements if a zero element was popped
    pub const OP_NOTIF: u8 = 0x64;
    /// Fail the script unconditionally, does not even need to be executed
    pub const OP_VERIF: u8 = 0x65;
    /// Fail the script unconditionally, does not even need to be executed
    pub const OP_VERNOTIF: u8 = 0x66;
    /// Execute statements if those after the previous OP_IF were not, and vice-versa.
    pub const OP_ELSE: u8 = 0x67;
    /// Pop and execute the next statements if a zero element was popped
    pub const OP_ENDIF: u8 = 0x68;
    /// If the top value is zero or the stack is empty, fail; otherwise, pop the stack
    pub const OP_VERIFY: u8 = 0x69;
    /// Fail the script immediately. (Must be executed.)
    pub const OP_RETURN: u8 = 0x6a;
    /// Pop one element from the main stack onto the alt stack
    pub const OP_TOALTSTACK: u8 = 0x6b;
    /// Pop one element from the alt stack onto the main stack
    pub const OP_FROMALTSTACK: u8 = 0x6c;
    /// Drops the top two stack items
    pub const OP_2DROP: u8 = 0x6d;
    /// Duplicates the top two stack items as AB -> ABAB
    pub const OP_2DUP: u8 = 0x6e;
    /// Duplicates the two three stack items as ABC -> ABCABC
    pub const OP_3DUP: u8 = 0x6f;
    /// Copies the two stack items of items two spaces back to
    /// the front, as xxAB -> ABxxAB
    pub const OP_2OVER: u8 = 0x70;
    /// Moves the two stack items four spaces back to the front,
    /// as xxxxAB -> ABxxxx
    pub const OP_2ROT: u8 = 0x71;
    /// Swaps the top two pairs, as ABCD -> CDAB
    pub const OP_2SWAP: u8 = 0x72;
    /// Duplicate the top stack element unless it is zero
    pub const OP_IFDUP: u8 = 0x73;
    /// Push the current number of stack items onto the stack
    pub const OP_DEPTH: u8 = 0x74;
    /// Drops the top stack item
    pub const OP_DROP: u8 = 0x75;
    /// Duplicates the top stack item
    pub const OP_DUP: u8 = 0x76;
    /// Drops the second-to-top stack item
    pub const OP_NIP: u8 = 0x77;
    /// Copies the second-to-top stack item, as xA -> AxA
    pub const OP_OVER: u8 = 0x78;
    /// Pop the top stack element as N. Copy the Nth stack element to the top
    pub const OP_PICK: u8 = 0x79;
    /// Pop the top stack element as N. Move the Nth stack element to the top
    pub const OP_ROLL: u8 = 0x7a;
    /// Rotate the top three stack items, as [top next1 next2] -> [next2 top next1]
    pub const OP_ROT: u8 = 0x7b;
    /// Swap the top two stack items
    pub const OP_SWAP: u8 = 0x7c;
    /// Copy the top stack item to before the second item, as [top next] -> [top next top]
    pub const OP_TUCK: u8 = 0x7d;
    /// Concatenates two strings (disabled)
    pub const OP_CAT: u8 = 0x7e;
    /// Returns a section of a string (disabled)
    pub const OP_SUBSTR: u8 = 0x7f;
    /// Keeps only characters left of a point (disabled)
    pub const OP_LEFT: u8 = 0x80;
    /// Keeps only characters right of a point (disabled)
    pub const OP_RIGHT: u8 = 0x81;
    /// Pushes the length of the top stack item onto the stack
    pub const OP_SIZE: u8 = 0x82;
    /// Flips all of the bits in the input (disabled)
    pub const OP_INVERT: u8 = 0x83;
    /// Bitwise and (disabled)
    pub const OP_AND: u8 = 0x84;
    /// Bitwise or (disabled)
    pub const OP_OR: u8 = 0x85;
    /// Bitwise exclusive or (disabled)
    pub const OP_XOR: u8 = 0x86;
    /// Pushes 1 if the inputs are exactly equal, 0 otherwise
    pub const OP_EQUAL: u8 = 0x87;
    /// Returns success if the inputs are exactly equal, failure otherwise
    pub const OP_EQUALVERIFY: u8 = 0x88;
    /// Synonym for OP_RETURN
    pub const OP_RESERVED1: u8 = 0x89;
    /// Synonym for OP_RETURN
    pub const OP_RESERVED2: u8 = 0x8a;
    /// Increment the top stack element in place
    pub const OP_1ADD: u8 = 0x8b;
    /// Decrement the top stack element in place
    pub const OP_1SUB: u8 = 0x8c;
    /// Multiply by two (disabled)
    pub const OP_2MUL: u8 = 0x8d;
    /// Divide by two (disabled)
    pub const OP_2DIV: u8 = 0x8e;
    /// Multiply the top stack item by -1 in place
    pub const OP_NEGATE: u8 = 0x8f;
    /// Absolute value the top stack item in place
    pub const OP_ABS: u8 = 0x90;
    /// Map 0 to 1 and everything else to 0, in place
    pub const OP_NOT: u8 = 0x91;
    /// Map 0 to 0 and everything else to 1, in place
    pub const OP_0NOTEQUAL: u8 = 0x92;
    /// Pop two stack items and push their sum
    pub const OP_ADD: u8 = 0x93;
    /// Pop two stack items and push the second minus the top
    pub const OP_SUB: u8 = 0x94;
    /// Multiply (disabled)
    pub const OP_MUL: u8 = 0x95;
    /// Divide (disabled)
    pub const OP_DIV: u8 = 0x96;
    /// Modulo (disabled)
    pub const OP_MOD: u8 = 0x97;
    /// Shift left (disabled)
    pub const OP_LSHIFT: u8 = 0x98;
    /// Shift right (disabled)
    pub const OP_RSHIFT: u8 = 0x99;
    /// Pop the top two stack items and push 1 if both are nonzero, else push 0
    pub const OP_BOOLAND: u8 = 0x9a;
    /// Pop the top two stack items and push 1 if either is nonzero, else push 0
    pub const OP_BOOLOR: u8 = 0x9b;
    /// Pop the top two stack items and push 1 if both are numerically equal, else push 0
    pub const OP_NUMEQUAL: u8 = 0x9c;
    /// Pop the top two stack items and return success if both are numerically equal, else return failure
    pub const OP_NUMEQUALVERIFY: u8 = 0x9d;
    /// Pop the top two stack items and push 0 if both are numerically equal, else push 1
    pub const OP_NUMNOTEQUAL: u8 = 0x9e;
    /// Pop the top two items; push 1 if the second is less than the top, 0 otherwise
    pub const OP_LESSTHAN: u8 = 0x9f;
    /// Pop the top two items; push 1 if the second is greater than the top, 0 otherwise
    pub const OP_GREATERTHAN: u8 = 0xa0;
    /// Pop the top two items; push 1 if the second is <= the top, 0 otherwise
    pub const OP_LESSTHANOREQUAL: u8 = 0xa1;
    /// Pop the top two items; push 1 if the second is >= the top, 0 otherwise
    pub const OP_GREATERTHANOREQUAL: u8 = 0xa2;
    /// Pop the top two items; push the smaller
    pub const OP_MIN: u8 = 0xa3;
    /// Pop the top two items; push the larger
    pub const OP_MAX: u8 = 0xa4;
    /// Pop the top three items; if the top is >= the second and < the third, push 1, otherwise push 0
    pub const OP_WITHIN: u8 = 0xa5;
    /// Pop the top stack item and push its RIPEMD160 hash
    pub const OP_RIPEMD160: u8 = 0xa6;
    /// Pop the top stack item and push its SHA1 hash
    pub const OP_SHA1: u8 = 0xa7;
    /// Pop the top stack item and push its SHA256 hash
    pub const OP_SHA256: u8 = 0xa8;
    /// Pop the top stack item and push its RIPEMD(SHA256) hash
    pub const OP_HASH160: u8 = 0xa9;
    /// Pop the top stack item and push its SHA256(SHA256) hash
    pub const OP_HASH256: u8 = 0xaa;
    /// Ignore this and everything preceding when deciding what to sign when signature-checking
    pub const OP_CODESEPARATOR: u8 = 0xab;
    /// <https://en.bitcoin.it/wiki/OP_CHECKSIG> pushing 1/0 for success/failure
    pub const OP_CHECKSIG: u8 = 0xac;
    /// <https://en.bitcoin.it/wiki/OP_CHECKSIG> returning success/failure
    pub const OP_CHECKSIGVERIFY: u8 = 0xad;
    /// Pop N, N pubkeys, M, M signatures, a dummy (due to bug in reference code), and verify that all M signatures are valid.
    /// Push 1 for "all valid", 0 otherwise
    pub const OP_CHECKMULTISIG: u8 = 0xae;
    /// Like the above but return success/failure
    pub const OP_CHECKMULTISIGVERIFY: u8 = 0xaf;
    /// Does nothing
    pub const OP_NOP1: u8 = 0xb0;
    /// <https://github.com/bitcoin/bips/blob/master/bip-0065.mediawiki>
    pub const OP_CHECKLOCKTIMEVERIFY: u8 = 0xb1;
    /// <https://github.com/bitcoin/bips/blob/master/bip-0112.mediawiki>
    pub const OP_CHECKSEQUENCEVERIFY: u8 = 0xb2;
    /// Does nothing
    pub const OP_NOP4: u8 = 0xb3;
    /// Does nothing
    pub const OP_NOP5: u8 = 0xb4;
    /// Does nothing
    pub const OP_NOP6: u8 = 0xb5;
    /// Does nothing
    pub const OP_NOP7: u8 = 0xb6;
    /// Does nothing
    pub const OP_NOP8: u8 = 0xb7;
    /// Does nothing
    pub const OP_NOP9: u8 = 0xb8;
    /// Does nothing
    pub const OP_NOP10: u8 = 0xb9;
    /// Pseudo-word: a public key hashed with OP_HASH160
    pub const OP_PUBKEYHASH: u8 = 0xfd;
    /// Pseudo-word: a public key compatible with OP_CHECKSIG
    pub const OP_PUBKEY: u8 = 0xfe;
    /// Invalid opcode
    pub const OP_INVALIDOPCODE: u8 = 0xff;
}

/// Empty stack is also FALSE
pub const OP_FALSE: u8 = all::OP_0;
/// Number 1 is also TRUE
pub const OP_TRUE: u8 = all::OP_1;
/// previously called OP_NOP2
pub const OP_NOP2: u8 = all::OP_CHECKLOCKTIMEVERIFY;
/// previously called OP_NOP3
pub const OP_NOP3: u8 = all::OP_CHECKSEQUENCEVERIFY;

/// Largest opcode whose byte value is itself an implicit push length.
pub const MAX_IMPLICIT_PUSH: u8 = 75;

/// Whether `code` lies in the range [1, 78] that raw decoding always
/// absorbs into a literal push.
#[inline]
pub fn is_push_opcode(code: u8) -> bool {
    code >= 1 && code <= all::OP_PUSHDATA4
}

/// One row of the opcode table.
///
/// A row may cover several opcodes and several words. When both lists
/// have more than one entry they are paired by position: `words[i]`
/// names `opcodes[i]`. A row with no words marks implicit push lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeInfo {
    /// The words naming this row's opcodes, canonical word first.
    pub words: &'static [&'static str],
    /// The opcodes this row covers.
    pub opcodes: &'static [u8],
    /// What the opcode pops.
    pub input: &'static str,
    /// What the opcode pushes.
    pub output: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Whether bitcoin-core disables the opcode.
    pub disabled: bool,
}

const fn op(
    words: &'static [&'static str],
    opcodes: &'static [u8],
    input: &'static str,
    output: &'static str,
    description: &'static str,
) -> OpcodeInfo {
    OpcodeInfo { words, opcodes, input, output, description, disabled: false }
}

const fn disabled_op(
    words: &'static [&'static str],
    opcodes: &'static [u8],
    input: &'static str,
    output: &'static str,
    description: &'static str,
) -> OpcodeInfo {
    OpcodeInfo { words, opcodes, input, output, description, disabled: true }
}

use self::all::*;

const RESERVED_DESCRIPTION: &str =
    "Transaction is invalid unless occuring in an unexecuted OP_IF branch";
const ILLEGAL_DESCRIPTION: &str =
    "Transaction is invalid even when occuring in an unexecuted OP_IF branch";

/// The Bitcoin opcode table.
pub static STANDARD_OPCODES: &[OpcodeInfo] = &[
    // constants
    op(&["OP_0", "OP_FALSE"], &[OP_0], "Nothing.", "(empty value)",
        "An empty array of bytes is pushed onto the stack. (This is not a no-op: an item is added to the stack.)"),
    op(&[], &[
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46,
        47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68,
        69, 70, 71, 72, 73, 74, 75,
    ], "(special)", "data",
        "The next opcode bytes is data to be pushed onto the stack"),
    op(&["OP_PUSHDATA1"], &[OP_PUSHDATA1], "(special)", "data",
        "The next byte contains the number of bytes to be pushed onto the stack."),
    op(&["OP_PUSHDATA2"], &[OP_PUSHDATA2], "(special)", "data",
        "The next two bytes contain the number of bytes to be pushed onto the stack in little endian order."),
    op(&["OP_PUSHDATA4"], &[OP_PUSHDATA4], "(special)", "data",
        "The next four bytes contain the number of bytes to be pushed onto the stack in little endian order."),
    op(&["OP_1NEGATE"], &[OP_1NEGATE], "Nothing.", "-1",
        "The number -1 is pushed onto the stack."),
    op(&["OP_1", "OP_TRUE"], &[OP_1], "Nothing.", "1",
        "The number 1 is pushed onto the stack."),
    op(&[
        "OP_2", "OP_3", "OP_4", "OP_5", "OP_6", "OP_7", "OP_8", "OP_9", "OP_10", "OP_11",
        "OP_12", "OP_13", "OP_14", "OP_15", "OP_16",
    ], &[
        OP_2, OP_3, OP_4, OP_5, OP_6, OP_7, OP_8, OP_9, OP_10, OP_11, OP_12, OP_13, OP_14,
        OP_15, OP_16,
    ], "Nothing.", "2-16",
        "The number in the word name (2-16) is pushed onto the stack."),

    // flow control
    op(&["OP_NOP"], &[OP_NOP], "Nothing", "Nothing", "Does nothing."),
    op(&["OP_IF"], &[OP_IF], "<expression> if [statements] [else [statements]]* endif", "",
        "If the top stack value is not False, the statements are executed. The top stack value is removed."),
    op(&["OP_NOTIF"], &[OP_NOTIF], "<expression> notif [statements] [else [statements]]* endif", "",
        "If the top stack value is False, the statements are executed. The top stack value is removed."),
    op(&["OP_ELSE"], &[OP_ELSE], "<expression> if [statements] [else [statements]]* endif", "",
        "If the preceding OP_IF or OP_NOTIF or OP_ELSE was not executed then these statements are and if the preceding OP_IF or OP_NOTIF or OP_ELSE was executed then these statements are not."),
    op(&["OP_ENDIF"], &[OP_ENDIF], "<expression> if [statements] [else [statements]]* endif", "",
        "Ends an if/else block. All blocks must end, or the transaction is invalid. An OP_ENDIF without OP_IF earlier is also invalid."),
    op(&["OP_VERIFY"], &[OP_VERIFY], "True / false", "Nothing / fail",
        "Marks transaction as invalid if top stack value is not true. The top stack value is removed."),
    op(&["OP_RETURN"], &[OP_RETURN], "Nothing", "fail",
        "Marks transaction as invalid. Since bitcoin 0.9, a standard way of attaching extra data to transactions is to add a zero-value output with a scriptPubKey consisting of OP_RETURN followed by data."),

    // stack
    op(&["OP_TOALTSTACK"], &[OP_TOALTSTACK], "x1", "(alt)x1",
        "Puts the input onto the top of the alt stack. Removes it from the main stack."),
    op(&["OP_FROMALTSTACK"], &[OP_FROMALTSTACK], "(alt)x1", "x1",
        "Puts the input onto the top of the main stack. Removes it from the alt stack."),
    op(&["OP_IFDUP"], &[OP_IFDUP], "x", "x / x x", "If the top stack value is not 0, duplicate it."),
    op(&["OP_DEPTH"], &[OP_DEPTH], "Nothing", "<Stack size>", "Puts the number of stack items onto the stack."),
    op(&["OP_DROP"], &[OP_DROP], "x", "Nothing", "Removes the top stack item."),
    op(&["OP_DUP"], &[OP_DUP], "x", "x x", "Duplicates the top stack item."),
    op(&["OP_NIP"], &[OP_NIP], "x1 x2", "x2", "Removes the second-to-top stack item."),
    op(&["OP_OVER"], &[OP_OVER], "x1 x2", "x1 x2 x1", "Copies the second-to-top stack item to the top."),
    op(&["OP_PICK"], &[OP_PICK], "xn ... x2 x1 x0 <n>", "xn ... x2 x1 x0 xn",
        "The item n back in the stack is copied to the top."),
    op(&["OP_ROLL"], &[OP_ROLL], "xn ... x2 x1 x0 <n>", "... x2 x1 x0 xn",
        "The item n back in the stack is moved to the top."),
    op(&["OP_ROT"], &[OP_ROT], "x1 x2 x3", "x2 x3 x1",
        "The 3rd item down the stack is moved to the top."),
    op(&["OP_SWAP"], &[OP_SWAP], "x1 x2", "x2 x1", "The top two items on the stack are swapped."),
    op(&["OP_TUCK"], &[OP_TUCK], "x1 x2", "x2 x1 x2",
        "The item at the top of the stack is copied and inserted before the second-to-top item."),
    op(&["OP_2DROP"], &[OP_2DROP], "x1 x2", "Nothing", "Removes the top two stack items."),
    op(&["OP_2DUP"], &[OP_2DUP], "x1 x2", "x1 x2 x1 x2", "Duplicates the top two stack items."),
    op(&["OP_3DUP"], &[OP_3DUP], "x1 x2 x3", "x1 x2 x3 x1 x2 x3", "Duplicates the top three stack items."),
    op(&["OP_2OVER"], &[OP_2OVER], "x1 x2 x3 x4", "x1 x2 x3 x4 x1 x2",
        "Copies the pair of items two spaces back in the stack to the front."),
    op(&["OP_2ROT"], &[OP_2ROT], "x1 x2 x3 x4 x5 x6", "x3 x4 x5 x6 x1 x2",
        "The fifth and sixth items back are moved to the top of the stack."),
    op(&["OP_2SWAP"], &[OP_2SWAP], "x1 x2 x3 x4", "x3 x4 x1 x2", "Swaps the top two pairs of items."),

    // splice
    disabled_op(&["OP_CAT"], &[OP_CAT], "x1 x2", "out", "Concatenates two strings. disabled."),
    disabled_op(&["OP_SUBSTR"], &[OP_SUBSTR], "in begin size", "out", "Returns a section of a string. disabled."),
    disabled_op(&["OP_LEFT"], &[OP_LEFT], "in size", "out",
        "Keeps only characters left of the specified point in a string. disabled."),
    disabled_op(&["OP_RIGHT"], &[OP_RIGHT], "in size", "out",
        "Keeps only characters right of the specified point in a string. disabled."),
    op(&["OP_SIZE"], &[OP_SIZE], "in", "in size",
        "Pushes the string length of the top element of the stack (without popping it)."),

    // bitwise logic
    disabled_op(&["OP_INVERT"], &[OP_INVERT], "in", "out", "Flips all of the bits in the input. disabled."),
    disabled_op(&["OP_AND"], &[OP_AND], "x1 x2", "out", "Boolean and between each bit in the inputs. disabled."),
    disabled_op(&["OP_OR"], &[OP_OR], "x1 x2", "out", "Boolean or between each bit in the inputs. disabled."),
    disabled_op(&["OP_XOR"], &[OP_XOR], "x1 x2", "out",
        "Boolean exclusive or between each bit in the inputs. disabled."),
    op(&["OP_EQUAL"], &[OP_EQUAL], "x1 x2", "True / false",
        "Returns 1 if the inputs are exactly equal, 0 otherwise."),
    op(&["OP_EQUALVERIFY"], &[OP_EQUALVERIFY], "x1 x2", "Nothing / fail",
        "Same as OP_EQUAL, but runs OP_VERIFY afterward."),

    // arithmetic
    op(&["OP_1ADD"], &[OP_1ADD], "in", "out", "1 is added to the input."),
    op(&["OP_1SUB"], &[OP_1SUB], "in", "out", "1 is subtracted from the input."),
    disabled_op(&["OP_2MUL"], &[OP_2MUL], "in", "out", "The input is multiplied by 2. disabled."),
    disabled_op(&["OP_2DIV"], &[OP_2DIV], "in", "out", "The input is divided by 2. disabled."),
    op(&["OP_NEGATE"], &[OP_NEGATE], "in", "out", "The sign of the input is flipped."),
    op(&["OP_ABS"], &[OP_ABS], "in", "out", "The input is made positive."),
    op(&["OP_NOT"], &[OP_NOT], "in", "out",
        "If the input is 0 or 1, it is flipped. Otherwise the output will be 0."),
    op(&["OP_0NOTEQUAL"], &[OP_0NOTEQUAL], "in", "out", "Returns 0 if the input is 0. 1 otherwise."),
    op(&["OP_ADD"], &[OP_ADD], "a b", "out", "a is added to b."),
    op(&["OP_SUB"], &[OP_SUB], "a b", "out", "b is subtracted from a."),
    disabled_op(&["OP_MUL"], &[OP_MUL], "a b", "out", "a is multiplied by b. disabled."),
    disabled_op(&["OP_DIV"], &[OP_DIV], "a b", "out", "a is divided by b. disabled."),
    disabled_op(&["OP_MOD"], &[OP_MOD], "a b", "out", "Returns the remainder after dividing a by b. disabled."),
    disabled_op(&["OP_LSHIFT"], &[OP_LSHIFT], "a b", "out", "Shifts a left b bits, preserving sign. disabled."),
    disabled_op(&["OP_RSHIFT"], &[OP_RSHIFT], "a b", "out", "Shifts a right b bits, preserving sign. disabled."),
    op(&["OP_BOOLAND"], &[OP_BOOLAND], "a b", "out", "If both a and b are not 0, the output is 1. Otherwise 0."),
    op(&["OP_BOOLOR"], &[OP_BOOLOR], "a b", "out", "If a or b is not 0, the output is 1. Otherwise 0."),
    op(&["OP_NUMEQUAL"], &[OP_NUMEQUAL], "a b", "out", "Returns 1 if the numbers are equal, 0 otherwise."),
    op(&["OP_NUMEQUALVERIFY"], &[OP_NUMEQUALVERIFY], "a b", "Nothing / fail",
        "Same as OP_NUMEQUAL, but runs OP_VERIFY afterward."),
    op(&["OP_NUMNOTEQUAL"], &[OP_NUMNOTEQUAL], "a b", "out",
        "Returns 1 if the numbers are not equal, 0 otherwise."),
    op(&["OP_LESSTHAN"], &[OP_LESSTHAN], "a b", "out", "Returns 1 if a is less than b, 0 otherwise."),
    op(&["OP_GREATERTHAN"], &[OP_GREATERTHAN], "a b", "out", "Returns 1 if a is greater than b, 0 otherwise."),
    op(&["OP_LESSTHANOREQUAL"], &[OP_LESSTHANOREQUAL], "a b", "out",
        "Returns 1 if a is less than or equal to b, 0 otherwise."),
    op(&["OP_GREATERTHANOREQUAL"], &[OP_GREATERTHANOREQUAL], "a b", "out",
        "Returns 1 if a is greater than or equal to b, 0 otherwise."),
    op(&["OP_MIN"], &[OP_MIN], "a b", "out", "Returns the smaller of a and b."),
    op(&["OP_MAX"], &[OP_MAX], "a b", "out", "Returns the larger of a and b."),
    op(&["OP_WITHIN"], &[OP_WITHIN], "x min max", "out",
        "Returns 1 if x is within the specified range (left-inclusive), 0 otherwise."),

    // crypto
    op(&["OP_RIPEMD160"], &[OP_RIPEMD160], "in", "hash", "The input is hashed using RIPEMD-160."),
    op(&["OP_SHA1"], &[OP_SHA1], "in", "hash", "The input is hashed using SHA-1."),
    op(&["OP_SHA256"], &[OP_SHA256], "in", "hash", "The input is hashed using SHA-256."),
    op(&["OP_HASH160"], &[OP_HASH160], "in", "hash",
        "The input is hashed twice: first with SHA-256 and then with RIPEMD-160."),
    op(&["OP_HASH256"], &[OP_HASH256], "in", "hash", "The input is hashed two times with SHA-256."),
    op(&["OP_CODESEPARATOR"], &[OP_CODESEPARATOR], "Nothing", "Nothing",
        "All of the signature checking words will only match signatures to the data after the most recently-executed OP_CODESEPARATOR."),
    op(&["OP_CHECKSIG"], &[OP_CHECKSIG], "sig pubkey", "True / false",
        "The entire transaction's outputs, inputs, and script (from the most recently-executed OP_CODESEPARATOR to the end) are hashed. The signature used by OP_CHECKSIG must be a valid signature for this hash and public key. If it is, 1 is returned, 0 otherwise."),
    op(&["OP_CHECKSIGVERIFY"], &[OP_CHECKSIGVERIFY], "sig pubkey", "Nothing / fail",
        "Same as OP_CHECKSIG, but OP_VERIFY is executed afterward."),
    op(&["OP_CHECKMULTISIG"], &[OP_CHECKMULTISIG],
        "x sig1 sig2 ... <number of signatures> pub1 pub2 <number of public keys>", "True / False",
        "Compares the first signature against each public key until it finds an ECDSA match. Starting with the subsequent public key, it compares the second signature against each remaining public key until it finds an ECDSA match. The process is repeated until all signatures have been checked or not enough public keys remain to produce a successful result. If all signatures are valid, 1 is returned, 0 otherwise."),
    op(&["OP_CHECKMULTISIGVERIFY"], &[OP_CHECKMULTISIGVERIFY],
        "x sig1 sig2 ... <number of signatures> pub1 pub2 ... <number of public keys>", "Nothing / fail",
        "Same as OP_CHECKMULTISIG, but OP_VERIFY is executed afterward."),

    // locktime
    op(&["OP_CHECKLOCKTIMEVERIFY", "OP_NOP2"], &[OP_CHECKLOCKTIMEVERIFY], "x", "x / fail",
        "Marks transaction as invalid if the top stack item is greater than the transaction's nLockTime field, otherwise script evaluation continues as though an OP_NOP was executed."),
    op(&["OP_CHECKSEQUENCEVERIFY", "OP_NOP3"], &[OP_CHECKSEQUENCEVERIFY], "x", "x / fail",
        "Marks transaction as invalid if the relative lock time of the input is not equal to or longer than the value of the top stack item."),

    // pseudo-words
    op(&["OP_PUBKEYHASH"], &[OP_PUBKEYHASH], "", "", "Represents a public key hashed with OP_HASH160."),
    op(&["OP_PUBKEY"], &[OP_PUBKEY], "", "", "Represents a public key compatible with OP_CHECKSIG."),
    op(&["OP_INVALIDOPCODE"], &[OP_INVALIDOPCODE], "", "", "Matches any opcode that is not yet assigned."),

    // reserved words
    op(&["OP_RESERVED"], &[OP_RESERVED], "", "", RESERVED_DESCRIPTION),
    op(&["OP_VER"], &[OP_VER], "", "", RESERVED_DESCRIPTION),
    op(&["OP_VERIF"], &[OP_VERIF], "", "", ILLEGAL_DESCRIPTION),
    op(&["OP_VERNOTIF"], &[OP_VERNOTIF], "", "", ILLEGAL_DESCRIPTION),
    op(&["OP_RESERVED1"], &[OP_RESERVED1], "", "", RESERVED_DESCRIPTION),
    op(&["OP_RESERVED2"], &[OP_RESERVED2], "", "", RESERVED_DESCRIPTION),
    op(&[
        "OP_NOP1", "OP_NOP4", "OP_NOP5", "OP_NOP6", "OP_NOP7", "OP_NOP8", "OP_NOP9", "OP_NOP10",
    ], &[
        OP_NOP1, OP_NOP4, OP_NOP5, OP_NOP6, OP_NOP7, OP_NOP8, OP_NOP9, OP_NOP10,
    ], "", "", "The word is ignored. Does not mark transaction as invalid."),
];
