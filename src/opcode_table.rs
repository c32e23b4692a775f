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

//! # Opcode Table
//!
//! Bidirectional lookup between opcode numbers and words. A table is built
//! once from a slice of [`OpcodeInfo`] rows and is read-only afterwards, so
//! a single instance can be shared by reference across threads.
//!

use std::collections::HashMap;
use std::convert::TryFrom;
use std::sync::OnceLock;

use crate::opcodes::{OpcodeInfo, MAX_IMPLICIT_PUSH, STANDARD_OPCODES};
use crate::Error;

/// Lookup structure over a set of opcode rows.
#[derive(Debug, Clone)]
pub struct OpcodeTable {
    by_opcode: Vec<Option<&'static OpcodeInfo>>,
    by_word: HashMap<&'static str, &'static OpcodeInfo>,
}

impl OpcodeTable {
    /// Builds a table from `rows`. Later rows win when an opcode or a word
    /// is listed twice.
    pub fn new(rows: &'static [OpcodeInfo]) -> OpcodeTable {
        let mut by_opcode = vec![None; 256];
        let mut by_word = HashMap::new();
        for info in rows {
            for code in info.opcodes {
                by_opcode[usize::from(*code)] = Some(info);
            }
            for word in info.words {
                by_word.insert(*word, info);
            }
        }
        OpcodeTable { by_opcode, by_word }
    }

    /// The shared Bitcoin opcode table.
    pub fn standard() -> &'static OpcodeTable {
        static STANDARD: OnceLock<OpcodeTable> = OnceLock::new();
        STANDARD.get_or_init(|| OpcodeTable::new(STANDARD_OPCODES))
    }

    /// The row describing `code`, if any.
    pub fn info_for_opcode(&self, code: u8) -> Option<&'static OpcodeInfo> {
        self.by_opcode[usize::from(code)]
    }

    /// The row describing `word`, if any. Words are case sensitive.
    pub fn info_for_word(&self, word: &str) -> Option<&'static OpcodeInfo> {
        self.by_word.get(word).copied()
    }

    fn checked_info(&self, code: u8) -> Result<&'static OpcodeInfo, Error> {
        self.info_for_opcode(code).ok_or(Error::InvalidOpcodeNumber(i64::from(code)))
    }

    /// Whether `code` has a table entry.
    pub fn opcode_is_valid(&self, code: u8) -> bool {
        self.info_for_opcode(code).is_some()
    }

    /// Whether `word` has a table entry.
    pub fn word_is_valid(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    /// Returns the opcode named by `word`.
    ///
    /// When a row lists several opcodes the word selects the opcode at its
    /// own position in the row's word list.
    pub fn opcode_for_word(&self, word: &str) -> Result<u8, Error> {
        let info = self.info_for_word(word).ok_or_else(|| Error::UnknownWord(word.to_owned()))?;
        if info.opcodes.len() == 1 {
            return Ok(info.opcodes[0]);
        }
        info.words
            .iter()
            .position(|w| *w == word)
            .and_then(|idx| info.opcodes.get(idx).copied())
            .ok_or_else(|| Error::UnknownWord(word.to_owned()))
    }

    /// Returns the canonical word for `code`.
    ///
    /// Implicit push lengths are valid but have no word, so they yield
    /// `Ok(None)`. Opcodes with no entry at all are an error.
    pub fn word_for_opcode(&self, code: u8) -> Result<Option<&'static str>, Error> {
        let info = self.checked_info(code)?;
        if info.words.is_empty() {
            return Ok(None);
        }
        if info.words.len() == 1 {
            return Ok(Some(info.words[0]));
        }
        let idx = info.opcodes.iter().position(|c| *c == code).unwrap_or(0);
        Ok(Some(info.words.get(idx).copied().unwrap_or(info.words[0])))
    }

    /// Like [`OpcodeTable::word_for_opcode`], but renders wordless implicit
    /// pushes as `PUSH_DATA(n)`.
    pub fn string_for_opcode(&self, code: u8) -> Result<String, Error> {
        match self.word_for_opcode(code)? {
            Some(word) => Ok(word.to_owned()),
            None => Ok(format!("PUSH_DATA({})", code)),
        }
    }

    /// Human-readable description of `code`.
    pub fn description_for_opcode(&self, code: u8) -> Result<String, Error> {
        let info = self.checked_info(code)?;
        match code {
            1 => Ok("The next byte is data to be pushed onto the stack".to_owned()),
            2..=MAX_IMPLICIT_PUSH => {
                Ok(format!("The next {} bytes is data to be pushed onto the stack", code))
            }
            _ => Ok(info.description.to_owned()),
        }
    }

    /// Human-readable description of `word`.
    pub fn description_for_word(&self, word: &str) -> Result<String, Error> {
        self.description_for_opcode(self.opcode_for_word(word)?)
    }

    /// What `code` pops off the stack.
    pub fn input_description_for_opcode(&self, code: u8) -> Result<&'static str, Error> {
        Ok(self.checked_info(code)?.input)
    }

    /// What `word` pops off the stack.
    pub fn input_description_for_word(&self, word: &str) -> Result<&'static str, Error> {
        self.input_description_for_opcode(self.opcode_for_word(word)?)
    }

    /// What `code` pushes onto the stack.
    pub fn output_description_for_opcode(&self, code: u8) -> Result<&'static str, Error> {
        Ok(self.checked_info(code)?.output)
    }

    /// What `word` pushes onto the stack.
    pub fn output_description_for_word(&self, word: &str) -> Result<&'static str, Error> {
        self.output_description_for_opcode(self.opcode_for_word(word)?)
    }

    /// Whether bitcoin-core disables `code`.
    pub fn opcode_is_disabled(&self, code: u8) -> Result<bool, Error> {
        Ok(self.checked_info(code)?.disabled)
    }

    /// Whether bitcoin-core disables the opcode named by `word`.
    pub fn word_is_disabled(&self, word: &str) -> Result<bool, Error> {
        self.opcode_is_disabled(self.opcode_for_word(word)?)
    }

    /// Resolves user input to an opcode: decimal strings are taken as opcode
    /// numbers, anything else as a word.
    pub fn resolve(&self, input: &str) -> Result<u8, Error> {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => match u8::try_from(n) {
                Ok(code) if self.opcode_is_valid(code) => Ok(code),
                _ => Err(Error::InvalidOpcodeNumber(n)),
            },
            Err(_) => self.opcode_for_word(trimmed),
        }
    }
}

impl Default for OpcodeTable {
    fn default() -> OpcodeTable {
        OpcodeTable::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes::all;

    #[test]
    fn opcode_for_word() {
        let table = OpcodeTable::standard();
        assert_eq!(table.opcode_for_word("OP_1NEGATE").unwrap(), 79);
        assert_eq!(table.opcode_for_word("OP_15").unwrap(), 95);
        assert_eq!(table.opcode_for_word("OP_FALSE").unwrap(), 0);
        assert_eq!(table.opcode_for_word("OP_TRUE").unwrap(), 81);
        assert_eq!(table.opcode_for_word("OP_NOP2").unwrap(), all::OP_CHECKLOCKTIMEVERIFY);
        assert_eq!(table.opcode_for_word("OP_NOP10").unwrap(), all::OP_NOP10);
        assert_eq!(table.opcode_for_word("OP_EQUAL").unwrap(), 135);
        match table.opcode_for_word("OP_BAD") {
            Err(Error::UnknownWord(ref w)) => assert_eq!(w, "OP_BAD"),
            x => panic!("unexpected {:?}", x),
        }
        // words are case sensitive
        assert!(table.opcode_for_word("op_equal").is_err());
    }

    #[test]
    fn word_for_opcode() {
        let table = OpcodeTable::standard();
        assert_eq!(table.word_for_opcode(0).unwrap(), Some("OP_0"));
        assert_eq!(table.word_for_opcode(1).unwrap(), None);
        assert_eq!(table.word_for_opcode(73).unwrap(), None);
        assert_eq!(table.word_for_opcode(81).unwrap(), Some("OP_1"));
        assert_eq!(table.word_for_opcode(96).unwrap(), Some("OP_16"));
        assert_eq!(table.word_for_opcode(177).unwrap(), Some("OP_CHECKLOCKTIMEVERIFY"));
        assert_eq!(table.word_for_opcode(185).unwrap(), Some("OP_NOP10"));
        assert!(matches!(table.word_for_opcode(186), Err(Error::InvalidOpcodeNumber(186))));
    }

    #[test]
    fn string_for_opcode() {
        let table = OpcodeTable::standard();
        assert_eq!(table.string_for_opcode(3).unwrap(), "PUSH_DATA(3)");
        assert_eq!(table.string_for_opcode(135).unwrap(), "OP_EQUAL");
        assert!(table.string_for_opcode(200).is_err());
    }

    #[test]
    fn validity() {
        let table = OpcodeTable::standard();
        assert!(!table.opcode_is_valid(186));
        assert!(table.opcode_is_valid(110));
        assert!(table.opcode_is_valid(1));
        assert!(table.opcode_is_valid(255));
        assert!(table.word_is_valid("OP_CAT"));
        assert!(!table.word_is_valid("OP_CLONE"));
        assert!(!table.word_is_valid("N/A"));
    }

    #[test]
    fn descriptions() {
        let table = OpcodeTable::standard();
        assert_eq!(
            table.description_for_opcode(135).unwrap(),
            "Returns 1 if the inputs are exactly equal, 0 otherwise."
        );
        assert_eq!(
            table.description_for_word("OP_EQUAL").unwrap(),
            "Returns 1 if the inputs are exactly equal, 0 otherwise."
        );
        assert_eq!(
            table.description_for_opcode(1).unwrap(),
            "The next byte is data to be pushed onto the stack"
        );
        assert_eq!(
            table.description_for_opcode(20).unwrap(),
            "The next 20 bytes is data to be pushed onto the stack"
        );
        assert_eq!(table.input_description_for_opcode(135).unwrap(), "x1 x2");
        assert_eq!(table.input_description_for_word("OP_EQUAL").unwrap(), "x1 x2");
        assert_eq!(table.output_description_for_opcode(135).unwrap(), "True / false");
        assert_eq!(table.output_description_for_word("OP_EQUAL").unwrap(), "True / false");
        assert!(table.description_for_opcode(190).is_err());
        assert!(table.description_for_word("OP_CLONE").is_err());
    }

    #[test]
    fn disabled() {
        let table = OpcodeTable::standard();
        assert!(table.opcode_is_disabled(142).unwrap());
        assert!(table.opcode_is_disabled(134).unwrap());
        assert!(table.word_is_disabled("OP_2DIV").unwrap());
        assert!(table.word_is_disabled("OP_XOR").unwrap());
        assert!(!table.opcode_is_disabled(135).unwrap());
        assert!(!table.word_is_disabled("OP_EQUAL").unwrap());
        assert!(matches!(table.opcode_is_disabled(240), Err(Error::InvalidOpcodeNumber(240))));
        assert!(matches!(table.word_is_disabled("OP_CLONE"), Err(Error::UnknownWord(_))));
    }

    #[test]
    fn resolve() {
        let table = OpcodeTable::standard();
        assert_eq!(table.resolve("135").unwrap(), 135);
        assert_eq!(table.resolve(" 0 ").unwrap(), 0);
        assert_eq!(table.resolve("OP_EQUAL").unwrap(), 135);
        assert!(matches!(table.resolve("1000"), Err(Error::InvalidOpcodeNumber(1000))));
        assert!(matches!(table.resolve("-1"), Err(Error::InvalidOpcodeNumber(-1))));
        assert!(matches!(table.resolve("186"), Err(Error::InvalidOpcodeNumber(186))));
        assert!(matches!(table.resolve("OP_CLONE"), Err(Error::UnknownWord(_))));
    }

    #[test]
    fn custom_rows() {
        static ROWS: &[OpcodeInfo] = &[OpcodeInfo {
            words: &["OP_ONLY"],
            opcodes: &[0xc0],
            input: "",
            output: "",
            description: "custom",
            disabled: true,
        }];
        let table = OpcodeTable::new(ROWS);
        assert_eq!(table.opcode_for_word("OP_ONLY").unwrap(), 0xc0);
        assert!(!table.opcode_is_valid(0));
        assert!(table.opcode_is_disabled(0xc0).unwrap());
    }
}
