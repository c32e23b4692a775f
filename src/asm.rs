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

//! # Script Assembly
//!
//! Lexer and formatter for the textual form of scripts.
//!
//! The lexer accepts:
//!
//! * words, with or without the `OP_` prefix and in any case (`dup`,
//!   `OP_DUP`);
//! * hex literals, bare (`abcd`), prefixed (`0xabcd`), bracketed
//!   (`[ab cd]`, interior whitespace ignored) or sized
//!   (`PUSHDATA(2)[abcd]`);
//! * `0` on its own, which is `OP_0`;
//! * when placeholders are enabled, `<spec>` placeholders and the `...`
//!   repeat marker.
//!
//! All positions reported in errors and spans are character offsets.
//!

use log::trace;

use crate::hex;
use crate::opcode_table::OpcodeTable;
use crate::opcodes;
use crate::options::{self, LiteralStyle, OpcodeStyle, Options};
use crate::token::{self, Span, Spanned, Token};
use crate::Error;

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

const SIZED_HEADER: &str = "PUSHDATA(";

fn is_term_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Parses asm text into tokens.
pub fn decode(text: &str, options: &Options, table: &OpcodeTable) -> Result<Vec<Token>, Error> {
    decode_spanned(text, options, table).map(token::strip_spans)
}

/// Parses asm text, keeping the character range of every token.
pub fn decode_spanned(
    text: &str,
    options: &Options,
    table: &OpcodeTable,
) -> Result<Vec<Spanned>, Error> {
    let mut lexer = Lexer { chars: text.chars().collect(), idx: 0, options, table };
    let mut tokens = vec![];
    while let Some(tok) = lexer.next_token(options.allow_placeholders)? {
        trace!("asm token {:?} at {}", tok.token, tok.span);
        tokens.push(tok);
    }
    Ok(tokens)
}

struct Lexer<'a> {
    chars: Vec<char>,
    idx: usize,
    options: &'a Options,
    table: &'a OpcodeTable,
}

impl<'a> Lexer<'a> {
    fn peek(&self, skip: usize) -> Option<char> {
        self.chars.get(self.idx + skip).copied()
    }

    fn at_boundary(&self, skip: usize) -> bool {
        self.peek(skip).map_or(true, is_whitespace)
    }

    fn next_token(&mut self, allow_placeholders: bool) -> Result<Option<Spanned>, Error> {
        while self.peek(0).map_or(false, is_whitespace) {
            self.idx += 1;
        }

        let start = self.idx;
        let first = match self.peek(0) {
            Some(c) => c,
            None => return Ok(None),
        };

        let token = match first {
            '[' => {
                self.idx += 1;
                self.bracket_literal(start)?
            }
            '<' if allow_placeholders => self.placeholder(start)?,
            '.' if allow_placeholders => {
                if self.peek(1) != Some('.') || self.peek(2) != Some('.') {
                    return Err(Error::UnexpectedCharacter(start));
                }
                self.idx += 3;
                Token::Repeat
            }
            '0' if matches!(self.peek(1), Some('x') | Some('X')) => {
                self.idx += 2;
                self.bare_literal(start)?
            }
            '0' if self.at_boundary(1) => {
                self.idx += 1;
                Token::Opcode(opcodes::all::OP_0)
            }
            // words such as 0NOTEQUAL start with a digit too
            c if is_term_char(c) => match self.term(start) {
                Ok(spanned) => return Ok(Some(spanned)),
                Err(e) => {
                    if !self.run_is_hex(start) {
                        return Err(e);
                    }
                    self.idx = start;
                    self.bare_literal(start)?
                }
            },
            _ => return Err(Error::UnexpectedCharacter(start)),
        };

        Ok(Some(Spanned::new(token, Span::new(start, self.idx))))
    }

    /// Whether the whitespace-delimited run at `start` is all hex digits.
    fn run_is_hex(&self, start: usize) -> bool {
        self.chars[start..]
            .iter()
            .take_while(|c| !is_whitespace(**c))
            .all(|c| hex::is_hex_char(*c))
    }

    fn finish_literal(digits: &str, start: usize) -> Result<Token, Error> {
        hex::decode_digits(digits)
            .map(Token::Literal)
            .ok_or(Error::InvalidHexLiteral(start))
    }

    fn bracket_literal(&mut self, start: usize) -> Result<Token, Error> {
        let mut digits = String::new();
        loop {
            match self.peek(0) {
                None => return Err(Error::UnterminatedLiteral(start)),
                Some(']') => {
                    self.idx += 1;
                    break;
                }
                Some(c) if is_whitespace(c) => {}
                Some(c) if hex::is_hex_char(c) => digits.push(c),
                Some(_) => return Err(Error::UnexpectedCharacter(self.idx)),
            }
            self.idx += 1;
        }
        Lexer::finish_literal(&digits, start)
    }

    fn bare_literal(&mut self, start: usize) -> Result<Token, Error> {
        let mut digits = String::new();
        while let Some(c) = self.peek(0) {
            if is_whitespace(c) {
                break;
            }
            if !hex::is_hex_char(c) {
                return Err(Error::UnexpectedCharacter(self.idx));
            }
            digits.push(c);
            self.idx += 1;
        }
        Lexer::finish_literal(&digits, start)
    }

    fn placeholder(&mut self, start: usize) -> Result<Token, Error> {
        self.idx += 1;
        let mut spec = String::new();
        loop {
            match self.peek(0) {
                None => return Err(Error::UnterminatedPlaceholder(start)),
                Some('>') => {
                    self.idx += 1;
                    break;
                }
                Some(c) => spec.push(c),
            }
            self.idx += 1;
        }
        Ok(Token::Placeholder(spec.trim().to_owned()))
    }

    fn term(&mut self, start: usize) -> Result<Spanned, Error> {
        let mut term = String::new();
        while let Some(c) = self.peek(0) {
            if is_whitespace(c) {
                break;
            }
            if c == '(' && term == "PUSHDATA" {
                return self.sized_literal(start);
            }
            if !is_term_char(c) {
                return Err(Error::UnexpectedCharacter(self.idx));
            }
            term.push(c);
            self.idx += 1;
        }

        let word = options::normalize_term(&term);
        let code = match self.options.terms.get(&word) {
            Some(code) => *code,
            None if self.table.word_is_valid(&word) => self.table.opcode_for_word(&word)?,
            None => return Err(Error::UnknownTerm { term: word, position: start }),
        };
        if opcodes::is_push_opcode(code) {
            return Err(Error::InvalidOpcode { opcode: code, position: start });
        }
        Ok(Spanned::new(Token::Opcode(code), Span::new(start, self.idx)))
    }

    /// Parses `(n)` and the literal after it. The cursor is on the `(`.
    ///
    /// Directly nested `PUSHDATA(n)` headers are collected in a loop and the
    /// literal is checked against each of them, innermost first.
    fn sized_literal(&mut self, start: usize) -> Result<Spanned, Error> {
        let mut pending = vec![(start, self.sized_header(start)?)];
        loop {
            while self.peek(0).map_or(false, is_whitespace) {
                self.idx += 1;
            }
            if !self.at_sized_header() {
                break;
            }
            let header_start = self.idx;
            self.idx += SIZED_HEADER.len() - 1;
            pending.push((header_start, self.sized_header(header_start)?));
        }

        let innermost = pending.last().map_or(start, |p| p.0);
        let (data, mut span) = match self.next_token(false)? {
            Some(Spanned { token: Token::Literal(data), span }) => (data, span),
            _ => return Err(Error::PushdataMissingLiteral(innermost)),
        };
        for &(header_start, expected) in pending.iter().rev() {
            if data.len() != expected {
                return Err(Error::PushdataSizeMismatch {
                    position: span.start,
                    expected,
                    actual: data.len(),
                });
            }
            span = Span::new(header_start, span.end);
        }
        Ok(Spanned::new(Token::Literal(data), span))
    }

    /// Whether the cursor is on `PUSHDATA(`.
    fn at_sized_header(&self) -> bool {
        SIZED_HEADER.chars().enumerate().all(|(i, c)| self.peek(i) == Some(c))
    }

    /// Parses the `(n)` of a sized literal header. The cursor is on the `(`.
    fn sized_header(&mut self, start: usize) -> Result<usize, Error> {
        self.idx += 1;
        let number_start = self.idx;
        let mut digits = String::new();
        loop {
            match self.peek(0) {
                None => return Err(Error::UnterminatedLiteral(start)),
                Some(')') => break,
                Some(c) if c.is_ascii_digit() => digits.push(c),
                Some(_) => return Err(Error::InvalidPushdataSize(number_start)),
            }
            self.idx += 1;
        }
        self.idx += 1;
        digits.parse().map_err(|_| Error::InvalidPushdataSize(number_start))
    }
}

/// Renders one token as asm.
pub fn format_token(token: &Token, options: &Options, table: &OpcodeTable) -> Result<String, Error> {
    match *token {
        Token::Literal(ref data) => {
            let hex = hex::ToHex::to_hex(&data[..]);
            Ok(match options.literal_style {
                LiteralStyle::Normal if data.is_empty() => "0".to_owned(),
                LiteralStyle::Normal => hex,
                LiteralStyle::Brackets => format!("[{}]", hex),
                LiteralStyle::Prefixed if data.is_empty() => "0".to_owned(),
                LiteralStyle::Prefixed => format!("0x{}", hex),
                LiteralStyle::Verbose => format!("PUSHDATA({})[{}]", data.len(), hex),
            })
        }
        Token::Opcode(code) => {
            if let Some(word) = options.opcodes.get(&code) {
                return Ok(word.clone());
            }
            let word = table.string_for_opcode(code)?;
            Ok(match options.opcode_style {
                OpcodeStyle::Normal => word,
                OpcodeStyle::Short => match word.strip_prefix("OP_") {
                    Some(short) => short.to_owned(),
                    None => word,
                },
            })
        }
        Token::Placeholder(ref spec) => Ok(format!("<{}>", spec)),
        Token::Repeat => Ok("...".to_owned()),
    }
}

/// Renders tokens as asm, separated by single spaces.
pub fn format(tokens: &[Token], options: &Options, table: &OpcodeTable) -> Result<String, Error> {
    let parts = tokens
        .iter()
        .map(|t| format_token(t, options, table))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::FromHex;
    use crate::opcodes::all;

    fn table() -> &'static OpcodeTable {
        OpcodeTable::standard()
    }

    fn parse(text: &str) -> Result<Vec<Token>, Error> {
        decode(text, &Options::default(), table())
    }

    fn lit(hex: &str) -> Token {
        Token::Literal(Vec::<u8>::from_hex(hex).unwrap())
    }

    #[test]
    fn positions() {
        let text = format!("OP_DUP OP_HASH160 [{}] OP_EQUALVERIFY OP_CHECKSIG", "f".repeat(40));
        let spanned = decode_spanned(&text, &Options::default(), table()).unwrap();
        let starts: Vec<usize> = spanned.iter().map(|s| s.span.start).collect();
        assert_eq!(starts, vec![0, 7, 18, 61, 76]);
        assert_eq!(spanned[2].span.end, 60);
        assert_eq!(spanned[4].span.end, text.chars().count());

        let spanned = decode_spanned(" \n\tOP_EQUAL \n\t", &Options::default(), table()).unwrap();
        assert_eq!(spanned.len(), 1);
        assert_eq!(spanned[0].span, Span::new(3, 11));
    }

    #[test]
    fn words() {
        assert_eq!(
            parse("dup op_hash160 OP_EQUALVERIFY checkSig").unwrap(),
            vec![
                Token::Opcode(all::OP_DUP),
                Token::Opcode(all::OP_HASH160),
                Token::Opcode(all::OP_EQUALVERIFY),
                Token::Opcode(all::OP_CHECKSIG),
            ]
        );
        assert_eq!(parse("OP_FALSE 1 16 OP_TRUE").unwrap(), vec![
            Token::Opcode(0),
            Token::Opcode(all::OP_1),
            Token::Opcode(all::OP_16),
            Token::Opcode(all::OP_1),
        ]);
        assert_eq!(parse("").unwrap(), vec![]);
        assert_eq!(parse("  \r\n ").unwrap(), vec![]);
    }

    #[test]
    fn literals() {
        assert_eq!(parse("abcd").unwrap(), vec![lit("abcd")]);
        assert_eq!(parse("0xABCD").unwrap(), vec![lit("abcd")]);
        assert_eq!(parse("0Xabcd").unwrap(), vec![lit("abcd")]);
        assert_eq!(parse("[ab cd\n ef]").unwrap(), vec![lit("abcdef")]);
        assert_eq!(parse("[]").unwrap(), vec![lit("")]);
        assert_eq!(parse("0a0b").unwrap(), vec![lit("0a0b")]);
        assert_eq!(parse("00").unwrap(), vec![lit("00")]);
        assert_eq!(parse("0notequal").unwrap(), vec![Token::Opcode(all::OP_0NOTEQUAL)]);
        assert_eq!(parse("0").unwrap(), vec![Token::Opcode(0)]);
        assert_eq!(parse("0 0").unwrap(), vec![Token::Opcode(0), Token::Opcode(0)]);
        // not a word, but all hex
        assert_eq!(parse("17").unwrap(), vec![lit("17")]);
        assert_eq!(parse("dead").unwrap(), vec![lit("dead")]);
        assert_eq!(parse("PUSHDATA(2)[abcd]").unwrap(), vec![lit("abcd")]);
        assert_eq!(parse("PUSHDATA(2) 0xabcd").unwrap(), vec![lit("abcd")]);
        assert_eq!(parse("PUSHDATA(0)[]").unwrap(), vec![lit("")]);
    }

    #[test]
    fn sized_literal_span() {
        let spanned =
            decode_spanned("OP_RETURN PUSHDATA(2)[abcd]", &Options::default(), table()).unwrap();
        assert_eq!(spanned[1].span, Span::new(10, 27));
    }

    #[test]
    fn literal_errors() {
        assert!(matches!(parse("[abcd"), Err(Error::UnterminatedLiteral(0))));
        assert!(matches!(parse("OP_DUP [ab"), Err(Error::UnterminatedLiteral(7))));
        assert!(matches!(parse("[abzz]"), Err(Error::UnexpectedCharacter(3))));
        assert!(matches!(parse("[abc]"), Err(Error::InvalidHexLiteral(0))));
        assert!(matches!(parse("0xabc"), Err(Error::InvalidHexLiteral(0))));
        assert!(matches!(parse("0xabzz"), Err(Error::UnexpectedCharacter(4))));
        assert!(matches!(parse("abc"), Err(Error::InvalidHexLiteral(0))));
        assert!(matches!(parse("OP_DUP ]"), Err(Error::UnexpectedCharacter(7))));
    }

    #[test]
    fn term_errors() {
        match parse("OP_NOTAREALOP") {
            Err(Error::UnknownTerm { ref term, position: 0 }) => assert_eq!(term, "OP_NOTAREALOP"),
            x => panic!("unexpected {:?}", x),
        }
        match parse("OP_DUP frob") {
            Err(Error::UnknownTerm { ref term, position: 7 }) => assert_eq!(term, "OP_FROB"),
            x => panic!("unexpected {:?}", x),
        }
        assert!(matches!(parse("OP_DUP,"), Err(Error::UnexpectedCharacter(6))));
        // words for push opcodes cannot stand alone
        assert!(matches!(
            parse("OP_PUSHDATA1"),
            Err(Error::InvalidOpcode { opcode: 0x4c, position: 0 })
        ));
    }

    #[test]
    fn pushdata_errors() {
        assert!(matches!(
            parse("PUSHDATA(3)[abcd]"),
            Err(Error::PushdataSizeMismatch { position: 11, expected: 3, actual: 2 })
        ));
        assert!(matches!(parse("PUSHDATA(2)"), Err(Error::PushdataMissingLiteral(0))));
        assert!(matches!(parse("PUSHDATA(2) OP_DUP"), Err(Error::PushdataMissingLiteral(0))));
        assert!(matches!(parse("PUSHDATA()[]"), Err(Error::InvalidPushdataSize(9))));
        assert!(matches!(parse("PUSHDATA(x)[]"), Err(Error::InvalidPushdataSize(9))));
        assert!(matches!(parse("PUSHDATA(2"), Err(Error::UnterminatedLiteral(0))));
    }

    #[test]
    fn nested_sized_literals() {
        let spanned = decode_spanned("OP_DUP PUSHDATA(2) PUSHDATA(2)[abcd]", &Options::default(), table()).unwrap();
        assert_eq!(spanned.len(), 2);
        assert_eq!(spanned[1].token, lit("abcd"));
        assert_eq!(spanned[1].span, Span::new(7, 36));

        assert!(matches!(
            parse("PUSHDATA(3) PUSHDATA(2)[abcd]"),
            Err(Error::PushdataSizeMismatch { position: 12, expected: 3, actual: 2 })
        ));
        assert!(matches!(parse("PUSHDATA(2) PUSHDATA(2)"), Err(Error::PushdataMissingLiteral(12))));
        assert!(matches!(parse("PUSHDATA(2) PUSHDATA(x)[abcd]"), Err(Error::InvalidPushdataSize(21))));
    }

    #[test]
    fn deeply_nested_sized_literals() {
        let text = format!("{}[ab]", "PUSHDATA(1) ".repeat(100_000));
        let spanned = decode_spanned(&text, &Options::default(), table()).unwrap();
        assert_eq!(spanned.len(), 1);
        assert_eq!(spanned[0].token, lit("ab"));
        assert_eq!(spanned[0].span, Span::new(0, text.len()));

        let text = format!("{}[ab]", "PUSHDATA(2) ".repeat(100_000));
        assert!(matches!(parse(&text), Err(Error::PushdataSizeMismatch { expected: 2, actual: 1, .. })));
    }

    #[test]
    fn hex_runs_that_are_words() {
        // `1add` is OP_1ADD, so the normal style cannot carry that literal
        let toks = vec![lit("1add")];
        let text = format(&toks, &Options::default(), table()).unwrap();
        assert_eq!(text, "1add");
        assert_eq!(parse(&text).unwrap(), vec![Token::Opcode(all::OP_1ADD)]);

        let brackets = Options::default().with_literal_style(LiteralStyle::Brackets);
        let text = format(&toks, &brackets, table()).unwrap();
        assert_eq!(decode(&text, &brackets, table()).unwrap(), toks);

        // overrides widen the set of such runs
        let overridden = Options::default().with_term("beef", all::OP_NOP);
        assert_eq!(decode("beef", &overridden, table()).unwrap(), vec![Token::Opcode(all::OP_NOP)]);
    }

    #[test]
    fn placeholders() {
        let opts = Options::default().with_placeholders(true);
        let toks = decode("<OP_1-OP_16> < pubkey > ... OP_CHECKMULTISIG", &opts, table()).unwrap();
        assert_eq!(
            toks,
            vec![
                Token::Placeholder("OP_1-OP_16".into()),
                Token::Placeholder("pubkey".into()),
                Token::Repeat,
                Token::Opcode(all::OP_CHECKMULTISIG),
            ]
        );
        assert!(matches!(decode("<abc", &opts, table()), Err(Error::UnterminatedPlaceholder(0))));
        assert!(matches!(decode("OP_DUP ..", &opts, table()), Err(Error::UnexpectedCharacter(7))));

        // without permission the syntax is rejected
        assert!(matches!(parse("<abc>"), Err(Error::UnexpectedCharacter(0))));
        assert!(matches!(parse("..."), Err(Error::UnexpectedCharacter(0))));
        // placeholders are never allowed after PUSHDATA(n)
        assert!(matches!(
            decode("PUSHDATA(1) <x>", &opts, table()),
            Err(Error::UnexpectedCharacter(12))
        ));
    }

    #[test]
    fn term_overrides() {
        let opts = Options::default().with_term("frob", 0xb0).with_term("OP_DUP", 0xac);
        assert_eq!(
            decode("frob OP_FROB dup", &opts, table()).unwrap(),
            vec![Token::Opcode(0xb0), Token::Opcode(0xb0), Token::Opcode(0xac)]
        );
        let bad = Options::default().with_term("frob", 0x10);
        assert!(matches!(
            decode("frob", &bad, table()),
            Err(Error::InvalidOpcode { opcode: 0x10, position: 0 })
        ));
    }

    #[test]
    fn format_styles() {
        let toks = vec![
            Token::Opcode(all::OP_HASH160),
            lit("c664139327b98043febeab6434eba89bb196d1af"),
            Token::Literal(vec![]),
            Token::Opcode(all::OP_EQUAL),
        ];
        let render = |lstyle, ostyle| {
            let opts = Options::default().with_literal_style(lstyle).with_opcode_style(ostyle);
            format(&toks, &opts, table()).unwrap()
        };
        assert_eq!(
            render(LiteralStyle::Normal, OpcodeStyle::Normal),
            "OP_HASH160 c664139327b98043febeab6434eba89bb196d1af 0 OP_EQUAL"
        );
        assert_eq!(
            render(LiteralStyle::Brackets, OpcodeStyle::Short),
            "HASH160 [c664139327b98043febeab6434eba89bb196d1af] [] EQUAL"
        );
        assert_eq!(
            render(LiteralStyle::Prefixed, OpcodeStyle::Normal),
            "OP_HASH160 0xc664139327b98043febeab6434eba89bb196d1af 0 OP_EQUAL"
        );
        assert_eq!(
            render(LiteralStyle::Verbose, OpcodeStyle::Normal),
            "OP_HASH160 PUSHDATA(20)[c664139327b98043febeab6434eba89bb196d1af] PUSHDATA(0)[] OP_EQUAL"
        );
    }

    #[test]
    fn format_other_tokens() {
        let opts = Options::default().with_opcode_word(all::OP_NOP1, "MYOP");
        let toks = vec![
            Token::Opcode(all::OP_NOP1),
            Token::Placeholder("20-byte".into()),
            Token::Repeat,
            Token::Opcode(all::OP_CHECKLOCKTIMEVERIFY),
        ];
        assert_eq!(format(&toks, &opts, table()).unwrap(), "MYOP <20-byte> ... OP_CHECKLOCKTIMEVERIFY");
        assert!(matches!(
            format(&[Token::Opcode(0xba)], &opts, table()),
            Err(Error::InvalidOpcodeNumber(0xba))
        ));
    }

    #[test]
    fn lossless_styles_reparse() {
        let text = "0 17 PUSHDATA(1)[00] 0x60 OP_16 [] OP_CHECKSIG";
        let toks = parse(text).unwrap();
        for style in &[LiteralStyle::Brackets, LiteralStyle::Verbose] {
            let opts = Options::default().with_literal_style(*style);
            let formatted = format(&toks, &opts, table()).unwrap();
            assert_eq!(decode(&formatted, &opts, table()).unwrap(), toks, "{}", formatted);
        }
    }
}
