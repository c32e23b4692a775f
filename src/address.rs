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

//! # Addresses
//!
//! Conversion between standard scripts and address strings.
//!
//! Pay-to-pubkey-hash and pay-to-script-hash scripts become base58check
//! strings of a version byte followed by the embedded hash. The two witness
//! shapes become bech32 strings whose data is the whole raw script,
//! version opcode and push prefix included.
//!

use bitcoin::base58;
use bech32::{Bech32, Hrp};
use log::debug;

use crate::opcode_table::OpcodeTable;
use crate::options::Options;
use crate::raw;
use crate::template::{self, ScriptType};
use crate::token::Token;
use crate::Error;

/// The parameters to derive addresses.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AddressParams {
    /// The base58 prefix for p2pkh addresses.
    pub pub_key_hash: u8,
    /// The base58 prefix for p2sh addresses.
    pub script_hash: u8,
    /// The bech32 HRP for witness addresses.
    pub bech_hrp: &'static str,
}

impl AddressParams {
    /// The Bitcoin network address parameters.
    pub const BITCOIN: AddressParams = AddressParams {
        pub_key_hash: 0x00,
        script_hash: 0x05,
        bech_hrp: "bc",
    };

    /// The Bitcoin testnet and signet address parameters.
    pub const TESTNET: AddressParams = AddressParams {
        pub_key_hash: 0x6f,
        script_hash: 0xc4,
        bech_hrp: "tb",
    };

    /// The default regtest address parameters.
    pub const REGTEST: AddressParams = AddressParams {
        pub_key_hash: 0x6f,
        script_hash: 0xc4,
        bech_hrp: "bcrt",
    };
}

/// Returns the address of `tokens` if it has a standard addressable shape.
pub fn to_address(
    tokens: &[Token],
    options: &Options,
    table: &OpcodeTable,
) -> Result<Option<String>, Error> {
    let script_type = match template::classify(tokens, table) {
        Some(t) if t.has_address() => t,
        _ => return Ok(None),
    };

    let address = match script_type {
        ScriptType::P2pkh => encode_base58(options.pub_key_hash, embedded_hash(tokens, 2)?),
        ScriptType::P2sh => encode_base58(options.script_hash, embedded_hash(tokens, 1)?),
        ScriptType::P2wpkh | ScriptType::P2wsh => {
            encode_bech32(&options.bech32, &raw::encode(tokens)?)?
        }
        ScriptType::P2pk | ScriptType::Multisig => return Ok(None),
    };
    Ok(Some(address))
}

fn embedded_hash(tokens: &[Token], idx: usize) -> Result<&[u8], Error> {
    tokens
        .get(idx)
        .and_then(Token::as_literal)
        .ok_or(Error::MalformedInput("script does not embed a hash"))
}

/// Base58check encoding of `version` followed by `payload`.
pub fn encode_base58(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 1);
    data.push(version);
    data.extend_from_slice(payload);
    base58::encode_check(&data)
}

/// Bech32 encoding of `data` under the human-readable part `hrp`.
pub fn encode_bech32(hrp: &str, data: &[u8]) -> Result<String, Error> {
    let hrp = Hrp::parse(hrp).map_err(|_| Error::InvalidBech32Prefix(hrp.to_owned()))?;
    bech32::encode::<Bech32>(hrp, data)
        .map_err(|_| Error::MalformedInput("script too long for a bech32 address"))
}

/// Reconstructs the script an address pays to.
///
/// A bech32 address under the configured prefix is tried first and its
/// data decoded as a raw script. Otherwise the address must be base58check
/// with one of the configured version bytes. Intermediate failures are
/// logged and only the final [`Error::UnrecognizedAddress`] is returned.
pub fn from_address(address: &str, options: &Options, table: &OpcodeTable) -> Result<Vec<Token>, Error> {
    let prefix = find_prefix(address);
    if match_prefix(prefix, &options.bech32) {
        match decode_bech32(address, &options.bech32, table) {
            Ok(tokens) => return Ok(tokens),
            Err(e) => debug!("{} is not a bech32 script address: {}", address, e),
        }
    }

    match decode_base58(address, options, table) {
        Ok(tokens) => Ok(tokens),
        Err(e) => {
            debug!("{} is not a base58 script address: {}", address, e);
            Err(Error::UnrecognizedAddress(address.to_owned()))
        }
    }
}

fn decode_bech32(address: &str, expected_hrp: &str, table: &OpcodeTable) -> Result<Vec<Token>, Error> {
    let (hrp, data) = bech32::decode(address)?;
    if !match_prefix(hrp.as_str(), expected_hrp) {
        return Err(Error::InvalidBech32Prefix(hrp.to_string()));
    }
    raw::decode(&data, table)
}

fn decode_base58(address: &str, options: &Options, table: &OpcodeTable) -> Result<Vec<Token>, Error> {
    let data = base58::decode_check(address)?;
    let (version, payload) = match data.split_first() {
        Some((version, payload)) => (*version, payload.to_vec()),
        None => return Err(Error::MalformedInput("empty base58 payload")),
    };
    if version == options.pub_key_hash {
        ScriptType::P2pkh.template().instantiate(vec![payload], table)
    } else if version == options.script_hash {
        ScriptType::P2sh.template().instantiate(vec![payload], table)
    } else {
        Err(Error::MalformedInput("unknown base58 version byte"))
    }
}

fn find_prefix(bech32: &str) -> &str {
    // Split at the last occurrence of the separator character '1'.
    match bech32.rfind('1') {
        None => bech32,
        Some(sep) => bech32.split_at(sep).0,
    }
}

/// Checks if both prefixes match, regardless of case.
fn match_prefix(prefix_mixed: &str, prefix: &str) -> bool {
    prefix_mixed.len() == prefix.len()
        && prefix
            .chars()
            .zip(prefix_mixed.chars())
            .all(|(a, b)| a.to_ascii_lowercase() == b.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asm;
    use crate::hex::FromHex;

    fn table() -> &'static OpcodeTable {
        OpcodeTable::standard()
    }

    fn tokens_of(hex: &str) -> Vec<Token> {
        raw::decode(&Vec::<u8>::from_hex(hex).unwrap(), table()).unwrap()
    }

    fn roundtrips(raw_hex: &str, address: &str) {
        let opts = Options::default();
        let tokens = tokens_of(raw_hex);
        assert_eq!(to_address(&tokens, &opts, table()).unwrap().as_deref(), Some(address));
        assert_eq!(from_address(address, &opts, table()).unwrap(), tokens);
    }

    #[test]
    fn p2pkh() {
        roundtrips(
            "76a914f54a5851e9372b87810a8e60cdd2e7cfd80b6e3188ac",
            "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs",
        );
    }

    #[test]
    fn p2sh() {
        roundtrips("a91452973f3519d5d248004767efb874aa2a3b2b37ce87", "39DiX6M1KX2MNvtm44eUu18qdgqxnJgTW8");
    }

    #[test]
    fn witness() {
        for address in &[
            "bc1qq28dxlfuvrp8666vlh73tsrspg8n68atkfqxqwfjl",
            "bc1qqsgucp6ev42uvcw9lnhjyhkz2vhyv9ez4pg003dcerw6ds4nw7q25ssrrlcc",
        ] {
            let tokens = from_address(address, &Options::default(), table()).unwrap();
            assert_eq!(
                to_address(&tokens, &Options::default(), table()).unwrap().as_deref(),
                Some(*address)
            );
        }
        let upper = "BC1QQ28DXLFUVRP8666VLH73TSRSPG8N68ATKFQXQWFJL";
        assert!(from_address(upper, &Options::default(), table()).is_ok());
    }

    #[test]
    fn other_networks() {
        let opts = Options::from(&AddressParams::TESTNET);
        let tokens = tokens_of("76a914f54a5851e9372b87810a8e60cdd2e7cfd80b6e3188ac");
        let address = to_address(&tokens, &opts, table()).unwrap().unwrap();
        assert!(address.starts_with('m') || address.starts_with('n'));
        assert_eq!(from_address(&address, &opts, table()).unwrap(), tokens);
        // the mainnet version byte is not recognized on testnet
        assert!(matches!(
            from_address("1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs", &opts, table()),
            Err(Error::UnrecognizedAddress(_))
        ));

        let witness = tokens_of("0014769be9e30613eb5a67efe8ae03805079e8fd5d92");
        let address = to_address(&witness, &opts, table()).unwrap().unwrap();
        assert!(address.starts_with("tb1"));
        assert_eq!(from_address(&address, &opts, table()).unwrap(), witness);
    }

    #[test]
    fn no_address() {
        let opts = Options::default();
        let tokens = asm::decode("OP_RETURN 636861726c6579206c6f766573206865696469", &opts, table()).unwrap();
        assert_eq!(to_address(&tokens, &opts, table()).unwrap(), None);
        let p2pk = asm::decode(&format!("[{}] OP_CHECKSIG", "04".repeat(65)), &opts, table()).unwrap();
        assert_eq!(to_address(&p2pk, &opts, table()).unwrap(), None);
    }

    #[test]
    fn unrecognized() {
        for address in &["", "hello", "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAt", "tb1qq28dxlfuvrp8666vlh73tsrspg8n68atkfqxqwfjl"] {
            match from_address(address, &Options::default(), table()) {
                Err(Error::UnrecognizedAddress(ref a)) => assert_eq!(a, address),
                x => panic!("unexpected {:?} for {}", x, address),
            }
        }
    }

    #[test]
    fn bad_prefix() {
        let opts = Options { bech32: "b c".to_owned(), ..Options::default() };
        let witness = tokens_of("0014769be9e30613eb5a67efe8ae03805079e8fd5d92");
        assert!(matches!(to_address(&witness, &opts, table()), Err(Error::InvalidBech32Prefix(_))));
    }

    #[test]
    fn prefixes() {
        assert_eq!(find_prefix("bc1qxyz"), "bc");
        assert_eq!(find_prefix("bcrt1q1xyz"), "bcrt1q");
        assert_eq!(find_prefix("nosep"), "nosep");
        assert!(match_prefix("BC", "bc"));
        assert!(!match_prefix("bcrt", "bc"));
    }
}
