//! # Stacks Principals (c32check)
//!
//! Standard principal: `S` + version char + c32(hash160 ‖ checksum), where
//! the checksum is the first 4 bytes of sha256(sha256(version ‖ hash160)).
//! Contract principal: `<standard>.<contract-name>`.

use crate::error::ClarityError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

const C32_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Single-sig mainnet address version (`SP…`)
pub const VERSION_MAINNET_SINGLESIG: u8 = 22;
/// Multi-sig mainnet address version (`SM…`)
pub const VERSION_MAINNET_MULTISIG: u8 = 20;
/// Single-sig testnet address version (`ST…`)
pub const VERSION_TESTNET_SINGLESIG: u8 = 26;
/// Multi-sig testnet address version (`SN…`)
pub const VERSION_TESTNET_MULTISIG: u8 = 21;

/// Longest contract name the node accepts
pub const MAX_CONTRACT_NAME_LEN: usize = 128;

// ─────────────────────────────────────────────────────────────
// C32 ENCODING
// ─────────────────────────────────────────────────────────────

fn c32_value(c: u8) -> Option<u8> {
    let c = match c.to_ascii_uppercase() {
        b'O' => b'0',
        b'I' | b'L' => b'1',
        other => other,
    };
    C32_ALPHABET.iter().position(|&a| a == c).map(|p| p as u8)
}

/// Crockford base32 encoding as used by c32check. Leading zero bytes
/// become leading `0` characters.
pub fn c32_encode(data: &[u8]) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(data.len() * 8 / 5 + 1);
    let mut carry: u16 = 0;
    let mut carry_bits = 0;

    for &byte in data.iter().rev() {
        carry |= (byte as u16) << carry_bits;
        carry_bits += 8;
        while carry_bits >= 5 {
            out.push(C32_ALPHABET[(carry & 0x1f) as usize]);
            carry >>= 5;
            carry_bits -= 5;
        }
    }
    if carry_bits > 0 {
        out.push(C32_ALPHABET[(carry & 0x1f) as usize]);
    }

    while out.last() == Some(&b'0') {
        out.pop();
    }
    for _ in data.iter().take_while(|&&b| b == 0) {
        out.push(b'0');
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Inverse of [`c32_encode`].
pub fn c32_decode(input: &str) -> Result<Vec<u8>, ClarityError> {
    let mut out: Vec<u8> = Vec::with_capacity(input.len() * 5 / 8 + 1);
    let mut carry: u16 = 0;
    let mut carry_bits = 0;

    for c in input.bytes().rev() {
        let v = c32_value(c).ok_or_else(|| ClarityError::InvalidAddress(input.to_string()))?;
        carry |= (v as u16) << carry_bits;
        carry_bits += 5;
        if carry_bits >= 8 {
            out.push((carry & 0xff) as u8);
            carry >>= 8;
            carry_bits -= 8;
        }
    }
    if carry_bits > 0 {
        out.push(carry as u8);
    }

    while out.last() == Some(&0) {
        out.pop();
    }
    for _ in input.bytes().take_while(|&c| c32_value(c) == Some(0)) {
        out.push(0);
    }
    out.reverse();
    Ok(out)
}

fn checksum(version: u8, hash160: &[u8]) -> [u8; 4] {
    let mut first = Sha256::new();
    first.update([version]);
    first.update(hash160);
    let second = Sha256::digest(first.finalize());
    [second[0], second[1], second[2], second[3]]
}

// ─────────────────────────────────────────────────────────────
// STANDARD PRINCIPAL
// ─────────────────────────────────────────────────────────────

/// A single account: address version + hash160.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StandardPrincipal {
    pub version: u8,
    pub hash160: [u8; 20],
}

impl StandardPrincipal {
    pub fn new(version: u8, hash160: [u8; 20]) -> Result<Self, ClarityError> {
        if version >= 32 {
            return Err(ClarityError::InvalidAddress(format!("version {}", version)));
        }
        Ok(Self { version, hash160 })
    }

    pub fn is_mainnet(&self) -> bool {
        matches!(
            self.version,
            VERSION_MAINNET_SINGLESIG | VERSION_MAINNET_MULTISIG
        )
    }
}

impl fmt::Display for StandardPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut payload = self.hash160.to_vec();
        payload.extend_from_slice(&checksum(self.version, &self.hash160));
        write!(
            f,
            "S{}{}",
            C32_ALPHABET[self.version as usize] as char,
            c32_encode(&payload)
        )
    }
}

impl FromStr for StandardPrincipal {
    type Err = ClarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ClarityError::InvalidAddress(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() < 3 || bytes[0] != b'S' {
            return Err(invalid());
        }
        let version = c32_value(bytes[1]).ok_or_else(invalid)?;
        let data = c32_decode(&s[2..])?;
        if data.len() != 24 {
            return Err(invalid());
        }
        let (hash, check) = data.split_at(20);
        if checksum(version, hash) != check {
            return Err(ClarityError::BadChecksum);
        }
        let mut hash160 = [0u8; 20];
        hash160.copy_from_slice(hash);
        Ok(Self { version, hash160 })
    }
}

impl TryFrom<String> for StandardPrincipal {
    type Error = ClarityError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<StandardPrincipal> for String {
    fn from(p: StandardPrincipal) -> Self {
        p.to_string()
    }
}

// ─────────────────────────────────────────────────────────────
// CONTRACT PRINCIPAL
// ─────────────────────────────────────────────────────────────

/// `<issuer>.<name>`, e.g. a SIP-010 token or the pool contract itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContractPrincipal {
    pub issuer: StandardPrincipal,
    pub name: String,
}

/// Contract names: `[a-zA-Z][a-zA-Z0-9_-]*`, at most 128 chars.
pub fn validate_contract_name(name: &str) -> Result<(), ClarityError> {
    let mut chars = name.chars();
    let valid = name.len() <= MAX_CONTRACT_NAME_LEN
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ClarityError::InvalidName(name.to_string()))
    }
}

impl ContractPrincipal {
    pub fn new(issuer: StandardPrincipal, name: &str) -> Result<Self, ClarityError> {
        validate_contract_name(name)?;
        Ok(Self {
            issuer,
            name: name.to_string(),
        })
    }
}

impl fmt::Display for ContractPrincipal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.issuer, self.name)
    }
}

impl FromStr for ContractPrincipal {
    type Err = ClarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (issuer, name) = s
            .split_once('.')
            .ok_or_else(|| ClarityError::InvalidAddress(s.to_string()))?;
        Self::new(issuer.parse()?, name)
    }
}

impl TryFrom<String> for ContractPrincipal {
    type Error = ClarityError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ContractPrincipal> for String {
    fn from(p: ContractPrincipal) -> Self {
        p.to_string()
    }
}

// ─────────────────────────────────────────────────────────────
// EITHER KIND
// ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrincipalData {
    Standard(StandardPrincipal),
    Contract(ContractPrincipal),
}

impl fmt::Display for PrincipalData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrincipalData::Standard(p) => fmt::Display::fmt(p, f),
            PrincipalData::Contract(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl FromStr for PrincipalData {
    type Err = ClarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains('.') {
            Ok(PrincipalData::Contract(s.parse()?))
        } else {
            Ok(PrincipalData::Standard(s.parse()?))
        }
    }
}

impl From<StandardPrincipal> for PrincipalData {
    fn from(p: StandardPrincipal) -> Self {
        PrincipalData::Standard(p)
    }
}

impl From<ContractPrincipal> for PrincipalData {
    fn from(p: ContractPrincipal) -> Self {
        PrincipalData::Contract(p)
    }
}
