//! # Clarity Value Codec
//!
//! Binary serialization of Clarity values exactly as the Stacks node API
//! carries them (hex strings, `0x`-prefixed).
//!
//! ## Wire Layout
//! | Prefix | Type              | Payload                                   |
//! |--------|-------------------|-------------------------------------------|
//! | `0x00` | int               | i128 big-endian                           |
//! | `0x01` | uint              | u128 big-endian                           |
//! | `0x02` | buffer            | u32 length + bytes                        |
//! | `0x03` | true              | —                                         |
//! | `0x04` | false             | —                                         |
//! | `0x05` | standard principal| version + hash160                         |
//! | `0x06` | contract principal| version + hash160 + u8 length + name      |
//! | `0x07` | (ok v)            | value                                     |
//! | `0x08` | (err v)           | value                                     |
//! | `0x09` | none              | —                                         |
//! | `0x0a` | (some v)          | value                                     |
//! | `0x0b` | list              | u32 length + values                       |
//! | `0x0c` | tuple             | u32 length + (u8 name length, name, value)|
//! | `0x0d` | string-ascii      | u32 length + bytes                        |
//! | `0x0e` | string-utf8       | u32 length + bytes                        |
//!
//! Accessors are strict: a missing tuple field or an unexpected type is an
//! error, never a silent zero.

use crate::error::ClarityError;
use crate::principal::{validate_contract_name, ContractPrincipal, PrincipalData, StandardPrincipal};
use std::collections::BTreeMap;
use std::fmt;

const TYPE_INT: u8 = 0x00;
const TYPE_UINT: u8 = 0x01;
const TYPE_BUFFER: u8 = 0x02;
const TYPE_TRUE: u8 = 0x03;
const TYPE_FALSE: u8 = 0x04;
const TYPE_STANDARD_PRINCIPAL: u8 = 0x05;
const TYPE_CONTRACT_PRINCIPAL: u8 = 0x06;
const TYPE_RESPONSE_OK: u8 = 0x07;
const TYPE_RESPONSE_ERR: u8 = 0x08;
const TYPE_NONE: u8 = 0x09;
const TYPE_SOME: u8 = 0x0a;
const TYPE_LIST: u8 = 0x0b;
const TYPE_TUPLE: u8 = 0x0c;
const TYPE_STRING_ASCII: u8 = 0x0d;
const TYPE_STRING_UTF8: u8 = 0x0e;

/// Deepest nesting accepted when decoding
pub const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClarityValue {
    Int(i128),
    UInt(u128),
    Buffer(Vec<u8>),
    Bool(bool),
    Principal(PrincipalData),
    ResponseOk(Box<ClarityValue>),
    ResponseErr(Box<ClarityValue>),
    OptionalNone,
    OptionalSome(Box<ClarityValue>),
    List(Vec<ClarityValue>),
    Tuple(BTreeMap<String, ClarityValue>),
    StringAscii(String),
    StringUtf8(String),
}

impl ClarityValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            ClarityValue::Int(_) => "int",
            ClarityValue::UInt(_) => "uint",
            ClarityValue::Buffer(_) => "buffer",
            ClarityValue::Bool(_) => "bool",
            ClarityValue::Principal(_) => "principal",
            ClarityValue::ResponseOk(_) => "ok response",
            ClarityValue::ResponseErr(_) => "err response",
            ClarityValue::OptionalNone => "none",
            ClarityValue::OptionalSome(_) => "some",
            ClarityValue::List(_) => "list",
            ClarityValue::Tuple(_) => "tuple",
            ClarityValue::StringAscii(_) => "string-ascii",
            ClarityValue::StringUtf8(_) => "string-utf8",
        }
    }

    /// Build a tuple from `(name, value)` pairs.
    pub fn tuple<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, ClarityValue)>,
        K: Into<String>,
    {
        ClarityValue::Tuple(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    // ── Strict accessors ────────────────────────────────────────

    fn mismatch(&self, expected: &'static str) -> ClarityError {
        ClarityError::TypeMismatch {
            expected,
            found: self.type_name(),
        }
    }

    pub fn expect_uint(&self) -> Result<u128, ClarityError> {
        match self {
            ClarityValue::UInt(v) => Ok(*v),
            other => Err(other.mismatch("uint")),
        }
    }

    pub fn expect_int(&self) -> Result<i128, ClarityError> {
        match self {
            ClarityValue::Int(v) => Ok(*v),
            other => Err(other.mismatch("int")),
        }
    }

    pub fn expect_bool(&self) -> Result<bool, ClarityError> {
        match self {
            ClarityValue::Bool(v) => Ok(*v),
            other => Err(other.mismatch("bool")),
        }
    }

    pub fn expect_tuple(&self) -> Result<&BTreeMap<String, ClarityValue>, ClarityError> {
        match self {
            ClarityValue::Tuple(fields) => Ok(fields),
            other => Err(other.mismatch("tuple")),
        }
    }

    /// Field `name` of a tuple value.
    pub fn field(&self, name: &str) -> Result<&ClarityValue, ClarityError> {
        self.expect_tuple()?
            .get(name)
            .ok_or_else(|| ClarityError::MissingField(name.to_string()))
    }

    /// Shorthand for `field(name)?.expect_uint()`.
    pub fn field_uint(&self, name: &str) -> Result<u128, ClarityError> {
        self.field(name)?.expect_uint()
    }

    /// `(ok v)` → `v`; `(err e)` → [`ClarityError::ErrResponse`].
    pub fn unwrap_response(&self) -> Result<&ClarityValue, ClarityError> {
        match self {
            ClarityValue::ResponseOk(inner) => Ok(inner),
            ClarityValue::ResponseErr(code) => Err(ClarityError::ErrResponse(code.to_string())),
            other => Err(other.mismatch("response")),
        }
    }

    /// `none` → `None`; `(some v)` → `Some(v)`.
    pub fn unwrap_optional(&self) -> Result<Option<&ClarityValue>, ClarityError> {
        match self {
            ClarityValue::OptionalNone => Ok(None),
            ClarityValue::OptionalSome(inner) => Ok(Some(inner)),
            other => Err(other.mismatch("optional")),
        }
    }

    // ── Hex ─────────────────────────────────────────────────────

    /// `0x`-prefixed hex of the serialized value.
    pub fn to_hex(&self) -> Result<String, ClarityError> {
        Ok(format!("0x{}", hex::encode(self.serialize()?)))
    }

    /// Parse hex with or without the `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, ClarityError> {
        let trimmed = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(trimmed).map_err(|e| ClarityError::InvalidHex(e.to_string()))?;
        Self::deserialize(&bytes)
    }

    // ── Binary ──────────────────────────────────────────────────

    /// Fails only on names the wire format cannot carry (tuple keys and
    /// contract names built by hand).
    pub fn serialize(&self) -> Result<Vec<u8>, ClarityError> {
        let mut out = Vec::new();
        self.write_to(&mut out)?;
        Ok(out)
    }

    fn write_to(&self, out: &mut Vec<u8>) -> Result<(), ClarityError> {
        match self {
            ClarityValue::Int(v) => {
                out.push(TYPE_INT);
                out.extend_from_slice(&v.to_be_bytes());
            }
            ClarityValue::UInt(v) => {
                out.push(TYPE_UINT);
                out.extend_from_slice(&v.to_be_bytes());
            }
            ClarityValue::Buffer(bytes) => {
                out.push(TYPE_BUFFER);
                write_len_prefixed(out, bytes);
            }
            ClarityValue::Bool(true) => out.push(TYPE_TRUE),
            ClarityValue::Bool(false) => out.push(TYPE_FALSE),
            ClarityValue::Principal(PrincipalData::Standard(p)) => {
                out.push(TYPE_STANDARD_PRINCIPAL);
                write_standard(out, p);
            }
            ClarityValue::Principal(PrincipalData::Contract(c)) => {
                out.push(TYPE_CONTRACT_PRINCIPAL);
                write_standard(out, &c.issuer);
                write_name(out, &c.name)?;
            }
            ClarityValue::ResponseOk(inner) => {
                out.push(TYPE_RESPONSE_OK);
                inner.write_to(out)?;
            }
            ClarityValue::ResponseErr(inner) => {
                out.push(TYPE_RESPONSE_ERR);
                inner.write_to(out)?;
            }
            ClarityValue::OptionalNone => out.push(TYPE_NONE),
            ClarityValue::OptionalSome(inner) => {
                out.push(TYPE_SOME);
                inner.write_to(out)?;
            }
            ClarityValue::List(items) => {
                out.push(TYPE_LIST);
                out.extend_from_slice(&(items.len() as u32).to_be_bytes());
                for item in items {
                    item.write_to(out)?;
                }
            }
            ClarityValue::Tuple(fields) => {
                // BTreeMap iteration order is the sorted order Clarity requires
                out.push(TYPE_TUPLE);
                out.extend_from_slice(&(fields.len() as u32).to_be_bytes());
                for (name, value) in fields {
                    write_name(out, name)?;
                    value.write_to(out)?;
                }
            }
            ClarityValue::StringAscii(s) => {
                out.push(TYPE_STRING_ASCII);
                write_len_prefixed(out, s.as_bytes());
            }
            ClarityValue::StringUtf8(s) => {
                out.push(TYPE_STRING_UTF8);
                write_len_prefixed(out, s.as_bytes());
            }
        }
        Ok(())
    }

    /// Decode exactly one value; trailing bytes are an error.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, ClarityError> {
        let mut reader = Reader { bytes, pos: 0 };
        let value = reader.read_value(0)?;
        let rest = bytes.len() - reader.pos;
        if rest > 0 {
            return Err(ClarityError::TrailingBytes(rest));
        }
        Ok(value)
    }
}

fn write_len_prefixed(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
    out.extend_from_slice(bytes);
}

/// One length byte, then the name. Names obey the contract-name rules,
/// which also keeps them under 256 bytes.
fn write_name(out: &mut Vec<u8>, name: &str) -> Result<(), ClarityError> {
    validate_contract_name(name)?;
    out.push(name.len() as u8);
    out.extend_from_slice(name.as_bytes());
    Ok(())
}

fn write_standard(out: &mut Vec<u8>, p: &StandardPrincipal) {
    out.push(p.version);
    out.extend_from_slice(&p.hash160);
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8], ClarityError> {
        let end = self.pos.checked_add(n).ok_or(ClarityError::UnexpectedEnd)?;
        let slice = self
            .bytes
            .get(self.pos..end)
            .ok_or(ClarityError::UnexpectedEnd)?;
        self.pos = end;
        Ok(slice)
    }

    fn read_u8(&mut self) -> Result<u8, ClarityError> {
        Ok(self.take(1)?[0])
    }

    fn read_u32(&mut self) -> Result<u32, ClarityError> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.take(4)?);
        Ok(u32::from_be_bytes(buf))
    }

    fn read_16(&mut self) -> Result<[u8; 16], ClarityError> {
        let mut buf = [0u8; 16];
        buf.copy_from_slice(self.take(16)?);
        Ok(buf)
    }

    fn read_len_prefixed(&mut self) -> Result<&'a [u8], ClarityError> {
        let len = self.read_u32()? as usize;
        self.take(len)
    }

    fn read_standard(&mut self) -> Result<StandardPrincipal, ClarityError> {
        let version = self.read_u8()?;
        let mut hash160 = [0u8; 20];
        hash160.copy_from_slice(self.take(20)?);
        StandardPrincipal::new(version, hash160)
    }

    fn read_name(&mut self) -> Result<String, ClarityError> {
        let len = self.read_u8()? as usize;
        let raw = self.take(len)?;
        String::from_utf8(raw.to_vec()).map_err(|_| ClarityError::InvalidUtf8)
    }

    fn read_value(&mut self, depth: usize) -> Result<ClarityValue, ClarityError> {
        if depth > MAX_DEPTH {
            return Err(ClarityError::DepthExceeded);
        }
        let prefix = self.read_u8()?;
        let value = match prefix {
            TYPE_INT => ClarityValue::Int(i128::from_be_bytes(self.read_16()?)),
            TYPE_UINT => ClarityValue::UInt(u128::from_be_bytes(self.read_16()?)),
            TYPE_BUFFER => ClarityValue::Buffer(self.read_len_prefixed()?.to_vec()),
            TYPE_TRUE => ClarityValue::Bool(true),
            TYPE_FALSE => ClarityValue::Bool(false),
            TYPE_STANDARD_PRINCIPAL => {
                ClarityValue::Principal(PrincipalData::Standard(self.read_standard()?))
            }
            TYPE_CONTRACT_PRINCIPAL => {
                let issuer = self.read_standard()?;
                let name = self.read_name()?;
                validate_contract_name(&name)?;
                ClarityValue::Principal(PrincipalData::Contract(ContractPrincipal { issuer, name }))
            }
            TYPE_RESPONSE_OK => ClarityValue::ResponseOk(Box::new(self.read_value(depth + 1)?)),
            TYPE_RESPONSE_ERR => ClarityValue::ResponseErr(Box::new(self.read_value(depth + 1)?)),
            TYPE_NONE => ClarityValue::OptionalNone,
            TYPE_SOME => ClarityValue::OptionalSome(Box::new(self.read_value(depth + 1)?)),
            TYPE_LIST => {
                let len = self.read_u32()? as usize;
                // Every element takes at least one byte
                if len > self.bytes.len() - self.pos {
                    return Err(ClarityError::UnexpectedEnd);
                }
                let mut items = Vec::with_capacity(len);
                for _ in 0..len {
                    items.push(self.read_value(depth + 1)?);
                }
                ClarityValue::List(items)
            }
            TYPE_TUPLE => {
                let len = self.read_u32()? as usize;
                let mut fields = BTreeMap::new();
                for _ in 0..len {
                    let name = self.read_name()?;
                    validate_contract_name(&name)?;
                    let value = self.read_value(depth + 1)?;
                    if fields.insert(name.clone(), value).is_some() {
                        return Err(ClarityError::DuplicateKey(name));
                    }
                }
                ClarityValue::Tuple(fields)
            }
            TYPE_STRING_ASCII => {
                let raw = self.read_len_prefixed()?;
                if !raw.is_ascii() {
                    return Err(ClarityError::NotAscii);
                }
                ClarityValue::StringAscii(String::from_utf8_lossy(raw).into_owned())
            }
            TYPE_STRING_UTF8 => {
                let raw = self.read_len_prefixed()?;
                ClarityValue::StringUtf8(
                    String::from_utf8(raw.to_vec()).map_err(|_| ClarityError::InvalidUtf8)?,
                )
            }
            other => return Err(ClarityError::UnknownTypePrefix(other)),
        };
        Ok(value)
    }
}

impl From<u128> for ClarityValue {
    fn from(v: u128) -> Self {
        ClarityValue::UInt(v)
    }
}

impl From<bool> for ClarityValue {
    fn from(v: bool) -> Self {
        ClarityValue::Bool(v)
    }
}

impl From<StandardPrincipal> for ClarityValue {
    fn from(p: StandardPrincipal) -> Self {
        ClarityValue::Principal(PrincipalData::Standard(p))
    }
}

impl From<ContractPrincipal> for ClarityValue {
    fn from(p: ContractPrincipal) -> Self {
        ClarityValue::Principal(PrincipalData::Contract(p))
    }
}

impl From<PrincipalData> for ClarityValue {
    fn from(p: PrincipalData) -> Self {
        ClarityValue::Principal(p)
    }
}

/// Clarity source representation, e.g. `(ok {reserve0: u100})`.
impl fmt::Display for ClarityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClarityValue::Int(v) => write!(f, "{}", v),
            ClarityValue::UInt(v) => write!(f, "u{}", v),
            ClarityValue::Buffer(b) => write!(f, "0x{}", hex::encode(b)),
            ClarityValue::Bool(b) => write!(f, "{}", b),
            ClarityValue::Principal(p) => write!(f, "'{}", p),
            ClarityValue::ResponseOk(v) => write!(f, "(ok {})", v),
            ClarityValue::ResponseErr(v) => write!(f, "(err {})", v),
            ClarityValue::OptionalNone => write!(f, "none"),
            ClarityValue::OptionalSome(v) => write!(f, "(some {})", v),
            ClarityValue::List(items) => {
                write!(f, "(list")?;
                for item in items {
                    write!(f, " {}", item)?;
                }
                write!(f, ")")
            }
            ClarityValue::Tuple(fields) => {
                write!(f, "{{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                write!(f, "}}")
            }
            ClarityValue::StringAscii(s) => write!(f, "{:?}", s),
            ClarityValue::StringUtf8(s) => write!(f, "u{:?}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployer() -> StandardPrincipal {
        "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM".parse().unwrap()
    }

    #[test]
    fn test_uint_wire_format() {
        assert_eq!(
            ClarityValue::UInt(1_000_000).to_hex().unwrap(),
            "0x01000000000000000000000000000f4240"
        );
    }

    #[test]
    fn test_int_negative_wire_format() {
        assert_eq!(
            ClarityValue::Int(-1).to_hex().unwrap(),
            "0x00ffffffffffffffffffffffffffffffff"
        );
    }

    #[test]
    fn test_standard_principal_wire_format() {
        assert_eq!(
            ClarityValue::from(deployer()).to_hex().unwrap(),
            "0x051a6d78de7b0625dfbfc16c3a8a5735f6dc3dc3f2ce"
        );
    }

    #[test]
    fn test_contract_principal_wire_format() {
        let c = ContractPrincipal::new(deployer(), "abc").unwrap();
        assert_eq!(
            ClarityValue::from(c).to_hex().unwrap(),
            "0x061a6d78de7b0625dfbfc16c3a8a5735f6dc3dc3f2ce03616263"
        );
    }

    #[test]
    fn test_tuple_keys_sorted_on_wire() {
        let v = ClarityValue::tuple([
            ("b", ClarityValue::Bool(true)),
            ("a", ClarityValue::Bool(false)),
        ]);
        assert_eq!(v.to_hex().unwrap(), "0x0c00000002016104016203");
    }

    #[test]
    fn test_pool_info_response_decodes() {
        let value = ClarityValue::ResponseOk(Box::new(ClarityValue::tuple([
            ("reserve0", ClarityValue::UInt(100)),
            ("reserve1", ClarityValue::UInt(400)),
            ("total-supply", ClarityValue::UInt(200)),
        ])));
        let decoded = ClarityValue::from_hex(&value.to_hex().unwrap()).unwrap();
        assert_eq!(decoded, value);
        match decoded {
            ClarityValue::ResponseOk(inner) => {
                assert_eq!(inner.field_uint("reserve1").unwrap(), 400);
                assert_eq!(inner.field_uint("total-supply").unwrap(), 200);
            }
            other => panic!("expected ok response, got {}", other),
        }
    }

    #[test]
    fn test_missing_field_fails_loudly() {
        let v = ClarityValue::tuple([("reserve0", ClarityValue::UInt(1))]);
        assert_eq!(
            v.field_uint("reserve1"),
            Err(ClarityError::MissingField("reserve1".into()))
        );
    }

    #[test]
    fn test_type_mismatch_reported() {
        let v = ClarityValue::tuple([("reserve0", ClarityValue::Int(1))]);
        assert_eq!(
            v.field_uint("reserve0"),
            Err(ClarityError::TypeMismatch {
                expected: "uint",
                found: "int"
            })
        );
        assert!(ClarityValue::UInt(1).field("x").is_err());
    }

    #[test]
    fn test_unwrap_response_and_optional() {
        let ok = ClarityValue::ResponseOk(Box::new(ClarityValue::UInt(9)));
        assert_eq!(ok.unwrap_response().unwrap(), &ClarityValue::UInt(9));
        let err = ClarityValue::ResponseErr(Box::new(ClarityValue::UInt(104)));
        assert_eq!(
            err.unwrap_response(),
            Err(ClarityError::ErrResponse("u104".into()))
        );
        assert_eq!(ClarityValue::OptionalNone.unwrap_optional().unwrap(), None);
        let some = ClarityValue::OptionalSome(Box::new(ClarityValue::Bool(true)));
        assert_eq!(some.unwrap_optional().unwrap(), Some(&ClarityValue::Bool(true)));
        assert!(ClarityValue::UInt(1).unwrap_optional().is_err());
    }

    #[test]
    fn test_hex_prefix_optional() {
        let a = ClarityValue::from_hex("0x03").unwrap();
        let b = ClarityValue::from_hex("03").unwrap();
        assert_eq!(a, ClarityValue::Bool(true));
        assert_eq!(a, b);
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(
            ClarityValue::from_hex("0x0300"),
            Err(ClarityError::TrailingBytes(1))
        );
        assert_eq!(
            ClarityValue::from_hex("0x0100"),
            Err(ClarityError::UnexpectedEnd)
        );
        assert_eq!(
            ClarityValue::from_hex("0x7f"),
            Err(ClarityError::UnknownTypePrefix(0x7f))
        );
        assert!(matches!(
            ClarityValue::from_hex("0xzz"),
            Err(ClarityError::InvalidHex(_))
        ));
        assert_eq!(
            ClarityValue::from_hex("0x0d0000000180"),
            Err(ClarityError::NotAscii)
        );
    }

    #[test]
    fn test_huge_list_length_rejected_without_allocating() {
        assert_eq!(
            ClarityValue::from_hex("0x0bffffffff"),
            Err(ClarityError::UnexpectedEnd)
        );
    }

    #[test]
    fn test_unencodable_names_rejected() {
        let long_key = ClarityValue::tuple([("k".repeat(300), ClarityValue::Bool(true))]);
        assert!(matches!(long_key.serialize(), Err(ClarityError::InvalidName(_))));

        let empty_key = ClarityValue::tuple([("", ClarityValue::Bool(true))]);
        assert_eq!(empty_key.to_hex(), Err(ClarityError::InvalidName(String::new())));

        let bad_contract = ClarityValue::from(ContractPrincipal {
            issuer: deployer(),
            name: "not a name".to_string(),
        });
        assert!(bad_contract.to_hex().is_err());

        // nested inside a response
        let nested = ClarityValue::ResponseOk(Box::new(empty_key));
        assert!(nested.serialize().is_err());
    }

    #[test]
    fn test_tuple_key_checks_on_decode() {
        // {"": true}
        assert_eq!(
            ClarityValue::from_hex("0x0c000000010003"),
            Err(ClarityError::InvalidName(String::new()))
        );
        // {a: true, a: false}
        assert_eq!(
            ClarityValue::from_hex("0x0c0000000201610301610004"),
            Err(ClarityError::DuplicateKey("a".to_string()))
        );
        // {1a: true}
        assert!(matches!(
            ClarityValue::from_hex("0x0c0000000102316103"),
            Err(ClarityError::InvalidName(_))
        ));
    }

    #[test]
    fn test_depth_limit() {
        let mut bytes = vec![TYPE_SOME; MAX_DEPTH + 2];
        bytes.push(TYPE_NONE);
        assert_eq!(
            ClarityValue::deserialize(&bytes),
            Err(ClarityError::DepthExceeded)
        );
    }

    #[test]
    fn test_display_repr() {
        let v = ClarityValue::ResponseErr(Box::new(ClarityValue::UInt(102)));
        assert_eq!(v.to_string(), "(err u102)");
        let t = ClarityValue::tuple([
            ("liquidity", ClarityValue::UInt(5)),
            ("ok", ClarityValue::Bool(true)),
        ]);
        assert_eq!(t.to_string(), "{liquidity: u5, ok: true}");
        assert_eq!(
            ClarityValue::StringUtf8("hé".into()).to_string(),
            "u\"hé\""
        );
    }
}
