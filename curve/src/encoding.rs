//! Text and byte conversions used at the crate boundaries.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::field::{FieldParams, Fp};
use crate::Felt;

/// An integer carried as text, with its radix stated explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoded {
    Hex(String),
    Decimal(String),
}

impl Encoded {
    pub fn hex(value: impl Into<String>) -> Self {
        Encoded::Hex(value.into())
    }

    pub fn decimal(value: impl Into<String>) -> Self {
        Encoded::Decimal(value.into())
    }

    pub fn to_biguint(&self) -> Result<BigUint, Error> {
        match self {
            Encoded::Hex(text) => hex_to_biguint(text),
            Encoded::Decimal(text) => decimal_to_biguint(text),
        }
    }

    pub fn to_felt(&self) -> Result<Felt, Error> {
        felt_from_biguint(&self.to_biguint()?)
    }
}

impl<P: FieldParams> From<&Fp<P>> for Encoded {
    fn from(value: &Fp<P>) -> Self {
        Encoded::Hex(value.to_string())
    }
}

fn parse_digits(digits: &str, radix: u32, original: &str) -> Result<BigUint, Error> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(Error::InvalidInput(format!(
            "not a base-{radix} integer: {original:?}"
        )));
    }
    BigUint::parse_bytes(digits.as_bytes(), radix)
        .ok_or_else(|| Error::InvalidInput(format!("not a base-{radix} integer: {original:?}")))
}

fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text)
}

/// Parses a hex integer, with or without a `0x` prefix.
pub fn hex_to_biguint(text: &str) -> Result<BigUint, Error> {
    parse_digits(strip_hex_prefix(text), 16, text)
}

pub fn decimal_to_biguint(text: &str) -> Result<BigUint, Error> {
    parse_digits(text, 10, text)
}

/// Decodes a hex string (optional `0x` prefix) into bytes.
pub fn hex_to_bytes(text: &str) -> Result<Vec<u8>, Error> {
    let digits = strip_hex_prefix(text);
    if digits.len() % 2 != 0 {
        return Err(Error::InvalidInput(format!(
            "hex string has odd length {}",
            digits.len()
        )));
    }
    // `from_str_radix` accepts a leading sign, so check every digit first.
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(Error::InvalidInput(format!(
            "invalid hex digit {bad:?} in {text:?}"
        )));
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| {
                Error::InvalidInput(format!("invalid hex byte {:?}", &digits[i..i + 2]))
            })
        })
        .collect()
}

pub fn felt_from_biguint(value: &BigUint) -> Result<Felt, Error> {
    Felt::from_biguint(value)
        .ok_or_else(|| Error::InvalidInput(format!("{value:#x} is not below the field modulus")))
}

pub fn felt_from_hex(text: &str) -> Result<Felt, Error> {
    felt_from_biguint(&hex_to_biguint(text)?)
}

pub fn felt_from_decimal(text: &str) -> Result<Felt, Error> {
    felt_from_biguint(&decimal_to_biguint(text)?)
}
