//! Transaction record and conversion from a deserialized payload.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use stark_curve::{Encoded, Error, Felt};

/// Which kind of entry point a call targets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryPointType {
    #[default]
    External,
    L1Handler,
    Constructor,
}

impl EntryPointType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryPointType::External => "EXTERNAL",
            EntryPointType::L1Handler => "L1_HANDLER",
            EntryPointType::Constructor => "CONSTRUCTOR",
        }
    }
}

impl FromStr for EntryPointType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EXTERNAL" => Ok(EntryPointType::External),
            "L1_HANDLER" => Ok(EntryPointType::L1Handler),
            "CONSTRUCTOR" => Ok(EntryPointType::Constructor),
            other => Err(Error::InvalidInput(format!(
                "unknown entry point type {other:?}"
            ))),
        }
    }
}

impl fmt::Display for EntryPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction type tag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    #[default]
    InvokeFunction,
    Deploy,
    Declare,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::InvokeFunction => "INVOKE_FUNCTION",
            TransactionType::Deploy => "DEPLOY",
            TransactionType::Declare => "DECLARE",
        }
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INVOKE_FUNCTION" => Ok(TransactionType::InvokeFunction),
            "DEPLOY" => Ok(TransactionType::Deploy),
            "DECLARE" => Ok(TransactionType::Declare),
            other => Err(Error::InvalidInput(format!(
                "unknown transaction type {other:?}"
            ))),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction with every numeric field reduced to a field element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub contract_address: Felt,
    pub entry_point_selector: Felt,
    pub entry_point_type: EntryPointType,
    pub calldata: Vec<Felt>,
    /// `[r, s]` once signed.
    pub signature: Vec<Felt>,
    pub transaction_hash: Felt,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub nonce: Felt,
}

/// Transaction payload as it arrives from a client. Numbers carry their radix
/// explicitly; enum tags are plain strings checked on conversion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub contract_address: Encoded,
    pub entry_point_selector: Encoded,
    pub entry_point_type: String,
    #[serde(default)]
    pub calldata: Vec<Encoded>,
    #[serde(default)]
    pub signature: Vec<Encoded>,
    #[serde(default)]
    pub transaction_hash: Option<Encoded>,
    #[serde(default, rename = "type")]
    pub tx_type: Option<String>,
    pub nonce: Encoded,
}

fn felts(values: &[Encoded]) -> Result<Vec<Felt>, Error> {
    values.iter().map(Encoded::to_felt).collect()
}

impl TryFrom<&RawTransaction> for Transaction {
    type Error = Error;

    fn try_from(raw: &RawTransaction) -> Result<Self, Self::Error> {
        Ok(Transaction {
            contract_address: raw.contract_address.to_felt()?,
            entry_point_selector: raw.entry_point_selector.to_felt()?,
            entry_point_type: raw.entry_point_type.parse()?,
            calldata: felts(&raw.calldata)?,
            signature: felts(&raw.signature)?,
            transaction_hash: match &raw.transaction_hash {
                Some(hash) => hash.to_felt()?,
                None => Felt::ZERO,
            },
            tx_type: match &raw.tx_type {
                Some(tag) => tag.parse()?,
                None => TransactionType::default(),
            },
            nonce: raw.nonce.to_felt()?,
        })
    }
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = Error;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        Transaction::try_from(&raw)
    }
}
