//! Miscellaneous common types used throughout the intent schema.

use std::fmt::Display;

use bon::Builder;
use serde::{Deserialize, Serialize};

/// Represents a key-value mapping with `String` keys.
///
/// Ordered so that serialized intents are byte-for-byte reproducible.
pub type Record<V> = std::collections::BTreeMap<String, V>;

/// The chain families with a dedicated address validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainFamily {
    Ethereum,
    Solana,
    Stellar,
}

impl ChainFamily {
    /// Human-readable name of the family, e.g. `"Stellar"`.
    pub fn display_name(&self) -> &'static str {
        match self {
            ChainFamily::Ethereum => "Ethereum",
            ChainFamily::Solana => "Solana",
            ChainFamily::Stellar => "Stellar",
        }
    }
}

impl Display for ChainFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A canonicalized, lower-case operation token such as `pay`, `tx` or `transfer`.
///
/// Dialects are free to introduce their own operations (EIP-681 function names
/// end up here), so this is an open set rather than an enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operation(String);

impl Operation {
    pub const PAY: &'static str = "pay";
    pub const TX: &'static str = "tx";
    pub const TRANSFER: &'static str = "transfer";
    pub const TRANSACTION: &'static str = "transaction";

    pub fn new(op: impl AsRef<str>) -> Self {
        Operation(op.as_ref().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Operation {
    fn from(value: &str) -> Self {
        Operation::new(value)
    }
}

impl PartialEq<&str> for Operation {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Operation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Operation::new(s))
    }
}

/// Asset identity: a token contract (EVM / SPL mint) or a Stellar code + issuer pair.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub issuer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub contract: Option<String>,
}

impl AssetInfo {
    /// Short label for summaries: the asset code, falling back to the contract.
    pub fn label(&self) -> Option<&str> {
        self.code.as_deref().or(self.contract.as_deref())
    }
}

/// Gas / fee hints carried by a payment request.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub gas_limit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub gas_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub max_fee_per_gas: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub max_priority_fee_per_gas: Option<String>,
}

impl FeeInfo {
    pub fn is_empty(&self) -> bool {
        self.gas_limit.is_none()
            && self.gas_price.is_none()
            && self.max_fee_per_gas.is_none()
            && self.max_priority_fee_per_gas.is_none()
    }
}

/// Raw payloads retained from the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPayload {
    /// The exact original input.
    pub data: String,
    /// A signed Stellar transaction envelope, carried verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xdr: Option<String>,
}

impl RawPayload {
    pub fn new(data: impl Into<String>) -> Self {
        RawPayload {
            data: data.into(),
            xdr: None,
        }
    }
}
