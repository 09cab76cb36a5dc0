//! The normalized [`DeeplinkIntent`] record and its per-dialect variants.
//!
//! Every variant keeps the verbatim input in `raw.data`. Fields that a dialect
//! does not define are simply absent: optional fields are skipped when `None`
//! and `extra_params` is skipped when empty, so no field is ever `null`.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    types::{AmountLiteral, AssetInfo, ChainFamily, FeeInfo, Operation, RawPayload, Record},
};

/// Prefix of every diagnostic message attached to a recognized-but-malformed intent.
pub const ERROR_PREFIX: &str = "Error: ";

/// A payment intent parsed from a deeplink, URI, bare address or website link.
///
/// ```
/// use deeplink_core::types::{AddressIntent, ChainFamily, DeeplinkIntent, RawPayload};
///
/// let intent = DeeplinkIntent::Address(
///     AddressIntent::builder()
///         .chain(ChainFamily::Solana)
///         .address("mvines9iiHiQTysrwkJjGf2gb9Ex9jXJX8ns3qwf2kN")
///         .message("Solana address")
///         .raw(RawPayload::new("mvines9iiHiQTysrwkJjGf2gb9Ex9jXJX8ns3qwf2kN"))
///         .build(),
/// );
///
/// let json = serde_json::to_value(&intent).unwrap();
/// assert_eq!(json["type"], "address");
/// assert_eq!(json["chain"], "solana");
/// assert!(json.get("operation").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeeplinkIntent {
    /// EIP-681 payment or contract-call request.
    Ethereum(EthereumIntent),
    /// Solana Pay transfer or transaction request.
    Solana(SolanaIntent),
    /// SEP-0007 payment or transaction request.
    Stellar(StellarIntent),
    /// A bare address with no operation attached.
    Address(AddressIntent),
    /// An `http(s)` link passed through untouched.
    Website(WebsiteIntent),
    /// A chain without a dedicated parser.
    GenericBlockchain(BlockchainIntent),
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthereumIntent {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub operation: Option<Operation>,

    /// Effective recipient (the `address` parameter wins over the URI target).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub amount: Option<AmountLiteral>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<FeeInfo>,

    #[builder(into)]
    pub message: String,

    pub raw: RawPayload,

    #[serde(default, skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    #[builder(default)]
    pub extra_params: Record<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StellarIntent {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub operation: Option<Operation>,

    /// Payment destination (strkey), for `pay` requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub amount: Option<AmountLiteral>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub memo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub memo_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub callback: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub network_passphrase: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub origin_domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub signature: Option<String>,

    #[builder(into)]
    pub message: String,

    pub raw: RawPayload,

    #[serde(default, skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    #[builder(default)]
    pub extra_params: Record<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolanaIntent {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub operation: Option<Operation>,

    /// Transfer recipient. Omitted, never filled with an invalid value.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub amount: Option<AmountLiteral>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub memo: Option<String>,

    /// Transaction-request endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub callback: Option<String>,

    /// The Solana Pay `label`.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub origin_domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub message: Option<String>,

    pub raw: RawPayload,

    #[serde(default, skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    #[builder(default)]
    pub extra_params: Record<String>,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressIntent {
    pub chain: ChainFamily,

    #[builder(into)]
    pub address: String,

    #[builder(into)]
    pub message: String,

    pub raw: RawPayload,
}

#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteIntent {
    #[builder(into)]
    pub url: String,

    pub raw: RawPayload,
}

/// The full shared field set, for chains without a dedicated variant.
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainIntent {
    /// Free-form chain name, e.g. `"bitcoin"`.
    #[builder(into)]
    pub chain: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub operation: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub amount: Option<AmountLiteral>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub memo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub memo_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub chain_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub network_passphrase: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub cluster: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub callback: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub origin_domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub signature: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<FeeInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub message: Option<String>,

    pub raw: RawPayload,

    #[serde(default, skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    #[builder(default)]
    pub extra_params: Record<String>,
}

impl DeeplinkIntent {
    /// The serialized `type` tag of this intent.
    pub fn kind(&self) -> &'static str {
        match self {
            DeeplinkIntent::Ethereum(_) => "ethereum",
            DeeplinkIntent::Solana(_) => "solana",
            DeeplinkIntent::Stellar(_) => "stellar",
            DeeplinkIntent::Address(_) => "address",
            DeeplinkIntent::Website(_) => "website",
            DeeplinkIntent::GenericBlockchain(_) => "generic_blockchain",
        }
    }

    pub fn raw(&self) -> &RawPayload {
        match self {
            DeeplinkIntent::Ethereum(i) => &i.raw,
            DeeplinkIntent::Solana(i) => &i.raw,
            DeeplinkIntent::Stellar(i) => &i.raw,
            DeeplinkIntent::Address(i) => &i.raw,
            DeeplinkIntent::Website(i) => &i.raw,
            DeeplinkIntent::GenericBlockchain(i) => &i.raw,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            DeeplinkIntent::Ethereum(i) => Some(&i.message),
            DeeplinkIntent::Solana(i) => i.message.as_deref(),
            DeeplinkIntent::Stellar(i) => Some(&i.message),
            DeeplinkIntent::Address(i) => Some(&i.message),
            DeeplinkIntent::Website(_) => None,
            DeeplinkIntent::GenericBlockchain(i) => i.message.as_deref(),
        }
    }

    pub fn operation(&self) -> Option<&Operation> {
        match self {
            DeeplinkIntent::Ethereum(i) => i.operation.as_ref(),
            DeeplinkIntent::Solana(i) => i.operation.as_ref(),
            DeeplinkIntent::Stellar(i) => i.operation.as_ref(),
            DeeplinkIntent::GenericBlockchain(i) => i.operation.as_ref(),
            DeeplinkIntent::Address(_) | DeeplinkIntent::Website(_) => None,
        }
    }

    /// The recipient / counterparty address, if the intent carries one.
    pub fn address(&self) -> Option<&str> {
        match self {
            DeeplinkIntent::Ethereum(i) => i.address.as_deref(),
            DeeplinkIntent::Solana(i) => i.address.as_deref(),
            DeeplinkIntent::Stellar(i) => i.address.as_deref(),
            DeeplinkIntent::Address(i) => Some(&i.address),
            DeeplinkIntent::GenericBlockchain(i) => i.address.as_deref(),
            DeeplinkIntent::Website(_) => None,
        }
    }

    pub fn amount(&self) -> Option<&AmountLiteral> {
        match self {
            DeeplinkIntent::Ethereum(i) => i.amount.as_ref(),
            DeeplinkIntent::Solana(i) => i.amount.as_ref(),
            DeeplinkIntent::Stellar(i) => i.amount.as_ref(),
            DeeplinkIntent::GenericBlockchain(i) => i.amount.as_ref(),
            DeeplinkIntent::Address(_) | DeeplinkIntent::Website(_) => None,
        }
    }

    pub fn extra_params(&self) -> Option<&Record<String>> {
        match self {
            DeeplinkIntent::Ethereum(i) => Some(&i.extra_params),
            DeeplinkIntent::Solana(i) => Some(&i.extra_params),
            DeeplinkIntent::Stellar(i) => Some(&i.extra_params),
            DeeplinkIntent::GenericBlockchain(i) => Some(&i.extra_params),
            DeeplinkIntent::Address(_) | DeeplinkIntent::Website(_) => None,
        }
    }

    /// Whether a scheme was recognized but the request itself is unusable.
    ///
    /// Ethereum and Stellar report this through an [`ERROR_PREFIX`]ed message;
    /// Solana through the absence of both a recipient and a callback.
    pub fn is_malformed(&self) -> bool {
        let diagnostic = |message: &str| message.starts_with(ERROR_PREFIX);
        match self {
            DeeplinkIntent::Ethereum(i) => diagnostic(&i.message),
            DeeplinkIntent::Stellar(i) => diagnostic(&i.message),
            DeeplinkIntent::Solana(i) => i.address.is_none() && i.callback.is_none(),
            DeeplinkIntent::GenericBlockchain(i) => i.message.as_deref().is_some_and(diagnostic),
            DeeplinkIntent::Address(_) | DeeplinkIntent::Website(_) => false,
        }
    }

    /// Serialize this intent to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
