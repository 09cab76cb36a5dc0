use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{networks::NetworkAddress, types::ChainFamily};

/// Errors produced while validating an EVM address.
#[derive(Debug, thiserror::Error)]
pub enum EvmAddressError {
    #[error("expected `0x` followed by 40 hex digits")]
    InvalidShape,
    #[error(transparent)]
    Address(#[from] alloy_primitives::AddressError),
}

/// An EVM address: `0x` + 40 hex digits.
///
/// All-lowercase and all-uppercase spellings are accepted as-is; mixed case is
/// treated as an EIP-55 checksum and must match.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvmAddress(pub alloy_primitives::Address);

/// Whether `s` has the shape of an EVM address, without checking any checksum.
///
/// This is the test EIP-681 applies to URI targets and `address` parameters.
pub fn has_address_shape(s: &str) -> bool {
    s.strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

pub fn is_valid_ethereum_address(s: &str) -> bool {
    EvmAddress::is_valid(s)
}

impl From<alloy_primitives::Address> for EvmAddress {
    fn from(addr: alloy_primitives::Address) -> Self {
        EvmAddress(addr)
    }
}

impl FromStr for EvmAddress {
    type Err = EvmAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !has_address_shape(s) {
            return Err(EvmAddressError::InvalidShape);
        }

        let hex = &s[2..];
        let mixed_case = hex.bytes().any(|b| b.is_ascii_lowercase())
            && hex.bytes().any(|b| b.is_ascii_uppercase());

        let addr = if mixed_case {
            alloy_primitives::Address::parse_checksummed(s, None)?
        } else {
            alloy_primitives::Address::from_str(s).map_err(alloy_primitives::AddressError::from)?
        };
        Ok(EvmAddress(addr))
    }
}

impl Display for EvmAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for EvmAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EvmAddress({})", self.0)
    }
}

impl Serialize for EvmAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EvmAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EvmAddress::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl NetworkAddress for EvmAddress {
    const FAMILY: ChainFamily = ChainFamily::Ethereum;
}

#[cfg(test)]
mod tests {
    use super::*;

    // EIP-55 reference vectors.
    const CHECKSUMMED: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
    const CHECKSUMMED_2: &str = "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359";

    #[test]
    fn test_checksummed_addresses() {
        assert!(is_valid_ethereum_address(CHECKSUMMED));
        assert!(is_valid_ethereum_address(CHECKSUMMED_2));
    }

    #[test]
    fn test_single_case_addresses_skip_checksum() {
        assert!(is_valid_ethereum_address(&CHECKSUMMED.to_lowercase()));
        assert!(is_valid_ethereum_address(&format!(
            "0x{}",
            CHECKSUMMED[2..].to_uppercase()
        )));
    }

    #[test]
    fn test_bad_checksum_is_rejected() {
        let tampered = "0x5AAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert!(matches!(
            tampered.parse::<EvmAddress>(),
            Err(EvmAddressError::Address(_))
        ));
        // Still the right shape for an EIP-681 target.
        assert!(has_address_shape(tampered));
    }

    #[test]
    fn test_shape() {
        assert!(!has_address_shape("0x1234"));
        assert!(!has_address_shape("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(!has_address_shape("0X5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(!has_address_shape("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeZ"));
        assert!(matches!(
            "0xabc".parse::<EvmAddress>(),
            Err(EvmAddressError::InvalidShape)
        ));
    }

    #[test]
    fn test_display_is_checksummed() {
        let addr: EvmAddress = CHECKSUMMED.to_lowercase().parse().unwrap();
        assert_eq!(addr.to_string(), CHECKSUMMED);
        assert_eq!(
            serde_json::to_value(addr).unwrap(),
            serde_json::json!(CHECKSUMMED)
        );
    }
}
