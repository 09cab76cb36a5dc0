use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use stellar_strkey::ed25519::PublicKey;

use crate::{networks::NetworkAddress, types::ChainFamily};

/// A Stellar account address: a strkey-encoded ed25519 public key (`G...`).
#[derive(Clone, PartialEq, Eq)]
pub struct StellarAddress(pub PublicKey);

pub fn is_valid_stellar_address(s: &str) -> bool {
    StellarAddress::is_valid(s)
}

/// `G` followed by 55 characters of the RFC 4648 base32 alphabet.
fn has_strkey_shape(s: &str) -> bool {
    s.len() == 56
        && s.starts_with('G')
        && s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || (b'2'..=b'7').contains(&b))
}

impl From<PublicKey> for StellarAddress {
    fn from(pk: PublicKey) -> Self {
        StellarAddress(pk)
    }
}

impl FromStr for StellarAddress {
    type Err = stellar_strkey::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !has_strkey_shape(s) {
            return Err(stellar_strkey::DecodeError::Invalid);
        }
        let pk = PublicKey::from_string(s)?;
        Ok(StellarAddress(pk))
    }
}

impl Display for StellarAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for StellarAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StellarAddress({})", self)
    }
}

impl NetworkAddress for StellarAddress {
    const FAMILY: ChainFamily = ChainFamily::Stellar;
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "GC65CUPW2IMTJJY6CII7F3OBPVG4YGASEPBBLM4V3LBKX62P6LA24OFV";

    #[test]
    fn test_valid_public_keys() {
        assert!(is_valid_stellar_address(ACCOUNT));
        assert!(is_valid_stellar_address(
            "GDGU5OAPHNPU5UCLE5RDJHG7PXZFQYWKCFOEXSXNMR6KRQRI5T6XXCD7"
        ));
    }

    #[test]
    fn test_round_trip_display() {
        let addr: StellarAddress = ACCOUNT.parse().unwrap();
        assert_eq!(addr.to_string(), ACCOUNT);
        assert_eq!(format!("{addr:?}"), format!("StellarAddress({ACCOUNT})"));
    }

    #[test]
    fn test_invalid_public_keys() {
        assert!(!is_valid_stellar_address("INVALID_ADDRESS"));
        assert!(!is_valid_stellar_address(""));
        // Truncated: the checksum no longer matches.
        assert!(!is_valid_stellar_address(&ACCOUNT[..55]));
        assert!(!is_valid_stellar_address(&ACCOUNT.to_lowercase()));
        // Solana keys are Base58, not strkey.
        assert!(!is_valid_stellar_address(
            "mvines9iiHiQTysrwkJjGf2gb9Ex9jXJX8ns3qwf2kN"
        ));
    }
}
