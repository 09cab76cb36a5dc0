//! Per-family address validators.
//!
//! Each family exposes a typed address newtype implementing [`NetworkAddress`]
//! plus a plain `is_valid_*_address` predicate used by the dispatcher.

use std::{fmt::Display, str::FromStr};

use crate::types::ChainFamily;

pub mod evm;
pub mod stellar;
pub mod svm;

pub use evm::{EvmAddress, is_valid_ethereum_address};
pub use stellar::{StellarAddress, is_valid_stellar_address};
pub use svm::{SvmAddress, is_valid_solana_address};

/// Network-specific address type.
pub trait NetworkAddress: FromStr + Display {
    /// The chain family this address belongs to.
    const FAMILY: ChainFamily;

    /// Whether `s` is a syntactically valid address of this family.
    fn is_valid(s: &str) -> bool {
        s.parse::<Self>().is_ok()
    }
}
