//! Bare address detection.

use crate::{
    networks::{EvmAddress, NetworkAddress, StellarAddress, SvmAddress},
    types::{AddressIntent, ChainFamily, DeeplinkIntent, RawPayload},
};

/// Identify the chain family of a bare address.
///
/// Families are tried Solana, Stellar, Ethereum; the first match wins.
pub fn detect_family(input: &str) -> Option<ChainFamily> {
    let family = detect::<SvmAddress>(input)
        .or_else(|| detect::<StellarAddress>(input))
        .or_else(|| detect::<EvmAddress>(input));

    #[cfg(feature = "tracing")]
    tracing::trace!(len = input.len(), ?family, "Bare address detection");

    family
}

fn detect<A: NetworkAddress>(input: &str) -> Option<ChainFamily> {
    A::is_valid(input).then_some(A::FAMILY)
}

/// Parse a bare address of any supported family.
pub fn parse_address(input: &str) -> Option<DeeplinkIntent> {
    detect_family(input).map(|family| address_intent(family, input))
}

/// Address-only intent for an input already known to be a valid `family` address.
pub fn address_intent(family: ChainFamily, input: &str) -> DeeplinkIntent {
    DeeplinkIntent::Address(
        AddressIntent::builder()
            .chain(family)
            .address(input)
            .message(format!("{} address", family.display_name()))
            .raw(RawPayload::new(input))
            .build(),
    )
}
