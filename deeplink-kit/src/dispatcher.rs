//! Ordered scheme detection.
//!
//! For details, see the [`Dispatcher`] struct documentation.

use bon::Builder;

use crate::{
    errors::{Error, Result},
    networks::{
        NetworkAddress, evm::EvmAddress, stellar::StellarAddress, svm::SvmAddress,
    },
    schemes::{
        EthereumScheme, SolanaScheme, StellarScheme, UriScheme, address::address_intent,
        website::{is_website, parse_website},
    },
    types::{ChainFamily, DeeplinkIntent},
};

/// A single (predicate, parser) rule of the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detector {
    SolanaAddress,
    StellarAddress,
    EthereumAddress,
    EthereumUri,
    StellarUri,
    SolanaUri,
    Website,
}

impl Detector {
    /// Every detector, highest priority first.
    pub const PRIORITY: [Detector; 7] = [
        Detector::SolanaAddress,
        Detector::StellarAddress,
        Detector::EthereumAddress,
        Detector::EthereumUri,
        Detector::StellarUri,
        Detector::SolanaUri,
        Detector::Website,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Detector::SolanaAddress => "solana_address",
            Detector::StellarAddress => "stellar_address",
            Detector::EthereumAddress => "ethereum_address",
            Detector::EthereumUri => "ethereum_uri",
            Detector::StellarUri => "stellar_uri",
            Detector::SolanaUri => "solana_uri",
            Detector::Website => "website",
        }
    }

    /// The chain family this detector belongs to, if any.
    pub fn family(&self) -> Option<ChainFamily> {
        match self {
            Detector::SolanaAddress | Detector::SolanaUri => Some(ChainFamily::Solana),
            Detector::StellarAddress | Detector::StellarUri => Some(ChainFamily::Stellar),
            Detector::EthereumAddress | Detector::EthereumUri => Some(ChainFamily::Ethereum),
            Detector::Website => None,
        }
    }

    pub fn is_bare_address(&self) -> bool {
        matches!(
            self,
            Detector::SolanaAddress | Detector::StellarAddress | Detector::EthereumAddress
        )
    }

    /// Whether this detector claims `input`.
    pub fn matches(&self, input: &str) -> bool {
        match self {
            Detector::SolanaAddress => SvmAddress::is_valid(input),
            Detector::StellarAddress => StellarAddress::is_valid(input),
            Detector::EthereumAddress => EvmAddress::is_valid(input),
            Detector::EthereumUri => EthereumScheme::matches(input),
            Detector::StellarUri => StellarScheme::matches(input),
            Detector::SolanaUri => SolanaScheme::matches(input),
            Detector::Website => is_website(input),
        }
    }

    /// Run this detector's parser. `None` means the detector does not claim `input`.
    pub fn parse(&self, input: &str) -> Option<DeeplinkIntent> {
        match self {
            Detector::SolanaAddress => bare::<SvmAddress>(input),
            Detector::StellarAddress => bare::<StellarAddress>(input),
            Detector::EthereumAddress => bare::<EvmAddress>(input),
            Detector::EthereumUri => EthereumScheme::parse(input),
            Detector::StellarUri => StellarScheme::parse(input),
            Detector::SolanaUri => SolanaScheme::parse(input),
            Detector::Website => parse_website(input),
        }
    }
}

fn bare<A: NetworkAddress>(input: &str) -> Option<DeeplinkIntent> {
    A::is_valid(input).then(|| address_intent(A::FAMILY, input))
}

/// Turns raw deeplink strings into normalized intents.
///
/// Detectors run in the fixed order of [`Detector::PRIORITY`]: bare Solana,
/// Stellar and Ethereum addresses, then `ethereum:`, `web+stellar:` and
/// `solana:` URIs, then `http(s)` links. The first detector that claims the
/// input produces the result. A scheme whose prefix matches always returns an
/// intent, even when its body is malformed; see [`DeeplinkIntent::is_malformed`].
///
/// Families can be switched off through the builder; disabling a family
/// removes both its bare-address and its URI detector.
///
/// ```
/// use deeplink_kit::{Dispatcher, errors::Error};
///
/// let dispatcher = Dispatcher::builder().website(false).build();
/// assert!(matches!(
///     dispatcher.parse("https://example.com"),
///     Err(Error::UnrecognizedFormat)
/// ));
/// ```
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatcher {
    /// Detect bare addresses without a scheme prefix.
    #[builder(default = true)]
    pub bare_addresses: bool,
    #[builder(default = true)]
    pub ethereum: bool,
    #[builder(default = true)]
    pub stellar: bool,
    #[builder(default = true)]
    pub solana: bool,
    /// Pass `http(s)` links through as website intents.
    #[builder(default = true)]
    pub website: bool,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Dispatcher::builder().build()
    }
}

impl Dispatcher {
    fn enabled(&self, detector: Detector) -> bool {
        if detector.is_bare_address() && !self.bare_addresses {
            return false;
        }
        match detector.family() {
            Some(ChainFamily::Ethereum) => self.ethereum,
            Some(ChainFamily::Stellar) => self.stellar,
            Some(ChainFamily::Solana) => self.solana,
            None => self.website,
        }
    }

    /// The enabled detectors, highest priority first.
    pub fn detectors(&self) -> impl Iterator<Item = Detector> + '_ {
        Detector::PRIORITY
            .into_iter()
            .filter(|detector| self.enabled(*detector))
    }

    /// The detector that would claim `input`, if any.
    pub fn detect(&self, input: &str) -> Option<Detector> {
        self.detectors().find(|detector| detector.matches(input))
    }

    /// Parse `input` into an intent.
    ///
    /// Returns [`Error::UnrecognizedFormat`] when no enabled detector claims the input.
    pub fn parse(&self, input: &str) -> Result<DeeplinkIntent> {
        let detector = self.detect(input).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(len = input.len(), "Unrecognized deeplink format");

            Error::UnrecognizedFormat
        })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(detector = detector.name(), len = input.len(), "Deeplink detected");

        detector.parse(input).ok_or(Error::UnrecognizedFormat)
    }
}

/// Parse `input` with every detector enabled.
pub fn parse_deeplink(input: &str) -> Result<DeeplinkIntent> {
    Dispatcher::default().parse(input)
}
