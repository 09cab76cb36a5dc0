//! # Deeplink Kit
//!
//! Deeplink Kit turns the strings a wallet receives (typed by a user, pasted, or decoded from a QR code)
//! into normalized payment intents.
//!
//! It understands:
//!
//! - **EIP-681** `ethereum:` payment and contract-call URIs.
//! - **SEP-0007** `web+stellar:` payment (`pay`) and signed-transaction (`tx`) requests.
//! - **Solana Pay** `solana:` transfer and transaction requests.
//! - Bare Solana, Stellar and Ethereum addresses.
//! - Plain `http(s)` links.
//!
//! Parsing is pure: no network access, no global state, no environment configuration.
//!
//! ## Quick Start
//!
//! ```
//! use deeplink_kit::{parse_deeplink, types::DeeplinkIntent};
//!
//! let intent = parse_deeplink(
//!     "ethereum:0x71C7656EC7ab88b098defB751B7401B5f6d8976F?value=1.5e18",
//! )
//! .unwrap();
//!
//! match &intent {
//!     DeeplinkIntent::Ethereum(eth) => {
//!         assert_eq!(eth.amount.as_ref().unwrap().as_str(), "1.5e18");
//!     }
//!     other => panic!("unexpected intent: {other:?}"),
//! }
//! assert_eq!(intent.raw().data, "ethereum:0x71C7656EC7ab88b098defB751B7401B5f6d8976F?value=1.5e18");
//! ```
//!
//! ## Two Failure Tiers
//!
//! - Input that no detector recognizes is an [`errors::Error::UnrecognizedFormat`].
//! - Input whose scheme is recognized but whose body is invalid still parses into an intent.
//!   The defect is reported in the intent itself: [`types::DeeplinkIntent::is_malformed`] returns `true`.
//!
//! ```
//! use deeplink_kit::{errors::Error, parse_deeplink};
//!
//! assert!(matches!(parse_deeplink("not-a-uri"), Err(Error::UnrecognizedFormat)));
//!
//! let intent = parse_deeplink("web+stellar:pay?amount=100").unwrap();
//! assert!(intent.is_malformed());
//! assert_eq!(
//!     intent.message(),
//!     Some("Error: Invalid Stellar payment URI - missing destination")
//! );
//! ```
//!
//! ## Components
//!
//! - **[`dispatcher`]**: The ordered detector list and the [`parse_deeplink`] entry point.
//! - **[`schemes`]**: One parser per URI dialect, plus the bare-address and website fallbacks.
//! - **[`networks`]**: Address validators for EVM, SVM and Stellar.
//! - **[`query`]**: Query-string decoding shared by the scheme parsers.
//! - **[`types`]**: The serializable intent schema.
//!
//! ## Feature Flags
//!
//! - `tracing` (default): emit `tracing` events when inputs are detected or degrade to malformed intents.
//!   Inputs are logged by length only.

pub mod types {
    pub use deeplink_core::types::*;
}

pub mod errors {
    pub use deeplink_core::errors::*;
}

pub mod dispatcher;
pub mod networks;
pub mod query;
pub mod schemes;

pub use dispatcher::{Detector, Dispatcher, parse_deeplink};
