//! Deeplink core library.
//!
//! This library provides the normalized payment-intent schema shared by every
//! deeplink dialect parser: the [`DeeplinkIntent`](types::DeeplinkIntent) tagged
//! union, its per-chain variant records, and the crate error type.
//!
//! Parsing itself lives in `deeplink-kit`; this crate carries no parsing logic.

pub mod errors;
pub mod types;

pub use errors::{Error, Result};
