//! URI scheme parsers, one per dialect, plus the bare-address and website fallbacks.
//!
//! A scheme parser owns everything after its prefix: once the prefix matches it
//! always returns an intent, using a diagnostic message (or, for Solana, field
//! omission) when the body is malformed.

use crate::types::DeeplinkIntent;

pub mod address;
pub mod ethereum;
pub mod solana;
pub mod stellar;
pub mod website;

pub use address::parse_address;
pub use ethereum::{EthereumScheme, parse_ethereum};
pub use solana::{SolanaScheme, parse_solana};
pub use stellar::{StellarScheme, parse_stellar};
pub use website::parse_website;

/// A prefix-identified URI dialect.
pub trait UriScheme {
    /// The scheme prefix including its colon, e.g. `"ethereum:"`.
    const PREFIX: &'static str;

    /// Parse everything after the prefix. `input` is the full original string.
    fn parse_body(input: &str, body: &str) -> DeeplinkIntent;

    fn matches(input: &str) -> bool {
        strip_scheme(input, Self::PREFIX).is_some()
    }

    /// Parse `input` if it carries this scheme's prefix.
    fn parse(input: &str) -> Option<DeeplinkIntent> {
        strip_scheme(input, Self::PREFIX).map(|body| Self::parse_body(input, body))
    }
}

/// Strip `prefix` from `input`, comparing ASCII case-insensitively.
pub(crate) fn strip_scheme<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    let head = input.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &input[prefix.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_scheme_ignores_case() {
        assert_eq!(strip_scheme("ethereum:0x1", "ethereum:"), Some("0x1"));
        assert_eq!(strip_scheme("ETHEREUM:0x1", "ethereum:"), Some("0x1"));
        assert_eq!(strip_scheme("eth:0x1", "ethereum:"), None);
        assert_eq!(strip_scheme("", "solana:"), None);
    }

    #[test]
    fn test_strip_scheme_respects_char_boundaries() {
        assert_eq!(strip_scheme("ethereu€:", "ethereum:"), None);
    }
}
