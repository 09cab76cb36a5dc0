//! Plain `http(s)` links.

use crate::{
    schemes::strip_scheme,
    types::{DeeplinkIntent, RawPayload, WebsiteIntent},
};

const PREFIXES: [&str; 2] = ["http://", "https://"];

pub fn is_website(input: &str) -> bool {
    PREFIXES
        .iter()
        .any(|prefix| strip_scheme(input, prefix).is_some())
}

/// Pass an `http://` or `https://` link through verbatim, without further parsing.
pub fn parse_website(input: &str) -> Option<DeeplinkIntent> {
    is_website(input).then(|| {
        DeeplinkIntent::Website(
            WebsiteIntent::builder()
                .url(input)
                .raw(RawPayload::new(input))
                .build(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_website_passthrough() {
        let input = "https://example.com/pay?x=1#frag";
        match parse_website(input) {
            Some(DeeplinkIntent::Website(site)) => {
                assert_eq!(site.url, input);
                assert_eq!(site.raw.data, input);
            }
            other => panic!("expected a website intent, got {other:?}"),
        }
    }

    #[test]
    fn test_website_prefixes() {
        assert!(is_website("http://example.com"));
        assert!(is_website("HTTPS://EXAMPLE.COM"));
        assert!(!is_website("ftp://example.com"));
        assert!(!is_website("example.com"));
        assert!(!is_website("https:/example.com"));
    }
}
