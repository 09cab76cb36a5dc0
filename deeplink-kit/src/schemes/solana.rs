//! Solana Pay transfer and transaction requests.
//!
//! ```text
//! solana:<recipient>[?amount=..&spl-token=..&reference=..&label=..&message=..&memo=..]
//! solana:<percent-encoded https link>[?<same params>]
//! ```
//!
//! An invalid transfer recipient yields the minimal intent
//! `{ operation: transfer, raw }`: the address is omitted rather than
//! carried with an invalid value.

use url::Url;

use crate::{
    networks::svm::is_valid_solana_address,
    query::{Consumed, QueryParams, QueryStyle, decode_component},
    schemes::{UriScheme, address::address_intent, website::is_website},
    types::{
        AmountLiteral, AssetInfo, ChainFamily, DeeplinkIntent, Operation, RawPayload,
        SolanaIntent,
    },
};

pub struct SolanaScheme;

impl UriScheme for SolanaScheme {
    const PREFIX: &'static str = "solana:";

    fn parse_body(input: &str, body: &str) -> DeeplinkIntent {
        DeeplinkIntent::Solana(parse_request(input, body))
    }
}

/// Parse a `solana:` URI, or a bare base58 public key as an address intent.
pub fn parse_solana(input: &str) -> Option<DeeplinkIntent> {
    SolanaScheme::parse(input).or_else(|| {
        is_valid_solana_address(input).then(|| address_intent(ChainFamily::Solana, input))
    })
}

fn parse_request(input: &str, body: &str) -> SolanaIntent {
    // An unencoded link owns its own query string.
    if is_website(body) {
        return SolanaIntent::builder()
            .operation(Operation::new(Operation::TRANSACTION))
            .callback(body)
            .raw(RawPayload::new(input))
            .build();
    }

    let (path, query) = body.split_once('?').unwrap_or((body, ""));
    let Ok(params) = QueryParams::parse(query, QueryStyle::Form) else {
        return malformed(input, "malformed query encoding");
    };

    let target = match transaction_link(path) {
        Some(link) => Target::Transaction(link),
        None if is_valid_solana_address(path) => Target::Transfer(path),
        None => return malformed(input, "invalid recipient"),
    };

    let (operation, address, callback) = match target {
        Target::Transfer(recipient) => (Operation::TRANSFER, Some(recipient), None),
        Target::Transaction(link) => (Operation::TRANSACTION, None, Some(link)),
    };

    let mut consumed = Consumed::default();
    let amount = params.take("amount", &mut consumed).map(AmountLiteral::from);
    let asset = params
        .take("spl-token", &mut consumed)
        .map(|mint| AssetInfo::builder().contract(mint).build());
    let origin_domain = params.take("label", &mut consumed);
    let memo = params.take("memo", &mut consumed);
    let message = params.take("message", &mut consumed);
    let references = params.take_all("reference", &mut consumed);

    let mut extra_params = params.extras(&consumed);
    if !references.is_empty() {
        extra_params.insert("reference".to_string(), references.join(","));
    }

    SolanaIntent::builder()
        .operation(Operation::new(operation))
        .maybe_address(address)
        .maybe_callback(callback)
        .maybe_amount(amount)
        .maybe_asset(asset)
        .maybe_origin_domain(origin_domain)
        .maybe_memo(memo)
        .maybe_message(message)
        .raw(RawPayload::new(input))
        .extra_params(extra_params)
        .build()
}

enum Target<'a> {
    Transfer(&'a str),
    Transaction(String),
}

/// The percent-decoded path, if it is an absolute `http://` or `https://` URL.
fn transaction_link(path: &str) -> Option<String> {
    let decoded = decode_component(path).ok()?;
    if !is_website(&decoded) {
        return None;
    }
    Url::parse(&decoded).ok().map(|_| decoded)
}

fn malformed(input: &str, _reason: &'static str) -> SolanaIntent {
    #[cfg(feature = "tracing")]
    tracing::debug!("Solana URI malformed: {}", _reason);

    SolanaIntent::builder()
        .operation(Operation::new(Operation::TRANSFER))
        .raw(RawPayload::new(input))
        .build()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const RECIPIENT: &str = "mvines9iiHiQTysrwkJjGf2gb9Ex9jXJX8ns3qwf2kN";
    const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    fn solana(input: &str) -> SolanaIntent {
        match SolanaScheme::parse(input) {
            Some(DeeplinkIntent::Solana(intent)) => intent,
            other => panic!("expected a Solana intent, got {other:?}"),
        }
    }

    #[test]
    fn test_simple_transfer() {
        let intent = solana(&format!("solana:{RECIPIENT}?amount=1"));
        assert_eq!(intent.operation.as_ref().map(Operation::as_str), Some("transfer"));
        assert_eq!(intent.address.as_deref(), Some(RECIPIENT));
        assert_eq!(intent.amount.as_ref().map(AmountLiteral::as_str), Some("1"));
        assert!(intent.extra_params.is_empty());
    }

    #[test]
    fn test_spl_token_transfer() {
        let intent = solana(&format!(
            "solana:{RECIPIENT}?amount=0.01&spl-token={USDC_MINT}"
        ));
        assert_eq!(
            intent.asset.and_then(|asset| asset.contract).as_deref(),
            Some(USDC_MINT)
        );
        assert_eq!(intent.amount.as_ref().map(AmountLiteral::as_str), Some("0.01"));
    }

    #[test]
    fn test_label_message_and_memo() {
        let intent = solana(&format!(
            "solana:{RECIPIENT}?amount=1&label=Michael&message=Thanks%20for%20all%20the%20fish&memo=OrderId12345"
        ));
        assert_eq!(intent.origin_domain.as_deref(), Some("Michael"));
        assert_eq!(intent.message.as_deref(), Some("Thanks for all the fish"));
        assert_eq!(intent.memo.as_deref(), Some("OrderId12345"));
    }

    #[test]
    fn test_references_are_joined_in_order() {
        let intent = solana(&format!(
            "solana:{RECIPIENT}?reference=86yvgdGbfJe2hK4ePqt3D123&foo=bar&reference=86yvgdGbfJe2hK4ePqt3D456"
        ));
        assert_eq!(
            intent.extra_params.get("reference").map(String::as_str),
            Some("86yvgdGbfJe2hK4ePqt3D123,86yvgdGbfJe2hK4ePqt3D456")
        );
        assert_eq!(intent.extra_params.get("foo").map(String::as_str), Some("bar"));
    }

    #[test]
    fn test_repeated_and_empty_known_keys_are_kept() {
        let intent = solana(&format!(
            "solana:{RECIPIENT}?amount=1&amount=2&label=&foo=x"
        ));
        assert_eq!(intent.amount.as_ref().map(AmountLiteral::as_str), Some("1"));
        assert!(intent.origin_domain.is_none());
        assert_eq!(intent.extra_params.get("amount").map(String::as_str), Some("2"));
        assert_eq!(intent.extra_params.get("label").map(String::as_str), Some(""));
        assert_eq!(intent.extra_params.get("foo").map(String::as_str), Some("x"));
    }

    #[test]
    fn test_non_hierarchical_link_is_not_a_transaction() {
        for input in ["solana:http:foo", "solana:https%3Afoo", "solana:mailto%3Aa%40b.c"] {
            let intent = solana(input);
            assert!(intent.callback.is_none(), "{input}");
            assert!(DeeplinkIntent::Solana(intent).is_malformed(), "{input}");
        }
    }

    #[test]
    fn test_invalid_recipient_is_minimal() {
        let input = "solana:INVALID_ADDRESS?amount=1";
        let intent = DeeplinkIntent::Solana(solana(input));
        assert_eq!(
            serde_json::to_value(&intent).unwrap(),
            json!({
                "type": "solana",
                "operation": "transfer",
                "raw": { "data": input },
            })
        );
        assert!(intent.is_malformed());
    }

    #[test]
    fn test_empty_recipient_and_bad_encoding_are_minimal() {
        let bad_encoding = format!("solana:{RECIPIENT}?memo=%C3%28");
        for input in ["solana:", "solana:?amount=1", bad_encoding.as_str()] {
            let intent = solana(input);
            assert!(intent.address.is_none(), "{input}");
            assert!(intent.amount.is_none(), "{input}");
            assert_eq!(intent.raw.data, input);
        }
    }

    #[test]
    fn test_transaction_request() {
        let link = "https://example.com/solana-pay";
        let input = format!("solana:{link}");
        let intent = DeeplinkIntent::Solana(solana(&input));
        assert_eq!(
            serde_json::to_value(&intent).unwrap(),
            json!({
                "type": "solana",
                "operation": "transaction",
                "callback": link,
                "raw": { "data": input },
            })
        );
    }

    #[test]
    fn test_encoded_transaction_request() {
        let input = "solana:https%3A%2F%2Fexample.com%2Fsolana-pay%3Forder%3D12345";
        let intent = solana(input);
        assert_eq!(intent.operation.as_ref().map(Operation::as_str), Some("transaction"));
        assert_eq!(
            intent.callback.as_deref(),
            Some("https://example.com/solana-pay?order=12345")
        );
        assert!(intent.address.is_none());
        assert!(intent.extra_params.is_empty());
    }

    #[test]
    fn test_encoded_transaction_request_with_params() {
        let input = "solana:https%3A%2F%2Fexample.com%2Fpay?label=Shop&message=Checkout&extra=1";
        let intent = solana(input);
        assert_eq!(intent.callback.as_deref(), Some("https://example.com/pay"));
        assert_eq!(intent.origin_domain.as_deref(), Some("Shop"));
        assert_eq!(intent.message.as_deref(), Some("Checkout"));
        assert_eq!(intent.extra_params.get("extra").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_bare_address() {
        match parse_solana(RECIPIENT) {
            Some(DeeplinkIntent::Address(intent)) => {
                assert_eq!(intent.chain, ChainFamily::Solana);
                assert_eq!(intent.address, RECIPIENT);
                assert_eq!(intent.raw.data, RECIPIENT);
            }
            other => panic!("expected an address intent, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_solana_input() {
        assert!(parse_solana("INVALID_SOLANA_ADDRESS").is_none());
        assert!(parse_solana("mvines9iiHiQTysrwkJjGf2gb9Ex9jXJX8ns3qwf2k").is_none());
        assert!(parse_solana("not-a-solana-uri").is_none());
    }
}
