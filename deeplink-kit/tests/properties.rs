use deeplink_kit::{errors::Error, parse_deeplink, types::DeeplinkIntent};
use proptest::prelude::*;

const SOLANA: &str = "mvines9iiHiQTysrwkJjGf2gb9Ex9jXJX8ns3qwf2kN";
const STELLAR: &str = "GCALNQQBXAPZ2WIRSDDBMSTAKCUH5SG6U76YBFLQLIXJTF7FE5AX7AOO";
const ETHEREUM: &str = "0x71C7656EC7ab88b098defB751B7401B5f6d8976F";

fn amount_literal() -> impl Strategy<Value = String> {
    "[0-9]{1,40}(\\.[0-9]{1,18})?(e[0-9]{1,3})?"
}

/// Keys outside every scheme's known set, with URL-safe values.
fn unknown_params() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::btree_map("x_[a-z0-9]{1,8}", "[A-Za-z0-9._~-]{0,16}", 0..6)
        .prop_map(|params| params.into_iter().collect())
}

fn query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

fn assert_extras_contain(intent: &DeeplinkIntent, params: &[(String, String)]) {
    let extras = intent.extra_params().cloned().unwrap_or_default();
    for (key, value) in params {
        assert_eq!(extras.get(key), Some(value), "{key} missing from {extras:?}");
    }
}

proptest! {
    #[test]
    fn test_ethereum_amount_is_verbatim(amount in amount_literal()) {
        let intent = parse_deeplink(&format!("ethereum:{ETHEREUM}?value={amount}")).unwrap();
        prop_assert_eq!(intent.amount().map(|a| a.as_str()), Some(amount.as_str()));
    }

    #[test]
    fn test_solana_amount_is_verbatim(amount in amount_literal()) {
        let intent = parse_deeplink(&format!("solana:{SOLANA}?amount={amount}")).unwrap();
        prop_assert_eq!(intent.amount().map(|a| a.as_str()), Some(amount.as_str()));
    }

    #[test]
    fn test_solana_references_keep_order(
        references in prop::collection::vec("[1-9A-HJ-NP-Za-km-z]{32,44}", 1..6)
    ) {
        let query = references
            .iter()
            .map(|r| format!("reference={r}"))
            .collect::<Vec<_>>()
            .join("&");
        let intent = parse_deeplink(&format!("solana:{SOLANA}?amount=1&{query}")).unwrap();
        let joined = references.join(",");
        prop_assert_eq!(
            intent.extra_params().and_then(|extras| extras.get("reference")),
            Some(&joined)
        );
    }

    #[test]
    fn test_unknown_keys_are_preserved(params in unknown_params()) {
        let query = query(&params);
        for input in [
            format!("ethereum:{ETHEREUM}?value=1&{query}"),
            format!("web+stellar:pay?destination={STELLAR}&{query}"),
            format!("web+stellar:tx?xdr=AAAA&{query}"),
            format!("solana:{SOLANA}?{query}"),
        ] {
            let intent = parse_deeplink(&input).unwrap();
            prop_assert!(!intent.is_malformed(), "{}", input);
            assert_extras_contain(&intent, &params);
        }
    }

    #[test]
    fn test_malformed_ethereum_keeps_parameters(
        amount in amount_literal(),
        params in unknown_params(),
        (target, chain) in prop::sample::select(vec![
            ("not-an-address", ""),
            ("0x1234", "@1"),
            ("", "@1"),
            (ETHEREUM, "@mainnet"),
            (ETHEREUM, "@0xZZ"),
        ]),
    ) {
        let input = format!("ethereum:{target}{chain}?value={amount}&{}", query(&params));
        let intent = parse_deeplink(&input).unwrap();
        prop_assert!(intent.is_malformed(), "{}", input);
        prop_assert_eq!(intent.amount().map(|a| a.as_str()), Some(amount.as_str()));
        assert_extras_contain(&intent, &params);
    }

    #[test]
    fn test_repeated_known_keys_are_not_lost(
        first in amount_literal(),
        second in amount_literal(),
    ) {
        for (input, key) in [
            (format!("ethereum:{ETHEREUM}?value={first}&value={second}"), "value"),
            (format!("solana:{SOLANA}?amount={first}&amount={second}"), "amount"),
            (format!("web+stellar:pay?destination={STELLAR}&amount={first}&amount={second}"), "amount"),
        ] {
            let intent = parse_deeplink(&input).unwrap();
            prop_assert_eq!(intent.amount().map(|a| a.as_str()), Some(first.as_str()));
            prop_assert_eq!(
                intent.extra_params().and_then(|extras| extras.get(key)),
                Some(&second),
                "{}", input
            );
        }
    }

    #[test]
    fn test_parse_is_idempotent(input in ".{0,80}") {
        match (parse_deeplink(&input), parse_deeplink(&input)) {
            (Ok(first), Ok(second)) => prop_assert_eq!(first, second),
            (Err(Error::UnrecognizedFormat), Err(Error::UnrecognizedFormat)) => {}
            (first, second) => prop_assert!(false, "diverged: {:?} vs {:?}", first, second),
        }
    }

    #[test]
    fn test_raw_data_is_the_input(
        prefix in prop::sample::select(vec!["ethereum:", "web+stellar:", "solana:", "https://", "HTTP://"]),
        body in ".{0,80}",
    ) {
        let input = format!("{prefix}{body}");
        let intent = parse_deeplink(&input).unwrap();
        prop_assert_eq!(&intent.raw().data, &input);
    }
}
