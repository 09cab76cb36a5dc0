//! SEP-0007 `web+stellar:` payment and transaction requests.
//!
//! ```text
//! web+stellar:pay?destination=<G...>[&amount=..][&asset_code=..&asset_issuer=..][&<common>]
//! web+stellar:tx?xdr=<envelope>[&replace=..][&<common>]
//! ```
//!
//! Missing or invalid required fields never fail the parse: they produce a
//! Stellar intent whose `message` carries the diagnostic.

use crate::{
    networks::stellar::is_valid_stellar_address,
    query::{Consumed, QueryParams, QueryStyle},
    schemes::{UriScheme, address::address_intent},
    types::{
        AmountLiteral, AssetInfo, ChainFamily, DeeplinkIntent, Operation, RawPayload,
        StellarIntent,
    },
};

pub const MISSING_DESTINATION: &str = "Error: Invalid Stellar payment URI - missing destination";
pub const INVALID_DESTINATION: &str =
    "Error: Invalid Stellar payment URI - invalid destination address";
pub const MISSING_XDR: &str = "Error: Invalid Stellar transaction URI - missing XDR";
pub const UNSUPPORTED_OPERATION: &str = "Error: Invalid Stellar URI - unsupported operation";
pub const MALFORMED_QUERY: &str = "Error: Invalid Stellar URI - malformed query encoding";

pub struct StellarScheme;

impl UriScheme for StellarScheme {
    const PREFIX: &'static str = "web+stellar:";

    fn parse_body(input: &str, body: &str) -> DeeplinkIntent {
        DeeplinkIntent::Stellar(parse_request(input, body))
    }
}

/// Parse a `web+stellar:` URI, or a bare ed25519 strkey as an address intent.
pub fn parse_stellar(input: &str) -> Option<DeeplinkIntent> {
    StellarScheme::parse(input).or_else(|| {
        is_valid_stellar_address(input).then(|| address_intent(ChainFamily::Stellar, input))
    })
}

#[derive(Clone, Copy)]
enum StellarOperation {
    Pay,
    Tx,
}

impl StellarOperation {
    fn from_path(path: &str) -> Option<Self> {
        if path.eq_ignore_ascii_case(Operation::PAY) {
            Some(StellarOperation::Pay)
        } else if path.eq_ignore_ascii_case(Operation::TX) {
            Some(StellarOperation::Tx)
        } else {
            None
        }
    }

    fn operation(self) -> Operation {
        match self {
            StellarOperation::Pay => Operation::new(Operation::PAY),
            StellarOperation::Tx => Operation::new(Operation::TX),
        }
    }
}

fn parse_request(input: &str, body: &str) -> StellarIntent {
    let (path, query) = body.split_once('?').unwrap_or((body, ""));

    let Some(op) = StellarOperation::from_path(path) else {
        return diagnostic(input, None, UNSUPPORTED_OPERATION);
    };

    let params = match QueryParams::parse(query, QueryStyle::Form) {
        Ok(params) => params,
        Err(_) => return diagnostic(input, Some(op), MALFORMED_QUERY),
    };

    match op {
        StellarOperation::Pay => parse_pay(input, &params),
        StellarOperation::Tx => parse_tx(input, &params),
    }
}

fn parse_pay(input: &str, params: &QueryParams) -> StellarIntent {
    let op = StellarOperation::Pay;
    let mut consumed = Consumed::default();
    let Some(destination) = params.take_trimmed("destination", &mut consumed) else {
        return rejected(input, op, params, MISSING_DESTINATION);
    };
    if !is_valid_stellar_address(destination) {
        return rejected(input, op, params, INVALID_DESTINATION);
    }

    let amount = params
        .take_trimmed("amount", &mut consumed)
        .map(AmountLiteral::from);

    // A lone code or issuer does not name an asset; it stays in `extra_params`.
    let asset = match (
        params.get_trimmed("asset_code"),
        params.get_trimmed("asset_issuer"),
    ) {
        (Some(_), Some(_)) => Some(
            AssetInfo::builder()
                .maybe_code(params.take_trimmed("asset_code", &mut consumed))
                .maybe_issuer(params.take_trimmed("asset_issuer", &mut consumed))
                .build(),
        ),
        _ => None,
    };

    let common = CommonParams::take(params, &mut consumed);
    let message = payment_message(amount.as_ref(), asset.as_ref(), common.msg);

    let intent = StellarIntent::builder()
        .operation(op.operation())
        .address(destination)
        .maybe_amount(amount)
        .maybe_asset(asset)
        .message(message)
        .raw(RawPayload::new(input))
        .extra_params(params.extras(&consumed))
        .build();
    common.apply(intent)
}

fn parse_tx(input: &str, params: &QueryParams) -> StellarIntent {
    let op = StellarOperation::Tx;
    let mut consumed = Consumed::default();
    let Some(xdr) = params.take_trimmed("xdr", &mut consumed) else {
        return rejected(input, op, params, MISSING_XDR);
    };

    let replace = params.take_trimmed("replace", &mut consumed);
    let common = CommonParams::take(params, &mut consumed);
    let message = transaction_message(common.msg);

    let mut extra_params = params.extras(&consumed);
    if let Some(replace) = replace {
        extra_params.insert("replace".to_string(), replace.to_string());
    }

    let intent = StellarIntent::builder()
        .operation(op.operation())
        .message(message)
        .raw(RawPayload {
            data: input.to_string(),
            xdr: Some(xdr.to_string()),
        })
        .extra_params(extra_params)
        .build();
    common.apply(intent)
}

/// Optional parameters shared by `pay` and `tx`.
struct CommonParams<'a> {
    memo: Option<&'a str>,
    memo_type: Option<&'a str>,
    callback: Option<&'a str>,
    msg: Option<&'a str>,
    network_passphrase: Option<&'a str>,
    origin_domain: Option<&'a str>,
    signature: Option<&'a str>,
}

impl<'a> CommonParams<'a> {
    fn take(params: &'a QueryParams, consumed: &mut Consumed) -> Self {
        CommonParams {
            memo: params.take_trimmed("memo", consumed),
            memo_type: params.take_trimmed("memo_type", consumed),
            callback: params.take_trimmed("callback", consumed),
            msg: params.take_trimmed("msg", consumed),
            network_passphrase: params.take_trimmed("network_passphrase", consumed),
            origin_domain: params.take_trimmed("origin_domain", consumed),
            signature: params.take_trimmed("signature", consumed),
        }
    }

    fn apply(self, intent: StellarIntent) -> StellarIntent {
        StellarIntent {
            memo: self.memo.map(str::to_string),
            memo_type: self.memo_type.map(str::to_string),
            callback: self.callback.map(str::to_string),
            network_passphrase: self.network_passphrase.map(str::to_string),
            origin_domain: self.origin_domain.map(str::to_string),
            signature: self.signature.map(str::to_string),
            ..intent
        }
    }
}

/// `Stellar payment[ for <amount>[ <asset>]][ - <msg>]`
fn payment_message(
    amount: Option<&AmountLiteral>,
    asset: Option<&AssetInfo>,
    msg: Option<&str>,
) -> String {
    let mut message = String::from("Stellar payment");
    if let Some(amount) = amount {
        message.push_str(&format!(" for {amount}"));
        if let Some(label) = asset.and_then(AssetInfo::label) {
            message.push_str(&format!(" {label}"));
        }
    }
    append_user_message(message, msg)
}

/// `Stellar transaction[ - <msg>]`
fn transaction_message(msg: Option<&str>) -> String {
    append_user_message(String::from("Stellar transaction"), msg)
}

fn append_user_message(mut message: String, msg: Option<&str>) -> String {
    if let Some(msg) = msg {
        message.push_str(" - ");
        message.push_str(msg);
    }
    message
}

fn diagnostic(input: &str, op: Option<StellarOperation>, reason: &'static str) -> StellarIntent {
    #[cfg(feature = "tracing")]
    tracing::debug!("Stellar URI malformed: {}", reason);

    StellarIntent::builder()
        .maybe_operation(op.map(StellarOperation::operation))
        .message(reason)
        .raw(RawPayload::new(input))
        .build()
}

/// A `pay`/`tx` request missing a required field; its parameters are all kept.
fn rejected(
    input: &str,
    op: StellarOperation,
    params: &QueryParams,
    reason: &'static str,
) -> StellarIntent {
    StellarIntent {
        extra_params: params.extras(&Consumed::default()),
        ..diagnostic(input, Some(op), reason)
    }
}
