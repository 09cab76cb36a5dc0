//! EIP-681 payment and contract-call URIs.
//!
//! ```text
//! ethereum:[pay-]<target>[@<chain_id>][/<function>][?<query>]
//! ethereum:<target>[/<function>][@<chain_id>][?<query>]
//! ```

use crate::{
    networks::evm::has_address_shape,
    query::{Consumed, QueryParams, QueryStyle},
    schemes::UriScheme,
    types::{AssetInfo, DeeplinkIntent, EthereumIntent, FeeInfo, Operation, RawPayload},
};

pub const PARSED_MESSAGE: &str = "Parsed Ethereum URI";
pub const INVALID_TARGET: &str = "Error: Invalid Ethereum URI - could not parse target";
pub const INVALID_CHAIN_ID: &str = "Error: Invalid Ethereum URI - invalid chain id";
pub const MALFORMED_QUERY: &str = "Error: Invalid Ethereum URI - malformed query encoding";

pub struct EthereumScheme;

impl UriScheme for EthereumScheme {
    const PREFIX: &'static str = "ethereum:";

    fn parse_body(input: &str, body: &str) -> DeeplinkIntent {
        DeeplinkIntent::Ethereum(parse_request(input, body))
    }
}

/// Parse an `ethereum:` URI. Returns `None` for any other input.
pub fn parse_ethereum(input: &str) -> Option<DeeplinkIntent> {
    EthereumScheme::parse(input)
}

enum Target<'a> {
    Recipient(&'a str),
    Call {
        contract: &'a str,
        function: Option<&'a str>,
    },
}

fn parse_request(input: &str, body: &str) -> EthereumIntent {
    let (path, query) = body.split_once('?').unwrap_or((body, ""));

    let params = match QueryParams::parse(query, QueryStyle::Component) {
        Ok(params) => params,
        Err(_) => {
            return EthereumIntent::builder()
                .message(report(MALFORMED_QUERY))
                .raw(RawPayload::new(input))
                .build();
        }
    };

    // `@chain` may sit before or after `/function`.
    let (target_part, chain_part) = match path.split_once('@') {
        Some((target, chain)) => (target, Some(chain)),
        None => (path, None),
    };
    let (chain_text, trailing_function) = match chain_part {
        Some(chain) => match chain.split_once('/') {
            Some((chain, function)) => (Some(chain), Some(function)),
            None => (Some(chain), None),
        },
        None => (None, None),
    };

    let target_part = target_part.strip_prefix("pay-").unwrap_or(target_part);

    let mut consumed = Consumed::default();
    let amount = params
        .take("value", &mut consumed)
        .or_else(|| params.take("uint256", &mut consumed));
    let fee = FeeInfo::builder()
        .maybe_gas_limit(
            params
                .take("gas", &mut consumed)
                .or_else(|| params.take("gasLimit", &mut consumed)),
        )
        .maybe_gas_price(params.take("gasPrice", &mut consumed))
        .maybe_max_fee_per_gas(params.take("maxFeePerGas", &mut consumed))
        .maybe_max_priority_fee_per_gas(params.take("maxPriorityFeePerGas", &mut consumed))
        .build();

    let builder = EthereumIntent::builder()
        .maybe_amount(amount)
        .maybe_fee((!fee.is_empty()).then_some(fee))
        .raw(RawPayload::new(input));

    // A bad target or chain id still keeps every decoded parameter.
    let request = match (
        resolve_target(target_part, trailing_function),
        resolve_chain_id(chain_text),
    ) {
        (None, _) => Err(INVALID_TARGET),
        (Some(_), Err(reason)) => Err(reason),
        (Some(target), Ok(chain_id)) => Ok((target, chain_id)),
    };
    let (target, chain_id) = match request {
        Ok(request) => request,
        Err(reason) => {
            return builder
                .message(report(reason))
                .extra_params(params.extras(&consumed))
                .build();
        }
    };

    let (mut recipient, operation, mut contract) = match target {
        Target::Recipient(recipient) => (Some(recipient), None, None),
        Target::Call { contract, function } => (
            None,
            function.filter(|f| !f.is_empty()).map(Operation::new),
            Some(contract),
        ),
    };

    if let Some(address) = params.take_if("address", &mut consumed, has_address_shape) {
        // ERC-20 convention: the URI target is the token, the parameter the recipient.
        if contract.is_none() {
            contract = recipient;
        }
        recipient = Some(address);
    }

    builder
        .maybe_operation(operation)
        .maybe_address(recipient)
        .maybe_asset(contract.map(|c| AssetInfo::builder().contract(c).build()))
        .maybe_chain_id(chain_id)
        .message(PARSED_MESSAGE)
        .extra_params(params.extras(&consumed))
        .build()
}

fn resolve_target<'a>(target: &'a str, trailing_function: Option<&'a str>) -> Option<Target<'a>> {
    match target.split_once('/') {
        Some((contract, _)) if contract.is_empty() => None,
        Some((contract, function)) => Some(Target::Call {
            contract,
            function: Some(function),
        }),
        None if trailing_function.is_some() && !target.is_empty() => Some(Target::Call {
            contract: target,
            function: trailing_function,
        }),
        None if has_address_shape(target) => Some(Target::Recipient(target)),
        None => None,
    }
}

/// An absent or empty chain id is no chain id at all.
fn resolve_chain_id(text: Option<&str>) -> Result<Option<u64>, &'static str> {
    match text.filter(|t| !t.is_empty()) {
        Some(text) => parse_chain_id(text).map(Some).ok_or(INVALID_CHAIN_ID),
        None => Ok(None),
    }
}

/// Decimal, or hexadecimal with a `0x` prefix.
fn parse_chain_id(text: &str) -> Option<u64> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

fn report(reason: &'static str) -> &'static str {
    #[cfg(feature = "tracing")]
    tracing::debug!("Ethereum URI malformed: {}", reason);

    reason
}
