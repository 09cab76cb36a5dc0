//! Query-string decoding shared by the URI scheme parsers.

use std::collections::BTreeSet;

use percent_encoding::percent_decode_str;

use crate::types::Record;

/// How `+` is treated while decoding a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStyle {
    /// Percent-decoding only; `+` stays a literal plus sign.
    Component,
    /// `application/x-www-form-urlencoded`: `+` decodes to a space first.
    Form,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("query segment `{0}` is not valid percent-encoded UTF-8")]
    InvalidEncoding(String),
}

/// Decoded query parameters, in their original order, repeats included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode `query` (without the leading `?`).
    ///
    /// Pairs are split on the first `=`; a pair without `=` has an empty value
    /// and a pair with an empty key is dropped.
    pub fn parse(query: &str, style: QueryStyle) -> Result<Self, QueryError> {
        let mut pairs = Vec::new();
        for segment in query.split('&').filter(|s| !s.is_empty()) {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            let key = decode(key, style)?;
            if key.is_empty() {
                continue;
            }
            pairs.push((key, decode(value, style)?));
        }
        Ok(QueryParams { pairs })
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn find(&self, key: &str, trim: bool) -> Option<(usize, &str)> {
        self.pairs
            .iter()
            .enumerate()
            .filter(|(_, (k, _))| k == key)
            .map(|(index, (_, v))| (index, if trim { v.trim() } else { v.as_str() }))
            .find(|(_, v)| !v.is_empty())
    }

    /// First non-empty value for `key`, exactly as decoded.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.find(key, false).map(|(_, v)| v)
    }

    /// First value for `key` with surrounding whitespace removed, if non-empty.
    pub fn get_trimmed(&self, key: &str) -> Option<&str> {
        self.find(key, true).map(|(_, v)| v)
    }

    /// Like [`get`](Self::get), and marks the pair that supplied the value as consumed.
    pub fn take(&self, key: &str, consumed: &mut Consumed) -> Option<&str> {
        let (index, value) = self.find(key, false)?;
        consumed.0.insert(index);
        Some(value)
    }

    /// Like [`take`](Self::take), but only when `accept` approves the value.
    pub fn take_if(
        &self,
        key: &str,
        consumed: &mut Consumed,
        accept: impl FnOnce(&str) -> bool,
    ) -> Option<&str> {
        let (index, value) = self.find(key, false).filter(|(_, v)| accept(v))?;
        consumed.0.insert(index);
        Some(value)
    }

    /// Like [`get_trimmed`](Self::get_trimmed), and marks the supplying pair as consumed.
    pub fn take_trimmed(&self, key: &str, consumed: &mut Consumed) -> Option<&str> {
        let (index, value) = self.find(key, true)?;
        consumed.0.insert(index);
        Some(value)
    }

    /// Every value for `key` in original order, empty ones included. All of them are consumed.
    pub fn take_all(&self, key: &str, consumed: &mut Consumed) -> Vec<&str> {
        self.pairs
            .iter()
            .enumerate()
            .filter(|(_, (k, _))| k == key)
            .map(|(index, (_, v))| {
                consumed.0.insert(index);
                v.as_str()
            })
            .collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Every pair not in `consumed`, keyed by name. A repeated key keeps its last value.
    ///
    /// Consumption is per pair, so a repeat of a mapped key, or an empty value that
    /// never reached its field, still ends up here.
    pub fn extras(&self, consumed: &Consumed) -> Record<String> {
        self.pairs
            .iter()
            .enumerate()
            .filter(|(index, _)| !consumed.0.contains(index))
            .map(|(_, (k, v))| (k.clone(), v.clone()))
            .collect()
    }
}

/// Positions of the query pairs already mapped onto a named field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Consumed(BTreeSet<usize>);

fn decode(segment: &str, style: QueryStyle) -> Result<String, QueryError> {
    let spaced;
    let segment = match style {
        QueryStyle::Component => segment,
        QueryStyle::Form => {
            spaced = segment.replace('+', " ");
            spaced.as_str()
        }
    };
    percent_decode_str(segment)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| QueryError::InvalidEncoding(segment.to_string()))
}

/// Percent-decode a single URI component (`+` is literal).
pub fn decode_component(segment: &str) -> Result<String, QueryError> {
    decode(segment, QueryStyle::Component)
}
