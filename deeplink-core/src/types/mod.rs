//! Core types used across the deeplink parsers.

mod amount;
mod common;
mod intent;

pub use amount::*;
pub use common::*;
pub use intent::*;
