//! Persistence codecs for money values.
//!
//! - [`JsonCodec`]: `{"amount":1000,"currency":"USD"}` with a pluggable strategy
//! - [`DbCodec`]: `"1000|USD"` with a configurable separator

pub mod db;
pub mod error;
pub mod json;

pub use db::DbCodec;
pub use error::{CodecError, CodecResult};
pub use json::{DefaultJsonStrategy, JsonCodec, JsonStrategy, MoneyRecord};
