//! Core money arithmetic for Moneta.
//!
//! This crate is pure logic with no I/O and no logging. Amounts are `i64`
//! counts of a currency's smallest unit; floats never touch them.
//!
//! # Modules
//!
//! - `calculator` - Checked integer arithmetic and half-up rounding
//! - `currency` - ISO 4217 metadata, registry and display formatting
//! - `money` - Currency-safe values, split and allocation
//! - `codec` - JSON and database string encodings

pub mod calculator;
pub mod codec;
pub mod currency;
pub mod error;
pub mod money;

pub use calculator::{Amount, Calculator};
pub use currency::{Currency, CurrencyRegistry};
pub use error::{MoneyError, MoneyResult};
pub use money::Money;
