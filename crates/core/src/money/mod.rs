//! Currency-safe monetary values.

pub mod distribution;
pub mod types;

#[cfg(test)]
mod props;

pub use types::Money;
