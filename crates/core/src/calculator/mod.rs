//! Integer-only arithmetic engine.

pub mod engine;

#[cfg(test)]
mod props;

pub use engine::{Amount, Calculator};
