//! Currency metadata, registry, and display formatting.

pub mod formatter;
mod iso;
pub mod registry;
pub mod types;

pub use formatter::Formatter;
pub use registry::CurrencyRegistry;
pub use types::Currency;
