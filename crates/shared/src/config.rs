//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Persistence codec configuration.
    #[serde(default)]
    pub codec: CodecConfig,
    /// Custom currencies registered on top of the ISO 4217 table.
    #[serde(default)]
    pub currencies: Vec<CurrencyConfig>,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Codec configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// Separator placed between amount and currency code in database strings.
    #[serde(default = "default_db_separator")]
    pub db_separator: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            db_separator: default_db_separator(),
        }
    }
}

fn default_db_separator() -> String {
    "|".to_string()
}

/// A custom currency definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrencyConfig {
    /// Currency code, e.g. "BTC". Normalized to uppercase on registration.
    pub code: String,
    /// Symbol used when formatting. Defaults to the code.
    #[serde(default)]
    pub grapheme: Option<String>,
    /// Format template: `1` is replaced by the number, `$` by the symbol.
    #[serde(default = "default_template")]
    pub template: String,
    /// Decimal separator.
    #[serde(default = "default_decimal")]
    pub decimal: String,
    /// Thousands separator. Empty disables grouping.
    #[serde(default = "default_thousand")]
    pub thousand: String,
    /// Number of digits in the smallest unit.
    #[serde(default = "default_fraction")]
    pub fraction: u32,
    /// ISO 4217 numeric code, if any.
    #[serde(default)]
    pub numeric_code: Option<String>,
}

impl CurrencyConfig {
    /// Creates a currency definition with default formatting.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            grapheme: None,
            template: default_template(),
            decimal: default_decimal(),
            thousand: default_thousand(),
            fraction: default_fraction(),
            numeric_code: None,
        }
    }
}

fn default_template() -> String {
    "1$".to_string()
}

fn default_decimal() -> String {
    ".".to_string()
}

fn default_thousand() -> String {
    ",".to_string()
}

fn default_fraction() -> u32 {
    2
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "moneta=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MONETA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.codec.db_separator, "|");
        assert!(config.currencies.is_empty());
        assert_eq!(config.log.filter, "moneta=info");
    }

    #[test]
    fn test_currency_config_new_defaults() {
        let currency = CurrencyConfig::new("GOLD");
        assert_eq!(currency.code, "GOLD");
        assert_eq!(currency.grapheme, None);
        assert_eq!(currency.template, "1$");
        assert_eq!(currency.decimal, ".");
        assert_eq!(currency.thousand, ",");
        assert_eq!(currency.fraction, 2);
        assert_eq!(currency.numeric_code, None);
    }

    #[test]
    fn test_deserialize_from_toml() {
        let source = r#"
            [codec]
            db_separator = ":"

            [[currencies]]
            code = "BTC"
            grapheme = "₿"
            template = "$1"
            fraction = 8
        "#;

        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.codec.db_separator, ":");
        assert_eq!(config.currencies.len(), 1);
        let btc = &config.currencies[0];
        assert_eq!(btc.code, "BTC");
        assert_eq!(btc.grapheme.as_deref(), Some("₿"));
        assert_eq!(btc.template, "$1");
        assert_eq!(btc.fraction, 8);
        assert_eq!(btc.decimal, ".");
        assert_eq!(config.log.filter, "moneta=info");
    }

    #[test]
    fn test_load_with_env_override() {
        temp_env::with_vars(
            [
                ("MONETA__CODEC__DB_SEPARATOR", Some(";")),
                ("MONETA__LOG__FILTER", Some("moneta=debug")),
                ("RUN_MODE", Some("test-does-not-exist")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.codec.db_separator, ";");
                assert_eq!(config.log.filter, "moneta=debug");
            },
        );
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars(
            [
                ("MONETA__CODEC__DB_SEPARATOR", None::<&str>),
                ("MONETA__LOG__FILTER", None),
                ("RUN_MODE", Some("test-does-not-exist")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.codec.db_separator, "|");
            },
        );
    }
}
