//! Command parsing and execution.

use clap::{Parser, Subcommand};
use moneta_core::codec::{DbCodec, JsonCodec};
use moneta_core::{CurrencyRegistry, Money};
use moneta_shared::{AppConfig, AppResult};

#[derive(Debug, Parser)]
#[command(name = "moneta", version)]
#[command(about = "Exact money arithmetic from the shell")]
#[command(after_help = "Amounts are integers in the currency's smallest unit.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Split evenly into n parts
    #[command(allow_negative_numbers = true)]
    Split { amount: i64, code: String, parts: i64 },

    /// Allocate by non-negative integer ratios
    #[command(allow_negative_numbers = true)]
    Allocate {
        amount: i64,
        code: String,
        #[arg(required = true)]
        ratios: Vec<i64>,
    },

    /// Round half-up to the currency step
    #[command(allow_negative_numbers = true)]
    Round { amount: i64, code: String },

    /// Display the amount
    #[command(allow_negative_numbers = true)]
    Format { amount: i64, code: String },

    /// Print the database string and the JSON
    #[command(allow_negative_numbers = true)]
    Encode { amount: i64, code: String },

    /// Parse a database string such as 2550|USD
    Decode {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
}

/// Registry and codecs built from configuration.
#[derive(Debug)]
pub struct Context {
    registry: CurrencyRegistry,
    db: DbCodec,
    json: JsonCodec,
}

impl Context {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let registry = CurrencyRegistry::from_config(config);
        Self {
            db: DbCodec::new(&config.codec),
            json: JsonCodec::new(registry.clone()),
            registry,
        }
    }

    /// Executes a command and returns the lines to print.
    pub fn run(&self, command: &Command) -> AppResult<Vec<String>> {
        match command {
            Command::Split {
                amount,
                code,
                parts,
            } => {
                let parts = self.registry.money(*amount, code).split(*parts)?;
                Ok(display_all(&parts))
            }
            Command::Allocate {
                amount,
                code,
                ratios,
            } => {
                let parts = self.registry.money(*amount, code).allocate(ratios)?;
                Ok(display_all(&parts))
            }
            Command::Round { amount, code } => {
                let rounded = self.registry.money(*amount, code).round()?;
                Ok(vec![rounded.to_string()])
            }
            Command::Format { amount, code } => {
                Ok(vec![self.registry.money(*amount, code).to_string()])
            }
            Command::Encode { amount, code } => {
                let money = self.registry.money(*amount, code);
                Ok(vec![self.db.encode_money(&money), self.json.encode(&money)?])
            }
            Command::Decode { input } => {
                let money = self.db.decode_money(&self.registry, input)?;
                Ok(vec![money.to_string(), self.json.encode(&money)?])
            }
        }
    }
}

fn display_all(parts: &[Money]) -> Vec<String> {
    parts.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use moneta_shared::{CodecConfig, CurrencyConfig};
    use rstest::rstest;

    fn parse(line: &str) -> Result<Command, clap::Error> {
        let args = std::iter::once("moneta").chain(line.split_whitespace());
        Cli::try_parse_from(args).map(|cli| cli.command)
    }

    fn run(line: &str) -> AppResult<Vec<String>> {
        let command = parse(line).unwrap();
        Context::from_config(&AppConfig::default()).run(&command)
    }

    #[test]
    fn test_parse_allocate() {
        assert_eq!(
            parse("allocate 100 usd 1 2 3").unwrap(),
            Command::Allocate {
                amount: 100,
                code: "usd".into(),
                ratios: vec![1, 2, 3],
            }
        );
    }

    #[test]
    fn test_parse_negative_values() {
        assert_eq!(
            parse("split -1000 USD 3").unwrap(),
            Command::Split {
                amount: -1000,
                code: "USD".into(),
                parts: 3,
            }
        );
        assert_eq!(
            parse("decode -10|GBP").unwrap(),
            Command::Decode {
                input: "-10|GBP".into(),
            }
        );
    }

    #[rstest]
    #[case("split 100 USD")]
    #[case("allocate 100 USD")]
    #[case("round 100")]
    #[case("decode")]
    fn test_parse_missing_arguments(#[case] line: &str) {
        let err = parse(line).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.use_stderr());
    }

    #[rstest]
    #[case("")]
    #[case("convert 100 USD EUR")]
    fn test_parse_rejects_unknown_or_missing_command(#[case] line: &str) {
        let err = parse(line).unwrap_err();
        assert!(err.use_stderr());
        assert!(err.render().to_string().contains("Usage: moneta"));
    }

    #[rstest]
    #[case("split ten USD 3")]
    #[case("split 100 USD three")]
    #[case("allocate 100 USD 1 x")]
    #[case("round 12.35 USD")]
    fn test_parse_bad_integers(#[case] line: &str) {
        assert_eq!(parse(line).unwrap_err().kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_help_is_not_an_error_exit() {
        let err = parse("--help").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(!err.use_stderr());
    }

    #[rstest]
    #[case("split 1000 USD 3", &["$3.34", "$3.33", "$3.33"])]
    #[case("allocate 100 USD 33 33 33", &["$0.34", "$0.33", "$0.33"])]
    #[case("round 1235 USD", &["$12.40"])]
    #[case("format 123456 EUR", &["€1,234.56"])]
    #[case("encode 2550 usd", &["2550|USD", r#"{"amount":2550,"currency":"USD"}"#])]
    #[case("decode -10|GBP", &["-£0.10", r#"{"amount":-10,"currency":"GBP"}"#])]
    fn test_run(#[case] line: &str, #[case] expected: &[&str]) {
        assert_eq!(run(line).unwrap(), expected);
    }

    #[rstest]
    #[case("split 100 USD 0", 65)]
    #[case("allocate 100 USD 1 -1", 65)]
    #[case("decode 100|XYZ", 65)]
    #[case("decode garbage", 65)]
    fn test_run_failures(#[case] line: &str, #[case] exit_code: i32) {
        assert_eq!(run(line).unwrap_err().exit_code(), exit_code);
    }

    #[test]
    fn test_context_uses_configuration() {
        let mut points = CurrencyConfig::new("PTS");
        points.fraction = 0;
        let config = AppConfig {
            codec: CodecConfig {
                db_separator: ";".into(),
            },
            currencies: vec![points],
            ..AppConfig::default()
        };
        let context = Context::from_config(&config);

        let lines = context.run(&parse("decode 1500;PTS").unwrap()).unwrap();
        assert_eq!(lines[0], "1,500PTS");
    }
}
