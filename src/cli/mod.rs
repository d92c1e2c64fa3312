//! CLI interface and argument parsing
//!
//! Command-line front end for the clinic domain core using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Clinic records - identifier, billing and configuration checks
#[derive(Parser, Debug)]
#[command(name = "clinic")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "clinic.toml", env = "CLINIC_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CLINIC_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an identifier, amount or currency code
    Check(commands::check::CheckArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::check::CheckTarget;

    #[test]
    fn test_cli_parse_check_person_id() {
        let cli = Cli::parse_from(["clinic", "check", "person-id", "219-09-9999"]);
        assert_eq!(cli.config, "clinic.toml");
        match cli.command {
            Commands::Check(args) => {
                assert!(matches!(args.target, CheckTarget::PersonId { ref value } if value == "219-09-9999"))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_check_amount_with_currency() {
        let cli = Cli::parse_from(["clinic", "check", "amount", "12.5", "--currency", "EUR"]);
        match cli.command {
            Commands::Check(args) => match args.target {
                CheckTarget::Amount { value, currency } => {
                    assert_eq!(value, "12.5");
                    assert_eq!(currency.as_deref(), Some("EUR"));
                }
                other => panic!("unexpected target: {other:?}"),
            },
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["clinic", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["clinic", "--log-level", "debug", "check", "currency", "USD"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["clinic", "init", "--output", "x.toml", "--force"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.output, "x.toml");
                assert!(args.force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_requires_check_value() {
        assert!(Cli::try_parse_from(["clinic", "check", "tax-id"]).is_err());
    }
}
