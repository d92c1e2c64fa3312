//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    ///
    /// Exit code 2 when the file cannot be loaded or fails validation.
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(error = %e, "Configuration rejected");
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Default Currency: {}", config.billing.default_currency);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_missing_file() {
        let code = ValidateArgs {}
            .execute("/nonexistent/clinic.toml")
            .unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn test_validate_bad_currency() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[billing]\ndefault_currency = \"usd\"").unwrap();
        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn test_validate_good_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[billing]\ndefault_currency = \"BRL\"").unwrap();
        let code = ValidateArgs {}
            .execute(file.path().to_str().unwrap())
            .unwrap();
        assert_eq!(code, 0);
    }
}
