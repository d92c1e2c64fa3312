//! Init command implementation
//!
//! Writes a commented default configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "clinic.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    ///
    /// Exit code 2 if the file exists and `--force` was not given.
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        fs::write(&self.output, Self::default_config())?;

        println!("Configuration file created: {}", self.output);
        println!();
        println!("Next steps:");
        println!("  1. Edit {} with your settings", self.output);
        println!("  2. Validate configuration: clinic validate-config");
        Ok(0)
    }

    fn default_config() -> &'static str {
        r#"# Clinic records configuration
#
# Values may reference environment variables as ${VAR_NAME}.
# Any key can be overridden with CLINIC_<SECTION>_<KEY>,
# e.g. CLINIC_BILLING_DEFAULT_CURRENCY=EUR.

[application]
# trace, debug, info, warn, error
log_level = "info"

[billing]
# Three upper-case letters
default_currency = "USD"

[logging]
local_enabled = false
local_path = "./logs"
# daily, hourly, never
local_rotation = "daily"
"#
    }
}
