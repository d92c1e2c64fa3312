//! Check command implementation
//!
//! Runs a single value through its validating factory and reports the
//! normalized form or the rule it violated.

use crate::config::load_config;
use crate::domain::{CurrencyCode, MonetaryAmount, OrgTaxId, PersonId};
use crate::log_identifier_check;
use clap::{Args, Subcommand};
use std::io::Write;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(subcommand)]
    pub target: CheckTarget,
}

/// Kind of value to check
#[derive(Subcommand, Debug)]
pub enum CheckTarget {
    /// Person identifier (XXX-XX-XXXX)
    PersonId { value: String },

    /// Organization tax identifier (XX-XXXXXXX)
    TaxId { value: String },

    /// Monetary amount, normalized to two decimal places
    Amount {
        value: String,

        /// Currency code; falls back to billing.default_currency
        #[arg(long)]
        currency: Option<String>,
    },

    /// ISO 4217 style currency code
    Currency { value: String },
}

impl CheckArgs {
    /// Execute the check command
    ///
    /// Exit code 0 when the value is valid, 1 otherwise.
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let default_currency = match load_config(config_path) {
            Ok(config) => config.billing.default_currency,
            Err(e) => {
                tracing::debug!(error = %e, "No usable configuration, using USD");
                "USD".to_string()
            }
        };

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run(&default_currency, &mut out)
    }

    /// Check the value and write the outcome to `out`
    pub fn run(&self, default_currency: &str, out: &mut impl Write) -> anyhow::Result<i32> {
        let outcome = match &self.target {
            CheckTarget::PersonId { value } => {
                let result = PersonId::parse(value);
                log_identifier_check!("person_id", result.is_ok());
                result.map(|id| id.formatted())
            }
            CheckTarget::TaxId { value } => {
                let result = OrgTaxId::parse(value);
                log_identifier_check!("tax_id", result.is_ok());
                result.map(|id| id.formatted())
            }
            CheckTarget::Amount { value, currency } => {
                let code = currency.as_deref().unwrap_or(default_currency);
                CurrencyCode::create(code).and_then(|currency| {
                    MonetaryAmount::parse(value).map(|amount| format!("{amount} {currency}"))
                })
            }
            CheckTarget::Currency { value } => CurrencyCode::create(value).map(|c| c.to_string()),
        };

        match outcome {
            Ok(normalized) => {
                writeln!(out, "valid: {normalized}")?;
                Ok(0)
            }
            Err(e) => {
                writeln!(out, "invalid: {e}")?;
                Ok(1)
            }
        }
    }
}
