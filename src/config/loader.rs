//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ClinicConfig;
use crate::domain::{ClinicError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ClinicConfig
/// 4. Applies environment variable overrides (CLINIC_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns `ClinicError::Configuration` if the file is missing or unreadable,
/// a referenced variable is unset, parsing fails or validation fails.
///
/// # Examples
///
/// ```no_run
/// use clinic_records::config::loader::load_config;
///
/// let config = load_config("clinic.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ClinicConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ClinicError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ClinicError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ClinicConfig = toml::from_str(&contents)
        .map_err(|e| ClinicError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ClinicError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left alone. Every missing variable is reported at once.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ClinicError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    processed_line = processed_line.replace(&format!("${{{var_name}}}"), &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(ClinicError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using the CLINIC_ prefix
///
/// Variables follow the pattern CLINIC_<SECTION>_<KEY>, for example
/// CLINIC_BILLING_DEFAULT_CURRENCY.
fn apply_env_overrides(config: &mut ClinicConfig) {
    if let Ok(val) = std::env::var("CLINIC_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("CLINIC_BILLING_DEFAULT_CURRENCY") {
        config.billing.default_currency = val;
    }

    if let Ok(val) = std::env::var("CLINIC_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("CLINIC_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("CLINIC_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("CLINIC_TEST_CURRENCY", "EUR");
        let input = "default_currency = \"${CLINIC_TEST_CURRENCY}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "default_currency = \"EUR\"");
        std::env::remove_var("CLINIC_TEST_CURRENCY");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("CLINIC_TEST_MISSING_A");
        std::env::remove_var("CLINIC_TEST_MISSING_B");
        let input = "a = \"${CLINIC_TEST_MISSING_A}\"\nb = \"${CLINIC_TEST_MISSING_B}\"";
        let err = substitute_env_vars(input).unwrap_err().to_string();
        assert!(err.contains("CLINIC_TEST_MISSING_A"));
        assert!(err.contains("CLINIC_TEST_MISSING_B"));
    }

    #[test]
    fn test_substitute_skips_comments() {
        std::env::remove_var("CLINIC_TEST_COMMENTED");
        let input = "# currency = \"${CLINIC_TEST_COMMENTED}\"";
        assert_eq!(substitute_env_vars(input).unwrap(), input);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-clinic.toml");
        assert!(matches!(result, Err(ClinicError::Configuration(_))));
    }
}
