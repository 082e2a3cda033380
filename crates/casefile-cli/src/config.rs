//! Environment configuration.

use std::fmt;
use std::str::FromStr;

use casefile_core::error::CatalogError;

/// Environment variable selecting the output format.
pub const FORMAT_VAR: &str = "CASEFILE_FORMAT";

/// Output format for the emission pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `translations.ts` object-literal lines.
    #[default]
    Ts,
    /// A single JSON object.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ts" => Ok(Self::Ts),
            "json" => Ok(Self::Json),
            other => Err(CatalogError::Config(format!(
                "{FORMAT_VAR} must be `ts` or `json`, got `{other}`"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ts => "ts",
            Self::Json => "json",
        })
    }
}

/// Runtime configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Selected output format.
    pub format: OutputFormat,
}

impl Config {
    /// Reads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`; unset or unrecognised variables
    /// use defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let format = lookup(FORMAT_VAR).map_or_else(OutputFormat::default, |value| {
            value.parse().unwrap_or_else(|err: CatalogError| {
                tracing::warn!(error = %err, "falling back to default output format");
                OutputFormat::default()
            })
        });
        Self { format }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use casefile_core::error::CatalogError;

    use super::{Config, FORMAT_VAR, OutputFormat};

    #[test]
    fn test_defaults_to_ts_when_unset() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.format, OutputFormat::Ts);
    }

    #[test]
    fn test_reads_json_case_insensitively() {
        let config = Config::from_lookup(|name| {
            (name == FORMAT_VAR).then(|| " JSON ".to_owned())
        });

        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_falls_back_to_ts() {
        // Arrange
        let lookup = |name: &str| (name == FORMAT_VAR).then(|| "yaml".to_owned());

        // Act
        let config = Config::from_lookup(lookup);

        // Assert
        assert_eq!(config.format, OutputFormat::Ts);
    }

    #[test]
    fn test_output_format_parse_reports_unknown_value() {
        match OutputFormat::from_str("yaml") {
            Err(CatalogError::Config(message)) => assert!(message.contains("yaml")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
