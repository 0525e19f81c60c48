use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{AnalysisSettings, BonusSettings, Config, ConfigOverrides, RevenueSettings};

/// Prefix for environment overrides, e.g. `SALESBOARD__BONUS__TOP_PCT=0.2`.
pub const ENV_PREFIX: &str = "SALESBOARD";

/// Loads the application configuration.
///
/// With an explicit `path` the file must exist. Without one, `salesboard.toml`
/// in the working directory is read if present. Environment variables prefixed
/// with `SALESBOARD__` are layered on top, and the result is validated before
/// it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("salesboard").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::RevenueModelId;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = write_config(
            r#"
            [bonus]
            top_pct = 0.2
            "#,
        );

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.bonus.top_pct, dec!(0.2));
        assert_eq!(config.bonus.podium_pct, dec!(0.10));
        assert_eq!(config.analysis.top_products_limit, 10);
        assert_eq!(config.revenue.model, RevenueModelId::Simple);
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"
            [analysis]
            top_products_limit = 5
            decimal_places = 2

            [revenue]
            model = "simple"

            [bonus]
            policy = "profit_tiers"
            top_pct = 0.15
            podium_pct = 0.1
            default_pct = 0.05
            last_pct = 0
            "#,
        );

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.analysis.top_products_limit, 5);
        assert_eq!(config.bonus.last_pct, dec!(0));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let file = write_config(
            r#"
            [analysis]
            top_products_limit = 0
            "#,
        );

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
