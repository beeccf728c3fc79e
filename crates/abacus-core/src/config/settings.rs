use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CoreError;

/// Base name of the optional config file looked up in the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "abacus";

/// Prefix for environment overrides, e.g. `ABACUS_PROBABILITY__EXPERIMENTS`.
pub const ENV_PREFIX: &str = "ABACUS";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AbacusConfig {
    pub probability: ProbabilitySettings,
    pub charts: ChartSettings,
    pub budget: BudgetSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProbabilitySettings {
    /// Trials per experiment when the caller does not give a count.
    pub experiments: u32,
    pub seed: Option<u64>,
}

impl Default for ProbabilitySettings {
    fn default() -> Self {
        Self {
            experiments: 1000,
            seed: None,
        }
    }
}

/// Pixel sizes of the rendered budget charts.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartSettings {
    pub spending_width: u32,
    pub spending_height: u32,
    pub balance_width: u32,
    pub balance_height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            spending_width: 1200,
            spending_height: 500,
            balance_width: 1000,
            balance_height: 600,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BudgetSettings {
    pub export_dir: PathBuf,
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
        }
    }
}

impl AbacusConfig {
    /// Load defaults, then `abacus.toml` (or `path` when given), then the environment.
    ///
    /// The default file is optional; an explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let cfg: AbacusConfig = settings.try_deserialize()?;
        tracing::debug!(?cfg, "loaded configuration");
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = AbacusConfig::default();
        assert_eq!(cfg.probability.experiments, 1000);
        assert!(cfg.probability.seed.is_none());
        assert_eq!(cfg.charts.spending_width, 1200);
        assert_eq!(cfg.budget.export_dir, PathBuf::from("."));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[probability]\nexperiments = 250\nseed = 7").unwrap();

        let cfg = AbacusConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.probability.experiments, 250);
        assert_eq!(cfg.probability.seed, Some(7));
        assert_eq!(cfg.charts, ChartSettings::default());
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            AbacusConfig::load(Some(&missing)),
            Err(CoreError::Config(_))
        ));
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[probability]\nexperiments = \"lots\"").unwrap();
        assert!(AbacusConfig::load(Some(file.path())).is_err());
    }
}
