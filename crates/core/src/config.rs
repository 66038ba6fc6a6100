//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services.
//! Library code never reads environment variables; binaries read them and build a
//! `CoreConfig` from the values.

use crate::{PredictorError, PredictorResult, SymptomConditionTable};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Environment variable naming an optional YAML symptom table.
pub const SYMPTOM_TABLE_ENV: &str = "MEDWARE_SYMPTOM_TABLE";

/// Environment variable naming the user a session belongs to.
pub const USER_ENV: &str = "MEDWARE_USER";

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    symptom_table: Option<PathBuf>,
    user_name: Option<String>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// A table path that is given must point at an existing file.
    pub fn new(symptom_table: Option<PathBuf>, user_name: Option<String>) -> PredictorResult<Self> {
        if let Some(path) = &symptom_table {
            if !path.is_file() {
                return Err(PredictorError::InvalidInput(format!(
                    "symptom table {} is not a file",
                    path.display()
                )));
            }
        }

        Ok(Self {
            symptom_table,
            user_name: user_name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        })
    }

    pub fn symptom_table(&self) -> Option<&Path> {
        self.symptom_table.as_deref()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Builds the shared symptom table: the configured file if any, otherwise the
    /// embedded default.
    pub fn load_table(&self) -> PredictorResult<Arc<SymptomConditionTable>> {
        let table = match &self.symptom_table {
            Some(path) => SymptomConditionTable::load(path)?,
            None => {
                let table = SymptomConditionTable::embedded()?;
                tracing::info!("using embedded symptom table ({} symptoms)", table.len());
                table
            }
        };
        Ok(Arc::new(table))
    }
}

/// Turns a raw environment value into an optional path. Blank values count as unset.
pub fn path_from_env_value(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_uses_embedded_table() {
        let cfg = CoreConfig::default();
        assert!(cfg.symptom_table().is_none());
        let table = cfg.load_table().unwrap();
        assert_eq!(table.len(), 25);
    }

    #[test]
    fn test_config_loads_table_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.yaml");
        fs::write(&path, "rash: [Eczema, Psoriasis]\n").unwrap();

        let cfg = CoreConfig::new(Some(path.clone()), None).unwrap();
        assert_eq!(cfg.symptom_table(), Some(path.as_path()));
        let table = cfg.load_table().unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_config_rejects_missing_table_file() {
        let temp = TempDir::new().unwrap();
        let err = CoreConfig::new(Some(temp.path().join("nope.yaml")), None)
            .expect_err("should reject missing file");
        assert!(matches!(err, PredictorError::InvalidInput(msg) if msg.contains("is not a file")));

        let err = CoreConfig::new(Some(temp.path().to_path_buf()), None)
            .expect_err("should reject directory");
        assert!(matches!(err, PredictorError::InvalidInput(_)));
    }

    #[test]
    fn test_blank_user_name_is_unset() {
        let cfg = CoreConfig::new(None, Some("   ".into())).unwrap();
        assert_eq!(cfg.user_name(), None);

        let cfg = CoreConfig::new(None, Some(" Ada ".into())).unwrap();
        assert_eq!(cfg.user_name(), Some("Ada"));
    }

    #[test]
    fn test_path_from_env_value() {
        assert_eq!(path_from_env_value(None), None);
        assert_eq!(path_from_env_value(Some("  ".into())), None);
        assert_eq!(
            path_from_env_value(Some(" tables/custom.yaml ".into())),
            Some(PathBuf::from("tables/custom.yaml"))
        );
    }
}
