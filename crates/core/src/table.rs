//! The symptom to condition lookup table.
//!
//! A table maps a canonical symptom key to an ordered list of candidate condition names. It is
//! built once at startup, either from the embedded default or from a YAML file, and is
//! immutable afterwards. Sessions share it behind an `Arc`.
//!
//! ## YAML format
//!
//! ```yaml
//! fever: ["Common Cold", "Flu", "COVID-19", "Dengue"]
//! sore throat: ["Strep Throat", "Common Cold"]
//! ```
//!
//! Keys are normalised (trimmed and lowercased) on load. Listing order follows the file.

use crate::constants::EMBEDDED_TABLE_YAML;
use crate::{PredictorError, PredictorResult};
use medware_types::normalise;
use std::collections::HashMap;
use std::path::Path;

/// One symptom and the conditions it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub symptom: String,
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SymptomConditionTable {
    entries: Vec<TableEntry>,
    index: HashMap<String, usize>,
}

impl SymptomConditionTable {
    /// Builds a table from `(symptom, conditions)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a `PredictorError` if:
    /// - a symptom key is empty after normalisation,
    /// - two keys normalise to the same symptom,
    /// - any condition name is empty or whitespace-only.
    pub fn from_entries<I, K, C>(entries: I) -> PredictorResult<Self>
    where
        I: IntoIterator<Item = (K, C)>,
        K: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let mut table = Self::default();

        for (symptom, conditions) in entries {
            let key = normalise(symptom.as_ref());
            if key.is_empty() {
                return Err(PredictorError::InvalidInput(
                    "symptom table keys cannot be empty".into(),
                ));
            }
            if table.index.contains_key(&key) {
                return Err(PredictorError::DuplicateTableKey(key));
            }

            let mut names = Vec::new();
            for condition in conditions {
                let name = condition.as_ref().trim();
                if name.is_empty() {
                    return Err(PredictorError::EmptyConditionName(key));
                }
                names.push(name.to_string());
            }

            table.index.insert(key.clone(), table.entries.len());
            table.entries.push(TableEntry {
                symptom: key,
                conditions: names,
            });
        }

        Ok(table)
    }

    /// Parses a table from YAML text.
    pub fn from_yaml_str(yaml: &str) -> PredictorResult<Self> {
        let mapping: serde_yaml::Mapping =
            serde_yaml::from_str(yaml).map_err(PredictorError::YamlDeserialization)?;

        let mut pairs = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let symptom: String =
                serde_yaml::from_value(key).map_err(PredictorError::YamlDeserialization)?;
            let conditions: Vec<String> =
                serde_yaml::from_value(value).map_err(PredictorError::YamlDeserialization)?;
            pairs.push((symptom, conditions));
        }

        Self::from_entries(pairs)
    }

    /// Loads a table from a YAML file on disk.
    pub fn load(path: &Path) -> PredictorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(PredictorError::FileRead)?;
        let table = Self::from_yaml_str(&contents)?;
        tracing::info!(
            "loaded symptom table from {} ({} symptoms)",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    /// The default table bundled with the crate.
    pub fn embedded() -> PredictorResult<Self> {
        Self::from_yaml_str(EMBEDDED_TABLE_YAML)
    }

    /// Returns the candidate conditions for a symptom, if the table knows it.
    ///
    /// The symptom is normalised before lookup, so callers may pass raw user text.
    pub fn conditions_for(&self, symptom: &str) -> Option<&[String]> {
        self.index
            .get(&normalise(symptom))
            .map(|&i| self.entries[i].conditions.as_slice())
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.index.contains_key(&normalise(symptom))
    }

    /// Symptom keys in table order.
    pub fn symptoms(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.symptom.as_str())
    }

    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_table_loads() {
        let table = SymptomConditionTable::embedded().expect("embedded table should parse");
        assert_eq!(table.len(), 25);
        assert_eq!(table.symptoms().next(), Some("fever"));
        assert_eq!(
            table.conditions_for("chills").unwrap(),
            ["Flu", "Pneumonia", "Malaria", "COVID-19"]
        );
        assert_eq!(
            table.conditions_for("ear pain").unwrap()[1],
            "Swimmer's Ear"
        );
    }

    #[test]
    fn test_lookup_is_case_and_whitespace_insensitive() {
        let table =
            SymptomConditionTable::from_entries([("Sore Throat", ["Strep Throat"])]).unwrap();
        assert!(table.contains("  SORE throat "));
        assert_eq!(table.conditions_for("sore throat").unwrap(), ["Strep Throat"]);
        assert!(table.conditions_for("sore").is_none());
    }

    #[test]
    fn test_from_yaml_preserves_file_order() {
        let table = SymptomConditionTable::from_yaml_str(
            "zebra cough: [A]\napple ache: [B, C]\nmiddle: []\n",
        )
        .unwrap();
        let keys: Vec<&str> = table.symptoms().collect();
        assert_eq!(keys, ["zebra cough", "apple ache", "middle"]);
        assert_eq!(table.conditions_for("middle").unwrap().len(), 0);
    }

    #[test]
    fn test_rejects_keys_that_normalise_to_the_same_symptom() {
        let err = SymptomConditionTable::from_yaml_str("Fever: [Flu]\nfever: [Dengue]\n")
            .expect_err("should reject duplicate key");
        assert!(matches!(err, PredictorError::DuplicateTableKey(k) if k == "fever"));
    }

    #[test]
    fn test_rejects_empty_key() {
        let err = SymptomConditionTable::from_entries([("   ", vec!["Flu"])])
            .expect_err("should reject empty key");
        assert!(matches!(err, PredictorError::InvalidInput(msg) if msg.contains("cannot be empty")));
    }

    #[test]
    fn test_rejects_empty_condition_name() {
        let err = SymptomConditionTable::from_yaml_str("rash: [Eczema, \"  \"]\n")
            .expect_err("should reject blank condition");
        assert!(matches!(err, PredictorError::EmptyConditionName(k) if k == "rash"));
    }

    #[test]
    fn test_rejects_non_list_values() {
        let err = SymptomConditionTable::from_yaml_str("rash: Eczema\n")
            .expect_err("should reject scalar value");
        assert!(matches!(err, PredictorError::YamlDeserialization(_)));

        let err = SymptomConditionTable::from_yaml_str("- fever\n- cough\n")
            .expect_err("should reject sequence document");
        assert!(matches!(err, PredictorError::YamlDeserialization(_)));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("table.yaml");
        fs::write(&path, "fever: [Flu, COVID-19]\ncough: [Flu, Bronchitis]\n").unwrap();

        let table = SymptomConditionTable::load(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.conditions_for("cough").unwrap(), ["Flu", "Bronchitis"]);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = SymptomConditionTable::load(&temp.path().join("missing.yaml"))
            .expect_err("should fail on missing file");
        assert!(matches!(err, PredictorError::FileRead(_)));
    }
}
