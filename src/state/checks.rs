use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Method, UnitSystem};

/// Namespace prefix for step-check keys; bulk reset removes everything
/// under it.
pub const CHECKS_PREFIX: &str = "checks::";

/// Completion flags for one (flavor, method, weight, units) combination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepChecks {
    #[serde(rename = "Steps", default)]
    steps: BTreeMap<usize, bool>,
}

impl StepChecks {
    fn is_checked(&self, step: usize) -> bool {
        self.steps.get(&step).copied().unwrap_or(false)
    }

    fn set(&mut self, step: usize, value: bool) {
        self.steps.insert(step, value);
    }
}

/// Persisted step-completion checkboxes.
///
/// One entry per (flavor, method, batch weight, unit system) combination,
/// keyed by a composite textual key and mapping step index to completion.
/// Backed by a JSON file; a missing file is an empty store.
pub struct CheckStore {
    path: PathBuf,
    entries: HashMap<String, StepChecks>,
}

impl CheckStore {
    /// Load the store from a JSON file. A missing file yields an empty
    /// store rather than an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            HashMap::new()
        };
        Ok(Self { path, entries })
    }

    /// Load, degrading to an empty store with a warning when the file is
    /// unreadable. Persistence problems never block the session.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            eprintln!(
                "Warning: could not read {} ({}); starting with empty checks",
                path.display(),
                e
            );
            Self {
                path: path.to_path_buf(),
                entries: HashMap::new(),
            }
        })
    }

    /// Write the store back to its file.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Composite key for one (flavor, method, weight, units) combination.
    pub fn key_for(flavor: &str, method: Method, lbs: u32, units: UnitSystem) -> String {
        format!(
            "{}{}::{}::{}::{}",
            CHECKS_PREFIX,
            flavor,
            method.key(),
            lbs,
            units.key()
        )
    }

    /// Whether a step is checked under the given key.
    pub fn is_checked(&self, key: &str, step: usize) -> bool {
        self.entries
            .get(key)
            .map(|checks| checks.is_checked(step))
            .unwrap_or(false)
    }

    /// Set one step's completion under the given key.
    pub fn set_check(&mut self, key: &str, step: usize, value: bool) {
        self.entries.entry(key.to_string()).or_default().set(step, value);
    }

    /// Count of completed steps under a key, capped at `total`.
    pub fn done_count(&self, key: &str, total: usize) -> usize {
        (0..total).filter(|&idx| self.is_checked(key, idx)).count()
    }

    /// Remove every entry under the checks namespace. Returns how many
    /// entries were removed.
    pub fn reset(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(CHECKS_PREFIX));
        before - self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempdir().unwrap();
        let store = CheckStore::load(dir.path().join("absent.json")).unwrap();
        assert!(!store.is_checked("checks::mango::bake::2::US", 0));
    }

    #[test]
    fn test_key_format() {
        let key = CheckStore::key_for("mango", Method::Bake, 2, UnitSystem::Us);
        assert_eq!(key, "checks::mango::bake::2::US");

        let key = CheckStore::key_for("cajun", Method::AirFry, 4, UnitSystem::Metric);
        assert_eq!(key, "checks::cajun::airfry::4::Metric");
    }

    #[test]
    fn test_checks_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("checks.json");

        let key = CheckStore::key_for("buffalo", Method::Bake, 2, UnitSystem::Us);
        let mut store = CheckStore::load(&path).unwrap();
        store.set_check(&key, 0, true);
        store.set_check(&key, 3, true);
        store.set_check(&key, 3, false);
        store.save().unwrap();

        let reloaded = CheckStore::load(&path).unwrap();
        assert!(reloaded.is_checked(&key, 0));
        assert!(!reloaded.is_checked(&key, 3));
        assert_eq!(reloaded.done_count(&key, 8), 1);
    }

    #[test]
    fn test_file_shape_is_typed_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("checks.json");

        let key = CheckStore::key_for("mango", Method::Bake, 2, UnitSystem::Us);
        let mut store = CheckStore::load(&path).unwrap();
        store.set_check(&key, 2, true);
        store.save().unwrap();

        // Entries serialize as named StepChecks records, not bare maps
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"Steps\""));

        let parsed: HashMap<String, StepChecks> = serde_json::from_str(&raw).unwrap();
        assert!(parsed.get(&key).unwrap().is_checked(2));
    }

    #[test]
    fn test_checks_keyed_per_configuration() {
        let dir = tempdir().unwrap();
        let mut store = CheckStore::load(dir.path().join("checks.json")).unwrap();

        let us = CheckStore::key_for("mango", Method::Bake, 2, UnitSystem::Us);
        let metric = CheckStore::key_for("mango", Method::Bake, 2, UnitSystem::Metric);
        store.set_check(&us, 1, true);

        assert!(store.is_checked(&us, 1));
        assert!(!store.is_checked(&metric, 1));
    }

    #[test]
    fn test_reset_removes_namespace() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("checks.json");

        let mut store = CheckStore::load(&path).unwrap();
        store.set_check(
            &CheckStore::key_for("mango", Method::Bake, 2, UnitSystem::Us),
            0,
            true,
        );
        store.set_check(
            &CheckStore::key_for("bbq", Method::AirFry, 3, UnitSystem::Us),
            2,
            true,
        );

        let removed = store.reset();
        assert_eq!(removed, 2);
        store.save().unwrap();

        let reloaded = CheckStore::load(&path).unwrap();
        assert_eq!(
            reloaded.done_count(&CheckStore::key_for("mango", Method::Bake, 2, UnitSystem::Us), 9),
            0
        );
    }
}
