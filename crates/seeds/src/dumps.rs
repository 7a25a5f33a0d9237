//! Filesystem store for seeds results.
//!
//! Stores one JSON file per scenario, `<dir>/<scenario>_seeds.json`.
//! Writes go to a temporary file in the same directory which is then
//! renamed over the target, so readers never observe a partial dump.
//! Concurrent saves of one scenario are last-writer-wins.

use crate::error::{Result, SeedsError};
use crate::result::SeedsResult;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default dumps directory, relative to the working directory.
pub const DEFAULT_DUMPS_DIR: &str = "dumps";

#[derive(Debug, Clone)]
pub struct DumpStore {
    dir: PathBuf,
}

impl Default for DumpStore {
    fn default() -> Self {
        Self::new(DEFAULT_DUMPS_DIR)
    }
}

impl DumpStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, scenario: &str) -> PathBuf {
        self.dir.join(format!("{scenario}_seeds.json"))
    }

    pub fn exists(&self, scenario: &str) -> bool {
        self.path_for(scenario).is_file()
    }

    /// Persist `result` for `scenario`, replacing any previous dump.
    pub fn save(&self, scenario: &str, result: &SeedsResult) -> Result<PathBuf> {
        validate_scenario_name(scenario)?;
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(scenario);
        let content = serde_json::to_vec(result).map_err(std::io::Error::other)?;

        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(&content)?;
        file.as_file().sync_all()?;
        file.persist(&path).map_err(|e| e.error)?;

        tracing::debug!("Seeding result saved to file: {}", path.display());
        Ok(path)
    }

    /// Load the dump of `scenario`.
    pub fn load(&self, scenario: &str) -> Result<SeedsResult> {
        validate_scenario_name(scenario)?;
        let path = self.path_for(scenario);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(SeedsError::NotFound(path)),
            Err(e) => return Err(e.into()),
        };

        let result = serde_json::from_str(&content).map_err(|e| {
            SeedsError::Validation(format!("Invalid seeds dump {}: {e}", path.display()))
        })?;

        tracing::debug!("Seeding result loaded from file: {}", path.display());
        Ok(result)
    }
}

fn validate_scenario_name(scenario: &str) -> Result<()> {
    if scenario.is_empty()
        || scenario.contains(['/', '\\'])
        || scenario == "."
        || scenario == ".."
    {
        return Err(SeedsError::Validation(format!(
            "Invalid scenario name: {scenario:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{SeedAccountResult, SeedCardResult, SeedOperationResult, SeedUserResult};
    use gateway_types::{AccountType, CardType, OperationType};
    use tempfile::TempDir;

    fn sample() -> SeedsResult {
        let mut account = SeedAccountResult::new("acc-1", AccountType::DebitCard);
        account.cards.push(SeedCardResult {
            card_id: "card-1".to_string(),
            card_type: CardType::Physical,
        });
        account.operations.push(SeedOperationResult {
            operation_id: "op-1".to_string(),
            operation_type: OperationType::CashWithdrawal,
        });
        let mut user = SeedUserResult::new("user-1");
        user.accounts.push(account);
        SeedsResult { users: vec![user] }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = DumpStore::new(temp_dir.path().join("dumps"));

        let path = store.save("round_trip", &sample()).unwrap();
        assert_eq!(path, temp_dir.path().join("dumps/round_trip_seeds.json"));
        assert!(store.exists("round_trip"));

        assert_eq!(store.load("round_trip").unwrap(), sample());
    }

    #[test]
    fn test_save_replaces_previous_dump() {
        let temp_dir = TempDir::new().unwrap();
        let store = DumpStore::new(temp_dir.path());

        store.save("replace", &sample()).unwrap();
        store.save("replace", &SeedsResult::default()).unwrap();

        assert_eq!(store.load("replace").unwrap(), SeedsResult::default());
        // Only the dump itself remains; temp files were renamed away.
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_dump_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let store = DumpStore::new(temp_dir.path());

        assert!(!store.exists("absent"));
        match store.load("absent").unwrap_err() {
            SeedsError::NotFound(path) => assert_eq!(path, store.path_for("absent")),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_dump_is_validation_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = DumpStore::new(temp_dir.path());

        fs::write(store.path_for("broken"), r#"{"users": [{"accounts": []}]}"#).unwrap();
        assert!(matches!(
            store.load("broken").unwrap_err(),
            SeedsError::Validation(_)
        ));
    }

    #[test]
    fn test_path_like_scenario_is_rejected() {
        let store = DumpStore::default();
        assert!(matches!(
            store.save("../escape", &SeedsResult::default()).unwrap_err(),
            SeedsError::Validation(_)
        ));
        assert_eq!(store.path_for("x"), PathBuf::from("dumps/x_seeds.json"));
    }
}
