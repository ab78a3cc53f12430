//! Persistence layer: team members as a JSON array of names

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::Result;

/// File used when no path is given
pub const DEFAULT_TEAM_FILE: &str = "team_data.json";

/// Storage operations the domain layer depends on
pub trait MemberRepository {
    /// Add `name` if absent; `false` when it was already present
    fn add_member(&self, name: &str) -> Result<bool>;

    /// Remove the first occurrence of `name`; `false` when absent
    fn remove_member(&self, name: &str) -> Result<bool>;

    /// Members in insertion order
    fn list_members(&self) -> Result<Vec<String>>;
}

/// File-backed member list
///
/// The file holds a compact JSON array such as `["Alice","Bob"]`. Every
/// operation reads the whole file; mutations replace it (temp file, then
/// rename) only when the list actually changes.
#[derive(Debug, Clone)]
pub struct TeamData {
    path: PathBuf,
}

impl TeamData {
    /// Open the roster at `path`, creating it as `[]` if missing
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let data = Self { path: path.into() };
        if !data.path.exists() {
            tracing::debug!(path = %data.path.display(), "Creating empty team file");
            if let Some(parent) = data.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            data.write(&[])?;
        }
        Ok(data)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, members: &[String]) -> Result<()> {
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, serde_json::to_string(members)?)?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl MemberRepository for TeamData {
    fn add_member(&self, name: &str) -> Result<bool> {
        let mut members = self.read()?;
        if members.iter().any(|m| m == name) {
            return Ok(false);
        }

        members.push(name.to_string());
        self.write(&members)?;
        tracing::info!(member = name, count = members.len(), "Member stored");
        Ok(true)
    }

    fn remove_member(&self, name: &str) -> Result<bool> {
        let mut members = self.read()?;
        let Some(index) = members.iter().position(|m| m == name) else {
            return Ok(false);
        };

        members.remove(index);
        self.write(&members)?;
        tracing::info!(member = name, count = members.len(), "Member deleted");
        Ok(true)
    }

    fn list_members(&self) -> Result<Vec<String>> {
        self.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TeamError;
    use tempfile::TempDir;

    fn roster(dir: &TempDir) -> TeamData {
        TeamData::open(dir.path().join("team.json")).unwrap()
    }

    #[test]
    fn test_open_creates_empty_array() {
        let dir = TempDir::new().unwrap();
        let data = roster(&dir);

        assert_eq!(std::fs::read_to_string(data.path()).unwrap(), "[]");
        assert!(data.list_members().unwrap().is_empty());
    }

    #[test]
    fn test_open_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("team.json");
        std::fs::write(&path, r#"["Carol"]"#).unwrap();

        let data = TeamData::open(&path).unwrap();

        assert_eq!(data.list_members().unwrap(), vec!["Carol"]);
    }

    #[test]
    fn test_add_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let data = roster(&dir);

        assert!(data.add_member("Alice").unwrap());
        assert!(!data.add_member("Alice").unwrap());
        assert_eq!(data.list_members().unwrap(), vec!["Alice"]);
    }

    #[test]
    fn test_remove_first_occurrence_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("team.json");
        std::fs::write(&path, r#"["Bob","Alice","Bob"]"#).unwrap();
        let data = TeamData::open(&path).unwrap();

        assert!(data.remove_member("Bob").unwrap());
        assert_eq!(data.list_members().unwrap(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("team.json");
        std::fs::write(&path, "not json").unwrap();
        let data = TeamData::open(&path).unwrap();

        assert!(matches!(data.list_members(), Err(TeamError::Malformed(_))));
        assert!(matches!(data.add_member("Alice"), Err(TeamError::Malformed(_))));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_writes_are_compact_and_leave_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let data = roster(&dir);

        data.add_member("Alice").unwrap();
        data.add_member("Bob").unwrap();

        assert_eq!(
            std::fs::read_to_string(data.path()).unwrap(),
            r#"["Alice","Bob"]"#
        );
        assert!(!data.path().with_extension("tmp").exists());
    }
}
