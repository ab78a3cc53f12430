//! Repo store

use repohub_common::{EntityId, EntityTable, Repo};

/// Sole owner of repo records
#[derive(Debug, Default)]
pub struct RepoStore {
    repos: EntityTable<Repo>,
}

impl RepoStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a repo by id
    pub fn get_repo(&self, id: EntityId) -> Option<Repo> {
        self.repos.get(id)
    }

    /// All repos in creation order
    pub fn list_repos(&self) -> Vec<Repo> {
        self.repos.list()
    }

    /// Create a repo; duplicate names are allowed
    pub fn add_repo(&self, name: impl Into<String>) -> Repo {
        let name = name.into();
        let repo = self.repos.insert_with(|id| Repo { id, name });
        tracing::info!(repo_id = repo.id, name = %repo.name, "Repo added");
        repo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let store = RepoStore::new();
        let repo = store.add_repo("core");

        assert_eq!(repo.id, 1);
        assert_eq!(store.get_repo(1).unwrap().name, "core");
        assert!(store.get_repo(2).is_none());
        assert!(store.get_repo(0).is_none());
    }

    #[test]
    fn test_duplicate_names_get_new_ids() {
        let store = RepoStore::new();
        let first = store.add_repo("core");
        let second = store.add_repo("core");

        assert_ne!(first.id, second.id);
        assert_eq!(store.list_repos(), vec![first, second]);
    }
}
