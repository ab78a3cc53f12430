//! Repo lookups against the Repo service
//!
//! Project and User services never read the Repo store directly. They resolve
//! repo ids over HTTP through a `RepoDirectory`.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use repohub_common::{EntityId, Repo};
use tracing::warn;

use crate::{
    client::{fetch_json, HttpClientTrait},
    error::Result,
};

/// Resolves repo ids to repo records
#[async_trait]
pub trait RepoDirectory: Send + Sync {
    /// Find a repo by id; `None` when the Repo service does not know it
    async fn find_repo(&self, id: EntityId) -> Result<Option<Repo>>;
}

/// `RepoDirectory` backed by the Repo service's `GET /repo/{id}`
pub struct HttpRepoDirectory {
    client: Arc<dyn HttpClientTrait>,
    base_url: String,
}

impl HttpRepoDirectory {
    /// Create a directory for the Repo service at `base_url`
    pub fn new(client: Arc<dyn HttpClientTrait>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Base URL of the Repo service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RepoDirectory for HttpRepoDirectory {
    async fn find_repo(&self, id: EntityId) -> Result<Option<Repo>> {
        let url = format!("{}/repo/{}", self.base_url, id);
        fetch_json(self.client.as_ref(), &url).await
    }
}

/// Replace repo ids with repo records, keeping order and duplicates
///
/// Ids the Repo service does not know are dropped from the result.
pub async fn expand_repos(directory: &dyn RepoDirectory, ids: &[EntityId]) -> Result<Vec<Repo>> {
    let mut resolved: HashMap<EntityId, Option<Repo>> = HashMap::new();
    let mut repos = Vec::with_capacity(ids.len());

    for &id in ids {
        if !resolved.contains_key(&id) {
            let repo = directory.find_repo(id).await?;
            if repo.is_none() {
                warn!(repo_id = id, "Dropping dangling repo reference");
            }
            resolved.insert(id, repo);
        }

        if let Some(Some(repo)) = resolved.get(&id) {
            repos.push(repo.clone());
        }
    }

    Ok(repos)
}
