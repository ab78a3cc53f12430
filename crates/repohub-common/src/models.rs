//! Records owned by the store services
//!
//! Repo lists on projects and users are unvalidated foreign keys into the
//! Repo service. They stay as raw ids in storage and are expanded into full
//! records only when a single project or user is fetched.

use serde::{Deserialize, Serialize};

/// Identifier assigned by a store on insertion (starts at 1)
pub type EntityId = u64;

/// A source repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    /// Repo ID
    pub id: EntityId,
    /// Repo name (not unique)
    pub name: String,
}

/// A project as stored by the Project service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project ID
    pub id: EntityId,
    /// Project name (not unique)
    pub name: String,
    /// Free-form project type, e.g. "lib"
    #[serde(rename = "type")]
    pub kind: String,
    /// Attached repo ids; absent until the first attachment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repos: Option<Vec<EntityId>>,
}

impl Project {
    /// Append a repo id, creating the list on first use
    pub fn attach(&mut self, repo_id: EntityId) {
        self.repos.get_or_insert_with(Vec::new).push(repo_id);
    }

    /// Attached repo ids in attachment order
    pub fn repo_ids(&self) -> &[EntityId] {
        self.repos.as_deref().unwrap_or_default()
    }
}

/// A user as stored by the User service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: EntityId,
    /// Username (not unique)
    pub username: String,
    /// Attached repo ids; absent until the first attachment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repos: Option<Vec<EntityId>>,
}

impl User {
    /// Append a repo id, creating the list on first use
    pub fn attach(&mut self, repo_id: EntityId) {
        self.repos.get_or_insert_with(Vec::new).push(repo_id);
    }

    /// Attached repo ids in attachment order
    pub fn repo_ids(&self) -> &[EntityId] {
        self.repos.as_deref().unwrap_or_default()
    }
}

/// Project with its repo ids replaced by full repo records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectView {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub repos: Vec<Repo>,
}

impl ProjectView {
    /// Build the expanded view from a stored project and its resolved repos
    pub fn expand(project: Project, repos: Vec<Repo>) -> Self {
        Self {
            id: project.id,
            name: project.name,
            kind: project.kind,
            repos,
        }
    }
}

/// User with its repo ids replaced by full repo records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: EntityId,
    pub username: String,
    pub repos: Vec<Repo>,
}

impl UserView {
    /// Build the expanded view from a stored user and its resolved repos
    pub fn expand(user: User, repos: Vec<Repo>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            repos,
        }
    }
}

/// Health response shared by every service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service name
    pub service: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
}
