//! User store

use repohub_common::{EntityId, EntityTable, User};

/// Sole owner of user records
#[derive(Debug, Default)]
pub struct UserStore {
    users: EntityTable<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_user(&self, id: EntityId) -> Option<User> {
        self.users.get(id)
    }

    /// All users in creation order, repo ids unexpanded
    pub fn list_users(&self) -> Vec<User> {
        self.users.list()
    }

    /// Create a user; usernames need not be unique
    pub fn add_user(&self, username: impl Into<String>) -> User {
        let username = username.into();
        let user = self.users.insert_with(|id| User {
            id,
            username,
            repos: None,
        });
        tracing::info!(user_id = user.id, username = %user.username, "User added");
        user
    }

    /// Append `repo_id` to the first user named `username`
    pub fn attach_repo(&self, username: &str, repo_id: EntityId) -> Option<User> {
        let updated = self
            .users
            .update_first(|u| u.username == username, |u| u.attach(repo_id));

        if let Some(user) = &updated {
            tracing::info!(user_id = user.id, repo_id, "Repo attached to user");
        } else {
            tracing::debug!(username, "No user to attach repo to");
        }
        updated
    }
}
