//! Domain layer: membership rules and the messages shown to users

use crate::{error::Result, repository::MemberRepository};

/// Team operations on top of a member repository
pub struct TeamManager<R> {
    repository: R,
}

impl<R: MemberRepository> TeamManager<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Add a member, reporting whether they were already on the team
    pub fn add_member_to_team(&self, name: &str) -> Result<String> {
        let message = if self.repository.add_member(name)? {
            format!("Member '{}' added successfully.", name)
        } else {
            format!("Member '{}' already exists in the team.", name)
        };
        Ok(message)
    }

    /// Remove a member, reporting whether they were on the team
    pub fn remove_member_from_team(&self, name: &str) -> Result<String> {
        let message = if self.repository.remove_member(name)? {
            format!("Member '{}' removed successfully.", name)
        } else {
            format!("Member '{}' not found in the team.", name)
        };
        Ok(message)
    }

    pub fn get_team_members(&self) -> Result<Vec<String>> {
        self.repository.list_members()
    }
}
