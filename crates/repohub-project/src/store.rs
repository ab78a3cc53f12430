//! Project store

use repohub_common::{EntityId, EntityTable, Project};

/// Sole owner of project records
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: EntityTable<Project>,
}

impl ProjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a project by id (repo ids unexpanded)
    pub fn get_project(&self, id: EntityId) -> Option<Project> {
        self.projects.get(id)
    }

    /// All projects in creation order
    pub fn list_projects(&self) -> Vec<Project> {
        self.projects.list()
    }

    /// Create a project with no repo list yet
    pub fn add_project(&self, name: impl Into<String>, kind: impl Into<String>) -> Project {
        let (name, kind) = (name.into(), kind.into());
        let project = self.projects.insert_with(|id| Project {
            id,
            name,
            kind,
            repos: None,
        });
        tracing::info!(project_id = project.id, name = %project.name, "Project added");
        project
    }

    /// Append `repo_id` to the first project named `project_name`
    ///
    /// The repo id is not checked against the Repo service.
    pub fn attach_repo(&self, project_name: &str, repo_id: EntityId) -> Option<Project> {
        let updated = self
            .projects
            .update_first(|p| p.name == project_name, |p| p.attach(repo_id));

        match &updated {
            Some(project) => {
                tracing::info!(project_id = project.id, repo_id, "Repo attached to project")
            }
            None => tracing::debug!(project_name, "No project to attach repo to"),
        }
        updated
    }
}
