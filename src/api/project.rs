use serde_json::Value;
use tracing::{info, instrument};

use super::{MockApi, PROJECTS, hold};
use crate::error::ServiceResult;
use crate::model::project::{NewProject, Project};
use crate::utils::patch::apply_patch;

impl MockApi {
    #[instrument(name = "get_projects", skip_all)]
    pub async fn get_projects(&self) -> ServiceResult<Vec<Project>> {
        self.latency.wait(400).await;
        self.load(&PROJECTS)
    }

    #[instrument(name = "add_project", skip_all, fields(name = %new_project.name))]
    pub async fn add_project(&self, new_project: NewProject) -> ServiceResult<Project> {
        self.latency.wait(500).await;
        let _guard = hold(&self.locks.projects);
        let mut projects = self.load(&PROJECTS)?;

        let id = self.allocate_id(&PROJECTS, projects.iter().map(|p| p.id))?;
        let project = new_project.into_project(id);
        projects.push(project.clone());
        self.save(&PROJECTS, &projects)?;

        info!(project_id = id, "project added");
        Ok(project)
    }

    #[instrument(name = "update_project", skip(self, updates))]
    pub async fn update_project(&self, id: u64, updates: &Value) -> ServiceResult<Option<Project>> {
        self.latency.wait(400).await;
        let _guard = hold(&self.locks.projects);
        let mut projects = self.load(&PROJECTS)?;

        let Some(slot) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        *slot = apply_patch(&*slot, updates)?;
        let updated = slot.clone();
        self.save(&PROJECTS, &projects)?;

        info!("project updated");
        Ok(Some(updated))
    }

    #[instrument(name = "delete_project", skip(self))]
    pub async fn delete_project(&self, id: u64) -> ServiceResult<()> {
        self.latency.wait(400).await;
        let _guard = hold(&self.locks.projects);
        let mut projects = self.load(&PROJECTS)?;

        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() != before {
            self.save(&PROJECTS, &projects)?;
            info!("project deleted");
        }
        Ok(())
    }
}
