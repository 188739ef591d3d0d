use serde_json::Value;
use tracing::{debug, info, instrument};

use super::{MockApi, TASKS, USERS, hold};
use crate::auth::session::resolve;
use crate::error::ServiceResult;
use crate::model::task::{NewTask, Task, TaskStatus};
use crate::utils::patch::apply_patch;

impl MockApi {
    /// Employees get the tasks assigned to them; managers and HR get all.
    #[instrument(name = "get_tasks", skip_all)]
    pub async fn get_tasks(&self, token: &str) -> ServiceResult<Vec<Task>> {
        self.latency.wait(500).await;
        let users = self.load(&USERS)?;
        let user = resolve(&users, token)?;
        let tasks = self.load(&TASKS)?;

        if user.role.sees_all_tasks() {
            return Ok(tasks);
        }
        Ok(tasks
            .into_iter()
            .filter(|t| t.assigned_to == user.id)
            .collect())
    }

    #[instrument(name = "get_manager_tasks", skip_all)]
    pub async fn get_manager_tasks(&self) -> ServiceResult<Vec<Task>> {
        self.latency.wait(500).await;
        self.load(&TASKS)
    }

    /// Any status may follow any other; an unknown id changes nothing.
    #[instrument(name = "update_task_status", skip(self))]
    pub async fn update_task_status(&self, task_id: u64, status: TaskStatus) -> ServiceResult<()> {
        self.latency.wait(400).await;
        let _guard = hold(&self.locks.tasks);
        let mut tasks = self.load(&TASKS)?;

        match tasks.iter_mut().find(|t| t.id == task_id) {
            Some(task) => task.status = status,
            None => {
                debug!("no task with this id");
                return Ok(());
            }
        }
        self.save(&TASKS, &tasks)?;
        info!("task status updated");
        Ok(())
    }

    #[instrument(name = "add_task", skip_all, fields(title = %new_task.title))]
    pub async fn add_task(&self, new_task: NewTask) -> ServiceResult<Task> {
        self.latency.wait(500).await;
        let _guard = hold(&self.locks.tasks);
        let mut tasks = self.load(&TASKS)?;

        let id = self.allocate_id(&TASKS, tasks.iter().map(|t| t.id))?;
        let task = new_task.into_task(id);
        tasks.push(task.clone());
        self.save(&TASKS, &tasks)?;

        info!(task_id = id, "task added");
        Ok(task)
    }

    /// Applies a partial update; `None` when no task has this id.
    #[instrument(name = "update_task", skip(self, updates))]
    pub async fn update_task(&self, id: u64, updates: &Value) -> ServiceResult<Option<Task>> {
        self.latency.wait(400).await;
        let _guard = hold(&self.locks.tasks);
        let mut tasks = self.load(&TASKS)?;

        let Some(slot) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        *slot = apply_patch(&*slot, updates)?;
        let updated = slot.clone();
        self.save(&TASKS, &tasks)?;

        info!("task updated");
        Ok(Some(updated))
    }

    #[instrument(name = "delete_task", skip(self))]
    pub async fn delete_task(&self, id: u64) -> ServiceResult<()> {
        self.latency.wait(400).await;
        let _guard = hold(&self.locks.tasks);
        let mut tasks = self.load(&TASKS)?;

        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() != before {
            self.save(&TASKS, &tasks)?;
            info!("task deleted");
        }
        Ok(())
    }
}
