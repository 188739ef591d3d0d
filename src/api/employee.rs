use tracing::{info, instrument};

use super::{MANAGER_ASSIGNMENTS, MockApi, USERS, hold};
use crate::error::{ServiceError, ServiceResult};
use crate::model::{
    employee::{ManagerAssignment, NewStaffMember},
    role::Role,
    user::{Token, User},
};

/// Case-insensitive, so `Alice` cannot shadow `alice`.
fn is_username_available(users: &[User], username: &str) -> bool {
    let username = username.to_lowercase();
    !users.iter().any(|u| u.username.to_lowercase() == username)
}

impl MockApi {
    fn users_with_role(&self, role: Role) -> ServiceResult<Vec<User>> {
        Ok(self
            .load(&USERS)?
            .into_iter()
            .filter(|u| u.role == role)
            .collect())
    }

    /// Appends a user to the directory with a fresh id and token.
    fn insert_user(&self, member: NewStaffMember, role: Role) -> ServiceResult<User> {
        member
            .validate()
            .map_err(|msg| ServiceError::InvalidInput(msg.into()))?;

        let _guard = hold(&self.locks.users);
        let mut users = self.load(&USERS)?;

        let username = member.username.trim().to_string();
        if !is_username_available(&users, &username) {
            info!(%username, "username already taken");
            return Err(ServiceError::UsernameTaken);
        }

        let id = self.allocate_id(&USERS, users.iter().map(|u| u.id))?;
        let user = User {
            id,
            token: Token::new(format!("mock-token-{username}-{id}")),
            username,
            password: member.password,
            name: member.name,
            role,
            position: member.position,
        };
        users.push(user.clone());
        self.save(&USERS, &users)?;

        info!(user_id = id, %role, "user added");
        Ok(user)
    }

    #[instrument(name = "get_employees", skip_all)]
    pub async fn get_employees(&self) -> ServiceResult<Vec<User>> {
        self.latency.wait(300).await;
        self.users_with_role(Role::Employee)
    }

    #[instrument(name = "get_managers", skip_all)]
    pub async fn get_managers(&self) -> ServiceResult<Vec<User>> {
        self.latency.wait(300).await;
        self.users_with_role(Role::Manager)
    }

    /// The team a manager sees: every employee.
    #[instrument(name = "get_manager_employees", skip_all)]
    pub async fn get_manager_employees(&self) -> ServiceResult<Vec<User>> {
        self.latency.wait(300).await;
        self.users_with_role(Role::Employee)
    }

    #[instrument(name = "add_employee", skip_all, fields(username = %member.username))]
    pub async fn add_employee(&self, member: NewStaffMember) -> ServiceResult<User> {
        self.latency.wait(600).await;
        self.insert_user(member, Role::Employee)
    }

    #[instrument(name = "add_manager", skip_all, fields(username = %member.username))]
    pub async fn add_manager(&self, member: NewStaffMember) -> ServiceResult<User> {
        self.latency.wait(600).await;
        self.insert_user(member, Role::Manager)
    }

    /// Removes the user and any manager assignment naming them. Unknown ids
    /// are a no-op.
    #[instrument(name = "delete_user", skip(self))]
    pub async fn delete_user(&self, user_id: u64) -> ServiceResult<()> {
        self.latency.wait(400).await;
        let _users = hold(&self.locks.users);
        let _assignments = hold(&self.locks.assignments);

        let mut users = self.load(&USERS)?;
        let before = users.len();
        users.retain(|u| u.id != user_id);
        if users.len() == before {
            return Ok(());
        }
        self.save(&USERS, &users)?;

        let mut assignments = MANAGER_ASSIGNMENTS.load(self.store())?;
        let assigned = assignments.len();
        assignments.retain(|employee, manager| *employee != user_id && *manager != user_id);
        if assignments.len() != assigned {
            MANAGER_ASSIGNMENTS.save(self.store(), &assignments)?;
        }

        info!("user deleted");
        Ok(())
    }

    /// Records `manager_id` as the manager of `employee_id`, replacing any
    /// earlier assignment.
    #[instrument(name = "assign_manager", skip(self))]
    pub async fn assign_manager(
        &self,
        employee_id: u64,
        manager_id: u64,
    ) -> ServiceResult<ManagerAssignment> {
        self.latency.wait(400).await;
        let _users = hold(&self.locks.users);
        let _assignments = hold(&self.locks.assignments);

        let users = self.load(&USERS)?;
        let has_role = |id: u64, role: Role| users.iter().any(|u| u.id == id && u.role == role);
        if !has_role(employee_id, Role::Employee) || !has_role(manager_id, Role::Manager) {
            info!("employee or manager not found");
            return Err(ServiceError::UserNotFound);
        }

        let mut assignments = MANAGER_ASSIGNMENTS.load(self.store())?;
        assignments.insert(employee_id, manager_id);
        MANAGER_ASSIGNMENTS.save(self.store(), &assignments)?;

        info!("manager assigned");
        Ok(ManagerAssignment {
            employee_id,
            manager_id,
        })
    }

    #[instrument(name = "get_manager_assignments", skip_all)]
    pub async fn get_manager_assignments(&self) -> ServiceResult<Vec<ManagerAssignment>> {
        self.latency.wait(300).await;
        Ok(MANAGER_ASSIGNMENTS
            .load(self.store())?
            .into_iter()
            .map(|(employee_id, manager_id)| ManagerAssignment {
                employee_id,
                manager_id,
            })
            .collect())
    }
}
