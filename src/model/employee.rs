use serde::{Deserialize, Serialize};

/// Payload for `add_employee` / `add_manager`; the role is fixed by the call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewStaffMember {
    pub username: String,
    pub password: String,
    pub name: String,
    pub position: String,
}

impl NewStaffMember {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err("Username and password must not be empty");
        }
        if self.name.trim().is_empty() {
            return Err("Name must not be empty");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerAssignment {
    pub employee_id: u64,
    pub manager_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(username: &str, password: &str) -> NewStaffMember {
        NewStaffMember {
            username: username.into(),
            password: password.into(),
            name: "Dana Scully".into(),
            position: "Analyst".into(),
        }
    }

    #[test]
    fn rejects_blank_credentials() {
        assert!(member("  ", "secret").validate().is_err());
        assert!(member("dana", "").validate().is_err());
        assert!(member("dana", "secret").validate().is_ok());
    }
}
