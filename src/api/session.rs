use tracing::{info, instrument};

use super::{MockApi, USERS};
use crate::auth::session::{authenticate, resolve};
use crate::error::{ServiceError, ServiceResult};
use crate::model::user::{LoginResponse, User};

impl MockApi {
    #[instrument(name = "login", skip_all, fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> ServiceResult<LoginResponse> {
        self.latency.wait(600).await;
        let users = self.load(&USERS)?;

        match authenticate(&users, username, password) {
            Ok(user) => {
                info!(user_id = user.id, role = %user.role, "login successful");
                Ok(LoginResponse::from(user))
            }
            Err(e) => {
                info!("invalid credentials");
                Err(e)
            }
        }
    }

    #[instrument(name = "get_current_user", skip_all)]
    pub async fn get_current_user(&self, token: &str) -> ServiceResult<User> {
        self.latency.wait(300).await;
        let users = self.load(&USERS)?;
        resolve(&users, token).cloned()
    }

    /// Same lookup as [`MockApi::get_current_user`], reported as a missing
    /// profile rather than a bad session.
    #[instrument(name = "get_employee_profile", skip_all)]
    pub async fn get_employee_profile(&self, token: &str) -> ServiceResult<User> {
        self.latency.wait(400).await;
        let users = self.load(&USERS)?;
        resolve(&users, token)
            .cloned()
            .map_err(|_| ServiceError::UserNotFound)
    }
}
