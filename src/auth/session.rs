//! Credential and token checks against the user directory.
//!
//! Passwords are compared in plaintext and tokens never expire. This is a
//! stand-in for a session service, not one.

use crate::error::ServiceError;
use crate::model::user::User;

/// Exact username and password match.
pub fn authenticate<'a>(
    users: &'a [User],
    username: &str,
    password: &str,
) -> Result<&'a User, ServiceError> {
    users
        .iter()
        .find(|u| u.username == username && u.password == password)
        .ok_or(ServiceError::InvalidCredentials)
}

/// Exact token match.
pub fn resolve<'a>(users: &'a [User], token: &str) -> Result<&'a User, ServiceError> {
    users
        .iter()
        .find(|u| u.token.as_str() == token)
        .ok_or(ServiceError::InvalidSession)
}
