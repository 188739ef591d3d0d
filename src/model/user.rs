use derive_more::{AsRef, Display, From};
use serde::{Deserialize, Serialize};

use crate::model::role::Role;

/// Opaque session token handed out at login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, AsRef)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Token(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Token(value.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    pub id: u64,
    pub username: String,
    /// Plaintext: this directory backs a demo, not a credential store.
    pub password: String,
    pub name: String,
    pub role: Role,
    pub position: String,
    pub token: Token,
}

/// The slice of a user echoed back by a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginUser {
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: Token,
    pub username: String,
    pub role: Role,
    pub user: LoginUser,
}

impl From<&User> for LoginResponse {
    fn from(user: &User) -> Self {
        LoginResponse {
            token: user.token.clone(),
            username: user.username.clone(),
            role: user.role,
            user: LoginUser {
                name: user.name.clone(),
                role: user.role,
            },
        }
    }
}
