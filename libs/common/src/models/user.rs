//! User model and related functionality

use serde::Serialize;

use super::UserRole;

/// Login credentials for the administrative API
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// New user creation payload
///
/// Optional fields are left out of the JSON entirely when unset.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    /// Role exactly as typed; the server decides whether it is valid
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_id: Option<i32>,
}

impl NewUser {
    /// Create a payload carrying only the always-present fields
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role: role.into(),
            name: None,
            major_id: None,
        }
    }

    /// The known role this payload refers to, if any
    pub fn known_role(&self) -> Option<UserRole> {
        UserRole::from_name(&self.role)
    }

    /// Whether a real name should be collected for this payload
    pub fn wants_name(&self) -> bool {
        self.known_role().is_some_and(|role| role.has_name())
    }

    /// Whether a major ID should be collected for this payload
    pub fn wants_major_id(&self) -> bool {
        self.known_role().is_some_and(|role| role.has_major_id())
    }
}
