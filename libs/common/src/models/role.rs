//! Role model and related functionality

/// Roles the administrative API knows about
///
/// The client never rejects a role on its own; this type only decides which
/// extra fields are worth asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Student,
    Teacher,
    DefenseBoard,
    Office,
}

impl UserRole {
    /// Every known role, in prompt order
    pub const ALL: [UserRole; 5] = [
        UserRole::Admin,
        UserRole::Student,
        UserRole::Teacher,
        UserRole::DefenseBoard,
        UserRole::Office,
    ];

    /// Get the role name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::DefenseBoard => "defense_board",
            UserRole::Office => "office",
        }
    }

    /// Look up a role by its exact wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }

    /// Whether users with this role carry a real name
    pub fn has_name(&self) -> bool {
        matches!(self, UserRole::Student | UserRole::Teacher)
    }

    /// Whether users with this role may carry a major ID
    pub fn has_major_id(&self) -> bool {
        matches!(self, UserRole::Student)
    }

    /// Comma separated list of every role name, for prompts
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(UserRole::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
