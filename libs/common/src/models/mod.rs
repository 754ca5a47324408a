//! Administrative API models

pub mod role;
pub mod user;

// Re-export for convenience
pub use role::UserRole;
pub use user::{LoginCredentials, NewUser};
