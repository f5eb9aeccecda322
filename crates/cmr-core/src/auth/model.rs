//! User identity domain model.

use serde::{Deserialize, Serialize};

/// Role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Accountant,
    Client,
}

impl Role {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Accountant => "Accountant",
            Role::Client => "Client",
        }
    }
}

/// The authenticated identity held by the application.
///
/// This is exactly the shape persisted to the durable session file:
/// the credential's secret is stripped before a `User` is ever built.
/// Field names serialize in camelCase to stay compatible with the
/// stored `{id, name, email, role, avatarInitials}` blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar_initials: String,
}
