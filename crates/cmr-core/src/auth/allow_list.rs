//! Demo credential allow-list.
//!
//! There is no real authentication backend: login is validated against
//! this fixed table of demo accounts. Lookups strip the secret before
//! handing out an identity.

use super::model::{Role, User};

/// A single allow-list entry. The only place the password lives.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub role: Role,
    pub avatar_initials: &'static str,
}

impl Credential {
    /// Builds the identity for this entry, without the secret.
    fn to_user(&self) -> User {
        User {
            id: self.id.to_string(),
            name: self.name.to_string(),
            email: self.email.to_string(),
            role: self.role,
            avatar_initials: self.avatar_initials.to_string(),
        }
    }
}

/// Returns the fixed demo accounts, one per role.
pub fn default_credentials() -> Vec<Credential> {
    vec![
        Credential {
            id: "1",
            email: "admin@cmr.com",
            password: "password",
            name: "Admin User",
            role: Role::Admin,
            avatar_initials: "AU",
        },
        Credential {
            id: "2",
            email: "accountant@cmr.com",
            password: "password",
            name: "John Smith",
            role: Role::Accountant,
            avatar_initials: "JS",
        },
        Credential {
            id: "3",
            email: "client@cmr.com",
            password: "password",
            name: "Sarah Johnson",
            role: Role::Client,
            avatar_initials: "SJ",
        },
    ]
}

/// Looks up an email/password pair against the allow-list.
///
/// Returns the matching identity with the secret stripped, or `None`
/// when the pair is not in the table.
pub fn find_user(email: &str, password: &str) -> Option<User> {
    default_credentials()
        .iter()
        .find(|c| c.email == email && c.password == password)
        .map(Credential::to_user)
}
