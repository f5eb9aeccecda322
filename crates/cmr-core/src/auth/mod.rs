//! Authentication and session domain.
//!
//! Holds the current user identity, the demo credential allow-list,
//! the session persistence boundary, and the route guard that gates
//! the protected views.

pub mod allow_list;
pub mod guard;
pub mod model;
pub mod repository;
pub mod service;

pub use allow_list::{Credential, default_credentials, find_user};
pub use guard::{Route, RouteDecision};
pub use model::{Role, User};
pub use repository::SessionRepository;
pub use service::{AuthService, AuthSnapshot, LoginOutcome};
