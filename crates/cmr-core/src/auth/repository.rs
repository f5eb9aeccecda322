//! Session repository trait.

use async_trait::async_trait;

use crate::auth::model::User;
use crate::error::Result;

/// Persistence boundary for the current session identity.
///
/// The durable store holds at most one identity blob. Implementations
/// decide the format and location; the service layer decides what a
/// read failure means (it degrades to logged-out).
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Reads the stored identity, if any.
    ///
    /// A missing blob is `Ok(None)`. Implementations should also map a
    /// malformed blob to `Ok(None)` rather than erroring, so a corrupt
    /// file behaves like a logged-out state.
    async fn load(&self) -> Result<Option<User>>;

    /// Persists the identity, replacing any previous one.
    async fn save(&self, user: &User) -> Result<()>;

    /// Removes the stored identity. A no-op when nothing is stored.
    async fn clear(&self) -> Result<()>;
}
