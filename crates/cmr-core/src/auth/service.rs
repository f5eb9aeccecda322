//! Session store service.
//!
//! `AuthService` is the single owner of the current session: it exposes
//! login/logout/restore and a snapshot accessor for consumers. It is an
//! explicitly constructed, dependency-injected instance (no global
//! context) with the repository as its only collaborator.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;

use crate::auth::allow_list;
use crate::auth::model::User;
use crate::auth::repository::SessionRepository;
use crate::error::{CmrError, Result};

/// Fixed delay modeling the login network round-trip.
pub const LOGIN_DELAY: Duration = Duration::from_secs(1);

/// Outcome of a completed login call.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Credentials matched and the session was adopted.
    LoggedIn(User),
    /// Credentials matched, but a logout happened while the login was
    /// in flight. The stale result is discarded and the session stays
    /// logged out.
    Superseded,
}

/// Read-only view of the session state, safe to hand to the UI layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub is_restored: bool,
}

#[derive(Debug, Default)]
struct AuthState {
    user: Option<User>,
    loading: bool,
    restored: bool,
    /// Bumped on every logout. A login that started under an older
    /// epoch is stale and must not adopt its result.
    epoch: u64,
}

/// Holds the current user identity and its lifecycle operations.
///
/// All mutations are observable by every consumer as soon as the
/// operation resolves: state lives in one cell behind a mutex and
/// snapshots are taken from it directly.
pub struct AuthService {
    repository: Arc<dyn SessionRepository>,
    state: Mutex<AuthState>,
    login_delay: Duration,
}

impl AuthService {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            repository,
            state: Mutex::new(AuthState::default()),
            login_delay: LOGIN_DELAY,
        }
    }

    /// Overrides the simulated network delay. Tests pass `Duration::ZERO`.
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }

    /// Restores a persisted session at startup.
    ///
    /// A stored identity is adopted without re-checking the allow-list;
    /// this trusts whatever the durable store holds and is logged as
    /// such. Read failures and malformed blobs degrade to logged-out,
    /// they never surface to the caller.
    pub async fn restore(&self) {
        let loaded = match self.repository.load().await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Failed to read stored session, starting logged out: {}", e);
                None
            }
        };

        let mut state = self.state.lock().await;
        if let Some(ref user) = loaded {
            tracing::info!("Restored session for {} without re-validation", user.email);
        }
        state.user = loaded;
        state.restored = true;
    }

    /// Validates a credential pair against the allow-list and adopts the
    /// matching identity.
    ///
    /// The call resolves only after the fixed simulated delay, during
    /// which the loading flag is observable. On a mismatch the session
    /// and the durable store are left untouched and
    /// `CmrError::InvalidCredentials` is returned. A logout that lands
    /// while the login is in flight wins: the late result is discarded.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let epoch = {
            let mut state = self.state.lock().await;
            state.loading = true;
            state.epoch
        };

        tokio::time::sleep(self.login_delay).await;

        let found = allow_list::find_user(email, password);

        let mut state = self.state.lock().await;
        state.loading = false;

        let Some(user) = found else {
            tracing::info!("Rejected login for {}", email);
            return Err(CmrError::InvalidCredentials);
        };

        if state.epoch != epoch {
            tracing::info!("Discarding stale login for {} (logout intervened)", user.email);
            return Ok(LoginOutcome::Superseded);
        }

        if let Err(e) = self.repository.save(&user).await {
            // The in-memory session still wins; persistence is best effort.
            tracing::warn!("Failed to persist session for {}: {}", user.email, e);
        }
        state.user = Some(user.clone());
        tracing::info!("Logged in {} as {}", user.email, user.role.label());

        Ok(LoginOutcome::LoggedIn(user))
    }

    /// Clears the session from memory and durable storage.
    ///
    /// Idempotent; storage failures are swallowed.
    pub async fn logout(&self) {
        {
            let mut state = self.state.lock().await;
            state.user = None;
            state.epoch += 1;
        }

        if let Err(e) = self.repository.clear().await {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
        tracing::info!("Logged out");
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state.lock().await.user.clone()
    }

    /// True iff a user is present. Derived, never stored separately.
    pub async fn is_authenticated(&self) -> bool {
        self.state.lock().await.user.is_some()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.loading
    }

    /// True once the startup `restore` has completed.
    pub async fn is_restored(&self) -> bool {
        self.state.lock().await.restored
    }

    pub async fn snapshot(&self) -> AuthSnapshot {
        let state = self.state.lock().await;
        AuthSnapshot {
            is_authenticated: state.user.is_some(),
            user: state.user.clone(),
            is_loading: state.loading,
            is_restored: state.restored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::model::Role;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    /// In-memory stand-in for the durable store.
    struct MockSessionRepository {
        stored: StdMutex<Option<User>>,
        fail_load: bool,
    }

    impl MockSessionRepository {
        fn new() -> Self {
            Self {
                stored: StdMutex::new(None),
                fail_load: false,
            }
        }

        fn with_stored(user: User) -> Self {
            Self {
                stored: StdMutex::new(Some(user)),
                fail_load: false,
            }
        }

        fn failing() -> Self {
            Self {
                stored: StdMutex::new(None),
                fail_load: true,
            }
        }

        fn stored(&self) -> Option<User> {
            self.stored.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SessionRepository for MockSessionRepository {
        async fn load(&self) -> crate::error::Result<Option<User>> {
            if self.fail_load {
                return Err(CmrError::data_access("storage unavailable"));
            }
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save(&self, user: &User) -> crate::error::Result<()> {
            *self.stored.lock().unwrap() = Some(user.clone());
            Ok(())
        }

        async fn clear(&self) -> crate::error::Result<()> {
            *self.stored.lock().unwrap() = None;
            Ok(())
        }
    }

    fn service_with(repo: Arc<MockSessionRepository>) -> AuthService {
        AuthService::new(repo).with_login_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_login_valid_credentials() {
        let repo = Arc::new(MockSessionRepository::new());
        let service = service_with(repo.clone());

        let outcome = service.login("admin@cmr.com", "password").await.unwrap();
        let LoginOutcome::LoggedIn(user) = outcome else {
            panic!("expected a logged-in outcome");
        };

        assert_eq!(user.email, "admin@cmr.com");
        assert_eq!(user.role, Role::Admin);
        assert!(service.is_authenticated().await);
        assert!(!service.is_loading().await);
        // Persisted identity carries no secret by construction
        assert_eq!(repo.stored().unwrap().email, "admin@cmr.com");
    }

    #[tokio::test]
    async fn test_login_invalid_credentials_leaves_state_untouched() {
        let repo = Arc::new(MockSessionRepository::new());
        let service = service_with(repo.clone());

        let err = service.login("admin@cmr.com", "wrong").await.unwrap_err();
        assert!(err.is_invalid_credentials());
        assert!(!service.is_authenticated().await);
        assert!(service.current_user().await.is_none());
        assert!(repo.stored().is_none());
    }

    #[tokio::test]
    async fn test_logout_then_restore_is_logged_out() {
        let repo = Arc::new(MockSessionRepository::new());
        let service = service_with(repo.clone());

        service.login("client@cmr.com", "password").await.unwrap();
        service.logout().await;

        // Simulated reload: a fresh service over the same store
        let reloaded = service_with(repo);
        reloaded.restore().await;
        assert!(!reloaded.is_authenticated().await);
        assert!(reloaded.is_restored().await);
    }

    #[tokio::test]
    async fn test_login_round_trips_through_restore() {
        let repo = Arc::new(MockSessionRepository::new());
        let service = service_with(repo.clone());

        let outcome = service
            .login("accountant@cmr.com", "password")
            .await
            .unwrap();
        let LoginOutcome::LoggedIn(user) = outcome else {
            panic!("expected a logged-in outcome");
        };

        let reloaded = service_with(repo);
        reloaded.restore().await;
        assert_eq!(reloaded.current_user().await, Some(user));
    }

    #[tokio::test]
    async fn test_restore_adopts_stored_identity_without_validation() {
        // The stored identity is not in the allow-list; restore trusts it.
        let stored = User {
            id: "99".to_string(),
            name: "Ghost".to_string(),
            email: "ghost@cmr.com".to_string(),
            role: Role::Client,
            avatar_initials: "GH".to_string(),
        };
        let repo = Arc::new(MockSessionRepository::with_stored(stored.clone()));
        let service = service_with(repo);

        service.restore().await;
        assert_eq!(service.current_user().await, Some(stored));
    }

    #[tokio::test]
    async fn test_restore_swallows_storage_failure() {
        let repo = Arc::new(MockSessionRepository::failing());
        let service = service_with(repo);

        service.restore().await;
        assert!(!service.is_authenticated().await);
        assert!(service.is_restored().await);
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let repo = Arc::new(MockSessionRepository::new());
        let service = service_with(repo);

        service.logout().await;
        service.logout().await;
        assert!(!service.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_logout_during_pending_login_wins() {
        let repo = Arc::new(MockSessionRepository::new());
        let service = Arc::new(
            AuthService::new(repo.clone()).with_login_delay(Duration::from_millis(50)),
        );

        let pending = {
            let service = service.clone();
            tokio::spawn(async move { service.login("admin@cmr.com", "password").await })
        };

        // Let the login start, then log out while it is in flight.
        tokio::time::sleep(Duration::from_millis(10)).await;
        service.logout().await;

        let outcome = pending.await.unwrap().unwrap();
        assert_eq!(outcome, LoginOutcome::Superseded);
        assert!(!service.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_loading_flag_during_pending_login() {
        let repo = Arc::new(MockSessionRepository::new());
        let service = Arc::new(
            AuthService::new(repo).with_login_delay(Duration::from_millis(50)),
        );

        let pending = {
            let service = service.clone();
            tokio::spawn(async move { service.login("admin@cmr.com", "password").await })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(service.is_loading().await);

        pending.await.unwrap().unwrap();
        assert!(!service.is_loading().await);
    }

    #[tokio::test]
    async fn test_snapshot_matches_state() {
        let repo = Arc::new(MockSessionRepository::new());
        let service = service_with(repo);
        service.restore().await;

        let snapshot = service.snapshot().await;
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert!(snapshot.is_restored);

        service.login("admin@cmr.com", "password").await.unwrap();
        let snapshot = service.snapshot().await;
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.user.unwrap().email, "admin@cmr.com");
    }
}
