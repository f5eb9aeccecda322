//! Route guard for the protected views.
//!
//! A pure gate over the session snapshot: it owns no state and is
//! re-evaluated on every navigation or session change.

use serde::{Deserialize, Serialize};

use crate::auth::service::AuthSnapshot;

/// The application's navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Login,
    Dashboard,
    Files,
    Clients,
    AiAssistant,
    Settings,
}

impl Route {
    /// Parses a navigation path. Unknown paths are `None` (not found).
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/login" => Some(Route::Login),
            "/" => Some(Route::Dashboard),
            "/files" => Some(Route::Files),
            "/clients" => Some(Route::Clients),
            "/ai-assistant" => Some(Route::AiAssistant),
            "/settings" => Some(Route::Settings),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/",
            Route::Files => "/files",
            Route::Clients => "/clients",
            Route::AiAssistant => "/ai-assistant",
            Route::Settings => "/settings",
        }
    }

    /// Everything except the login entry point requires a session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Where a successful login lands.
    pub fn default_after_login() -> Route {
        Route::Dashboard
    }

    /// Where a logout lands.
    pub fn after_logout() -> Route {
        Route::Login
    }
}

/// What the shell should do with a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteDecision {
    /// Render the requested view.
    Render,
    /// Send the user to the login entry point.
    RedirectToLogin,
    /// The startup restore has not finished yet; render nothing rather
    /// than flashing the login page on reload.
    Pending,
}

/// Gates a route against the current session snapshot.
pub fn decide(route: Route, snapshot: &AuthSnapshot) -> RouteDecision {
    if !route.is_protected() {
        return RouteDecision::Render;
    }
    if !snapshot.is_restored {
        return RouteDecision::Pending;
    }
    if snapshot.is_authenticated {
        RouteDecision::Render
    } else {
        RouteDecision::RedirectToLogin
    }
}
