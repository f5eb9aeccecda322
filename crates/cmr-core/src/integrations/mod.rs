//! External-service integration toggles.
//!
//! Entirely cosmetic: nothing is contacted. Connecting simulates a
//! fixed delay at the command layer and then flips the flag;
//! disconnecting is immediate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fixed delay modeling the connection handshake.
pub const CONNECT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub name: String,
    pub description: String,
    pub connected: bool,
    pub last_sync: Option<String>,
}

fn integration(name: &str, description: &str, connected: bool, last_sync: Option<&str>) -> Integration {
    Integration {
        name: name.to_string(),
        description: description.to_string(),
        connected,
        last_sync: last_sync.map(str::to_string),
    }
}

/// Returns the demo integration panel entries.
pub fn default_integrations() -> Vec<Integration> {
    vec![
        integration(
            "Google Workspace",
            "Connect to Gmail, Drive, Calendar and Docs",
            true,
            Some("Today at 2:30 PM"),
        ),
        integration(
            "QuickBooks",
            "Connect to your accounting and bookkeeping",
            false,
            None,
        ),
        integration(
            "Xero",
            "Connect to Xero accounting platform",
            false,
            None,
        ),
        integration(
            "Microsoft 365",
            "Connect to OneDrive, Outlook and Office",
            true,
            Some("Yesterday at 6:15 PM"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shape() {
        let integrations = default_integrations();
        assert_eq!(integrations.len(), 4);
        assert_eq!(integrations.iter().filter(|i| i.connected).count(), 2);
        assert!(
            integrations
                .iter()
                .filter(|i| !i.connected)
                .all(|i| i.last_sync.is_none())
        );
    }
}
