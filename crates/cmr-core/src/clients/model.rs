//! Client record model for the clients screen.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::listing::{ListRecord, SortKey, compare_str};

/// Engagement status of a client account. Also the screen's tab set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Active,
    Pending,
    Completed,
}

impl ClientStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Pending => "Pending",
            ClientStatus::Completed => "Completed",
        }
    }
}

/// Progress of the client's US tax filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxFileStatus {
    NotStarted,
    Processing,
    AlmostReady,
    Completed,
}

impl TaxFileStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaxFileStatus::NotStarted => "Not Started",
            TaxFileStatus::Processing => "Processing",
            TaxFileStatus::AlmostReady => "Almost Ready",
            TaxFileStatus::Completed => "Completed",
        }
    }
}

/// Tab filter on the clients screen: "all" plus the status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientFilter {
    #[default]
    All,
    Active,
    Pending,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: ClientStatus,
    pub tax_file_status: TaxFileStatus,
    pub tax_returns: u32,
}

impl ClientRecord {
    /// Initials shown in the avatar fallback, one letter per name part.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

impl ListRecord for ClientRecord {
    type Filter = ClientFilter;

    fn compare_by(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::Name => compare_str(&self.name, &other.name),
            SortKey::Client => compare_str(&self.company, &other.company),
            SortKey::Type => compare_str(self.status.label(), other.status.label()),
            // Clients carry no date; fall back to name order.
            SortKey::Date => compare_str(&self.name, &other.name),
        }
    }

    fn matches(&self, filter: ClientFilter) -> bool {
        match filter {
            ClientFilter::All => true,
            ClientFilter::Active => self.status == ClientStatus::Active,
            ClientFilter::Pending => self.status == ClientStatus::Pending,
            ClientFilter::Completed => self.status == ClientStatus::Completed,
        }
    }
}
