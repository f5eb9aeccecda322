//! Dashboard summary derivations.
//!
//! The overview screen shows stat cards plus short recent-files and
//! active-clients lists, all derived from the screen fixtures rather
//! than stored anywhere.

use serde::Serialize;

use crate::clients::model::{ClientRecord, ClientStatus, TaxFileStatus};
use crate::files::model::{FileKind, FileRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increase,
    Decrease,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatChange {
    pub value: String,
    pub trend: Trend,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: Option<StatChange>,
}

fn card(title: &str, value: impl ToString, change: Option<(&str, Trend)>) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.to_string(),
        change: change.map(|(value, trend)| StatChange {
            value: value.to_string(),
            trend,
        }),
    }
}

/// Builds the overview stat cards from the current record sets.
///
/// The month-over-month change figures are cosmetic demo values; the
/// counts are real derivations.
pub fn stats(clients: &[ClientRecord], files: &[FileRecord]) -> Vec<StatCard> {
    let active = clients
        .iter()
        .filter(|c| c.status == ClientStatus::Active)
        .count();
    let pending_returns: u32 = clients
        .iter()
        .filter(|c| c.tax_file_status != TaxFileStatus::Completed)
        .map(|c| c.tax_returns)
        .sum();
    let completed = clients
        .iter()
        .filter(|c| c.tax_file_status == TaxFileStatus::Completed)
        .count();
    let deadlines = files.iter().filter(|f| f.kind == FileKind::Tax).count()
        + clients
            .iter()
            .filter(|c| c.tax_file_status == TaxFileStatus::AlmostReady)
            .count();

    vec![
        card("Active Clients", active, Some(("12%", Trend::Increase))),
        card(
            "Pending Tax Returns",
            pending_returns,
            Some(("5%", Trend::Decrease)),
        ),
        card(
            "Completed This Month",
            completed,
            Some(("8%", Trend::Increase)),
        ),
        card("Upcoming Deadlines", deadlines, None),
    ]
}

/// The `limit` most recent files, newest first.
pub fn recent_files(files: &[FileRecord], limit: usize) -> Vec<FileRecord> {
    let mut sorted: Vec<FileRecord> = files.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.truncate(limit);
    sorted
}

/// The active subset of the client book, in collection order.
pub fn active_clients(clients: &[ClientRecord]) -> Vec<ClientRecord> {
    clients
        .iter()
        .filter(|c| c.status == ClientStatus::Active)
        .cloned()
        .collect()
}
