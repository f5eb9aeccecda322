//! Document record model for the files screen.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::listing::{ListRecord, SortKey, compare_str};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Tax,
    Spreadsheet,
    Document,
    Folder,
}

impl FileKind {
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Tax => "Tax Return",
            FileKind::Spreadsheet => "Spreadsheet",
            FileKind::Document => "Document",
            FileKind::Folder => "Folder",
        }
    }
}

/// Filter tabs/categories on the files screen.
///
/// `Starred` is resolved by the screen itself because starring is a
/// view-local overlay, not a record attribute; at the record level it
/// imposes no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFilter {
    #[default]
    All,
    Tax,
    Spreadsheet,
    Document,
    Folder,
    Starred,
}

/// A document as displayed on the files screen. The name doubles as
/// the rendering key; uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    pub kind: FileKind,
    pub client: String,
    pub date: DateTime<Utc>,
    pub size: Option<String>,
    pub starred: bool,
}

impl ListRecord for FileRecord {
    type Filter = FileFilter;

    fn compare_by(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::Name => compare_str(&self.name, &other.name),
            SortKey::Date => self.date.cmp(&other.date),
            SortKey::Type => compare_str(self.kind.label(), other.kind.label()),
            SortKey::Client => compare_str(&self.client, &other.client),
        }
    }

    fn matches(&self, filter: FileFilter) -> bool {
        match filter {
            FileFilter::All | FileFilter::Starred => true,
            FileFilter::Tax => self.kind == FileKind::Tax,
            FileFilter::Spreadsheet => self.kind == FileKind::Spreadsheet,
            FileFilter::Document => self.kind == FileKind::Document,
            FileFilter::Folder => self.kind == FileKind::Folder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(name: &str, kind: FileKind, day: u32) -> FileRecord {
        FileRecord {
            name: name.to_string(),
            kind,
            client: "Acme Corp".to_string(),
            date: Utc.with_ymd_and_hms(2023, 9, day, 0, 0, 0).unwrap(),
            size: None,
            starred: false,
        }
    }

    #[test]
    fn test_date_compares_by_instant() {
        let newer = record("a", FileKind::Document, 10);
        let older = record("b", FileKind::Document, 5);
        assert_eq!(newer.compare_by(&older, SortKey::Date), Ordering::Greater);
        assert_eq!(older.compare_by(&newer, SortKey::Date), Ordering::Less);
    }

    #[test]
    fn test_kind_filters() {
        let tax = record("return", FileKind::Tax, 1);
        assert!(tax.matches(FileFilter::All));
        assert!(tax.matches(FileFilter::Tax));
        assert!(!tax.matches(FileFilter::Spreadsheet));
    }
}
