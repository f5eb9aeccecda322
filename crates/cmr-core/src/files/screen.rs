//! Files screen view-model.
//!
//! Wraps the generic [`ListView`] with the one piece of state the files
//! screen adds: the star overlay. Starring never writes back to the
//! records; it is a per-view map of overrides keyed by file name.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::model::{FileFilter, FileKind, FileRecord};
use super::preset::default_files;
use crate::listing::{ListView, SortDirection, SortKey};

/// A row as handed to the UI: the record plus its effective star.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListItem {
    pub name: String,
    pub kind: FileKind,
    pub client: String,
    pub date: DateTime<Utc>,
    pub size: Option<String>,
    pub starred: bool,
}

pub struct FilesScreen {
    view: ListView<FileRecord>,
    /// View-local star overrides, keyed by file name.
    stars: HashMap<String, bool>,
}

impl FilesScreen {
    /// Opens on the demo fixtures, sorted newest first.
    pub fn new() -> Self {
        Self::with_records(default_files())
    }

    pub fn with_records(records: Vec<FileRecord>) -> Self {
        Self {
            view: ListView::new(records).with_sort(SortKey::Date, SortDirection::Descending),
            stars: HashMap::new(),
        }
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.view.set_sort(key);
    }

    pub fn set_filter(&mut self, filter: FileFilter) {
        self.view.set_filter(filter);
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.view.sort_key()
    }

    pub fn direction(&self) -> SortDirection {
        self.view.direction()
    }

    pub fn filter(&self) -> FileFilter {
        self.view.filter()
    }

    pub fn records(&self) -> &[FileRecord] {
        self.view.records()
    }

    /// Flips the star overlay for the named file and returns the new
    /// effective value. Unknown names are left alone.
    pub fn toggle_star(&mut self, name: &str) -> Option<bool> {
        let record = self.view.records().iter().find(|r| r.name == name)?;
        let current = self.stars.get(name).copied().unwrap_or(record.starred);
        self.stars.insert(name.to_string(), !current);
        Some(!current)
    }

    fn effective_star(&self, record: &FileRecord) -> bool {
        self.stars
            .get(&record.name)
            .copied()
            .unwrap_or(record.starred)
    }

    /// The displayed rows. The starred filter is applied here, against
    /// the effective star, because the overlay lives on the screen.
    pub fn visible(&self) -> Vec<FileListItem> {
        let starred_only = self.view.filter() == FileFilter::Starred;
        self.view
            .visible_where(|r| !starred_only || self.effective_star(r))
            .into_iter()
            .map(|r| FileListItem {
                name: r.name.clone(),
                kind: r.kind,
                client: r.client.clone(),
                date: r.date,
                size: r.size.clone(),
                starred: self.effective_star(r),
            })
            .collect()
    }
}

impl Default for FilesScreen {
    fn default() -> Self {
        Self::new()
    }
}
