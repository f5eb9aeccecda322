//! Generic list view-model.
//!
//! The Files and Clients screens share the same view mechanics: a fixed
//! record collection plus user-chosen sort key, sort direction, and
//! filter, with the displayed subset recomputed on every read. This
//! module holds that logic once, parametrized over the record type and
//! its filter enumeration.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// The enumerated sortable fields shared by the list screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Date,
    Type,
    Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Case-insensitive string ordering, the locale-aware comparison
/// analogue used for every textual sort field.
pub fn compare_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// A record type displayable by [`ListView`].
///
/// `Filter` is the screen's enumerated tab/category set, with `Default`
/// meaning "all".
pub trait ListRecord {
    type Filter: Copy + PartialEq + Default;

    /// Orders two records under the given sort key. The comparator
    /// defines what "ascending" means for each key; the view only
    /// reverses it for the descending direction.
    fn compare_by(&self, other: &Self, key: SortKey) -> Ordering;

    /// Whether this record is visible under the given filter.
    fn matches(&self, filter: Self::Filter) -> bool;
}

/// View state over an immutable record collection.
///
/// The records themselves are never mutated; `visible` derives the
/// displayed, ordered, filtered subset fresh on every call. Until a
/// sort key is chosen the rows keep collection order, so screens that
/// only filter (the clients tabs) show their fixtures as authored.
#[derive(Clone)]
pub struct ListView<R: ListRecord> {
    records: Vec<R>,
    sort_key: Option<SortKey>,
    direction: SortDirection,
    filter: R::Filter,
}

impl<R: ListRecord> ListView<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            sort_key: None,
            direction: SortDirection::Ascending,
            filter: R::Filter::default(),
        }
    }

    /// Opens the view pre-sorted, for screens that start ordered (the
    /// files screen opens on Date, newest first).
    pub fn with_sort(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = Some(key);
        self.direction = direction;
        self
    }

    /// Applies a sort selection: picking the current key again flips
    /// the direction, picking a new key resets to ascending.
    pub fn set_sort(&mut self, key: SortKey) {
        if self.sort_key == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.sort_key = Some(key);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Replaces the active filter wholesale.
    pub fn set_filter(&mut self, filter: R::Filter) {
        self.filter = filter;
    }

    /// The active sort key, `None` while the view is in collection
    /// order.
    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn filter(&self) -> R::Filter {
        self.filter
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// The displayed subset: filtered, then stably sorted so that ties
    /// keep the original collection order.
    pub fn visible(&self) -> Vec<&R> {
        self.visible_where(|_| true)
    }

    /// Like [`Self::visible`], with an extra row predicate applied after
    /// the view filter. Used by screens that overlay view-local state
    /// (such as the files star overlay) on top of the record filter.
    pub fn visible_where<F>(&self, keep: F) -> Vec<&R>
    where
        F: Fn(&R) -> bool,
    {
        let mut rows: Vec<&R> = self
            .records
            .iter()
            .filter(|r| r.matches(self.filter) && keep(r))
            .collect();
        if let Some(key) = self.sort_key {
            rows.sort_by(|a, b| {
                let ordering = a.compare_by(b, key);
                match self.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        rows
    }
}
