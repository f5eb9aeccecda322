//! Mock document fixtures for the files screen.

use chrono::{TimeZone, Utc};

use super::model::{FileKind, FileRecord};

fn file(
    name: &str,
    kind: FileKind,
    client: &str,
    (year, month, day): (i32, u32, u32),
    size: Option<&str>,
    starred: bool,
) -> FileRecord {
    FileRecord {
        name: name.to_string(),
        kind,
        client: client.to_string(),
        // Fixture dates are day-granular
        date: Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .expect("fixture date is valid"),
        size: size.map(str::to_string),
        starred,
    }
}

/// Returns the demo document set shown on the files screen.
pub fn default_files() -> Vec<FileRecord> {
    vec![
        file(
            "Tax Return 2023",
            FileKind::Tax,
            "Johnson LLC",
            (2023, 9, 10),
            Some("1.2 MB"),
            true,
        ),
        file(
            "Monthly P&L",
            FileKind::Spreadsheet,
            "Smith Enterprises",
            (2023, 9, 8),
            Some("856 KB"),
            false,
        ),
        file(
            "Client Documents",
            FileKind::Folder,
            "Acme Corp",
            (2023, 9, 7),
            None,
            false,
        ),
        file(
            "Quarterly Report",
            FileKind::Document,
            "Acme Corp",
            (2023, 9, 5),
            Some("3.1 MB"),
            false,
        ),
        file(
            "Expense Receipts",
            FileKind::Document,
            "TechStart Inc",
            (2023, 9, 3),
            Some("4.2 MB"),
            false,
        ),
        file(
            "Payroll Summary",
            FileKind::Spreadsheet,
            "Johnson LLC",
            (2023, 9, 1),
            Some("1.5 MB"),
            false,
        ),
        file(
            "Tax Forms",
            FileKind::Folder,
            "Various",
            (2023, 8, 28),
            None,
            false,
        ),
        file(
            "Financial Statement",
            FileKind::Document,
            "Smith Enterprises",
            (2023, 8, 25),
            Some("2.3 MB"),
            true,
        ),
    ]
}
