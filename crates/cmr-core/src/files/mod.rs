//! Files screen domain.

pub mod model;
pub mod preset;
pub mod screen;

pub use model::{FileFilter, FileKind, FileRecord};
pub use preset::default_files;
pub use screen::{FileListItem, FilesScreen};
