//! Clients screen domain.

pub mod model;
pub mod preset;

pub use model::{ClientFilter, ClientRecord, ClientStatus, TaxFileStatus};
pub use preset::default_clients;
