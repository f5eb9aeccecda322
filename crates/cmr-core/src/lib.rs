pub mod assistant;
pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod error;
pub mod files;
pub mod integrations;
pub mod listing;
pub mod settings;

// Re-export common error type
pub use error::CmrError;
