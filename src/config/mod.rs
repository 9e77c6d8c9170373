//! Configuration management module

pub mod loader;
pub mod migration;
pub mod store;

pub use loader::Config;
pub use store::{ConfigStore, DeleteOutcome};
