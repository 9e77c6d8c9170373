//! Utility modules for common functionality

pub mod logger;
pub mod repository_discovery;

// Re-export commonly used functions
pub use logger::Logger;
pub use repository_discovery::{find_git_roots, resolve_scan_root};
