//! Central constants for the alfred application

/// Application identity
pub mod app {
    /// Name used for the binary and for versioned settings directories
    pub const NAME: &str = "alfred";

    /// Version tag of the running build
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Default values for configuration
pub mod config {
    /// Name of the configuration file inside the settings directory
    pub const CONFIG_FILE_NAME: &str = "alfredConfig.json";

    /// Environment variable overriding the settings directory
    pub const SETTINGS_DIR_ENV: &str = "ALFRED_SETTINGS_DIR";

    /// Display name used when none is configured
    pub const DEFAULT_NAME: &str = "Wayne";

    /// Title used when none is configured
    pub const DEFAULT_TITLE: &str = "sir";
}

/// Repository selection keywords
pub mod selector {
    /// Selects every registered repository (and clears them all on delete)
    pub const ALL: &str = "all";
}
