//! Default values for lexscan configuration.
//!
//! All hardcoded defaults are centralized here for easy maintenance.

// ============================================================================
// Server Defaults
// ============================================================================

/// Default bind address for the web UI.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port for the web UI.
pub const DEFAULT_PORT: u16 = 7860;

/// Whether `serve` opens a browser tab by default.
pub const DEFAULT_OPEN_BROWSER: bool = true;

// ============================================================================
// Generation Defaults
// ============================================================================

/// Default text-generation endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/google/flan-t5-xl";

/// Seconds to wait for the provider before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Maximum number of tokens the provider may generate.
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 500;

/// Sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

// ============================================================================
// File Locations
// ============================================================================

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "lexscan.toml";

/// Directory under the user config dir.
pub const USER_CONFIG_DIR: &str = "lexscan";

/// File name under [`USER_CONFIG_DIR`].
pub const USER_CONFIG_FILE: &str = "config.toml";
