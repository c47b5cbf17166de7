//! Application-wide constants for Spotlight.
//!
//! Centralising magic numbers and configuration defaults here keeps the rest
//! of the codebase clean and makes tuning straightforward.

/// Application display name used in titles, dialogs, etc.
pub const APP_NAME: &str = "Spotlight";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Title of informational notices raised by the spotlight panel.
pub const NOTICE_TITLE: &str = "Spotlight";

/// Fixed margin (logical pixels) subtracted from both list-view dimensions
/// when sizing spotlight icons.
pub const ICON_EXTRA_MARGIN: i32 = 10;

/// Default spacing between items in the spotlight list view.
pub const DEFAULT_LIST_SPACING: i32 = 2;

/// Row height of the source computer table (in logical pixels).
pub const TABLE_ROW_HEIGHT: f32 = 24.0;

/// Number of computers in the built-in demo list used when no computer
/// list file exists.
pub const DEMO_COMPUTER_COUNT: usize = 12;

/// Upper bound on the number of computers accepted from a list file.
pub const MAX_COMPUTERS: usize = 4_096;

/// Upper bound on queued notices. Further notices are dropped and logged.
pub const MAX_PENDING_NOTICES: usize = 16;

/// How long transient status messages stay visible (seconds).
pub const STATUS_MESSAGE_SECS: u64 = 4;

/// Environment variable overriding the computer list location.
pub const COMPUTERS_ENV_VAR: &str = "SPOTLIGHT_COMPUTERS";

/// Application data subdirectory name for logs and configuration.
pub const APP_DATA_DIR: &str = "Spotlight";

/// Subdirectory name used under XDG-style configuration roots.
pub const XDG_APP_DIR: &str = "spotlight";

/// User configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Computer list file name.
pub const COMPUTERS_FILE_NAME: &str = "computers.json";

/// Log subdirectory name under the app data directory.
pub const LOG_DIR: &str = "logs";

/// Log file name for persistent error/debug logging.
pub const LOG_FILE_NAME: &str = "spotlight.log";

/// Maximum log file size in bytes before rotation (5 MB).
pub const MAX_LOG_FILE_SIZE: u64 = 5 * 1024 * 1024;
