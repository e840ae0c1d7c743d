//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Application name
pub const APP_NAME: &str = "EduConnect Teacher";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log file written next to the working directory
pub const LOG_FILE: &str = "educonnect.log";

/// Directory under $HOME holding an optional seed override
pub const SEED_DIR: &str = ".educonnect";

/// Seed file looked up inside [`SEED_DIR`]
pub const SEED_FILE: &str = "seed.yaml";

/// Class selected when the console opens
pub const DEFAULT_ACTIVE_CLASS: &str = "C1";

/// Scale used for freshly created grade sessions
pub const DEFAULT_GRADE_SCALE: u8 = 20;

/// Shown as `last_time` on a room right after the teacher writes in it
pub const JUST_NOW: &str = "À l'instant";

/// Homework due within this many days counts as "to correct soon"
pub const CORRECTION_WINDOW_DAYS: i64 = 3;
