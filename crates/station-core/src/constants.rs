use std::time::Duration;

// Shared tuning constants used by the core state machines and the web frontend.

// Design space
pub const DESIGN_WIDTH: f64 = 1920.0; // logical canvas width hotspots are authored in
pub const DESIGN_HEIGHT: f64 = 1080.0; // logical canvas height
pub const DESIGN_ASPECT: f64 = DESIGN_WIDTH / DESIGN_HEIGHT;

// Mixer defaults
pub const DEFAULT_MASTER_VOLUME: f32 = 0.8; // also the level restored by the mute shortcut
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.5;

// Auto-hide
pub const DEFAULT_HIDE_TIME_SECS: u32 = 5;
pub const MIN_HIDE_TIME_SECS: u32 = 1;
pub const MAX_HIDE_TIME_SECS: u32 = 10;

// Calibration
pub const CALIBRATION_HISTORY_CAP: usize = 20;
pub const COPY_STATUS_LIFETIME: Duration = Duration::from_secs(3);

// Catalog
pub const LOADING_MIN_DISPLAY: Duration = Duration::from_millis(2500); // loading screen floor

// Persistence
pub const VISITED_STORAGE_KEY: &str = "lofi_station_visited";

// Placeholder records shown before the catalog arrives (or when it fails)
pub const PLACEHOLDER_TRACK_TITLE: &str = "Loading System...";
pub const PLACEHOLDER_TRACK_ARTIST: &str = "Lofi Station";
pub const PLACEHOLDER_TRACK_COVER: &str = "/intro-avatar/station.png";
pub const PLACEHOLDER_SCENE_ID: &str = "0";
pub const PLACEHOLDER_SCENE_NAME: &str = "Initializing";
pub const PLACEHOLDER_THEME_COLOR: &str = "#000";
