/// DOM hooks and front-end tuning.
///
/// Element ids and data attributes the page markup must provide. Keeping them
/// here keeps string literals out of the wiring code.
// Catalog endpoint (same origin)
pub const CATALOG_URL: &str = "/api/products";

// Top-level layout
pub const LOADING_ID: &str = "loading-screen";
pub const APP_ID: &str = "station";
pub const STAGE_ID: &str = "stage"; // 1920x1080 design canvas, scaled with CSS
pub const BACKGROUND_ID: &str = "stage-background";
pub const HOTSPOTS_ID: &str = "hotspots";
pub const CONTROLS_ID: &str = "controls";

// Now playing
pub const TRACK_TITLE_ID: &str = "track-title";
pub const TRACK_ARTIST_ID: &str = "track-artist";
pub const TRACK_COVER_ID: &str = "track-cover";
pub const TITLES_ID: &str = "titles";
pub const PLAY_BUTTON_ID: &str = "play-toggle";
pub const PROGRESS_ID: &str = "progress-fill";
pub const MUSIC_LEVEL_ID: &str = "music-level";
pub const CLOCK_ID: &str = "clock";
pub const MUSIC_ELEMENT_ID: &str = "music";

// Scene menu
pub const SCENE_LIST_ID: &str = "scene-list";

// Volume modal
pub const AMBIENT_SLIDERS_ID: &str = "ambient-sliders";

// Developer tools
pub const DEV_SCENE_NAME_ID: &str = "dev-scene-name";
pub const DEV_HOTSPOT_COUNT_ID: &str = "dev-hotspot-count";
pub const CAL_PANEL_ID: &str = "calibration-panel";
pub const CAL_POINTER_ID: &str = "calibration-pointer";
pub const CAL_LAST_ID: &str = "calibration-last";
pub const CAL_STATUS_ID: &str = "calibration-status";
pub const CAL_MANUAL_ID: &str = "calibration-manual";
pub const CAL_HISTORY_ID: &str = "calibration-history";
pub const CAL_CROSSHAIR_ID: &str = "calibration-crosshair";

// Data attributes used for event delegation
pub const ACTION_ATTR: &str = "data-action";
pub const MODAL_ATTR: &str = "data-modal";
pub const INDEX_ATTR: &str = "data-index";
pub const SOUND_ATTR: &str = "data-sound-id";
pub const RECORD_ATTR: &str = "data-record-id";
pub const VOLUME_ATTR: &str = "data-volume";
pub const SETTING_ATTR: &str = "data-setting";
pub const PANEL_SELECTOR: &str = "[data-calibration-panel]";

// CSS classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const IDLE_CLASS: &str = "idle"; // controls faded out
pub const ACTIVE_CLASS: &str = "active";
pub const CAPTURING_CLASS: &str = "capturing";

// Clock refresh cadence for the frame loop (ms)
pub const CLOCK_REFRESH_MS: f64 = 1000.0;
