use crate::constants::{DEFAULT_HIDE_TIME_SECS, MAX_HIDE_TIME_SECS, MIN_HIDE_TIME_SECS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Session-scoped preferences edited from the settings panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    /// Auto-hide the controls after `hide_time` seconds without pointer movement.
    pub hide_elements: bool,
    pub show_titles: bool,
    pub show_clock: bool,
    /// Keyboard shortcuts (space, M, developer keys).
    pub shortcuts: bool,
    /// Seconds, always within [1, 10].
    pub hide_time: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            hide_elements: true,
            show_titles: true,
            show_clock: true,
            shortcuts: true,
            hide_time: DEFAULT_HIDE_TIME_SECS,
        }
    }
}

impl AppSettings {
    #[inline]
    pub fn hide_duration(&self) -> Duration {
        Duration::from_secs(u64::from(clamp_hide_time(self.hide_time)))
    }
}

#[inline]
pub fn clamp_hide_time(secs: u32) -> u32 {
    secs.clamp(MIN_HIDE_TIME_SECS, MAX_HIDE_TIME_SECS)
}

/// Parse the hide-time input field. Numbers are truncated and clamped;
/// anything non-numeric falls back to the default.
pub fn parse_hide_time(input: &str) -> u32 {
    let trimmed = input.trim();
    let parsed = trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.trunc() as i64));
    match parsed {
        Some(v) => v.clamp(i64::from(MIN_HIDE_TIME_SECS), i64::from(MAX_HIDE_TIME_SECS)) as u32,
        None => {
            log::warn!("[settings] invalid hide time {input:?}; using default");
            DEFAULT_HIDE_TIME_SECS
        }
    }
}

/// Settings mutations go through the store so every consumer observes the
/// same clamped values.
#[derive(Debug, Default)]
pub struct SettingsStore {
    settings: AppSettings,
}

impl SettingsStore {
    pub fn new(settings: AppSettings) -> Self {
        let mut settings = settings;
        settings.hide_time = clamp_hide_time(settings.hide_time);
        Self { settings }
    }

    #[inline]
    pub fn get(&self) -> &AppSettings {
        &self.settings
    }

    /// Apply an edit; returns true when anything changed.
    pub fn update(&mut self, edit: impl FnOnce(&mut AppSettings)) -> bool {
        let before = self.settings.clone();
        edit(&mut self.settings);
        self.settings.hide_time = clamp_hide_time(self.settings.hide_time);
        let changed = before != self.settings;
        if changed {
            log::info!("[settings] {:?}", self.settings);
        }
        changed
    }

    pub fn set_hide_time_input(&mut self, input: &str) -> bool {
        let secs = parse_hide_time(input);
        self.update(|s| s.hide_time = secs)
    }
}
