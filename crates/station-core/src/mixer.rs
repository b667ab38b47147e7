//! Two-tier volume model: every channel is scaled by the master level.
//!
//! Master is a multiplicative ceiling, not an independent channel, so a
//! master of 0 silences music and every ambient layer whatever their own
//! sliders say.

use crate::constants::{DEFAULT_MASTER_VOLUME, DEFAULT_MUSIC_VOLUME};

/// The two sliders of the volume panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MixLevels {
    pub master: f32,
    pub music: f32,
}

impl Default for MixLevels {
    fn default() -> Self {
        Self {
            master: DEFAULT_MASTER_VOLUME,
            music: DEFAULT_MUSIC_VOLUME,
        }
    }
}

impl MixLevels {
    pub fn set_master(&mut self, value: f32) {
        self.master = clamp_unit(value);
    }

    pub fn set_music(&mut self, value: f32) {
        self.music = clamp_unit(value);
    }

    /// Mute shortcut: silence, or restore the default level when already silent.
    pub fn toggle_mute(&mut self) {
        self.master = toggled_master(self.master);
    }

    #[inline]
    pub fn effective_music(&self) -> f32 {
        effective_music_volume(self.music, self.master)
    }
}

#[inline]
pub fn effective_music_volume(music: f32, master: f32) -> f32 {
    clamp_unit(music) * clamp_unit(master)
}

#[inline]
pub fn effective_ambient_volume(volume: f32, active: bool, master: f32) -> f32 {
    if active {
        clamp_unit(volume) * clamp_unit(master)
    } else {
        0.0
    }
}

/// Level shown on the control bar's music indicator.
#[inline]
pub fn displayed_music_volume(music: f32, master: f32) -> f32 {
    if master > 0.0 {
        music
    } else {
        0.0
    }
}

#[inline]
pub fn toggled_master(master: f32) -> f32 {
    if master == 0.0 {
        DEFAULT_MASTER_VOLUME
    } else {
        0.0
    }
}

/// Clamp to [0, 1]; NaN collapses to silence.
#[inline]
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
