use crate::mixer::{clamp_unit, effective_ambient_volume};
use crate::state::{AmbientSound, Scene};
use fnv::{FnvHashMap, FnvHashSet};
use smallvec::SmallVec;

/// Output-side description of one hotspot's looping layer.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientLayer {
    pub id: String,
    pub src: String,
    pub volume: f32,
}

pub type AmbientLayers = SmallVec<[AmbientLayer; 8]>;

/// Drives the looping ambient elements of the current scene.
pub trait AmbientOutput {
    /// Bring the set of playing layers in line with `layers`: start missing
    /// ones, drop ones no longer listed, apply every volume.
    fn sync_layers(&mut self, layers: &[AmbientLayer]);
}

/// Which ambient sounds are on, and at what level.
///
/// Volumes are remembered per sound id across scene changes so a slider the
/// user moved keeps its position when the sound shows up again.
#[derive(Default)]
pub struct AmbientSoundManager {
    sounds: Vec<AmbientSound>,
    active: FnvHashSet<String>,
    volumes: FnvHashMap<String, f32>,
}

impl AmbientSoundManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every scene starts with all of its sounds on. Unseen ids are seeded
    /// with their default level; known ids keep theirs.
    pub fn on_scene_change(&mut self, scene: &Scene) {
        for sound in &scene.sounds {
            self.volumes
                .entry(sound.id.clone())
                .or_insert_with(|| clamp_unit(sound.default_value));
        }
        self.active = scene.sounds.iter().map(|s| s.id.clone()).collect();
        self.sounds = scene.sounds.clone();
        log::info!(
            "[ambient] scene {:?}: {} layers active",
            scene.name,
            self.active.len()
        );
    }

    /// Flip one hotspot. Ignored while calibration capture owns the pointer
    /// and for ids the current scene does not own. Returns true on change.
    pub fn toggle_ambience(&mut self, id: &str, calibration_active: bool) -> bool {
        if calibration_active {
            log::debug!("[ambient] toggle of {id:?} suppressed during calibration");
            return false;
        }
        if !self.sounds.iter().any(|s| s.id == id) {
            log::warn!("[ambient] toggle of unknown sound {id:?}");
            return false;
        }
        if !self.active.remove(id) {
            self.active.insert(id.to_string());
        }
        true
    }

    /// Slider assignment; independent of whether the sound is on.
    pub fn set_volume(&mut self, id: &str, value: f32) {
        self.volumes.insert(id.to_string(), clamp_unit(value));
    }

    #[inline]
    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains(id)
    }

    pub fn volume(&self, id: &str) -> Option<f32> {
        self.volumes.get(id).copied()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn effective_volume(&self, id: &str, master: f32) -> f32 {
        let volume = self.volume(id).unwrap_or(0.0);
        effective_ambient_volume(volume, self.is_active(id), master)
    }

    pub fn sounds(&self) -> &[AmbientSound] {
        &self.sounds
    }

    pub fn layers(&self, master: f32) -> AmbientLayers {
        self.sounds
            .iter()
            .map(|s| AmbientLayer {
                id: s.id.clone(),
                src: s.src.clone(),
                volume: self.effective_volume(&s.id, master),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HotspotPosition;

    fn sound(id: &str, default_value: f32) -> AmbientSound {
        AmbientSound {
            id: id.to_string(),
            name: id.to_uppercase(),
            src: format!("/ambient/{id}.mp3"),
            default_value,
            position: HotspotPosition::default(),
        }
    }

    fn scene(id: &str, sounds: Vec<AmbientSound>) -> Scene {
        Scene {
            id: id.to_string(),
            name: id.to_string(),
            bg_day: String::new(),
            bg_night: String::new(),
            theme_color: String::new(),
            sounds,
        }
    }

    #[test]
    fn stale_ids_are_dropped_on_scene_change() {
        let mut mgr = AmbientSoundManager::new();
        mgr.on_scene_change(&scene("a", vec![sound("rain", 0.5), sound("fire", 0.3)]));
        mgr.on_scene_change(&scene("b", vec![sound("wind", 0.4)]));
        assert!(!mgr.is_active("rain"));
        assert!(mgr.is_active("wind"));
        assert_eq!(mgr.active_count(), 1);
        assert_eq!(mgr.layers(1.0).len(), 1);
    }

    #[test]
    fn calibration_blocks_toggling() {
        let mut mgr = AmbientSoundManager::new();
        mgr.on_scene_change(&scene("a", vec![sound("rain", 0.5)]));
        assert!(!mgr.toggle_ambience("rain", true));
        assert!(mgr.is_active("rain"));
        assert!(!mgr.toggle_ambience("thunder", false));
    }
}
