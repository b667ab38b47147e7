//! Developer tool for authoring hotspot positions.
//!
//! While capture is on, pointer positions are converted into design-space
//! percentages and clicks are turned into copyable coordinate literals. The
//! clipboard itself is asynchronous and lives in the host: the tool hands out
//! a [`CopyRequest`] and is told the outcome through [`CoordinateCalibrationTool::complete_copy`].

use crate::constants::{CALIBRATION_HISTORY_CAP, COPY_STATUS_LIFETIME};
use crate::error::StationError;
use crate::scale::{format_percent, DesignPoint, ScaleTransform};
use crate::state::{HotspotPosition, Scene};
use glam::DVec2;
use instant::Instant;
use rand::prelude::*;
use serde::Serialize;
use std::collections::VecDeque;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// One pointer event as seen by the tool.
#[derive(Clone, Copy, Debug)]
pub struct PointerSample {
    pub client: DVec2,
    /// Top-left of the design stage in client pixels.
    pub origin: DVec2,
    /// The pointer is over a calibration panel; such events are not captured.
    pub over_panel: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalibrationRecord {
    pub id: String,
    pub top: f64,
    pub left: f64,
    pub timestamp_ms: u64,
}

impl CalibrationRecord {
    pub fn literal(&self) -> String {
        coordinate_literal(DesignPoint {
            left: self.left,
            top: self.top,
        })
    }
}

/// The most recent click, kept on screen for manual copying.
#[derive(Clone, Debug, PartialEq)]
pub struct Capture {
    pub client: DVec2,
    pub point: DesignPoint,
    pub literal: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyPurpose {
    Coordinate,
    SceneExport,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CopyRequest {
    pub text: String,
    pub purpose: CopyPurpose,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CopyStatus {
    pub success: bool,
    pub message: String,
    pub expires_at: Instant,
}

pub struct CoordinateCalibrationTool {
    dev_mode: bool,
    collecting: bool,
    pointer: Option<DesignPoint>,
    last_capture: Option<Capture>,
    history: VecDeque<CalibrationRecord>,
    copy_status: Option<CopyStatus>,
    manual_copy: Option<String>,
    rng: StdRng,
}

impl CoordinateCalibrationTool {
    pub fn new(seed: u64) -> Self {
        Self {
            dev_mode: false,
            collecting: false,
            pointer: None,
            last_capture: None,
            history: VecDeque::with_capacity(CALIBRATION_HISTORY_CAP),
            copy_status: None,
            manual_copy: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn is_dev_mode(&self) -> bool {
        self.dev_mode
    }

    #[inline]
    pub fn is_collecting(&self) -> bool {
        self.collecting
    }

    /// Leaving developer mode also stops capture and clears transient output.
    pub fn toggle_dev_mode(&mut self, scene: &Scene) -> bool {
        self.dev_mode = !self.dev_mode;
        if self.dev_mode {
            log::info!("[calibration] developer mode on; scene {:?}", scene.name);
            for (i, sound) in scene.sounds.iter().enumerate() {
                log::info!(
                    "[calibration]   {}. {}: top={} left={}",
                    i + 1,
                    sound.name,
                    format_percent(sound.position.top),
                    format_percent(sound.position.left)
                );
            }
        } else {
            self.collecting = false;
            self.pointer = None;
            self.last_capture = None;
            self.copy_status = None;
            self.manual_copy = None;
            log::info!("[calibration] developer mode off");
        }
        self.dev_mode
    }

    /// Capture can only be switched on inside developer mode.
    pub fn toggle_collecting(&mut self) -> bool {
        if !self.dev_mode {
            return false;
        }
        self.collecting = !self.collecting;
        if !self.collecting {
            self.pointer = None;
        }
        log::info!("[calibration] capture {}", if self.collecting { "on" } else { "off" });
        self.collecting
    }

    pub fn record_pointer(
        &mut self,
        sample: PointerSample,
        transform: &ScaleTransform,
    ) -> Option<DesignPoint> {
        if !self.collecting || sample.over_panel {
            return None;
        }
        let point = transform.client_to_percent(sample.client, sample.origin);
        self.pointer = Some(point);
        Some(point)
    }

    /// Record a click and hand back the text to put on the clipboard.
    pub fn capture_click(
        &mut self,
        sample: PointerSample,
        transform: &ScaleTransform,
        timestamp_ms: u64,
    ) -> Option<CopyRequest> {
        if !self.collecting || sample.over_panel {
            return None;
        }
        let point = transform.client_to_percent(sample.client, sample.origin);
        let literal = coordinate_literal(point);
        let record = CalibrationRecord {
            id: self.next_id(timestamp_ms),
            top: point.top,
            left: point.left,
            timestamp_ms,
        };
        log::info!("[calibration] captured {literal}");
        self.push_record(record);
        self.last_capture = Some(Capture {
            client: sample.client,
            point,
            literal: literal.clone(),
        });
        Some(CopyRequest {
            text: literal,
            purpose: CopyPurpose::Coordinate,
        })
    }

    /// Outcome of a clipboard write. A failure keeps the text around for
    /// manual selection instead of dropping it.
    pub fn complete_copy(
        &mut self,
        request: &CopyRequest,
        result: Result<(), StationError>,
        now: Instant,
    ) {
        let expires_at = now + COPY_STATUS_LIFETIME;
        match result {
            Ok(()) => {
                self.manual_copy = None;
                self.copy_status = Some(CopyStatus {
                    success: true,
                    message: match request.purpose {
                        CopyPurpose::Coordinate => "Coordinate copied to clipboard".to_string(),
                        CopyPurpose::SceneExport => "Scene data copied to clipboard".to_string(),
                    },
                    expires_at,
                });
            }
            Err(err) => {
                log::warn!("[calibration] {err}; offering manual copy");
                self.manual_copy = Some(request.text.clone());
                self.copy_status = Some(CopyStatus {
                    success: false,
                    message: "Automatic copy is unavailable. Select the text below and press Ctrl+C."
                        .to_string(),
                    expires_at,
                });
            }
        }
    }

    /// All id/name/position triples of `scene` as one pasteable block.
    /// Positions are JSON objects with percent strings, as stored in the
    /// catalog.
    pub fn export_scene(&self, scene: &Scene) -> CopyRequest {
        let entries: Vec<String> = scene
            .sounds
            .iter()
            .map(|s| {
                format!(
                    "  {{ id: '{}', name: '{}', position: {} }}",
                    s.id,
                    s.name,
                    position_json(&s.position)
                )
            })
            .collect();
        let text = format!(
            "{{\n  id: '{}',\n  name: '{}',\n  sounds: [\n{}\n  ]\n}}",
            scene.id,
            scene.name,
            entries.join(",\n")
        );
        CopyRequest {
            text,
            purpose: CopyPurpose::SceneExport,
        }
    }

    pub fn copy_record(&self, id: &str) -> Option<CopyRequest> {
        self.history.iter().find(|r| r.id == id).map(|r| CopyRequest {
            text: r.literal(),
            purpose: CopyPurpose::Coordinate,
        })
    }

    pub fn remove_record(&mut self, id: &str) -> bool {
        let before = self.history.len();
        self.history.retain(|r| r.id != id);
        before != self.history.len()
    }

    /// Bulk clear. `confirm` is asked with the entry count and only when
    /// there is something to clear.
    pub fn clear_history(&mut self, confirm: impl FnOnce(usize) -> bool) -> bool {
        if self.history.is_empty() || !confirm(self.history.len()) {
            return false;
        }
        self.history.clear();
        log::info!("[calibration] history cleared");
        true
    }

    /// Expire the copy status. Returns true when it was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.copy_status {
            Some(status) if now >= status.expires_at => {
                self.copy_status = None;
                true
            }
            _ => false,
        }
    }

    /// Newest first.
    pub fn history(&self) -> impl Iterator<Item = &CalibrationRecord> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn pointer(&self) -> Option<DesignPoint> {
        self.pointer
    }

    pub fn last_capture(&self) -> Option<&Capture> {
        self.last_capture.as_ref()
    }

    pub fn copy_status(&self) -> Option<&CopyStatus> {
        self.copy_status.as_ref()
    }

    pub fn manual_copy(&self) -> Option<&str> {
        self.manual_copy.as_deref()
    }

    fn push_record(&mut self, record: CalibrationRecord) {
        if self.history.len() == CALIBRATION_HISTORY_CAP {
            self.history.pop_back();
        }
        self.history.push_front(record);
    }

    fn next_id(&mut self, timestamp_ms: u64) -> String {
        let suffix: String = (0..9)
            .map(|_| *ID_ALPHABET.choose(&mut self.rng).unwrap_or(&b'0') as char)
            .collect();
        format!("coord_{timestamp_ms}_{suffix}")
    }
}

/// `{ top: '50%', left: '50%' }`
pub fn coordinate_literal(point: DesignPoint) -> String {
    format!(
        "{{ top: '{}', left: '{}' }}",
        format_percent(point.top),
        format_percent(point.left)
    )
}

/// Field order is `top`, `left`, matching how catalog rows are written.
#[derive(Serialize)]
struct PositionJson {
    top: String,
    left: String,
}

fn position_json(position: &HotspotPosition) -> String {
    let json = PositionJson {
        top: format_percent(position.top),
        left: format_percent(position.left),
    };
    serde_json::to_string(&json).unwrap_or_default()
}
