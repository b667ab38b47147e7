// Pure input mapping shared by the keyboard and pointer wiring.
//
// Nothing in here touches `web_sys`, so the host test suite can `include!`
// this file directly.

use station_core::{Direction, ModalKind, Shortcut};

/// The parts of a `KeyboardEvent` the shortcut table looks at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyChord<'a> {
    pub code: &'a str,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyChord<'_> {
    #[inline]
    fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Physical key codes, so layouts other than QWERTY keep their shortcuts.
pub fn shortcut_for(chord: KeyChord<'_>) -> Option<Shortcut> {
    match chord.code {
        "Space" => Some(Shortcut::TogglePlay),
        "KeyM" if !chord.command() => Some(Shortcut::ToggleMute),
        "KeyD" if chord.command() => Some(Shortcut::ToggleDevMode),
        "KeyC" if chord.command() && !chord.shift => Some(Shortcut::ToggleCalibration),
        "KeyC" if chord.shift && !chord.command() => Some(Shortcut::ExportScene),
        "Delete" if chord.ctrl && chord.shift => Some(Shortcut::ClearHistory),
        "Escape" => Some(Shortcut::CloseModals),
        _ => None,
    }
}

/// Typing into a form field must not trigger shortcuts (Escape still does).
#[inline]
pub fn is_editable_tag(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea")
}

pub fn modal_from_name(name: &str) -> Option<ModalKind> {
    match name {
        "scenes" => Some(ModalKind::SceneMenu),
        "settings" => Some(ModalKind::Settings),
        "info" => Some(ModalKind::Info),
        "volume" => Some(ModalKind::Volume),
        "developer" => Some(ModalKind::Developer),
        "welcome" => Some(ModalKind::Welcome),
        _ => None,
    }
}

pub fn modal_name(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::SceneMenu => "scenes",
        ModalKind::Settings => "settings",
        ModalKind::Info => "info",
        ModalKind::Volume => "volume",
        ModalKind::Developer => "developer",
        ModalKind::Welcome => "welcome",
    }
}

/// Clicks on elements carrying `data-action`.
#[derive(Clone, Debug, PartialEq)]
pub enum UiAction {
    TogglePlay,
    Track(Direction),
    Scene(Direction),
    SelectScene(usize),
    ToggleDayMode,
    Open(ModalKind),
    Close(ModalKind),
    ToggleCalibration,
    ExportScene,
    CopyManual,
    CopyRecord(String),
    RemoveRecord(String),
    ClearHistory,
}

/// `modal`, `index` and `record` are the element's companion data attributes.
pub fn parse_action(
    action: &str,
    modal: Option<&str>,
    index: Option<&str>,
    record: Option<&str>,
) -> Option<UiAction> {
    let action = match action {
        "toggle-play" => UiAction::TogglePlay,
        "next-track" => UiAction::Track(Direction::Next),
        "prev-track" => UiAction::Track(Direction::Prev),
        "next-scene" => UiAction::Scene(Direction::Next),
        "prev-scene" => UiAction::Scene(Direction::Prev),
        "select-scene" => UiAction::SelectScene(index?.trim().parse().ok()?),
        "toggle-day" => UiAction::ToggleDayMode,
        "open" => UiAction::Open(modal_from_name(modal?)?),
        "close" => UiAction::Close(modal_from_name(modal?)?),
        "toggle-calibration" => UiAction::ToggleCalibration,
        "export-scene" => UiAction::ExportScene,
        "copy-manual" => UiAction::CopyManual,
        "copy-record" => UiAction::CopyRecord(record?.to_string()),
        "remove-record" => UiAction::RemoveRecord(record?.to_string()),
        "clear-history" => UiAction::ClearHistory,
        _ => return None,
    };
    Some(action)
}

/// Which slider an `input` event came from.
#[derive(Clone, Debug, PartialEq)]
pub enum VolumeTarget {
    Master,
    Music,
    Ambient(String),
}

pub fn volume_target(attr: &str) -> VolumeTarget {
    match attr {
        "master" => VolumeTarget::Master,
        "music" => VolumeTarget::Music,
        id => VolumeTarget::Ambient(id.to_string()),
    }
}

/// Slider values arrive as strings in [0, 1]; junk reads as silence.
pub fn parse_slider(value: &str) -> f32 {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
