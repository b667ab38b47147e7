// HTML fragments for the dynamic parts of the page.
//
// Pure string builders; the DOM side only assigns `innerHTML`.

use station_core::{format_percent, AmbientSound, CalibrationRecord, Scene};

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// One button per ambient sound, positioned in design-space percentages.
pub fn hotspots(sounds: &[AmbientSound], is_active: impl Fn(&str) -> bool) -> String {
    sounds
        .iter()
        .map(|s| {
            let class = if is_active(&s.id) {
                "hotspot active"
            } else {
                "hotspot"
            };
            format!(
                "<button class=\"{class}\" data-sound-id=\"{id}\" title=\"{name}\" style=\"top:{top};left:{left}\"></button>",
                id = escape(&s.id),
                name = escape(&s.name),
                top = format_percent(s.position.top),
                left = format_percent(s.position.left),
            )
        })
        .collect()
}

pub fn scene_list(scenes: &[Scene], current: usize) -> String {
    scenes
        .iter()
        .enumerate()
        .map(|(i, scene)| {
            let class = if i == current { "scene active" } else { "scene" };
            format!(
                "<li class=\"{class}\" data-action=\"select-scene\" data-index=\"{i}\" style=\"--theme:{color}\">{name}</li>",
                color = escape(&scene.theme_color),
                name = escape(&scene.name),
            )
        })
        .collect()
}

pub fn ambient_sliders(sounds: &[AmbientSound], volume: impl Fn(&str) -> f32) -> String {
    sounds
        .iter()
        .map(|s| {
            format!(
                "<label>{name}<input type=\"range\" min=\"0\" max=\"1\" step=\"0.01\" data-volume=\"{id}\" value=\"{value}\"></label>",
                name = escape(&s.name),
                id = escape(&s.id),
                value = volume(&s.id),
            )
        })
        .collect()
}

/// Newest first, each row with copy and remove buttons.
pub fn history<'a>(records: impl Iterator<Item = &'a CalibrationRecord>) -> String {
    records
        .map(|r| {
            let id = escape(&r.id);
            format!(
                "<li><code>{literal}</code>\
                 <button data-action=\"copy-record\" data-record-id=\"{id}\">copy</button>\
                 <button data-action=\"remove-record\" data-record-id=\"{id}\">remove</button></li>",
                literal = escape(&r.literal()),
            )
        })
        .collect()
}

/// `HH:MM`, 24-hour.
pub fn clock_text(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours % 24, minutes % 60)
}

/// Width style for the progress fill; `progress` is a percentage.
pub fn progress_width(progress: f32) -> String {
    format!("{:.2}%", progress.clamp(0.0, 100.0))
}

#[inline]
pub fn play_label(is_playing: bool) -> &'static str {
    if is_playing {
        "Pause"
    } else {
        "Play"
    }
}
