//! Catalog record types shared with the web frontend.
//!
//! These types intentionally avoid referencing platform-specific APIs. They
//! are decoded from the catalog provider's JSON and are immutable once
//! loaded; the state machines only ever read them.

use serde::{de, Deserialize, Deserializer, Serialize};

/// One music track of the station's playlist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    #[serde(
        default,
        deserialize_with = "de_opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub title: String,
    pub artist: String,
    pub url: String,
    #[serde(default, deserialize_with = "de_nullable")]
    pub cover: String,
}

/// Hotspot anchor in design-space percentages (0-100 on both axes).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HotspotPosition {
    #[serde(deserialize_with = "de_percent")]
    pub top: f64,
    #[serde(deserialize_with = "de_percent")]
    pub left: f64,
}

/// A looping ambient layer bound to a scene hotspot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AmbientSound {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    pub src: String,
    #[serde(rename = "defaultValue", alias = "default_value")]
    pub default_value: f32,
    #[serde(default)]
    pub position: HotspotPosition,
}

/// A background scene and the ambient sounds it owns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(default, alias = "bg_day", deserialize_with = "de_nullable")]
    pub bg_day: String,
    #[serde(default, alias = "bg_night", deserialize_with = "de_nullable")]
    pub bg_night: String,
    #[serde(default, alias = "theme_color", deserialize_with = "de_nullable")]
    pub theme_color: String,
    #[serde(default, deserialize_with = "de_nullable")]
    pub sounds: Vec<AmbientSound>,
}

impl Scene {
    /// Background for the current lighting mode, falling back to the other
    /// one when a scene only ships a single image.
    pub fn background(&self, day_mode: bool) -> &str {
        let (preferred, fallback) = if day_mode {
            (&self.bg_day, &self.bg_night)
        } else {
            (&self.bg_night, &self.bg_day)
        };
        if preferred.is_empty() {
            fallback
        } else {
            preferred
        }
    }

    pub fn sound(&self, id: &str) -> Option<&AmbientSound> {
        self.sounds.iter().find(|s| s.id == id)
    }
}

/// Parse `"45.5%"`, `"45.5"` or `" 45 % "` into a percentage value.
pub fn parse_percent(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PercentRepr {
    Number(f64),
    Text(String),
}

fn de_percent<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match PercentRepr::deserialize(deserializer)? {
        PercentRepr::Number(v) => Ok(v),
        PercentRepr::Text(s) => parse_percent(&s)
            .ok_or_else(|| de::Error::custom(format!("invalid percentage {s:?}"))),
    }
}

/// Provider ids arrive as integers or strings (uuids); both are kept as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Int(i64),
    Float(f64),
    Text(String),
}

impl IdRepr {
    fn into_string(self) -> String {
        match self {
            IdRepr::Int(v) => v.to_string(),
            IdRepr::Float(v) => v.to_string(),
            IdRepr::Text(s) => s,
        }
    }
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    IdRepr::deserialize(deserializer).map(IdRepr::into_string)
}

fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IdRepr>::deserialize(deserializer)?.map(IdRepr::into_string))
}

/// Nullable columns read as their default.
fn de_nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_strings_and_numbers_decode_alike() {
        let a: HotspotPosition = serde_json::from_str(r#"{"top":"45.5%","left":"30%"}"#).unwrap();
        let b: HotspotPosition = serde_json::from_str(r#"{"top":45.5,"left":30}"#).unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_str::<HotspotPosition>(r#"{"top":"abc","left":"1%"}"#).is_err());
    }

    #[test]
    fn numeric_and_uuid_ids_decode_as_text() {
        let scene: Scene = serde_json::from_str(
            r#"{"id":1,"name":"Loft","sounds":[{"id":7,"name":"Rain","src":"/r.mp3","defaultValue":0.5}]}"#,
        )
        .unwrap();
        assert_eq!(scene.id, "1");
        assert_eq!(scene.sounds[0].id, "7");

        let track: Track = serde_json::from_str(
            r#"{"id":"9b2c-uuid","title":"t","artist":"a","url":"/m.mp3"}"#,
        )
        .unwrap();
        assert_eq!(track.id.as_deref(), Some("9b2c-uuid"));
    }

    #[test]
    fn null_columns_fall_back_to_defaults() {
        let track: Track = serde_json::from_str(
            r#"{"id":null,"title":"t","artist":"a","url":"/m.mp3","cover":null}"#,
        )
        .unwrap();
        assert_eq!(track.id, None);
        assert_eq!(track.cover, "");

        let scene: Scene = serde_json::from_str(
            r#"{"id":"s","name":"s","bg_day":null,"bg_night":"/n.gif","theme_color":null,"sounds":null}"#,
        )
        .unwrap();
        assert_eq!(scene.background(true), "/n.gif");
        assert_eq!(scene.theme_color, "");
        assert!(scene.sounds.is_empty());
    }

    #[test]
    fn scene_accepts_snake_case_fields() {
        let scene: Scene = serde_json::from_str(
            r##"{"id":"s1","name":"Rainy Room","bg_day":"/d.gif","bg_night":"/n.gif","theme_color":"#A0A0A0"}"##,
        )
        .unwrap();
        assert_eq!(scene.bg_day, "/d.gif");
        assert_eq!(scene.theme_color, "#A0A0A0");
        assert!(scene.sounds.is_empty());
        assert_eq!(scene.background(true), "/d.gif");
        assert_eq!(scene.background(false), "/n.gif");
    }

    #[test]
    fn background_falls_back_when_one_mode_is_missing() {
        let scene = Scene {
            id: "s".into(),
            name: "s".into(),
            bg_day: String::new(),
            bg_night: "/night.gif".into(),
            theme_color: String::new(),
            sounds: Vec::new(),
        };
        assert_eq!(scene.background(true), "/night.gif");
    }
}
