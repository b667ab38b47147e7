use crate::error::{Result, StationError};
use crate::state::{Scene, Track};
use serde::Deserialize;

/// Wire shape of the catalog endpoint: `{ success, tracks, scenes, error? }`.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub tracks: Option<Vec<Track>>,
    #[serde(default)]
    pub scenes: Option<Vec<Scene>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Tracks and scenes for one session. Fetched once; never refreshed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub tracks: Vec<Track>,
    pub scenes: Vec<Scene>,
}

impl Catalog {
    pub fn from_response(response: CatalogResponse) -> Result<Self> {
        if !response.success {
            let reason = response
                .error
                .unwrap_or_else(|| "provider reported failure".to_string());
            return Err(StationError::Catalog(reason));
        }
        Ok(Self {
            tracks: response.tracks.unwrap_or_default(),
            scenes: response.scenes.unwrap_or_default(),
        })
    }

    pub fn from_json(body: &str) -> Result<Self> {
        let response: CatalogResponse = serde_json::from_str(body)?;
        Self::from_response(response)
    }

    /// Any failure degrades to an empty catalog; the UI then shows its
    /// placeholder track and scene.
    pub fn or_empty(result: Result<Self>) -> Self {
        match result {
            Ok(catalog) => catalog,
            Err(err) => {
                log::error!("[catalog] {err}; continuing without data");
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.scenes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_false_is_an_error_with_reason() {
        let err = Catalog::from_json(r#"{"success":false,"error":"db down"}"#).unwrap_err();
        assert_eq!(err, StationError::Catalog("db down".into()));
    }

    #[test]
    fn garbage_degrades_to_empty() {
        let catalog = Catalog::or_empty(Catalog::from_json("<html>502</html>"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_lists_are_empty() {
        let catalog = Catalog::from_json(r#"{"success":true}"#).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn loosely_typed_provider_rows_still_load() {
        let body = r#"{
            "success": true,
            "tracks": [{"id":"9b2c-uuid","title":"Dusk","artist":"Mira","url":"/m/1.mp3","cover":null}],
            "scenes": [{"id":1,"name":"Loft","bg_day":"/d.gif","bg_night":null,"theme_color":null,"sounds":[]}]
        }"#;
        let catalog = Catalog::from_json(body).unwrap();
        assert_eq!(catalog.tracks[0].id.as_deref(), Some("9b2c-uuid"));
        assert_eq!(catalog.tracks[0].cover, "");
        assert_eq!(catalog.scenes[0].id, "1");
        assert_eq!(catalog.scenes[0].background(false), "/d.gif");
    }
}
