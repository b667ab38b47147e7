use station_core::{PersistenceProvider, Result, StationError};
use web_sys as web;

/// `window.localStorage`. Private browsing modes may refuse access; that
/// surfaces as `StationError::Storage` and the core treats it as non-fatal.
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Result<web::Storage> {
        web::window()
            .ok_or_else(|| StationError::Storage("no window".into()))?
            .local_storage()
            .map_err(|e| StationError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| StationError::Storage("localStorage disabled".into()))
    }
}

impl PersistenceProvider for LocalStore {
    fn read_flag(&self, key: &str) -> Result<bool> {
        let value = self
            .storage()?
            .get_item(key)
            .map_err(|e| StationError::Storage(format!("{:?}", e)))?;
        Ok(value.is_some())
    }

    fn write_flag(&mut self, key: &str) -> Result<()> {
        self.storage()?
            .set_item(key, "true")
            .map_err(|e| StationError::Storage(format!("{:?}", e)))
    }
}
