use crate::constants::VISITED_STORAGE_KEY;
use crate::error::Result;

/// Durable key/flag storage (browser `localStorage` on the web).
pub trait PersistenceProvider {
    fn read_flag(&self, key: &str) -> Result<bool>;
    fn write_flag(&mut self, key: &str) -> Result<()>;
}

/// Per-visit facts that outlive the page: only the "visited" flag today.
///
/// The flag is read exactly once at startup and written at most once, when
/// the welcome flow is dismissed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    first_visit: bool,
    visited_written: bool,
}

impl SessionState {
    /// Unreadable storage counts as a first visit.
    pub fn load(store: &dyn PersistenceProvider) -> Self {
        let visited = match store.read_flag(VISITED_STORAGE_KEY) {
            Ok(visited) => visited,
            Err(err) => {
                log::warn!("[session] {err}; assuming first visit");
                false
            }
        };
        Self {
            first_visit: !visited,
            visited_written: visited,
        }
    }

    #[inline]
    pub fn is_first_visit(&self) -> bool {
        self.first_visit
    }

    /// Persist the visited flag. Returns true only for the call that wrote it.
    pub fn mark_visited(&mut self, store: &mut dyn PersistenceProvider) -> bool {
        if self.visited_written {
            return false;
        }
        self.visited_written = true;
        match store.write_flag(VISITED_STORAGE_KEY) {
            Ok(()) => {
                log::info!("[session] visited flag stored");
                true
            }
            Err(err) => {
                log::warn!("[session] {err}; welcome will show again next visit");
                false
            }
        }
    }
}

/// In-memory store for hosts without durable storage and for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    flags: fnv::FnvHashSet<String>,
    pub writes: usize,
}

impl MemoryStore {
    pub fn visited() -> Self {
        let mut store = Self::default();
        store.flags.insert(VISITED_STORAGE_KEY.to_string());
        store
    }
}

impl PersistenceProvider for MemoryStore {
    fn read_flag(&self, key: &str) -> Result<bool> {
        Ok(self.flags.contains(key))
    }

    fn write_flag(&mut self, key: &str) -> Result<()> {
        self.writes += 1;
        self.flags.insert(key.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StationError;

    struct Broken;

    impl PersistenceProvider for Broken {
        fn read_flag(&self, _: &str) -> Result<bool> {
            Err(StationError::Storage("blocked".into()))
        }
        fn write_flag(&mut self, _: &str) -> Result<()> {
            Err(StationError::Storage("blocked".into()))
        }
    }

    #[test]
    fn flag_is_written_once() {
        let mut store = MemoryStore::default();
        let mut session = SessionState::load(&store);
        assert!(session.is_first_visit());
        assert!(session.mark_visited(&mut store));
        assert!(!session.mark_visited(&mut store));
        assert_eq!(store.writes, 1);
        assert!(!SessionState::load(&store).is_first_visit());
    }

    #[test]
    fn broken_storage_is_a_first_visit() {
        let mut store = Broken;
        let mut session = SessionState::load(&store);
        assert!(session.is_first_visit());
        assert!(!session.mark_visited(&mut store));
    }
}
