/// Overlays that suspend the idle auto-hide countdown while open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalKind {
    SceneMenu,
    Settings,
    Info,
    Volume,
    Developer,
    Welcome,
}

impl ModalKind {
    pub const ALL: [ModalKind; 6] = [
        ModalKind::SceneMenu,
        ModalKind::Settings,
        ModalKind::Info,
        ModalKind::Volume,
        ModalKind::Developer,
        ModalKind::Welcome,
    ];

    #[inline]
    fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Keyboard shortcuts stay live while this modal is open. Only the
    /// form-like overlays (settings, volume, welcome) swallow them.
    #[inline]
    pub fn allows_shortcuts(self) -> bool {
        matches!(
            self,
            ModalKind::SceneMenu | ModalKind::Info | ModalKind::Developer
        )
    }
}

/// Set of currently open modals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenModals(u8);

impl OpenModals {
    /// Returns true if the modal was not already open.
    pub fn open(&mut self, kind: ModalKind) -> bool {
        let was_open = self.contains(kind);
        self.0 |= kind.bit();
        !was_open
    }

    /// Returns true if the modal was open.
    pub fn close(&mut self, kind: ModalKind) -> bool {
        let was_open = self.contains(kind);
        self.0 &= !kind.bit();
        was_open
    }

    #[inline]
    pub fn contains(&self, kind: ModalKind) -> bool {
        self.0 & kind.bit() != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = ModalKind> + '_ {
        ModalKind::ALL.into_iter().filter(|k| self.contains(*k))
    }

    /// True when some open modal swallows keyboard shortcuts.
    pub fn blocks_shortcuts(&self) -> bool {
        self.iter().any(|k| !k.allows_shortcuts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_close_round_trip() {
        let mut modals = OpenModals::default();
        assert!(modals.open(ModalKind::Volume));
        assert!(!modals.open(ModalKind::Volume));
        assert!(modals.open(ModalKind::SceneMenu));
        assert_eq!(modals.iter().count(), 2);
        assert!(modals.close(ModalKind::Volume));
        assert!(!modals.close(ModalKind::Volume));
        assert!(!modals.blocks_shortcuts());
        assert!(!modals.is_empty());
    }

    #[test]
    fn only_form_overlays_swallow_shortcuts() {
        let mut modals = OpenModals::default();
        modals.open(ModalKind::Info);
        modals.open(ModalKind::Developer);
        assert!(!modals.blocks_shortcuts());
        for kind in [ModalKind::Settings, ModalKind::Volume, ModalKind::Welcome] {
            let mut with_form = modals;
            with_form.open(kind);
            assert!(with_form.blocks_shortcuts(), "{kind:?}");
        }
    }
}
