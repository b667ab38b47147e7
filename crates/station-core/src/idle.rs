//! Auto-hide of the on-screen controls.
//!
//! A debounced idle timeout: every pointer movement restarts the countdown,
//! and only a quiet period of `hide_time` hides the controls. Any open modal
//! suspends the countdown until the last one closes.

use crate::modal::{ModalKind, OpenModals};
use crate::settings::AppSettings;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityPhase {
    Visible,
    VisibleCountingDown,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityState {
    pub visible: bool,
    pub idle_deadline: Option<Instant>,
}

/// A one-shot timer the host should (re)schedule. A later request, or a
/// cancellation, invalidates every earlier generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    pub generation: u64,
    pub delay: Duration,
}

pub struct IdleVisibilityController {
    state: VisibilityState,
    generation: u64,
    hide_enabled: bool,
    hide_after: Duration,
    armed_delay: Duration,
    modals: OpenModals,
}

impl IdleVisibilityController {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            state: VisibilityState {
                visible: true,
                idle_deadline: None,
            },
            generation: 0,
            hide_enabled: settings.hide_elements,
            hide_after: settings.hide_duration(),
            armed_delay: Duration::ZERO,
            modals: OpenModals::default(),
        }
    }

    /// Initial evaluation once the controls are on screen.
    pub fn start(&mut self, now: Instant) {
        self.refresh(now);
    }

    pub fn on_pointer_move(&mut self, now: Instant) {
        self.refresh(now);
    }

    /// Host timer callback. Stale generations are ignored so a cancelled
    /// timer can never hide the controls. Returns true when it hid them.
    pub fn on_timer_fired(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.state.idle_deadline.is_none() {
            log::debug!("[idle] stale timer {generation} (current {})", self.generation);
            return false;
        }
        self.hide();
        true
    }

    /// Deadline polling alternative to `on_timer_fired`.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state.idle_deadline {
            Some(deadline) if now >= deadline => {
                self.hide();
                true
            }
            _ => false,
        }
    }

    pub fn open_modal(&mut self, kind: ModalKind) -> bool {
        if !self.modals.open(kind) {
            return false;
        }
        self.cancel();
        self.state.visible = true;
        log::debug!("[idle] {kind:?} opened; countdown suspended");
        true
    }

    pub fn close_modal(&mut self, kind: ModalKind, now: Instant) -> bool {
        if !self.modals.close(kind) {
            return false;
        }
        self.refresh(now);
        true
    }

    pub fn apply_settings(&mut self, settings: &AppSettings, now: Instant) {
        self.hide_enabled = settings.hide_elements;
        self.hide_after = settings.hide_duration();
        if !self.hide_enabled {
            log::debug!("[idle] auto-hide disabled");
        }
        self.refresh(now);
    }

    #[inline]
    pub fn state(&self) -> &VisibilityState {
        &self.state
    }

    #[inline]
    pub fn modals(&self) -> &OpenModals {
        &self.modals
    }

    pub fn phase(&self) -> VisibilityPhase {
        match (self.state.visible, self.state.idle_deadline) {
            (false, _) => VisibilityPhase::Hidden,
            (true, Some(_)) => VisibilityPhase::VisibleCountingDown,
            (true, None) => VisibilityPhase::Visible,
        }
    }

    /// Controls stay on screen while any modal is open, even when hidden.
    pub fn controls_visible(&self) -> bool {
        self.state.visible || !self.modals.is_empty()
    }

    /// The timer the host should currently have scheduled, if any.
    pub fn armed_timer(&self) -> Option<TimerRequest> {
        self.state.idle_deadline.map(|_| TimerRequest {
            generation: self.generation,
            delay: self.armed_delay,
        })
    }

    fn refresh(&mut self, now: Instant) {
        self.state.visible = true;
        if self.hide_enabled && self.modals.is_empty() {
            self.arm(now);
        } else {
            self.cancel();
        }
    }

    fn arm(&mut self, now: Instant) {
        self.generation += 1;
        self.armed_delay = self.hide_after;
        self.state.idle_deadline = Some(now + self.hide_after);
    }

    fn cancel(&mut self) {
        if self.state.idle_deadline.take().is_some() {
            self.generation += 1;
        }
    }

    fn hide(&mut self) {
        self.state.visible = false;
        self.state.idle_deadline = None;
        log::debug!("[idle] controls hidden");
    }
}
