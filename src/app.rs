use crate::clipboard;
use crate::render::{self, ViewCache};
use crate::timers::{self, IdleTimer};
use station_core::{CopyRequest, Station};
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Everything the listeners share. Each handler borrows the station for the
/// duration of one event, then re-renders and reschedules timers.
pub struct App {
    pub document: web::Document,
    station: RefCell<Station>,
    idle_timer: RefCell<IdleTimer>,
    view: RefCell<ViewCache>,
}

impl App {
    pub fn new(document: web::Document, station: Station) -> Rc<Self> {
        Rc::new(Self {
            document,
            station: RefCell::new(station),
            idle_timer: RefCell::new(IdleTimer::default()),
            view: RefCell::new(ViewCache::default()),
        })
    }

    pub fn station(&self) -> Ref<'_, Station> {
        self.station.borrow()
    }

    /// Mutate the station, then bring the page and the idle timer up to date.
    pub fn update<R>(self: &Rc<Self>, f: impl FnOnce(&mut Station) -> R) -> R {
        let result = {
            let mut station = self.station.borrow_mut();
            f(&mut station)
        };
        self.refresh();
        result
    }

    /// Like `update`, but only re-renders when `f` reports a change.
    pub fn update_if(self: &Rc<Self>, f: impl FnOnce(&mut Station) -> bool) -> bool {
        let changed = {
            let mut station = self.station.borrow_mut();
            f(&mut station)
        };
        if changed {
            self.refresh();
        }
        changed
    }

    pub fn refresh(self: &Rc<Self>) {
        {
            let station = self.station.borrow();
            let mut view = self.view.borrow_mut();
            render::render(&self.document, &station, &mut view);
        }
        timers::sync_idle(self, &mut self.idle_timer.borrow_mut());
    }

    pub fn copy(self: &Rc<Self>, request: CopyRequest) {
        clipboard::write(self.clone(), request);
    }
}
