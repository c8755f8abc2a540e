// File: src/controller.rs
//! Central wiring between the calendar widget and the host application.
//! The host forwards widget interaction reports (click, drag-drop,
//! resize, range-select) here; this controller resolves the mirrored
//! record and invokes the caller-injected callback, never exposing raw
//! widget handles. View navigation is forwarded to the widget untouched.
use crate::model::{DateSelection, Event, EventPatch};
use crate::store::EventStore;
use crate::surface::{CalendarSurface, CalendarView};
use chrono::{DateTime, Utc};

/// Host-supplied reactions to calendar interactions. All optional; a
/// missing callback turns the corresponding report into a no-op.
///
/// Callbacks are injected here instead of being looked up from any
/// global registry, so tests can substitute recording doubles.
#[derive(Default)]
pub struct ScheduleCallbacks {
    pub on_event_click: Option<Box<dyn Fn(&Event)>>,
    pub on_event_drop: Option<Box<dyn Fn(&Event)>>,
    pub on_event_resize: Option<Box<dyn Fn(&Event)>>,
    pub on_date_select: Option<Box<dyn Fn(&DateSelection)>>,
}

/// Owns the event store and the injected callbacks for one calendar
/// view.
pub struct ScheduleController<S: CalendarSurface> {
    store: EventStore<S>,
    callbacks: ScheduleCallbacks,
}

impl<S: CalendarSurface> ScheduleController<S> {
    pub fn new(surface: S, callbacks: ScheduleCallbacks) -> Self {
        Self {
            store: EventStore::new(surface),
            callbacks,
        }
    }

    pub fn store(&self) -> &EventStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EventStore<S> {
        &mut self.store
    }

    // --- Store pass-throughs ---

    pub fn add_event(&mut self, event: Event) {
        self.store.add_event(event);
    }

    pub fn update_event(&mut self, id: &str, patch: &EventPatch) {
        self.store.update_event(id, patch);
    }

    pub fn remove_event(&mut self, id: &str) {
        self.store.remove_event(id);
    }

    pub fn clear_events(&mut self) {
        self.store.clear_events();
    }

    // --- Interaction reports from the widget ---

    /// The user clicked a rendered event. Invokes `on_event_click` with
    /// the mirrored record; ids the mirror does not know are dropped
    /// silently (the widget may render events nobody added through us).
    pub fn report_event_click(&self, id: &str) {
        if let Some(event) = self.store.snapshot(id)
            && let Some(callback) = &self.callbacks.on_event_click
        {
            callback(event);
        }
    }

    /// The user dragged an event to a new slot. The mirrored record is
    /// combined with the widget-reported times before dispatch.
    pub fn report_event_drop(
        &self,
        id: &str,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) {
        if let Some(event) = self.store.snapshot(id)
            && let Some(callback) = &self.callbacks.on_event_drop
        {
            let mut moved = event.clone();
            moved.start = start;
            moved.end = end;
            callback(&moved);
        }
    }

    /// The user resized an event. Same record shape as a drop report.
    pub fn report_event_resize(
        &self,
        id: &str,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) {
        if let Some(event) = self.store.snapshot(id)
            && let Some(callback) = &self.callbacks.on_event_resize
        {
            let mut resized = event.clone();
            resized.start = start;
            resized.end = end;
            callback(&resized);
        }
    }

    /// The user highlighted a range on the calendar grid.
    pub fn report_date_select(&self, selection: DateSelection) {
        if let Some(callback) = &self.callbacks.on_date_select {
            callback(&selection);
        }
    }

    // --- View navigation ---

    pub fn set_view(&mut self, view: CalendarView) {
        self.store.surface_mut().change_view(view);
    }

    pub fn show_today(&mut self) {
        self.store.surface_mut().show_today();
    }

    pub fn prev_period(&mut self) {
        self.store.surface_mut().prev_period();
    }

    pub fn next_period(&mut self) {
        self.store.surface_mut().next_period();
    }
}
