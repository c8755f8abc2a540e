// File: tests/common/mod.rs
// Recording doubles for the widget seams, shared by the integration
// tests.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use fleetboard::map::MapSurface;
use fleetboard::model::{Event, EventCategory, GeoPoint, Marker, RouteRequest};
use fleetboard::palette::ColorPair;
use fleetboard::surface::{CalendarSurface, CalendarView, LiveEvent, StyledEvent};

// --- Calendar double ---

pub struct FakeLiveEvent(pub StyledEvent);

impl LiveEvent for FakeLiveEvent {
    fn id(&self) -> &str {
        &self.0.event.id
    }

    fn start(&self) -> DateTime<Utc> {
        self.0.event.start
    }

    fn end(&self) -> Option<DateTime<Utc>> {
        self.0.event.end
    }

    fn set_title(&mut self, title: &str) {
        self.0.event.title = title.to_string();
    }

    fn set_start(&mut self, start: DateTime<Utc>) {
        self.0.event.start = start;
    }

    fn set_end(&mut self, end: Option<DateTime<Utc>>) {
        self.0.event.end = end;
    }

    fn set_all_day(&mut self, all_day: bool) {
        self.0.event.all_day = all_day;
    }

    fn set_colors(&mut self, colors: ColorPair) {
        self.0.colors = colors;
    }
}

/// In-memory stand-in for the rendering widget. Keeps rendered events in
/// insertion order and logs navigation calls.
#[derive(Default)]
pub struct FakeCalendar {
    pub rendered: Vec<FakeLiveEvent>,
    pub views: Vec<CalendarView>,
    pub today_jumps: usize,
    pub period_steps: Vec<i8>,
}

impl FakeCalendar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CalendarSurface for FakeCalendar {
    fn add_event(&mut self, event: StyledEvent) {
        self.rendered.push(FakeLiveEvent(event));
    }

    fn event_by_id(&mut self, id: &str) -> Option<&mut dyn LiveEvent> {
        self.rendered
            .iter_mut()
            .find(|e| e.0.event.id == id)
            .map(|e| e as &mut dyn LiveEvent)
    }

    fn remove_event(&mut self, id: &str) -> bool {
        let before = self.rendered.len();
        self.rendered.retain(|e| e.0.event.id != id);
        self.rendered.len() != before
    }

    fn remove_all_events(&mut self) {
        self.rendered.clear();
    }

    fn events(&self) -> Vec<StyledEvent> {
        self.rendered.iter().map(|e| e.0.clone()).collect()
    }

    fn change_view(&mut self, view: CalendarView) {
        self.views.push(view);
    }

    fn show_today(&mut self) {
        self.today_jumps += 1;
    }

    fn prev_period(&mut self) {
        self.period_steps.push(-1);
    }

    fn next_period(&mut self) {
        self.period_steps.push(1);
    }
}

// --- Map double ---

/// Recording stand-in for the map widget.
#[derive(Default)]
pub struct FakeMap {
    pub placed: Vec<Marker>,
    pub removed: Vec<String>,
    pub marker_clears: usize,
    pub bounds: Vec<Vec<GeoPoint>>,
    pub routes: Vec<RouteRequest>,
    pub route_clears: usize,
}

impl FakeMap {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapSurface for FakeMap {
    fn place_marker(&mut self, marker: Marker) {
        self.placed.push(marker);
    }

    fn remove_marker(&mut self, id: &str) {
        self.removed.push(id.to_string());
    }

    fn clear_markers(&mut self) {
        self.marker_clears += 1;
    }

    fn fit_bounds(&mut self, points: &[GeoPoint]) {
        self.bounds.push(points.to_vec());
    }

    fn show_route(&mut self, route: RouteRequest) {
        self.routes.push(route);
    }

    fn clear_route(&mut self) {
        self.route_clears += 1;
    }
}

// --- Builders ---

/// Timestamp on 2024-01-`day` at `hour`:`minute` UTC.
pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, hour, minute, 0).unwrap()
}

pub fn delivery(id: &str, start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Event {
    Event {
        id: id.to_string(),
        category: EventCategory::Delivery,
        title: format!("Run {id}"),
        start,
        end,
        all_day: false,
    }
}

pub fn marker(id: &str, lat: f64, lng: f64) -> Marker {
    Marker {
        id: id.to_string(),
        position: GeoPoint::new(lat, lng),
        title: format!("Stop {id}"),
        icon: None,
    }
}
