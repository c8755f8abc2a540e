// File: src/map.rs
//! Marker bookkeeping around the externally-owned map widget. Route
//! computation and rendering stay entirely inside the widget; this side
//! only tracks which markers exist so they can be replaced, removed and
//! bounded as a set.
use crate::model::{GeoPoint, Marker, RouteRequest};
use std::collections::HashMap;

/// Operations the map widget exposes to this crate.
pub trait MapSurface {
    fn place_marker(&mut self, marker: Marker);
    fn remove_marker(&mut self, id: &str);
    fn clear_markers(&mut self);
    fn fit_bounds(&mut self, points: &[GeoPoint]);
    fn show_route(&mut self, route: RouteRequest);
    fn clear_route(&mut self);
}

impl<M: MapSurface + ?Sized> MapSurface for Box<M> {
    fn place_marker(&mut self, marker: Marker) {
        (**self).place_marker(marker)
    }

    fn remove_marker(&mut self, id: &str) {
        (**self).remove_marker(id)
    }

    fn clear_markers(&mut self) {
        (**self).clear_markers()
    }

    fn fit_bounds(&mut self, points: &[GeoPoint]) {
        (**self).fit_bounds(points)
    }

    fn show_route(&mut self, route: RouteRequest) {
        (**self).show_route(route)
    }

    fn clear_route(&mut self) {
        (**self).clear_route()
    }
}

/// Host-supplied reactions to map interactions, injected like
/// `ScheduleCallbacks`.
#[derive(Default)]
pub struct MapCallbacks {
    pub on_map_click: Option<Box<dyn Fn(GeoPoint)>>,
    pub on_marker_click: Option<Box<dyn Fn(&Marker)>>,
}

/// Mirror of the markers currently placed on the map widget.
pub struct MarkerBoard<M: MapSurface> {
    surface: M,
    markers: HashMap<String, Marker>,
    callbacks: MapCallbacks,
}

impl<M: MapSurface> MarkerBoard<M> {
    pub fn new(surface: M, callbacks: MapCallbacks) -> Self {
        Self {
            surface,
            markers: HashMap::new(),
            callbacks,
        }
    }

    /// Place a marker, replacing any existing marker under the same id.
    /// The old widget marker is removed first so the widget never shows
    /// two pins for one id.
    pub fn place_marker(&mut self, marker: Marker) {
        if self.markers.contains_key(&marker.id) {
            self.surface.remove_marker(&marker.id);
        }
        self.surface.place_marker(marker.clone());
        self.markers.insert(marker.id.clone(), marker);
    }

    /// Remove a marker; silent no-op for unknown ids.
    pub fn remove_marker(&mut self, id: &str) {
        if self.markers.remove(id).is_some() {
            self.surface.remove_marker(id);
        }
    }

    pub fn clear_markers(&mut self) {
        self.surface.clear_markers();
        self.markers.clear();
    }

    /// Ask the widget to frame every current marker. No-op with no
    /// markers placed.
    pub fn fit_bounds(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        let points: Vec<GeoPoint> = self.markers.values().map(|m| m.position).collect();
        self.surface.fit_bounds(&points);
    }

    /// Forward a route request to the widget's directions service.
    /// Waypoint ordering is left to the widget to optimize.
    pub fn show_route(
        &mut self,
        origin: GeoPoint,
        destination: GeoPoint,
        waypoints: Vec<GeoPoint>,
    ) {
        self.surface.show_route(RouteRequest {
            origin,
            destination,
            waypoints,
            optimize_waypoints: true,
        });
    }

    pub fn clear_route(&mut self) {
        self.surface.clear_route();
    }

    /// The user clicked an empty spot on the map.
    pub fn report_map_click(&self, position: GeoPoint) {
        if let Some(callback) = &self.callbacks.on_map_click {
            callback(position);
        }
    }

    /// The user clicked a marker. Unknown ids are dropped silently.
    pub fn report_marker_click(&self, id: &str) {
        if let Some(marker) = self.markers.get(id)
            && let Some(callback) = &self.callbacks.on_marker_click
        {
            callback(marker);
        }
    }

    pub fn marker(&self, id: &str) -> Option<&Marker> {
        self.markers.get(id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }
}
