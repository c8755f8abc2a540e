// File: src/model/marker.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// WGS84 coordinate pair as consumed by the map widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Icon set understood by the map surface. The widget maps these to its
/// own sprite assets.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum MarkerIcon {
    Warehouse,
    Delivery,
    Driver,
}

impl fmt::Display for MarkerIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerIcon::Warehouse => write!(f, "warehouse"),
            MarkerIcon::Delivery => write!(f, "delivery"),
            MarkerIcon::Driver => write!(f, "driver"),
        }
    }
}

/// One pin on the dispatch map. Ids are caller-assigned, like event ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    pub position: GeoPoint,
    pub title: String,
    #[serde(default)]
    pub icon: Option<MarkerIcon>,
}

/// Route computation request forwarded verbatim to the map widget's
/// directions service.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub waypoints: Vec<GeoPoint>,
    pub optimize_waypoints: bool,
}
