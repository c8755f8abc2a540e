// File: src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::surface::CalendarView;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

fn default_backend_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_slot_min_time() -> String {
    "06:00".to_string()
}
fn default_slot_max_time() -> String {
    "20:00".to_string()
}

fn default_slot_duration_mins() -> u32 {
    30
}
fn default_snap_duration_mins() -> u32 {
    15
}

fn default_true() -> bool {
    true
}

fn default_business_days() -> Vec<u8> {
    vec![1, 2, 3, 4, 5]
}
fn default_business_start() -> String {
    "08:00".to_string()
}
fn default_business_end() -> String {
    "18:00".to_string()
}

fn default_center_lat() -> f64 {
    50.0755
}
fn default_center_lng() -> f64 {
    14.4378
}
fn default_zoom() -> u8 {
    12
}

/// Display options for the calendar grid, passed through to the widget
/// at init time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarOptions {
    #[serde(default)]
    pub initial_view: CalendarView,
    #[serde(default = "default_slot_min_time")]
    pub slot_min_time: String, // Format "HH:MM"
    #[serde(default = "default_slot_max_time")]
    pub slot_max_time: String,
    #[serde(default = "default_slot_duration_mins")]
    pub slot_duration_mins: u32,
    #[serde(default = "default_snap_duration_mins")]
    pub snap_duration_mins: u32,
    #[serde(default)]
    pub all_day_slot: bool,
    #[serde(default = "default_true")]
    pub now_indicator: bool,
    // ISO weekday numbers, Monday = 1.
    #[serde(default = "default_business_days")]
    pub business_days: Vec<u8>,
    #[serde(default = "default_business_start")]
    pub business_start: String,
    #[serde(default = "default_business_end")]
    pub business_end: String,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            initial_view: CalendarView::Month,
            // Match the serde defaults
            slot_min_time: "06:00".to_string(),
            slot_max_time: "20:00".to_string(),
            slot_duration_mins: 30,
            snap_duration_mins: 15,
            all_day_slot: false,
            now_indicator: true,
            business_days: vec![1, 2, 3, 4, 5],
            business_start: "08:00".to_string(),
            business_end: "18:00".to_string(),
        }
    }
}

/// Map widget defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center_lat: 50.0755,
            center_lng: 14.4378,
            zoom: 12,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    #[serde(default)]
    pub calendar: CalendarOptions,
    #[serde(default)]
    pub map: MapOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Match the serde defaults
            backend_url: "http://localhost:5000".to_string(),
            calendar: CalendarOptions::default(),
            map: MapOptions::default(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.config_file_path()?;

        // Explicitly detect missing file so callers (onboarding) can behave accordingly.
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&path, toml_str).map_err(|e| {
            anyhow::anyhow!("Failed to write config file '{}': {}", path.display(), e)
        })?;
        Ok(())
    }

    /// Get the path string using an explicit context.
    pub fn get_path_string(ctx: &dyn AppContext) -> Result<String> {
        let path = ctx.config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }
}
