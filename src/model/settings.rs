// File: src/model/settings.rs
// Wire types for the admin backend: driver listing and the system
// settings form. Field names follow the backend JSON verbatim.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationSettings {
    #[serde(default)]
    pub logging: bool,
    #[serde(default)]
    pub debugging: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmailSettings {
    #[serde(default)]
    pub smtp_server: String,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiKeySettings {
    #[serde(default)]
    pub google_maps: String,
    #[serde(default)]
    pub other_service: String,
}

/// Full settings document as exchanged with `/admin/system/settings`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SystemSettings {
    #[serde(default)]
    pub application: ApplicationSettings,
    #[serde(default)]
    pub email: EmailSettings,
    #[serde(default)]
    pub api_keys: ApiKeySettings,
}
