// File: src/client.rs
//! Async JSON client for the admin backend. One request per user action,
//! no retries; a failure is logged, surfaced as a danger notice and
//! returned to the caller, who decides whether to ask the user to try
//! again.
use crate::model::{Driver, SystemSettings};
use crate::notice::{Notice, NoticeCenter};
use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::sync::{Arc, Mutex};

/// Database maintenance actions accepted by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum MaintenanceAction {
    Backup,
    Restore { file: String },
}

#[derive(Deserialize)]
struct DriverList {
    drivers: Vec<Driver>,
}

#[derive(Deserialize)]
struct LogLines {
    logs: Vec<String>,
}

#[derive(Deserialize)]
struct BackendMessage {
    message: Option<String>,
}

pub struct AdminClient {
    http: reqwest::Client,
    base_url: String,
    notices: Arc<Mutex<NoticeCenter>>,
}

impl AdminClient {
    pub fn new(base_url: impl Into<String>, notices: Arc<Mutex<NoticeCenter>>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            notices,
        }
    }

    pub async fn list_drivers(&self) -> Result<Vec<Driver>> {
        let list: DriverList = self
            .get_json("/drivers")
            .await
            .map_err(|e| self.report_failure("Error fetching drivers", e))?;
        Ok(list.drivers)
    }

    pub async fn fetch_logs(&self) -> Result<Vec<String>> {
        let lines: LogLines = self
            .get_json("/admin/logs")
            .await
            .map_err(|e| self.report_failure("Error fetching logs", e))?;
        Ok(lines.logs)
    }

    /// Run a backup or restore. The backend confirms with a human-readable
    /// message; a response without one counts as a failure.
    pub async fn run_maintenance(&self, action: MaintenanceAction) -> Result<String> {
        let label = match &action {
            MaintenanceAction::Backup => "Error during database backup",
            MaintenanceAction::Restore { .. } => "Error during database restore",
        };
        let reply: BackendMessage = self
            .post_json("/admin/database/maintenance", &action)
            .await
            .map_err(|e| self.report_failure(label, e))?;
        reply
            .message
            .ok_or_else(|| self.report_failure(label, anyhow!("backend sent no message")))
    }

    pub async fn load_settings(&self) -> Result<SystemSettings> {
        self.get_json("/admin/system/settings")
            .await
            .map_err(|e| self.report_failure("Error loading settings", e))
    }

    pub async fn save_settings(&self, settings: &SystemSettings) -> Result<String> {
        let reply: BackendMessage = self
            .post_json("/admin/system/settings", settings)
            .await
            .map_err(|e| self.report_failure("Error saving settings", e))?;
        reply.message.ok_or_else(|| {
            self.report_failure("Error saving settings", anyhow!("backend sent no message"))
        })
    }

    // --- Plumbing ---

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("POST {url}"))?;
        Self::decode(response).await
    }

    /// Decode a backend reply. Non-2xx responses become errors carrying
    /// the backend's own `message` when it sent one.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let text = response.text().await.context("reading response body")?;

        if !status.is_success() {
            let message = serde_json::from_str::<BackendMessage>(&text)
                .ok()
                .and_then(|m| m.message)
                .unwrap_or_else(|| "an error occurred".to_string());
            bail!("{status}: {message}");
        }

        serde_json::from_str(&text).with_context(|| format!("unexpected response body: {text}"))
    }

    /// Log the failure, post a danger notice for the user and hand the
    /// error back for the caller's own handler chain.
    fn report_failure(&self, label: &str, err: anyhow::Error) -> anyhow::Error {
        log::error!("{label}: {err:#}");
        if let Ok(mut notices) = self.notices.lock() {
            notices.push(Notice::danger(format!("{label}.")));
        }
        err
    }
}
