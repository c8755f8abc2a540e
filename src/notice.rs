// File: src/notice.rs
// Transient, dismissible user notices (the "flash message" strip). The
// host renders whatever `active()` returns and calls `sweep()` on its
// own tick; notices older than DISPLAY_SECONDS are dropped there.
use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// How long a notice stays visible before a sweep removes it.
pub const DISPLAY_SECONDS: i64 = 5;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeLevel::Success => write!(f, "success"),
            NoticeLevel::Info => write!(f, "info"),
            NoticeLevel::Warning => write!(f, "warning"),
            NoticeLevel::Danger => write!(f, "danger"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub posted_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            posted_at: Utc::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Danger, message)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.posted_at >= Duration::seconds(DISPLAY_SECONDS)
    }
}

/// Ordered queue of currently-visible notices.
#[derive(Debug, Default)]
pub struct NoticeCenter {
    notices: Vec<Notice>,
}

impl NoticeCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn active(&self) -> &[Notice] {
        &self.notices
    }

    /// Remove notices whose display lifetime has passed.
    pub fn sweep(&mut self, now: DateTime<Utc>) {
        self.notices.retain(|n| !n.is_expired(now));
    }

    /// Explicit user dismissal of one notice.
    pub fn dismiss(&mut self, index: usize) {
        if index < self.notices.len() {
            self.notices.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }
}
