use chrono::{DateTime, Duration, Utc};
use ratatui::style::Color;
use tracing::{info, warn};

/// Notifications kept in history
pub const MAX_NOTIFICATIONS: usize = 100;

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn color(self) -> Color {
        match self {
            LogLevel::Info => Color::Cyan,
            LogLevel::Success => Color::Green,
            LogLevel::Warning => Color::Yellow,
            LogLevel::Error => Color::Red,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            LogLevel::Info => "ℹ",
            LogLevel::Success => "✓",
            LogLevel::Warning => "⚠",
            LogLevel::Error => "✗",
        }
    }
}

/// Short message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: LogLevel,
    pub title: String,
    pub message: String,
}

impl Toast {
    pub fn new(level: LogLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, title, message)
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Success, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, title, message)
    }

    pub fn text(&self) -> String {
        if self.message.is_empty() {
            self.title.clone()
        } else {
            format!("{}: {}", self.title, self.message)
        }
    }
}

/// Toast with the time it was raised
#[derive(Debug, Clone)]
pub struct Notification {
    pub timestamp: DateTime<Utc>,
    pub toast: Toast,
}

/// History of toasts; the newest one shows until it expires
#[derive(Debug)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    display_for: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::seconds(5))
    }
}

impl NotificationCenter {
    pub fn new(display_for: Duration) -> Self {
        Self {
            notifications: Vec::new(),
            display_for,
        }
    }

    pub fn push(&mut self, toast: Toast, now: DateTime<Utc>) {
        match toast.level {
            LogLevel::Warning | LogLevel::Error => warn!("{}", toast.text()),
            LogLevel::Info | LogLevel::Success => info!("{}", toast.text()),
        }

        self.notifications.push(Notification { timestamp: now, toast });

        // Keep only last 100 notifications
        if self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Latest notification if it is still on screen
    pub fn active(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.latest()
            .filter(|n| now - n.timestamp < self.display_for)
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}
