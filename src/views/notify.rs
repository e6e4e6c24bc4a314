//! Transient success/failure notifications

use colored::Colorize;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

/// A single toast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub title: String,
    pub description: Option<String>,
}

/// Sink for notifications raised by views
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, title: &str, description: Option<String>) {
        self.notify(Notification {
            level: Level::Success,
            title: title.to_string(),
            description,
        });
    }

    fn error(&self, title: &str) {
        self.notify(Notification {
            level: Level::Error,
            title: title.to_string(),
            description: None,
        });
    }
}

/// Prints notifications to stderr so they never mix with command output
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        let title = match notification.level {
            Level::Success => format!("✓ {}", notification.title).green().bold(),
            Level::Error => format!("✗ {}", notification.title).red().bold(),
        };
        eprintln!("{}", title);
        if let Some(description) = notification.description {
            eprintln!("  {}", description.dimmed());
        }
    }
}

/// Collects notifications for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    log: std::sync::Mutex<Vec<Notification>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.log.lock().unwrap().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.title).collect()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.log.lock().unwrap().push(notification);
    }
}
