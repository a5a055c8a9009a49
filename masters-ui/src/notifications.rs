use std::time::{Duration, Instant};

/// Life of success toasts; other severities use the configured default.
pub const SUCCESS_LIFE: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    pub life: Duration,
    pub created_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.life
    }
}

/// Toast queue owned by a screen.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    default_life: Duration,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Duration::from_millis(5000))
    }
}

impl NotificationCenter {
    pub fn new(default_life: Duration) -> Self {
        Self {
            items: Vec::new(),
            default_life,
        }
    }

    pub fn push(&mut self, severity: Severity, summary: impl Into<String>, detail: impl Into<String>) {
        let life = match severity {
            Severity::Success => SUCCESS_LIFE,
            _ => self.default_life,
        };
        let notification = Notification {
            severity,
            summary: summary.into(),
            detail: detail.into(),
            life,
            created_at: Instant::now(),
        };
        log::debug!(
            "Notification [{:?}] {}: {}",
            notification.severity,
            notification.summary,
            notification.detail
        );
        self.items.push(notification);
    }

    pub fn success(&mut self, detail: impl Into<String>) {
        self.push(Severity::Success, "Successful", detail);
    }

    pub fn error(&mut self, detail: impl Into<String>) {
        self.push(Severity::Error, "Error", detail);
    }

    pub fn warn(&mut self, detail: impl Into<String>) {
        self.push(Severity::Warn, "Warning", detail);
    }

    /// Drops expired entries and returns what is left.
    pub fn active(&mut self, now: Instant) -> &[Notification] {
        self.items.retain(|n| !n.is_expired(now));
        &self.items
    }

    /// Everything pushed and not yet dismissed or expired by a call to
    /// [`NotificationCenter::active`].
    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    pub fn last(&self) -> Option<&Notification> {
        self.items.last()
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
            log::debug!("Notification dismissed at index: {}", index);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
