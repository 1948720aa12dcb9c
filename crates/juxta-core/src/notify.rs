//! Transient user notifications with auto-dismiss.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::consts::DEFAULT_NOTIFICATION_MS;
use crate::error::JuxtaError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant, lifetime: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= lifetime
    }
}

/// Queue of visible notifications, oldest first.
pub struct Notifier {
    lifetime: Duration,
    next_id: u64,
    active: Vec<Notification>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_NOTIFICATION_MS))
    }
}

impl Notifier {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            next_id: 0,
            active: Vec::new(),
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.push_at(message, severity, Instant::now())
    }

    pub fn push_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        debug!(id, %severity, %message, "Notification shown");
        self.active.push(Notification {
            id,
            message,
            severity,
            created_at: now,
        });
        id
    }

    /// Show the user-facing text of an error.
    pub fn push_error(&mut self, err: &JuxtaError) -> u64 {
        self.push(err.user_message(), Severity::Error)
    }

    /// Remove a notification early. Returns whether it was still visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id != id);
        self.active.len() != before
    }

    /// Drop every notification older than the lifetime.
    pub fn prune(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.active.retain(|n| !n.is_expired(now, lifetime));
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    /// Time until the oldest notification expires, for scheduling a repaint.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.active
            .iter()
            .map(|n| (n.created_at + self.lifetime).saturating_duration_since(now))
            .min()
    }
}
