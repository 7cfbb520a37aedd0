//! User-visible notifications
//!
//! The planner reports outcomes the user should see (an item was added, no
//! space was found for it) through a fire-and-forget [`NotificationSink`].
//! [`NotificationCenter`] is the default sink: it keeps the list of active
//! notifications for display and broadcasts each one to subscribers.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single user-visible message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: Option<String>,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            severity,
            timestamp: Utc::now(),
        }
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Severity::Info, title)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Severity::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Severity::Error, title)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "[{}] {}: {}", self.severity, self.title, desc),
            None => write!(f, "[{}] {}", self.severity, self.title),
        }
    }
}

/// Receiver of fire-and-forget notifications.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

impl<S: NotificationSink + ?Sized> NotificationSink for Arc<S> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// Active notifications kept by [`NotificationCenter::default`].
pub const DEFAULT_MAX_ACTIVE: usize = 32;

/// Notification list plus broadcast channel.
///
/// The list holds at most `max_active` entries; the oldest is dropped when a
/// new one would exceed it.
pub struct NotificationCenter {
    sender: broadcast::Sender<Notification>,
    active: RwLock<Vec<Notification>>,
    max_active: usize,
}

impl NotificationCenter {
    /// Create a new notification center
    ///
    /// # Arguments
    /// * `buffer_size` - Capacity of the broadcast channel
    pub fn new(buffer_size: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer_size.max(1));
        Self {
            sender,
            active: RwLock::new(Vec::new()),
            max_active: DEFAULT_MAX_ACTIVE,
        }
    }

    /// Limit the number of active notifications kept (at least one).
    pub fn with_max_active(mut self, max_active: usize) -> Self {
        self.max_active = max_active.max(1);
        self
    }

    pub fn max_active(&self) -> usize {
        self.max_active
    }

    /// Subscribe to notifications published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.sender.subscribe()
    }

    /// Snapshot of the active notifications, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.active.read().clone()
    }

    pub fn len(&self) -> usize {
        self.active.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.read().is_empty()
    }

    /// Dismiss the notification at `index`. Returns it if it existed.
    pub fn remove(&self, index: usize) -> Option<Notification> {
        let mut active = self.active.write();
        if index < active.len() {
            Some(active.remove(index))
        } else {
            None
        }
    }

    /// Dismiss everything.
    pub fn clear(&self) {
        self.active.write().clear();
    }

    /// Dismiss notifications older than `max_age` relative to `now`.
    /// Returns how many were dropped.
    pub fn prune(&self, max_age: chrono::Duration, now: DateTime<Utc>) -> usize {
        let mut active = self.active.write();
        let before = active.len();
        active.retain(|n| now.signed_duration_since(n.timestamp) <= max_age);
        before - active.len()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(64)
    }
}

impl fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("active", &self.len())
            .field("max_active", &self.max_active)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

impl NotificationSink for NotificationCenter {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Error => tracing::warn!("{}", notification),
            _ => tracing::info!("{}", notification),
        }
        {
            let mut active = self.active.write();
            active.push(notification.clone());
            let overflow = active.len().saturating_sub(self.max_active);
            active.drain(..overflow);
        }
        // No subscribers is fine; the list above is the source of truth.
        let _ = self.sender.send(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_display() {
        let n = Notification::error("Cannot add Sofa to scene")
            .with_description("No space available for this furniture");
        assert_eq!(
            n.to_string(),
            "[error] Cannot add Sofa to scene: No space available for this furniture"
        );
        assert_eq!(
            Notification::success("Added Sofa to scene").to_string(),
            "[success] Added Sofa to scene"
        );
    }

    #[test]
    fn test_center_keeps_and_removes() {
        let center = NotificationCenter::default();
        center.notify(Notification::info("one"));
        center.notify(Notification::info("two"));
        assert_eq!(center.len(), 2);

        let removed = center.remove(0).unwrap();
        assert_eq!(removed.title, "one");
        assert_eq!(center.notifications()[0].title, "two");
        assert!(center.remove(5).is_none());

        center.clear();
        assert!(center.is_empty());
    }

    #[test]
    fn test_center_drops_oldest_past_limit() {
        let center = NotificationCenter::default().with_max_active(2);
        center.notify(Notification::info("one"));
        center.notify(Notification::info("two"));
        center.notify(Notification::info("three"));

        let titles: Vec<_> = center.notifications().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["two", "three"]);
    }

    #[test]
    fn test_prune_by_age() {
        let center = NotificationCenter::default();
        let mut old = Notification::info("old");
        old.timestamp = Utc::now() - chrono::Duration::seconds(30);
        center.notify(old);
        center.notify(Notification::info("fresh"));

        assert_eq!(center.prune(chrono::Duration::seconds(5), Utc::now()), 1);
        assert_eq!(center.len(), 1);
        assert_eq!(center.notifications()[0].title, "fresh");
    }

    #[test]
    fn test_center_broadcasts() {
        let center = NotificationCenter::new(8);
        let mut rx = center.subscribe();
        center.notify(Notification::success("placed"));
        let received = rx.try_recv().unwrap();
        assert_eq!(received.title, "placed");
        assert_eq!(received.severity, Severity::Success);
    }

    #[test]
    fn test_arc_sink() {
        let center = Arc::new(NotificationCenter::default());
        let sink: Arc<dyn NotificationSink> = center.clone();
        sink.notify(Notification::info("via arc"));
        assert_eq!(center.len(), 1);
    }
}
