//! Recompute notifications.
//!
//! Failed or skipped recomputes are not fatal to the document: the recompute
//! scheduler records them as [`Notification`] items tagged with the object
//! they concern, and the host shows them to the user afterwards.

use crate::types::ObjectId;
use std::fmt;

/// Severity level of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Recompute was skipped (e.g. while the document is restoring).
    Warning,
    /// Recompute ran and failed; the object's outputs were left unchanged.
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single notification produced during recompute.
#[derive(Debug, Clone)]
pub struct Notification {
    pub notification_type: NotificationType,
    /// Object the notification concerns, if any.
    pub object: Option<ObjectId>,
    /// Label of that object, for display.
    pub label: String,
    pub message: String,
}

impl Notification {
    pub fn new(
        notification_type: NotificationType,
        label: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            notification_type,
            object: None,
            label: label.into(),
            message: message.into(),
        }
    }

    pub fn with_object(mut self, object: ObjectId) -> Self {
        self.object = Some(object);
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.notification_type, self.label, self.message)
    }
}

/// Collects notifications across recompute passes.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    /// Record a notification built from its parts.
    pub fn notify(
        &mut self,
        notification_type: NotificationType,
        label: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.push(Notification::new(notification_type, label, message));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// All notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
