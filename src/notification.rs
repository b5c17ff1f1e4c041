//! Decode/encode diagnostics.
//!
//! Problems that do not stop a decode (an unknown group code, a value that
//! had to be replaced by a default, a vertex list shorter than announced) are
//! collected as [`Notification`] items instead of being dropped or turned
//! into hard errors. The caller inspects the collection afterwards and
//! decides which of them, if any, are fatal.

use std::fmt;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// A group code outside every known range; the pair was ignored.
    UnknownGroupCode,
    /// A value that failed to parse as the type its group code implies.
    MalformedValue,
    /// The stream ended without the `0/EOF` marker.
    TruncatedStream,
    /// A declared sub-record count did not match the items received.
    UnbalancedAccumulator,
    /// A field or record the target version cannot represent.
    UnsupportedVersionFeature,
    /// A y or z coordinate without the x of the same point slot.
    OrphanCoordinate,
    /// A record missing a mandatory field; it was discarded.
    IncompleteRecord,
    /// A record type name the decoder does not know; its pairs were skipped.
    UnknownRecordType,
    /// Any other non-fatal condition.
    Warning,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownGroupCode => write!(f, "UnknownGroupCode"),
            Self::MalformedValue => write!(f, "MalformedValue"),
            Self::TruncatedStream => write!(f, "TruncatedStream"),
            Self::UnbalancedAccumulator => write!(f, "UnbalancedAccumulator"),
            Self::UnsupportedVersionFeature => write!(f, "UnsupportedVersionFeature"),
            Self::OrphanCoordinate => write!(f, "OrphanCoordinate"),
            Self::IncompleteRecord => write!(f, "IncompleteRecord"),
            Self::UnknownRecordType => write!(f, "UnknownRecordType"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// A single notification produced during decoding or encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// The category.
    pub notification_type: NotificationType,
    /// 1-based index of the pair that triggered it, when there is one.
    pub position: Option<usize>,
    /// A human-readable description of the issue.
    pub message: String,
}

impl Notification {
    /// Create a new notification without a position.
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            position: None,
            message: message.into(),
        }
    }

    /// Create a new notification attached to a pair position.
    pub fn at(notification_type: NotificationType, position: usize, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            position: Some(position),
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "[{}] pair {}: {}", self.notification_type, pos, self.message),
            None => write!(f, "[{}] {}", self.notification_type, self.message),
        }
    }
}

/// Collects notifications during a decode or encode session.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.items.push(Notification::new(notification_type, message));
    }

    /// Record a notification attached to a pair position.
    pub fn notify_at(
        &mut self,
        notification_type: NotificationType,
        position: usize,
        message: impl Into<String>,
    ) {
        self.items
            .push(Notification::at(notification_type, position, message));
    }

    /// Check if there are any notifications.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over all notifications.
    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }

    /// Number of notifications of a specific type.
    pub fn count_of(&self, nt: NotificationType) -> usize {
        self.items.iter().filter(|n| n.notification_type == nt).count()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Move all notifications of `other` into this collection.
    pub fn append(&mut self, other: &mut NotificationCollection) {
        self.items.append(&mut other.items);
    }

    /// Remove every notification.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Consume the collection into a `Vec`.
    pub fn into_vec(self) -> Vec<Notification> {
        self.items
    }
}

impl IntoIterator for NotificationCollection {
    type Item = Notification;
    type IntoIter = std::vec::IntoIter<Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::new(NotificationType::Warning, "handle missing");
        assert_eq!(n.notification_type, NotificationType::Warning);
        assert_eq!(n.message, "handle missing");
        assert_eq!(n.position, None);
    }

    #[test]
    fn test_collection_basics() {
        let mut c = NotificationCollection::new();
        assert!(c.is_empty());

        c.notify_at(NotificationType::UnknownGroupCode, 3, "code 999999");
        c.notify_at(NotificationType::MalformedValue, 8, "code 40");
        c.notify(NotificationType::TruncatedStream, "no EOF");
        c.notify_at(NotificationType::UnknownGroupCode, 11, "code 1200");

        assert_eq!(c.len(), 4);
        assert_eq!(c.count_of(NotificationType::UnknownGroupCode), 2);
        assert!(c.has_type(NotificationType::TruncatedStream));
        assert!(!c.has_type(NotificationType::UnbalancedAccumulator));
    }

    #[test]
    fn test_append() {
        let mut a = NotificationCollection::new();
        let mut b = NotificationCollection::new();
        a.notify(NotificationType::Warning, "a");
        b.notify(NotificationType::Warning, "b");
        a.append(&mut b);
        assert_eq!(a.len(), 2);
        assert!(b.is_empty());
    }

    #[test]
    fn test_display() {
        let n = Notification::at(NotificationType::OrphanCoordinate, 17, "code 20 without 10");
        assert_eq!(format!("{}", n), "[OrphanCoordinate] pair 17: code 20 without 10");
        let n = Notification::new(NotificationType::TruncatedStream, "missing EOF");
        assert_eq!(format!("{}", n), "[TruncatedStream] missing EOF");
    }
}
