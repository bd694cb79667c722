//! Notification center backing the header bell and its popup
//!
//! Holds the seeded notification list and the popup visibility flag. The
//! bell shows an unread badge exactly while the list is non-empty.

use crate::types::Notification;
use chrono::Local;
use tracing::debug;

/// Notification list state
#[derive(Debug)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
    visible: bool,
    next_id: u32,
}

impl NotificationCenter {
    /// Create a center seeded with the given entries, popup hidden
    pub fn new(entries: Vec<Notification>) -> Self {
        let next_id = entries.iter().map(|n| n.id).max().map_or(1, |id| id + 1);
        Self {
            entries,
            visible: false,
            next_id,
        }
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unread indicator: set exactly while entries remain
    pub fn has_unread(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Whether the popup is open
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip the popup open/closed; independent of list contents
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Empty the list unconditionally
    pub fn clear_all(&mut self) {
        debug!(count = self.entries.len(), "clearing all notifications");
        self.entries.clear();
    }

    /// Remove the entry with the matching id; no-op if absent
    pub fn remove(&mut self, id: u32) {
        self.entries.retain(|n| n.id != id);
    }

    /// Append a new entry stamped with the current wall-clock time
    ///
    /// Creation hook for future event sources; the dashboard itself never
    /// calls this at runtime.
    pub fn push(&mut self, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        let timestamp = Local::now().format("%H:%M").to_string();
        self.entries.push(Notification::new(id, message, timestamp));
        id
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> NotificationCenter {
        NotificationCenter::new(vec![
            Notification::new(1, "New order received!", "2 mins ago"),
            Notification::new(2, "Product review pending approval.", "1 hour ago"),
            Notification::new(3, "Low stock alert: Update inventory.", "3 hours ago"),
        ])
    }

    #[test]
    fn test_remove_leaves_other_entries() {
        let mut center = seeded();
        center.remove(2);

        let ids: Vec<u32> = center.entries().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut center = seeded();
        center.remove(42);
        assert_eq!(center.len(), 3);
    }

    #[test]
    fn test_clear_all_drops_unread_indicator() {
        let mut center = seeded();
        assert!(center.has_unread());

        center.clear_all();
        assert_eq!(center.len(), 0);
        assert!(!center.has_unread());
    }

    #[test]
    fn test_visibility_independent_of_contents() {
        let mut center = seeded();
        assert!(!center.is_visible());

        center.toggle_visibility();
        assert!(center.is_visible());

        center.clear_all();
        assert!(center.is_visible());

        center.toggle_visibility();
        assert!(!center.is_visible());
    }

    #[test]
    fn test_push_assigns_fresh_ids() {
        let mut center = seeded();
        let id = center.push("Payout processed.");
        assert_eq!(id, 4);
        assert_eq!(center.len(), 4);
        assert!(center.has_unread());

        let id = center.push("Another one.");
        assert_eq!(id, 5);
    }

    #[test]
    fn test_push_onto_empty_center() {
        let mut center = NotificationCenter::default();
        assert!(!center.has_unread());

        let id = center.push("First!");
        assert_eq!(id, 1);
        assert!(center.has_unread());
    }
}
