use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::{Notification, NotificationKind};

/// Transient interface flags. Purely visibility state; the only coupling
/// is that the quick-view target and its open flag are one field, so they
/// cannot disagree.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub cart_open: bool,
    pub menu_open: bool,
    pub search_open: bool,
    quick_view: Option<u32>,
    notifications: Vec<Notification>,
}

impl UiState {
    pub fn new() -> Self {
        UiState::default()
    }

    pub fn toggle_cart(&mut self) {
        self.cart_open = !self.cart_open;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_search(&mut self) {
        self.search_open = !self.search_open;
    }

    pub fn open_quick_view(&mut self, product_id: u32) {
        self.quick_view = Some(product_id);
    }

    pub fn close_quick_view(&mut self) {
        self.quick_view = None;
    }

    pub fn quick_view_target(&self) -> Option<u32> {
        self.quick_view
    }

    pub fn is_quick_view_open(&self) -> bool {
        self.quick_view.is_some()
    }

    pub fn push_notification(&mut self, kind: NotificationKind, message: impl Into<String>) -> Uuid {
        let notification = Notification::new(kind, message);
        let id = notification.id;
        self.notifications.push(notification);
        id
    }

    pub fn dismiss_notification(&mut self, id: Uuid) {
        self.notifications.retain(|n| n.id != id);
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drops every notification older than `ttl` as of `now`. The driver
    /// runs this off a timer tick; a dismissal beforehand wins.
    pub fn expire_notifications(&mut self, now: DateTime<Utc>, ttl: Duration) {
        self.notifications.retain(|n| now - n.created_at < ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_flip_independently() {
        let mut ui = UiState::new();

        ui.toggle_cart();
        ui.toggle_search();
        assert!(ui.cart_open);
        assert!(ui.search_open);
        assert!(!ui.menu_open);

        ui.toggle_cart();
        assert!(!ui.cart_open);
        assert!(ui.search_open);
    }

    #[test]
    fn test_quick_view_target_and_open_flag_agree() {
        let mut ui = UiState::new();
        assert!(!ui.is_quick_view_open());
        assert_eq!(ui.quick_view_target(), None);

        ui.open_quick_view(42);
        assert!(ui.is_quick_view_open());
        assert_eq!(ui.quick_view_target(), Some(42));

        ui.close_quick_view();
        assert!(!ui.is_quick_view_open());
        assert_eq!(ui.quick_view_target(), None);
    }

    #[test]
    fn test_dismiss_removes_only_the_target() {
        let mut ui = UiState::new();
        let first = ui.push_notification(NotificationKind::Success, "Added to cart");
        let second = ui.push_notification(NotificationKind::Info, "Cart updated");

        ui.dismiss_notification(first);

        assert_eq!(ui.notifications().len(), 1);
        assert_eq!(ui.notifications()[0].id, second);
    }

    #[test]
    fn test_expiry_removes_only_stale_notifications() {
        let mut ui = UiState::new();
        ui.push_notification(NotificationKind::Success, "old");
        let created = ui.notifications()[0].created_at;

        let ttl = Duration::seconds(5);
        ui.expire_notifications(created + Duration::seconds(4), ttl);
        assert_eq!(ui.notifications().len(), 1);

        ui.expire_notifications(created + Duration::seconds(6), ttl);
        assert!(ui.notifications().is_empty());
    }
}
