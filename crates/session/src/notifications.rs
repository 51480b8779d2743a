//! Notification state backed by the notification endpoints.
//!
//! Every operation takes the session context explicitly and does nothing
//! without one. Failures are logged and leave the state untouched.

use jobboard_http::AuthenticatedJobBoardClient;
use jobboard_http::types::Notification;
use std::cell::{Cell, RefCell};
use tracing::error;

#[derive(Debug, Default)]
pub struct NotificationStore {
    notifications: RefCell<Vec<Notification>>,
    unread_count: Cell<u64>,
    loading: Cell<bool>,
}

/// Clears the loading flag when a fetch finishes, however it finishes
struct Loading<'a>(&'a Cell<bool>);

impl<'a> Loading<'a> {
    fn start(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }

    pub fn unread_count(&self) -> u64 {
        self.unread_count.get()
    }

    pub fn has_unread(&self) -> bool {
        self.unread_count.get() > 0
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub async fn fetch_unread_count(&self, session: Option<&AuthenticatedJobBoardClient>) {
        let Some(client) = session else { return };

        match client.unread_count().await {
            Ok(unread) => self.unread_count.set(unread.count),
            Err(err) => error!(error = %err, "Error fetching unread count"),
        }
    }

    pub async fn fetch_recent(&self, session: Option<&AuthenticatedJobBoardClient>) {
        let Some(client) = session else { return };
        let _loading = Loading::start(&self.loading);

        match client.recent_notifications().await {
            Ok(recent) => *self.notifications.borrow_mut() = recent,
            Err(err) => error!(error = %err, "Error fetching notifications"),
        }
    }

    /// Replace the list with every notification and return it; empty on failure
    pub async fn fetch_all(&self, session: Option<&AuthenticatedJobBoardClient>) -> Vec<Notification> {
        let Some(client) = session else {
            return Vec::new();
        };
        let _loading = Loading::start(&self.loading);

        match client.notifications().await {
            Ok(all) => {
                self.notifications.borrow_mut().clone_from(&all);
                all
            }
            Err(err) => {
                error!(error = %err, "Error fetching all notifications");
                Vec::new()
            }
        }
    }

    /// Mark one notification read; the count only drops if it was unread here
    pub async fn mark_as_read(&self, session: Option<&AuthenticatedJobBoardClient>, id: u64) {
        let Some(client) = session else { return };

        if let Err(err) = client.mark_notification_read(id).await {
            error!(error = %err, id, "Error marking notification as read");
            return;
        }

        let mut notifications = self.notifications.borrow_mut();
        if let Some(notification) = notifications.iter_mut().find(|n| n.id == id) {
            if !notification.is_read {
                notification.is_read = true;
                self.unread_count
                    .set(self.unread_count.get().saturating_sub(1));
            }
        }
    }

    pub async fn mark_all_as_read(&self, session: Option<&AuthenticatedJobBoardClient>) {
        let Some(client) = session else { return };

        if let Err(err) = client.mark_all_notifications_read().await {
            error!(error = %err, "Error marking all as read");
            return;
        }

        for notification in self.notifications.borrow_mut().iter_mut() {
            notification.is_read = true;
        }
        self.unread_count.set(0);
    }
}
