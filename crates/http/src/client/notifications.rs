//! Notification endpoints

use super::{error::ClientError, typed::AuthenticatedJobBoardClient};
use crate::types::{MarkReadResponse, Notification, UnreadCount};
use reqwest::Method;

impl AuthenticatedJobBoardClient {
    /// Number of unread notifications
    pub async fn unread_count(&self) -> Result<UnreadCount, ClientError> {
        let request = self.request(Method::GET, "/notifications/unread_count/");
        self.execute(request).await
    }

    /// Most recent unread notifications
    pub async fn recent_notifications(&self) -> Result<Vec<Notification>, ClientError> {
        let request = self.request(Method::GET, "/notifications/recent/");
        self.execute(request).await
    }

    /// Every notification addressed to the current user
    pub async fn notifications(&self) -> Result<Vec<Notification>, ClientError> {
        let request = self.request(Method::GET, "/notifications/");
        self.execute(request).await
    }

    pub async fn mark_notification_read(&self, id: u64) -> Result<MarkReadResponse, ClientError> {
        let request = self
            .request(Method::POST, &format!("/notifications/{id}/mark_as_read/"))
            .json(&serde_json::json!({}));
        self.execute(request).await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<MarkReadResponse, ClientError> {
        let request = self
            .request(Method::POST, "/notifications/mark_all_as_read/")
            .json(&serde_json::json!({}));
        self.execute(request).await
    }
}
