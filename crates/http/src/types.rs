//! Request and response bodies of the job board REST API

use chrono::{DateTime, Utc};
use jobboard_core::{Role, User};
use serde::{Deserialize, Serialize};

/// Body of `POST /accounts/register/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body of `POST /token/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequest {
    pub email: String,
    pub password: String,
}

/// Token pair issued by `POST /token/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Authenticated profile from `GET /accounts/me/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub email: String,
    pub role: Role,
}

impl From<Profile> for User {
    fn from(profile: Profile) -> Self {
        Self {
            id: Some(profile.id),
            email: Some(profile.email),
            role: profile.role,
        }
    }
}

/// Body of `GET /notifications/unread_count/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: u64,
}

/// Kind of event a notification reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    ApplicationSubmitted,
    ApplicationStatusChanged,
    NewApplication,
    JobMatch,
    ResumeViewed,
    InterviewScheduled,
    InterviewCancelled,
    InterviewRescheduled,
    JobExpiring,
    System,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    #[serde(rename = "notification_type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub link: Option<String>,
    pub is_read: bool,
    #[serde(default)]
    pub is_emailed: bool,
    #[serde(default)]
    pub job_id: Option<u64>,
    #[serde(default)]
    pub application_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement returned by the mark-as-read endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkReadResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// Number of notifications changed; only sent by `mark_all_as_read`
    #[serde(default)]
    pub count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_notification_decoding() {
        let notification: Notification = serde_json::from_value(json!({
            "id": 12,
            "notification_type": "interview_scheduled",
            "title": "Interview scheduled",
            "message": "Your interview is on Monday",
            "link": "/interviews",
            "is_read": false,
            "is_emailed": true,
            "job_id": 3,
            "application_id": null,
            "created_at": "2024-05-01T09:30:00.123456Z"
        }))
        .unwrap();

        assert_eq!(notification.kind, NotificationKind::InterviewScheduled);
        assert_eq!(notification.link.as_deref(), Some("/interviews"));
        assert_eq!(notification.job_id, Some(3));
        assert_eq!(notification.application_id, None);
    }

    #[test]
    fn test_unknown_notification_kind() {
        let kind: NotificationKind = serde_json::from_value(json!("offer_extended")).unwrap();
        assert_eq!(kind, NotificationKind::Other);
    }

    #[test]
    fn test_profile_into_user() {
        let user = User::from(Profile {
            id: 9,
            email: "r@x.io".into(),
            role: Role::Recruiter,
        });
        assert_eq!(user.id, Some(9));
        assert_eq!(user.role, Role::Recruiter);
    }
}
