//! Session lifecycle and notification state for the job board client

pub mod error;
pub mod manager;
pub mod notifications;

pub use error::AuthFailure;
pub use manager::AuthSessionManager;
pub use notifications::NotificationStore;
