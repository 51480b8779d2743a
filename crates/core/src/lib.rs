//! Job board client core types and utilities

pub mod claims;
pub mod config;
pub mod error;
pub mod guard;
pub mod session;
pub mod storage;
pub mod types;

pub use claims::role_from_token;
pub use config::AppConfig;
pub use error::{CoreError, CoreResult, StorageError};
pub use guard::{NavigationDecision, RouteRequirements};
pub use session::{PersistentSessionStore, Session};
pub use storage::{MemoryStorage, SessionStorage};
pub use types::{Role, User};
