//! Authentication module

pub mod context;
pub mod guard;

pub use context::{AuthAction, AuthProvider, SessionHandle, use_auth};
pub use guard::Guarded;
