//! Job board HTTP client

pub mod accounts;
pub mod error;
pub mod notifications;
pub mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedJobBoardClient, PublicJobBoardClient, TypedClientBuilder};
