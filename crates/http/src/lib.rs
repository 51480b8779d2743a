//! HTTP access to the job board REST API.
//!
//! Public endpoints (registration, token issuance) go through
//! [`PublicJobBoardClient`]; everything else needs an
//! [`AuthenticatedJobBoardClient`], which can only be obtained by attaching a
//! bearer token.

pub mod client;
pub mod types;

pub use client::{
    AuthenticatedJobBoardClient, ClientError, PublicJobBoardClient, TypedClientBuilder,
};
