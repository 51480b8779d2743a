//! Authentication session lifecycle.
//!
//! [`AuthSessionManager`] is the only writer of the session, both in memory
//! and in persistent storage. It also owns the session context (the
//! authenticated HTTP client) that every authenticated call site borrows
//! through [`AuthSessionManager::session_client`].

use crate::error::{AuthFailure, LOGIN_FAILED, REGISTRATION_FAILED};
use jobboard_core::{
    AppConfig, PersistentSessionStore, Role, Session, SessionStorage, User, role_from_token,
};
use jobboard_http::types::{RegisterRequest, TokenRequest};
use jobboard_http::{AuthenticatedJobBoardClient, ClientError, PublicJobBoardClient};
use serde_json::Value;
use std::cell::RefCell;
use tracing::{debug, info, warn};

pub struct AuthSessionManager<S> {
    store: PersistentSessionStore<S>,
    public: PublicJobBoardClient,
    session: RefCell<Session>,
    context: RefCell<Option<AuthenticatedJobBoardClient>>,
}

impl<S: SessionStorage> AuthSessionManager<S> {
    /// Create a manager talking to the configured API.
    ///
    /// The token pair is read from `storage` immediately; the user is only
    /// restored by [`initialize`](Self::initialize).
    pub fn new(config: &AppConfig, storage: S) -> Result<Self, ClientError> {
        Ok(Self::with_client(
            PublicJobBoardClient::from_config(config)?,
            storage,
        ))
    }

    /// Create a manager around an existing public client
    pub fn with_client(public: PublicJobBoardClient, storage: S) -> Self {
        let store = PersistentSessionStore::new(storage);
        let session = store.load();
        debug!(
            authenticated = session.is_authenticated(),
            "Session loaded from storage"
        );

        Self {
            store,
            public,
            session: RefCell::new(session),
            context: RefCell::new(None),
        }
    }

    pub const fn store(&self) -> &PersistentSessionStore<S> {
        &self.store
    }

    /// Copy of the current session
    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_authenticated()
    }

    pub fn user_role(&self) -> Option<Role> {
        self.session.borrow().user_role()
    }

    pub fn is_candidate(&self) -> bool {
        self.session.borrow().is_candidate()
    }

    pub fn is_recruiter(&self) -> bool {
        self.session.borrow().is_recruiter()
    }

    pub fn is_admin(&self) -> bool {
        self.session.borrow().is_admin()
    }

    /// `Authorization` header value for the current token
    pub fn bearer_header(&self) -> Option<String> {
        self.session.borrow().bearer_header()
    }

    /// Authenticated client for the current token, if signed in
    pub fn session_client(&self) -> Option<AuthenticatedJobBoardClient> {
        self.context.borrow().clone()
    }

    /// Create an account and return the server's response body. The session
    /// is not touched.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Value, AuthFailure> {
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            role,
        };

        self.public.register(&request).await.map_err(|err| {
            warn!(error = %err, "Registration failed");
            AuthFailure::from_client(&err, REGISTRATION_FAILED)
        })
    }

    /// Exchange credentials for a token pair and establish the session.
    ///
    /// The token pair is persisted before the profile is requested. If the
    /// profile cannot be fetched the user's role is read from the access
    /// token and the login still succeeds. If the session is replaced or
    /// cleared while the profile is in flight, the login fails and the user is
    /// not written.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthFailure> {
        let request = TokenRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let pair = self.public.obtain_token(&request).await.map_err(|err| {
            warn!(error = %err, "Token request rejected");
            AuthFailure::from_client(&err, LOGIN_FAILED)
        })?;

        if let Err(err) = self.store.save_tokens(&pair.access, &pair.refresh) {
            warn!(error = %err, "Failed to persist token pair");
            return Err(AuthFailure::generic(LOGIN_FAILED));
        }

        let context = self.public.authenticate(pair.access.as_str());
        {
            let mut session = self.session.borrow_mut();
            session.token = Some(pair.access.clone());
            session.refresh_token = Some(pair.refresh);
        }
        *self.context.borrow_mut() = Some(context.clone());

        let profile = context.me().await;
        if self.session.borrow().token.as_deref() != Some(pair.access.as_str()) {
            warn!("Session changed while fetching profile, abandoning login");
            return Err(AuthFailure::generic(LOGIN_FAILED));
        }

        let user = match profile {
            Ok(profile) => {
                let user = User::from(profile);
                if let Err(err) = self.store.save_user(&user) {
                    warn!(error = %err, "Failed to persist user profile");
                }
                user
            }
            Err(err) => {
                warn!(error = %err, "Profile fetch failed, reading role from token");
                if let Err(err) = self.store.forget_user() {
                    warn!(error = %err, "Failed to remove stale user profile");
                }
                User {
                    id: None,
                    email: Some(email.to_string()),
                    role: role_from_token(&pair.access),
                }
            }
        };

        info!(role = %user.role, "Signed in");
        self.session.borrow_mut().user = Some(user);
        Ok(())
    }

    /// Drop the session locally. The server is not contacted.
    pub fn logout(&self) {
        *self.session.borrow_mut() = Session::default();
        self.context.borrow_mut().take();

        if let Err(err) = self.store.clear() {
            warn!(error = %err, "Failed to clear persisted session");
        }
        info!("Signed out");
    }

    /// Rehydrate the user for a token restored from storage.
    ///
    /// Safe to call repeatedly; without a token it does nothing.
    pub fn initialize(&self) {
        let Some(token) = self.session.borrow().token.clone() else {
            debug!("No persisted token, staying signed out");
            return;
        };

        *self.context.borrow_mut() = Some(self.public.authenticate(token.as_str()));

        let user = match self.store.stored_user() {
            Ok(Some(user)) => user,
            Ok(None) => User::from_role(role_from_token(&token)),
            Err(err) => {
                warn!(error = %err, "Persisted user unreadable, reading role from token");
                User::from_role(role_from_token(&token))
            }
        };

        debug!(role = %user.role, "Session restored");
        self.session.borrow_mut().user = Some(user);
    }
}
