//! Authentication context shared with every component

use crate::storage::BrowserStorage;
use jobboard_core::Session;
use jobboard_session::AuthSessionManager;
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// Shared handle to the application's single session manager
#[derive(Clone)]
pub struct SessionHandle(Rc<AuthSessionManager<BrowserStorage>>);

impl SessionHandle {
    pub fn new(manager: AuthSessionManager<BrowserStorage>) -> Self {
        Self(Rc::new(manager))
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SessionHandle {
    type Target = AuthSessionManager<BrowserStorage>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Render-side view of the session.
///
/// `session` is a snapshot taken from the manager after every action, so
/// components re-render whenever the manager's state changes.
#[derive(Clone, PartialEq)]
pub struct AuthContextData {
    pub session: Session,
    pub manager: SessionHandle,
}

pub enum AuthAction {
    /// Re-read the manager after it changed the session (login)
    Sync,
    Logout,
}

pub type AuthContext = UseReducerHandle<AuthContextData>;

impl AuthContextData {
    fn new(manager: SessionHandle) -> Self {
        Self {
            session: manager.snapshot(),
            manager,
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Sync => {}
            AuthAction::Logout => self.manager.logout(),
        }

        let session = self.manager.snapshot();
        if session == self.session {
            self
        } else {
            Rc::new(Self {
                session,
                manager: self.manager.clone(),
            })
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub manager: SessionHandle,
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let manager = props.manager.clone();
    let auth = use_reducer(move || AuthContextData::new(manager));

    html! {
        <ContextProvider<AuthContext> context={auth}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}
