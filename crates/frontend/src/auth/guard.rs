//! Guarded outlet for routed pages

use crate::auth::use_auth;
use crate::routes::{LoginQuery, Route};
use jobboard_core::NavigationDecision;
use jobboard_core::guard::{evaluate, full_path};
use tracing::{debug, warn};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuardedProps {
    pub route: Route,
    pub children: Children,
}

/// Renders its children only when the guard allows `route` for the current
/// session, otherwise redirects.
#[function_component(Guarded)]
pub fn guarded(props: &GuardedProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let location = use_location();

    let requested = location.map_or_else(
        || props.route.to_path(),
        |location| full_path(location.path(), location.query_str()),
    );
    let decision = evaluate(&props.route.requirements(), &auth.session, &requested);

    use_effect_with(decision.clone(), move |decision| {
        let Some(navigator) = navigator else { return };
        match decision {
            NavigationDecision::Allow => {}
            NavigationDecision::RedirectToLogin { redirect } => {
                debug!(redirect = %redirect, "Authentication required");
                let query = LoginQuery {
                    redirect: redirect.clone(),
                };
                if let Err(err) = navigator.replace_with_query(&Route::Login, &query) {
                    warn!(?err, "Failed to attach redirect to login route");
                    navigator.replace(&Route::Login);
                }
            }
        }
    });

    match decision {
        NavigationDecision::Allow => html! { <>{ props.children.clone() }</> },
        NavigationDecision::RedirectToLogin { .. } => html! {},
    }
}
