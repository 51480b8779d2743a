//! Route table

use jobboard_core::RouteRequirements;
use serde::Serialize;
use tracing::warn;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/jobs")]
    Jobs,
    #[at("/jobs/:id")]
    JobDetails { id: u64 },
    #[at("/dashboard")]
    Dashboard,
    #[at("/ai-assistant")]
    AiAssistant,
    #[at("/profile")]
    Profile,
    #[at("/post-job")]
    PostJob,
    #[at("/saved-jobs")]
    SavedJobs,
    #[at("/interviews")]
    Interviews,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub const fn requirements(&self) -> RouteRequirements {
        match self {
            Self::Dashboard
            | Self::AiAssistant
            | Self::Profile
            | Self::SavedJobs
            | Self::Interviews
            | Self::PostJob => RouteRequirements::AUTHENTICATED,
            Self::Home
            | Self::Login
            | Self::Register
            | Self::Jobs
            | Self::JobDetails { .. }
            | Self::NotFound => RouteRequirements::PUBLIC,
        }
    }
}

/// Query of the login route when reached through the guard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginQuery {
    pub redirect: String,
}

/// Replace the current entry with `target`, a full path such as
/// `/dashboard?tab=applications`
pub fn replace_with_path(navigator: &Navigator, target: &str) {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let route = Route::recognize(path).unwrap_or(Route::NotFound);

    if query.is_empty() {
        navigator.replace(&route);
        return;
    }

    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    if let Err(err) = navigator.replace_with_query(&route, &pairs) {
        warn!(?err, target, "Failed to restore query, navigating without it");
        navigator.replace(&route);
    }
}
