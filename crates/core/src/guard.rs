//! Navigation guard.
//!
//! A pure decision over a route's declared requirements and the current
//! session, evaluated again on every navigation.

use crate::session::Session;

/// Query parameter carrying the originally requested path to the login route
pub const REDIRECT_PARAM: &str = "redirect";

/// What a route demands of the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteRequirements {
    pub requires_auth: bool,
}

impl RouteRequirements {
    pub const PUBLIC: Self = Self {
        requires_auth: false,
    };

    pub const AUTHENTICATED: Self = Self {
        requires_auth: true,
    };
}

/// Outcome of a single navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    /// Send the user to the login route, remembering where they were going
    RedirectToLogin { redirect: String },
}

/// Decide whether navigation to `full_path` may proceed.
///
/// Only authentication is checked; any signed-in user may open any route.
pub fn evaluate(
    requirements: &RouteRequirements,
    session: &Session,
    full_path: &str,
) -> NavigationDecision {
    if requirements.requires_auth && !session.is_authenticated() {
        return NavigationDecision::RedirectToLogin {
            redirect: full_path.to_string(),
        };
    }

    NavigationDecision::Allow
}

/// Join a router path and its query string into a full path.
///
/// `query` may be given with or without its leading `?`.
pub fn full_path(path: &str, query: &str) -> String {
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

/// Login location carrying `redirect` as a query parameter
pub fn login_location(login_path: &str, redirect: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(REDIRECT_PARAM, redirect)
        .finish();
    format!("{login_path}?{query}")
}

/// Destination carried by a login route's query string.
///
/// Only same-origin absolute paths are returned; anything else (missing,
/// empty, scheme-relative `//host` or a full URL) yields `None`.
pub fn redirect_target(query: &str) -> Option<String> {
    let query = query.trim_start_matches('?');
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == REDIRECT_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|target| target.starts_with('/') && !target.starts_with("//"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Role, User};

    fn signed_in(role: Role) -> Session {
        Session {
            token: Some("token".into()),
            refresh_token: Some("refresh".into()),
            user: Some(User::from_role(role)),
        }
    }

    #[test]
    fn test_public_routes_always_allowed() {
        let anonymous = Session::default();
        assert_eq!(
            evaluate(&RouteRequirements::PUBLIC, &anonymous, "/jobs"),
            NavigationDecision::Allow
        );
        assert_eq!(
            evaluate(&RouteRequirements::PUBLIC, &signed_in(Role::Admin), "/"),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn test_protected_route_redirects_with_full_path() {
        let decision = evaluate(
            &RouteRequirements::AUTHENTICATED,
            &Session::default(),
            "/dashboard?tab=applications",
        );
        assert_eq!(
            decision,
            NavigationDecision::RedirectToLogin {
                redirect: "/dashboard?tab=applications".into()
            }
        );
    }

    #[test]
    fn test_protected_route_allowed_for_every_role() {
        for role in Role::ALL {
            assert_eq!(
                evaluate(&RouteRequirements::AUTHENTICATED, &signed_in(role), "/profile"),
                NavigationDecision::Allow
            );
        }
    }

    #[test]
    fn test_token_without_user_is_authenticated() {
        let session = Session {
            token: Some("token".into()),
            ..Session::default()
        };
        assert_eq!(
            evaluate(&RouteRequirements::AUTHENTICATED, &session, "/profile"),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn test_role_does_not_restrict_protected_routes() {
        // Post-job is open to every signed-in role, not only recruiters
        for role in Role::ALL {
            assert_eq!(
                evaluate(&RouteRequirements::AUTHENTICATED, &signed_in(role), "/post-job"),
                NavigationDecision::Allow
            );
        }
        assert_eq!(
            evaluate(&RouteRequirements::AUTHENTICATED, &Session::default(), "/post-job"),
            NavigationDecision::RedirectToLogin {
                redirect: "/post-job".into()
            }
        );
    }

    #[test]
    fn test_full_path() {
        assert_eq!(full_path("/jobs", ""), "/jobs");
        assert_eq!(full_path("/jobs", "?"), "/jobs");
        assert_eq!(full_path("/jobs", "?q=rust"), "/jobs?q=rust");
        assert_eq!(full_path("/jobs", "q=rust&page=2"), "/jobs?q=rust&page=2");
    }

    #[test]
    fn test_login_location_encodes_redirect() {
        assert_eq!(
            login_location("/login", "/dashboard?tab=a&x=1"),
            "/login?redirect=%2Fdashboard%3Ftab%3Da%26x%3D1"
        );
        assert_eq!(login_location("/login", "/"), "/login?redirect=%2F");
    }

    #[test]
    fn test_redirect_target_reverses_login_location() {
        let location = login_location("/login", "/dashboard?tab=a&x=1");
        let (_, query) = location.split_once('?').unwrap();
        assert_eq!(
            redirect_target(query).as_deref(),
            Some("/dashboard?tab=a&x=1")
        );
        assert_eq!(
            redirect_target("?other=1&redirect=%2Fprofile").as_deref(),
            Some("/profile")
        );
    }

    #[test]
    fn test_redirect_target_rejects_foreign_destinations() {
        assert_eq!(redirect_target(""), None);
        assert_eq!(redirect_target("redirect="), None);
        assert_eq!(redirect_target("redirect=%2F%2Fevil.example"), None);
        assert_eq!(redirect_target("redirect=https%3A%2F%2Fevil.example"), None);
        assert_eq!(redirect_target("next=%2Fdashboard"), None);
    }
}
