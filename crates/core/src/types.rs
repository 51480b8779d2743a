//! Shared account types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account role. The set is closed; anything else is rejected on decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Candidate,
    Recruiter,
    Admin,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Candidate, Self::Recruiter, Self::Admin];

    /// Wire name of the role
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Recruiter => "recruiter",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// The signed-in user as the client knows it.
///
/// `id` and `email` are absent when the user was reconstructed from the
/// token alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}

impl User {
    /// A user known only by role
    pub const fn from_role(role: Role) -> Self {
        Self {
            id: None,
            email: None,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
            assert_eq!(
                serde_json::to_string(&role).unwrap(),
                format!("\"{}\"", role.as_str())
            );
        }
        assert!("Recruiter".parse::<Role>().is_err());
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    }

    #[test]
    fn test_user_serialization_omits_missing_fields() {
        let user = User::from_role(Role::Admin);
        assert_eq!(serde_json::to_string(&user).unwrap(), r#"{"role":"admin"}"#);

        let user: User =
            serde_json::from_str(r#"{"id":7,"email":"a@b.com","role":"recruiter"}"#).unwrap();
        assert_eq!(user.id, Some(7));
        assert_eq!(user.email.as_deref(), Some("a@b.com"));
        assert_eq!(user.role, Role::Recruiter);
    }
}
