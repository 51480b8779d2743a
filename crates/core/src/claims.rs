//! Best-effort claim extraction from bearer tokens.
//!
//! Nothing here verifies a signature or an expiry. The extracted role is a
//! display hint used when the profile endpoint is unreachable; the server
//! remains the only authority on what a token grants.

use crate::types::Role;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Deserialize;

#[derive(Deserialize)]
struct RoleClaim {
    #[serde(default)]
    role: Option<String>,
}

/// Role named in the token payload, if one can be read
pub fn try_role_from_token(token: &str) -> Option<Role> {
    let segment = token.split('.').nth(1)?;

    // Accept both alphabets, with or without padding
    let normalized: String = segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let payload = URL_SAFE_NO_PAD.decode(normalized).ok()?;

    let claim: RoleClaim = serde_json::from_slice(&payload).ok()?;
    claim.role?.parse().ok()
}

/// Role named in the token payload, defaulting to [`Role::Candidate`]
pub fn role_from_token(token: &str) -> Role {
    try_role_from_token(token).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    fn token_with_payload(payload: &str) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_reads_role_claim() {
        let token = token_with_payload(r#"{"user_id":3,"role":"recruiter"}"#);
        assert_eq!(role_from_token(&token), Role::Recruiter);

        let token = token_with_payload(r#"{"role":"admin","exp":1700000000}"#);
        assert_eq!(try_role_from_token(&token), Some(Role::Admin));
    }

    #[test]
    fn test_accepts_padded_standard_alphabet() {
        // Encodes with a '/' and two padding characters
        let payload = r#"{"role":"admin","note":"?>?>x"}"#;
        let encoded = STANDARD.encode(payload);
        assert!(encoded.contains('/') && encoded.ends_with("=="));
        let token = format!("h.{encoded}.s");
        assert_eq!(role_from_token(&token), Role::Admin);
    }

    #[test]
    fn test_missing_or_unknown_role_defaults_to_candidate() {
        let token = token_with_payload(r#"{"user_id":3}"#);
        assert_eq!(try_role_from_token(&token), None);
        assert_eq!(role_from_token(&token), Role::Candidate);

        let token = token_with_payload(r#"{"role":"owner"}"#);
        assert_eq!(role_from_token(&token), Role::Candidate);

        let token = token_with_payload(r#"{"role":42}"#);
        assert_eq!(role_from_token(&token), Role::Candidate);
    }

    #[test]
    fn test_garbage_never_fails() {
        let inputs = [
            "",
            ".",
            "..",
            "not-a-jwt",
            "a.%%%.c",
            "a.bm90IGpzb24.c",
            "a.W10.c",
            "a.bnVsbA.c",
            "ü.ü.ü",
            "a.\u{0}.b",
        ];
        for input in inputs {
            assert_eq!(role_from_token(input), Role::Candidate, "input {input:?}");
        }
    }

    #[test]
    fn test_two_segment_token_is_still_read() {
        let token = format!("h.{}", URL_SAFE_NO_PAD.encode(r#"{"role":"recruiter"}"#));
        assert_eq!(role_from_token(&token), Role::Recruiter);
    }
}
