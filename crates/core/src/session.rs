//! Session snapshot and its persisted form

use crate::error::StorageError;
use crate::storage::SessionStorage;
use crate::types::{Role, User};
use tracing::warn;

/// Storage keys owned by the session store
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const REFRESH_TOKEN: &str = "refreshToken";
    pub const USER: &str = "user";

    pub const ALL: [&str; 3] = [TOKEN, REFRESH_TOKEN, USER];
}

/// Authentication state of the running application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    /// A bearer token is held. Its validity is only known to the server.
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user_role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.user_role() == Some(role)
    }

    pub fn is_candidate(&self) -> bool {
        self.has_role(Role::Candidate)
    }

    pub fn is_recruiter(&self) -> bool {
        self.has_role(Role::Recruiter)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// `Authorization` header value for the held token
    pub fn bearer_header(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }
}

/// Typed accessor over the auth keys of a [`SessionStorage`].
///
/// This is the only code that reads or writes those keys.
#[derive(Debug, Clone)]
pub struct PersistentSessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> PersistentSessionStore<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Session as persisted. The user is not restored here.
    pub fn load(&self) -> Session {
        Session {
            token: self.read_or_log(keys::TOKEN),
            refresh_token: self.read_or_log(keys::REFRESH_TOKEN),
            user: None,
        }
    }

    /// Persist a token pair.
    ///
    /// If the second write fails the previous access token is put back, so
    /// the stored pair never mixes two logins.
    pub fn save_tokens(&self, access: &str, refresh: &str) -> Result<(), StorageError> {
        let previous = self.storage.get(keys::TOKEN)?;
        self.storage.set(keys::TOKEN, access)?;

        if let Err(err) = self.storage.set(keys::REFRESH_TOKEN, refresh) {
            let restored = match previous {
                Some(token) => self.storage.set(keys::TOKEN, &token),
                None => self.storage.remove(keys::TOKEN),
            };
            if let Err(restore_err) = restored {
                warn!(error = %restore_err, "Failed to restore previous token");
            }
            return Err(err);
        }

        Ok(())
    }

    /// Persisted user, if any. Unparsable JSON is reported as
    /// [`StorageError::Malformed`].
    pub fn stored_user(&self) -> Result<Option<User>, StorageError> {
        self.storage
            .get(keys::USER)?
            .map(|raw| {
                serde_json::from_str(&raw)
                    .map_err(|e| StorageError::malformed(keys::USER, e.to_string()))
            })
            .transpose()
    }

    pub fn save_user(&self, user: &User) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(user)
            .map_err(|e| StorageError::malformed(keys::USER, e.to_string()))?;
        self.storage.set(keys::USER, &serialized)
    }

    pub fn forget_user(&self) -> Result<(), StorageError> {
        self.storage.remove(keys::USER)
    }

    /// Remove every auth key. All removals are attempted; the first failure
    /// is returned.
    pub fn clear(&self) -> Result<(), StorageError> {
        keys::ALL
            .into_iter()
            .map(|key| self.storage.remove(key))
            .fold(Ok(()), |acc, result| acc.and(result))
    }

    fn read_or_log(&self, key: &str) -> Option<String> {
        self.storage.get(key).unwrap_or_else(|err| {
            warn!(key, error = %err, "Failed to read persisted session value");
            None
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::storage::mock::MockSessionStorage;
    use mockall::predicate::eq;

    #[test]
    fn test_derived_queries() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.user_role(), None);
        assert!(!session.is_candidate());
        assert_eq!(session.bearer_header(), None);

        session.token = Some("abc".into());
        session.user = Some(User::from_role(Role::Recruiter));
        assert!(session.is_authenticated());
        assert!(session.is_recruiter());
        assert!(!session.is_admin());
        assert!(!session.is_candidate());
        assert_eq!(session.bearer_header().as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn test_load_reads_tokens_only() {
        let storage = MemoryStorage::with_entries([
            (keys::TOKEN, "access"),
            (keys::REFRESH_TOKEN, "refresh"),
            (keys::USER, r#"{"role":"admin"}"#),
        ]);
        let session = PersistentSessionStore::new(storage).load();
        assert_eq!(session.token.as_deref(), Some("access"));
        assert_eq!(session.refresh_token.as_deref(), Some("refresh"));
        assert_eq!(session.user, None);
    }

    #[test]
    fn test_user_roundtrip_and_malformed() {
        let storage = MemoryStorage::new();
        let store = PersistentSessionStore::new(storage.clone());
        assert_eq!(store.stored_user().unwrap(), None);

        let user = User {
            id: Some(4),
            email: Some("a@b.com".into()),
            role: Role::Candidate,
        };
        store.save_user(&user).unwrap();
        assert_eq!(store.stored_user().unwrap(), Some(user));

        storage.set(keys::USER, "{not json").unwrap();
        assert!(matches!(
            store.stored_user(),
            Err(StorageError::Malformed { .. })
        ));
    }

    #[test]
    fn test_clear_removes_all_keys() {
        let storage = MemoryStorage::with_entries([
            (keys::TOKEN, "a"),
            (keys::REFRESH_TOKEN, "r"),
            (keys::USER, "{}"),
            ("theme", "dark"),
        ]);
        let store = PersistentSessionStore::new(storage.clone());
        store.clear().unwrap();
        assert_eq!(storage.len(), 1);
        assert!(storage.contains_key("theme"));
    }

    #[test]
    fn test_clear_attempts_every_key_despite_failures() {
        let mut storage = MockSessionStorage::new();
        storage
            .expect_remove()
            .with(eq(keys::TOKEN))
            .times(1)
            .returning(|_| Err(StorageError::Unavailable("gone".into())));
        storage
            .expect_remove()
            .with(eq(keys::REFRESH_TOKEN))
            .times(1)
            .returning(|_| Ok(()));
        storage
            .expect_remove()
            .with(eq(keys::USER))
            .times(1)
            .returning(|_| Ok(()));

        let store = PersistentSessionStore::new(storage);
        assert_eq!(
            store.clear(),
            Err(StorageError::Unavailable("gone".into()))
        );
    }

    #[test]
    fn test_save_tokens_restores_previous_token_on_failure() {
        let mut storage = MockSessionStorage::new();
        storage
            .expect_get()
            .with(eq(keys::TOKEN))
            .returning(|_| Ok(Some("old".into())));
        storage
            .expect_set()
            .with(eq(keys::TOKEN), eq("new"))
            .times(1)
            .returning(|_, _| Ok(()));
        storage
            .expect_set()
            .with(eq(keys::REFRESH_TOKEN), eq("refresh"))
            .times(1)
            .returning(|key, _| Err(StorageError::write_rejected(key, "quota")));
        storage
            .expect_set()
            .with(eq(keys::TOKEN), eq("old"))
            .times(1)
            .returning(|_, _| Ok(()));

        let store = PersistentSessionStore::new(storage);
        assert!(matches!(
            store.save_tokens("new", "refresh"),
            Err(StorageError::WriteRejected { .. })
        ));
    }
}
