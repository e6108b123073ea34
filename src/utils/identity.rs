// src/utils/identity.rs

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Label used for result attribution when nobody is logged in.
pub const ANONYMOUS_LABEL: &str = "Anonyme";

/// Who is using the client. Persisted between runs by `IdentityStore`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub username: Option<String>,
    pub auth_token: Option<String>,
    pub saved_at: Option<DateTime<Utc>>,
}

impl Identity {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn logged_in(username: &str, token: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            auth_token: Some(token.to_string()),
            saved_at: Some(Utc::now()),
        }
    }

    /// The pseudo sent with quiz results.
    pub fn label(&self) -> &str {
        self.username
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(ANONYMOUS_LABEL)
    }

    pub fn is_logged_in(&self) -> bool {
        self.auth_token.as_deref().is_some_and(|t| !t.is_empty()) && self.username.is_some()
    }

    /// The username, or an `AuthError` for operations that need an account.
    pub fn require_username(&self) -> Result<&str, AppError> {
        self.username
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| AppError::AuthError("you must be logged in".to_string()))
    }
}

/// JSON file standing in for the browser's local storage.
#[derive(Debug, Clone)]
pub struct IdentityStore {
    path: PathBuf,
}

impl IdentityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means anonymous.
    pub fn load(&self) -> Result<Identity, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Identity::anonymous()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, identity: &Identity) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(identity)?;
        fs::write(&self.path, raw)?;
        tracing::debug!("Identity saved to {}", self.path.display());
        Ok(())
    }

    pub fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> IdentityStore {
        let dir = std::env::temp_dir().join(format!("etantara-identity-{}", uuid::Uuid::new_v4()));
        IdentityStore::new(dir.join("nested").join("identity.json"))
    }

    #[test]
    fn test_label_falls_back_to_anonymous() {
        assert_eq!(Identity::anonymous().label(), "Anonyme");
        let blank = Identity { username: Some("  ".into()), ..Default::default() };
        assert_eq!(blank.label(), "Anonyme");
        assert_eq!(Identity::logged_in("rabe", "tok").label(), "rabe");
    }

    #[test]
    fn test_require_username() {
        assert!(matches!(
            Identity::anonymous().require_username(),
            Err(AppError::AuthError(_))
        ));
        assert_eq!(Identity::logged_in("rabe", "tok").require_username().unwrap(), "rabe");
    }

    #[test]
    fn test_store_round_trip_and_clear() {
        let store = temp_store();
        assert_eq!(store.load().unwrap(), Identity::anonymous());

        let identity = Identity::logged_in("rakoto", "abc.def");
        store.save(&identity).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.username.as_deref(), Some("rakoto"));
        assert!(loaded.is_logged_in());

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), Identity::anonymous());
        // Clearing twice is fine.
        store.clear().unwrap();
    }
}
