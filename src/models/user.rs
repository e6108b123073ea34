// src/models/user.rs

use serde::{Deserialize, Serialize};

/// DTO for user login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response. The backend sometimes omits the username.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// DTO for creating a new account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub nom: String,
    pub prenom: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Splits the full name into `nom` (first word) and `prenom` (the rest)
    /// and derives the username from the local part of the email.
    pub fn from_signup(full_name: &str, email: &str, password: &str) -> Self {
        let mut parts = full_name.split_whitespace();
        let nom = parts.next().unwrap_or(full_name).to_string();
        let prenom = parts.collect::<Vec<_>>().join(" ");

        let username = match email.split_once('@') {
            Some((local, _)) => local.to_string(),
            None => email.to_string(),
        };

        Self {
            nom,
            prenom,
            username,
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PointsResponse {
    #[serde(default)]
    pub points: Option<i64>,
}

/// Profile of the logged-in user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub id: i64,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub nom_complet: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub points: Option<i64>,
    pub bio: Option<String>,
    pub region: Option<String>,
    pub langue_preferee: Option<String>,
}

/// Fields the user may change with `update-profile`. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub bio: Option<String>,
    pub region: Option<String>,
    pub language: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.bio.is_none() && self.region.is_none() && self.language.is_none()
    }
}

impl Profile {
    pub fn apply(&mut self, changes: &ProfileChanges) {
        if let Some(bio) = &changes.bio {
            self.bio = Some(bio.clone());
        }
        if let Some(region) = &changes.region {
            self.region = Some(region.clone());
        }
        if let Some(language) = &changes.language {
            self.langue_preferee = Some(language.clone());
        }
    }

    pub fn display_name(&self) -> String {
        if let Some(full) = self.nom_complet.as_deref().filter(|n| !n.is_empty()) {
            return full.to_string();
        }
        let joined = [self.nom.as_deref(), self.prenom.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            self.username.clone().unwrap_or_default()
        } else {
            joined
        }
    }
}

/// A contribution submitted by the user, as listed on the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    #[serde(default)]
    pub titre: String,
    #[serde(default)]
    pub contenu: String,
    /// `en_attente`, `approuve` or `rejete`.
    #[serde(default)]
    pub statut: String,
    #[serde(default)]
    pub date_creation: Option<String>,
    #[serde(default)]
    pub raison_rejet: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_from_signup() {
        let req = RegisterRequest::from_signup("  Rakoto Jean  Paul ", "rakoto@mail.mg", "secret");
        assert_eq!(req.nom, "Rakoto");
        assert_eq!(req.prenom, "Jean Paul");
        assert_eq!(req.username, "rakoto");
        assert_eq!(req.email, "rakoto@mail.mg");
    }

    #[test]
    fn test_register_request_single_name_and_plain_login() {
        let req = RegisterRequest::from_signup("Rabe", "rabe", "secret");
        assert_eq!(req.nom, "Rabe");
        assert_eq!(req.prenom, "");
        assert_eq!(req.username, "rabe");
    }

    #[test]
    fn test_profile_apply_changes_only_given_fields() {
        let mut p = Profile {
            bio: Some("Mpampianatra".into()),
            region: Some("Analamanga".into()),
            ..Default::default()
        };
        let changes = ProfileChanges { region: Some("Boeny".into()), ..Default::default() };
        assert!(!changes.is_empty());
        p.apply(&changes);
        assert_eq!(p.bio.as_deref(), Some("Mpampianatra"));
        assert_eq!(p.region.as_deref(), Some("Boeny"));
        assert_eq!(p.langue_preferee, None);
        assert!(ProfileChanges::default().is_empty());
    }

    #[test]
    fn test_profile_display_name() {
        let mut p = Profile { nom: Some("Rakoto".into()), prenom: Some("Be".into()), ..Default::default() };
        assert_eq!(p.display_name(), "Rakoto Be");
        p.nom_complet = Some("Rakoto Be Jean".into());
        assert_eq!(p.display_name(), "Rakoto Be Jean");

        let anonymous = Profile { username: Some("rabe".into()), ..Default::default() };
        assert_eq!(anonymous.display_name(), "rabe");
    }
}
