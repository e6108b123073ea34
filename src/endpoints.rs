// src/endpoints.rs

//! Every REST path the client talks to, relative to the configured API base.
//!
//! Paths that embed user input are built as full `Url`s so the input is
//! percent-encoded instead of being read as `/`, `?` or `&`.

use url::Url;

use crate::error::AppError;

// Auth
pub const LOGIN: &str = "auth/login";
pub const REGISTER: &str = "auth/register-no-validation";
pub const LOGOUT: &str = "auth/logout";

// Quiz
pub const QUIZ: &str = "quiz";
pub const QUIZ_ANSWER: &str = "quiz/reponse";
pub const QUIZ_RESULTS: &str = "quiz/resultats";
pub const QUIZ_DAILY: &str = "quiz/daily";
pub const QUIZ_CHECK: &str = "quiz/check";

// Content
pub const CONTENTS: &str = "contenus";
pub const CONTENT_CATEGORIES: &str = "contenus/categories";
pub const CALENDAR: &str = "calendrier";

// User
pub const USER_PROFILE: &str = "user/profile";
pub const USER_UPDATE: &str = "user/update";

// Sharing
pub const SHARE_QUIZ: &str = "quiz/submit";
pub const SHARE_TANTARA: &str = "tantara/submit";
pub const SHARE_OHABOLANA: &str = "ohabolana/submit";

pub fn contents_by_type(base: &Url, kind: &str) -> Result<Url, AppError> {
    let mut url = base.join(CONTENTS)?;
    url.query_pairs_mut().append_pair("type", kind);
    Ok(url)
}

pub fn content(id: i64) -> String {
    format!("{}/{}", CONTENTS, id)
}

pub fn daily_proverb() -> String {
    format!("{}?type=ohabolana&limit=1", CONTENTS)
}

pub fn user_points(base: &Url, username: &str) -> Result<Url, AppError> {
    with_segment(base, "user/points/", username)
}

pub fn user_submissions(base: &Url, username: &str) -> Result<Url, AppError> {
    with_segment(base, "contenus/utilisateur/", username)
}

/// `base/prefix/<segment>` with `segment` encoded as a single path segment.
fn with_segment(base: &Url, prefix: &str, segment: &str) -> Result<Url, AppError> {
    let mut url = base.join(prefix)?;
    url.path_segments_mut()
        .map_err(|_| AppError::Config(format!("'{}' cannot be used as a base URL", base)))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}
