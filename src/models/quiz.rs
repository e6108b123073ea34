// src/models/quiz.rs

use serde::{Deserialize, Serialize};

/// Body of `POST /quiz/reponse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerCheckRequest {
    pub question_id: i64,
    pub reponse: String,
}

/// Response of the answer check endpoints.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnswerCheckResponse {
    #[serde(default)]
    pub correct: bool,
}

/// Body of `POST /quiz/check` used by the daily quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCheckRequest {
    pub question_id: i64,
    pub answer: String,
}

/// Body of `POST /quiz/resultats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResultRequest {
    /// Display name of the player, `Anonyme` when nobody is logged in.
    pub pseudo: String,
    pub score: u32,
    pub total: u32,
}

/// Outcome of answering the daily question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAnswerResult {
    pub correct: bool,
    pub message: Option<String>,
    /// Set when the backend refused because the user already played today.
    pub already_participated: bool,
    pub correct_answer: Option<String>,
}
