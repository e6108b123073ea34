// src/models/contribution.rs

use serde::{Deserialize, Serialize};

/// A quiz question proposed by a user (`POST /quiz/submit`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareQuizRequest {
    pub username: String,
    pub question: String,
    pub correct_answer: String,
    #[serde(rename = "optionA")]
    pub option_a: String,
    #[serde(rename = "optionB")]
    pub option_b: String,
    #[serde(rename = "optionC")]
    pub option_c: String,
    #[serde(rename = "optionD")]
    pub option_d: String,
}

/// A story (`POST /tantara/submit`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareTantaraRequest {
    pub username: String,
    pub title: String,
    pub content: String,
}

/// A proverb and its meaning (`POST /ohabolana/submit`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShareOhabolanaRequest {
    pub username: String,
    pub expression: String,
    pub meaning: String,
}
