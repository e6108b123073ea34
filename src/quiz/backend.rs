// src/quiz/backend.rs

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{question::RawQuestion, quiz::QuizResultRequest},
};

/// Remote side of a quiz session.
///
/// `ApiClient` is the production implementation; tests plug in fakes.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    /// `GET /quiz`.
    async fn fetch_questions(&self) -> Result<Vec<RawQuestion>, AppError>;

    /// `POST /quiz/reponse`. `Ok(correct)` only for a 2xx answer.
    async fn check_answer(&self, question_id: i64, answer: &str) -> Result<bool, AppError>;

    /// `POST /quiz/resultats`.
    async fn save_result(&self, result: &QuizResultRequest) -> Result<(), AppError>;
}
