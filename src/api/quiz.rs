// src/api/quiz.rs

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde_json::{Value, json};

use crate::{
    api::client::ApiClient,
    endpoints,
    error::AppError,
    models::{
        question::{Question, RawQuestion},
        quiz::{
            AnswerCheckRequest, AnswerCheckResponse, DailyAnswerResult, DailyCheckRequest,
            QuizResultRequest,
        },
    },
    quiz::QuizBackend,
};

/// Spellings of the expected answer in daily-check responses, success or error.
const CORRECT_ANSWER_KEYS: &[&str] = &["correctAnswer", "bonneReponse", "correct_answer"];

impl ApiClient {
    /// Retrieves the full question set.
    pub async fn fetch_questions(&self) -> Result<Vec<RawQuestion>, AppError> {
        // A `null` body counts as an empty set.
        let questions: Option<Vec<RawQuestion>> = self.get(endpoints::QUIZ).await?;
        Ok(questions.unwrap_or_default())
    }

    /// Asks the backend whether `answer` is right for `question_id`.
    pub async fn check_answer(&self, question_id: i64, answer: &str) -> Result<bool, AppError> {
        let request = AnswerCheckRequest {
            question_id,
            reponse: answer.to_string(),
        };
        let response: AnswerCheckResponse = self.post(endpoints::QUIZ_ANSWER, &request).await?;
        Ok(response.correct)
    }

    pub async fn save_result(&self, result: &QuizResultRequest) -> Result<(), AppError> {
        self.post_ack(endpoints::QUIZ_RESULTS, result).await
    }

    /// Retrieves today's question, if the backend has one.
    pub async fn fetch_daily_question(&self) -> Result<Option<Question>, AppError> {
        let root: Value = self.get(endpoints::QUIZ_DAILY).await?;
        let question = extract_daily_question(&root);
        if question.is_none() {
            tracing::warn!("Daily quiz response has no usable question");
        }
        Ok(question)
    }

    /// Answers the daily question.
    ///
    /// * Uses `/quiz/check`, retrying `/quiz/reponse` when the former is missing (404).
    /// * 401 becomes `AuthError`.
    /// * A 400 saying the user already played today is reported, not raised.
    pub async fn check_daily_answer(
        &self,
        question_id: i64,
        answer: &str,
    ) -> Result<DailyAnswerResult, AppError> {
        let check = DailyCheckRequest {
            question_id,
            answer: answer.to_string(),
        };

        let result = match self.post::<Value, _>(endpoints::QUIZ_CHECK, &check).await {
            Err(e) if e.is_not_found() => {
                tracing::debug!("/quiz/check missing, falling back to /quiz/reponse");
                let legacy = AnswerCheckRequest {
                    question_id,
                    reponse: answer.to_string(),
                };
                self.post::<Value, _>(endpoints::QUIZ_ANSWER, &legacy).await
            }
            other => other,
        };

        match result {
            Ok(body) => Ok(DailyAnswerResult {
                correct: body.get("correct").and_then(Value::as_bool).unwrap_or(false),
                message: string_field(&body, &["message"]),
                already_participated: false,
                correct_answer: string_field(&body, CORRECT_ANSWER_KEYS),
            }),
            Err(AppError::Status { status: 401, .. }) => Err(AppError::AuthError(
                "log in to answer the daily quiz".to_string(),
            )),
            Err(AppError::Status { status: 400, message, body }) if already_participated(&message) => {
                Ok(DailyAnswerResult {
                    correct: false,
                    message: Some(message),
                    already_participated: true,
                    correct_answer: body.as_ref().and_then(|b| string_field(b, CORRECT_ANSWER_KEYS)),
                })
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl QuizBackend for ApiClient {
    async fn fetch_questions(&self) -> Result<Vec<RawQuestion>, AppError> {
        ApiClient::fetch_questions(self).await
    }

    async fn check_answer(&self, question_id: i64, answer: &str) -> Result<bool, AppError> {
        ApiClient::check_answer(self, question_id, answer).await
    }

    async fn save_result(&self, result: &QuizResultRequest) -> Result<(), AppError> {
        ApiClient::save_result(self, result).await
    }
}

/// Finds the question in the various shapes `/quiz/daily` can take:
/// `{questions: [..]}`, a bare question object, `{items: [..]}` or a plain string.
pub fn extract_daily_question(root: &Value) -> Option<Question> {
    let candidate = match root {
        Value::String(text) => json!({ "text": text }),
        Value::Object(map) => {
            if let Some(first) = first_of(map.get("questions")) {
                first.clone()
            } else if looks_like_question(map) {
                root.clone()
            } else if let Some(first) = first_of(map.get("items")) {
                first.clone()
            } else {
                return None;
            }
        }
        _ => return None,
    };

    let candidate = match candidate {
        Value::String(text) => json!({ "text": text }),
        other => other,
    };

    let mut raw: RawQuestion = serde_json::from_value(candidate).ok()?;
    if raw.id.is_none() {
        // The id may live on the envelope rather than the question.
        raw.id = root.get("id").and_then(Value::as_i64);
    }
    Some(raw.into())
}

fn first_of(value: Option<&Value>) -> Option<&Value> {
    value.and_then(Value::as_array).and_then(|items| items.first())
}

fn looks_like_question(map: &serde_json::Map<String, Value>) -> bool {
    map.get("options").is_some_and(Value::is_array)
        || map.get("type").and_then(Value::as_str) == Some("complete")
        || ["question", "enonce", "text"].iter().any(|k| map.contains_key(*k))
}

fn string_field(body: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| body.get(*k).and_then(Value::as_str))
        .map(str::to_string)
}

fn already_participated(message: &str) -> bool {
    static ALREADY_PARTICIPATED: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)déjà\s+particip").expect("valid pattern"));
    ALREADY_PARTICIPATED.is_match(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::AnswerMode;

    #[test]
    fn test_daily_questions_envelope() {
        let root = json!({
            "id": 12,
            "questions": [
                { "id": 5, "question": "Inona no atao hoe vodiondry?", "options": ["Fanomezana", "Sakafo"] },
                { "id": 6, "question": "ignored" }
            ]
        });
        let q = extract_daily_question(&root).unwrap();
        assert_eq!(q.id, 5);
        assert_eq!(q.options.len(), 2);
    }

    #[test]
    fn test_daily_bare_question_and_envelope_id() {
        let root = json!({ "id": 8, "type": "complete", "text": "Tanora ___ tsy mahalala." });
        let q = extract_daily_question(&root).unwrap();
        assert_eq!(q.id, 8);
        assert_eq!(q.mode(), AnswerMode::FreeText);
        assert!(q.is_completion());

        let nested = json!({ "id": 21, "items": [ "Fenoy: Ny ___ no harena." ] });
        let q = extract_daily_question(&nested).unwrap();
        assert_eq!(q.id, 21);
        assert_eq!(q.prompt, "Fenoy: Ny ___ no harena.");
    }

    #[test]
    fn test_daily_plain_string_and_garbage() {
        let q = extract_daily_question(&json!("Inona no renivohitra?")).unwrap();
        assert_eq!(q.prompt, "Inona no renivohitra?");

        assert!(extract_daily_question(&Value::Null).is_none());
        assert!(extract_daily_question(&json!({ "status": "none" })).is_none());
        assert!(extract_daily_question(&json!({ "questions": [] })).is_none());
    }

    #[test]
    fn test_already_participated_detection() {
        assert!(already_participated("Vous avez déjà participé aujourd'hui"));
        assert!(already_participated("DÉJÀ PARTICIPÉ"));
        assert!(!already_participated("Question introuvable"));
        // Same compiled pattern on every call.
        assert!(already_participated("Efa nandray anjara: déjà   participé"));
        assert!(!already_participated(""));
    }
}
