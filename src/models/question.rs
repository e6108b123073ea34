// src/models/question.rs

use serde::{Deserialize, Serialize};

/// A question as the backend sends it.
///
/// The API is not consistent about field names: some endpoints send
/// `optionA..optionD`, others an `options` array, and the prompt may come as
/// `question`, `text` or `enonce`. Everything is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub enonce: Option<String>,
    #[serde(default, rename = "optionA")]
    pub option_a: Option<String>,
    #[serde(default, rename = "optionB")]
    pub option_b: Option<String>,
    #[serde(default, rename = "optionC")]
    pub option_c: Option<String>,
    #[serde(default, rename = "optionD")]
    pub option_d: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default, rename = "type")]
    pub question_type: Option<String>,
}

/// How a question expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerMode {
    /// Pick one of the listed options.
    Choice,
    /// Type the missing word.
    FreeText,
}

/// Normalized question used by the quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: i64,

    /// The text shown as the question title.
    pub prompt: String,

    /// Extra passage for completion questions (the sentence with a blank).
    pub passage: Option<String>,

    /// Present options only; blank slots are dropped.
    pub options: Vec<String>,

    /// Only known for built-in questions or backends that leak it.
    /// Used for local verification when the check endpoint is down.
    pub correct_answer: Option<String>,

    /// Raw `type` marker from the backend (`single`, `text`, `complete`, ...).
    pub kind: Option<String>,
}

impl Question {
    pub fn mode(&self) -> AnswerMode {
        if self.options.is_empty() {
            AnswerMode::FreeText
        } else {
            AnswerMode::Choice
        }
    }

    /// True for fill-in-the-blank questions, whether or not they offer choices.
    pub fn is_completion(&self) -> bool {
        self.passage.is_some()
            || matches!(self.kind.as_deref(), Some("text") | Some("complete"))
    }

    /// Builds a multiple-choice question with a known answer.
    pub fn choice(id: i64, prompt: &str, options: &[&str], correct_answer: &str) -> Self {
        Self {
            id,
            prompt: prompt.to_string(),
            passage: None,
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: Some(correct_answer.to_string()),
            kind: None,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        let listed: Vec<String> = raw
            .options
            .unwrap_or_default()
            .into_iter()
            .filter(|o| !o.trim().is_empty())
            .collect();

        let options = if listed.is_empty() {
            [raw.option_a, raw.option_b, raw.option_c, raw.option_d]
                .into_iter()
                .filter_map(non_blank)
                .collect()
        } else {
            listed
        };

        let question = non_blank(raw.question);
        let text = non_blank(raw.text);
        let enonce = non_blank(raw.enonce);

        // `text` is the prompt itself unless a separate `question` was given.
        let (prompt, passage) = match (question, text) {
            (Some(q), text) => (q, text),
            (None, Some(t)) => (t.clone(), Some(t)),
            (None, None) => (enonce.unwrap_or_default(), None),
        };

        Question {
            id: raw.id.unwrap_or(0),
            prompt,
            passage,
            options,
            correct_answer: non_blank(raw.correct_answer),
            kind: non_blank(raw.question_type),
        }
    }
}
