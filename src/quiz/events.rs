// src/quiz/events.rs

use serde::Serialize;

/// Application-wide signals emitted by a quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum QuizEvent {
    /// A finished session's result was saved by the backend.
    /// Listeners refresh the user's points.
    Completed { pseudo: String, score: u32, total: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationKind {
    Success,
    Destructive,
}

/// A toast-like message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn correct() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Tsara! Correct!".to_string(),
            description: "Well done!".to_string(),
        }
    }

    pub fn incorrect() -> Self {
        Self {
            kind: NotificationKind::Destructive,
            title: "Diso".to_string(),
            description: "That was not the right answer.".to_string(),
        }
    }

    pub fn answer_required() -> Self {
        Self {
            kind: NotificationKind::Destructive,
            title: "Answer required".to_string(),
            description: "Pick an option or type an answer first.".to_string(),
        }
    }
}
