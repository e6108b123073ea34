// src/quiz/mod.rs

pub mod backend;
pub mod controller;
pub mod defaults;
pub mod events;
pub mod session;
pub mod shuffle;
pub mod verification;

pub use backend::QuizBackend;
pub use controller::{AnswerFeedback, PendingAnswer, QuizController, verify_answer};
pub use events::{Notification, NotificationKind, QuizEvent};
pub use session::{Phase, QuestionSource, SessionState, SessionSummary, Verdict};
pub use verification::VerificationOutcome;
