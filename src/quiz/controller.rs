// src/quiz/controller.rs

use std::sync::Arc;

use rand::{SeedableRng, rngs::StdRng};
use tokio::sync::broadcast;

use crate::{
    error::AppError,
    models::{
        question::{AnswerMode, Question},
        quiz::QuizResultRequest,
    },
    quiz::{
        backend::QuizBackend,
        defaults::default_questions,
        events::{Notification, QuizEvent},
        session::{QuestionSource, SessionState, SessionSummary},
        shuffle::shuffle_session,
        verification::VerificationOutcome,
    },
    utils::identity::Identity,
};

/// An answer that passed validation and waits for verification.
///
/// Carries the session generation it was made in, so a response that
/// arrives after `stop()` or `restart()` can be recognized and dropped.
#[derive(Debug, Clone)]
pub struct PendingAnswer {
    generation: u64,
    index: usize,
    pub question_id: i64,
    pub selected: String,
    correct_answer: Option<String>,
}

/// Result of one answered question.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerFeedback {
    pub question_id: i64,
    pub outcome: VerificationOutcome,
    pub correct: bool,
    pub notification: Notification,
    /// The session reached its last question and is now terminal.
    pub finished: bool,
    /// Only meaningful when `finished`.
    pub result_saved: bool,
}

/// Drives one question-at-a-time quiz session.
pub struct QuizController {
    backend: Arc<dyn QuizBackend>,
    identity: Identity,
    events: broadcast::Sender<QuizEvent>,
    rng: StdRng,
    state: SessionState,
    generation: u64,
}

impl QuizController {
    /// `identity` is resolved once by the caller and used for result attribution.
    pub fn new(
        backend: Arc<dyn QuizBackend>,
        identity: Identity,
        events: broadcast::Sender<QuizEvent>,
    ) -> Self {
        Self {
            backend,
            identity,
            events,
            rng: StdRng::from_os_rng(),
            state: SessionState::loading(),
            generation: 0,
        }
    }

    /// Deterministic shuffling, for tests.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn backend(&self) -> Arc<dyn QuizBackend> {
        Arc::clone(&self.backend)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<QuizEvent> {
        self.events.subscribe()
    }

    pub fn summary(&self) -> SessionSummary {
        self.state.summary()
    }

    /// Fetches the question set, falling back to the built-in one,
    /// shuffles it and starts a fresh session.
    pub async fn load_questions(&mut self) -> QuestionSource {
        self.generation += 1;
        self.state = SessionState::loading();

        let (mut questions, source) = match self.backend.fetch_questions().await {
            Ok(raw) if !raw.is_empty() => {
                let questions: Vec<Question> = raw.into_iter().map(Question::from).collect();
                (questions, QuestionSource::Remote)
            }
            Ok(_) => {
                tracing::warn!("Quiz endpoint returned no questions, using the built-in set");
                (default_questions(), QuestionSource::BuiltIn)
            }
            Err(e) => {
                tracing::warn!("Failed to load quiz questions, using the built-in set: {}", e);
                (default_questions(), QuestionSource::BuiltIn)
            }
        };

        shuffle_session(&mut questions, &mut self.rng);
        tracing::info!("Quiz session started with {} questions ({:?})", questions.len(), source);

        self.state.start(questions, source);
        source
    }

    /// Validates `selected` for the current question and marks it in flight.
    ///
    /// A second call before `apply_answer` is rejected, which keeps one
    /// verification per question.
    pub fn begin_answer(&mut self, selected: &str) -> Result<PendingAnswer, AppError> {
        if self.state.is_in_flight() {
            return Err(AppError::InvalidState(
                "an answer is already being checked".to_string(),
            ));
        }

        let question = self.state.current_question().ok_or_else(|| {
            AppError::InvalidState("no question is waiting for an answer".to_string())
        })?;

        let blank = match question.mode() {
            AnswerMode::Choice => selected.is_empty(),
            AnswerMode::FreeText => selected.trim().is_empty(),
        };
        if blank {
            return Err(AppError::Validation("an answer is required".to_string()));
        }

        let pending = PendingAnswer {
            generation: self.generation,
            index: self.state.index(),
            question_id: question.id,
            selected: selected.to_string(),
            correct_answer: question.correct_answer.clone(),
        };

        self.state.set_in_flight(true);
        Ok(pending)
    }

    /// Scores a verified answer and advances the session.
    ///
    /// Returns `None` when the answer belongs to a session that was stopped or
    /// restarted meanwhile; the state is left untouched in that case.
    pub async fn apply_answer(
        &mut self,
        pending: PendingAnswer,
        outcome: VerificationOutcome,
    ) -> Option<AnswerFeedback> {
        if pending.generation != self.generation || pending.index != self.state.index() {
            tracing::debug!(
                "Discarding stale verification for question {} (generation {}, current {})",
                pending.question_id,
                pending.generation,
                self.generation
            );
            return None;
        }
        self.state.current_question()?;

        let correct = outcome.is_correct();
        let finished = self.state.record(correct);
        let notification = if correct {
            Notification::correct()
        } else {
            Notification::incorrect()
        };

        tracing::debug!(
            "Question {} answered: {:?}, score {}/{}",
            pending.question_id,
            outcome,
            self.state.score(),
            self.state.answered()
        );

        let result_saved = finished && self.persist_result().await.is_ok();

        Some(AnswerFeedback {
            question_id: pending.question_id,
            outcome,
            correct,
            notification,
            finished,
            result_saved,
        })
    }

    /// Validates, verifies and applies an answer in one go.
    pub async fn submit_answer(&mut self, selected: &str) -> Result<AnswerFeedback, AppError> {
        let pending = self.begin_answer(selected)?;
        let outcome = verify_answer(self.backend.as_ref(), &pending).await;
        self.apply_answer(pending, outcome).await.ok_or_else(|| {
            AppError::InvalidState("the session changed while the answer was checked".to_string())
        })
    }

    /// Ends the session now. Partial results are kept and never saved.
    pub fn stop(&mut self) -> Result<SessionSummary, AppError> {
        if self.state.current_question().is_none() {
            return Err(AppError::InvalidState("no quiz is running".to_string()));
        }

        // Invalidate any verification still in flight.
        self.generation += 1;
        self.state.stop();
        tracing::info!(
            "Quiz stopped early after {} answers ({} correct)",
            self.state.answered(),
            self.state.score()
        );
        Ok(self.state.summary())
    }

    /// Saves the result of a naturally finished session and announces it.
    ///
    /// Failure is logged and returned; the session stays terminal either way.
    pub async fn persist_result(&mut self) -> Result<(), AppError> {
        if !self.state.finished_naturally() {
            return Err(AppError::InvalidState(
                "only a finished quiz can be saved".to_string(),
            ));
        }
        if self.state.is_result_saved() {
            return Err(AppError::InvalidState("result already saved".to_string()));
        }

        let request = QuizResultRequest {
            pseudo: self.identity.label().to_string(),
            score: self.state.score(),
            total: self.state.total(),
        };

        if let Err(e) = self.backend.save_result(&request).await {
            tracing::warn!("Failed to save quiz result: {}", e);
            return Err(e);
        }

        self.state.mark_result_saved();
        tracing::info!(
            "Quiz result saved for {}: {}/{}",
            request.pseudo,
            request.score,
            request.total
        );

        let event = QuizEvent::Completed {
            pseudo: request.pseudo,
            score: request.score,
            total: request.total,
        };
        if self.events.send(event).is_err() {
            tracing::debug!("No listener for quiz completion");
        }

        Ok(())
    }

    /// Throws the current session away and loads a new one.
    pub async fn restart(&mut self) -> QuestionSource {
        self.load_questions().await
    }
}

/// Asks the backend whether the answer is right, falling back to the local key.
///
/// Borrows nothing from the controller, so callers may race it against user input.
pub async fn verify_answer(backend: &dyn QuizBackend, pending: &PendingAnswer) -> VerificationOutcome {
    let remote = backend.check_answer(pending.question_id, &pending.selected).await;
    VerificationOutcome::resolve(remote, pending.correct_answer.as_deref(), &pending.selected)
}
