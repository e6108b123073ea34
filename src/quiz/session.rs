// src/quiz/session.rs

use serde::Serialize;

use crate::models::question::Question;

/// Loading → Active → Terminal. Terminal only leaves through a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Loading,
    Active,
    Terminal,
}

/// Where the session's questions came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuestionSource {
    Remote,
    BuiltIn,
}

/// In-memory state of one quiz run. Owned and mutated by a single controller.
#[derive(Debug, Clone, Serialize)]
pub struct SessionState {
    questions: Vec<Question>,
    index: usize,
    score: u32,
    answered: u32,
    phase: Phase,
    completed: bool,
    early_stop: bool,
    source: Option<QuestionSource>,
    in_flight: bool,
    result_saved: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::loading()
    }
}

impl SessionState {
    pub fn loading() -> Self {
        Self {
            questions: Vec::new(),
            index: 0,
            score: 0,
            answered: 0,
            phase: Phase::Loading,
            completed: false,
            early_stop: false,
            source: None,
            in_flight: false,
            result_saved: false,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answered(&self) -> u32 {
        self.answered
    }

    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Results are showing, whether the run finished or was stopped.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_early_stop(&self) -> bool {
        self.early_stop
    }

    pub fn source(&self) -> Option<QuestionSource> {
        self.source
    }

    /// An answer for the current question is being verified.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn is_result_saved(&self) -> bool {
        self.result_saved
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Active => self.questions.get(self.index),
            _ => None,
        }
    }

    /// True when the run ended by answering every question.
    pub fn finished_naturally(&self) -> bool {
        self.phase == Phase::Terminal && self.completed && !self.early_stop
    }

    pub(crate) fn start(&mut self, questions: Vec<Question>, source: QuestionSource) {
        *self = Self {
            questions,
            source: Some(source),
            phase: Phase::Active,
            ..Self::loading()
        };
    }

    pub(crate) fn set_in_flight(&mut self, in_flight: bool) {
        self.in_flight = in_flight;
    }

    pub(crate) fn mark_result_saved(&mut self) {
        self.result_saved = true;
    }

    /// Scores the current question and moves on.
    /// Returns true when that was the last question.
    pub(crate) fn record(&mut self, correct: bool) -> bool {
        if correct {
            self.score += 1;
        }
        self.answered += 1;
        self.in_flight = false;

        if self.index + 1 < self.questions.len() {
            self.index += 1;
            false
        } else {
            self.phase = Phase::Terminal;
            self.completed = true;
            true
        }
    }

    pub(crate) fn stop(&mut self) {
        self.phase = Phase::Terminal;
        self.completed = true;
        self.early_stop = true;
        self.in_flight = false;
    }

    pub fn summary(&self) -> SessionSummary {
        let total = self.total();
        let denominator = if self.early_stop { self.answered } else { total };
        let percent = if denominator == 0 {
            0
        } else {
            // Round half up.
            (self.score * 200 + denominator) / (denominator * 2)
        };

        let verdict = if self.early_stop || total == 0 {
            None
        } else if self.score == total {
            Some(Verdict::Perfect)
        } else if self.score * 10 >= total * 7 {
            Some(Verdict::VeryGood)
        } else {
            Some(Verdict::KeepLearning)
        };

        SessionSummary {
            score: self.score,
            answered: self.answered,
            total,
            early_stop: self.early_stop,
            percent,
            verdict,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Perfect,
    /// At least 70% right.
    VeryGood,
    KeepLearning,
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Perfect => "Perfect score! Tsara be!",
            Verdict::VeryGood => "Very good work!",
            Verdict::KeepLearning => "Keep learning about Malagasy culture!",
        }
    }
}

/// What the results screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub score: u32,
    pub answered: u32,
    pub total: u32,
    pub early_stop: bool,
    /// `score / answered` after an early stop, `score / total` otherwise.
    pub percent: u32,
    /// `None` after an early stop: nothing is judged or saved.
    pub verdict: Option<Verdict>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::defaults::default_questions;

    fn active() -> SessionState {
        let mut state = SessionState::loading();
        state.start(default_questions(), QuestionSource::BuiltIn);
        state
    }

    #[test]
    fn test_record_advances_then_terminates() {
        let mut state = active();
        assert_eq!(state.phase(), Phase::Active);

        assert!(!state.record(true));
        assert!(!state.record(false));
        assert!(!state.record(true));
        assert_eq!(state.index(), 3);
        assert!(state.record(true));

        assert_eq!(state.phase(), Phase::Terminal);
        assert!(state.finished_naturally());
        assert_eq!(state.score(), 3);
        assert_eq!(state.answered(), 4);
        assert_eq!(state.index(), 3);
        assert!(state.current_question().is_none());
    }

    #[test]
    fn test_summary_after_completion() {
        let mut state = active();
        for correct in [true, true, true, false] {
            state.record(correct);
        }
        let summary = state.summary();
        assert_eq!(summary.percent, 75);
        assert_eq!(summary.verdict, Some(Verdict::VeryGood));
        assert!(!summary.early_stop);
    }

    #[test]
    fn test_summary_after_early_stop_uses_answered() {
        let mut state = active();
        state.record(true);
        state.record(false);
        state.record(true);
        state.stop();

        let summary = state.summary();
        assert!(summary.early_stop);
        assert_eq!(summary.answered, 3);
        assert_eq!(summary.percent, 67);
        assert_eq!(summary.verdict, None);
        assert!(!state.finished_naturally());
    }

    #[test]
    fn test_stop_before_any_answer() {
        let mut state = active();
        state.stop();
        let summary = state.summary();
        assert_eq!(summary.percent, 0);
        assert_eq!(summary.answered, 0);
    }

    #[test]
    fn test_verdict_tiers() {
        let mut state = active();
        for _ in 0..4 {
            state.record(true);
        }
        assert_eq!(state.summary().verdict, Some(Verdict::Perfect));

        let mut state = active();
        for correct in [true, false, false, true] {
            state.record(correct);
        }
        assert_eq!(state.summary().verdict, Some(Verdict::KeepLearning));
    }
}
