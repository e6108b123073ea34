// src/quiz/verification.rs

use crate::error::AppError;

/// How the correctness of an answer was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The check endpoint answered with a 2xx.
    RemoteConfirmed(bool),
    /// The endpoint failed; the locally known answer decided.
    LocalFallback(bool),
    /// The endpoint failed and no answer is known locally.
    Unknown,
}

impl VerificationOutcome {
    /// `Unknown` scores as incorrect.
    pub fn is_correct(self) -> bool {
        match self {
            VerificationOutcome::RemoteConfirmed(correct) => correct,
            VerificationOutcome::LocalFallback(correct) => correct,
            VerificationOutcome::Unknown => false,
        }
    }

    /// Combines the remote result with the local answer key.
    ///
    /// Any remote failure, network or non-2xx, prefers the exact-match fallback
    /// when the answer is known.
    pub fn resolve(
        remote: Result<bool, AppError>,
        correct_answer: Option<&str>,
        selected: &str,
    ) -> Self {
        match remote {
            Ok(correct) => VerificationOutcome::RemoteConfirmed(correct),
            Err(e) => {
                tracing::warn!("Answer check unavailable, trying local verification: {}", e);
                match correct_answer {
                    Some(expected) => VerificationOutcome::LocalFallback(selected == expected),
                    None => VerificationOutcome::Unknown,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable() -> Result<bool, AppError> {
        Err(AppError::Network("connection refused".into()))
    }

    #[test]
    fn test_remote_answer_wins() {
        let outcome = VerificationOutcome::resolve(Ok(false), Some("Fihavanana"), "Fihavanana");
        assert_eq!(outcome, VerificationOutcome::RemoteConfirmed(false));
        assert!(!outcome.is_correct());
    }

    #[test]
    fn test_local_fallback_exact_match() {
        let ok = VerificationOutcome::resolve(unreachable(), Some("Fihavanana"), "Fihavanana");
        assert_eq!(ok, VerificationOutcome::LocalFallback(true));
        assert!(ok.is_correct());

        let wrong = VerificationOutcome::resolve(unreachable(), Some("Fihavanana"), "Fanolorana");
        assert_eq!(wrong, VerificationOutcome::LocalFallback(false));

        // Exact equality, no case folding.
        let case = VerificationOutcome::resolve(unreachable(), Some("Fihavanana"), "fihavanana");
        assert!(!case.is_correct());
    }

    #[test]
    fn test_non_2xx_uses_fallback() {
        let remote = Err(AppError::Status { status: 500, message: "boom".into(), body: None });
        let outcome = VerificationOutcome::resolve(remote, Some("Valihatra"), "Valihatra");
        assert_eq!(outcome, VerificationOutcome::LocalFallback(true));
    }

    #[test]
    fn test_unknown_answer_is_incorrect() {
        let outcome = VerificationOutcome::resolve(unreachable(), None, "Valihatra");
        assert_eq!(outcome, VerificationOutcome::Unknown);
        assert!(!outcome.is_correct());
    }
}
