// src/cli/quiz.rs

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};
use tokio::sync::watch;

use etantara::{
    error::AppError,
    models::question::{AnswerMode, Question},
    points::spawn_points_refresher,
    quiz::{Notification, NotificationKind, Phase, QuestionSource, SessionSummary, verify_answer},
    state::AppState,
};

/// Maps what the user typed to the value sent to the backend.
///
/// In choice mode a number picks the option at that position (1-based),
/// otherwise the text must equal one of the options.
pub fn resolve_selection(question: &Question, input: &str) -> Result<String, AppError> {
    match question.mode() {
        AnswerMode::FreeText => Ok(input.to_string()),
        AnswerMode::Choice => {
            let trimmed = input.trim();
            if trimmed.is_empty() {
                return Ok(String::new());
            }
            if let Ok(n) = trimmed.parse::<usize>() {
                if let Some(option) = n.checked_sub(1).and_then(|i| question.options.get(i)) {
                    return Ok(option.clone());
                }
            }
            question
                .options
                .iter()
                .find(|o| o.as_str() == trimmed)
                .cloned()
                .ok_or_else(|| {
                    AppError::Validation(format!(
                        "pick a number between 1 and {}",
                        question.options.len()
                    ))
                })
        }
    }
}

fn print_notification(notification: &Notification) {
    let marker = match notification.kind {
        NotificationKind::Success => "+",
        NotificationKind::Destructive => "-",
    };
    println!("[{}] {} {}", marker, notification.title, notification.description);
}

fn print_question(index: usize, total: u32, score: u32, question: &Question) {
    println!();
    println!("Question {} of {}  (score: {})", index + 1, total, score);
    println!("{}", question.prompt);
    if let Some(passage) = question.passage.as_deref().filter(|p| *p != question.prompt) {
        println!("  {}", passage);
    }
    match question.mode() {
        AnswerMode::Choice => {
            for (i, option) in question.options.iter().enumerate() {
                println!("  {}. {}", i + 1, option);
            }
            println!("Your choice (number), `stop` or `quit`:");
        }
        AnswerMode::FreeText => println!("Type your answer, `stop` or `quit`:"),
    }
}

fn print_summary(summary: &SessionSummary) {
    println!();
    if summary.early_stop {
        println!("Quiz stopped.");
        println!("{}/{} correct answers", summary.score, summary.answered);
        println!("Success rate: {}%", summary.percent);
        println!("Your answers were not saved.");
    } else {
        println!("Quiz finished!");
        println!("{}/{}  ({}%)", summary.score, summary.total, summary.percent);
        if let Some(verdict) = summary.verdict {
            println!("{}", verdict.message());
        }
    }
    println!("Type `restart` to play again, anything else to leave.");
}

async fn next_line<R: AsyncRead + Unpin>(lines: &mut Lines<BufReader<R>>) -> Result<Option<String>, AppError> {
    Ok(lines.next_line().await?)
}

/// Interactive quiz on stdin/stdout.
pub async fn run(state: &AppState) -> Result<(), AppError> {
    let mut controller = state.quiz_controller();

    let (points_tx, mut points_rx) = watch::channel(0_i64);
    let refresher = state.identity.username.clone().map(|username| {
        spawn_points_refresher(
            state.client.clone(),
            username,
            controller.subscribe(),
            state.config.points_refresh_delay,
            points_tx,
        )
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if controller.load_questions().await == QuestionSource::BuiltIn {
        println!("(Offline: using the built-in questions.)");
    }

    loop {
        match controller.state().phase() {
            Phase::Loading => {
                controller.load_questions().await;
            }
            Phase::Active => {
                let session = controller.state();
                let Some(question) = session.current_question().cloned() else {
                    continue;
                };
                print_question(session.index(), session.total(), session.score(), &question);

                let Some(line) = next_line(&mut lines).await? else {
                    break;
                };
                match line.trim() {
                    "stop" => {
                        controller.stop()?;
                        print_summary(&controller.summary());
                        continue;
                    }
                    "quit" => break,
                    _ => {}
                }

                let selected = match resolve_selection(&question, &line) {
                    Ok(selected) => selected,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };

                let pending = match controller.begin_answer(&selected) {
                    Ok(pending) => pending,
                    Err(AppError::Validation(_)) => {
                        print_notification(&Notification::answer_required());
                        continue;
                    }
                    Err(e) => return Err(e),
                };

                // Ctrl-C while the answer is being checked stops the quiz;
                // a late verification is then ignored by the controller.
                let backend = controller.backend();
                let outcome = tokio::select! {
                    outcome = verify_answer(backend.as_ref(), &pending) => Some(outcome),
                    _ = tokio::signal::ctrl_c() => None,
                };

                let Some(outcome) = outcome else {
                    controller.stop()?;
                    print_summary(&controller.summary());
                    continue;
                };

                if let Some(feedback) = controller.apply_answer(pending, outcome).await {
                    print_notification(&feedback.notification);
                    if feedback.finished {
                        print_summary(&controller.summary());
                        if feedback.result_saved && refresher.is_some() {
                            let wait = state.config.points_refresh_delay + Duration::from_secs(3);
                            if let Ok(Ok(())) = tokio::time::timeout(wait, points_rx.changed()).await {
                                println!("Your points: {}", *points_rx.borrow());
                            }
                        }
                    }
                }
            }
            Phase::Terminal => {
                let Some(line) = next_line(&mut lines).await? else {
                    break;
                };
                if line.trim() == "restart" {
                    controller.restart().await;
                } else {
                    break;
                }
            }
        }
    }

    if let Some(handle) = refresher {
        handle.abort();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_selection_by_number_or_text() {
        let q = Question::choice(1, "?", &["Amponga", "Valihatra"], "Valihatra");
        assert_eq!(resolve_selection(&q, "2").unwrap(), "Valihatra");
        assert_eq!(resolve_selection(&q, " Amponga ").unwrap(), "Amponga");
        assert_eq!(resolve_selection(&q, "").unwrap(), "");
        assert!(resolve_selection(&q, "3").is_err());
        assert!(resolve_selection(&q, "Sampona").is_err());
    }

    #[test]
    fn test_resolve_selection_free_text_is_raw() {
        let q = Question {
            id: 2,
            prompt: "Fenoy".into(),
            passage: None,
            options: vec![],
            correct_answer: None,
            kind: Some("text".into()),
        };
        assert_eq!(resolve_selection(&q, "  ").unwrap(), "  ");
        assert_eq!(resolve_selection(&q, "fihavanana").unwrap(), "fihavanana");
    }
}
