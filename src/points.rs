// src/points.rs

use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::{
    api::ApiClient,
    error::AppError,
    models::contribution::{ShareOhabolanaRequest, ShareQuizRequest, ShareTantaraRequest},
    quiz::QuizEvent,
    utils::identity::Identity,
};

/// Minimum number of points before a user may share content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareGate {
    pub threshold: i64,
}

impl ShareGate {
    pub fn new(threshold: i64) -> Self {
        Self { threshold }
    }

    pub fn allows(&self, points: i64) -> bool {
        points >= self.threshold
    }

    pub fn check(&self, points: i64) -> Result<(), AppError> {
        if self.allows(points) {
            Ok(())
        } else {
            Err(AppError::InsufficientPoints {
                required: self.threshold,
                current: points,
            })
        }
    }
}

/// Sharing on behalf of the logged-in user, gated by their points.
pub struct ShareService {
    client: ApiClient,
    identity: Identity,
    gate: ShareGate,
}

impl ShareService {
    pub fn new(client: ApiClient, identity: Identity, gate: ShareGate) -> Self {
        Self {
            client,
            identity,
            gate,
        }
    }

    /// Fetches the current points and checks them against the gate.
    /// Returns the points on success.
    pub async fn ensure_can_share(&self) -> Result<i64, AppError> {
        let username = self.identity.require_username()?;
        let points = self.client.points(username).await?;
        self.gate.check(points)?;
        Ok(points)
    }

    pub async fn share_quiz(&self, mut request: ShareQuizRequest) -> Result<(), AppError> {
        self.ensure_can_share().await?;
        request.username = self.identity.require_username()?.to_string();
        self.client.submit_quiz(&request).await?;
        tracing::info!("Quiz question shared by {}", request.username);
        Ok(())
    }

    pub async fn share_tantara(&self, mut request: ShareTantaraRequest) -> Result<(), AppError> {
        self.ensure_can_share().await?;
        request.username = self.identity.require_username()?.to_string();
        self.client.submit_tantara(&request).await?;
        tracing::info!("Tantara '{}' shared by {}", request.title, request.username);
        Ok(())
    }

    pub async fn share_ohabolana(&self, mut request: ShareOhabolanaRequest) -> Result<(), AppError> {
        self.ensure_can_share().await?;
        request.username = self.identity.require_username()?.to_string();
        self.client.submit_ohabolana(&request).await?;
        tracing::info!("Ohabolana shared by {}", request.username);
        Ok(())
    }
}

/// Keeps a points display fresh after quizzes.
///
/// On every `QuizEvent::Completed`, waits `delay` (the backend credits points
/// asynchronously), re-fetches the points of `username` and publishes them.
/// The task ends when the event sender is dropped or the watch receiver is gone.
pub fn spawn_points_refresher(
    client: ApiClient,
    username: String,
    mut events: broadcast::Receiver<QuizEvent>,
    delay: Duration,
    points: watch::Sender<i64>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(QuizEvent::Completed { .. }) => {
                    tokio::time::sleep(delay).await;
                    match client.points(&username).await {
                        Ok(current) => {
                            tracing::debug!("Points refreshed for {}: {}", username, current);
                            if points.send(current).is_err() {
                                break;
                            }
                        }
                        Err(e) => tracing::warn!("Failed to refresh points: {}", e),
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::debug!("Points refresher skipped {} events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
