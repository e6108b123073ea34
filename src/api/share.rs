// src/api/share.rs

use crate::{
    api::client::ApiClient,
    endpoints,
    error::AppError,
    models::contribution::{ShareOhabolanaRequest, ShareQuizRequest, ShareTantaraRequest},
};

// Raw submissions. Point gating lives in `points::ShareService`.
impl ApiClient {
    pub async fn submit_quiz(&self, request: &ShareQuizRequest) -> Result<(), AppError> {
        self.post_ack(endpoints::SHARE_QUIZ, request).await
    }

    pub async fn submit_tantara(&self, request: &ShareTantaraRequest) -> Result<(), AppError> {
        self.post_ack(endpoints::SHARE_TANTARA, request).await
    }

    pub async fn submit_ohabolana(&self, request: &ShareOhabolanaRequest) -> Result<(), AppError> {
        self.post_ack(endpoints::SHARE_OHABOLANA, request).await
    }
}
