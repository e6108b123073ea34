// src/api/user.rs

use crate::{
    api::client::ApiClient,
    endpoints,
    error::AppError,
    models::user::{PointsResponse, Profile, Submission},
};

impl ApiClient {
    /// Current points of `username`. A missing `points` field reads as 0.
    pub async fn points(&self, username: &str) -> Result<i64, AppError> {
        let response: PointsResponse = self
            .get_url(endpoints::user_points(self.base(), username)?)
            .await?;
        Ok(response.points.unwrap_or(0))
    }

    pub async fn profile(&self) -> Result<Profile, AppError> {
        self.get(endpoints::USER_PROFILE).await
    }

    /// Sends the whole edited profile back. The response body is not used.
    pub async fn update_profile(&self, profile: &Profile) -> Result<(), AppError> {
        self.put_ack(endpoints::USER_UPDATE, profile).await?;
        tracing::info!("Profile updated for {}", profile.display_name());
        Ok(())
    }

    /// Contributions submitted by `username`. 404 means none yet.
    pub async fn submissions(&self, username: &str) -> Result<Vec<Submission>, AppError> {
        let url = endpoints::user_submissions(self.base(), username)?;
        match self.get_url::<Option<Vec<Submission>>>(url).await {
            Ok(list) => Ok(list.unwrap_or_default()),
            Err(e) if e.is_not_found() => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }
}
