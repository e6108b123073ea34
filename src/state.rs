// src/state.rs

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::{
    api::ApiClient,
    config::Config,
    error::AppError,
    points::{ShareGate, ShareService},
    quiz::{QuizController, QuizEvent},
    utils::identity::{Identity, IdentityStore},
};

/// Everything a command needs, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub client: ApiClient,
    pub identity_store: IdentityStore,
    pub identity: Identity,
    pub events: broadcast::Sender<QuizEvent>,
}

impl AppState {
    /// Loads the stored identity and builds a client carrying its token.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let identity_store = IdentityStore::new(&config.identity_file);
        let identity = identity_store.load()?;
        let client = ApiClient::new(&config)?.with_token(identity.auth_token.clone());
        let (events, _) = broadcast::channel(16);

        Ok(Self {
            config,
            client,
            identity_store,
            identity,
            events,
        })
    }

    /// Persists `identity` and switches the client to its token.
    pub fn set_identity(&mut self, identity: Identity) -> Result<(), AppError> {
        self.identity_store.save(&identity)?;
        self.client = self.client.clone().with_token(identity.auth_token.clone());
        self.identity = identity;
        Ok(())
    }

    pub fn clear_identity(&mut self) -> Result<(), AppError> {
        self.identity_store.clear()?;
        self.client = self.client.clone().with_token(None);
        self.identity = Identity::anonymous();
        Ok(())
    }

    pub fn quiz_controller(&self) -> QuizController {
        QuizController::new(
            Arc::new(self.client.clone()),
            self.identity.clone(),
            self.events.clone(),
        )
    }

    pub fn share_service(&self) -> ShareService {
        ShareService::new(
            self.client.clone(),
            self.identity.clone(),
            ShareGate::new(self.config.share_points_threshold),
        )
    }
}
