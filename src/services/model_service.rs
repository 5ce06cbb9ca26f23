use std::sync::Arc;

use crate::{
    clients::{ChatClient, ModelInfo},
    config::Config,
    errors::{AppError, AppResult},
};

pub struct ModelService {
    client: Arc<dyn ChatClient>,
    config: Arc<Config>,
}

impl ModelService {
    pub fn new(client: Arc<dyn ChatClient>, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    pub async fn list_models(&self) -> AppResult<Vec<ModelInfo>> {
        if !self.config.has_api_key() {
            return Err(AppError::ValidationError(
                "No model API key is configured".to_string(),
            ));
        }

        self.client.list_models().await
    }
}
