use std::sync::Arc;

use crate::{
    clients::{ChatClient, OpenAiChatClient},
    config::Config,
    errors::AppResult,
    services::{AnalysisService, ModelService},
};

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
    pub model_service: Arc<ModelService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let config = Arc::new(config);
        let client: Arc<dyn ChatClient> = Arc::new(OpenAiChatClient::new(&config)?);

        let analysis_service = Arc::new(AnalysisService::new(client.clone(), config.clone()));
        let model_service = Arc::new(ModelService::new(client, config.clone()));

        Ok(Self {
            analysis_service,
            model_service,
            config,
        })
    }
}
