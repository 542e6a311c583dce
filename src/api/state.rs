// src/api/state.rs
use crate::client::SentimentClient;
use crate::config::AppConfig;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sentiment: SentimentClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let sentiment = SentimentClient::new(Client::new(), config.sentiment_api.clone());
        Self {
            config: Arc::new(config),
            sentiment,
        }
    }
}
