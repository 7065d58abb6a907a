use crate::config::Config;
use reqwest::Client;

#[derive(Clone)]
pub struct AppState {
    pub backend_url: String,
    pub login_url: String,
    pub client: Client,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            backend_url: config.backend_url.clone(),
            login_url: config.login_url.clone(),
            client: Client::new(),
        }
    }
}
