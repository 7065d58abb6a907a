use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub backend_url: String,
    pub login_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let backend_url = env::var("STATS_BACKEND_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:9090".to_string())
            .trim_end_matches('/')
            .to_string();

        let login_url = env::var("LOGIN_URL").unwrap_or_else(|_| "/login".to_string());

        Self {
            port,
            backend_url,
            login_url,
        }
    }
}
