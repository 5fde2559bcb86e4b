use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,

    pub api_url: String,
    pub api_timeout_secs: Option<u64>,
}

impl Envy {
    pub fn api_timeout(&self) -> Option<Duration> {
        self.api_timeout_secs.map(Duration::from_secs)
    }
}
