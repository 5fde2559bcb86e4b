use std::time::Duration;

use crate::app::envy::Envy;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(api_url: String, timeout: Option<Duration>) -> Config {
        Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_envy(envy: &Envy) -> Config {
        Config::new(envy.api_url.to_string(), envy.api_timeout())
    }

    pub fn transactions_url(&self) -> String {
        format!("{}/transactions", self.api_url)
    }
}
