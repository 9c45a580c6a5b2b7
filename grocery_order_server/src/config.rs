use std::env;

use log::*;

const DEFAULT_GOS_HOST: &str = "127.0.0.1";
const DEFAULT_GOS_PORT: u16 = 8380;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_GOS_HOST.to_string(), port: DEFAULT_GOS_PORT }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("GOS_HOST").ok().unwrap_or_else(|| DEFAULT_GOS_HOST.into());
        let port = env::var("GOS_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for GOS_PORT. {e} Using the default, {DEFAULT_GOS_PORT}, instead."
                    );
                    DEFAULT_GOS_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_GOS_PORT);
        Self { host, port }
    }
}
