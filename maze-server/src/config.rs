use std::env;

use anyhow::Context;

const SERVER_PORT_KEY: &str = "SERVER_PORT";
const DEFAULT_SERVER_PORT: &str = "3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_port: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        let server_port = env::var(SERVER_PORT_KEY).unwrap_or_else(|_| DEFAULT_SERVER_PORT.into());
        Self::from_port(server_port)
    }

    fn from_port(server_port: String) -> anyhow::Result<Config> {
        server_port
            .parse::<u16>()
            .with_context(|| format!("invalid {SERVER_PORT_KEY} value: {server_port}"))?;

        Ok(Config { server_port })
    }
}
