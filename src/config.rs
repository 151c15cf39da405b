use std::{
    env,
    net::{Ipv4Addr, SocketAddr},
};

use anyhow::Context;

const PORT_VAR: &str = "PORT";

/// Process configuration, read from the environment once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// `PORT` is required; a missing or unparsable value is a fatal startup
    /// error.
    pub fn from_env() -> anyhow::Result<Config> {
        let raw = env::var(PORT_VAR)
            .with_context(|| format!("{} environment variable is not set", PORT_VAR))?;
        let port = parse_port(&raw)?;

        Ok(Config { port })
    }

    /// The address the listener binds: the configured port, all interfaces.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    raw.parse()
        .with_context(|| format!("{} must be a TCP port number, got {:?}", PORT_VAR, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_valid_port() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
    }

    #[test]
    fn rejects_a_non_numeric_port() {
        let err = parse_port("not-a-port").unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn rejects_an_out_of_range_port() {
        assert!(parse_port("70000").is_err());
    }

    #[test]
    fn listen_addr_covers_all_interfaces() {
        let config = Config { port: 3000 };
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:3000");
    }
}
