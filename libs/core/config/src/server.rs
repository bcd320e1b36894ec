use crate::{env_or_default, env_parse, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// Port the catalog API listens on unless `PORT` says otherwise.
pub const DEFAULT_PORT: u16 = 5000;

/// Bind address of the HTTP listener
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, as accepted by `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// `HOST` (all interfaces by default) and `PORT` (5000 by default).
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string()),
            port: env_parse("PORT", DEFAULT_PORT)?,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_vars_fall_back_to_default() {
        temp_env::with_vars_unset(["HOST", "PORT"], || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config, ServerConfig::default());
            assert_eq!(config.address(), "0.0.0.0:5000");
        });
    }

    #[test]
    fn test_host_and_port_overrides() {
        temp_env::with_vars(
            [("HOST", Some("127.0.0.1")), ("PORT", Some("8088"))],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.address(), "127.0.0.1:8088");
            },
        );
    }

    #[test]
    fn test_unparsable_port_names_the_variable() {
        for raw in ["not_a_number", "99999"] {
            temp_env::with_var("PORT", Some(raw), || {
                let err = ServerConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("PORT"), "{}", raw);
            });
        }
    }
}
