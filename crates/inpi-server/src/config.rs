//! Server configuration from command-line flags and environment variables

use clap::Parser;
use inpi_core::url::BASE_URL;
use inpi_core::{ClientConfig, Credentials, LOGIN_ENV, SECRET_ENV};

/// JSON API for INPI trademark verification
#[derive(Debug, Clone, Parser)]
#[command(name = "inpi-server", version, about)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "INPI_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "INPI_PORT", default_value_t = 3000)]
    pub port: u16,

    /// INPI portal login
    #[arg(long, env = LOGIN_ENV, hide_env_values = true)]
    pub login: Option<String>,

    /// INPI portal password
    #[arg(long, env = SECRET_ENV, hide_env_values = true)]
    pub password: Option<String>,

    /// Portal address
    #[arg(long, env = "INPI_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds; unset keeps the transport default
    #[arg(long, env = "INPI_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Skip TLS certificate validation for portal requests
    #[arg(long, env = "INPI_ACCEPT_INVALID_CERTS")]
    pub accept_invalid_certs: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            accept_invalid_certs: self.accept_invalid_certs,
            ..ClientConfig::default()
        }
    }

    /// Credentials when both login and password are configured
    pub fn credentials(&self) -> Option<Credentials> {
        Credentials::from_parts(self.login.clone(), self.password.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_config_flags() {
        let config = Config::try_parse_from([
            "inpi-server",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--login",
            "user",
            "--password",
            "secret",
            "--base-url",
            "http://127.0.0.1:9000",
            "--timeout-secs",
            "20",
            "--accept-invalid-certs",
        ])
        .unwrap();

        assert_eq!(config.address(), "0.0.0.0:8080");
        assert_eq!(config.credentials(), Some(Credentials::new("user", "secret")));

        let client = config.client_config();
        assert_eq!(client.base_url, "http://127.0.0.1:9000");
        assert_eq!(client.timeout_secs, Some(20));
        assert!(client.accept_invalid_certs);
    }

    #[test]
    fn test_config_bind_address_from_prefixed_env() {
        let command = Config::command();
        let env_of = |id: &str| {
            command
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_env())
                .map(|name| name.to_string_lossy().into_owned())
        };

        // Shells export HOST themselves; only the prefixed names are read
        assert_eq!(env_of("host").as_deref(), Some("INPI_HOST"));
        assert_eq!(env_of("port").as_deref(), Some("INPI_PORT"));
        assert_eq!(env_of("login").as_deref(), Some(LOGIN_ENV));
        assert_eq!(env_of("password").as_deref(), Some(SECRET_ENV));
    }

    #[test]
    fn test_config_without_password_has_no_credentials() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            login: Some("user".to_string()),
            password: None,
            base_url: BASE_URL.to_string(),
            timeout_secs: None,
            accept_invalid_certs: false,
            log_level: "info".to_string(),
        };

        assert_eq!(config.credentials(), None);
        assert!(!config.client_config().accept_invalid_certs);
    }
}
