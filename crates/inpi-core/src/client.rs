//! Authenticated HTTP session for the INPI portal
//!
//! Every lookup gets its own [`Session`], i.e. its own `reqwest::Client`
//! with its own cookie jar. The portal answers the login POST with HTTP 200
//! whether or not the credentials were accepted, so success is decided from
//! the response body by [`is_login_failure`].

use std::time::Duration;

use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};

use crate::error::{InpiError, Result};
use crate::types::Credentials;
use crate::url::{BASE_URL, build_login_url, login_form};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

/// Token that only appears in the portal's login form
pub const LOGIN_FORM_MARKER: &str = "T_Login";

/// Configuration for the portal session client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Portal address (default: `https://busca.inpi.gov.br`)
    pub base_url: String,
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Request timeout in seconds (default: none, transport default applies)
    pub timeout_secs: Option<u64>,
    /// Skip TLS certificate validation for this client only (default: false)
    pub accept_invalid_certs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: None,
            accept_invalid_certs: false,
        }
    }
}

/// Whether a login response body means the credentials were rejected
///
/// The portal re-renders the login form on failure, so the presence of the
/// form's field name is the failure signal.
pub fn is_login_failure(body: &str) -> bool {
    body.contains(LOGIN_FORM_MARKER)
}

/// Produces authenticated sessions
#[derive(Debug, Clone, Default)]
pub struct SessionClient {
    config: ClientConfig,
}

impl SessionClient {
    /// Create a session client with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Logs in and returns a session holding the resulting cookies
    ///
    /// # Errors
    /// - `Auth` - the portal echoed the login form back
    /// - `Network` - transport failure or non-success HTTP status
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Session> {
        let session = Session {
            http: self.build_http()?,
            base_url: self.config.base_url.clone(),
        };

        tracing::info!(login = %credentials.login, "logging in to INPI");
        let body = session
            .post_form(&build_login_url(&session.base_url), &login_form(credentials))
            .await?;

        if is_login_failure(&body) {
            tracing::warn!(login = %credentials.login, "INPI login rejected");
            return Err(InpiError::Auth(
                "the portal returned the login form; review INPI_LOGIN and INPI_SENHA".to_string(),
            ));
        }

        tracing::debug!("INPI login accepted");
        Ok(session)
    }

    fn build_http(&self) -> Result<reqwest::Client> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("pt-BR,pt;q=0.9,en;q=0.8"),
        );

        let mut builder = reqwest::Client::builder()
            .user_agent(self.config.user_agent.as_str())
            .cookie_store(true)
            .default_headers(headers);

        if let Some(secs) = self.config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if self.config.accept_invalid_certs {
            tracing::warn!(
                base_url = %self.config.base_url,
                "TLS certificate validation disabled for this session"
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder.build().map_err(InpiError::Network)
    }
}

/// Cookie-bearing context for one lookup
///
/// Dropping the session closes its connections and discards its cookies.
#[derive(Debug)]
pub struct Session {
    http: reqwest::Client,
    base_url: String,
}

impl Session {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a page and return its body
    pub async fn get_page(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    /// POST a form-encoded payload and return the response body
    pub async fn post_form(&self, url: &str, form: &[(&str, String)]) -> Result<String> {
        let response = self
            .http
            .post(url)
            .form(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LOGIN_FORM_PAGE: &str = r#"<html><body><form action="LoginController">
        <input type="text" name="T_Login"><input type="password" name="T_Senha">
        </form></body></html>"#;

    fn client_for(server: &MockServer) -> SessionClient {
        SessionClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://busca.inpi.gov.br");
        assert_eq!(config.timeout_secs, None);
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_is_login_failure() {
        assert!(is_login_failure(LOGIN_FORM_PAGE));
        assert!(!is_login_failure("<html><body>Bem-vindo, usuário</body></html>"));
    }

    #[test]
    fn test_build_http_with_relaxed_tls() {
        let client = SessionClient::with_config(ClientConfig {
            accept_invalid_certs: true,
            timeout_secs: Some(10),
            ..ClientConfig::default()
        });
        assert!(client.build_http().is_ok());
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pePI/servlet/LoginController"))
            .and(body_string("T_Login=user&T_Senha=secret&action=login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>Bem-vindo</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let session = client_for(&server)
            .authenticate(&Credentials::new("user", "secret"))
            .await
            .expect("login should succeed");
        assert_eq!(session.base_url(), server.uri());
    }

    #[tokio::test]
    async fn test_authenticate_login_form_echoed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pePI/servlet/LoginController"))
            .respond_with(ResponseTemplate::new(200).set_body_string(LOGIN_FORM_PAGE))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .authenticate(&Credentials::new("user", "wrong"))
            .await;

        match result {
            Err(InpiError::Auth(msg)) => assert!(msg.contains("INPI_LOGIN")),
            other => panic!("Expected Auth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_authenticate_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/pePI/servlet/LoginController"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .authenticate(&Credentials::new("user", "secret"))
            .await;

        assert!(matches!(result, Err(InpiError::Network(_))));
    }

    #[tokio::test]
    async fn test_authenticate_unreachable_portal() {
        let client = SessionClient::with_config(ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..ClientConfig::default()
        });

        let result = client.authenticate(&Credentials::new("user", "secret")).await;
        assert!(matches!(result, Err(InpiError::Network(_))));
    }
}
