use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const REDIRECT_URI: &str = "http://localhost:8080";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Token exchange rejected: {0}")]
    ExchangeFailed(String),
    #[error("Token response contained no access token")]
    MissingToken,
}

/// The current access credential. At most one lives per process; it is
/// created by a successful login and dropped on logout.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// The login widget's success/failure callback pair, modeled as a value the
/// session manager consumes synchronously.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Succeeded { assertion: String },
    Failed { reason: String },
}

#[derive(Debug, Serialize)]
struct TokenExchangeRequest<'a> {
    client_id: &'a str,
    grant_type: &'a str,
    assertion: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Mediates login and logout and holds the current access credential.
///
/// Login exchanges the opaque identity assertion for a bearer access token
/// at the provider's token endpoint. The assertion itself is never used as a
/// bearer credential against the calendar service.
pub struct SessionManager {
    client_id: String,
    token_url: String,
    client: reqwest::Client,
    session: Option<Session>,
}

impl SessionManager {
    pub fn new(client_id: String) -> Self {
        Self {
            client_id,
            token_url: DEFAULT_TOKEN_URL.to_string(),
            client: reqwest::Client::new(),
            session: None,
        }
    }

    pub fn with_token_url(mut self, token_url: String) -> Self {
        self.token_url = token_url;
        self
    }

    pub fn state(&self) -> SessionState {
        if self.session.is_some() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Exchanges an identity assertion for a bearer access token. On any
    /// failure the session stays absent.
    pub async fn login(&mut self, assertion: &str) -> Result<Session, AuthError> {
        let request = TokenExchangeRequest {
            client_id: &self.client_id,
            grant_type: JWT_BEARER_GRANT,
            assertion,
        };

        tracing::info!("Exchanging identity assertion at {}", self.token_url);

        let response = self
            .client
            .post(&self.token_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!("Token exchange failed. Status: {}, Body: {}", status, body);
            return Err(AuthError::ExchangeFailed(format!("Status {}: {}", status, body)));
        }

        let token_response: TokenResponse = response.json().await?;
        let token = match token_response.access_token {
            Some(token) if !token.is_empty() => token,
            _ => {
                tracing::error!("Token exchange succeeded but returned no access token");
                return Err(AuthError::MissingToken);
            }
        };

        let session = Session { token };
        self.session = Some(session.clone());
        tracing::info!("Login succeeded");

        Ok(session)
    }

    /// Local-only teardown: drops the session without revoking the token
    /// server-side. Infallible and idempotent.
    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            tracing::info!("Logged out");
        }
    }

    /// Provider sign-in URL the user visits to obtain an identity assertion.
    pub fn login_url(&self) -> String {
        let scope = "openid email https://www.googleapis.com/auth/calendar";

        format!(
            "https://accounts.google.com/o/oauth2/v2/auth?client_id={}&redirect_uri={}&response_type=id_token&scope={}",
            urlencoding::encode(&self.client_id),
            urlencoding::encode(REDIRECT_URI),
            urlencoding::encode(scope)
        )
    }

    pub fn print_login_instructions(&self) {
        println!("\n=== Calendar Sign-In ===\n");
        println!("To connect your calendar:");
        println!("1. Visit this URL in your browser:\n");
        println!("{}\n", self.login_url());
        println!("2. Sign in and authorize the application");
        println!("3. Copy the identity assertion from the redirect fragment");
        println!("4. Paste it at the prompt below\n");
    }
}
