//! OAuth2 session management for the Yahoo Fantasy Sports API.
//!
//! Yahoo uses the standard three-legged authorization-code flow. The first
//! run prints an approval URL, blocks on stdin for the authorization code,
//! and exchanges it for an access/refresh token pair. The pair is persisted
//! under the cache directory so later runs only ever hit the refresh grant.
//!
//! Token lifecycle states: no cached token (requires `authorize`), cached and
//! valid (used as-is), cached and expired (refreshed transparently before the
//! next API call).

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::core::{token_path, try_read_to_string, write_string};
use crate::error::{Result, YahooError};
use crate::{CLIENT_ID_ENV_VAR, CLIENT_SECRET_ENV_VAR};


/// Yahoo's user-approval endpoint.
pub const AUTH_URL: &str = "https://api.login.yahoo.com/oauth2/request_auth";

/// Yahoo's token endpoint, used for both the code exchange and refresh grants.
pub const TOKEN_URL: &str = "https://api.login.yahoo.com/oauth2/get_token";

/// Out-of-band redirect: Yahoo shows the code for the user to paste.
const OOB_REDIRECT: &str = "oob";

/// Tokens within this many seconds of expiry are treated as expired.
const EXPIRY_SKEW_SECS: u64 = 60;

/// Immutable client credentials, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    /// Load from `YAHOO_CLIENT_ID` / `YAHOO_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        let client_id =
            std::env::var(CLIENT_ID_ENV_VAR).map_err(|_| YahooError::MissingCredential {
                var: CLIENT_ID_ENV_VAR.to_string(),
            })?;
        let client_secret =
            std::env::var(CLIENT_SECRET_ENV_VAR).map_err(|_| YahooError::MissingCredential {
                var: CLIENT_SECRET_ENV_VAR.to_string(),
            })?;

        Ok(Self {
            client_id,
            client_secret,
        })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Access/refresh token pair with an absolute expiry timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// Unix timestamp after which the access token is no longer accepted.
    pub expires_at: u64,
}

impl Token {
    pub fn new(
        access_token: String,
        refresh_token: String,
        token_type: String,
        expires_in_secs: u64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type,
            expires_at: unix_now() + expires_in_secs,
        }
    }

    /// Expired, or within the refresh skew of expiring.
    pub fn is_expired(&self) -> bool {
        unix_now() + EXPIRY_SKEW_SECS >= self.expires_at
    }
}

/// Wire format of Yahoo's token endpoint responses.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    token_type: String,
    expires_in: u64,
}

impl From<TokenResponse> for Token {
    fn from(res: TokenResponse) -> Self {
        Token::new(
            res.access_token,
            res.refresh_token,
            res.token_type,
            res.expires_in,
        )
    }
}

/// JSON-file persistence for the token pair.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store at the default cache location.
    pub fn new() -> Self {
        Self { path: token_path() }
    }

    /// Store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached token, if any. Unreadable or malformed files count as
    /// no token.
    pub fn load(&self) -> Option<Token> {
        let s = try_read_to_string(&self.path)?;
        serde_json::from_str(&s).ok()
    }

    pub fn save(&self, token: &Token) -> Result<()> {
        let s = serde_json::to_string_pretty(token)?;
        write_string(&self.path, &s)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

/// OAuth session: owns the HTTP client, the credentials, and the token store.
pub struct Session {
    client: Client,
    credentials: Credentials,
    store: TokenStore,
    token_url: String,
}

impl Session {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_store(credentials, TokenStore::new())
    }

    pub fn with_store(credentials: Credentials, store: TokenStore) -> Self {
        Self {
            client: Client::new(),
            credentials,
            store,
            token_url: TOKEN_URL.to_string(),
        }
    }

    /// Point the token grants at a different endpoint.
    pub fn with_token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = url.into();
        self
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    /// URL the user opens in a browser to approve access.
    pub fn authorization_url(&self) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code",
            AUTH_URL, self.credentials.client_id, OOB_REDIRECT
        )
    }

    /// Run the one-time authorization: print the approval URL, block until
    /// the user pastes the code, exchange it, and persist the token.
    pub async fn authorize(&self) -> Result<Token> {
        println!("Open this URL in a browser and approve access:");
        println!("  {}", self.authorization_url());
        print!("Paste the authorization code here: ");
        io::stdout().flush()?;

        let mut code = String::new();
        io::stdin().lock().read_line(&mut code)?;

        let token = self.exchange_code(code.trim()).await?;
        self.store.save(&token)?;
        Ok(token)
    }

    /// Exchange an authorization code for a token pair.
    pub async fn exchange_code(&self, code: &str) -> Result<Token> {
        let params = [
            ("grant_type", "authorization_code"),
            ("redirect_uri", OOB_REDIRECT),
            ("code", code),
        ];
        self.token_request(&params).await
    }

    /// Trade a refresh token for a fresh access token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Token> {
        let params = [
            ("grant_type", "refresh_token"),
            ("redirect_uri", OOB_REDIRECT),
            ("refresh_token", refresh_token),
        ];
        self.token_request(&params).await
    }

    /// Return a non-expired access token, refreshing at most once.
    ///
    /// A missing cached token or a rejected refresh grant both require a
    /// fresh `authorize` run.
    pub async fn get_valid_token(&self) -> Result<Token> {
        let Some(cached) = self.store.load() else {
            return Err(YahooError::Auth {
                message: "no cached token; run `yahoo-fbb auth login` first".to_string(),
            });
        };

        if !cached.is_expired() {
            return Ok(cached);
        }

        let refreshed = self.refresh(&cached.refresh_token).await?;
        self.store.save(&refreshed)?;
        Ok(refreshed)
    }

    async fn token_request(&self, params: &[(&str, &str)]) -> Result<Token> {
        let res = self
            .client
            .post(&self.token_url)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(params)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(YahooError::Auth {
                message: format!("token endpoint returned {}: {}", status.as_u16(), body),
            });
        }

        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| YahooError::Parse {
                message: format!("token response: {}", e),
            })?;
        Ok(parsed.into())
    }
}
