use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde::Deserialize;
use std::path::Path;
use yup_oauth2::ApplicationSecret;

use crate::token_cache::{CacheLookup, StoredToken, TokenCache};

pub const GMAIL_SCOPE: &str = "https://mail.google.com/";

// Static state value; the code is pasted back by hand, so there is no
// cross-request forgery window to protect against.
const OAUTH_STATE: &str = "state-token";
const OOB_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

// Define a trait for obtaining the one-time authorization code so tests can
// supply a fixed code without real standard-input interaction
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeProvider: Send + Sync {
    async fn obtain_code(&self, auth_url: &str) -> Result<String, Box<dyn std::error::Error>>;
}

/// Production code provider: prints the consent URL and blocks on one line
/// of standard input.
pub struct StdinCodeProvider;

#[async_trait]
impl CodeProvider for StdinCodeProvider {
    async fn obtain_code(&self, auth_url: &str) -> Result<String, Box<dyn std::error::Error>> {
        println!(
            "Go to the following link in your browser then type the authorization code:\n{}",
            auth_url
        );

        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        let code = line.trim().to_string();
        if code.is_empty() {
            return Err("No authorization code entered.".into());
        }
        Ok(code)
    }
}

// Helper function to load the client secret
pub async fn load_client_secret(
    path: &Path,
) -> Result<ApplicationSecret, Box<dyn std::error::Error>> {
    match yup_oauth2::read_application_secret(path).await {
        Ok(secret) => Ok(secret),
        Err(e) => {
            eprintln!("Failed to read {}: {}", path.display(), e);
            eprintln!("Please ensure the client secret file downloaded from the provider console exists, or pass --client-secret.");
            Err("Client secret not found or unreadable.".into())
        }
    }
}

fn redirect_uri(secret: &ApplicationSecret) -> &str {
    secret
        .redirect_uris
        .first()
        .map(String::as_str)
        .unwrap_or(OOB_REDIRECT_URI)
}

/// Build the consent URL the user must visit to grant mail access.
pub fn build_auth_url(secret: &ApplicationSecret) -> Result<String, Box<dyn std::error::Error>> {
    let url = reqwest::Url::parse_with_params(
        &secret.auth_uri,
        &[
            ("client_id", secret.client_id.as_str()),
            ("redirect_uri", redirect_uri(secret)),
            ("response_type", "code"),
            ("scope", GMAIL_SCOPE),
            ("access_type", "offline"),
            ("state", OAUTH_STATE),
        ],
    )?;
    Ok(url.to_string())
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    token_type: Option<String>,
    expires_in: Option<i64>,
    refresh_token: Option<String>,
}

// Exchange the pasted authorization code for a token at the provider's
// token endpoint
async fn exchange_code(
    client: &reqwest::Client,
    secret: &ApplicationSecret,
    code: &str,
) -> Result<StoredToken, Box<dyn std::error::Error>> {
    let params = [
        ("code", code),
        ("client_id", secret.client_id.as_str()),
        ("client_secret", secret.client_secret.as_str()),
        ("redirect_uri", redirect_uri(secret)),
        ("grant_type", "authorization_code"),
    ];

    let response = client.post(&secret.token_uri).form(&params).send().await?;

    if !response.status().is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("Unable to retrieve token from web: {}", error_text).into());
    }

    let token_response: TokenResponse = response.json().await?;
    Ok(StoredToken {
        access_token: token_response.access_token,
        token_type: token_response.token_type,
        refresh_token: token_response.refresh_token,
        expiry: token_response
            .expires_in
            .map(|secs| Utc::now() + Duration::seconds(secs)),
    })
}

/// Return the cached token if one parses, otherwise drive the interactive
/// consent flow and persist the result before returning it. A cached token
/// is reused as-is, without an expiry check.
pub async fn obtain_token<C: CodeProvider>(
    client: &reqwest::Client,
    secret: &ApplicationSecret,
    cache: &TokenCache,
    code_provider: &C,
) -> Result<StoredToken, Box<dyn std::error::Error>> {
    match cache.load() {
        CacheLookup::Found(token) => Ok(token),
        CacheLookup::Missing | CacheLookup::Unreadable(_) => {
            let auth_url = build_auth_url(secret)?;
            let code = code_provider.obtain_code(&auth_url).await?;
            let token = exchange_code(client, secret, &code).await?;

            println!("Saving credential file to: {}", cache.path().display());
            cache.store(&token)?;

            Ok(token)
        }
    }
}
