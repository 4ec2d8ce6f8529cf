//! HTTP-backed token service.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::service::{TokenService, TokenizationRequest};
use crate::types::error::TokenError;
use crate::types::token::Token;

/// Default per-request timeout. The vault is the only remote call in the
/// submit path, so a stuck request would otherwise hold the form in flight
/// indefinitely.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`HttpTokenService`].
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
	endpoint: String,
	public_key: String,
	timeout: Duration,
}

impl TokenServiceConfig {
	/// Creates a config for the given vault endpoint and public API key,
	/// with the default 30-second request timeout.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_client::TokenServiceConfig;
	///
	/// let config = TokenServiceConfig::new("https://vault.example.com/tokens", "pkey_test");
	/// ```
	pub fn new(endpoint: impl Into<String>, public_key: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
			public_key: public_key.into(),
			timeout: DEFAULT_TIMEOUT,
		}
	}

	/// Overrides the per-request timeout.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}
}

// Wire shape of a successful vault response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
	id: String,
	#[serde(default = "chrono::Utc::now")]
	created_at: chrono::DateTime<chrono::Utc>,
}

/// Token service client speaking JSON over HTTPS to the vault endpoint.
pub struct HttpTokenService {
	config: TokenServiceConfig,
	client: reqwest::Client,
}

impl HttpTokenService {
	/// Builds the client with the configured timeout.
	pub fn new(config: TokenServiceConfig) -> Result<Self, TokenError> {
		let client = reqwest::Client::builder()
			.timeout(config.timeout)
			.build()?;
		Ok(Self { config, client })
	}
}

#[async_trait]
impl TokenService for HttpTokenService {
	async fn tokenize(&self, request: TokenizationRequest) -> Result<Token, TokenError> {
		let body = serde_json::json!({
			"card": {
				"number": request.number,
				"name": request.name,
				"expiration_month": request.expiration_month,
				"expiration_year": request.expiration_year,
				"security_code": request.security_code,
			}
		});

		let response = self
			.client
			.post(&self.config.endpoint)
			.bearer_auth(&self.config.public_key)
			.json(&body)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			let detail = response.text().await.unwrap_or_default();
			tracing::warn!(%status, "token service rejected the request");
			return Err(TokenError::Service(format!(
				"token service returned {status}: {detail}"
			)));
		}

		let wire: TokenResponse = response.json().await?;
		Ok(Token {
			id: wire.id,
			created_at: wire.created_at,
			masked_number: request.masked_number(),
		})
	}
}
