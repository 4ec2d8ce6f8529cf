//! Mock token service for testing the TokenService trait.

use async_trait::async_trait;
use cardform_client::{Token, TokenError, TokenService, TokenizationRequest};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Mock token service for testing.
///
/// Issues tokens from memory and can be configured to fail or to hold a
/// request in flight for a scripted latency, so tests can exercise the
/// duplicate-submit and dismissal paths.
pub struct MockTokenService {
	fail_next: Arc<RwLock<bool>>,
	delay: Arc<RwLock<Option<Duration>>>,
	dispatched: Arc<RwLock<usize>>,
	issued: Arc<RwLock<Vec<Token>>>,
}

impl MockTokenService {
	/// Creates a new mock service.
	pub fn new() -> Self {
		Self {
			fail_next: Arc::new(RwLock::new(false)),
			delay: Arc::new(RwLock::new(None)),
			dispatched: Arc::new(RwLock::new(0)),
			issued: Arc::new(RwLock::new(Vec::new())),
		}
	}

	/// Configures whether the next tokenize call should fail.
	///
	/// # Arguments
	///
	/// * `fail` - If true, the next call returns a service error
	pub async fn set_fail_next(&self, fail: bool) {
		*self.fail_next.write().await = fail;
	}

	/// Holds every tokenize call for the given latency before resolving,
	/// keeping the request observably in flight.
	pub async fn set_delay(&self, delay: Duration) {
		*self.delay.write().await = Some(delay);
	}

	/// Number of requests dispatched to the service so far.
	pub async fn dispatched_count(&self) -> usize {
		*self.dispatched.read().await
	}

	/// Tokens issued so far, oldest first.
	pub async fn issued_tokens(&self) -> Vec<Token> {
		self.issued.read().await.clone()
	}

	/// Clears all recorded state.
	pub async fn clear(&self) {
		*self.fail_next.write().await = false;
		*self.delay.write().await = None;
		*self.dispatched.write().await = 0;
		self.issued.write().await.clear();
	}
}

impl Default for MockTokenService {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl TokenService for MockTokenService {
	async fn tokenize(&self, request: TokenizationRequest) -> Result<Token, TokenError> {
		*self.dispatched.write().await += 1;

		let delay = *self.delay.read().await;
		if let Some(delay) = delay {
			tokio::time::sleep(delay).await;
		}

		let mut fail_next = self.fail_next.write().await;
		if *fail_next {
			*fail_next = false;
			return Err(TokenError::Service("Mock configured to fail".to_string()));
		}

		let token = Token {
			id: format!("tok_mock_{}", Uuid::new_v4()),
			created_at: chrono::Utc::now(),
			masked_number: request.masked_number(),
		};
		self.issued.write().await.push(token.clone());
		Ok(token)
	}
}
