//! Single-use tokenization credential.

/// Card token returned by the token service.
///
/// The opaque single-use credential exchanged for raw card data. The masked
/// number is the only card-derived data it carries, safe for display and
/// logging.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Token {
	/// Unique token ID
	pub id: String,
	/// Creation timestamp
	pub created_at: chrono::DateTime<chrono::Utc>,
	/// Masked display (e.g., "XXXX-XXXX-XXXX-4242")
	pub masked_number: String,
}
