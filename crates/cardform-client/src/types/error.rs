//! Error types for tokenization operations.

use cardform_forms::FieldKind;
use thiserror::Error;

fn join_fields(fields: &[FieldKind]) -> String {
	fields
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(", ")
}

/// Tokenization operation errors.
#[derive(Debug, Error)]
pub enum TokenError {
	/// Card input failed validation; named fields are invalid. Raised
	/// locally before dispatch, never sent to the token service.
	#[error("Invalid card data: {}", join_fields(.0))]
	InvalidCardData(Vec<FieldKind>),

	/// Opaque failure reported by the token service
	#[error("Token service error: {0}")]
	Service(String),

	/// Network error
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Serialization error
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}
