//! Token service boundary and the request value dispatched across it.

use async_trait::async_trait;
use cardform_forms::{CardForm, CardInput, FieldKind, NumberField};

use crate::types::error::TokenError;
use crate::types::token::Token;

/// Immutable tokenization request, built once per submit attempt.
///
/// Construction re-runs every field validator, so a request can only exist
/// for fully-valid card input.
///
/// **Security Note**: This type does not implement `Debug` or `Display`
/// to prevent accidental logging of sensitive card data. Use
/// [`TokenizationRequest::masked_number`] where a loggable handle is needed.
#[derive(Clone)]
pub struct TokenizationRequest {
	pub(crate) number: String,
	pub(crate) name: String,
	pub(crate) expiration_month: u8,
	pub(crate) expiration_year: u16,
	pub(crate) security_code: String,
}

impl TokenizationRequest {
	/// Builds a request from card input, re-validating every field.
	///
	/// Returns [`TokenError::InvalidCardData`] naming the invalid fields if
	/// any validator rejects its value.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_client::TokenizationRequest;
	/// use cardform_forms::CardInput;
	///
	/// let input = CardInput {
	/// 	number: "4242 4242 4242 4242".to_string(),
	/// 	holder_name: "JOHN DOE".to_string(),
	/// 	expiration_month: 4,
	/// 	expiration_year: 2099,
	/// 	cvv: "123".to_string(),
	/// };
	/// let request = TokenizationRequest::from_input(&input).unwrap();
	/// assert_eq!(request.masked_number(), "XXXX-XXXX-XXXX-4242");
	/// ```
	pub fn from_input(input: &CardInput) -> Result<Self, TokenError> {
		let invalid: Vec<FieldKind> = CardForm::validate_input(input)
			.into_iter()
			.filter(|v| !v.is_valid)
			.map(|v| v.kind)
			.collect();
		if !invalid.is_empty() {
			return Err(TokenError::InvalidCardData(invalid));
		}

		Ok(Self {
			number: NumberField::normalize(&input.number),
			name: input.holder_name.trim().to_string(),
			expiration_month: input.expiration_month,
			expiration_year: input.expiration_year,
			security_code: input.cvv.trim().to_string(),
		})
	}

	/// Masked card number, safe for display and logging.
	pub fn masked_number(&self) -> String {
		let last4 = &self.number[self.number.len().saturating_sub(4)..];
		format!("XXXX-XXXX-XXXX-{last4}")
	}
}

/// Async boundary to the remote tokenization vault.
///
/// The returned future resolves exactly once, with either a token or an
/// error, never both, never neither.
#[async_trait]
pub trait TokenService: Send + Sync {
	/// Exchanges validated card data for a single-use token.
	async fn tokenize(&self, request: TokenizationRequest) -> Result<Token, TokenError>;
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn valid_input() -> CardInput {
		CardInput {
			number: "4242 4242 4242 4242".to_string(),
			holder_name: "  JOHN DOE  ".to_string(),
			expiration_month: 4,
			expiration_year: 2099,
			cvv: "123".to_string(),
		}
	}

	#[rstest]
	fn test_request_from_valid_input_normalizes_fields() {
		// Act
		let request = match TokenizationRequest::from_input(&valid_input()) {
			Ok(request) => request,
			Err(err) => panic!("expected a request, got {err}"),
		};

		// Assert
		assert_eq!(request.number, "4242424242424242");
		assert_eq!(request.name, "JOHN DOE");
		assert_eq!(request.masked_number(), "XXXX-XXXX-XXXX-4242");
	}

	#[rstest]
	fn test_request_refused_for_invalid_number() {
		// Arrange
		let mut input = valid_input();
		input.number = "4242".to_string();

		// Act
		let result = TokenizationRequest::from_input(&input);

		// Assert
		match result {
			Err(TokenError::InvalidCardData(fields)) => {
				assert_eq!(fields, vec![FieldKind::Number]);
			}
			_ => panic!("expected InvalidCardData"),
		}
	}

	#[rstest]
	fn test_request_names_every_invalid_field() {
		// Arrange
		let mut input = valid_input();
		input.holder_name = "   ".to_string();
		input.cvv = "1".to_string();

		// Act
		let result = TokenizationRequest::from_input(&input);

		// Assert
		match result {
			Err(TokenError::InvalidCardData(fields)) => {
				assert!(fields.contains(&FieldKind::Name));
				assert!(fields.contains(&FieldKind::Cvv));
				assert!(!fields.contains(&FieldKind::Number));
			}
			_ => panic!("expected InvalidCardData"),
		}
	}
}
