//! Card number validation with brand detection

use crate::field::{CardBrand, FieldError, FieldKind, FieldResult, FieldVerdict};
use crate::luhn;

/// Card number validator.
///
/// Raw input is normalized by stripping every non-digit character, so
/// spaced or hyphenated entry is accepted. A number is valid when the
/// normalized form is 12-19 digits long and passes the Luhn checksum.
///
/// Brand detection is exposed separately: it works on partial input and
/// never affects validity.
#[derive(Debug, Clone, Default)]
pub struct NumberField;

impl NumberField {
	/// Creates a new number validator.
	pub fn new() -> Self {
		Self
	}

	/// Strips every non-digit character from the raw input.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::NumberField;
	///
	/// assert_eq!(NumberField::normalize("4242 4242 4242 4242"), "4242424242424242");
	/// assert_eq!(NumberField::normalize("4111-1111"), "41111111");
	/// ```
	pub fn normalize(raw: &str) -> String {
		raw.chars().filter(char::is_ascii_digit).collect()
	}

	/// Detects the card brand from the raw input, partial or complete.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::{CardBrand, NumberField};
	///
	/// assert_eq!(NumberField::brand("4242 42"), CardBrand::Visa);
	/// assert_eq!(NumberField::brand("37"), CardBrand::Amex);
	/// ```
	pub fn brand(raw: &str) -> CardBrand {
		CardBrand::detect(&Self::normalize(raw))
	}

	/// Cleans the raw input, returning the normalized digit string or a
	/// message describing why it was rejected.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::NumberField;
	///
	/// let field = NumberField::new();
	/// assert_eq!(field.clean("4242 4242 4242 4242").unwrap(), "4242424242424242");
	/// assert!(field.clean("4242").is_err());
	/// ```
	pub fn clean(&self, raw: &str) -> FieldResult<String> {
		let digits = Self::normalize(raw);
		if digits.is_empty() {
			return Err(FieldError::Required("number".to_string()));
		}
		if !(12..=19).contains(&digits.len()) {
			return Err(FieldError::Validation(
				"Card number must be 12 to 19 digits".to_string(),
			));
		}
		if !luhn::is_valid(&digits) {
			return Err(FieldError::Validation(
				"Enter a valid card number".to_string(),
			));
		}
		Ok(digits)
	}

	/// Validates the raw card number input.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::NumberField;
	///
	/// let field = NumberField::new();
	/// assert!(field.validate("4242 4242 4242 4242").is_valid);
	/// assert!(!field.validate("4242 4242 4242 4241").is_valid);
	/// assert!(!field.validate("4242").is_valid);
	/// ```
	pub fn validate(&self, raw: &str) -> FieldVerdict {
		match self.clean(raw) {
			Ok(digits) => FieldVerdict::valid(FieldKind::Number, digits),
			Err(_) => FieldVerdict::invalid(FieldKind::Number),
		}
	}
}
