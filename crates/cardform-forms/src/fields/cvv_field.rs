//! Security code (CVV/CVC) validation

use crate::field::{CardBrand, FieldError, FieldKind, FieldResult, FieldVerdict};

/// Security code validator.
///
/// The expected length depends on the card brand, which may not be settled
/// while the number is still being typed. The policy here: accept 3 or 4
/// digits while the brand is unknown, then narrow to the brand's exact
/// length ([`CardBrand::security_code_length`]) once it is.
#[derive(Debug, Clone, Default)]
pub struct CvvField {
	brand: Option<CardBrand>,
}

impl CvvField {
	/// Creates a validator with no brand confirmed (3-4 digits accepted).
	pub fn new() -> Self {
		Self { brand: None }
	}

	/// Narrows the accepted length to the given brand's security code
	/// length. [`CardBrand::Unknown`] leaves the lenient 3-4 policy in
	/// place.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::{CardBrand, CvvField};
	///
	/// let field = CvvField::new().for_brand(CardBrand::Amex);
	/// assert!(field.validate("1234").is_valid);
	/// assert!(!field.validate("123").is_valid);
	/// ```
	pub fn for_brand(mut self, brand: CardBrand) -> Self {
		self.brand = match brand {
			CardBrand::Unknown => None,
			confirmed => Some(confirmed),
		};
		self
	}

	/// Cleans the raw input, returning the security code.
	pub fn clean(&self, raw: &str) -> FieldResult<String> {
		let code = raw.trim();
		if code.is_empty() {
			return Err(FieldError::Required("cvv".to_string()));
		}
		if !code.bytes().all(|b| b.is_ascii_digit()) {
			return Err(FieldError::Validation(
				"Security code must contain only digits".to_string(),
			));
		}

		let length_ok = match self.brand {
			Some(brand) => code.len() == brand.security_code_length(),
			None => (3..=4).contains(&code.len()),
		};
		if !length_ok {
			return Err(FieldError::Validation(
				"Security code has the wrong length for this card".to_string(),
			));
		}
		Ok(code.to_string())
	}

	/// Validates the raw security code input.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::CvvField;
	///
	/// let field = CvvField::new();
	/// assert!(field.validate("123").is_valid);
	/// assert!(field.validate("1234").is_valid);
	/// assert!(!field.validate("12").is_valid);
	/// assert!(!field.validate("12a").is_valid);
	/// ```
	pub fn validate(&self, raw: &str) -> FieldVerdict {
		match self.clean(raw) {
			Ok(code) => FieldVerdict::valid(FieldKind::Cvv, code),
			Err(_) => FieldVerdict::invalid(FieldKind::Cvv),
		}
	}
}
