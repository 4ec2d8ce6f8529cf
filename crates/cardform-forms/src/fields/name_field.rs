//! Cardholder name validation

use crate::field::{FieldError, FieldKind, FieldResult, FieldVerdict};

/// Cardholder name validator.
///
/// A name is valid when it is non-empty after trimming surrounding
/// whitespace. No character-set restriction is applied; names are accepted
/// exactly as the issuer printed them.
#[derive(Debug, Clone, Default)]
pub struct HolderNameField;

impl HolderNameField {
	/// Creates a new holder name validator.
	pub fn new() -> Self {
		Self
	}

	/// Cleans the raw input, returning the trimmed name.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::HolderNameField;
	///
	/// let field = HolderNameField::new();
	/// assert_eq!(field.clean("  Jean-Luc O'Neill  ").unwrap(), "Jean-Luc O'Neill");
	/// assert!(field.clean("   ").is_err());
	/// ```
	pub fn clean(&self, raw: &str) -> FieldResult<String> {
		let trimmed = raw.trim();
		if trimmed.is_empty() {
			Err(FieldError::Required("name".to_string()))
		} else {
			Ok(trimmed.to_string())
		}
	}

	/// Validates the raw name input.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::HolderNameField;
	///
	/// let field = HolderNameField::new();
	/// assert!(field.validate("  Jean-Luc O'Neill  ").is_valid);
	/// assert!(!field.validate("   ").is_valid);
	/// ```
	pub fn validate(&self, raw: &str) -> FieldVerdict {
		match self.clean(raw) {
			Ok(name) => FieldVerdict::valid(FieldKind::Name, name),
			Err(_) => FieldVerdict::invalid(FieldKind::Name),
		}
	}
}
