//! Expiration date validation

use crate::field::{FieldError, FieldKind, FieldResult, FieldVerdict};
use chrono::{Datelike, Utc};

/// Expiration date validator.
///
/// A date is valid when the month is in `[1, 12]` and `(year, month)` is not
/// strictly before the reference month. The card expires at the end of its
/// printed month, so the current month is still valid. There is no upper
/// bound on the year.
///
/// The reference month defaults to the current UTC month; tests pin it with
/// [`ExpiryField::with_reference`].
#[derive(Debug, Clone)]
pub struct ExpiryField {
	/// (year, month) the date is compared against
	reference: Option<(i32, u32)>,
}

impl ExpiryField {
	/// Creates a validator that compares against the current UTC month.
	pub fn new() -> Self {
		Self { reference: None }
	}

	/// Pins the reference month used for the in-the-past check.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::ExpiryField;
	///
	/// let field = ExpiryField::new().with_reference(2024, 3);
	/// assert!(field.validate_parts(3, 2024).is_valid);
	/// assert!(!field.validate_parts(2, 2024).is_valid);
	/// ```
	pub fn with_reference(mut self, year: i32, month: u32) -> Self {
		self.reference = Some((year, month));
		self
	}

	fn reference(&self) -> (i32, u32) {
		self.reference.unwrap_or_else(|| {
			let now = Utc::now();
			(now.year(), now.month())
		})
	}

	/// Cleans an already-parsed month/year pair, returning the normalized
	/// `MM/YYYY` string.
	pub fn clean_parts(&self, month: u32, year: i32) -> FieldResult<String> {
		if !(1..=12).contains(&month) {
			return Err(FieldError::Validation(
				"Expiration month must be between 1 and 12".to_string(),
			));
		}
		let (ref_year, ref_month) = self.reference();
		if (year, month) < (ref_year, ref_month) {
			return Err(FieldError::Validation(
				"Card expiration date is in the past".to_string(),
			));
		}
		Ok(format!("{month:02}/{year}"))
	}

	/// Validates an already-parsed month/year pair.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::ExpiryField;
	///
	/// let field = ExpiryField::new().with_reference(2024, 3);
	/// assert!(field.validate_parts(1, 2030).is_valid);
	/// assert!(!field.validate_parts(13, 2030).is_valid);
	/// ```
	pub fn validate_parts(&self, month: u32, year: i32) -> FieldVerdict {
		match self.clean_parts(month, year) {
			Ok(normalized) => FieldVerdict::valid(FieldKind::Expiry, normalized),
			Err(_) => FieldVerdict::invalid(FieldKind::Expiry),
		}
	}

	/// Validates raw `MM/YY` or `MM/YYYY` input.
	///
	/// Two-digit years are taken to be in the 2000s. The normalized value is
	/// always `MM/YYYY`.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::ExpiryField;
	///
	/// let field = ExpiryField::new().with_reference(2024, 3);
	/// let verdict = field.validate("04/26");
	/// assert!(verdict.is_valid);
	/// assert_eq!(verdict.normalized.as_deref(), Some("04/2026"));
	/// ```
	pub fn validate(&self, raw: &str) -> FieldVerdict {
		match Self::parse(raw) {
			Some((month, year)) => self.validate_parts(month, year),
			None => FieldVerdict::invalid(FieldKind::Expiry),
		}
	}

	fn parse(raw: &str) -> Option<(u32, i32)> {
		let (month_part, year_part) = raw.trim().split_once('/')?;
		let month: u32 = month_part.trim().parse().ok()?;
		let year_part = year_part.trim();
		let year: i32 = year_part.parse().ok()?;
		let year = if year_part.len() == 2 { 2000 + year } else { year };
		Some((month, year))
	}
}

impl Default for ExpiryField {
	fn default() -> Self {
		Self::new()
	}
}
