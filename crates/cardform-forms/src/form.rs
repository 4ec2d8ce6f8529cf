//! Form validation aggregator

use crate::field::{FieldKind, FieldVerdict};
use crate::fields::{CvvField, ExpiryField, HolderNameField, NumberField};
use std::collections::HashMap;

/// The fields a submittable card form must have valid verdicts for.
const REQUIRED_FIELDS: [FieldKind; 4] = [
	FieldKind::Number,
	FieldKind::Name,
	FieldKind::Expiry,
	FieldKind::Cvv,
];

/// Raw card data collected by the form.
///
/// Ephemeral: held only while the form is on screen, never persisted.
/// Deliberately implements neither `Debug` nor `Display` nor any
/// serialization, so card data cannot end up in logs by accident.
#[derive(Clone)]
pub struct CardInput {
	/// Card number, separators allowed
	pub number: String,
	/// Cardholder name as entered
	pub holder_name: String,
	/// Expiration month (1-12)
	pub expiration_month: u8,
	/// Expiration year (4 digits)
	pub expiration_year: u16,
	/// Security code
	pub cvv: String,
}

/// Aggregates per-field verdicts into a single submittable signal.
///
/// The form holds an explicit field-kind-to-verdict map, populated by
/// [`CardForm::record`] on every field edit. [`CardForm::is_submittable`] is
/// a pure AND over the four required fields: flipping any one verdict to
/// invalid flips the aggregate to false.
///
/// # Examples
///
/// ```
/// use cardform_forms::{CardForm, FieldKind, FieldVerdict};
///
/// let mut form = CardForm::new();
/// assert!(!form.is_submittable());
///
/// form.record(FieldVerdict::valid(FieldKind::Number, "4242424242424242"));
/// form.record(FieldVerdict::valid(FieldKind::Name, "JOHN DOE"));
/// form.record(FieldVerdict::valid(FieldKind::Expiry, "04/2030"));
/// form.record(FieldVerdict::valid(FieldKind::Cvv, "123"));
/// assert!(form.is_submittable());
///
/// form.record(FieldVerdict::invalid(FieldKind::Cvv));
/// assert!(!form.is_submittable());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CardForm {
	verdicts: HashMap<FieldKind, FieldVerdict>,
}

impl CardForm {
	/// Creates an empty form. No field has a verdict yet, so the form is
	/// not submittable.
	pub fn new() -> Self {
		Self {
			verdicts: HashMap::new(),
		}
	}

	/// Records the latest verdict for its field, replacing any previous
	/// one.
	pub fn record(&mut self, verdict: FieldVerdict) {
		self.verdicts.insert(verdict.kind, verdict);
	}

	/// Returns the latest verdict recorded for `kind`, if any.
	pub fn verdict(&self, kind: FieldKind) -> Option<&FieldVerdict> {
		self.verdicts.get(&kind)
	}

	/// True iff every required field has a valid verdict.
	pub fn is_submittable(&self) -> bool {
		REQUIRED_FIELDS
			.iter()
			.all(|kind| self.verdicts.get(kind).is_some_and(|v| v.is_valid))
	}

	/// Runs all four validators over a complete [`CardInput`].
	///
	/// The CVV validator is narrowed to the brand detected from the number.
	/// Used by the submit path to re-validate defensively even when the
	/// aggregator already gated the submit control.
	pub fn validate_input(input: &CardInput) -> Vec<FieldVerdict> {
		Self::validate_input_with(input, ExpiryField::new())
	}

	/// Like [`CardForm::validate_input`] with a pinned expiry reference,
	/// for deterministic tests.
	pub fn validate_input_at(input: &CardInput, year: i32, month: u32) -> Vec<FieldVerdict> {
		Self::validate_input_with(input, ExpiryField::new().with_reference(year, month))
	}

	fn validate_input_with(input: &CardInput, expiry: ExpiryField) -> Vec<FieldVerdict> {
		let brand = NumberField::brand(&input.number);
		vec![
			NumberField::new().validate(&input.number),
			HolderNameField::new().validate(&input.holder_name),
			expiry.validate_parts(u32::from(input.expiration_month), i32::from(input.expiration_year)),
			CvvField::new().for_brand(brand).validate(&input.cvv),
		]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn all_valid() -> CardForm {
		let mut form = CardForm::new();
		form.record(FieldVerdict::valid(FieldKind::Number, "4242424242424242"));
		form.record(FieldVerdict::valid(FieldKind::Name, "JOHN DOE"));
		form.record(FieldVerdict::valid(FieldKind::Expiry, "04/2030"));
		form.record(FieldVerdict::valid(FieldKind::Cvv, "123"));
		form
	}

	#[rstest]
	fn test_empty_form_is_not_submittable() {
		assert!(!CardForm::new().is_submittable());
	}

	#[rstest]
	fn test_all_valid_is_submittable() {
		assert!(all_valid().is_submittable());
	}

	#[rstest]
	#[case(FieldKind::Number)]
	#[case(FieldKind::Name)]
	#[case(FieldKind::Expiry)]
	#[case(FieldKind::Cvv)]
	fn test_flipping_any_verdict_flips_the_aggregate(#[case] kind: FieldKind) {
		// Arrange
		let mut form = all_valid();

		// Act
		form.record(FieldVerdict::invalid(kind));

		// Assert
		assert!(!form.is_submittable());
	}

	#[rstest]
	fn test_re_recording_a_field_replaces_its_verdict() {
		// Arrange
		let mut form = all_valid();
		form.record(FieldVerdict::invalid(FieldKind::Cvv));
		assert!(!form.is_submittable());

		// Act: the field is edited back to a valid value
		form.record(FieldVerdict::valid(FieldKind::Cvv, "456"));

		// Assert
		assert!(form.is_submittable());
	}

	#[rstest]
	fn test_validate_input_all_fields_valid() {
		// Arrange
		let input = CardInput {
			number: "4242 4242 4242 4242".to_string(),
			holder_name: "JOHN DOE".to_string(),
			expiration_month: 4,
			expiration_year: 2030,
			cvv: "123".to_string(),
		};

		// Act
		let verdicts = CardForm::validate_input_at(&input, 2024, 3);

		// Assert
		assert_eq!(verdicts.len(), 4);
		assert!(verdicts.iter().all(|v| v.is_valid));
	}

	#[rstest]
	fn test_validate_input_narrows_cvv_by_brand() {
		// Arrange: Amex number with a 3-digit code
		let input = CardInput {
			number: "378282246310005".to_string(),
			holder_name: "JOHN DOE".to_string(),
			expiration_month: 4,
			expiration_year: 2030,
			cvv: "123".to_string(),
		};

		// Act
		let verdicts = CardForm::validate_input_at(&input, 2024, 3);

		// Assert: only the CVV verdict fails
		let cvv = verdicts.iter().find(|v| v.kind == FieldKind::Cvv);
		assert!(cvv.is_some_and(|v| !v.is_valid));
		assert!(
			verdicts
				.iter()
				.filter(|v| v.kind != FieldKind::Cvv)
				.all(|v| v.is_valid)
		);
	}

	#[rstest]
	fn test_validate_input_reports_expired_date() {
		// Arrange
		let input = CardInput {
			number: "4242424242424242".to_string(),
			holder_name: "JOHN DOE".to_string(),
			expiration_month: 2,
			expiration_year: 2024,
			cvv: "123".to_string(),
		};

		// Act
		let verdicts = CardForm::validate_input_at(&input, 2024, 3);

		// Assert
		let expiry = verdicts.iter().find(|v| v.kind == FieldKind::Expiry);
		assert!(expiry.is_some_and(|v| !v.is_valid));
	}
}
