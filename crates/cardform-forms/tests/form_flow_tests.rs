//! End-to-end validation flow: keystrokes to the submittable signal.

use cardform_forms::{
	CardBrand, CardForm, CvvField, ExpiryField, FieldKind, HolderNameField, NumberField,
};

#[test]
fn test_form_becomes_submittable_as_fields_validate() {
	let mut form = CardForm::new();
	let number = NumberField::new();
	let name = HolderNameField::new();
	let expiry = ExpiryField::new().with_reference(2024, 3);

	// Partial number: verdict invalid, form stays gated.
	form.record(number.validate("4242 4242"));
	assert!(!form.is_submittable());

	// The full entry sequence.
	form.record(number.validate("4242 4242 4242 4242"));
	form.record(name.validate("JOHN DOE"));
	form.record(expiry.validate("04/30"));
	let brand = NumberField::brand("4242 4242 4242 4242");
	form.record(CvvField::new().for_brand(brand).validate("123"));
	assert!(form.is_submittable());

	// Backspacing the CVV re-gates the form on the next verdict.
	form.record(CvvField::new().for_brand(brand).validate("12"));
	assert!(!form.is_submittable());
}

#[test]
fn test_brand_narrows_cvv_mid_entry() {
	// While only "3" is typed the brand is unknown, so a 3-digit code passes.
	assert_eq!(NumberField::brand("3"), CardBrand::Unknown);
	let lenient = CvvField::new().for_brand(NumberField::brand("3"));
	assert!(lenient.validate("123").is_valid);

	// One more digit settles Amex and the same code stops passing.
	assert_eq!(NumberField::brand("37"), CardBrand::Amex);
	let narrowed = CvvField::new().for_brand(NumberField::brand("37"));
	assert!(!narrowed.validate("123").is_valid);
	assert!(narrowed.validate("1234").is_valid);
}
