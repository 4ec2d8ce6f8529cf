//! Card field validation and form aggregation
//!
//! This crate provides the pure validation half of a card entry form:
//! - Per-field validators for card number, holder name, expiry date, and
//!   security code, each producing a [`FieldVerdict`]
//! - Card brand detection from the number prefix (display only)
//! - [`CardForm`], the aggregator that reduces the field verdicts into a
//!   single "form is submittable" signal
//!
//! Validators are pure: they never touch shared state, and a verdict carries
//! no identity beyond the field it describes.

pub mod field;
pub mod fields;
pub mod form;
pub mod luhn;

pub use field::{CardBrand, FieldError, FieldKind, FieldResult, FieldVerdict};
pub use fields::{CvvField, ExpiryField, HolderNameField, NumberField};
pub use form::{CardForm, CardInput};
