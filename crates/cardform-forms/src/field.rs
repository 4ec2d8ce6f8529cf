//! Core field types shared by the validators and the form aggregator

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

// Brand prefix patterns, matched against the normalized digit string.
//
// Mastercard covers both the classic 51-55 range and the 2221-2720 range
// introduced in 2017.
static AMEX_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^3[47]").expect("AMEX_REGEX: invalid regex pattern"));

static JCB_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^35(2[89]|[3-8][0-9])").expect("JCB_REGEX: invalid regex pattern"));

static DINERS_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(30[0-5]|36|38)").expect("DINERS_REGEX: invalid regex pattern"));

static VISA_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^4").expect("VISA_REGEX: invalid regex pattern"));

static MASTERCARD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(5[1-5]|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)")
		.expect("MASTERCARD_REGEX: invalid regex pattern")
});

static DISCOVER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(6011|65|64[4-9])").expect("DISCOVER_REGEX: invalid regex pattern")
});

/// The four fields a card entry form collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
	/// Card number (PAN)
	Number,
	/// Cardholder name as printed on the card
	Name,
	/// Expiration month and year
	Expiry,
	/// Security code (CVV/CVC)
	Cvv,
}

impl std::fmt::Display for FieldKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			FieldKind::Number => write!(f, "number"),
			FieldKind::Name => write!(f, "name"),
			FieldKind::Expiry => write!(f, "expiry"),
			FieldKind::Cvv => write!(f, "cvv"),
		}
	}
}

/// Field validation errors.
#[derive(Debug, Error)]
pub enum FieldError {
	/// Value failed a validation rule
	#[error("{0}")]
	Validation(String),

	/// Required field was empty
	#[error("{0} is required")]
	Required(String),
}

/// Result alias for field operations.
pub type FieldResult<T> = Result<T, FieldError>;

/// Verdict produced by a single field validator.
///
/// A verdict is recomputed on every edit to its source field and carries no
/// identity beyond the field it describes. When the value is valid,
/// `normalized` holds the canonical form (digits only for the number, trimmed
/// for the name, `MM/YYYY` for the expiry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldVerdict {
	/// Which field this verdict describes
	pub kind: FieldKind,
	/// Whether the raw value passed validation
	pub is_valid: bool,
	/// Canonical form of the value, present only for valid verdicts
	pub normalized: Option<String>,
}

impl FieldVerdict {
	/// Creates a valid verdict carrying the normalized value.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::{FieldKind, FieldVerdict};
	///
	/// let verdict = FieldVerdict::valid(FieldKind::Name, "JOHN DOE");
	/// assert!(verdict.is_valid);
	/// assert_eq!(verdict.normalized.as_deref(), Some("JOHN DOE"));
	/// ```
	pub fn valid(kind: FieldKind, normalized: impl Into<String>) -> Self {
		Self {
			kind,
			is_valid: true,
			normalized: Some(normalized.into()),
		}
	}

	/// Creates an invalid verdict for the given field.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::{FieldKind, FieldVerdict};
	///
	/// let verdict = FieldVerdict::invalid(FieldKind::Cvv);
	/// assert!(!verdict.is_valid);
	/// assert!(verdict.normalized.is_none());
	/// ```
	pub fn invalid(kind: FieldKind) -> Self {
		Self {
			kind,
			is_valid: false,
			normalized: None,
		}
	}
}

/// Card brand, derived from the number prefix.
///
/// The brand is used for display and for narrowing the expected security
/// code length. It never affects number validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardBrand {
	Visa,
	Mastercard,
	Amex,
	Discover,
	Jcb,
	DinersClub,
	Unknown,
}

impl CardBrand {
	/// Detects the brand from a digit string (partial input is fine).
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::CardBrand;
	///
	/// assert_eq!(CardBrand::detect("4242424242424242"), CardBrand::Visa);
	/// assert_eq!(CardBrand::detect("5555"), CardBrand::Mastercard);
	/// assert_eq!(CardBrand::detect("34"), CardBrand::Amex);
	/// assert_eq!(CardBrand::detect("9999"), CardBrand::Unknown);
	/// ```
	pub fn detect(digits: &str) -> Self {
		// Amex/JCB/Diners first: their prefixes are more specific than the
		// single-digit Visa prefix.
		if AMEX_REGEX.is_match(digits) {
			CardBrand::Amex
		} else if JCB_REGEX.is_match(digits) {
			CardBrand::Jcb
		} else if DINERS_REGEX.is_match(digits) {
			CardBrand::DinersClub
		} else if VISA_REGEX.is_match(digits) {
			CardBrand::Visa
		} else if MASTERCARD_REGEX.is_match(digits) {
			CardBrand::Mastercard
		} else if DISCOVER_REGEX.is_match(digits) {
			CardBrand::Discover
		} else {
			CardBrand::Unknown
		}
	}

	/// Human-readable brand name for display.
	pub fn display_name(&self) -> &'static str {
		match self {
			CardBrand::Visa => "Visa",
			CardBrand::Mastercard => "Mastercard",
			CardBrand::Amex => "American Express",
			CardBrand::Discover => "Discover",
			CardBrand::Jcb => "JCB",
			CardBrand::DinersClub => "Diners Club",
			CardBrand::Unknown => "Card",
		}
	}

	/// Expected security code length for this brand.
	///
	/// # Examples
	///
	/// ```
	/// use cardform_forms::CardBrand;
	///
	/// assert_eq!(CardBrand::Amex.security_code_length(), 4);
	/// assert_eq!(CardBrand::Visa.security_code_length(), 3);
	/// ```
	pub fn security_code_length(&self) -> usize {
		match self {
			CardBrand::Amex => 4,
			_ => 3,
		}
	}
}
