//! Luhn checksum over digit strings

/// Returns true if `digits` is a non-empty all-digit string whose Luhn
/// checksum is zero.
///
/// # Examples
///
/// ```
/// use cardform_forms::luhn;
///
/// assert!(luhn::is_valid("4242424242424242"));
/// assert!(!luhn::is_valid("4242424242424241"));
/// assert!(!luhn::is_valid("4242 4242"));
/// assert!(!luhn::is_valid(""));
/// ```
pub fn is_valid(digits: &str) -> bool {
	if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return false;
	}

	// Double every second digit from the right, folding >9 back into a
	// single digit.
	let sum: u32 = digits
		.bytes()
		.rev()
		.enumerate()
		.map(|(i, b)| {
			let d = u32::from(b - b'0');
			if i % 2 == 1 {
				let doubled = d * 2;
				if doubled > 9 { doubled - 9 } else { doubled }
			} else {
				d
			}
		})
		.sum();

	sum % 10 == 0
}
