//! Field validators, one module per card form field

pub mod cvv_field;
pub mod expiry_field;
pub mod name_field;
pub mod number_field;

pub use cvv_field::CvvField;
pub use expiry_field::ExpiryField;
pub use name_field::HolderNameField;
pub use number_field::NumberField;
