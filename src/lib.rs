//! Cardform: card entry validation and single-use tokenization
//!
//! This facade crate re-exports the workspace members:
//! - `cardform-forms`: per-field validators and the form validation aggregator
//! - `cardform-client`: the tokenization request controller and token service client
//! - `cardform-mocks`: in-memory token service for testing (behind the `mocks` feature)

#[cfg(feature = "forms")]
pub use cardform_forms as forms;

#[cfg(feature = "client")]
pub use cardform_client as client;

#[cfg(feature = "mocks")]
pub use cardform_mocks as mocks;
