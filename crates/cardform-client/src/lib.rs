//! Tokenization request controller and token service client
//!
//! This crate owns the submit lifecycle of a card entry form:
//! - [`TokenizationRequest`], an immutable value built once per submit
//!   attempt from fully-valid card input
//! - [`TokenService`], the async boundary to the remote tokenization vault,
//!   with a concrete [`HttpTokenService`] implementation
//! - [`CardFormController`], the state machine that enforces at-most-one
//!   in-flight request and resolves exactly one outcome per request

pub mod controller;
pub mod http;
pub mod service;
pub mod types;

pub use controller::{CardFormController, CardFormDelegate, LifecycleState, UiState};
pub use http::{HttpTokenService, TokenServiceConfig};
pub use service::{TokenService, TokenizationRequest};
pub use types::error::TokenError;
pub use types::token::Token;
