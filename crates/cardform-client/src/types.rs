//! Shared types for tokenization operations

pub mod error;
pub mod token;
