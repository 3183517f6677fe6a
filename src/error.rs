#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the crate.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
///
/// Every extraction error is fatal: the pass is a pure deterministic
/// function of its input, so callers must not retry unchanged input.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// The requested target emission language has no registered adapter.
    #[from(ignore)]
    #[display("Language not supported: {_0}")]
    LanguageNotSupported(String),

    /// A second `authenticates` endpoint was found; only one is allowed.
    #[from(ignore)]
    #[display("Multiple authenticating endpoints: {first} and {second}")]
    MultipleAuthEndpoints {
        /// URL path of the endpoint that authenticated first.
        first: String,
        /// URL path of the offending second endpoint.
        second: String,
    },

    /// The authenticating endpoint does not return a named-model response.
    #[from(ignore)]
    #[display("Authenticating endpoint {endpoint} has non-model response kind {kind}")]
    InvalidAuthResponse {
        /// URL path of the authenticating endpoint.
        endpoint: String,
        /// The response kind that was actually classified.
        kind: String,
    },

    /// An object-keyed sample value was a null literal.
    #[from(ignore)]
    #[display("Null value for property '{_0}': cannot infer its type")]
    NullPropertyValue(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because several
/// variants carry plain `String`s, which do not implement
/// `std::error::Error`, causing auto-derived `source()` implementations to
/// fail compilation.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
