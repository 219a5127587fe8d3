//! Errors for malformed check configuration.

/// A check was built from configuration that can never be satisfied.
///
/// These are programming mistakes in a schema, not problems with the data
/// being validated, so they are rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    /// `string_enum` was given no candidate values.
    #[error("string enum requires at least one candidate value")]
    EmptyEnum,

    /// `either` was given no alternatives.
    #[error("either requires at least one alternative check")]
    EmptyEither,
}
