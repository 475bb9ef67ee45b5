//! Domain error types.
//!
//! These errors represent construction failures in the domain layer. They
//! are distinct from network/IO errors, and "no route found" is not one of
//! them: that is an ordinary search outcome.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A route must contain at least its start station
    #[error("route must have at least one station")]
    EmptyRoute,
}
