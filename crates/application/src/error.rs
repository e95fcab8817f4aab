//! SDK error taxonomy.

use fieldlink_domain::{GraphqlError, ValidationError};
use thiserror::Error;

use crate::ports::TransportError;

/// Errors surfaced to SDK callers.
///
/// Classification and recovery happen entirely inside the request pipeline;
/// the facade never re-interprets these, it only propagates them.
#[derive(Debug, Clone, Error)]
pub enum SdkError {
    /// Authorization failed and no refresh was available, or the refresh
    /// itself failed.
    #[error("unauthorized")]
    Unauthorized,

    /// The backend rejected the input; field-attributed and never retried.
    #[error("validation failed: {0:?}")]
    Validation(Vec<ValidationError>),

    /// Domain errors matching neither the auth nor the validation class.
    #[error("GraphQL errors: {0:?}")]
    Graphql(Vec<GraphqlError>),

    /// Network or server failure below the GraphQL layer.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A successful response without the payload field the operation
    /// promises.
    #[error("operation {operation} returned no data")]
    MissingData {
        /// The operation that came back empty.
        operation: String,
    },

    /// A payload that could not be decoded into its typed shape.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Result type alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;
