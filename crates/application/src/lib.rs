//! FieldLink Application - request pipeline and auth core
//!
//! The interception layer between the typed facade and the transport: header
//! injection from the credential cell, response classification (auth vs.
//! validation vs. transport), single-flight credential refresh with
//! transparent replay, and the query cache with post-mutation refetching.

pub mod auth;
pub mod cache;
pub mod classify;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod ports;

pub use auth::{CredentialCell, RefreshCoordinator};
pub use cache::QueryCache;
pub use classify::{AUTH_SIGNALS, Classification, classify_errors, classify_transport_failure};
pub use error::{SdkError, SdkResult};
pub use options::{
    ClientOptions, ErrorHandler, RefreshFunction, UnauthorizedHandler, ValidationHandler,
};
pub use pipeline::RequestPipeline;
pub use ports::{GraphqlTransport, RequestHeaders, TransportError};
