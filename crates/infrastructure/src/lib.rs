//! FieldLink Infrastructure - network adapters
//!
//! Implements the application layer's transport port over reqwest.

pub mod transport;

pub use transport::HttpGraphqlTransport;
