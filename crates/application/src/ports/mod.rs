//! Port definitions (interfaces)
//!
//! Ports define the boundary between the application core and the network.
//! The transport port is implemented by the reqwest adapter in the
//! infrastructure layer and by scripted fakes in tests.

mod transport;

pub use transport::{GraphqlTransport, RequestHeaders, TransportError};
