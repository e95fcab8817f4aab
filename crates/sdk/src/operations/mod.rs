//! The operation catalogue.
//!
//! One module per entity area. Each operation is a GraphQL document plus a
//! builder producing the request descriptor the pipeline sends. The
//! documents mirror the backend schema; the pipeline treats them as opaque.

pub mod account;
pub mod billing;
pub mod clients;
pub mod estimates;
pub mod invoices;
pub mod jobs;
pub mod misc;
pub mod profile;
pub mod team;
