//! FieldLink Domain - Core business types
//!
//! This crate defines the domain model for the FieldLink field-service SDK.
//! All types here are pure Rust with no I/O dependencies: entity records as
//! the backend returns them, operation inputs as the backend accepts them,
//! and the GraphQL wire types the transport layer moves around.

pub mod auth;
pub mod billing;
pub mod business;
pub mod clients;
pub mod common;
pub mod devices;
pub mod error;
pub mod estimates;
pub mod feedback;
pub mod files;
pub mod graphql;
pub mod invoices;
pub mod jobs;
pub mod profile;
pub mod team;

pub use auth::{SignupInput, SignupPayload, TokenAuthPayload};
pub use billing::{
    CheckoutSession, ProrationBehavior, Subscription, SubscriptionChangePreview,
    SubscriptionChangePreviewPayload, SubscriptionPlan,
};
pub use business::{Account, BusinessProfile, BusinessProfileInput, BusinessProfilePayload};
pub use clients::{Client, ClientInput, ClientPayload};
pub use common::MutationStatus;
pub use devices::{Device, DevicePayload, DeviceRegistrationInput};
pub use error::ValidationError;
pub use estimates::{Estimate, EstimateInput, EstimatePayload, LineItem, LineItemInput};
pub use feedback::{Feedback, FeedbackPayload};
pub use files::{DocumentPdfPayload, ExportDataPayload, FileUploadInput, FileUploadPayload};
pub use graphql::{ErrorLocation, GraphqlError, GraphqlRequest, GraphqlResponse, PathSegment};
pub use invoices::{Invoice, InvoiceInput, InvoicePayload};
pub use jobs::{Job, JobFilter, JobInput, JobPayload, JobRef};
pub use profile::{UserProfile, UserProfileInput, UserProfilePayload};
pub use team::{
    AccountMember, AcceptInvitationPayload, Invitation, InvitationPayload,
    InvitationResponseInput, InviteUserInput, User,
};
