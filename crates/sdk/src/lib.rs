//! FieldLink - typed SDK for a field-service business backend
//!
//! One facade type, [`FieldServiceSdk`], exposes CRUD over clients, jobs,
//! estimates, invoices, billing, and team management through a single
//! GraphQL endpoint. Every call runs through the same pipeline: the current
//! bearer credential is injected, responses are classified for auth and
//! validation failures, an expired credential is refreshed once (single
//! flight across concurrent requests) and the original request replayed
//! transparently, and read results are cached and refetched after
//! mutations.
//!
//! ```no_run
//! use std::sync::Arc;
//! use fieldlink::{ClientOptions, FieldServiceSdk};
//!
//! # async fn run() -> Result<(), fieldlink::SdkError> {
//! let options = ClientOptions::new("https://api.example.com/api/graph/")
//!     .with_token("initial-jwt")
//!     .with_on_unauthorized(Arc::new(|| eprintln!("signed out")));
//! let sdk = FieldServiceSdk::new(options)?;
//! let clients = sdk.get_clients().await?;
//! # Ok(())
//! # }
//! ```

pub mod operations;
mod sdk;

pub use fieldlink_application::{
    ClientOptions, ErrorHandler, GraphqlTransport, RefreshFunction, RequestHeaders, SdkError,
    SdkResult, TransportError, UnauthorizedHandler, ValidationHandler,
};
pub use fieldlink_domain as domain;
pub use fieldlink_domain::{
    Account, AccountMember, AcceptInvitationPayload, BusinessProfile, BusinessProfileInput,
    BusinessProfilePayload, CheckoutSession, Client, ClientInput, ClientPayload,
    DeviceRegistrationInput, DevicePayload, DocumentPdfPayload, Estimate, EstimateInput,
    EstimatePayload, ExportDataPayload, FeedbackPayload, FileUploadInput, FileUploadPayload,
    GraphqlError, GraphqlRequest, GraphqlResponse, Invitation, InvitationPayload,
    InvitationResponseInput, InviteUserInput, Invoice, InvoiceInput, InvoicePayload, Job,
    JobFilter, JobInput, JobPayload, MutationStatus, ProrationBehavior, SignupInput,
    SignupPayload, Subscription, SubscriptionChangePreviewPayload, SubscriptionPlan,
    TokenAuthPayload, UserProfile, UserProfileInput, UserProfilePayload, ValidationError,
};
pub use sdk::FieldServiceSdk;
