//! The typed facade over the request pipeline.

use std::sync::Arc;

use fieldlink_application::{
    ClientOptions, GraphqlTransport, RequestPipeline, SdkError, SdkResult,
};
use fieldlink_domain::{
    Account, AccountMember, AcceptInvitationPayload, BusinessProfile, BusinessProfileInput,
    BusinessProfilePayload, CheckoutSession, Client, ClientInput, ClientPayload,
    DeviceRegistrationInput, DevicePayload, DocumentPdfPayload, Estimate, EstimateInput,
    EstimatePayload, ExportDataPayload, FeedbackPayload, FileUploadInput, FileUploadPayload,
    GraphqlRequest, Invitation, InvitationPayload, InvitationResponseInput, InviteUserInput,
    Invoice, InvoiceInput, InvoicePayload, Job, JobFilter, JobInput, JobPayload, MutationStatus,
    ProrationBehavior, SignupInput, SignupPayload, Subscription, SubscriptionChangePreviewPayload,
    SubscriptionPlan, TokenAuthPayload, UserProfile, UserProfileInput, UserProfilePayload,
};
use fieldlink_infrastructure::HttpGraphqlTransport;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::operations;

/// Decodes one payload field out of an operation's `data` object.
fn decode<T: DeserializeOwned>(
    data: serde_json::Value,
    operation: &str,
    field: &str,
) -> SdkResult<T> {
    let payload = data
        .get(field)
        .filter(|value| !value.is_null())
        .cloned()
        .ok_or_else(|| SdkError::MissingData {
            operation: operation.to_string(),
        })?;
    serde_json::from_value(payload).map_err(|error| SdkError::Decode(error.to_string()))
}

/// Like [`decode`], but a missing or null field is a valid empty result.
fn decode_optional<T: DeserializeOwned>(
    data: serde_json::Value,
    field: &str,
) -> SdkResult<Option<T>> {
    match data.get(field) {
        None => Ok(None),
        Some(value) if value.is_null() => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|error| SdkError::Decode(error.to_string())),
    }
}

/// The FieldLink SDK: one async method per backend operation.
///
/// All methods run through the same pipeline (credential injection,
/// classification, single-flight refresh with replay, query cache). The
/// facade adds typing and refetch wiring; it never interprets errors
/// itself.
#[derive(Debug)]
pub struct FieldServiceSdk {
    pipeline: RequestPipeline,
}

impl FieldServiceSdk {
    /// Builds an SDK posting to `options.base_url` over HTTPS.
    ///
    /// # Errors
    /// Returns a transport error when the base URL does not parse or the
    /// HTTP client cannot be constructed.
    pub fn new(options: ClientOptions) -> SdkResult<Self> {
        let transport = Arc::new(HttpGraphqlTransport::new(&options.base_url)?);
        Ok(Self::with_transport(transport, options))
    }

    /// Builds an SDK over a caller-supplied transport.
    ///
    /// The seam for in-memory transports in tests and for callers with
    /// bespoke HTTP stacks.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn GraphqlTransport>, options: ClientOptions) -> Self {
        Self {
            pipeline: RequestPipeline::new(transport, options),
        }
    }

    /// The underlying pipeline, for advanced inspection (cache state,
    /// credential cell).
    #[must_use]
    pub const fn pipeline(&self) -> &RequestPipeline {
        &self.pipeline
    }

    // --- credential lifecycle ---

    /// Adopts a bearer token. No network traffic.
    pub async fn set_token(&self, token: impl Into<String>) {
        self.pipeline.set_token(Some(token.into())).await;
    }

    /// Drops the credential and every cached read result.
    pub async fn logout(&self) {
        self.pipeline.logout().await;
    }

    /// Runs the configured refresh hook and adopts the new credential.
    ///
    /// Joins any refresh already in flight. Returns `true` when a fresh
    /// token was adopted; otherwise the unauthorized hook has fired.
    pub async fn refresh_token(&self) -> bool {
        self.pipeline.refresh_credential().await
    }

    /// Exchanges credentials for a bearer token and adopts it on success.
    ///
    /// # Errors
    /// Propagates pipeline failures; a rejected login typically surfaces
    /// as a GraphQL error rather than unauthorized.
    pub async fn token_auth(&self, email: &str, password: &str) -> SdkResult<TokenAuthPayload> {
        let request = operations::account::token_auth(email, password);
        let data = self.pipeline.execute(&request).await?;
        let payload: TokenAuthPayload = decode(data, &request.operation_name, "tokenAuth")?;
        if let Some(token) = &payload.token {
            debug!("adopting credential from tokenAuth");
            self.pipeline.set_token(Some(token.clone())).await;
        }
        Ok(payload)
    }

    // --- clients ---

    /// Lists all clients of the account.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn get_clients(&self) -> SdkResult<Vec<Client>> {
        let request = operations::clients::get_clients();
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "clients")
    }

    /// Fetches one client.
    ///
    /// # Errors
    /// Propagates pipeline failures; an unknown id surfaces as missing
    /// data.
    pub async fn get_client(&self, id: &str) -> SdkResult<Client> {
        let request = operations::clients::get_client(id);
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "client")
    }

    /// Creates a client and refetches the client list.
    ///
    /// # Errors
    /// Propagates pipeline failures, including validation rejections.
    pub async fn create_client(&self, input: &ClientInput) -> SdkResult<ClientPayload> {
        let request = operations::clients::create_client(input);
        let refetch = [operations::clients::get_clients()];
        let data = self.pipeline.mutate(&request, &refetch).await?;
        decode(data, &request.operation_name, "createClient")
    }

    /// Updates a client and refetches the list plus the client itself.
    ///
    /// # Errors
    /// Propagates pipeline failures, including validation rejections.
    pub async fn update_client(&self, id: &str, input: &ClientInput) -> SdkResult<ClientPayload> {
        let request = operations::clients::update_client(id, input);
        let refetch = [
            operations::clients::get_clients(),
            operations::clients::get_client(id),
        ];
        let data = self.pipeline.mutate(&request, &refetch).await?;
        decode(data, &request.operation_name, "updateClient")
    }

    /// Deletes a client and refetches the client list.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn delete_client(&self, id: &str) -> SdkResult<MutationStatus> {
        let request = operations::clients::delete_client(id);
        let refetch = [operations::clients::get_clients()];
        let data = self.pipeline.mutate(&request, &refetch).await?;
        decode(data, &request.operation_name, "deleteClient")
    }

    // --- jobs ---

    /// Lists jobs, optionally filtered by status, client, or assignee.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn get_jobs(&self, filter: Option<&JobFilter>) -> SdkResult<Vec<Job>> {
        let request = operations::jobs::get_jobs(filter);
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "jobs")
    }

    /// Fetches one job with its client and attached documents.
    ///
    /// # Errors
    /// Propagates pipeline failures; an unknown id surfaces as missing
    /// data.
    pub async fn get_job(&self, id: &str) -> SdkResult<Job> {
        let request = operations::jobs::get_job(id);
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "job")
    }

    /// Creates a job and refetches the job and client lists.
    ///
    /// # Errors
    /// Propagates pipeline failures, including validation rejections.
    pub async fn create_job(&self, input: &JobInput) -> SdkResult<JobPayload> {
        let request = operations::jobs::create_job(input);
        let refetch = [
            operations::jobs::get_jobs(None),
            operations::clients::get_clients(),
        ];
        let data = self.pipeline.mutate(&request, &refetch).await?;
        decode(data, &request.operation_name, "createJob")
    }

    /// Updates a job and refetches the list plus the job itself.
    ///
    /// # Errors
    /// Propagates pipeline failures, including validation rejections.
    pub async fn update_job(&self, id: &str, input: &JobInput) -> SdkResult<JobPayload> {
        let request = operations::jobs::update_job(id, input);
        let refetch = [operations::jobs::get_jobs(None), operations::jobs::get_job(id)];
        let data = self.pipeline.mutate(&request, &refetch).await?;
        decode(data, &request.operation_name, "updateJob")
    }

    /// Deletes a job and refetches the job list.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn delete_job(&self, id: &str) -> SdkResult<MutationStatus> {
        let request = operations::jobs::delete_job(id);
        let refetch = [operations::jobs::get_jobs(None)];
        let data = self.pipeline.mutate(&request, &refetch).await?;
        decode(data, &request.operation_name, "deleteJob")
    }

    // --- estimates ---

    /// Lists the estimates attached to a job.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn get_estimates_for_job(&self, job_id: &str) -> SdkResult<Vec<Estimate>> {
        let request = operations::estimates::get_estimates_for_job(job_id);
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "estimates")
    }

    /// Fetches one estimate.
    ///
    /// # Errors
    /// Propagates pipeline failures; an unknown id surfaces as missing
    /// data.
    pub async fn get_estimate(&self, id: &str) -> SdkResult<Estimate> {
        let request = operations::estimates::get_estimate(id);
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "estimate")
    }

    /// Creates an estimate and refetches its parent job and the job's
    /// estimate list.
    ///
    /// # Errors
    /// Propagates pipeline failures, including validation rejections.
    pub async fn create_estimate(&self, input: &EstimateInput) -> SdkResult<EstimatePayload> {
        let request = operations::estimates::create_estimate(input);
        let refetch = [
            operations::jobs::get_job(&input.job_id),
            operations::estimates::get_estimates_for_job(&input.job_id),
        ];
        let data = self.pipeline.mutate(&request, &refetch).await?;
        decode(data, &request.operation_name, "createEstimate")
    }

    /// Updates an estimate and refetches it, the job's estimate list, and
    /// the job.
    ///
    /// # Errors
    /// Propagates pipeline failures, including validation rejections.
    pub async fn update_estimate(
        &self,
        id: &str,
        input: &EstimateInput,
    ) -> SdkResult<EstimatePayload> {
        let request = operations::estimates::update_estimate(id, input);
        let refetch = [
            operations::estimates::get_estimate(id),
            operations::estimates::get_estimates_for_job(&input.job_id),
            operations::jobs::get_job(&input.job_id),
        ];
        let data = self.pipeline.mutate(&request, &refetch).await?;
        decode(data, &request.operation_name, "updateEstimate")
    }

    /// Deletes an estimate.
    ///
    /// The estimate is read first to discover its parent job, so the job
    /// and its estimate list can be refetched after the delete. When that
    /// read fails the delete still proceeds, without refetching.
    ///
    /// # Errors
    /// Propagates pipeline failures of the delete itself.
    pub async fn delete_estimate(&self, id: &str) -> SdkResult<MutationStatus> {
        let parent_job = match self.get_estimate(id).await {
            Ok(estimate) => estimate.job.map(|job| job.id),
            Err(_) => None,
        };
        let request = operations::estimates::delete_estimate(id);
        let refetch: Vec<GraphqlRequest> = parent_job
            .map(|job_id| {
                vec![
                    operations::estimates::get_estimates_for_job(&job_id),
                    operations::jobs::get_job(&job_id),
                ]
            })
            .unwrap_or_default();
        let data = self.pipeline.mutate(&request, &refetch).await?;
        decode(data, &request.operation_name, "deleteEstimate")
    }

    // --- invoices ---

    /// Lists the invoices attached to a job.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn get_invoices_for_job(&self, job_id: &str) -> SdkResult<Vec<Invoice>> {
        let request = operations::invoices::get_invoices_for_job(job_id);
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "invoices")
    }

    /// Fetches one invoice.
    ///
    /// # Errors
    /// Propagates pipeline failures; an unknown id surfaces as missing
    /// data.
    pub async fn get_invoice(&self, id: &str) -> SdkResult<Invoice> {
        let request = operations::invoices::get_invoice(id);
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "invoice")
    }

    /// Creates an invoice and refetches its parent job and the job's
    /// invoice list.
    ///
    /// # Errors
    /// Propagates pipeline failures, including validation rejections.
    pub async fn create_invoice(&self, input: &InvoiceInput) -> SdkResult<InvoicePayload> {
        let request = operations::invoices::create_invoice(input);
        let refetch = [
            operations::jobs::get_job(&input.job_id),
            operations::invoices::get_invoices_for_job(&input.job_id),
        ];
        let data = self.pipeline.mutate(&request, &refetch).await?;
        decode(data, &request.operation_name, "createInvoice")
    }

    /// Updates an invoice and refetches it, the job's invoice list, and
    /// the job.
    ///
    /// # Errors
    /// Propagates pipeline failures, including validation rejections.
    pub async fn update_invoice(
        &self,
        id: &str,
        input: &InvoiceInput,
    ) -> SdkResult<InvoicePayload> {
        let request = operations::invoices::update_invoice(id, input);
        let refetch = [
            operations::invoices::get_invoice(id),
            operations::invoices::get_invoices_for_job(&input.job_id),
            operations::jobs::get_job(&input.job_id),
        ];
        let data = self.pipeline.mutate(&request, &refetch).await?;
        decode(data, &request.operation_name, "updateInvoice")
    }

    /// Deletes an invoice, reading it first to discover the parent job
    /// for refetching (same two-step shape as estimate deletion).
    ///
    /// # Errors
    /// Propagates pipeline failures of the delete itself.
    pub async fn delete_invoice(&self, id: &str) -> SdkResult<MutationStatus> {
        let parent_job = match self.get_invoice(id).await {
            Ok(invoice) => invoice.job.map(|job| job.id),
            Err(_) => None,
        };
        let request = operations::invoices::delete_invoice(id);
        let refetch: Vec<GraphqlRequest> = parent_job
            .map(|job_id| {
                vec![
                    operations::invoices::get_invoices_for_job(&job_id),
                    operations::jobs::get_job(&job_id),
                ]
            })
            .unwrap_or_default();
        let data = self.pipeline.mutate(&request, &refetch).await?;
        decode(data, &request.operation_name, "deleteInvoice")
    }

    // --- business profile and account ---

    /// Fetches the account's business profile.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn get_business_profile(&self) -> SdkResult<BusinessProfile> {
        let request = operations::account::get_business_profile();
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "businessProfile")
    }

    /// Updates the business profile and refetches it.
    ///
    /// # Errors
    /// Propagates pipeline failures, including validation rejections.
    pub async fn update_business_profile(
        &self,
        input: &BusinessProfileInput,
    ) -> SdkResult<BusinessProfilePayload> {
        let request = operations::account::update_business_profile(input);
        let refetch = [operations::account::get_business_profile()];
        let data = self.pipeline.mutate(&request, &refetch).await?;
        decode(data, &request.operation_name, "updateBusinessProfile")
    }

    /// Fetches the current account.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn get_current_account(&self) -> SdkResult<Account> {
        let request = operations::account::get_current_account();
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "currentAccount")
    }

    // --- account lifecycle ---

    /// Registers a new account and user.
    ///
    /// # Errors
    /// Propagates pipeline failures, including validation rejections.
    pub async fn signup(&self, input: &SignupInput) -> SdkResult<SignupPayload> {
        let request = operations::account::signup(input);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "signup")
    }

    /// Changes the calling user's password.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> SdkResult<MutationStatus> {
        let request = operations::account::change_password(current_password, new_password);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "changePassword")
    }

    /// Triggers a password-reset OTP email.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn forgot_password(&self, email: &str) -> SdkResult<MutationStatus> {
        let request = operations::account::forgot_password(email);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "forgotPassword")
    }

    /// Validates a reset OTP and sets a new password.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn validate_otp_and_reset_password(
        &self,
        email: &str,
        otp: &str,
        new_password: &str,
    ) -> SdkResult<MutationStatus> {
        let request =
            operations::account::validate_otp_and_reset_password(email, otp, new_password);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "validateOtpAndResetPassword")
    }

    /// Schedules an export of the account's data.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn export_data(&self) -> SdkResult<ExportDataPayload> {
        let request = operations::account::export_data();
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "exportData")
    }

    /// Unsubscribes an email address via its unsubscribe token.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn unsubscribe_from_emails(&self, token: &str) -> SdkResult<MutationStatus> {
        let request = operations::account::unsubscribe_from_emails(token);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "unsubscribeFromEmails")
    }

    // --- team ---

    /// Lists the account's members.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn get_account_members(&self) -> SdkResult<Vec<AccountMember>> {
        let request = operations::team::get_account_members();
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "accountMembers")
    }

    /// Lists invitations the account has sent that are still pending.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn get_pending_invitations(&self) -> SdkResult<Vec<Invitation>> {
        let request = operations::team::get_pending_invitations();
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "pendingInvitations")
    }

    /// Lists invitations addressed to the calling user.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn get_my_invitations(&self) -> SdkResult<Vec<Invitation>> {
        let request = operations::team::get_my_invitations();
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "myInvitations")
    }

    /// Invites a user to the account.
    ///
    /// # Errors
    /// Propagates pipeline failures, including validation rejections.
    pub async fn invite_user(&self, input: &InviteUserInput) -> SdkResult<InvitationPayload> {
        let request = operations::team::invite_user(input);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "inviteUser")
    }

    /// Accepts an invitation on behalf of the calling user.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn accept_invitation(
        &self,
        input: &InvitationResponseInput,
    ) -> SdkResult<AcceptInvitationPayload> {
        let request = operations::team::accept_invitation(input);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "acceptInvitation")
    }

    /// Rejects an invitation on behalf of the calling user.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn reject_invitation(
        &self,
        input: &InvitationResponseInput,
    ) -> SdkResult<MutationStatus> {
        let request = operations::team::reject_invitation(input);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "rejectInvitation")
    }

    /// Removes a member from the account.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn remove_member(&self, member_id: &str) -> SdkResult<MutationStatus> {
        let request = operations::team::remove_member(member_id);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "removeMember")
    }

    /// Cancels a pending invitation the account sent.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn cancel_invitation(&self, invitation_id: &str) -> SdkResult<MutationStatus> {
        let request = operations::team::cancel_invitation(invitation_id);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "cancelInvitation")
    }

    // --- user profile ---

    /// Fetches the calling user's profile.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn user_profile(&self) -> SdkResult<UserProfile> {
        let request = operations::profile::user_profile();
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "userProfile")
    }

    /// Updates the calling user's profile.
    ///
    /// # Errors
    /// Propagates pipeline failures, including validation rejections.
    pub async fn update_user_profile(
        &self,
        input: &UserProfileInput,
    ) -> SdkResult<UserProfilePayload> {
        let request = operations::profile::update_user_profile(input);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "updateUserProfile")
    }

    // --- billing ---

    /// Lists the purchasable subscription plans.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn get_subscription_plans(&self) -> SdkResult<Vec<SubscriptionPlan>> {
        let request = operations::billing::get_subscription_plans();
        let data = self.pipeline.query(&request).await?;
        decode(data, &request.operation_name, "subscriptionPlans")
    }

    /// Fetches the account's subscription, if any.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn get_my_subscription(&self) -> SdkResult<Option<Subscription>> {
        let request = operations::billing::get_my_subscription();
        let data = self.pipeline.query(&request).await?;
        decode_optional(data, "mySubscription")
    }

    /// Opens a hosted checkout session for the given plan.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn create_checkout_session(&self, plan_id: &str) -> SdkResult<CheckoutSession> {
        let request = operations::billing::create_checkout_session(plan_id);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "createCheckoutSession")
    }

    /// Cancels the account's subscription at period end.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn cancel_subscription(&self) -> SdkResult<MutationStatus> {
        let request = operations::billing::cancel_subscription();
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "cancelSubscription")
    }

    /// Switches the account to a new plan.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn update_subscription(
        &self,
        plan_id: &str,
        proration_behavior: Option<ProrationBehavior>,
    ) -> SdkResult<MutationStatus> {
        let request = operations::billing::update_subscription(plan_id, proration_behavior);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "updateSubscription")
    }

    /// Previews what a plan change would bill, without changing anything.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn preview_subscription_change(
        &self,
        plan_id: &str,
    ) -> SdkResult<SubscriptionChangePreviewPayload> {
        let request = operations::billing::preview_subscription_change(plan_id);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "previewSubscriptionChange")
    }

    // --- files, devices, feedback ---

    /// Uploads a file.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn upload_file(&self, input: &FileUploadInput) -> SdkResult<FileUploadPayload> {
        let request = operations::misc::upload_file(input);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "uploadFile")
    }

    /// Registers a push-notification device.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn register_device(
        &self,
        input: &DeviceRegistrationInput,
    ) -> SdkResult<DevicePayload> {
        let request = operations::misc::register_device(input);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "registerDevice")
    }

    /// Registers a device, or refreshes an existing registration.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn update_or_register_device(
        &self,
        input: &DeviceRegistrationInput,
    ) -> SdkResult<DevicePayload> {
        let request = operations::misc::update_or_register_device(input);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "updateOrRegisterDevice")
    }

    /// Generates a PDF for an estimate or invoice.
    ///
    /// `document_type` is the backend's document discriminator
    /// (`"estimate"` or `"invoice"`).
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn generate_document_pdf(
        &self,
        document_type: &str,
        document_id: &str,
    ) -> SdkResult<DocumentPdfPayload> {
        let request = operations::misc::generate_document_pdf(document_type, document_id);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "generateDocumentPdf")
    }

    /// Submits in-app feedback.
    ///
    /// # Errors
    /// Propagates pipeline failures.
    pub async fn submit_feedback(
        &self,
        description: &str,
        page_url: Option<&str>,
    ) -> SdkResult<FeedbackPayload> {
        let request = operations::misc::submit_feedback(description, page_url);
        let data = self.pipeline.execute(&request).await?;
        decode(data, &request.operation_name, "submitFeedback")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decode_extracts_payload_field() {
        let data = json!({"clients": [{"id": "1", "name": "Acme"}]});
        let clients: Vec<Client> = decode(data, "GetClients", "clients").unwrap();
        assert_eq!(clients[0].name, "Acme");
    }

    #[test]
    fn decode_null_field_is_missing_data() {
        let data = json!({"client": null});
        let result: SdkResult<Client> = decode(data, "GetClient", "client");
        assert!(matches!(result, Err(SdkError::MissingData { .. })));
    }

    #[test]
    fn decode_shape_mismatch_is_decode_error() {
        let data = json!({"clients": {"not": "an array"}});
        let result: SdkResult<Vec<Client>> = decode(data, "GetClients", "clients");
        assert!(matches!(result, Err(SdkError::Decode(_))));
    }

    #[test]
    fn decode_optional_tolerates_null() {
        let data = json!({"mySubscription": null});
        let subscription: Option<Subscription> =
            decode_optional(data, "mySubscription").unwrap();
        assert!(subscription.is_none());
    }
}
