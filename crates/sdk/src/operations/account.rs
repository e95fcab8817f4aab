//! Account lifecycle and business profile operations.

use fieldlink_domain::{BusinessProfileInput, GraphqlRequest, SignupInput};
use serde_json::json;

const BUSINESS_PROFILE_FIELDS: &str = "id name email phone website logo address1 address2 \
                                       city state zipCode taxServiceType createdAt updatedAt";

/// `TokenAuth` request: exchanges credentials for a bearer token.
#[must_use]
pub fn token_auth(email: &str, password: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "TokenAuth",
        "mutation TokenAuth($email: String!, $password: String!) \
         { tokenAuth(email: $email, password: $password) \
         { token isAdmin accountId payload } }",
    )
    .with_variables(json!({ "email": email, "password": password }))
}

/// `Signup` request.
#[must_use]
pub fn signup(input: &SignupInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "Signup",
        "mutation Signup($input: SignupInput!) \
         { signup(input: $input) { success message userId accountId } }",
    )
    .with_variables(json!({ "input": input }))
}

/// `ChangePassword` request.
#[must_use]
pub fn change_password(current_password: &str, new_password: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "ChangePassword",
        "mutation ChangePassword($currentPassword: String!, $newPassword: String!) \
         { changePassword(currentPassword: $currentPassword, newPassword: $newPassword) \
         { success message } }",
    )
    .with_variables(json!({
        "currentPassword": current_password,
        "newPassword": new_password,
    }))
}

/// `ForgotPassword` request: triggers a reset OTP email.
#[must_use]
pub fn forgot_password(email: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "ForgotPassword",
        "mutation ForgotPassword($email: String!) \
         { forgotPassword(email: $email) { success message } }",
    )
    .with_variables(json!({ "email": email }))
}

/// `ValidateOtpAndResetPassword` request.
#[must_use]
pub fn validate_otp_and_reset_password(
    email: &str,
    otp: &str,
    new_password: &str,
) -> GraphqlRequest {
    GraphqlRequest::new(
        "ValidateOtpAndResetPassword",
        "mutation ValidateOtpAndResetPassword($email: String!, $otp: String!, \
         $newPassword: String!) \
         { validateOtpAndResetPassword(email: $email, otp: $otp, newPassword: $newPassword) \
         { success message } }",
    )
    .with_variables(json!({
        "email": email,
        "otp": otp,
        "newPassword": new_password,
    }))
}

/// `ExportData` request: schedules an account data export.
#[must_use]
pub fn export_data() -> GraphqlRequest {
    GraphqlRequest::new(
        "ExportData",
        "mutation ExportData { exportData { success message downloadUrl } }",
    )
}

/// `UnsubscribeFromEmails` request.
#[must_use]
pub fn unsubscribe_from_emails(token: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "UnsubscribeFromEmails",
        "mutation UnsubscribeFromEmails($token: String!) \
         { unsubscribeFromEmails(token: $token) { success message } }",
    )
    .with_variables(json!({ "token": token }))
}

/// `GetBusinessProfile` request.
#[must_use]
pub fn get_business_profile() -> GraphqlRequest {
    GraphqlRequest::new(
        "GetBusinessProfile",
        format!(
            "query GetBusinessProfile {{ businessProfile {{ {BUSINESS_PROFILE_FIELDS} }} }}"
        ),
    )
}

/// `UpdateBusinessProfile` request.
#[must_use]
pub fn update_business_profile(input: &BusinessProfileInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "UpdateBusinessProfile",
        format!(
            "mutation UpdateBusinessProfile($input: BusinessProfileInput!) \
             {{ updateBusinessProfile(input: $input) \
             {{ businessProfile {{ {BUSINESS_PROFILE_FIELDS} }} success message }} }}"
        ),
    )
    .with_variables(json!({ "input": input }))
}

/// `GetCurrentAccount` request.
#[must_use]
pub fn get_current_account() -> GraphqlRequest {
    GraphqlRequest::new(
        "GetCurrentAccount",
        "query GetCurrentAccount { currentAccount { id name createdAt } }",
    )
}
