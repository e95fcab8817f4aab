//! User profile operations.

use fieldlink_domain::{GraphqlRequest, UserProfileInput};
use serde_json::json;

const PROFILE_FIELDS: &str = "id firstName lastName phoneNumber timezone createdAt updatedAt";

/// `GetUserProfile` request.
#[must_use]
pub fn user_profile() -> GraphqlRequest {
    GraphqlRequest::new(
        "GetUserProfile",
        format!("query GetUserProfile {{ userProfile {{ {PROFILE_FIELDS} }} }}"),
    )
}

/// `UpdateUserProfile` request.
#[must_use]
pub fn update_user_profile(input: &UserProfileInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "UpdateUserProfile",
        format!(
            "mutation UpdateUserProfile($input: UserProfileInput!) \
             {{ updateUserProfile(input: $input) \
             {{ userProfile {{ {PROFILE_FIELDS} }} success message }} }}"
        ),
    )
    .with_variables(json!({ "input": input }))
}
