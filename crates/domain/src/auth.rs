//! Authentication and signup payloads.

use serde::{Deserialize, Serialize};

/// Payload returned by the `tokenAuth` mutation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAuthPayload {
    /// The bearer token to adopt as the credential.
    #[serde(default)]
    pub token: Option<String>,
    /// Whether the authenticated user has admin rights.
    #[serde(default)]
    pub is_admin: Option<bool>,
    /// The account the user belongs to.
    #[serde(default)]
    pub account_id: Option<String>,
    /// Raw JWT claims payload.
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}

/// Input for creating a new account and user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupInput {
    /// Login email.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Name of the business being registered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
}

/// Payload returned by the signup mutation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    /// Whether signup succeeded.
    #[serde(default)]
    pub success: bool,
    /// Optional human-readable detail.
    #[serde(default)]
    pub message: Option<String>,
    /// Identifier of the created user.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Identifier of the created account.
    #[serde(default)]
    pub account_id: Option<String>,
}
