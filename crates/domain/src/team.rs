//! Team membership and invitation records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::business::Account;
use crate::common::MutationStatus;

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    pub id: String,
    /// Login email.
    pub email: String,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
}

/// A membership linking a user to the current account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMember {
    /// Backend identifier.
    pub id: String,
    /// Whether the member has admin rights.
    #[serde(default)]
    pub is_admin: bool,
    /// The member's user record.
    pub user: User,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A pending or answered invitation to join an account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    /// Backend identifier.
    pub id: String,
    /// Invitee email.
    pub email: String,
    /// Invitation status (pending, accepted, rejected).
    #[serde(default)]
    pub status: Option<String>,
    /// Acceptance token, present only on the invitee's own invitations.
    #[serde(default)]
    pub token: Option<String>,
    /// The inviting account.
    #[serde(default)]
    pub account: Option<Account>,
    /// The user who sent the invitation.
    #[serde(default)]
    pub invited_by: Option<User>,
}

/// Input for inviting a user to the current account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteUserInput {
    /// Invitee email.
    pub email: String,
    /// Whether the invitee gets admin rights.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

/// Input for answering an invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationResponseInput {
    /// The invitation's acceptance token.
    pub token: String,
}

/// Payload returned by the invite mutation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationPayload {
    /// The created invitation.
    #[serde(default)]
    pub invitation: Option<Invitation>,
    /// Mutation outcome.
    #[serde(flatten)]
    pub status: MutationStatus,
}

/// Payload returned when accepting an invitation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInvitationPayload {
    /// The account the caller joined.
    #[serde(default)]
    pub account: Option<Account>,
    /// Mutation outcome.
    #[serde(flatten)]
    pub status: MutationStatus,
}
