//! Team membership and invitation operations.

use fieldlink_domain::{GraphqlRequest, InvitationResponseInput, InviteUserInput};
use serde_json::json;

const MEMBER_FIELDS: &str = "id isAdmin user { id email firstName lastName } \
                             createdAt updatedAt";

const INVITATION_FIELDS: &str = "id email status token account { id name } \
                                 invitedBy { id email firstName lastName }";

/// `GetAccountMembers` request.
#[must_use]
pub fn get_account_members() -> GraphqlRequest {
    GraphqlRequest::new(
        "GetAccountMembers",
        format!("query GetAccountMembers {{ accountMembers {{ {MEMBER_FIELDS} }} }}"),
    )
}

/// `GetPendingInvitations` request: invitations the account has sent.
#[must_use]
pub fn get_pending_invitations() -> GraphqlRequest {
    GraphqlRequest::new(
        "GetPendingInvitations",
        format!(
            "query GetPendingInvitations {{ pendingInvitations {{ {INVITATION_FIELDS} }} }}"
        ),
    )
}

/// `GetMyInvitations` request: invitations addressed to the caller.
#[must_use]
pub fn get_my_invitations() -> GraphqlRequest {
    GraphqlRequest::new(
        "GetMyInvitations",
        format!("query GetMyInvitations {{ myInvitations {{ {INVITATION_FIELDS} }} }}"),
    )
}

/// `InviteUser` request.
#[must_use]
pub fn invite_user(input: &InviteUserInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "InviteUser",
        format!(
            "mutation InviteUser($input: InviteUserInput!) \
             {{ inviteUser(input: $input) \
             {{ invitation {{ {INVITATION_FIELDS} }} success message }} }}"
        ),
    )
    .with_variables(json!({ "input": input }))
}

/// `AcceptInvitation` request.
#[must_use]
pub fn accept_invitation(input: &InvitationResponseInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "AcceptInvitation",
        "mutation AcceptInvitation($input: InvitationResponseInput!) \
         { acceptInvitation(input: $input) \
         { account { id name } success message } }",
    )
    .with_variables(json!({ "input": input }))
}

/// `RejectInvitation` request.
#[must_use]
pub fn reject_invitation(input: &InvitationResponseInput) -> GraphqlRequest {
    GraphqlRequest::new(
        "RejectInvitation",
        "mutation RejectInvitation($input: InvitationResponseInput!) \
         { rejectInvitation(input: $input) { success message } }",
    )
    .with_variables(json!({ "input": input }))
}

/// `RemoveMember` request.
#[must_use]
pub fn remove_member(member_id: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "RemoveMember",
        "mutation RemoveMember($memberId: ID!) \
         { removeMember(memberId: $memberId) { success message } }",
    )
    .with_variables(json!({ "memberId": member_id }))
}

/// `CancelInvitation` request.
#[must_use]
pub fn cancel_invitation(invitation_id: &str) -> GraphqlRequest {
    GraphqlRequest::new(
        "CancelInvitation",
        "mutation CancelInvitation($invitationId: ID!) \
         { cancelInvitation(invitationId: $invitationId) { success message } }",
    )
    .with_variables(json!({ "invitationId": invitation_id }))
}
