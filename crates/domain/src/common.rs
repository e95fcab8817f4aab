//! Shared payload fragments.

use serde::Deserialize;

/// The `success`/`message` pair every mutation payload carries.
///
/// Mutations whose payload carries nothing else (deletes, cancellations)
/// decode directly into this type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MutationStatus {
    /// Whether the backend accepted the mutation.
    #[serde(default)]
    pub success: bool,
    /// Optional human-readable detail.
    #[serde(default)]
    pub message: Option<String>,
}
