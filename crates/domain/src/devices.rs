//! Push-notification device registration.

use serde::{Deserialize, Serialize};

use crate::common::MutationStatus;

/// A registered push-notification device.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Push token issued by the platform.
    pub device_token: String,
    /// Platform kind (ios, android).
    #[serde(default)]
    pub device_type: Option<String>,
    /// Whether the registration is active.
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Last time the device was seen.
    #[serde(default)]
    pub last_used: Option<String>,
}

/// Input for registering a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRegistrationInput {
    /// Push token issued by the platform.
    pub device_token: String,
    /// Platform kind (ios, android).
    pub device_type: String,
}

/// Payload returned by device registration mutations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePayload {
    /// The registered device.
    #[serde(default)]
    pub device: Option<Device>,
    /// Mutation outcome.
    #[serde(flatten)]
    pub status: MutationStatus,
}
