//! Client (customer) records and inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::MutationStatus;

/// A client of the field-service business.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Street address, first line.
    #[serde(default)]
    pub address1: Option<String>,
    /// Street address, second line.
    #[serde(default)]
    pub address2: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// State or region.
    #[serde(default)]
    pub state: Option<String>,
    /// Postal code.
    #[serde(default)]
    pub zip_code: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Geocoded latitude, when known.
    #[serde(default)]
    pub location_latitude: Option<f64>,
    /// Geocoded longitude, when known.
    #[serde(default)]
    pub location_longitude: Option<f64>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last-update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating or updating a client.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInput {
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Street address, first line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    /// Street address, second line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    /// City.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Geocoded latitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_latitude: Option<f64>,
    /// Geocoded longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_longitude: Option<f64>,
}

/// Payload returned by client mutations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    /// The created or updated client.
    #[serde(default)]
    pub client: Option<Client>,
    /// Mutation outcome.
    #[serde(flatten)]
    pub status: MutationStatus,
}
