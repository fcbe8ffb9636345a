//! Record types for the published guest and event tables.
//!
//! Rows are independent and immutable once parsed: materialized from the
//! published sheet per request, discarded after the page renders. Nothing
//! here persists or crosses rows.

use serde::{Deserialize, Serialize};

/// One row of the guest table, as stored: every field is a Base64 XXTEA
/// cell. The code cell is encrypted under its own plaintext, which is what
/// lets it double as the authentication check for a supplied code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuestRow {
    pub code: String,
    pub name: String,
    pub party: String,
    /// Cell that decrypts (under the guest code) to the event-table key.
    pub event_key: String,
}

/// One row of the event table; cells are encrypted under the nested event
/// key rather than a guest code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventRow {
    pub title: String,
    pub date: String,
    pub venue: String,
    pub note: String,
}

/// A matched guest row with its dependent cells decrypted.
///
/// Fields that fail to decode come back empty rather than unmatching the
/// row; the code itself already authenticated.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestMatch {
    /// Index of the matched row in the scanned table.
    pub index: usize,
    pub name: Option<String>,
    pub party: Vec<String>,
    pub event_key: Option<String>,
}

/// A decrypted event row. The title is required for the row to surface at
/// all; the remaining cells are best-effort.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventDetails {
    pub title: String,
    pub date: Option<String>,
    pub venue: Option<String>,
    pub note: Option<String>,
}

/// Everything the page needs to render for one guest.
#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    pub name: Option<String>,
    pub party: Vec<String>,
    pub events: Vec<EventDetails>,
}
