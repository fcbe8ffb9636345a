//! Guest lookup over the published invitation sheet.
//!
//! Consumes the two published tables (guests, events) as parsed JSON,
//! authenticates a supplied guest code by decrypt-and-match, and produces
//! the decrypted [`Invitation`] the page renders. Fetching, retries, and
//! rendering belong to the surrounding app; everything here is synchronous
//! and in-memory, one independent decrypt attempt per row.

pub mod error;
pub mod lookup;
pub mod sheet;
pub mod types;

pub use error::SheetError;
pub use lookup::{decrypt_events, find_guest, unlock};
pub use sheet::{
    parse_event_table, parse_event_table_str, parse_guest_table, parse_guest_table_str,
};
pub use types::{EventDetails, EventRow, GuestMatch, GuestRow, Invitation};
