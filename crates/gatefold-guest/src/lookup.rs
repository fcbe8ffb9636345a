//! Decrypt-and-match: turning a supplied code into a personalized page.
//!
//! The guest table stores each code encrypted under itself. A supplied
//! code is authenticated by attempting to decrypt every row's code cell
//! with it; the row whose cell decrypts back to the code is the guest.
//! Decryption failure is the expected outcome on every other row, not an
//! error, and a wrong code is indistinguishable from an unknown one.

use gatefold_crypto::decrypt_cell;
use tracing::warn;

use crate::types::{EventDetails, EventRow, GuestMatch, GuestRow, Invitation};

/// Scan the guest table for the row whose code cell decrypts to `code`.
///
/// First match wins; codes are assumed unique but not enforced. Dependent
/// cells decrypt under the same code, each failing soft: a cell that does
/// not decode leaves its field empty without unmatching the row. An empty
/// `code` (no code supplied) never matches.
pub fn find_guest(code: &str, rows: &[GuestRow]) -> Option<GuestMatch> {
    if code.is_empty() {
        return None;
    }
    let (index, row) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| decrypt_cell(&row.code, code).is_ok_and(|plain| plain == code))?;

    Some(GuestMatch {
        index,
        name: decrypt_cell(&row.name, code).ok(),
        party: decrypt_cell(&row.party, code)
            .map(|list| split_party(&list))
            .unwrap_or_default(),
        event_key: decrypt_cell(&row.event_key, code).ok(),
    })
}

/// Split a decrypted party cell into individual guest names (one per line).
fn split_party(list: &str) -> Vec<String> {
    list.lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decrypt the event table with the nested key recovered from a matched
/// guest row.
///
/// The decrypted key-blob plaintext is reused verbatim as this layer's
/// key; existing sheet data depends on that exact chaining. A row whose
/// title cell fails to decode is logged and skipped so the rest of the
/// table still renders; the remaining cells are best-effort.
pub fn decrypt_events(rows: &[EventRow], event_key: &str) -> Vec<EventDetails> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| match decrypt_cell(&row.title, event_key) {
            Ok(title) => Some(EventDetails {
                title,
                date: decrypt_cell(&row.date, event_key).ok(),
                venue: decrypt_cell(&row.venue, event_key).ok(),
                note: decrypt_cell(&row.note, event_key).ok(),
            }),
            Err(_) => {
                warn!(row = index, "event row failed to decode, skipping");
                None
            }
        })
        .collect()
}

/// The full unlock pipeline: match the code, decrypt the guest's cells,
/// then chain the recovered event key into the event table.
pub fn unlock(code: &str, guests: &[GuestRow], events: &[EventRow]) -> Option<Invitation> {
    let guest = find_guest(code, guests)?;
    let events = guest
        .event_key
        .as_deref()
        .map(|key| decrypt_events(events, key))
        .unwrap_or_default();

    Some(Invitation {
        name: guest.name,
        party: guest.party,
        events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatefold_crypto::encrypt_cell;

    fn row(code: &str, name: &str, party: &str, event_key: &str) -> GuestRow {
        GuestRow {
            code: encrypt_cell(code, code),
            name: encrypt_cell(name, code),
            party: encrypt_cell(party, code),
            event_key: encrypt_cell(event_key, code),
        }
    }

    #[test]
    fn matches_row_encrypted_under_its_own_code() {
        let rows = vec![row("ZZ9999", "Riley", "Riley", "ek"), row("ABC123", "Avery", "Avery", "ek")];
        let guest = find_guest("ABC123", &rows).unwrap();
        assert_eq!(guest.index, 1);
        assert_eq!(guest.name.as_deref(), Some("Avery"));
    }

    #[test]
    fn wrong_code_finds_nothing() {
        let rows = vec![row("ABC123", "Avery", "Avery", "ek")];
        assert!(find_guest("WRONG1", &rows).is_none());
    }

    #[test]
    fn empty_code_never_matches() {
        let rows = vec![row("ABC123", "Avery", "Avery", "ek")];
        assert!(find_guest("", &rows).is_none());
    }

    #[test]
    fn first_match_wins() {
        let rows = vec![
            row("ABC123", "First", "First", "ek"),
            row("ABC123", "Second", "Second", "ek"),
        ];
        let guest = find_guest("ABC123", &rows).unwrap();
        assert_eq!(guest.index, 0);
        assert_eq!(guest.name.as_deref(), Some("First"));
    }

    #[test]
    fn party_splits_on_lines() {
        let rows = vec![row("ABC123", "Avery", "Avery Quinn\nJordan Quinn\n", "ek")];
        let guest = find_guest("ABC123", &rows).unwrap();
        assert_eq!(guest.party, vec!["Avery Quinn", "Jordan Quinn"]);
    }

    #[test]
    fn garbled_dependent_cell_does_not_unmatch() {
        let mut r = row("ABC123", "Avery", "Avery", "ek");
        r.name = "@@not-base64@@".to_string();
        let guest = find_guest("ABC123", &[r]).unwrap();
        assert_eq!(guest.name, None);
        assert_eq!(guest.event_key.as_deref(), Some("ek"));
    }

    #[test]
    fn garbled_event_row_is_skipped() {
        let key = "ek";
        let rows = vec![
            EventRow {
                title: "@@not-base64@@".to_string(),
                date: encrypt_cell("d", key),
                venue: encrypt_cell("v", key),
                note: encrypt_cell("n", key),
            },
            EventRow {
                title: encrypt_cell("Reception", key),
                date: encrypt_cell("d", key),
                venue: encrypt_cell("v", key),
                note: encrypt_cell("n", key),
            },
        ];
        let events = decrypt_events(&rows, key);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Reception");
    }

    #[test]
    fn unlock_chains_the_event_key() {
        let key = "k7-Lm2-Qx";
        let guests = vec![row("ABC123", "Avery", "Avery", key)];
        let events = vec![EventRow {
            title: encrypt_cell("Ceremony", key),
            date: encrypt_cell("2026-09-12", key),
            venue: encrypt_cell("Rosewood Chapel", key),
            note: encrypt_cell("", key),
        }];
        let invitation = unlock("ABC123", &guests, &events).unwrap();
        assert_eq!(invitation.events.len(), 1);
        assert_eq!(invitation.events[0].venue.as_deref(), Some("Rosewood Chapel"));
        assert_eq!(invitation.events[0].note.as_deref(), Some(""));
    }
}
