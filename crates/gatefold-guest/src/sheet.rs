//! Published-sheet table parsing.
//!
//! The fetch layer hands us each published table as a JSON array of rows
//! of string cells, first row the column headers. This module maps those
//! rows onto typed records; it knows nothing about ciphertext beyond which
//! columns carry it.

use serde_json::Value;

use crate::error::SheetError;
use crate::types::{EventRow, GuestRow};

fn rows_of(json: &Value) -> Result<&Vec<Value>, SheetError> {
    json.as_array().ok_or(SheetError::NotATable)
}

fn header_row(rows: &[Value]) -> Result<Vec<&str>, SheetError> {
    let first = rows
        .first()
        .and_then(|r| r.as_array())
        .ok_or(SheetError::MissingHeaderRow)?;
    Ok(first
        .iter()
        .map(|c| c.as_str().unwrap_or("").trim())
        .collect())
}

fn column(headers: &[&str], name: &'static str) -> Result<usize, SheetError> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or(SheetError::MissingColumn { column: name })
}

fn cell(row: &[Value], index: usize) -> String {
    row.get(index)
        .and_then(|c| c.as_str())
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Parse the guest table (`code` / `name` / `party` / `events` columns,
/// matched case-insensitively). Rows with an empty code cell are skipped.
pub fn parse_guest_table(json: &Value) -> Result<Vec<GuestRow>, SheetError> {
    let rows = rows_of(json)?;
    let headers = header_row(rows)?;
    let code = column(&headers, "code")?;
    let name = column(&headers, "name")?;
    let party = column(&headers, "party")?;
    let events = column(&headers, "events")?;

    Ok(rows[1..]
        .iter()
        .filter_map(|r| r.as_array())
        .map(|r| GuestRow {
            code: cell(r, code),
            name: cell(r, name),
            party: cell(r, party),
            event_key: cell(r, events),
        })
        .filter(|g| !g.code.is_empty())
        .collect())
}

/// Parse the event table (`title` / `date` / `venue` / `note` columns).
/// Rows with an empty title cell are skipped.
pub fn parse_event_table(json: &Value) -> Result<Vec<EventRow>, SheetError> {
    let rows = rows_of(json)?;
    let headers = header_row(rows)?;
    let title = column(&headers, "title")?;
    let date = column(&headers, "date")?;
    let venue = column(&headers, "venue")?;
    let note = column(&headers, "note")?;

    Ok(rows[1..]
        .iter()
        .filter_map(|r| r.as_array())
        .map(|r| EventRow {
            title: cell(r, title),
            date: cell(r, date),
            venue: cell(r, venue),
            note: cell(r, note),
        })
        .filter(|e| !e.title.is_empty())
        .collect())
}

/// Parse the guest table from raw JSON text.
pub fn parse_guest_table_str(json: &str) -> Result<Vec<GuestRow>, SheetError> {
    parse_guest_table(&serde_json::from_str(json)?)
}

/// Parse the event table from raw JSON text.
pub fn parse_event_table_str(json: &str) -> Result<Vec<EventRow>, SheetError> {
    parse_event_table(&serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn guest_fixture() -> Value {
        json!([
            ["Code", "Name", "Party", "Events"],
            ["c1==", "n1==", "p1==", "k1=="],
            ["c2==", "n2==", "p2==", "k2=="]
        ])
    }

    #[test]
    fn parses_guest_rows() {
        let rows = parse_guest_table(&guest_fixture()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].code, "c1==");
        assert_eq!(rows[1].event_key, "k2==");
    }

    #[test]
    fn headers_match_case_insensitively() {
        let table = json!([
            ["CODE", "name", "Party", "EVENTS"],
            ["c==", "n==", "p==", "k=="]
        ]);
        assert_eq!(parse_guest_table(&table).unwrap().len(), 1);
    }

    #[test]
    fn header_order_does_not_matter() {
        let table = json!([
            ["Events", "Party", "Name", "Code"],
            ["k==", "p==", "n==", "c=="]
        ]);
        let rows = parse_guest_table(&table).unwrap();
        assert_eq!(rows[0].code, "c==");
        assert_eq!(rows[0].event_key, "k==");
    }

    #[test]
    fn skips_rows_without_code() {
        let table = json!([
            ["Code", "Name", "Party", "Events"],
            ["", "n==", "p==", "k=="],
            ["c==", "n==", "p==", "k=="]
        ]);
        assert_eq!(parse_guest_table(&table).unwrap().len(), 1);
    }

    #[test]
    fn short_rows_read_as_empty_cells() {
        let table = json!([
            ["Code", "Name", "Party", "Events"],
            ["c=="]
        ]);
        let rows = parse_guest_table(&table).unwrap();
        assert_eq!(rows[0].name, "");
    }

    #[test]
    fn rejects_non_array() {
        let err = parse_guest_table(&json!({"rows": []})).unwrap_err();
        assert!(err.to_string().contains("expected an array"));
    }

    #[test]
    fn rejects_missing_header_row() {
        let err = parse_guest_table(&json!([])).unwrap_err();
        assert!(err.to_string().contains("header row"));
    }

    #[test]
    fn rejects_missing_column() {
        let table = json!([["Code", "Name", "Party"]]);
        let err = parse_guest_table(&table).unwrap_err();
        assert!(err.to_string().contains("\"events\""));
    }

    #[test]
    fn parses_event_rows() {
        let table = json!([
            ["Title", "Date", "Venue", "Note"],
            ["t==", "d==", "v==", "x=="],
            ["", "d==", "v==", "x=="]
        ]);
        let rows = parse_event_table(&table).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "t==");
    }

    #[test]
    fn parses_from_str() {
        let rows = parse_guest_table_str(&guest_fixture().to_string()).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(parse_guest_table_str("not json").is_err());
    }
}
