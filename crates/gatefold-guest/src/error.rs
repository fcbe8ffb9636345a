use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Invalid sheet: expected an array of rows")]
    NotATable,

    #[error("Invalid sheet: header row is missing")]
    MissingHeaderRow,

    #[error("Invalid sheet: missing \"{column}\" column")]
    MissingColumn { column: &'static str },

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
