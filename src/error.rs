use crate::types::Tenor;
use thiserror::Error;

pub type OisResult<T> = Result<T, OisError>;

#[derive(Error, Debug)]
pub enum OisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not find {} column(s) in maturity header", join_tenors(.missing))]
    ColumnNotFound { missing: Vec<Tenor> },

    #[error("Insufficient data to calculate changes: found {found} dated row(s), need at least 2")]
    InsufficientData { found: usize },

    #[error("Unexpected sheet layout: {0}")]
    SheetLayout(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Network error: {0}")]
    Fetch(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Email error: {0}")]
    Notify(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_tenors(tenors: &[Tenor]) -> String {
    tenors
        .iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ")
}
