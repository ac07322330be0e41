//! Import error taxonomy
//!
//! Every failure surfaces to the caller with an HTTP-style status
//! classification and a human-readable message; nothing is retried
//! internally. Parse-time errors abort before any mutating call, and
//! mutation-time errors carry Spire's raw response body to aid diagnosis.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// Required user input was missing or empty
    #[error("{0}")]
    Validation(String),

    /// A required logical column had no match in the header row
    #[error("missing required column '{0}' in the header row")]
    MissingColumn(String),

    /// A data row could not be translated into a line item
    #[error("row {row}: {message}")]
    RowParse { row: usize, message: String },

    /// The order lookup returned no usable record
    #[error("purchase order {0} not found")]
    OrderNotFound(String),

    /// Spire rejected an inventory create call
    #[error("failed to create inventory item '{part_no}': {body}")]
    InventoryCreate {
        part_no: String,
        status: u16,
        body: String,
    },

    /// Spire rejected a lookup or the replace call; body is verbatim
    #[error("Spire request failed: {body}")]
    Upstream { status: u16, body: String },

    /// The HTTP transport failed before a response was produced
    #[error("request to Spire failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upload was not readable as delimited text
    #[error("failed to read CSV input: {0}")]
    Csv(#[from] csv::Error),
}

impl ImportError {
    /// HTTP-style status classification for user-facing reporting.
    /// Upstream failures pass Spire's own status through unchanged.
    pub fn status(&self) -> u16 {
        match self {
            Self::Validation(_) | Self::MissingColumn(_) | Self::RowParse { .. } | Self::Csv(_) => {
                422
            }
            Self::OrderNotFound(_) => 404,
            Self::InventoryCreate { status, .. } | Self::Upstream { status, .. } => *status,
            Self::Transport(_) => 502,
        }
    }
}
