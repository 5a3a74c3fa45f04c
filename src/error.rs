use thiserror::Error;

/// Failures that end a stripes run. None of them are recovered from.
#[derive(Debug, Error)]
pub enum StripesError {
    /// Source unreachable, unreadable, or not a usable CSV table.
    #[error("failed to retrieve data from {source_id}: {reason}")]
    Retrieval { source_id: String, reason: String },

    /// A requested column is not in the header row.
    #[error("column '{column}' not found in source")]
    Schema { column: String },

    /// Nothing left to derive a color range or grid from.
    #[error("dataset is empty after cleaning")]
    EmptyDataset,
}

impl StripesError {
    pub fn retrieval(source_id: &str, reason: impl std::fmt::Display) -> Self {
        StripesError::Retrieval {
            source_id: source_id.to_string(),
            reason: reason.to_string(),
        }
    }
}
