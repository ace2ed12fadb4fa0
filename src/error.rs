use thiserror::Error;

/// Failures surfaced at the save boundary. All are recoverable: the store is
/// never mutated on an error path, so the caller can prompt and retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntryError {
    /// The date text did not match the strict `YYYY-MM-DD` pattern or named
    /// an impossible calendar day.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Save was attempted with no mood selected.
    #[error("no mood selected")]
    MissingSelection,

    /// A collaborator passed a label outside the fixed catalog. This is a
    /// programming error upstream, not user input.
    #[error("unknown mood category '{0}'")]
    UnknownCategory(String),
}
