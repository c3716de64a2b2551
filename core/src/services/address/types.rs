use serde::Serialize;

/// Result of a lookup request; only `Filled` touches the draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LookupOutcome {
    Filled,
    NotFound,
    Failed { reason: String },
    /// No postal code typed yet
    Skipped,
    /// Postal code without exactly eight digits
    InvalidPostalCode,
}
