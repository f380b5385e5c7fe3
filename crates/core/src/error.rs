#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An achievement definition carries a `criteria_type` this engine
    /// does not know how to measure. Callers skip the definition.
    #[error("Unsupported criteria type: {criteria_type}")]
    UnsupportedCriteria { criteria_type: String },
}
