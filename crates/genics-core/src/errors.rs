/// Scoring pipeline errors.
///
/// Unknown metric types and missing sub-metrics are *not* errors — they degrade
/// gracefully with reduced confidence. Only inputs the pipeline cannot compute
/// over at all (non-finite numbers, unrepresentable dates) fail fast.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("non-finite input for {field}: {value}")]
    NonFiniteInput { field: String, value: f64 },

    #[error("{field} outside representable range: {value}")]
    DateOutOfRange { field: String, value: String },

    #[error("empty weight table: at least one expected metric is required")]
    EmptyWeights,

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

pub type ScoreResult<T> = Result<T, ScoreError>;
