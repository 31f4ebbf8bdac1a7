use thiserror::Error;

/// Input rejected before a chart view is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    #[error("unknown launch site '{0}'")]
    UnknownSite(String),

    #[error("invalid payload range [{low}, {high}]: bounds must be finite with low <= high")]
    InvalidPayloadRange { low: f64, high: f64 },
}
