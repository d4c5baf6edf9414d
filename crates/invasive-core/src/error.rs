use thiserror::Error;

/// Errors raised by the risk scoring pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// A numeric value outside its factor's domain, or an unrecognized label.
    #[error("invalid input for {factor}: {reason}")]
    InvalidInput { factor: String, reason: String },
    /// The aggregated fuzzy vector carries no membership mass.
    #[error("degenerate aggregation: membership mass {mass} is too small to defuzzify")]
    DegenerateAggregation { mass: f64 },
    /// Weight vectors, quantifiers or the term scale failed validation at startup.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl RiskError {
    pub fn invalid_input(factor: impl Into<String>, reason: impl Into<String>) -> Self {
        RiskError::InvalidInput {
            factor: factor.into(),
            reason: reason.into(),
        }
    }

    /// Factor name for input errors, used as a metrics label.
    pub fn factor(&self) -> Option<&str> {
        match self {
            RiskError::InvalidInput { factor, .. } => Some(factor),
            _ => None,
        }
    }
}

pub type RiskResult<T> = Result<T, RiskError>;
