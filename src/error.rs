use thiserror::Error;

/// Rejections raised while turning caller input into an `InstallationConfig`.
/// The engine formulas themselves never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("{field} = {value} is outside [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown site: {0}")]
    UnknownSite(String),

    #[error("unknown panel technology: {0}")]
    UnknownTechnology(String),

    #[error("at most {max} obstacles are supported, got {count}")]
    TooManyObstacles { count: usize, max: usize },
}

impl EngineError {
    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        EngineError::InvalidRange { field, value, min, max }
    }
}
