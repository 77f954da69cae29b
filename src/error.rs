use thiserror::Error;

/// Main error type for the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid simulation type: {0}")]
    InvalidSimulationKind(String),

    #[error("Unknown travel style: {0}")]
    UnknownTravelStyle(String),

    #[error("Unknown place category: {0}")]
    UnknownCategory(String),

    #[error("No {category} available for {destination}")]
    EmptyPool {
        category: &'static str,
        destination: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Validation(_) => "VALIDATION_ERROR",
            PlannerError::InvalidSimulationKind(_) => "INVALID_SIMULATION_KIND",
            PlannerError::UnknownTravelStyle(_) => "UNKNOWN_TRAVEL_STYLE",
            PlannerError::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            PlannerError::EmptyPool { .. } => "EMPTY_PLACE_POOL",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_shape() {
        let error = PlannerError::InvalidSimulationKind("bogus".to_string());
        let payload = error.to_error_payload();
        assert_eq!(payload["error"]["code"], "INVALID_SIMULATION_KIND");
        assert_eq!(
            payload["error"]["message"],
            "Invalid simulation type: bogus"
        );
    }

    #[test]
    fn test_empty_pool_message() {
        let error = PlannerError::EmptyPool {
            category: "hotels",
            destination: "Lisbon".to_string(),
        };
        assert_eq!(error.to_string(), "No hotels available for Lisbon");
        assert_eq!(error.error_code(), "EMPTY_PLACE_POOL");
    }
}
