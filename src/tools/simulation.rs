use serde_json::Value;
use std::{pin::Pin, sync::Arc};

use super::Tool;
use crate::{
    error::{PlannerError, Result},
    simulation::{SimulationKind, SimulationOutput, Simulator},
    types::TripRequest,
};

/// Exposes one simulation kind through the JSON tool interface.
#[derive(Debug, Clone)]
pub struct SimulationTool {
    kind: SimulationKind,
    simulator: Arc<Simulator>,
}

impl SimulationTool {
    pub fn new(kind: SimulationKind, simulator: Arc<Simulator>) -> Self {
        Self { kind, simulator }
    }

    pub fn kind(&self) -> SimulationKind {
        self.kind
    }
}

/// Deserialize tool parameters, reporting the failing JSON path.
pub fn parse_request(parameters: Value) -> Result<TripRequest> {
    serde_path_to_error::deserialize(parameters).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        PlannerError::Validation(format!(
            "invalid trip request at {}: {}",
            location,
            err.into_inner()
        ))
    })
}

impl Tool for SimulationTool {
    fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    fn description(&self) -> &'static str {
        match self.kind {
            SimulationKind::Itinerary => {
                "Generate a day-by-day itinerary with a trip hotel, daily weather and five activities per day"
            }
            SimulationKind::Budget => {
                "Split a total trip budget across accommodation, food, attractions, transportation and miscellaneous"
            }
            SimulationKind::Places => {
                "List curated attractions, restaurants and hotels for a destination"
            }
        }
    }

    fn parameters_schema(&self) -> Value {
        let schema = schemars::schema_for!(TripRequest);
        serde_json::to_value(&schema.schema).unwrap_or_else(|_| {
            serde_json::json!({
                "type": "object",
                "properties": {},
                "required": []
            })
        })
    }

    fn execute(
        &self,
        parameters: Value,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Value>> + Send + '_>> {
        Box::pin(async move {
            let request = parse_request(parameters)?;
            request.validate(self.kind)?;

            let output = self.simulator.simulate(self.kind, &request).await?;
            let value = match output {
                SimulationOutput::Itinerary(itinerary) => serde_json::to_value(itinerary)?,
                SimulationOutput::Budget(budget) => serde_json::to_value(budget)?,
                SimulationOutput::Places(places) => serde_json::to_value(places)?,
            };
            Ok(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_reports_path() {
        let err = parse_request(serde_json::json!({
            "destination": "Paris",
            "days": -2
        }))
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("days"), "{}", message);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_schema_lists_request_fields() {
        let tool = SimulationTool::new(SimulationKind::Budget, Arc::new(Simulator::new()));
        let schema = tool.parameters_schema();
        let properties = &schema["properties"];
        for field in ["destination", "days", "budget", "travelStyle", "interests"] {
            assert!(properties.get(field).is_some(), "missing {}", field);
        }
    }
}
