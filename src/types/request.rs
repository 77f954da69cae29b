use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::budget::TravelStyle;
use crate::{
    config::{MAX_DAYS, MIN_BUDGET, MIN_DAYS},
    error::{PlannerError, Result},
    simulation::SimulationKind,
};

/// Interest tags picked by the traveller (e.g. "museums", "food").
///
/// Accepted everywhere a trip is planned but not used for place selection yet.
pub type Interests = BTreeSet<String>;

/// Trip parameters as submitted by the planning form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    /// Destination city (e.g. "Tokyo")
    #[serde(default)]
    pub destination: String,
    /// Trip length in days
    #[serde(default = "default_days")]
    pub days: u32,
    /// Total budget in whole currency units
    #[serde(default)]
    pub budget: i64,
    /// One of "budget", "standard" or "luxury"
    #[serde(default)]
    pub travel_style: TravelStyle,
    /// Interest tags from the form checkboxes
    #[serde(default)]
    pub interests: Interests,
}

fn default_days() -> u32 {
    MIN_DAYS
}

impl TripRequest {
    pub fn new(destination: impl Into<String>, days: u32) -> Self {
        Self {
            destination: destination.into(),
            days,
            budget: 0,
            travel_style: TravelStyle::default(),
            interests: Interests::new(),
        }
    }

    pub fn with_budget(mut self, budget: i64, travel_style: TravelStyle) -> Self {
        self.budget = budget;
        self.travel_style = travel_style;
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    /// Apply the form rules for the fields `kind` actually uses.
    pub fn validate(&self, kind: SimulationKind) -> Result<()> {
        let needs_destination = matches!(kind, SimulationKind::Itinerary | SimulationKind::Places);
        let needs_days = matches!(kind, SimulationKind::Itinerary | SimulationKind::Budget);
        let needs_budget = matches!(kind, SimulationKind::Budget);

        if needs_destination && self.destination.trim().is_empty() {
            return Err(PlannerError::Validation(
                "destination must not be empty".to_string(),
            ));
        }
        if needs_days && !(MIN_DAYS..=MAX_DAYS).contains(&self.days) {
            return Err(PlannerError::Validation(format!(
                "days must be between {} and {}, got {}",
                MIN_DAYS, MAX_DAYS, self.days
            )));
        }
        if needs_budget && self.budget < MIN_BUDGET {
            return Err(PlannerError::Validation(format!(
                "budget must be at least {}, got {}",
                MIN_BUDGET, self.budget
            )));
        }
        Ok(())
    }
}
