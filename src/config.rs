//! Runtime configuration, read from the environment.

use serde::{Deserialize, Serialize};
use std::{env, str::FromStr, time::Duration};
use tracing::debug;

use crate::{
    error::{PlannerError, Result},
    types::AllocationTable,
};

/// Artificial latency before a simulated response is returned.
pub const DEFAULT_SIMULATION_DELAY: Duration = Duration::from_secs(2);
/// Destination whose places stand in for unknown destinations.
pub const DEFAULT_DESTINATION: &str = "Paris";
pub const DEFAULT_CURRENCY: &str = "USD";
/// Smallest budget the planning form accepts.
pub const MIN_BUDGET: i64 = 100;
pub const MIN_DAYS: u32 = 1;
/// Longest trip the planner will schedule.
pub const MAX_DAYS: u32 = 365;

const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Measurement system for displayed temperatures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl FromStr for Units {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            other => Err(PlannerError::Config(format!(
                "units must be `metric` or `imperial`, got `{}`",
                other
            ))),
        }
    }
}

/// Keys for the live place, weather and exchange-rate services.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiCredentials {
    pub google_maps_api_key: Option<String>,
    pub openweather_api_key: Option<String>,
    pub exchange_rate_api_key: Option<String>,
}

impl ApiCredentials {
    pub fn from_env() -> Self {
        Self {
            google_maps_api_key: read_key("GOOGLE_MAPS_API_KEY"),
            openweather_api_key: read_key("OPENWEATHER_API_KEY"),
            exchange_rate_api_key: read_key("EXCHANGE_RATE_API_KEY"),
        }
    }

    /// True when every live service has a usable key.
    pub fn is_complete(&self) -> bool {
        self.google_maps_api_key.is_some()
            && self.openweather_api_key.is_some()
            && self.exchange_rate_api_key.is_some()
    }
}

/// Missing, blank and `YOUR_...` placeholder keys all count as unset.
fn read_key(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty() && !value.starts_with(PLACEHOLDER_PREFIX))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub simulation_delay: Duration,
    pub seed: Option<u64>,
    pub currency: String,
    pub units: Units,
    pub credentials: ApiCredentials,
    pub allocations: AllocationTable,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            simulation_delay: DEFAULT_SIMULATION_DELAY,
            seed: None,
            currency: DEFAULT_CURRENCY.to_string(),
            units: Units::default(),
            credentials: ApiCredentials::default(),
            allocations: AllocationTable::default(),
        }
    }
}

impl PlannerConfig {
    /// Build the configuration from `TRAVEL_PLAN_*` variables and API keys.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(delay_ms) = parse_var::<u64>("TRAVEL_PLAN_SIMULATION_DELAY_MS")? {
            config.simulation_delay = Duration::from_millis(delay_ms);
        }
        config.seed = parse_var::<u64>("TRAVEL_PLAN_SEED")?;
        if let Ok(currency) = env::var("TRAVEL_PLAN_CURRENCY") {
            config.currency = currency.trim().to_ascii_uppercase();
        }
        if let Ok(units) = env::var("TRAVEL_PLAN_UNITS") {
            config.units = units.parse()?;
        }
        config.credentials = ApiCredentials::from_env();

        let delay_ms = u64::try_from(config.simulation_delay.as_millis()).unwrap_or(u64::MAX);
        debug!(
            delay_ms,
            seeded = config.seed.is_some(),
            live_apis = config.uses_live_apis(),
            "loaded planner configuration"
        );
        Ok(config)
    }

    pub fn with_simulation_delay(mut self, delay: Duration) -> Self {
        self.simulation_delay = delay;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_allocations(mut self, allocations: AllocationTable) -> Self {
        self.allocations = allocations;
        self
    }

    /// Whether live API calls could replace the simulated backend.
    pub fn uses_live_apis(&self) -> bool {
        self.credentials.is_complete()
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|err| PlannerError::Config(format!("invalid {}: {}", name, err))),
        Err(_) => Ok(None),
    }
}
