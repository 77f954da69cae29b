//! Simulated planning backend.
//!
//! [`Simulator`] stands in for the network round trip a live planner would
//! make: it waits for a fixed delay, then answers from the catalog and the
//! synthesizers.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    str::FromStr,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};
use tracing::{debug, info};

use crate::{
    catalog::Catalog,
    config::{PlannerConfig, DEFAULT_SIMULATION_DELAY},
    error::{PlannerError, Result},
    synthesis::{BudgetSynthesizer, ItinerarySynthesizer},
    types::{AllocationTable, Budget, Itinerary, PlaceSet, TripRequest},
};

/// What a simulated request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationKind {
    Itinerary,
    Budget,
    Places,
}

impl SimulationKind {
    pub const ALL: [SimulationKind; 3] = [
        SimulationKind::Itinerary,
        SimulationKind::Budget,
        SimulationKind::Places,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationKind::Itinerary => "itinerary",
            SimulationKind::Budget => "budget",
            SimulationKind::Places => "places",
        }
    }
}

impl fmt::Display for SimulationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimulationKind {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "itinerary" => Ok(SimulationKind::Itinerary),
            "budget" => Ok(SimulationKind::Budget),
            "places" => Ok(SimulationKind::Places),
            other => Err(PlannerError::InvalidSimulationKind(other.to_string())),
        }
    }
}

/// Result of a simulated request, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum SimulationOutput {
    Itinerary(Itinerary),
    Budget(Budget),
    Places(PlaceSet),
}

impl SimulationOutput {
    pub fn kind(&self) -> SimulationKind {
        match self {
            SimulationOutput::Itinerary(_) => SimulationKind::Itinerary,
            SimulationOutput::Budget(_) => SimulationKind::Budget,
            SimulationOutput::Places(_) => SimulationKind::Places,
        }
    }

    pub fn into_itinerary(self) -> Option<Itinerary> {
        match self {
            SimulationOutput::Itinerary(itinerary) => Some(itinerary),
            _ => None,
        }
    }

    pub fn into_budget(self) -> Option<Budget> {
        match self {
            SimulationOutput::Budget(budget) => Some(budget),
            _ => None,
        }
    }

    pub fn into_places(self) -> Option<PlaceSet> {
        match self {
            SimulationOutput::Places(places) => Some(places),
            _ => None,
        }
    }
}

/// Single entry point for simulated planning requests.
///
/// Every call gets its own random source. When seeded, call `n` uses
/// `seed + n`, so a sequence of calls replays exactly.
#[derive(Debug)]
pub struct Simulator {
    catalog: Arc<Catalog>,
    budgets: BudgetSynthesizer,
    delay: Duration,
    seed: Option<u64>,
    start_date: Option<NaiveDate>,
    calls: AtomicU64,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::builtin(),
            budgets: BudgetSynthesizer::default(),
            delay: DEFAULT_SIMULATION_DELAY,
            seed: None,
            start_date: None,
            calls: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        let simulator = Self::new()
            .with_delay(config.simulation_delay)
            .with_allocations(config.allocations.clone());
        match config.seed {
            Some(seed) => simulator.with_seed(seed),
            None => simulator,
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_allocations(mut self, allocations: AllocationTable) -> Self {
        self.budgets = BudgetSynthesizer::new(allocations);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pin the first itinerary day instead of using today's date
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn next_rng(&self) -> ChaCha20Rng {
        let call = self.calls.fetch_add(1, Ordering::Relaxed);
        match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed.wrapping_add(call)),
            None => ChaCha20Rng::from_entropy(),
        }
    }

    /// Wait out the simulated latency, then answer `kind` for `request`.
    ///
    /// The request is not validated here; see [`TripRequest::validate`].
    pub async fn simulate(
        &self,
        kind: SimulationKind,
        request: &TripRequest,
    ) -> Result<SimulationOutput> {
        self.wait(kind, request).await;

        let output = match kind {
            SimulationKind::Itinerary => {
                SimulationOutput::Itinerary(self.build_itinerary(request)?)
            }
            SimulationKind::Budget => SimulationOutput::Budget(self.build_budget(request)),
            SimulationKind::Places => SimulationOutput::Places(self.build_places(request)),
        };

        debug!(%kind, "simulation complete");
        Ok(output)
    }

    /// Like [`Simulator::simulate`] with the kind given by name.
    ///
    /// An unknown name fails immediately, before the simulated delay.
    pub async fn simulate_named(
        &self,
        kind: &str,
        request: &TripRequest,
    ) -> Result<SimulationOutput> {
        let kind: SimulationKind = kind.parse()?;
        self.simulate(kind, request).await
    }

    pub async fn itinerary(&self, request: &TripRequest) -> Result<Itinerary> {
        self.wait(SimulationKind::Itinerary, request).await;
        self.build_itinerary(request)
    }

    pub async fn budget(&self, request: &TripRequest) -> Result<Budget> {
        self.wait(SimulationKind::Budget, request).await;
        Ok(self.build_budget(request))
    }

    pub async fn places(&self, request: &TripRequest) -> Result<PlaceSet> {
        self.wait(SimulationKind::Places, request).await;
        Ok(self.build_places(request))
    }

    async fn wait(&self, kind: SimulationKind, request: &TripRequest) {
        info!(
            %kind,
            destination = %request.destination,
            days = request.days,
            budget = request.budget,
            style = %request.travel_style,
            "simulating planner request"
        );
        tokio::time::sleep(self.delay).await;
    }

    fn build_itinerary(&self, request: &TripRequest) -> Result<Itinerary> {
        let mut rng = self.next_rng();
        let mut synthesizer = ItinerarySynthesizer::new(&self.catalog);
        if let Some(start_date) = self.start_date {
            synthesizer = synthesizer.starting_on(start_date);
        }
        synthesizer.generate(
            &request.destination,
            request.days,
            &request.interests,
            &mut rng,
        )
    }

    fn build_budget(&self, request: &TripRequest) -> Budget {
        self.budgets
            .allocate(request.budget, request.days, request.travel_style)
    }

    fn build_places(&self, request: &TripRequest) -> PlaceSet {
        self.catalog.places(&request.destination)
    }
}
