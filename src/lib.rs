//! travel-plan-rs: itinerary and budget synthesis for trip planning
//!
//! The crate is the simulated backend of a travel planner. Given a destination,
//! trip length, budget and travel style it produces a day-by-day itinerary and
//! a category budget, drawing places from a curated catalog.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use travel_plan_rs::{Simulator, TravelStyle, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let simulator = Simulator::new();
//!     let request = TripRequest::new("Tokyo", 3).with_budget(1500, TravelStyle::Standard);
//!
//!     let itinerary = simulator.itinerary(&request).await?;
//!     let budget = simulator.budget(&request).await?;
//!     println!("{} nights at {}", itinerary.days, itinerary.hotel.name);
//!     println!("{}", budget.summary());
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod simulation;
pub mod synthesis;
pub mod tools;
pub mod types;

pub use catalog::{Catalog, Resolution};
pub use config::{PlannerConfig, Units};
pub use error::{PlannerError, Result};
pub use simulation::{SimulationKind, SimulationOutput, Simulator};
pub use synthesis::{allocate, BudgetSynthesizer, ItinerarySynthesizer};
pub use tools::{Tool, ToolRegistry};
pub use types::{
    format_currency, Budget, DayPlan, Interests, Itinerary, Place, PlaceCategory, PlaceSet,
    TravelStyle, TripRequest,
};

#[cfg(feature = "cli")]
pub mod cli;
