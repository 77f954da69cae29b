//! Mock itinerary and budget synthesis.

pub mod budget;
pub mod itinerary;

pub use budget::{allocate, BudgetSynthesizer};
pub use itinerary::ItinerarySynthesizer;
