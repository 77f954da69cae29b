//! Curated place catalog keyed by destination and category.

mod data;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, sync::Arc};
use tracing::debug;

use crate::{
    config::DEFAULT_DESTINATION,
    types::{Place, PlaceCategory, PlaceSet},
};

static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(data::builtin_catalog()));

/// Where a lookup actually found its places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Destination whose places were returned
    pub destination: String,
    /// True when the requested destination had no entry
    pub used_fallback: bool,
}

/// Read-only lookup of places.
///
/// A miss never fails: the default destination's places are returned in its
/// place. Each category falls back on its own, so a destination may have
/// hotels but borrow its restaurants from the default.
#[derive(Debug, Clone)]
pub struct Catalog {
    default_destination: String,
    pools: HashMap<PlaceCategory, HashMap<String, Vec<Place>>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_DESTINATION)
    }
}

impl Catalog {
    /// Create an empty catalog
    pub fn new(default_destination: impl Into<String>) -> Self {
        Self {
            default_destination: default_destination.into(),
            pools: HashMap::new(),
        }
    }

    /// Shared handle to the built-in Paris / New York / Tokyo catalog
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    pub fn insert(
        &mut self,
        category: PlaceCategory,
        destination: impl Into<String>,
        places: Vec<Place>,
    ) {
        self.pools
            .entry(category)
            .or_default()
            .insert(destination.into(), places);
    }

    pub fn with_places(
        mut self,
        category: PlaceCategory,
        destination: impl Into<String>,
        places: Vec<Place>,
    ) -> Self {
        self.insert(category, destination, places);
        self
    }

    pub fn default_destination(&self) -> &str {
        &self.default_destination
    }

    /// Destinations with an entry for `category`, sorted
    pub fn destinations(&self, category: PlaceCategory) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .pools
            .get(&category)
            .map(|pool| pool.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    fn entry(&self, category: PlaceCategory, destination: &str) -> Option<&Vec<Place>> {
        self.pools
            .get(&category)
            .and_then(|pool| pool.get(destination))
    }

    /// Report which destination's places `lookup` would return.
    pub fn resolve(&self, category: PlaceCategory, destination: &str) -> Resolution {
        if self.entry(category, destination).is_some() {
            Resolution {
                destination: destination.to_string(),
                used_fallback: false,
            }
        } else {
            Resolution {
                destination: self.default_destination.clone(),
                used_fallback: true,
            }
        }
    }

    /// Places of `category` for `destination`, or the default destination's
    /// places on a miss. Empty only if the default has no entry either.
    pub fn lookup(&self, category: PlaceCategory, destination: &str) -> &[Place] {
        if let Some(places) = self.entry(category, destination) {
            return places;
        }

        debug!(
            %category,
            destination,
            fallback = %self.default_destination,
            "destination not in catalog"
        );
        self.entry(category, &self.default_destination)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All three categories for `destination`
    pub fn places(&self, destination: &str) -> PlaceSet {
        PlaceSet {
            attractions: self
                .lookup(PlaceCategory::Attractions, destination)
                .to_vec(),
            restaurants: self
                .lookup(PlaceCategory::Restaurants, destination)
                .to_vec(),
            hotels: self.lookup(PlaceCategory::Hotels, destination).to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_destinations_share_keys() {
        let catalog = Catalog::builtin();
        for category in PlaceCategory::ALL {
            assert_eq!(
                catalog.destinations(category),
                vec!["New York", "Paris", "Tokyo"]
            );
        }
    }

    #[test]
    fn test_pool_sizes() {
        let catalog = Catalog::builtin();
        for destination in ["Paris", "New York", "Tokyo"] {
            assert_eq!(
                catalog
                    .lookup(PlaceCategory::Attractions, destination)
                    .len(),
                6
            );
            assert_eq!(
                catalog
                    .lookup(PlaceCategory::Restaurants, destination)
                    .len(),
                5
            );
            assert_eq!(catalog.lookup(PlaceCategory::Hotels, destination).len(), 5);
        }
    }

    #[test]
    fn test_unknown_destination_falls_back_to_paris() {
        let catalog = Catalog::builtin();
        for category in PlaceCategory::ALL {
            assert_eq!(
                catalog.lookup(category, "Nonexistent-City"),
                catalog.lookup(category, "Paris")
            );
            let resolution = catalog.resolve(category, "Nonexistent-City");
            assert_eq!(resolution.destination, "Paris");
            assert!(resolution.used_fallback);
        }

        let resolution = catalog.resolve(PlaceCategory::Hotels, "Tokyo");
        assert_eq!(resolution.destination, "Tokyo");
        assert!(!resolution.used_fallback);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = Catalog::builtin();
        assert!(
            catalog
                .resolve(PlaceCategory::Attractions, "tokyo")
                .used_fallback
        );
    }

    #[test]
    fn test_categories_fall_back_independently() {
        let hostel =
            Place::new("Lisbon Hostel", 4.1, 900, "Rua Augusta", 38.71, -9.14).with_price(1);
        let catalog = Catalog::new("Paris")
            .with_places(PlaceCategory::Hotels, "Lisbon", vec![hostel.clone()])
            .with_places(
                PlaceCategory::Restaurants,
                "Paris",
                Catalog::builtin()
                    .lookup(PlaceCategory::Restaurants, "Paris")
                    .to_vec(),
            );

        assert_eq!(catalog.lookup(PlaceCategory::Hotels, "Lisbon"), &[hostel]);
        assert_eq!(
            catalog.lookup(PlaceCategory::Restaurants, "Lisbon").len(),
            5
        );
        assert!(
            catalog
                .resolve(PlaceCategory::Restaurants, "Lisbon")
                .used_fallback
        );
        // no attractions anywhere, not even for the default
        assert!(catalog
            .lookup(PlaceCategory::Attractions, "Lisbon")
            .is_empty());
    }

    #[test]
    fn test_places_returns_all_categories() {
        let set = Catalog::builtin().places("New York");
        assert_eq!(set.attractions[0].name, "Statue of Liberty");
        assert_eq!(set.restaurants.len(), 5);
        assert!(set.hotels.iter().all(|hotel| hotel.price.is_some()));
    }
}
