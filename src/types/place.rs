use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::PlannerError;

/// A curated attraction, restaurant or hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    /// Average rating on a 0-5 scale
    pub rating: f64,
    pub reviews: u32,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    /// Price level 1-4, only set for restaurants and hotels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u8>,
}

impl Place {
    pub fn new(
        name: impl Into<String>,
        rating: f64,
        reviews: u32,
        address: impl Into<String>,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self {
            name: name.into(),
            rating,
            reviews,
            address: address.into(),
            lat,
            lng,
            price: None,
        }
    }

    pub fn with_price(mut self, price: u8) -> Self {
        self.price = Some(price.clamp(1, 4));
        self
    }

    /// Rating rounded to whole stars, e.g. `★★★★★` for 4.7
    pub fn stars(&self) -> String {
        let count = self.rating.round().clamp(0.0, 5.0) as usize;
        "★".repeat(count)
    }

    /// Price level as filled dollar signs out of four, e.g. `$$··`
    pub fn price_level(&self) -> Option<String> {
        self.price.map(|level| {
            let filled = usize::from(level.min(4));
            format!("{}{}", "$".repeat(filled), "·".repeat(4 - filled))
        })
    }
}

/// The three place categories held by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceCategory {
    Attractions,
    Restaurants,
    Hotels,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 3] = [
        PlaceCategory::Attractions,
        PlaceCategory::Restaurants,
        PlaceCategory::Hotels,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceCategory::Attractions => "attractions",
            PlaceCategory::Restaurants => "restaurants",
            PlaceCategory::Hotels => "hotels",
        }
    }
}

impl fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaceCategory {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attractions" => Ok(PlaceCategory::Attractions),
            "restaurants" => Ok(PlaceCategory::Restaurants),
            "hotels" => Ok(PlaceCategory::Hotels),
            other => Err(PlannerError::UnknownCategory(other.to_string())),
        }
    }
}

/// All three place pools for one destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSet {
    pub attractions: Vec<Place>,
    pub restaurants: Vec<Place>,
    pub hotels: Vec<Place>,
}
