use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::place::Place;
use crate::{catalog::Resolution, config::Units};

/// Sky condition sampled for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Sunny,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
    Cloudy,
    Rainy,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Sunny,
        WeatherCondition::PartlyCloudy,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rainy => "Rainy",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weather sample for one day. `temp` is in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub temp: i32,
    pub condition: WeatherCondition,
}

impl Weather {
    pub fn display_temp(&self, units: Units) -> String {
        match units {
            Units::Metric => format!("{}°C", self.temp),
            Units::Imperial => {
                let fahrenheit = (f64::from(self.temp) * 9.0 / 5.0 + 32.0).round();
                format!("{}°F", fahrenheit as i32)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Attraction,
    Food,
    Accommodation,
}

impl ActivityType {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Attraction => "Attraction",
            ActivityType::Food => "Food",
            ActivityType::Accommodation => "Accommodation",
        }
    }
}

/// A time-boxed entry in a day's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Display range such as `09:00 - 12:00`
    pub time: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub place: Place,
    pub notes: String,
}

/// One day of the trip, activities in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day counter within the itinerary
    pub day: u32,
    pub date: NaiveDate,
    pub weather: Weather,
    pub activities: Vec<Activity>,
}

/// How each place pool behind an itinerary was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSources {
    pub attractions: Resolution,
    pub restaurants: Resolution,
    pub hotels: Resolution,
}

impl PoolSources {
    pub fn any_fallback(&self) -> bool {
        self.attractions.used_fallback
            || self.restaurants.used_fallback
            || self.hotels.used_fallback
    }
}

/// Day-by-day trip schedule.
///
/// `destination` is the label the caller asked for. When the catalog had no
/// data for it, the places come from the default destination and `sources`
/// records that substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub destination: String,
    pub days: u32,
    pub hotel: Place,
    pub itinerary: Vec<DayPlan>,
    pub sources: PoolSources,
}

impl Itinerary {
    /// Human-readable report of the trip
    pub fn summary(&self, units: Units) -> String {
        let mut lines = Vec::new();

        lines.push(format!("=== Trip to {} ===", self.destination));
        lines.push(format!("Duration: {} days", self.days));
        lines.push(format!(
            "Accommodation: {} {} ({} reviews)",
            self.hotel.name,
            self.hotel.stars(),
            self.hotel.reviews
        ));
        lines.push(format!("  {}", self.hotel.address));
        if self.sources.any_fallback() {
            lines.push(format!(
                "Note: no curated places for {}; showing {} instead",
                self.destination, self.sources.attractions.destination
            ));
        }

        for day in &self.itinerary {
            lines.push(String::new());
            lines.push(format!(
                "--- Day {} - {} | {} {} ---",
                day.day,
                day.date.format("%A, %B %-d, %Y"),
                day.weather.condition,
                day.weather.display_temp(units)
            ));
            for activity in &day.activities {
                let price = match (activity.kind, activity.place.price_level()) {
                    (ActivityType::Food, Some(level)) => format!(" {}", level),
                    _ => String::new(),
                };
                lines.push(format!(
                    "  {:<15} [{}] {}{}",
                    activity.time,
                    activity.kind.label(),
                    activity.place.name,
                    price
                ));
                lines.push(format!("  {:<15} {}", "", activity.notes));
            }
        }

        lines.join("\n")
    }
}
