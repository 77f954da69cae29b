use chrono::{Days, NaiveDate, Utc};
use rand::{seq::SliceRandom, Rng};
use tracing::{debug, warn};

use crate::{
    catalog::Catalog,
    config::MAX_DAYS,
    error::{PlannerError, Result},
    types::{
        Activity, ActivityType, DayPlan, Interests, Itinerary, Place, PlaceCategory, PoolSources,
        Weather, WeatherCondition,
    },
};

const MIN_TEMP_C: i32 = 15;
const MAX_TEMP_C: i32 = 30;

struct Slot {
    time: &'static str,
    kind: ActivityType,
    notes: &'static str,
}

const DAY_SLOTS: [Slot; 5] = [
    Slot {
        time: "09:00 - 12:00",
        kind: ActivityType::Attraction,
        notes: "Morning visit to enjoy smaller crowds",
    },
    Slot {
        time: "12:30 - 14:00",
        kind: ActivityType::Food,
        notes: "Lunch break",
    },
    Slot {
        time: "14:30 - 17:30",
        kind: ActivityType::Attraction,
        notes: "Afternoon exploration",
    },
    Slot {
        time: "19:00 - 21:00",
        kind: ActivityType::Food,
        notes: "Dinner",
    },
    Slot {
        time: "21:30",
        kind: ActivityType::Accommodation,
        notes: "Return to hotel",
    },
];

/// Builds day-by-day schedules from catalog place pools.
#[derive(Debug, Clone)]
pub struct ItinerarySynthesizer<'a> {
    catalog: &'a Catalog,
    start_date: NaiveDate,
}

impl<'a> ItinerarySynthesizer<'a> {
    /// Synthesizer whose trips start today (UTC)
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            start_date: Utc::now().date_naive(),
        }
    }

    pub fn starting_on(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Generate a `days`-long itinerary for `destination`.
    ///
    /// One hotel is drawn for the whole stay. Attractions and restaurants are
    /// drawn independently for every slot, so repeats are possible.
    /// `interests` does not influence selection.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        destination: &str,
        days: u32,
        interests: &Interests,
        rng: &mut R,
    ) -> Result<Itinerary> {
        let sources = PoolSources {
            attractions: self
                .catalog
                .resolve(PlaceCategory::Attractions, destination),
            restaurants: self
                .catalog
                .resolve(PlaceCategory::Restaurants, destination),
            hotels: self.catalog.resolve(PlaceCategory::Hotels, destination),
        };
        if sources.any_fallback() {
            warn!(
                destination,
                fallback = self.catalog.default_destination(),
                "no curated places for destination, using default pool"
            );
        }
        debug!(destination, days, ?interests, "generating itinerary");

        let attractions = self.catalog.lookup(PlaceCategory::Attractions, destination);
        let restaurants = self.catalog.lookup(PlaceCategory::Restaurants, destination);
        let hotels = self.catalog.lookup(PlaceCategory::Hotels, destination);

        if days > MAX_DAYS {
            return Err(PlannerError::Validation(format!(
                "trips are limited to {} days, got {}",
                MAX_DAYS, days
            )));
        }
        let last_offset = u64::from(days.saturating_sub(1));
        if self
            .start_date
            .checked_add_days(Days::new(last_offset))
            .is_none()
        {
            return Err(PlannerError::Validation(format!(
                "a {}-day trip from {} is past the supported calendar",
                days, self.start_date
            )));
        }

        let hotel = pick(hotels, PlaceCategory::Hotels, destination, rng)?.clone();

        let mut itinerary = Vec::with_capacity(days as usize);
        for day in 1..=days {
            let date = self.start_date + Days::new(u64::from(day - 1));

            let weather = Weather {
                temp: rng.gen_range(MIN_TEMP_C..=MAX_TEMP_C),
                condition: WeatherCondition::ALL[rng.gen_range(0..WeatherCondition::ALL.len())],
            };

            let mut activities = Vec::with_capacity(DAY_SLOTS.len());
            for slot in &DAY_SLOTS {
                let place = match slot.kind {
                    ActivityType::Attraction => {
                        pick(attractions, PlaceCategory::Attractions, destination, rng)?.clone()
                    }
                    ActivityType::Food => {
                        pick(restaurants, PlaceCategory::Restaurants, destination, rng)?.clone()
                    }
                    ActivityType::Accommodation => hotel.clone(),
                };
                activities.push(Activity {
                    time: slot.time.to_string(),
                    kind: slot.kind,
                    place,
                    notes: slot.notes.to_string(),
                });
            }

            itinerary.push(DayPlan {
                day,
                date,
                weather,
                activities,
            });
        }

        Ok(Itinerary {
            destination: destination.to_string(),
            days,
            hotel,
            itinerary,
            sources,
        })
    }
}

fn pick<'p, R: Rng + ?Sized>(
    pool: &'p [Place],
    category: PlaceCategory,
    destination: &str,
    rng: &mut R,
) -> Result<&'p Place> {
    pool.choose(rng).ok_or_else(|| PlannerError::EmptyPool {
        category: category.as_str(),
        destination: destination.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()
    }

    #[test]
    fn test_tokyo_three_days() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(42);
        let itinerary = ItinerarySynthesizer::new(&catalog)
            .starting_on(start())
            .generate("Tokyo", 3, &Interests::new(), &mut rng)
            .unwrap();

        assert_eq!(itinerary.destination, "Tokyo");
        assert_eq!(itinerary.days, 3);
        assert_eq!(itinerary.itinerary.len(), 3);
        assert!(catalog
            .lookup(PlaceCategory::Hotels, "Tokyo")
            .contains(&itinerary.hotel));
        assert!(!itinerary.sources.any_fallback());

        for day in &itinerary.itinerary {
            assert!((15..=30).contains(&day.weather.temp));
        }
    }

    #[test]
    fn test_day_shape() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(7);
        let itinerary = ItinerarySynthesizer::new(&catalog)
            .starting_on(start())
            .generate("Paris", 5, &Interests::new(), &mut rng)
            .unwrap();

        let attractions = catalog.lookup(PlaceCategory::Attractions, "Paris");
        let restaurants = catalog.lookup(PlaceCategory::Restaurants, "Paris");
        for (idx, day) in itinerary.itinerary.iter().enumerate() {
            assert_eq!(day.day as usize, idx + 1);
            let kinds: Vec<ActivityType> = day.activities.iter().map(|a| a.kind).collect();
            assert_eq!(
                kinds,
                vec![
                    ActivityType::Attraction,
                    ActivityType::Food,
                    ActivityType::Attraction,
                    ActivityType::Food,
                    ActivityType::Accommodation,
                ]
            );
            assert!(attractions.contains(&day.activities[0].place));
            assert!(restaurants.contains(&day.activities[1].place));
            assert!(attractions.contains(&day.activities[2].place));
            assert!(restaurants.contains(&day.activities[3].place));
            assert_eq!(day.activities[4].place, itinerary.hotel);
            assert_eq!(day.activities[4].time, "21:30");
            assert_eq!(
                day.activities[0].notes,
                "Morning visit to enjoy smaller crowds"
            );
        }
    }

    #[test]
    fn test_dates_are_consecutive_across_year_end() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(1);
        let itinerary = ItinerarySynthesizer::new(&catalog)
            .starting_on(start())
            .generate("New York", 4, &Interests::new(), &mut rng)
            .unwrap();

        let dates: Vec<String> = itinerary
            .itinerary
            .iter()
            .map(|day| day.date.to_string())
            .collect();
        assert_eq!(
            dates,
            vec!["2024-12-30", "2024-12-31", "2025-01-01", "2025-01-02"]
        );
    }

    #[test]
    fn test_unknown_destination_keeps_requested_label() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(3);
        let itinerary = ItinerarySynthesizer::new(&catalog)
            .generate("Atlantis", 2, &Interests::new(), &mut rng)
            .unwrap();

        assert_eq!(itinerary.destination, "Atlantis");
        assert!(itinerary.sources.hotels.used_fallback);
        assert_eq!(itinerary.sources.hotels.destination, "Paris");
        assert!(catalog
            .lookup(PlaceCategory::Hotels, "Paris")
            .contains(&itinerary.hotel));
    }

    #[test]
    fn test_same_seed_same_itinerary() {
        let catalog = Catalog::builtin();
        let synthesizer = ItinerarySynthesizer::new(&catalog).starting_on(start());
        let first = synthesizer
            .generate(
                "Tokyo",
                4,
                &Interests::new(),
                &mut SmallRng::seed_from_u64(99),
            )
            .unwrap();
        let second = synthesizer
            .generate(
                "Tokyo",
                4,
                &Interests::new(),
                &mut SmallRng::seed_from_u64(99),
            )
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_interests_do_not_change_selection() {
        let catalog = Catalog::builtin();
        let synthesizer = ItinerarySynthesizer::new(&catalog).starting_on(start());
        let interests: Interests = ["museums", "nightlife"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let plain = synthesizer
            .generate(
                "Paris",
                3,
                &Interests::new(),
                &mut SmallRng::seed_from_u64(5),
            )
            .unwrap();
        let tagged = synthesizer
            .generate("Paris", 3, &interests, &mut SmallRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(plain, tagged);
    }

    #[test]
    fn test_overlong_trip_is_an_error() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(13);
        let err = ItinerarySynthesizer::new(&catalog)
            .starting_on(start())
            .generate("Paris", u32::MAX, &Interests::new(), &mut rng)
            .unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_trip_past_calendar_end_is_an_error() {
        let catalog = Catalog::builtin();
        let mut rng = SmallRng::seed_from_u64(17);
        let err = ItinerarySynthesizer::new(&catalog)
            .starting_on(NaiveDate::MAX)
            .generate("Tokyo", 2, &Interests::new(), &mut rng)
            .unwrap_err();
        assert!(err.to_string().contains("calendar"), "{}", err);
    }

    #[test]
    fn test_empty_pool_fails_whole_synthesis() {
        let catalog = Catalog::new("Paris").with_places(
            PlaceCategory::Hotels,
            "Paris",
            Catalog::builtin()
                .lookup(PlaceCategory::Hotels, "Paris")
                .to_vec(),
        );
        let mut rng = SmallRng::seed_from_u64(11);
        let err = ItinerarySynthesizer::new(&catalog)
            .generate("Paris", 2, &Interests::new(), &mut rng)
            .unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_PLACE_POOL");
        assert!(err.to_string().contains("attractions"));
    }
}
