pub mod budget;
pub mod itinerary;
pub mod place;
pub mod request;

pub use budget::{
    format_currency, AllocationTable, Budget, BudgetAllocation, BudgetBreakdown, BudgetCategory,
    BudgetDetails, DailyDetail, FoodDetail, LodgingDetail, MealBreakdown, TravelStyle,
};
pub use itinerary::{
    Activity, ActivityType, DayPlan, Itinerary, PoolSources, Weather, WeatherCondition,
};
pub use place::{Place, PlaceCategory, PlaceSet};
pub use request::{Interests, TripRequest};
