use tracing::debug;

use crate::types::{
    AllocationTable, Budget, BudgetBreakdown, BudgetCategory, BudgetDetails, DailyDetail,
    FoodDetail, LodgingDetail, MealBreakdown, TravelStyle,
};

const BREAKFAST_SHARE: f64 = 0.2;
const LUNCH_SHARE: f64 = 0.3;
const DINNER_SHARE: f64 = 0.4;
const SNACKS_SHARE: f64 = 0.1;

const ATTRACTIONS_NOTES: &str = "Includes entrance fees, tours, and activities";
const TRANSPORTATION_NOTES: &str = "Local transportation, taxis, and car rentals if applicable";
const MISCELLANEOUS_NOTES: &str = "Souvenirs, tips, and unexpected expenses";

/// Splits a trip budget across categories using an allocation table.
#[derive(Debug, Clone, Default)]
pub struct BudgetSynthesizer {
    allocations: AllocationTable,
}

impl BudgetSynthesizer {
    pub fn new(allocations: AllocationTable) -> Self {
        Self { allocations }
    }

    pub fn allocations(&self) -> &AllocationTable {
        &self.allocations
    }

    /// Allocate `total_budget` over `days` for `travel_style`.
    ///
    /// Every category except miscellaneous is `round(total * fraction)`;
    /// miscellaneous takes whatever is left so the breakdown sums to the total
    /// exactly. Rounding is half away from zero throughout. `days` must be
    /// non-zero.
    pub fn allocate(&self, total_budget: i64, days: u32, travel_style: TravelStyle) -> Budget {
        let allocation = self.allocations.for_style(travel_style);
        let total = total_budget as f64;

        let mut breakdown = BudgetBreakdown::default();
        let mut remaining = total_budget;
        for category in BudgetCategory::ALL {
            if category == BudgetCategory::Miscellaneous {
                continue;
            }
            let amount = (total * allocation.fraction(category)).round() as i64;
            breakdown.set(category, amount);
            remaining -= amount;
        }
        breakdown.miscellaneous = remaining;

        let daily_budget = per_day(total_budget, days);
        debug!(
            total_budget,
            days,
            style = %travel_style,
            miscellaneous = remaining,
            "allocated budget"
        );

        let food = breakdown.food as f64;
        let details = BudgetDetails {
            accommodation: LodgingDetail {
                total: breakdown.accommodation,
                per_night: per_day(breakdown.accommodation, days),
                notes: travel_style.lodging_notes().to_string(),
            },
            food: FoodDetail {
                total: breakdown.food,
                per_day: per_day(breakdown.food, days),
                breakdown: MealBreakdown {
                    breakfast: meal_share(food, BREAKFAST_SHARE, days),
                    lunch: meal_share(food, LUNCH_SHARE, days),
                    dinner: meal_share(food, DINNER_SHARE, days),
                    snacks: meal_share(food, SNACKS_SHARE, days),
                },
            },
            attractions: daily_detail(breakdown.attractions, days, ATTRACTIONS_NOTES),
            transportation: daily_detail(breakdown.transportation, days, TRANSPORTATION_NOTES),
            miscellaneous: daily_detail(breakdown.miscellaneous, days, MISCELLANEOUS_NOTES),
        };

        Budget {
            total_budget,
            daily_budget,
            days,
            travel_style,
            breakdown,
            details,
        }
    }
}

/// Allocate with the default allocation table.
pub fn allocate(total_budget: i64, days: u32, travel_style: TravelStyle) -> Budget {
    BudgetSynthesizer::default().allocate(total_budget, days, travel_style)
}

fn per_day(amount: i64, days: u32) -> i64 {
    (amount as f64 / f64::from(days)).round() as i64
}

fn meal_share(food_total: f64, share: f64, days: u32) -> i64 {
    (food_total * share / f64::from(days)).round() as i64
}

fn daily_detail(total: i64, days: u32, notes: &str) -> DailyDetail {
    DailyDetail {
        total,
        per_day: per_day(total, days),
        notes: notes.to_string(),
    }
}
