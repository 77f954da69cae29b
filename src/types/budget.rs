use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::PlannerError;

/// Travel style, selects the allocation percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Budget,
    #[default]
    Standard,
    Luxury,
}

impl TravelStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Budget => "budget",
            TravelStyle::Standard => "standard",
            TravelStyle::Luxury => "luxury",
        }
    }

    /// Lodging guidance shown alongside the accommodation amount
    pub fn lodging_notes(&self) -> &'static str {
        match self {
            TravelStyle::Budget => "Hostels or budget hotels",
            TravelStyle::Standard => "Mid-range hotels",
            TravelStyle::Luxury => "Luxury hotels",
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelStyle {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "budget" => Ok(TravelStyle::Budget),
            "standard" => Ok(TravelStyle::Standard),
            "luxury" => Ok(TravelStyle::Luxury),
            _ => Err(PlannerError::UnknownTravelStyle(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetCategory {
    Accommodation,
    Food,
    Attractions,
    Transportation,
    Miscellaneous,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 5] = [
        BudgetCategory::Accommodation,
        BudgetCategory::Food,
        BudgetCategory::Attractions,
        BudgetCategory::Transportation,
        BudgetCategory::Miscellaneous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BudgetCategory::Accommodation => "Accommodation",
            BudgetCategory::Food => "Food",
            BudgetCategory::Attractions => "Attractions",
            BudgetCategory::Transportation => "Transportation",
            BudgetCategory::Miscellaneous => "Miscellaneous",
        }
    }
}

/// Fraction of the total budget given to each category.
///
/// The five fractions of a style are expected to sum to 1.0. That is not
/// checked; the miscellaneous share is recomputed from the remainder anyway.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub accommodation: f64,
    pub food: f64,
    pub attractions: f64,
    pub transportation: f64,
    pub miscellaneous: f64,
}

impl BudgetAllocation {
    pub fn fraction(&self, category: BudgetCategory) -> f64 {
        match category {
            BudgetCategory::Accommodation => self.accommodation,
            BudgetCategory::Food => self.food,
            BudgetCategory::Attractions => self.attractions,
            BudgetCategory::Transportation => self.transportation,
            BudgetCategory::Miscellaneous => self.miscellaneous,
        }
    }
}

/// Allocation percentages for every travel style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationTable {
    pub budget: BudgetAllocation,
    pub standard: BudgetAllocation,
    pub luxury: BudgetAllocation,
}

impl AllocationTable {
    pub fn for_style(&self, style: TravelStyle) -> &BudgetAllocation {
        match style {
            TravelStyle::Budget => &self.budget,
            TravelStyle::Standard => &self.standard,
            TravelStyle::Luxury => &self.luxury,
        }
    }
}

impl Default for AllocationTable {
    fn default() -> Self {
        Self {
            budget: BudgetAllocation {
                accommodation: 0.30,
                food: 0.30,
                attractions: 0.20,
                transportation: 0.15,
                miscellaneous: 0.05,
            },
            standard: BudgetAllocation {
                accommodation: 0.35,
                food: 0.25,
                attractions: 0.20,
                transportation: 0.15,
                miscellaneous: 0.05,
            },
            luxury: BudgetAllocation {
                accommodation: 0.40,
                food: 0.25,
                attractions: 0.15,
                transportation: 0.15,
                miscellaneous: 0.05,
            },
        }
    }
}

/// Whole-unit amount per category. Always sums to the trip total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub accommodation: i64,
    pub food: i64,
    pub attractions: i64,
    pub transportation: i64,
    pub miscellaneous: i64,
}

impl BudgetBreakdown {
    pub fn amount(&self, category: BudgetCategory) -> i64 {
        match category {
            BudgetCategory::Accommodation => self.accommodation,
            BudgetCategory::Food => self.food,
            BudgetCategory::Attractions => self.attractions,
            BudgetCategory::Transportation => self.transportation,
            BudgetCategory::Miscellaneous => self.miscellaneous,
        }
    }

    pub(crate) fn set(&mut self, category: BudgetCategory, amount: i64) {
        match category {
            BudgetCategory::Accommodation => self.accommodation = amount,
            BudgetCategory::Food => self.food = amount,
            BudgetCategory::Attractions => self.attractions = amount,
            BudgetCategory::Transportation => self.transportation = amount,
            BudgetCategory::Miscellaneous => self.miscellaneous = amount,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (BudgetCategory, i64)> + '_ {
        BudgetCategory::ALL
            .into_iter()
            .map(move |category| (category, self.amount(category)))
    }

    pub fn total(&self) -> i64 {
        self.iter().map(|(_, amount)| amount).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LodgingDetail {
    pub total: i64,
    pub per_night: i64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDetail {
    pub total: i64,
    pub per_day: i64,
    pub notes: String,
}

/// Per-day meal split of the food budget. Each figure is rounded on its own,
/// so they need not add up to `FoodDetail::per_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealBreakdown {
    pub breakfast: i64,
    pub lunch: i64,
    pub dinner: i64,
    pub snacks: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetail {
    pub total: i64,
    pub per_day: i64,
    pub breakdown: MealBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetDetails {
    pub accommodation: LodgingDetail,
    pub food: FoodDetail,
    pub attractions: DailyDetail,
    pub transportation: DailyDetail,
    pub miscellaneous: DailyDetail,
}

/// Allocated trip budget.
///
/// `daily_budget` is derived from the total directly and may differ from the
/// sum of the per-day category figures by a rounding unit or two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub total_budget: i64,
    pub daily_budget: i64,
    pub days: u32,
    pub travel_style: TravelStyle,
    pub breakdown: BudgetBreakdown,
    pub details: BudgetDetails,
}

impl Budget {
    /// Human-readable budget report
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push("=== Budget Summary ===".to_string());
        lines.push(format!(
            "Total Budget: {}",
            format_currency(self.total_budget)
        ));
        lines.push(format!(
            "Daily Budget: {}",
            format_currency(self.daily_budget)
        ));
        lines.push(format!("Travel Style: {}", self.travel_style));
        lines.push(String::new());
        lines.push("--- Budget Breakdown ---".to_string());
        for (category, amount) in self.breakdown.iter() {
            lines.push(format!(
                "{:<16}{:>12}",
                format!("{}:", category.label()),
                format_currency(amount)
            ));
        }

        lines.push(String::new());
        lines.push("--- Details ---".to_string());
        let lodging = &self.details.accommodation;
        lines.push(format!(
            "Accommodation: {} per night ({})",
            format_currency(lodging.per_night),
            lodging.notes
        ));
        let food = &self.details.food;
        lines.push(format!(
            "Food: {} per day (breakfast {}, lunch {}, dinner {}, snacks {})",
            format_currency(food.per_day),
            format_currency(food.breakdown.breakfast),
            format_currency(food.breakdown.lunch),
            format_currency(food.breakdown.dinner),
            format_currency(food.breakdown.snacks)
        ));
        for (label, detail) in [
            ("Attractions", &self.details.attractions),
            ("Transportation", &self.details.transportation),
            ("Miscellaneous", &self.details.miscellaneous),
        ] {
            lines.push(format!(
                "{}: {} per day ({})",
                label,
                format_currency(detail.per_day),
                detail.notes
            ));
        }

        lines.join("\n")
    }
}

/// Format a whole-dollar amount with thousands separators, e.g. `$12,500`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}
