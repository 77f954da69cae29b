use chrono::NaiveDate;
use serde_json::json;
use std::{sync::Arc, time::Duration};
use tokio::time::Instant;
use tokio_test::{assert_err, assert_ok};
use travel_plan_rs::{
    types::ActivityType, PlaceCategory, PlannerError, SimulationKind, SimulationOutput, Simulator,
    ToolRegistry, TravelStyle, TripRequest,
};

fn quick_simulator() -> Simulator {
    Simulator::new()
        .with_delay(Duration::ZERO)
        .with_seed(2024)
        .with_start_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
}

#[tokio::test(start_paused = true)]
async fn test_simulation_waits_for_delay() {
    let simulator = Simulator::new();
    let request = TripRequest::new("Paris", 2);

    let start = Instant::now();
    let output = assert_ok!(simulator.simulate(SimulationKind::Places, &request).await);
    assert!(start.elapsed() >= Duration::from_secs(2));
    assert_eq!(output.kind(), SimulationKind::Places);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_kind_fails_before_delay() {
    let simulator = Simulator::new();
    let request = TripRequest::new("Paris", 2);

    let start = Instant::now();
    let err = assert_err!(simulator.simulate_named("bogus", &request).await);
    assert!(matches!(err, PlannerError::InvalidSimulationKind(ref kind) if kind == "bogus"));
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_overlapping_simulations_share_the_wait() {
    let simulator = Simulator::new();
    let request = TripRequest::new("Tokyo", 3).with_budget(1500, TravelStyle::Luxury);

    let start = Instant::now();
    let (itinerary, budget) =
        tokio::join!(simulator.itinerary(&request), simulator.budget(&request));
    let elapsed = start.elapsed();

    assert_ok!(itinerary);
    assert_ok!(budget);
    assert!(elapsed >= Duration::from_secs(2));
    assert!(elapsed < Duration::from_secs(4));
}

#[tokio::test]
async fn test_itinerary_simulation() {
    let simulator = quick_simulator();
    let request = TripRequest::new("Tokyo", 3).with_interests(["food", "temples"]);

    let itinerary = simulator.itinerary(&request).await.unwrap();
    assert_eq!(itinerary.destination, "Tokyo");
    assert_eq!(itinerary.itinerary.len(), 3);
    assert_eq!(itinerary.itinerary[0].date.to_string(), "2025-06-01");
    assert!(simulator
        .catalog()
        .lookup(PlaceCategory::Hotels, "Tokyo")
        .contains(&itinerary.hotel));

    for day in &itinerary.itinerary {
        assert!((15..=30).contains(&day.weather.temp));
        assert_eq!(day.activities.len(), 5);
        let hotel_stop = &day.activities[4];
        assert_eq!(hotel_stop.kind, ActivityType::Accommodation);
        assert_eq!(hotel_stop.place, itinerary.hotel);
    }
}

#[tokio::test]
async fn test_seeded_simulators_replay() {
    let request = TripRequest::new("New York", 4);
    let first = quick_simulator().itinerary(&request).await.unwrap();
    let second = quick_simulator().itinerary(&request).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_budget_simulation() {
    let simulator = quick_simulator();
    let request = TripRequest::new("", 5).with_budget(1000, TravelStyle::Standard);

    let budget = simulator.budget(&request).await.unwrap();
    assert_eq!(budget.total_budget, 1000);
    assert_eq!(budget.daily_budget, 200);
    assert_eq!(budget.breakdown.accommodation, 350);
    assert_eq!(budget.breakdown.miscellaneous, 50);
    assert_eq!(budget.breakdown.total(), 1000);
}

#[tokio::test]
async fn test_places_simulation_falls_back() {
    let simulator = quick_simulator();
    let unknown = simulator
        .places(&TripRequest::new("Nonexistent-City", 1))
        .await
        .unwrap();
    let paris = simulator
        .places(&TripRequest::new("Paris", 1))
        .await
        .unwrap();
    assert_eq!(unknown, paris);
}

#[tokio::test]
async fn test_output_json_round_trip() {
    let simulator = quick_simulator();
    let output = simulator
        .simulate(SimulationKind::Itinerary, &TripRequest::new("Paris", 2))
        .await
        .unwrap();

    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(value["kind"], "itinerary");
    assert_eq!(
        value["data"]["itinerary"][0]["activities"][1]["type"],
        "food"
    );

    let parsed: SimulationOutput = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, output);
}

#[tokio::test]
async fn test_tool_registry_dispatch() {
    let registry = ToolRegistry::planner(Arc::new(quick_simulator()));

    assert!(registry.has_tool("itinerary"));
    assert!(registry.has_tool("budget"));
    assert!(registry.has_tool("places"));
    assert_eq!(registry.manifest().len(), 3);

    let budget = registry
        .execute(
            "budget",
            json!({ "days": 4, "budget": 2000, "travelStyle": "luxury" }),
        )
        .await
        .unwrap();
    assert_eq!(budget["breakdown"]["accommodation"], 800);
    assert_eq!(budget["details"]["accommodation"]["notes"], "Luxury hotels");

    let itinerary = registry
        .execute(
            "itinerary",
            json!({ "destination": "Atlantis", "days": 2, "interests": ["beaches"] }),
        )
        .await
        .unwrap();
    assert_eq!(itinerary["destination"], "Atlantis");
    assert_eq!(itinerary["sources"]["hotels"]["usedFallback"], true);
}

#[tokio::test]
async fn test_tool_registry_errors() {
    let registry = ToolRegistry::planner(Arc::new(quick_simulator()));

    let err = registry.execute("bogus", json!({})).await.unwrap_err();
    assert_eq!(err.error_code(), "INVALID_SIMULATION_KIND");

    let err = registry
        .execute("budget", json!({ "days": 3, "budget": 50 }))
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");

    let err = registry
        .execute(
            "budget",
            json!({ "days": 3, "budget": 500, "travelStyle": "backpacker" }),
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("travelStyle"), "{}", err);

    let payload = err.to_error_payload();
    assert_eq!(payload["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_oversized_trips_are_rejected() {
    let simulator = Arc::new(quick_simulator());
    let registry = ToolRegistry::planner(Arc::clone(&simulator));

    let err = registry
        .execute(
            "itinerary",
            json!({ "destination": "Paris", "days": 4_000_000_000u32 }),
        )
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert!(err.to_string().contains("days"), "{}", err);

    // the typed API skips form validation but still refuses to schedule it
    let request = TripRequest::new("Paris", u32::MAX);
    let err = assert_err!(simulator.itinerary(&request).await);
    assert_eq!(err.error_code(), "VALIDATION_ERROR");
}
