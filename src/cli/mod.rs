use crate::{
    config::PlannerConfig,
    simulation::{SimulationKind, SimulationOutput, Simulator},
    types::{PlaceSet, TravelStyle, TripRequest},
};
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// CLI entry point for the travel-plan tool
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("travel-plan")
        .version("0.1.0")
        .about("Plan a trip itinerary and budget from the simulated planner backend")
        .arg(
            Arg::new("destination")
                .help("Destination city, e.g. \"Tokyo\"")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("days")
                .short('d')
                .long("days")
                .value_name("DAYS")
                .help("Trip length in days")
                .value_parser(value_parser!(u32))
                .default_value("3"),
        )
        .arg(
            Arg::new("budget")
                .short('b')
                .long("budget")
                .value_name("AMOUNT")
                .help("Total budget in whole currency units (at least 100)")
                .value_parser(value_parser!(i64))
                .default_value("1000"),
        )
        .arg(
            Arg::new("style")
                .short('s')
                .long("style")
                .value_name("STYLE")
                .help("Travel style: budget, standard or luxury")
                .default_value("standard"),
        )
        .arg(
            Arg::new("interest")
                .short('i')
                .long("interest")
                .value_name("TAG")
                .help("Interest tag; may be repeated")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("kind")
                .short('k')
                .long("kind")
                .value_name("KIND")
                .help("What to simulate: itinerary, budget, places, all, or plan (itinerary and budget)")
                .default_value("plan"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for reproducible output (or set TRAVEL_PLAN_SEED)")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("delay-ms")
                .long("delay-ms")
                .value_name("MILLIS")
                .help("Simulated latency in milliseconds (or set TRAVEL_PLAN_SIMULATION_DELAY_MS)")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print JSON instead of a text summary")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = PlannerConfig::from_env().context("failed to load configuration")?;
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(*seed);
    }
    if let Some(delay_ms) = matches.get_one::<u64>("delay-ms") {
        config = config.with_simulation_delay(Duration::from_millis(*delay_ms));
    }
    if !config.uses_live_apis() {
        warn!("live API credentials not configured; using simulated planner data");
    }

    let destination = matches
        .get_one::<String>("destination")
        .cloned()
        .unwrap_or_default();
    let days = matches.get_one::<u32>("days").copied().unwrap_or(3);
    let budget = matches.get_one::<i64>("budget").copied().unwrap_or(1000);
    let style: TravelStyle = matches
        .get_one::<String>("style")
        .map(String::as_str)
        .unwrap_or("standard")
        .parse()?;
    let interests: Vec<String> = matches
        .get_many::<String>("interest")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let request = TripRequest::new(destination, days)
        .with_budget(budget, style)
        .with_interests(interests);

    let kind = matches
        .get_one::<String>("kind")
        .map(String::as_str)
        .unwrap_or("plan");
    let kinds = parse_kinds(kind)?;
    for kind in &kinds {
        request.validate(*kind)?;
    }

    let simulator = Simulator::from_config(&config);
    info!(
        "Planning {} ({} days, {} {})",
        request.destination, request.days, request.budget, request.travel_style
    );

    let mut outputs = Vec::with_capacity(kinds.len());
    for kind in kinds {
        match simulator.simulate(kind, &request).await {
            Ok(output) => outputs.push(output),
            Err(e) => {
                error!("Simulation failed: {}", e);
                return Err(e.into());
            }
        }
    }

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&outputs)?);
        return Ok(());
    }

    for output in &outputs {
        let text = match output {
            SimulationOutput::Itinerary(itinerary) => itinerary.summary(config.units),
            SimulationOutput::Budget(budget) => {
                format!("{}\n(amounts in {})", budget.summary(), config.currency)
            }
            SimulationOutput::Places(places) => places_summary(&request.destination, places),
        };
        println!("{}\n", text);
    }

    Ok(())
}

/// Expand a `--kind` value into the simulations to run, in output order.
fn parse_kinds(kind: &str) -> crate::Result<Vec<SimulationKind>> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(SimulationKind::ALL.to_vec()),
        "plan" => Ok(vec![SimulationKind::Itinerary, SimulationKind::Budget]),
        other => Ok(vec![other.parse()?]),
    }
}

fn places_summary(destination: &str, places: &PlaceSet) -> String {
    let mut lines = vec![format!("=== Places in {} ===", destination)];
    for (title, pool) in [
        ("Attractions", &places.attractions),
        ("Restaurants", &places.restaurants),
        ("Hotels", &places.hotels),
    ] {
        lines.push(String::new());
        lines.push(format!("--- {} ---", title));
        for place in pool.iter() {
            let price = place
                .price_level()
                .map(|p| format!(" {}", p))
                .unwrap_or_default();
            lines.push(format!(
                "{} {} ({} reviews){}",
                place.name,
                place.stars(),
                place.reviews,
                price
            ));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_parse_kinds() {
        assert_eq!(parse_kinds("all").unwrap(), SimulationKind::ALL.to_vec());
        assert_eq!(
            parse_kinds("plan").unwrap(),
            vec![SimulationKind::Itinerary, SimulationKind::Budget]
        );
        assert_eq!(parse_kinds("places").unwrap(), vec![SimulationKind::Places]);
        assert_eq!(
            parse_kinds(" Budget ").unwrap(),
            vec![SimulationKind::Budget]
        );

        let err = parse_kinds("everything").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SIMULATION_KIND");
    }

    #[test]
    fn test_places_summary_lists_every_category() {
        let places = Catalog::builtin().places("Tokyo");
        let text = places_summary("Tokyo", &places);
        assert!(text.starts_with("=== Places in Tokyo ==="));
        for heading in [
            "--- Attractions ---",
            "--- Restaurants ---",
            "--- Hotels ---",
        ] {
            assert!(text.contains(heading), "missing {}", heading);
        }
        assert!(text.contains(&places.hotels[0].name));
    }
}
