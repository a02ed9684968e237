use std::env;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use loopweer::engine::{self, WeatherReport, window};
use loopweer::models::{Forecast, Location};
use loopweer::{LocationParser, LocationResolver, LoopweerConfig, LoopweerError, WeatherApiClient};

const USAGE: &str = "loopweer - personal running weather advisory

Usage: loopweer [OPTIONS] [LOCATION]

LOCATION is a place name (\"Amsterdam\") or coordinates (\"52.37,4.90\").
Defaults to the configured city when omitted.

Options:
      --json   Print the full report as JSON
  -h, --help   Show this help";

fn main() {
    if let Err(err) = run() {
        match err.downcast_ref::<LoopweerError>() {
            Some(e) => eprintln!("{}", e.user_message()),
            None => eprintln!("Error: {err:#}"),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return Ok(());
    }
    let as_json = args.iter().any(|a| a == "--json");
    let query = args
        .iter()
        .filter(|a| !a.starts_with('-'))
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    let config = LoopweerConfig::load()?;
    init_tracing(&config);

    let client = WeatherApiClient::new(config.clone())?;
    let location = if query.is_empty() {
        Location::new(
            config.defaults.latitude,
            config.defaults.longitude,
            config.defaults.city.clone(),
        )
    } else {
        LocationResolver::resolve_location(&client, LocationParser::parse(&query)?)?
    };

    let forecast = client.fetch_forecast(&location)?;
    let report = engine::interpret(&forecast.current, &forecast.hourly);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&forecast, &report);
    }

    Ok(())
}

fn init_tracing(config: &LoopweerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_report(forecast: &Forecast, report: &WeatherReport) {
    let current = &forecast.current;

    println!();
    println!("Weer in {}", forecast.location.name);
    println!("  {} {}", report.category.glyph, report.category.label);
    println!(
        "  {:.0}\u{b0}C (gevoelstemperatuur {:.0}\u{b0}C), dauwpunt {:.0}\u{b0}C",
        current.temperature, current.apparent_temperature, current.dew_point
    );
    println!(
        "  Wind: {} Bft ({:.0} km/h, {})",
        report.wind.force,
        report.wind.speed_kmh,
        report.wind.cardinal.unwrap_or("-")
    );
    println!();
    println!("{}", report.comfort.label);
    println!("  {}", report.comfort.pace_note);
    println!();
    println!("{}", report.recommendation.badge);
    println!("{}", report.recommendation.clothing);
    for hazard in &report.recommendation.hazards {
        println!("{hazard}");
    }
    println!();
    println!("Komende uren:");
    for entry in report.hourly.entries.iter().take(window::COMPACT_HORIZON) {
        println!(
            "  {:>8}  {}  {:.0}\u{b0}  {:.1} {}",
            entry.label,
            entry.category.glyph,
            entry.temperature,
            entry.precipitation,
            report.hourly.precipitation_unit
        );
    }
}
