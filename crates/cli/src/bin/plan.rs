use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sail_cli::input::TripInput;
use sailing_calculator::config::{Settings, load_settings};
use sailing_calculator::planner::plan_trip;
use sailing_calculator::report::{export, text};
use sailing_calculator::units::UnitSystem;

#[derive(Parser)]
#[command(author, version, about = "Plan a trip: sail, motor, or both")]
struct Cli {
    /// Departure time (HH:mm), defaults to the configured start time
    #[arg(long)]
    depart: Option<String>,

    /// Desired arrival time (HH:mm)
    #[arg(long)]
    arrive: Option<String>,

    /// Distance to cover (nautical miles, or km with --units metric)
    #[arg(long)]
    distance: Option<f64>,

    /// Sailing speed (knots, or km/h with --units metric)
    #[arg(long)]
    sail_speed: Option<f64>,

    /// Motoring speed (knots, or km/h with --units metric)
    #[arg(long)]
    motor_speed: Option<f64>,

    /// Fuel consumption while motoring (liters per hour)
    #[arg(long)]
    fuel: Option<f64>,

    /// Unit system override (defaults to the configured one)
    #[arg(long, value_enum)]
    units: Option<UnitsArg>,

    /// Settings file (YAML or TOML); built-in defaults when omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Emit the structured result as JSON instead of display text
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum UnitsArg {
    Nautical,
    Metric,
}

impl From<UnitsArg> for UnitSystem {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Nautical => UnitSystem::Nautical,
            UnitsArg::Metric => UnitSystem::Metric,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };

    let input = TripInput {
        depart: cli.depart,
        arrive: cli.arrive,
        distance: cli.distance,
        sail_speed: cli.sail_speed,
        motor_speed: cli.motor_speed,
        fuel_consumption: cli.fuel,
        unit_system: cli.units.map(Into::into),
    };
    let request = input.into_request(&settings)?;
    let result = plan_trip(&request)?;

    if cli.json {
        println!("{}", export::render_json(&result)?);
    } else {
        println!("{}", text::render(&result, request.unit_system));
    }

    Ok(())
}
