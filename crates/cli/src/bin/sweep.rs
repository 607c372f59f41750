use std::io::Write as _;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sail_cli::input::{TripInput, parse_clock};
use sailing_calculator::config::{Settings, load_settings};
use sailing_calculator::planner::sweep::{DepartureWindow, latest_sail_only, sweep_departures};
use sailing_calculator::report::{export, text};
use sailing_calculator::units::UnitSystem;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sweep candidate departure times and report each outcome as CSV"
)]
struct Cli {
    /// First candidate departure (HH:mm)
    #[arg(long)]
    from: String,

    /// Last candidate departure (HH:mm, may wrap past midnight)
    #[arg(long)]
    to: String,

    /// Grid step in minutes
    #[arg(long, default_value_t = 15)]
    step_minutes: i64,

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

    /// Output CSV path, or `-` for stdout
    #[arg(long, default_value = "-")]
    output: PathBuf,
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

    let window = DepartureWindow {
        start: parse_clock("starttijd", &cli.from)?,
        end: parse_clock("starttijd", &cli.to)?,
        step_minutes: cli.step_minutes,
    };

    let input = TripInput {
        depart: Some(cli.from.clone()),
        arrive: cli.arrive,
        distance: cli.distance,
        sail_speed: cli.sail_speed,
        motor_speed: cli.motor_speed,
        fuel_consumption: cli.fuel,
        unit_system: cli.units.map(Into::into),
    };
    let request = input.into_request(&settings)?;

    let points = sweep_departures(&request, &window)?;

    let mut writer = export::writer_for_path(&cli.output)?;
    export::write_header(writer.as_mut())?;
    for point in &points {
        export::write_point(writer.as_mut(), point)?;
    }
    writer.flush()?;

    match latest_sail_only(&points) {
        Some(point) => eprintln!(
            "Laatste vertrek waarop je de hele afstand kunt zeilen: {}",
            text::format_clock(point.departure)
        ),
        None => eprintln!("Geen vertrek in dit venster waarop je de hele afstand kunt zeilen."),
    }

    Ok(())
}
