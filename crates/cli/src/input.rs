//! Merge command-line values with settings defaults and validate them before
//! the planner runs.
//!
//! The planner assumes validated input; everything here enforces the same
//! rules the product always applied, with the same user-facing messages:
//! values present and positive, distance and speeds within the configured
//! maxima, fuel consumption capped, and the motor faster than the sails.

use chrono::NaiveTime;
use sailing_calculator::config::{MAX_FUEL_CONSUMPTION_L_PER_H, Settings};
use sailing_calculator::planner::TripRequest;
use sailing_calculator::units::UnitSystem;
use thiserror::Error;

/// Validation failures, phrased exactly as shown to the user.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Ongeldige {field} '{value}': gebruik HH:mm")]
    InvalidTime { field: &'static str, value: String },
    #[error("Afstand moet groter zijn dan 0")]
    DistanceNotPositive,
    #[error("Afstand moet kleiner zijn dan {0}")]
    DistanceAboveMax(f64),
    #[error("Zeilsnelheid moet groter zijn dan 0")]
    SailSpeedNotPositive,
    #[error("Zeilsnelheid moet kleiner zijn dan {0}")]
    SailSpeedAboveMax(f64),
    #[error("Motorsnelheid moet groter zijn dan 0")]
    MotorSpeedNotPositive,
    #[error("Motorsnelheid moet kleiner zijn dan {0}")]
    MotorSpeedAboveMax(f64),
    #[error("Motorsnelheid moet groter zijn dan zeilsnelheid")]
    MotorNotFasterThanSail,
    #[error("Brandstofverbruik moet groter zijn dan 0")]
    FuelNotPositive,
    #[error("Brandstofverbruik moet kleiner zijn dan {0} liter/uur")]
    FuelAboveMax(f64),
}

/// Parse a 24-hour `HH:mm` clock value.
pub fn parse_clock(field: &'static str, value: &str) -> Result<NaiveTime, InputError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| InputError::InvalidTime {
        field,
        value: value.to_string(),
    })
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Raw, possibly partial input. `None` fields fall back to the settings
/// defaults, the way the original form pre-filled its fields.
#[derive(Debug, Clone, Default)]
pub struct TripInput {
    pub depart: Option<String>,
    pub arrive: Option<String>,
    pub distance: Option<f64>,
    pub sail_speed: Option<f64>,
    pub motor_speed: Option<f64>,
    pub fuel_consumption: Option<f64>,
    pub unit_system: Option<UnitSystem>,
}

impl TripInput {
    /// Resolve against the settings and validate, producing a planner request.
    pub fn into_request(self, settings: &Settings) -> Result<TripRequest, InputError> {
        let depart_raw = self
            .depart
            .unwrap_or_else(|| settings.defaults.start_time.clone());
        let arrive_raw = self
            .arrive
            .unwrap_or_else(|| settings.defaults.arrival_time.clone());
        let departure = parse_clock("starttijd", &depart_raw)?;
        let arrival = parse_clock("aankomsttijd", &arrive_raw)?;

        let distance = self.distance.unwrap_or(settings.defaults.distance);
        let sail_speed = self.sail_speed.unwrap_or(settings.defaults.sail_speed);
        let motor_speed = self.motor_speed.unwrap_or(settings.defaults.motor_speed);
        let fuel = self
            .fuel_consumption
            .unwrap_or(settings.defaults.fuel_consumption);

        if !positive(distance) {
            return Err(InputError::DistanceNotPositive);
        }
        if distance > settings.limits.max_distance {
            return Err(InputError::DistanceAboveMax(settings.limits.max_distance));
        }
        if !positive(sail_speed) {
            return Err(InputError::SailSpeedNotPositive);
        }
        if sail_speed > settings.limits.max_sail_speed {
            return Err(InputError::SailSpeedAboveMax(settings.limits.max_sail_speed));
        }
        if !positive(motor_speed) {
            return Err(InputError::MotorSpeedNotPositive);
        }
        if motor_speed > settings.limits.max_motor_speed {
            return Err(InputError::MotorSpeedAboveMax(
                settings.limits.max_motor_speed,
            ));
        }
        if motor_speed <= sail_speed {
            return Err(InputError::MotorNotFasterThanSail);
        }
        if !positive(fuel) {
            return Err(InputError::FuelNotPositive);
        }
        if fuel > MAX_FUEL_CONSUMPTION_L_PER_H {
            return Err(InputError::FuelAboveMax(MAX_FUEL_CONSUMPTION_L_PER_H));
        }

        Ok(TripRequest {
            departure,
            arrival,
            distance,
            sail_speed,
            motor_speed,
            unit_system: self.unit_system.unwrap_or(settings.unit_system),
            fuel_rate_l_per_h: fuel,
        })
    }
}
