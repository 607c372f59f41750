//! Trip planner: split a passage between sailing and motoring.
//!
//! Given a departure time, a desired arrival time, the distance to cover, and
//! the vessel's sailing and motoring speeds, decide how much of the trip to
//! sail and how much to motor so the boat arrives as close to the desired
//! time as possible, and estimate the fuel burned.
//!
//! The decision is an ordered chain of feasibility checks: sail the whole
//! way if the window allows it, otherwise sail first and motor the rest so
//! the window is used exactly, otherwise motor the whole way, and as a last
//! resort motor the whole way and arrive late. The order encodes the policy:
//! prefer sailing, use the engine only as much as needed.

pub mod sweep;

use chrono::NaiveTime;
use sail_core::{UnitSystem, time, units};
use serde::Serialize;
use thiserror::Error;

/// Inputs for a single planning call, constructed fresh per calculation.
///
/// Distance and speeds are in the unit system's native units as entered
/// (nautical miles/knots, or kilometres/km/h under [`UnitSystem::Metric`]).
/// The fuel rate is liters per hour of motoring, independent of unit system.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub departure: NaiveTime,
    pub arrival: NaiveTime,
    pub distance: f64,
    pub sail_speed: f64,
    pub motor_speed: f64,
    pub unit_system: UnitSystem,
    pub fuel_rate_l_per_h: f64,
}

/// Outcome of one planning call.
///
/// Durations are fractional hours. Distances are nautical miles regardless of
/// the entered unit system: metric input is converted on the way in and is
/// not converted back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlanResult {
    /// The whole distance fits under sail within the window.
    SailOnly { duration_h: f64, distance_nm: f64 },
    /// Sail first, then motor the remainder, arriving exactly on time.
    SailThenMotor {
        sail_duration_h: f64,
        motor_duration_h: f64,
        sail_distance_nm: f64,
        motor_distance_nm: f64,
        fuel_liters: f64,
    },
    /// Motoring the whole way fits within the window; sailing does not.
    MotorOnly { duration_h: f64, fuel_liters: f64 },
    /// Even motoring the whole way overruns the window.
    MotorOnlyLate {
        duration_h: f64,
        fuel_liters: f64,
        /// Clock time the boat is actually expected to arrive.
        expected_arrival: NaiveTime,
    },
}

impl PlanResult {
    /// Liters of fuel the plan burns.
    pub fn fuel_liters(&self) -> f64 {
        match self {
            PlanResult::SailOnly { .. } => 0.0,
            PlanResult::SailThenMotor { fuel_liters, .. }
            | PlanResult::MotorOnly { fuel_liters, .. }
            | PlanResult::MotorOnlyLate { fuel_liters, .. } => *fuel_liters,
        }
    }

    /// Short machine-readable tag, used in exports.
    pub fn outcome_tag(&self) -> &'static str {
        match self {
            PlanResult::SailOnly { .. } => "sail_only",
            PlanResult::SailThenMotor { .. } => "sail_then_motor",
            PlanResult::MotorOnly { .. } => "motor_only",
            PlanResult::MotorOnlyLate { .. } => "motor_only_late",
        }
    }
}

/// Rejections for malformed requests. Bounds checking against configured
/// maxima is the caller's job; the planner only refuses input that would
/// make its arithmetic meaningless.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("{field} must be a positive, finite number")]
    NotPositive { field: &'static str },
    #[error("motor speed must exceed sail speed")]
    MotorNotFaster,
}

fn check_positive(value: f64, field: &'static str) -> Result<(), PlanError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlanError::NotPositive { field })
    }
}

/// Plan a trip. Pure and stateless: identical requests give identical
/// results, and for a well-formed request exactly one of the four outcomes
/// applies.
pub fn plan_trip(request: &TripRequest) -> Result<PlanResult, PlanError> {
    check_positive(request.distance, "distance")?;
    check_positive(request.sail_speed, "sail speed")?;
    check_positive(request.motor_speed, "motor speed")?;
    check_positive(request.fuel_rate_l_per_h, "fuel consumption")?;
    if request.motor_speed <= request.sail_speed {
        return Err(PlanError::MotorNotFaster);
    }

    // Arrival at or before the departure means arrival on the next day, so
    // the window is always positive (equal clock times give 24 hours).
    let total_hours = time::window_hours(request.departure, request.arrival);

    let (distance, sail_speed, motor_speed) = match request.unit_system {
        UnitSystem::Nautical => (request.distance, request.sail_speed, request.motor_speed),
        UnitSystem::Metric => (
            units::km_to_nm(request.distance),
            units::kmh_to_knots(request.sail_speed),
            units::kmh_to_knots(request.motor_speed),
        ),
    };

    // Sail the whole way if the window allows it.
    let sail_time_required = distance / sail_speed;
    if sail_time_required <= total_hours {
        return Ok(PlanResult::SailOnly {
            duration_h: sail_time_required,
            distance_nm: distance,
        });
    }

    // Sail first and motor the remainder so the two legs cover the distance
    // in exactly the available window. Equal speeds would zero the
    // denominator; skip the branch instead of dividing.
    let speed_ratio = sail_speed / motor_speed;
    let denominator = 1.0 - speed_ratio;
    if denominator != 0.0 {
        let sail_hours = (total_hours - distance / motor_speed) / denominator;
        if (0.0..=total_hours).contains(&sail_hours) {
            let motor_hours = total_hours - sail_hours;
            let sail_distance = sail_speed * sail_hours;
            return Ok(PlanResult::SailThenMotor {
                sail_duration_h: sail_hours,
                motor_duration_h: motor_hours,
                sail_distance_nm: sail_distance,
                motor_distance_nm: distance - sail_distance,
                fuel_liters: motor_hours * request.fuel_rate_l_per_h,
            });
        }
    }

    // Motor the whole way, still on time.
    let motor_time_required = distance / motor_speed;
    if motor_time_required <= total_hours {
        return Ok(PlanResult::MotorOnly {
            duration_h: motor_time_required,
            fuel_liters: motor_time_required * request.fuel_rate_l_per_h,
        });
    }

    // Last resort: motor the whole way and report the late arrival.
    let extra_hours = motor_time_required - total_hours;
    Ok(PlanResult::MotorOnlyLate {
        duration_h: motor_time_required,
        fuel_liters: motor_time_required * request.fuel_rate_l_per_h,
        expected_arrival: time::shift_by_hours(request.arrival, extra_hours),
    })
}
