//! Departure-time sweep: evaluate the planner over a grid of candidate
//! departures with the arrival and vessel parameters held fixed. Answers
//! questions like "how late can I leave and still sail the whole way".

use chrono::NaiveTime;
use sail_core::constants::MINUTES_PER_DAY;
use sail_core::time;
use thiserror::Error;

use crate::{PlanError, PlanResult, TripRequest, plan_trip};

/// Grid of candidate departure times. The end may lie past midnight relative
/// to the start, in which case the grid wraps around the day boundary.
#[derive(Debug, Clone)]
pub struct DepartureWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub step_minutes: i64,
}

/// One evaluated candidate departure.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub departure: NaiveTime,
    pub result: PlanResult,
}

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("sweep step must be at least one minute")]
    StepTooSmall,
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Evaluate the planner once per candidate departure, from the window start
/// to its end inclusive. The departure in `request` is ignored; everything
/// else is held fixed.
pub fn sweep_departures(
    request: &TripRequest,
    window: &DepartureWindow,
) -> Result<Vec<SweepPoint>, SweepError> {
    if window.step_minutes < 1 {
        return Err(SweepError::StepTooSmall);
    }

    let span_minutes = if window.start == window.end {
        0
    } else {
        (time::minute_of_day(window.end) - time::minute_of_day(window.start))
            .rem_euclid(MINUTES_PER_DAY)
    };

    let mut points = Vec::new();
    let mut offset = 0;
    while offset <= span_minutes {
        let departure = time::shift_by_minutes(window.start, offset);
        let candidate = TripRequest {
            departure,
            ..request.clone()
        };
        let result = plan_trip(&candidate)?;
        points.push(SweepPoint { departure, result });
        offset += window.step_minutes;
    }

    Ok(points)
}

/// Latest candidate (in grid order) that still allows sailing the whole
/// distance, if any.
pub fn latest_sail_only(points: &[SweepPoint]) -> Option<&SweepPoint> {
    points
        .iter()
        .rev()
        .find(|point| matches!(point.result, PlanResult::SailOnly { .. }))
}
