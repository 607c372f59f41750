use chrono::NaiveTime;

use sailing_calculator::planner::{PlanResult, TripRequest, plan_trip};
use sailing_calculator::report::{export, text};
use sailing_calculator::units::UnitSystem;

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid clock time")
}

#[test]
fn durations_omit_the_minutes_clause_when_zero() {
    assert_eq!(text::format_duration(4.0), "4 uur");
    assert_eq!(text::format_duration(4.0 / 3.0), "1 uur en 20 minuten");
    assert_eq!(text::format_duration(0.5), "0 uur en 30 minuten");
    // Remainders are rounded per-component, so an hour just shy of a whole
    // one reads as 60 minutes. Long-standing behaviour, kept as-is.
    assert_eq!(text::format_duration(1.999), "1 uur en 60 minuten");
}

#[test]
fn clock_times_render_as_24_hour() {
    assert_eq!(text::format_clock(clock(6, 5)), "06:05");
    assert_eq!(text::format_clock(clock(23, 59)), "23:59");
}

#[test]
fn sail_only_text() {
    let result = PlanResult::SailOnly {
        duration_h: 4.0,
        distance_nm: 20.0,
    };
    assert_eq!(
        text::render(&result, UnitSystem::Nautical),
        "Je kunt de hele afstand zeilen in 4 uur (20.00 zeemijl).\nGeschat brandstofverbruik: 0 liter."
    );
}

#[test]
fn mixed_text_mentions_both_legs_and_the_fuel() {
    let result = plan_trip(&TripRequest {
        departure: clock(8, 0),
        arrival: clock(11, 0),
        distance: 20.0,
        sail_speed: 5.0,
        motor_speed: 8.0,
        unit_system: UnitSystem::Nautical,
        fuel_rate_l_per_h: 5.0,
    })
    .expect("plan");
    let rendered = text::render(&result, UnitSystem::Nautical);
    assert!(rendered.starts_with("Je kunt 1 uur en 20 minuten zeilen (6.67 zeemijl)."));
    assert!(rendered.contains("overschakelen naar de motor voor de resterende 13.33 zeemijl"));
    assert!(rendered.contains("wat 1 uur en 40 minuten duurt"));
    assert!(rendered.ends_with("Geschat brandstofverbruik: 8.33 liter."));
}

#[test]
fn late_text_reports_the_expected_arrival() {
    let result = PlanResult::MotorOnlyLate {
        duration_h: 2.5,
        fuel_liters: 12.5,
        expected_arrival: clock(10, 30),
    };
    let rendered = text::render(&result, UnitSystem::Nautical);
    assert!(rendered.contains("maar je zult niet op tijd aankomen"));
    assert!(rendered.contains("Je verwachte aankomsttijd is 10:30."));
    assert!(rendered.contains("Geschat brandstofverbruik: 12.50 liter."));
}

#[test]
fn metric_label_keeps_the_nautical_value() {
    // Values are converted to nautical units and not converted back; only
    // the label follows the entered unit system.
    let result = plan_trip(&TripRequest {
        departure: clock(8, 0),
        arrival: clock(12, 0),
        distance: 37.04,
        sail_speed: 9.26,
        motor_speed: 14.816,
        unit_system: UnitSystem::Metric,
        fuel_rate_l_per_h: 5.0,
    })
    .expect("plan");
    assert_eq!(
        text::render(&result, UnitSystem::Metric),
        "Je kunt de hele afstand zeilen in 4 uur (20.00 km).\nGeschat brandstofverbruik: 0 liter."
    );
}

#[test]
fn json_export_is_tagged_by_outcome() {
    let result = PlanResult::SailOnly {
        duration_h: 4.0,
        distance_nm: 20.0,
    };
    let json = export::render_json(&result).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    assert_eq!(value["outcome"], "sail_only");
    assert_eq!(value["duration_h"], 4.0);
    assert_eq!(value["distance_nm"], 20.0);
}
