//! Rendering and export of trip plans.

/// Human-readable rendering in the product's Dutch phrasing.
pub mod text {
    use chrono::NaiveTime;
    use sail_core::UnitSystem;
    use sail_planner::PlanResult;

    /// Render a plan as display text.
    ///
    /// Distances keep the nautical values the planner computed even when the
    /// entered unit system is metric; only the unit label follows the entered
    /// system. This mirrors the product's long-standing display behaviour and
    /// is deliberately not corrected here.
    pub fn render(result: &PlanResult, unit_system: UnitSystem) -> String {
        let unit = unit_system.distance_label();
        match result {
            PlanResult::SailOnly {
                duration_h,
                distance_nm,
            } => format!(
                "Je kunt de hele afstand zeilen in {} ({:.2} {}).\nGeschat brandstofverbruik: 0 liter.",
                format_duration(*duration_h),
                distance_nm,
                unit
            ),
            PlanResult::SailThenMotor {
                sail_duration_h,
                motor_duration_h,
                sail_distance_nm,
                motor_distance_nm,
                fuel_liters,
            } => format!(
                "Je kunt {} zeilen ({:.2} {}). Daarna moet je overschakelen naar de motor voor de resterende {:.2} {}, wat {} duurt.\n\nGeschat brandstofverbruik: {:.2} liter.",
                format_duration(*sail_duration_h),
                sail_distance_nm,
                unit,
                motor_distance_nm,
                unit,
                format_duration(*motor_duration_h),
                fuel_liters
            ),
            PlanResult::MotorOnly {
                duration_h,
                fuel_liters,
            } => format!(
                "Je kunt de hele afstand op de motor afleggen in {}.\n\nGeschat brandstofverbruik: {:.2} liter.",
                format_duration(*duration_h),
                fuel_liters
            ),
            PlanResult::MotorOnlyLate {
                fuel_liters,
                expected_arrival,
                ..
            } => format!(
                "Je kunt de hele afstand op de motor afleggen, maar je zult niet op tijd aankomen.\nJe verwachte aankomsttijd is {}.\n\nGeschat brandstofverbruik: {:.2} liter.",
                format_clock(*expected_arrival),
                fuel_liters
            ),
        }
    }

    /// Format fractional hours as `"<H> uur"`, appending `" en <M> minuten"`
    /// only when the rounded minute remainder is non-zero.
    pub fn format_duration(hours: f64) -> String {
        let whole_hours = hours.floor();
        let minutes = ((hours - whole_hours) * 60.0).round() as i64;
        if minutes > 0 {
            format!("{} uur en {} minuten", whole_hours as i64, minutes)
        } else {
            format!("{} uur", whole_hours as i64)
        }
    }

    /// 24-hour clock rendering (`HH:mm`).
    pub fn format_clock(time: NaiveTime) -> String {
        time.format("%H:%M").to_string()
    }
}

/// Machine-readable exports: JSON for single plans, CSV for departure sweeps.
pub mod export {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use sail_planner::PlanResult;
    use sail_planner::sweep::SweepPoint;

    use crate::text::format_clock;

    const SWEEP_HEADER: &str =
        "departure,outcome,sail_hours,motor_hours,fuel_liters,expected_arrival";

    /// Render a single plan as pretty-printed JSON.
    pub fn render_json(result: &PlanResult) -> serde_json::Result<String> {
        serde_json::to_string_pretty(result)
    }

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the sweep CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", SWEEP_HEADER)
    }

    /// Write one sweep candidate as a CSV row matching the standard header.
    pub fn write_point(writer: &mut dyn Write, point: &SweepPoint) -> io::Result<()> {
        let (sail_hours, motor_hours, expected) = match &point.result {
            PlanResult::SailOnly { duration_h, .. } => (*duration_h, 0.0, String::new()),
            PlanResult::SailThenMotor {
                sail_duration_h,
                motor_duration_h,
                ..
            } => (*sail_duration_h, *motor_duration_h, String::new()),
            PlanResult::MotorOnly { duration_h, .. } => (0.0, *duration_h, String::new()),
            PlanResult::MotorOnlyLate {
                duration_h,
                expected_arrival,
                ..
            } => (0.0, *duration_h, format_clock(*expected_arrival)),
        };
        writeln!(
            writer,
            "{},{},{:.4},{:.4},{:.2},{}",
            format_clock(point.departure),
            point.result.outcome_tag(),
            sail_hours,
            motor_hours,
            point.result.fuel_liters(),
            expected,
        )
    }
}
