//! Trip planning for sailing yachts: sail, motor, or a bit of both.
//!
//! The planner itself is a pure function over a single request; the settings
//! store, input validation, and text rendering are thin collaborators around
//! it. Keeping the logic in library crates lets multiple front-ends (CLI,
//! GUI, web) share it.

pub use sail_config as config;
pub use sail_core as units;
pub use sail_planner as planner;
pub use sail_report as report;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
