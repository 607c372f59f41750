//! Input collection for the sailing calculator binaries.

pub mod input;
