//! Exhaustive search for 3-colorings.

pub use odometer::Assignments;
pub use solver::{solve, Solver, Strategy};

mod interrupt;
mod odometer;
mod solver;
