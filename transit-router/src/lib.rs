//! Transit network catalogue and route planner.
//!
//! Builds an immutable catalogue of stops and bus routes, answers
//! per-bus and per-stop statistics, and finds the fastest way between two
//! stops given a fixed boarding wait and a bus velocity.

pub mod catalogue;
pub mod domain;
pub mod graph;
pub mod planner;
