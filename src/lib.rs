//! Mechworks: machine parts inventory
//!
//! An in-memory inventory of parts installed in machines, with robots that
//! are both part aggregates and flight-capable jet fighters.

pub mod cli;
pub mod core;
pub mod entities;
pub mod yaml;
