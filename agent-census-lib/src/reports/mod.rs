//! Persistence and rollups over an analysis record
//!
//! - **JSON**: the persisted record itself, written after a collection run and read back
//!   by the `summary` command
//! - **Console**: per-actor commit totals and a weekly growth overview
//! - **CSV**: the cumulative weekly commit series per actor, ready for charting
//!
//! The running totals behind the console overview and the CSV export come from
//! [`growth`].

pub mod common;
pub mod console;
pub mod csv;
pub mod growth;
pub mod json;
