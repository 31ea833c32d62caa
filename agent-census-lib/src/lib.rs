#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for agent-census
//!
//! This library consolidates all functionality for the agent-census tool, which estimates
//! how much public GitHub activity is attributable to automated contributors such as AI
//! coding assistants.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`search`]: Search query construction and the rate-limited search API client
//! - [`census`]: Per-actor aggregation, weekly windows, and the persisted analysis record
//! - [`reports`]: Persistence and rollups over an analysis record
//! - [`progress`]: The sink for human-readable run progress

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod census;
pub mod commands;
pub mod progress;
pub mod reports;
pub mod search;

pub use crate::commands::{Host, run};
