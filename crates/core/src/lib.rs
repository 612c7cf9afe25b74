//! Core types for leadtrack
//!
//! This crate contains the lead domain model and the pure transforms over
//! it (form validation, dashboard aggregation, CSV rendering). No I/O.

mod dashboard;
mod env_config;
mod error;
mod export;
mod lead;

pub use dashboard::*;
pub use env_config::*;
pub use error::*;
pub use export::*;
pub use lead::*;
