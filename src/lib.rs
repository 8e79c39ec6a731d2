//! Embroidery Tracker - Personal embroidery session log
//!
//! This crate records embroidery sessions, aggregates them into weekly
//! totals, recommends how to adjust effort and spending, and renders a
//! fixed-width text report.

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
