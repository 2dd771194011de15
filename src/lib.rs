//! Wellbeing Priority - intervention ranking for mental-health programmes
//!
//! This crate scores individuals on nine digital-wellbeing metrics with
//! TOPSIS under fixed AHP weights and ranks them by intervention priority.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
