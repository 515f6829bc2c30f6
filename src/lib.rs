//! Sample workforce metrics behind the SmartHR dashboard demo.
//!
//! [`resolver`] turns a (granularity, segment) selection into the fixed series
//! shown on the dashboard, [`dashboard`] layers manual edits on top of it, and
//! [`insights`] asks an external text-generation service for a short summary.

pub mod config;
pub mod dashboard;
pub mod datasets;
pub mod error;
pub mod export;
pub mod insights;
pub mod models;
pub mod report;
pub mod resolver;
