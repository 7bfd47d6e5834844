pub mod calculator;
pub mod config;
pub mod error;
pub mod telemetry;
