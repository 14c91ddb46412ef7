pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod prediction;
pub mod telemetry;
