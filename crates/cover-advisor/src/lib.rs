pub mod config;
pub mod error;
pub mod recommendation;
pub mod telemetry;
