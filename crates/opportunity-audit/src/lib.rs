pub mod audit;
pub mod config;
pub mod delivery;
pub mod error;
pub mod telemetry;
