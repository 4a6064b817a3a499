//! VelocityIQ: technical-debt risk scoring and dependency suggestions built on
//! SonarQube issue data, served as a small JSON API.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
