//! Plantwatch - Garden Sensor Dashboard
//!
//! Core library for the sensor polling loop and the HTTP status page.

pub mod actuator;
pub mod config;
pub mod hal;
pub mod http;
pub mod page;
pub mod sensors;
pub mod server;
pub mod wifi;
