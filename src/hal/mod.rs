//! Hardware boundary traits.
//!
//! The physical drivers (ADC channels, GPIO lines, the single-wire climate
//! sensor, the Wi-Fi radio) live behind these traits. The firmware build wires
//! in the platform drivers; [`sim`] provides in-memory implementations so the
//! whole loop runs on a host and in tests.

pub mod sim;

use std::fmt;
use std::net::Ipv4Addr;

/// One successful temperature/humidity measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Climate {
    pub temperature_c: i8,
    pub humidity_pct: u8,
}

/// Why a climate measurement cycle failed.
///
/// These faults are transient and recovered locally: the reading carries the
/// error and the status page shows a marker instead of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimateError {
    /// The sensor never acknowledged the start signal.
    NotResponding,
    /// The payload arrived but its checksum did not match.
    ChecksumMismatch,
    /// A pulse fell outside the protocol's timing window.
    Timing,
}

impl fmt::Display for ClimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClimateError::NotResponding => write!(f, "sensor not responding"),
            ClimateError::ChecksumMismatch => write!(f, "checksum mismatch"),
            ClimateError::Timing => write!(f, "timing fault"),
        }
    }
}

impl std::error::Error for ClimateError {}

/// Why the radio could not join the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiError {
    NetworkNotFound,
    AuthenticationFailed,
    Timeout,
}

impl fmt::Display for WifiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WifiError::NetworkNotFound => write!(f, "network not found"),
            WifiError::AuthenticationFailed => write!(f, "authentication failed"),
            WifiError::Timeout => write!(f, "association timed out"),
        }
    }
}

impl std::error::Error for WifiError {}

/// An ADC channel normalized to the full 16-bit range.
pub trait AnalogInput {
    fn read_u16(&mut self) -> anyhow::Result<u16>;
}

/// A pull-up biased digital input: the line reads high until something
/// external pulls it low.
pub trait DigitalInput {
    fn is_low(&mut self) -> anyhow::Result<bool>;
}

/// A digital output line.
pub trait DigitalOutput {
    fn set(&mut self, on: bool) -> anyhow::Result<()>;
}

/// The temperature/humidity sensor behind its own timing protocol.
pub trait ClimateSensor {
    /// Triggers one measurement cycle.
    fn measure(&mut self) -> Result<Climate, ClimateError>;
}

/// The station-mode Wi-Fi radio.
pub trait WifiRadio {
    /// One association attempt; returns the assigned address on success.
    fn join(&mut self, ssid: &str, password: &str) -> Result<Ipv4Addr, WifiError>;
}
