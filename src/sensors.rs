//! Sensor polling.
//!
//! One [`Reading`] is taken per request cycle and dropped once the response
//! is written; nothing is cached between cycles.

use crate::hal::{AnalogInput, Climate, ClimateError, ClimateSensor, DigitalInput};
use anyhow::Context;
use tracing::warn;

/// One snapshot of all four sensors.
#[derive(Debug, Clone)]
pub struct Reading {
    /// Temperature and humidity, or the fault that prevented measuring them.
    pub climate: Result<Climate, ClimateError>,
    /// Raw soil moisture, 0-65535.
    pub soil_raw: u16,
    /// Raw light level, 0-65535.
    pub light_raw: u16,
    /// True when the water sensor pulls its line low.
    pub water_present: bool,
}

/// Owns the four sensor handles and produces a fresh [`Reading`] per call.
pub struct SensorReader {
    climate: Box<dyn ClimateSensor + Send>,
    soil: Box<dyn AnalogInput + Send>,
    light: Box<dyn AnalogInput + Send>,
    water: Box<dyn DigitalInput + Send>,
}

impl SensorReader {
    pub fn new(
        climate: Box<dyn ClimateSensor + Send>,
        soil: Box<dyn AnalogInput + Send>,
        light: Box<dyn AnalogInput + Send>,
        water: Box<dyn DigitalInput + Send>,
    ) -> Self {
        Self {
            climate,
            soil,
            light,
            water,
        }
    }

    /// Polls every sensor once.
    ///
    /// A climate fault is carried inside the reading and rendered as a marker
    /// on the page. Analog or digital driver errors abort the cycle; the
    /// caller drops the connection and the loop keeps accepting.
    pub fn read(&mut self) -> anyhow::Result<Reading> {
        let climate = self.climate.measure();
        if let Err(e) = &climate {
            warn!(error = %e, "climate measurement failed");
        }

        let soil_raw = self.soil.read_u16().context("reading soil moisture")?;
        let light_raw = self.light.read_u16().context("reading light level")?;

        // Pull-up biasing: line low means the probe is in water.
        let water_present = self.water.is_low().context("reading water sensor")?;

        Ok(Reading {
            climate,
            soil_raw,
            light_raw,
            water_present,
        })
    }
}
