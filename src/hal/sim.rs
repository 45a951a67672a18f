//! Simulated board.
//!
//! Every type here is a cheap clone over shared state, so a test (or the host
//! binary) keeps one handle as a knob and hands another to the reader or the
//! actuator.

use super::{AnalogInput, Climate, ClimateError, ClimateSensor, DigitalInput, DigitalOutput, WifiError, WifiRadio};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicBool, AtomicU16, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// An ADC channel whose raw value is set from the outside.
#[derive(Clone)]
pub struct SimAnalog(Arc<AtomicU16>);

impl SimAnalog {
    pub fn new(initial: u16) -> Self {
        Self(Arc::new(AtomicU16::new(initial)))
    }

    pub fn set(&self, raw: u16) {
        self.0.store(raw, Ordering::Relaxed);
    }
}

impl AnalogInput for SimAnalog {
    fn read_u16(&mut self) -> anyhow::Result<u16> {
        Ok(self.0.load(Ordering::Relaxed))
    }
}

/// A pull-up biased line. Defaults to high (released), like the real input.
#[derive(Clone)]
pub struct SimLine {
    high: Arc<AtomicBool>,
}

impl SimLine {
    pub fn new() -> Self {
        Self {
            high: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn pull_low(&self) {
        self.high.store(false, Ordering::Relaxed);
    }

    pub fn release(&self) {
        self.high.store(true, Ordering::Relaxed);
    }
}

impl Default for SimLine {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitalInput for SimLine {
    fn is_low(&mut self) -> anyhow::Result<bool> {
        Ok(!self.high.load(Ordering::Relaxed))
    }
}

/// An output line that remembers its level and counts off-to-on transitions.
#[derive(Clone)]
pub struct SimOutput {
    on: Arc<AtomicBool>,
    rises: Arc<AtomicU32>,
}

impl SimOutput {
    pub fn new() -> Self {
        Self {
            on: Arc::new(AtomicBool::new(false)),
            rises: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn is_on(&self) -> bool {
        self.on.load(Ordering::Relaxed)
    }

    /// Number of times the line went from off to on.
    pub fn rise_count(&self) -> u32 {
        self.rises.load(Ordering::Relaxed)
    }
}

impl Default for SimOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitalOutput for SimOutput {
    fn set(&mut self, on: bool) -> anyhow::Result<()> {
        let was = self.on.swap(on, Ordering::Relaxed);
        if on && !was {
            self.rises.fetch_add(1, Ordering::Relaxed);
        }
        Ok(())
    }
}

/// A climate sensor that reports whatever it was last told to report.
#[derive(Clone)]
pub struct SimClimate(Arc<Mutex<Result<Climate, ClimateError>>>);

impl SimClimate {
    pub fn new(climate: Climate) -> Self {
        Self(Arc::new(Mutex::new(Ok(climate))))
    }

    pub fn set(&self, climate: Climate) {
        *self.0.lock().unwrap() = Ok(climate);
    }

    pub fn fail(&self, error: ClimateError) {
        *self.0.lock().unwrap() = Err(error);
    }
}

impl ClimateSensor for SimClimate {
    fn measure(&mut self) -> Result<Climate, ClimateError> {
        *self.0.lock().unwrap()
    }
}

/// A radio scripted to fail a fixed number of joins before succeeding.
#[derive(Clone)]
pub struct SimRadio {
    failures_left: Arc<AtomicU32>,
    attempts: Arc<AtomicU32>,
    ip: Ipv4Addr,
}

impl SimRadio {
    pub fn new(failures_before_success: u32, ip: Ipv4Addr) -> Self {
        Self {
            failures_left: Arc::new(AtomicU32::new(failures_before_success)),
            attempts: Arc::new(AtomicU32::new(0)),
            ip,
        }
    }

    /// Total join attempts seen so far.
    pub fn attempt_count(&self) -> u32 {
        self.attempts.load(Ordering::Relaxed)
    }
}

impl WifiRadio for SimRadio {
    fn join(&mut self, _ssid: &str, _password: &str) -> Result<Ipv4Addr, WifiError> {
        self.attempts.fetch_add(1, Ordering::Relaxed);
        let left = self.failures_left.load(Ordering::Relaxed);
        if left > 0 {
            self.failures_left.store(left - 1, Ordering::Relaxed);
            return Err(WifiError::Timeout);
        }
        Ok(self.ip)
    }
}

/// The full simulated board with plausible resting values.
pub struct SimBoard {
    pub climate: SimClimate,
    pub soil: SimAnalog,
    pub light: SimAnalog,
    pub water: SimLine,
    pub buzzer: SimOutput,
    pub radio: SimRadio,
}

impl SimBoard {
    pub fn new() -> Self {
        Self {
            climate: SimClimate::new(Climate {
                temperature_c: 23,
                humidity_pct: 55,
            }),
            soil: SimAnalog::new(32_000),
            light: SimAnalog::new(8_000),
            water: SimLine::new(),
            buzzer: SimOutput::new(),
            radio: SimRadio::new(0, Ipv4Addr::new(192, 168, 1, 50)),
        }
    }
}

impl Default for SimBoard {
    fn default() -> Self {
        Self::new()
    }
}
