//! Buzzer control.

use crate::hal::DigitalOutput;
use std::time::Duration;

/// The alarm buzzer. Sounds while no water is detected.
pub struct Buzzer {
    out: Box<dyn DigitalOutput + Send>,
}

impl Buzzer {
    pub fn new(out: Box<dyn DigitalOutput + Send>) -> Self {
        Self { out }
    }

    /// Re-derives the output from the current reading: ON when water is
    /// absent, OFF when present. Idempotent, called every cycle.
    pub fn update(&mut self, water_present: bool) -> anyhow::Result<()> {
        self.out.set(!water_present)
    }

    /// Short beep burst, used as the startup failure indicator since the
    /// device has no display. Leaves the buzzer off.
    pub async fn pulse(&mut self, count: u32) -> anyhow::Result<()> {
        for _ in 0..count {
            self.out.set(true)?;
            tokio::time::sleep(Duration::from_millis(100)).await;
            self.out.set(false)?;
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        Ok(())
    }
}
