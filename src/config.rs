use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;

/// Compile-time fallback credentials, used when no config file overrides them.
pub const WIFI_SSID: &str = "your SSID";
pub const WIFI_PASS: &str = "your PASSWORD";

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the status page listens on.
    pub listen_addr: String,

    /// Network to associate with at startup.
    pub ssid: String,
    pub password: String,

    /// How many times to try joining the network before giving up.
    pub wifi_max_attempts: u32,
    /// Initial delay between join attempts; doubles after each failure.
    pub wifi_backoff_ms: u64,

    /// How long a client gets to finish sending its request head.
    pub head_timeout_ms: u64,
    /// Pause after each served connection before accepting the next.
    pub cycle_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:80".to_string(),
            ssid: WIFI_SSID.to_string(),
            password: WIFI_PASS.to_string(),
            wifi_max_attempts: 5,
            wifi_backoff_ms: 500,
            head_timeout_ms: 5_000,
            cycle_delay_ms: 1_000,
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `PLANTWATCH_CONFIG`,
    /// falling back to defaults. `LISTEN` overrides the listen address either way.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("PLANTWATCH_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {path}"))?;
                serde_yaml::from_str(&raw)
                    .with_context(|| format!("parsing config file {path}"))?
            }
            Err(_) => Config::default(),
        };

        if let Ok(listen) = std::env::var("LISTEN") {
            cfg.listen_addr = listen;
        }

        Ok(cfg)
    }

    pub fn wifi_backoff(&self) -> Duration {
        Duration::from_millis(self.wifi_backoff_ms)
    }

    pub fn head_timeout(&self) -> Duration {
        Duration::from_millis(self.head_timeout_ms)
    }

    pub fn cycle_delay(&self) -> Duration {
        Duration::from_millis(self.cycle_delay_ms)
    }
}
