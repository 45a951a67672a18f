//! Network association at startup.
//!
//! Bounded retry with doubling backoff instead of an indefinite wait, so
//! startup has an observable outcome either way. The device has no display,
//! so exhaustion is signalled with a buzzer pulse pattern before failing.

use anyhow::bail;
use std::cmp;
use std::net::Ipv4Addr;
use std::time::Duration;
use tracing::{info, warn};

use crate::actuator::Buzzer;
use crate::config::Config;
use crate::hal::WifiRadio;

const BACKOFF_CAP: Duration = Duration::from_secs(8);
const FAILURE_PULSES: u32 = 3;

/// Joins the configured network, retrying up to `wifi_max_attempts` times.
pub async fn associate(
    radio: &mut dyn WifiRadio,
    buzzer: &mut Buzzer,
    cfg: &Config,
) -> anyhow::Result<Ipv4Addr> {
    let mut backoff = cfg.wifi_backoff();

    for attempt in 1..=cfg.wifi_max_attempts {
        match radio.join(&cfg.ssid, &cfg.password) {
            Ok(ip) => {
                info!(%ip, attempt, "associated with {}", cfg.ssid);
                return Ok(ip);
            }
            Err(e) => {
                warn!(
                    attempt,
                    max = cfg.wifi_max_attempts,
                    error = %e,
                    "join failed"
                );
            }
        }

        if attempt < cfg.wifi_max_attempts {
            tokio::time::sleep(backoff).await;
            backoff = cmp::min(backoff * 2, BACKOFF_CAP);
        }
    }

    buzzer.pulse(FAILURE_PULSES).await?;
    bail!(
        "could not join {} after {} attempts",
        cfg.ssid,
        cfg.wifi_max_attempts
    )
}
