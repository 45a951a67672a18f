use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::actuator::Buzzer;
use crate::http::response::Response;
use crate::http::{head, writer};
use crate::page;
use crate::sensors::SensorReader;

/// Everything the serve cycle touches, built once at startup and passed by
/// reference. There are no process-wide singletons.
pub struct DeviceContext {
    pub sensors: SensorReader,
    pub buzzer: Buzzer,
}

/// Serves exactly one request on an accepted connection.
///
/// Drains the request head (bounded by `head_timeout`), takes a fresh sensor
/// reading, re-derives the buzzer state, and writes the rendered page as a
/// `200 OK` before shutting the stream down. Any error here aborts only this
/// connection; the listener keeps accepting.
pub async fn serve_one<S>(
    stream: &mut S,
    device: &mut DeviceContext,
    head_timeout: Duration,
) -> anyhow::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    timeout(head_timeout, head::drain_request_head(stream))
        .await
        .map_err(|_| anyhow::anyhow!("timed out waiting for end of request head"))??;

    let reading = device.sensors.read()?;
    device.buzzer.update(reading.water_present)?;

    let response = Response::html(page::render(&reading));
    writer::write_response(stream, &response).await?;

    // One request per connection; no keep-alive.
    stream.shutdown().await?;
    Ok(())
}
