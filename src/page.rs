//! Status page rendering.

use crate::sensors::Reading;

/// Literal shown in place of temperature and humidity when the climate
/// sensor failed its measurement cycle.
pub const CLIMATE_ERROR_MARKER: &str = "Error";

/// Renders the dashboard for one reading.
///
/// The page auto-refreshes every 2 seconds so the browser re-polls without
/// any server push. Values are numeric or from a fixed vocabulary, so no
/// escaping is needed.
pub fn render(reading: &Reading) -> String {
    let (temperature, humidity) = match &reading.climate {
        Ok(c) => (c.temperature_c.to_string(), c.humidity_pct.to_string()),
        Err(_) => (
            CLIMATE_ERROR_MARKER.to_string(),
            CLIMATE_ERROR_MARKER.to_string(),
        ),
    };

    let (water_color, water_status) = if reading.water_present {
        ("green", "Water Detected!")
    } else {
        ("red", "No Water")
    };

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Plantwatch Sensor Dashboard</title>
    <meta http-equiv="refresh" content="2">
    <style>
      body {{ font-family: Arial; text-align: center; margin-top: 40px; }}
      .status {{ font-size: 20px; }}
    </style>
  </head>
  <body>
    <h2>Garden Sensor Readings</h2>
    <p class="status">Temperature: {temperature} &deg;C</p>
    <p class="status">Humidity: {humidity} %</p>
    <p class="status">Soil Moisture: {soil}</p>
    <p class="status">Light Level (LDR): {light}</p>
    <p class="status">Water Level: <b style="color:{water_color}">{water_status}</b></p>
  </body>
</html>
"#,
        soil = reading.soil_raw,
        light = reading.light_raw,
    )
}
