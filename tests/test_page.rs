use plantwatch::hal::{Climate, ClimateError};
use plantwatch::page::{self, CLIMATE_ERROR_MARKER};
use plantwatch::sensors::Reading;

fn reading_with(climate: Result<Climate, ClimateError>, water_present: bool) -> Reading {
    Reading {
        climate,
        soil_raw: 32_000,
        light_raw: 8_000,
        water_present,
    }
}

#[test]
fn test_analog_values_embedded_verbatim() {
    for raw in [0u16, 1, 8_000, 41_234, u16::MAX] {
        let reading = Reading {
            climate: Ok(Climate {
                temperature_c: 23,
                humidity_pct: 55,
            }),
            soil_raw: raw,
            light_raw: raw,
            water_present: true,
        };

        let html = page::render(&reading);
        assert!(html.contains(&format!("Soil Moisture: {raw}")));
        assert!(html.contains(&format!("Light Level (LDR): {raw}")));
    }
}

#[test]
fn test_climate_failure_renders_error_marker_for_both_fields() {
    for error in [
        ClimateError::NotResponding,
        ClimateError::ChecksumMismatch,
        ClimateError::Timing,
    ] {
        let html = page::render(&reading_with(Err(error), true));
        assert!(html.contains(&format!("Temperature: {CLIMATE_ERROR_MARKER} &deg;C")));
        assert!(html.contains(&format!("Humidity: {CLIMATE_ERROR_MARKER} %")));
    }
}

#[test]
fn test_water_present_is_green() {
    let html = page::render(&reading_with(
        Ok(Climate {
            temperature_c: 23,
            humidity_pct: 55,
        }),
        true,
    ));

    assert!(html.contains(r#"<b style="color:green">Water Detected!</b>"#));
    assert!(!html.contains("No Water"));
}

#[test]
fn test_water_absent_is_red() {
    let html = page::render(&reading_with(
        Ok(Climate {
            temperature_c: 23,
            humidity_pct: 55,
        }),
        false,
    ));

    assert!(html.contains(r#"<b style="color:red">No Water</b>"#));
    assert!(!html.contains("Water Detected!"));
}

#[test]
fn test_full_scenario_all_five_values() {
    let reading = Reading {
        climate: Ok(Climate {
            temperature_c: 23,
            humidity_pct: 55,
        }),
        soil_raw: 41_234,
        light_raw: 8_000,
        water_present: true,
    };

    let html = page::render(&reading);
    assert!(html.contains("Temperature: 23 &deg;C"));
    assert!(html.contains("Humidity: 55 %"));
    assert!(html.contains("Soil Moisture: 41234"));
    assert!(html.contains("Light Level (LDR): 8000"));
    assert!(html.contains("Water Detected!"));
}

#[test]
fn test_page_auto_refreshes_every_two_seconds() {
    let html = page::render(&reading_with(
        Ok(Climate {
            temperature_c: 23,
            humidity_pct: 55,
        }),
        true,
    ));

    assert!(html.contains(r#"<meta http-equiv="refresh" content="2">"#));
}

#[test]
fn test_render_is_deterministic() {
    let reading = reading_with(
        Ok(Climate {
            temperature_c: -3,
            humidity_pct: 90,
        }),
        false,
    );

    assert_eq!(page::render(&reading), page::render(&reading));
}
