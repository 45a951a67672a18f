use plantwatch::actuator::Buzzer;
use plantwatch::config::Config;
use plantwatch::hal::sim::SimBoard;
use plantwatch::sensors::SensorReader;
use plantwatch::server::handler::DeviceContext;
use plantwatch::server::listener;
use plantwatch::wifi;

use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    // Simulated board; the firmware build substitutes the platform drivers
    // behind the same hal traits.
    let board = SimBoard::new();

    let mut buzzer = Buzzer::new(Box::new(board.buzzer.clone()));
    let mut radio = board.radio.clone();
    let ip = wifi::associate(&mut radio, &mut buzzer, &cfg).await?;
    info!("dashboard reachable at http://{ip}/");

    let sensors = SensorReader::new(
        Box::new(board.climate.clone()),
        Box::new(board.soil.clone()),
        Box::new(board.light.clone()),
        Box::new(board.water.clone()),
    );
    let mut device = DeviceContext { sensors, buzzer };

    let listener = listener::bind(&cfg)?;

    tokio::select! {
        res = listener::run(listener, &mut device, &cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    Ok(())
}
