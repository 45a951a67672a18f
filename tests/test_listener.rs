//! End-to-end tests of the serial accept loop over real sockets.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use plantwatch::actuator::Buzzer;
use plantwatch::config::Config;
use plantwatch::hal::sim::SimBoard;
use plantwatch::sensors::SensorReader;
use plantwatch::server::handler::DeviceContext;
use plantwatch::server::listener;

fn test_config() -> Config {
    let mut cfg = Config::default();
    cfg.listen_addr = "127.0.0.1:0".to_string();
    cfg.head_timeout_ms = 100;
    cfg.cycle_delay_ms = 10;
    cfg
}

fn sim_device(board: &SimBoard) -> DeviceContext {
    DeviceContext {
        sensors: SensorReader::new(
            Box::new(board.climate.clone()),
            Box::new(board.soil.clone()),
            Box::new(board.light.clone()),
            Box::new(board.water.clone()),
        ),
        buzzer: Buzzer::new(Box::new(board.buzzer.clone())),
    }
}

fn spawn_server(cfg: &Config, board: &SimBoard) -> SocketAddr {
    let listener = listener::bind(cfg).unwrap();
    let addr = listener.local_addr().unwrap();
    let mut device = sim_device(board);
    let cfg = cfg.clone();
    tokio::spawn(async move {
        let _ = listener::run(listener, &mut device, &cfg).await;
    });
    addr
}

async fn fetch(addr: SocketAddr) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET / HTTP/1.1\r\nHost: device\r\n\r\n")
        .await
        .unwrap();

    let mut raw = Vec::new();
    tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut raw))
        .await
        .expect("server must answer and close")
        .unwrap();
    String::from_utf8(raw).unwrap()
}

#[tokio::test]
async fn test_serves_successive_connections() {
    let board = SimBoard::new();
    let cfg = test_config();
    let addr = spawn_server(&cfg, &board);

    board.soil.set(41_234);
    let first = fetch(addr).await;
    assert!(first.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(first.contains("Soil Moisture: 41234"));

    // Each request observes the state at its own cycle.
    board.soil.set(100);
    let second = fetch(addr).await;
    assert!(second.contains("Soil Moisture: 100"));
}

#[tokio::test]
async fn test_loop_survives_a_stalled_client() {
    let board = SimBoard::new();
    let cfg = test_config();
    let addr = spawn_server(&cfg, &board);

    assert!(fetch(addr).await.starts_with("HTTP/1.1 200 OK\r\n"));

    // Never sends the terminating blank line; the head timeout must cut it
    // off without a response.
    let mut stalled = TcpStream::connect(addr).await.unwrap();
    stalled
        .write_all(b"GET / HTTP/1.1\r\nHost: device\r\n")
        .await
        .unwrap();
    let mut raw = Vec::new();
    let _ = tokio::time::timeout(Duration::from_secs(5), stalled.read_to_end(&mut raw))
        .await
        .expect("stalled client must be disconnected, not held forever");
    assert!(raw.is_empty());

    // The loop keeps accepting afterwards.
    assert!(fetch(addr).await.starts_with("HTTP/1.1 200 OK\r\n"));
}
