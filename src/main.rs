#![cfg(not(target_arch = "wasm32"))]
//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg` and
//! serves `static/` on a local HTTP server.

use std::env;
use std::process::{Command, ExitCode};

const DEFAULT_PORT: u16 = 8000;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port = match env::var("PULSE_PORT") {
        Ok(value) => match value.parse::<u16>() {
            Ok(port) => port,
            Err(err) => {
                log::error!("PULSE_PORT={value:?} is not a port: {err}");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => DEFAULT_PORT,
    };

    log::info!("building WASM pkg");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(status) => {
            log::error!("wasm-pack exited with {status}");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            log::warn!("wasm-pack not available ({err}); serving existing static/pkg");
        }
    }

    log::info!("serving static/ at http://127.0.0.1:{port}");
    match Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .status()
    {
        Ok(status) if status.success() => ExitCode::SUCCESS,
        Ok(status) => {
            log::error!("http server exited with {status}");
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("could not start http server: {err}");
            ExitCode::FAILURE
        }
    }
}
