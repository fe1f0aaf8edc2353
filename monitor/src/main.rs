use std::process;

use tracing::error;

mod config;
mod constants;
mod errors;
mod health;
mod hex;
mod logging;
mod rpc;
mod services;

use config::Config;
use constants::{exit_codes, PING_BASE_URL};
use errors::{ConfigError, MonitorError};
use health::{ChainStateReader, HealthMonitor};
use rpc::RpcClient;
use services::ReportService;

#[tokio::main]
async fn main() {
    process::exit(run().await);
}

async fn run() -> i32 {
    // Configuration and logging come up before any network activity
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", MonitorError::Config(e));
            return exit_codes::FAILURE;
        }
    };

    if let Err(e) = logging::init(&config.log_file) {
        let e = MonitorError::Config(ConfigError::LogFileUnavailable {
            path: config.log_file.clone(),
            reason: e.to_string(),
        });
        eprintln!("{}", e);
        return exit_codes::FAILURE;
    }

    let monitor = match build_monitor(&config) {
        Ok(monitor) => monitor,
        Err(e) => return fatal(e),
    };

    tokio::select! {
        outcome = monitor.run_check() => match outcome {
            Ok(outcome) => outcome.exit_code(),
            Err(e) => fatal(e),
        },
        _ = tokio::signal::ctrl_c() => {
            error!("Interrupted, aborting check");
            eprintln!("Interrupted");
            exit_codes::INTERRUPTED
        }
    }
}

fn build_monitor(config: &Config) -> Result<HealthMonitor, MonitorError> {
    let rpc = RpcClient::new(config.rpc_url.clone(), config.network_timeout())?;
    let reader = ChainStateReader::new(rpc);
    let reporter = ReportService::new(
        PING_BASE_URL.to_string(),
        config.node_id.clone(),
        config.network_timeout(),
    )?;

    Ok(HealthMonitor::new(config.clone(), reader, reporter))
}

fn fatal(e: MonitorError) -> i32 {
    error!("Health check failed: {}", e);
    eprintln!("Health check failed: {}", e);
    exit_codes::FAILURE
}
