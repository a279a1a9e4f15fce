#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
mod modules;

include_modules!();

use crate::api::main_api::start_server;
use crate::model::{Config, SnapshotSourceType};
use crate::utils::{get_build_time, init_logger, read_config, DEFAULT_CONFIG_FILE};
use clap::Parser;
use log::{error, info};

#[derive(Parser)]
#[command(name = "faultsim")]
#[command(version)]
#[command(about = "Operating system fault simulator", long_about = None)]
struct Args {
    /// The config file
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,

    /// log level
    #[arg(short = 'l', long = "log-level", default_missing_value = "info")]
    log_level: Option<String>,

    /// Overrides the listen address
    #[arg(short = 'H', long = "host")]
    host: Option<String>,

    /// Overrides the listen port
    #[arg(short = 'P', long = "port")]
    port: Option<u16>,

    /// Use generated processes instead of the host process list
    #[arg(long = "synthetic", default_value_t = false, default_missing_value = "true")]
    synthetic: bool,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn apply_args(config: &mut Config, args: &Args) {
    if let Some(host) = args.host.as_ref() {
        config.api.host = host.trim().to_string();
    }
    if let Some(port) = args.port {
        config.api.port = port;
    }
    if args.synthetic {
        config.simulation.snapshot_source = SnapshotSourceType::Synthetic;
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config_file = args.config_file.clone().unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

    init_logger(args.log_level.as_ref(), config_file.as_str());

    info!("Version: {VERSION}");
    if let Some(bts) = get_build_time() {
        info!("Build time: {bts}");
    }

    let mut config = read_config(config_file.as_str()).unwrap_or_else(|err| exit!("{}", err));
    apply_args(&mut config, &args);

    if let Err(err) = start_server(config).await {
        error!("Can't start server: {err}");
        std::process::exit(1);
    }
    info!("Server stopped");
}
