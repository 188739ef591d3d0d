use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_appender::rolling;

use staffdesk::{Latency, MockApi, config::Config, storage::init_storage, utils::clock::SystemClock};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();

    let config = Config::from_env();
    let args = cli::Cli::parse();

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "staffdesk.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(command = ?args.command, "staffdesk starting");

    let storage = init_storage(&config.storage_dir)?;
    let api = MockApi::new(
        storage,
        Arc::new(SystemClock),
        Latency::from_flag(config.simulate_latency),
    )?;

    let (body, code) = match cli::run(&api, args.command).await {
        Ok(data) => (cli::success(data), ExitCode::SUCCESS),
        Err(e) => {
            if matches!(e, staffdesk::ServiceError::Store(_)) {
                error!(error = %e, "storage failure");
            }
            (cli::failure(&e), ExitCode::FAILURE)
        }
    };

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(code)
}
