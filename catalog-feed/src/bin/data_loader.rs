use std::io;

use clap::Parser;
use tracing::info;

use catalog_feed::app::run_loader;
use catalog_feed::cli::{resolve_api_key, LoaderArgs};
use catalog_feed::{telemetry, AppError, FeedConfig};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    telemetry::init();

    let args = LoaderArgs::parse();

    if let Err(e) = run(args).await {
        telemetry::report("Data loader failed", &e);
        std::process::exit(1);
    }
}

async fn run(args: LoaderArgs) -> Result<(), AppError> {
    let config = FeedConfig::from_env()?;
    let api_key = resolve_api_key(args.api_key, &mut io::stdin().lock(), &mut io::stdout())?;

    let summary = run_loader(&config, &api_key, &args.json_file).await?;

    info!(loaded = summary.loaded, "Data loader finished");
    Ok(())
}
