use std::io;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use catalog_feed::app::{run_emitter, EmitterOptions};
use catalog_feed::cli::{resolve_api_key, EmitterArgs};
use catalog_feed::{telemetry, AppError, FeedConfig};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    telemetry::init();

    let args = EmitterArgs::parse();

    if let Err(e) = run(args).await {
        telemetry::report("Product emitter failed", &e);
        std::process::exit(1);
    }
}

async fn run(args: EmitterArgs) -> Result<(), AppError> {
    let config = FeedConfig::from_env()?;
    let api_key = resolve_api_key(args.api_key, &mut io::stdin().lock(), &mut io::stdout())?;

    let options = EmitterOptions {
        load_data: args.load_data,
        json_file: &args.json_file,
        num_products: args.num_products,
        interval: Duration::from_secs(args.interval),
    };

    let summary = run_emitter(&config, &api_key, options).await?;

    info!(
        iterations = summary.iterations,
        updated = summary.updated,
        skipped = summary.skipped,
        "Product emitter finished"
    );
    Ok(())
}
