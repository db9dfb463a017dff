use clap::Parser;
use dotenvy::dotenv;

use iperform::cli::{self, Cli};
use iperform::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logging::init_tracing();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "iperform starting");

    let args = Cli::parse();
    cli::execute(args).await
}
