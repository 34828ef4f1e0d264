use clap::Parser;

use privacy_central::cli::{self, Cli};
use privacy_central::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli::load_config(&cli)?;
    logging::init_tracing(&config.logging.filter);
    cli::run(cli, config).await
}
