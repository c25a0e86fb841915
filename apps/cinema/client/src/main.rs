use clap::Parser;
use core_config::Environment;
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::Result;

use cinema_client::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();
    init_tracing(&Environment::from_env());

    let cli = Cli::parse();
    let output = cinema_client::run(cli).await?;
    println!("{output}");

    Ok(())
}
