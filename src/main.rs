use clap::Parser;
use crlset_tools::{
    cli::{self, Cli},
    config::Config,
    telemetry,
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    telemetry::init_tracing();

    let config = Config::load()?;
    let cli = Cli::parse();

    let mut out = std::io::stdout().lock();
    let mut diag = std::io::stderr().lock();
    cli::run(cli.command, &config, &mut out, &mut diag).await?;
    Ok(())
}
