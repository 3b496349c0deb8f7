use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use zombienet_waiters::{setup::NetworkInfo, waiters::hrmp::wait_for_hrmp_channel_opened};

#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// The network file written by the orchestrator
    #[clap(short, long, value_parser)]
    network_file: PathBuf,

    /// The name of the node whose state to observe
    #[clap(long, value_parser)]
    node: String,

    /// The sibling parachain id the egress channel must point at
    sibling: String,
}

fn start_logger(default_level: LevelFilter) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        _ => EnvFilter::default().add_directive(default_level.into()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    start_logger(LevelFilter::INFO);
    let args = Args::parse();

    let network = NetworkInfo::from_file(&args.network_file)?;

    info!(
        "waiting for {} to open an egress channel towards {}",
        args.node, args.sibling
    );
    wait_for_hrmp_channel_opened(&args.node, &network, &[args.sibling]).await?;
    info!("egress channel open");

    Ok(())
}
