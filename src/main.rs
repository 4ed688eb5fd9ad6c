use clap::Parser;
use roster_reconcile_lib::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    roster_reconcile_lib::run(Cli::parse()).await
}
