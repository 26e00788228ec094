use anyhow::Context;
use arangoadmin::cli::Cli;
use arangoadmin::logging::init_tracing;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = cli.load_config()?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config.logging)?;
    tracing::info!(
        server = %config.server.base_url,
        database = %config.server.database,
        "starting console"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .thread_name("arangoadmin-fetch")
        .build()
        .context("building async runtime")?;

    arangoadmin::ui::run(&config, runtime.handle().clone())
}
