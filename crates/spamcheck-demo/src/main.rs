use clap::Parser;
use spamcheck_demo::cli::Cli;
use spamcheck_demo::config::DemoConfig;
use spamcheck_demo::server::run_server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = DemoConfig::load(&cli)?;
    let addr = config.socket_addr()?;

    println!();
    println!("  ╔═══════════════════════════════════════════╗");
    println!("  ║   spamcheck: TF-IDF spam detector demo    ║");
    println!("  ╚═══════════════════════════════════════════╝");
    println!();
    for model in &config.models {
        println!("  Model:   {} ({})", model.name, model.classifier.display());
    }
    println!();

    run_server(config, addr).await?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "spamcheck_demo=debug,spamcheck_classifiers=debug,tower_http=debug"
    } else {
        "spamcheck_demo=info,spamcheck_classifiers=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
