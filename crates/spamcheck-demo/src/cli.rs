use clap::Parser;

/// Every flag is optional; running without arguments serves the defaults.
#[derive(Parser, Debug, Default)]
#[command(name = "spamcheck-demo")]
#[command(author, version, about = "Spam detector demo (TF-IDF, Naive Bayes vs Logistic Regression)")]
pub struct Cli {
    /// Config file path (defaults to ./spamcheck.yaml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listen address
    #[arg(short, long)]
    pub address: Option<String>,

    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
