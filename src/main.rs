use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = ambictl::cli::Cli::parse();

    let default_filter = if cli.verbose {
        "ambictl=debug"
    } else {
        "ambictl=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let exit_code = ambictl::run(cli).await;
    std::process::exit(exit_code);
}
