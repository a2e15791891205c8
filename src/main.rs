use affinity_mock::cli::{run_generate, Cli};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    run_generate(&cli)?;

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Values are restricted by the `--log-level` parser.
    let level = match log_level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.to_string()))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
