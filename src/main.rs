use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = memos::cli::Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(err) = memos::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
