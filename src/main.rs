use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use insights_dash::cli::{Cli, Commands};
use insights_dash::commands::{run_chart, run_export, run_init, run_queries, run_report};

fn main() {
    let cli = Cli::parse();
    init_logger(&cli);

    let exit_code = match &cli.command {
        Commands::Chart(args) => run_chart(args, &cli),
        Commands::Export(args) => run_export(args, &cli),
        Commands::Report(args) => run_report(args, &cli),
        Commands::Queries => run_queries(),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

/// `RUST_LOG` wins over `-v`/`-q`.
fn init_logger(cli: &Cli) {
    let default_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("insights_dash={default_level}")));
    let subscriber = SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: logger was already initialized");
    }
}
