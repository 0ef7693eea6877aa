use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
use commands::audit::{self, AuditArgs};

#[derive(Parser)]
#[command(name = "leeway")]
#[command(about = "Static compliance auditor for the LeeWay standards")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a backend tree: required dirs, headers, models, checkpoints,
    /// declared dependencies, ffmpeg availability
    Backend(AuditArgs),

    /// Audit a frontend tree: headers, duplicate markup ids, required assets
    Frontend(AuditArgs),
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Backend(args) => audit::run_backend(&args),
        Commands::Frontend(args) => audit::run_frontend(&args),
    }
}
