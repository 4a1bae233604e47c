use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "uclad")]
#[command(about = "uclad - compile and run a single source file", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile (when needed) and run a .java, .c, .cpp or .py file
    Run {
        file: PathBuf,

        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long)]
        dry_run: bool,
    },

    /// Print the main class and classpath root of a Java source
    Resolve {
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },

    Version,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            dry_run,
        } => {
            commands::run::execute(file, config, dry_run)?;
        }
        Commands::Resolve { file, json } => {
            commands::resolve::execute(file, json)?;
        }
        Commands::Version => {
            println!("uclad {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
