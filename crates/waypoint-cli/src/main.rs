//! waypoint CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "waypoint",
    version,
    about = "Career-interest assessment scoring engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a response set against a content directory
    Score {
        /// Content directory (questions.json, pathways.json, scoring-matrix.json)
        #[arg(long, default_value = "./content")]
        content: PathBuf,

        /// JSON file with the recorded responses
        #[arg(long)]
        responses: PathBuf,

        /// Output directory
        #[arg(long, default_value = "./waypoint-results")]
        output: PathBuf,

        /// Output format: json, html, markdown, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Validate a content directory
    Validate {
        /// Content directory
        #[arg(long, default_value = "./content")]
        content: PathBuf,
    },

    /// List the pathways a content directory defines
    Pathways {
        /// Content directory
        #[arg(long, default_value = "./content")]
        content: PathBuf,

        /// Filter to one category: traditional, emerging, interdisciplinary
        #[arg(long)]
        category: Option<String>,
    },

    /// Create a starter content directory and sample response file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("waypoint=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            content,
            responses,
            output,
            format,
        } => commands::score::execute(content, responses, output, format),
        Commands::Validate { content } => commands::validate::execute(content),
        Commands::Pathways { content, category } => commands::pathways::execute(content, category),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
