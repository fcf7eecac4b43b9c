use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crf_tracker::config::{AggregatorConfig, TrackerConfig, DEFAULT_GLOBAL_VAR};
use crf_tracker::{aggregator, api, services};

#[derive(Parser)]
#[command(name = "crf-tracker")]
#[command(about = "Progress dashboard for the Claude Role Framework")]
struct Cli {
    /// Root of the tracked project (defaults to CRF_TRACKER_ROOT or the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server
    Serve {
        /// Port for HTTP
        #[arg(short, long, default_value = "8890")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Merge the example JSON files into data.js
    GenerateData {
        /// Directory scanned for *.json
        #[arg(long, default_value = "examples")]
        examples: PathBuf,

        /// Output file, overwritten
        #[arg(short, long, default_value = "data.js")]
        output: PathBuf,

        /// Global the data is assigned to
        #[arg(long, default_value = DEFAULT_GLOBAL_VAR)]
        var: String,
    },
    /// Print the progress metrics as JSON
    Progress,
    /// Print the file statistics as JSON
    Files,
    /// Print the todo list and stats as JSON
    Todos,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "crf_tracker=info,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: TrackerConfig, host: &str, port: u16) -> anyhow::Result<()> {
    tracing::info!(
        "Tracking project at {}",
        config.project_root.display()
    );

    let app = api::create_router(config);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Project tracker listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = TrackerConfig::from_env();
    if let Some(root) = cli.root {
        config = config.with_project_root(root);
    }

    match cli.command {
        Some(Commands::Serve { port, host }) => serve(config, &host, port).await?,
        Some(Commands::GenerateData {
            examples,
            output,
            var,
        }) => {
            let agg = AggregatorConfig {
                examples_dir: examples,
                output,
                global_var: var,
            };
            let report = aggregator::run(&agg)?;
            println!("{}", report.summary(&agg.output));
        }
        Some(Commands::Progress) => {
            print_json(&services::get_project_metrics(&config.project_root))?;
        }
        Some(Commands::Files) => {
            print_json(&services::scan_project_files(&config.project_root))?;
        }
        Some(Commands::Todos) => {
            print_json(&services::todo_report(config.todos_file.as_deref())?)?;
        }
        None => serve(config, "127.0.0.1", 8890).await?,
    }

    Ok(())
}
