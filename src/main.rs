//! Explorer bootstrap (v1)
//!
//! Starts the chart explorer in whichever host environment it finds itself.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────────────┐
//!                 │                     BOOTSTRAP                         │
//!                 │                                                       │
//!   EXPLORER_     │  ┌─────────────┐     bundled    ┌──────────────────┐  │
//!   BUNDLE ───────┼─▶│ environment │───────────────▶│ BundledStrategy  │──┼──┐
//!   (or config)   │  │  detection  │                │ chart ∥ console  │  │  │
//!                 │  └─────────────┘   standalone   └──────────────────┘  │  │
//!                 │         │                       ┌──────────────────┐  │  │
//!                 │         └──────────────────────▶│StandaloneStrategy│──┼──┤
//!                 │                                 │artifact ∥ console│  │  │
//!                 │                                 │  → init()        │  │  │
//!                 │                                 └──────────────────┘  │  │
//!                 │                                                       │  │
//!                 │      ┌───────────────┐        ┌───────────────┐       │  │
//!   stdout ◀──────┼──────│    main()     │◀───────│  setup(Chart) │◀──────┼──┘
//!                 │      └───────────────┘        └───────────────┘       │
//!                 └──────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{self, BufReader};

use explorer_bootstrap::capability::{ArtifactFile, BundledChartModule};
use explorer_bootstrap::config::{resolve_config, ConfigOverrides, EnvironmentSetting};
use explorer_bootstrap::lifecycle::Bootstrap;
use explorer_bootstrap::loader::{BundledStrategy, StandaloneStrategy};
use explorer_bootstrap::observability::init_logging;
use explorer_bootstrap::orchestration::ConsoleModule;

#[derive(Parser)]
#[command(name = "explorer-bootstrap")]
#[command(about = "Loads the chart explorer for the current host environment", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the environment selection.
    #[arg(short, long, value_enum)]
    environment: Option<EnvironmentSetting>,

    /// Override the standalone artifact path.
    #[arg(short, long)]
    artifact: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(
        cli.config.as_deref(),
        ConfigOverrides {
            environment: cli.environment,
            artifact: cli.artifact,
        },
    )?;

    init_logging(&config.logging);

    tracing::info!("explorer-bootstrap v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        environment = ?config.environment,
        artifact = %config.artifact.path,
        width = config.chart.width,
        height = config.chart.height,
        "Configuration loaded"
    );

    let bundled = BundledStrategy::new(
        BundledChartModule::new(config.chart.clone()),
        ConsoleModule::new(BufReader::new(io::stdin()), io::stdout()),
    );
    let standalone = StandaloneStrategy::new(
        ArtifactFile::new(&config.artifact.path, config.chart.clone()),
        ConsoleModule::new(BufReader::new(io::stdin()), io::stdout()),
    );

    Bootstrap::new(config.environment.resolve(), bundled, standalone)
        .init()
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
