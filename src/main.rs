use floorplan_nav::adapters::inbound::FileEventStore;
use floorplan_nav::adapters::outbound::{init_logger, FilesystemFloorPlanSource};
use floorplan_nav::application::NavigationService;
use floorplan_nav::common::EventStore;
use floorplan_nav::domains::routing::SelectionOutcome;
use floorplan_nav::Config;
use anyhow::Context;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let config = Config::load_or_default(&config_path).await?;

    // fast_log must own the `log` facade, so the domain logger goes first and
    // the subscriber is installed without the `log` bridge.
    let logger = init_logger(config.logging.file.as_deref(), config.logging.level_filter());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing tracing subscriber")?;

    info!("Starting floorplan-nav");
    info!("Floor plan: {}", config.floor_plan.name);
    let journal: Option<Arc<dyn EventStore>> = config
        .journal
        .dir
        .clone()
        .map(|dir| Arc::new(FileEventStore::new(dir)) as Arc<dyn EventStore>);

    let source = FilesystemFloorPlanSource::new(config.floor_plan.data_dir.clone());
    info!("Floor plan directory: {}", source.base().display());
    let mut service = NavigationService::load(&source, &config.floor_plan.name, logger, journal)?;
    info!("Session {} ready", service.session().id());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
        let arg = arg.trim();

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "points" | "search" => {
                for poi in service.search(arg) {
                    println!("{}\t({:.1}, {:.1})\t{:?}", poi.name, poi.x, poi.y, poi.category);
                }
            }
            "select" => match service.select(arg).await {
                Ok(outcome) => {
                    if let SelectionOutcome::NoRoute { .. } = outcome {
                        warn!("No route found");
                    }
                    println!("{}", serde_json::to_string_pretty(&service.projection())?);
                }
                Err(e) => error!("{}", e),
            },
            "route" => println!("{}", serde_json::to_string_pretty(&service.projection())?),
            other => warn!("Unknown command {:?}; use search, points, select, route or quit", other),
        }
    }

    info!("Shutting down floorplan-nav");
    Ok(())
}
