//! # smarthomed — smarthome daemon
//!
//! Wires the appliance controller, the maintenance scheduler, and the
//! interactive menu together.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the tracing subscriber
//! - Build the registry and controller (fatal on an ambiguous registry)
//! - Spawn the yearly maintenance scheduler
//! - Run the menu over stdin/stdout until exit, EOF, or Ctrl-C

use std::sync::Arc;

use smarthomed::config::Config;
use smarthomed::menu::Session;
use smarthomed::scheduler::MaintenanceTask;
use tokio::sync::{oneshot, watch};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let controller = Arc::new(smarthomed::build_controller(&config.appliances)?);

    // Maintenance
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scheduler = if config.maintenance.enabled {
        let task = MaintenanceTask::new(Arc::clone(&controller), config.schedule()?);
        Some(tokio::spawn(task.run(shutdown_rx)))
    } else {
        tracing::info!("maintenance scheduler disabled");
        None
    };

    // Menu on a detached thread: stdin reads cannot be cancelled
    let (menu_tx, menu_rx) = oneshot::channel();
    let menu_controller = Arc::clone(&controller);
    std::thread::spawn(move || {
        let session = Session::new(&menu_controller, std::io::stdin().lock(), std::io::stdout());
        let _ = menu_tx.send(session.run());
    });

    tokio::select! {
        result = menu_rx => {
            if let Ok(result) = result {
                result?;
            }
        }
        result = tokio::signal::ctrl_c() => {
            result?;
            tracing::info!("interrupted");
        }
    }

    let _ = shutdown_tx.send(true);
    if let Some(scheduler) = scheduler {
        scheduler.await?;
    }

    Ok(())
}
