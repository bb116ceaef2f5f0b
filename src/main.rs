use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod models;
mod services;
mod store;
mod utils;

use commands::Session;
use config::AppConfig;
use services::notification_service;
use services::purchase_service::PurchaseWorkflow;

/// Sleep until `deadline`, or forever when nothing is in flight
async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("starmarket=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("⭐ Starting StarMarket...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };
    debug!("Configuration: {:?}", config);

    info!("Loading store...");
    let store = match store::init_store(config.fixtures_path.as_deref()) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to load store: {}", e);
            return;
        }
    };

    let (notifier, receiver) = notification_service::channel();
    let active_toasts = notification_service::ActiveToasts::default();
    let renderer = tokio::spawn(notification_service::run_toast_renderer(receiver, active_toasts));

    let workflow = PurchaseWorkflow::new(notifier, config.submit_delay, config.toast_duration_ms);
    let mut session = Session::new(&store, workflow);

    println!("{}", session.render());
    println!("\nType `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let deadline = session.pending_deadline();
        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        let output = session.handle_line(&line);
                        if !output.text.is_empty() {
                            println!("{}", output.text);
                        }
                        if output.quit {
                            break;
                        }
                    }
                    Ok(None) => {
                        debug!("Input closed");
                        // Let an in-flight purchase finish so its toast is shown
                        if deadline.is_some() {
                            wait_for(deadline).await;
                            if let Some(page) = session.resolve_pending() {
                                println!("{}", page);
                            }
                        }
                        break;
                    }
                    Err(e) => {
                        error!("Failed to read input: {}", e);
                        break;
                    }
                }
            }
            _ = wait_for(deadline), if deadline.is_some() => {
                if let Some(page) = session.resolve_pending() {
                    println!("{}", page);
                }
            }
        }
    }

    // Dropping the session closes the toast channel
    drop(session);
    if let Err(e) = renderer.await {
        error!("Toast renderer failed: {}", e);
    }

    info!("StarMarket stopped");
}
