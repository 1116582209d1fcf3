pub mod aggregation;
pub mod commands;
pub mod config;
pub mod error;
pub mod file_manager;
pub mod logging;
pub mod models;
pub mod repository;
pub mod session;
pub mod state;
pub mod storage;
pub mod ticker;
pub mod utils;

pub use error::{AppError, AppResult};
pub use state::{AppState, SharedState};

use config::load_settings;
use log::{debug, error, info};
use logging::{cleanup_old_logs, init_logging};
use std::sync::Arc;
use storage::JsonFileStore;
use ticker::start_ticker;
use utils::{get_app_data_dir, get_data_dir, get_logs_dir, initialize_data_directories, SystemClock};

/// Headless entry point: restore state from the data dir, run the tick
/// until Ctrl-C, then stop it cleanly.
pub fn run() {
    if let Err(e) = initialize_data_directories() {
        eprintln!("Failed to initialize app data: {}", e);
    }

    let settings = load_settings();
    init_logging(&settings, &get_logs_dir());
    cleanup_old_logs(&get_logs_dir(), settings.log_retention_days);
    info!("Data directory: {:?}", get_app_data_dir());

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to start runtime: {}", e);
            return;
        }
    };

    runtime.block_on(async move {
        let store = Arc::new(JsonFileStore::new(get_data_dir()));
        let state = AppState::load(store, Arc::new(SystemClock)).into_shared();

        let dashboard = commands::views::get_dashboard(&state, settings.recent_rentals_limit);
        info!(
            "Loaded {} rentals, revenue {}, {} active",
            state.lock().rentals().len(),
            utils::format_rupiah(dashboard.totals.total_revenue),
            dashboard.totals.active_count
        );

        let ticker = start_ticker(state.clone(), settings.tick_interval());
        let mut totals = ticker.subscribe();
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                changed = totals.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let latest = *totals.borrow_and_update();
                    debug!("Tick: {} active, revenue {}", latest.active_count, latest.total_revenue);
                }
                _ = &mut shutdown => {
                    info!("Shutting down");
                    break;
                }
            }
        }

        ticker.stop().await;
    });
}
