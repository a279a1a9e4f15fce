use crate::api::model::AppState;
use crate::utils::trace_if_enabled;
use log::info;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Spawns the cpu drift loop, it ends when `cancel` fires.
pub fn exec_ticker(app_state: &Arc<AppState>, period: Duration, cancel: &CancellationToken) -> tokio::task::JoinHandle<()> {
    let state = Arc::clone(app_state);
    let cancel = cancel.clone();

    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let touched = state.simulator.lock().await.tick();
                    trace_if_enabled!("Ticker moved cpu of {} processes", touched);
                }
                () = cancel.cancelled() => {
                    break;
                }
            }
        }
        info!("Ticker stopped");
    })
}
