use crate::model::Config;
use crate::simulation::{create_snapshot_source, take_snapshot, SnapshotOrigin, SnapshotSource, Simulator};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

#[derive(Clone, Default)]
pub struct CancelTokens {
    pub ticker: CancellationToken,
    pub server: CancellationToken,
}

impl CancelTokens {
    pub fn cancel_all(&self) {
        self.ticker.cancel();
        self.server.cancel();
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub simulator: Arc<Mutex<Simulator>>,
    pub snapshot_source: Arc<dyn SnapshotSource>,
    pub cancel_tokens: CancelTokens,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let simulator = Simulator::from_config(&config.simulation, &config.algorithms);
        let snapshot_source = create_snapshot_source(config.simulation.snapshot_source);
        Self {
            config: Arc::new(config),
            simulator: Arc::new(Mutex::new(simulator)),
            snapshot_source,
            cancel_tokens: CancelTokens::default(),
        }
    }

    /// Reloads the process table from the snapshot source.
    ///
    /// The snapshot is taken without holding the simulator lock, a slow host must not stall readers.
    pub async fn initialize_processes(&self) -> SnapshotOrigin {
        let simulation = &self.config.simulation;
        let snapshot = take_snapshot(&self.snapshot_source, simulation.snapshot_limit, simulation.snapshot_timeout()).await;
        self.simulator.lock().await.initialize(snapshot)
    }
}
