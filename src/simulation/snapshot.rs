use crate::error::{info_err, info_err_res, SimError};
use crate::model::{ProcessRecord, ProcessState, SnapshotSourceType};
use crate::simulation::{Chooser, RandomChooser};
use std::sync::Arc;
use std::time::Duration;
use sysinfo::{MemoryRefreshKind, ProcessRefreshKind, ProcessesToUpdate, RefreshKind, System};

const SYNTHETIC_NAMES: [&str; 8] = [
    "chrome.exe", "vscode.exe", "discord.exe", "firefox.exe",
    "spotify.exe", "notepad.exe", "explorer.exe", "steam.exe",
];

// Three out of four sampled processes wait in the ready queue.
const SAMPLED_STATES: [ProcessState; 4] = [
    ProcessState::Ready,
    ProcessState::Ready,
    ProcessState::Ready,
    ProcessState::Running,
];

/// Produces the initial process list of the table.
pub trait SnapshotSource: Send + Sync {
    fn name(&self) -> &'static str;
    fn snapshot(&self, limit: usize, chooser: &mut dyn Chooser) -> Result<Vec<ProcessRecord>, SimError>;
}

pub fn generate_synthetic_processes<C: Chooser + ?Sized>(chooser: &mut C) -> Vec<ProcessRecord> {
    SYNTHETIC_NAMES
        .iter()
        .zip(0u32..)
        .map(|(name, idx)| ProcessRecord {
            pid: 1000 + idx * 100,
            name: (*name).to_string(),
            cpu: chooser.uniform(1.0, 20.0),
            memory: chooser.uniform(5.0, 25.0),
            state: if idx > 1 { ProcessState::Ready } else { ProcessState::Running },
            priority: u8::try_from(chooser.uniform_int(1, 5)).unwrap_or(1),
            burst_time: chooser.uniform_int(3, 8),
        })
        .collect()
}

pub struct SyntheticSnapshotSource;

impl SnapshotSource for SyntheticSnapshotSource {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    fn snapshot(&self, limit: usize, chooser: &mut dyn Chooser) -> Result<Vec<ProcessRecord>, SimError> {
        let mut processes = generate_synthetic_processes(chooser);
        processes.truncate(limit);
        Ok(processes)
    }
}

/// Samples the processes of the machine we run on.
pub struct HostSnapshotSource;

impl HostSnapshotSource {
    fn sample_system() -> System {
        let refresh_kind = RefreshKind::nothing()
            .with_memory(MemoryRefreshKind::nothing().with_ram())
            .with_processes(
                ProcessRefreshKind::nothing()
                    .with_cpu()
                    .with_memory()
            );
        let mut sys = System::new_with_specifics(refresh_kind);
        // cpu usage is a delta between two refreshes
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        sys.refresh_processes_specifics(ProcessesToUpdate::All, true, ProcessRefreshKind::nothing().with_cpu().with_memory());
        sys
    }
}

impl SnapshotSource for HostSnapshotSource {
    fn name(&self) -> &'static str {
        "host"
    }

    fn snapshot(&self, limit: usize, chooser: &mut dyn Chooser) -> Result<Vec<ProcessRecord>, SimError> {
        let sys = Self::sample_system();
        #[allow(clippy::cast_precision_loss)]
        let total_memory = sys.total_memory() as f64;
        if sys.processes().is_empty() {
            return info_err_res!("Host reported no processes");
        }

        let mut pids: Vec<_> = sys.processes().keys().copied().collect();
        pids.sort_unstable();

        let mut processes = Vec::with_capacity(limit);
        for pid in pids {
            if processes.len() >= limit {
                break;
            }
            // vanished between listing and reading, or a thread entry
            let Some(proc) = sys.process(pid) else { continue };
            if proc.thread_kind().is_some() {
                continue;
            }
            let name = proc.name().to_string_lossy().trim().to_string();
            let pid = pid.as_u32();
            if pid == 0 || name.is_empty() {
                continue;
            }

            let sampled_cpu = f64::from(proc.cpu_usage());
            #[allow(clippy::cast_precision_loss)]
            let sampled_memory = if total_memory > 0.0 { proc.memory() as f64 / total_memory * 100.0 } else { 0.0 };
            let cpu = if sampled_cpu > 0.0 { sampled_cpu } else { chooser.uniform(0.5, 15.0) };
            let memory = if sampled_memory > 0.0 { sampled_memory } else { chooser.uniform(1.0, 20.0) };

            processes.push(ProcessRecord {
                pid,
                name,
                cpu,
                memory,
                state: SAMPLED_STATES[chooser.pick_index(SAMPLED_STATES.len())],
                priority: u8::try_from(chooser.uniform_int(1, 5)).unwrap_or(1),
                burst_time: chooser.uniform_int(2, 10),
            });
        }
        Ok(processes)
    }
}

pub fn create_snapshot_source(source_type: SnapshotSourceType) -> Arc<dyn SnapshotSource> {
    match source_type {
        SnapshotSourceType::Host => Arc::new(HostSnapshotSource),
        SnapshotSourceType::Synthetic => Arc::new(SyntheticSnapshotSource),
    }
}

/// Runs the source on the blocking pool, bounded by `timeout`.
pub async fn take_snapshot(source: &Arc<dyn SnapshotSource>, limit: usize, timeout: Duration) -> Result<Vec<ProcessRecord>, SimError> {
    let source = Arc::clone(source);
    let name = source.name();
    let task = tokio::task::spawn_blocking(move || {
        let mut chooser = RandomChooser::default();
        source.snapshot(limit, &mut chooser)
    });
    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(err)) => Err(info_err!("Snapshot from {name} failed: {err}")),
        Err(_) => Err(info_err!("Snapshot from {name} timed out after {} ms", timeout.as_millis())),
    }
}

#[cfg(test)]
mod tests {
    use super::{create_snapshot_source, generate_synthetic_processes, take_snapshot, SnapshotSource};
    use crate::error::{info_err, SimError};
    use crate::model::{ProcessRecord, ProcessState, SnapshotSourceType};
    use crate::simulation::{Chooser, RandomChooser};
    use std::sync::Arc;
    use std::time::Duration;

    struct StuckSource;

    impl SnapshotSource for StuckSource {
        fn name(&self) -> &'static str {
            "stuck"
        }

        fn snapshot(&self, _limit: usize, _chooser: &mut dyn Chooser) -> Result<Vec<ProcessRecord>, SimError> {
            std::thread::sleep(Duration::from_millis(500));
            Err(info_err!("too late"))
        }
    }

    #[test]
    fn test_synthetic_processes() {
        let processes = generate_synthetic_processes(&mut RandomChooser::new(Some(4)));
        assert_eq!(processes.len(), 8);
        assert_eq!(processes[0].pid, 1000);
        assert_eq!(processes[7].pid, 1700);
        assert_eq!(processes[7].name, "steam.exe");
        for (idx, p) in processes.iter().enumerate() {
            assert!((1.0..=20.0).contains(&p.cpu));
            assert!((5.0..=25.0).contains(&p.memory));
            assert!((1..=5).contains(&p.priority));
            assert!((3..=8).contains(&p.burst_time));
            let expected = if idx < 2 { ProcessState::Running } else { ProcessState::Ready };
            assert_eq!(p.state, expected);
        }
    }

    #[tokio::test]
    async fn test_synthetic_source_respects_limit() {
        let source = create_snapshot_source(SnapshotSourceType::Synthetic);
        let processes = take_snapshot(&source, 3, Duration::from_secs(2)).await.unwrap();
        assert_eq!(processes.len(), 3);
    }

    #[tokio::test]
    async fn test_host_snapshot_is_bounded_and_usable() {
        let source = create_snapshot_source(SnapshotSourceType::Host);
        // hosts without process listing report an error, that is a valid outcome here
        if let Ok(processes) = take_snapshot(&source, 10, Duration::from_secs(10)).await {
            assert!(processes.len() <= 10);
            assert!(processes.iter().all(ProcessRecord::is_usable));
            assert!(processes.windows(2).all(|w| w[0].pid < w[1].pid));
        }
    }

    #[tokio::test]
    async fn test_snapshot_timeout() {
        let source: Arc<dyn SnapshotSource> = Arc::new(StuckSource);
        let err = take_snapshot(&source, 10, Duration::from_millis(20)).await.unwrap_err();
        assert!(err.message.contains("timed out"));
    }
}
