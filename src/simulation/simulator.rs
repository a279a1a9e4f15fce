use crate::error::SimError;
use crate::model::{AlgorithmReport, AlgorithmsConfig, FaultType, LogEntry, LogType, ProcessRecord, ProcessState, ProcessesResponse, SimulationConfig, SystemStatus};
use crate::simulation::{analyze_algorithms, inject_fault, recover_fault, Chooser, EventLog, ProcessTable, RandomChooser, SnapshotOrigin};
use log::{info, warn};
use std::str::FromStr;

pub const DRIFT_CPU_CEILING: f64 = 90.0;
pub const DRIFT_DELTA: f64 = 2.0;
pub const DRIFT_CPU_MIN: f64 = 0.1;
pub const DRIFT_CPU_MAX: f64 = 100.0;

/// Owner of the process table, its aggregate and the event log.
///
/// Shared behind one lock, every operation here runs select, mutate and recompute
/// without interleaving.
pub struct Simulator<C: Chooser = RandomChooser> {
    table: ProcessTable,
    status: SystemStatus,
    log: EventLog,
    chooser: C,
    algorithms: AlgorithmsConfig,
}

impl Simulator<RandomChooser> {
    pub fn from_config(simulation: &SimulationConfig, algorithms: &AlgorithmsConfig) -> Self {
        Simulator::new(RandomChooser::new(simulation.seed), simulation.log_capacity, algorithms.clone())
    }
}

impl<C: Chooser> Simulator<C> {
    pub fn new(chooser: C, log_capacity: usize, algorithms: AlgorithmsConfig) -> Self {
        Self {
            table: ProcessTable::default(),
            status: SystemStatus::default(),
            log: EventLog::new(log_capacity),
            chooser,
            algorithms,
        }
    }

    pub fn with_processes(mut self, processes: Vec<ProcessRecord>) -> Self {
        self.table = ProcessTable::new(processes);
        self.update_status();
        self
    }

    pub fn table(&self) -> &ProcessTable {
        &self.table
    }

    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    /// Last computed aggregate, call [`Self::update_status`] first when the table may have changed.
    pub fn status(&self) -> &SystemStatus {
        &self.status
    }

    pub fn update_status(&mut self) -> bool {
        self.table.update_status(&mut self.status)
    }

    pub fn initialize(&mut self, snapshot: Result<Vec<ProcessRecord>, SimError>) -> SnapshotOrigin {
        self.log.append("Initializing OS Fault Simulator...", LogType::Info);
        let origin = self.table.initialize(snapshot, &mut self.chooser);
        match origin {
            SnapshotOrigin::Snapshot(count) => {
                self.log.append(format!("Loaded {count} processes from system"), LogType::Success);
            }
            SnapshotOrigin::Fallback(count) => {
                warn!("Host processes unavailable, loaded {count} synthetic processes");
                self.log.append(format!("Loaded {count} processes from synthetic fallback"), LogType::Success);
            }
        }
        self.log.append("OS Fault Simulator ready", LogType::Info);
        self.update_status();
        info!("Process table initialized with {} processes", origin.count());
        origin
    }

    pub fn processes(&mut self) -> ProcessesResponse {
        self.update_status();
        ProcessesResponse {
            processes: self.table.list().to_vec(),
            system_status: self.status.clone(),
        }
    }

    pub fn logs(&self, count: usize) -> Vec<LogEntry> {
        self.log.recent(count)
    }

    /// Unknown names leave everything untouched, returns whether the name was recognised.
    pub fn inject_fault(&mut self, fault_type: &str) -> bool {
        let recognised = match FaultType::from_str(fault_type) {
            Ok(fault) => {
                inject_fault(&mut self.table, &mut self.log, fault, &mut self.chooser);
                true
            }
            Err(err) => {
                warn!("Ignoring fault injection: {err}");
                false
            }
        };
        self.update_status();
        recognised
    }

    pub fn recover_fault(&mut self, fault_type: &str) -> bool {
        let recognised = match FaultType::from_str(fault_type) {
            Ok(fault) => {
                recover_fault(&mut self.table, &mut self.log, fault, &mut self.chooser);
                true
            }
            Err(err) => {
                warn!("Ignoring fault recovery: {err}");
                false
            }
        };
        self.update_status();
        recognised
    }

    pub fn reset(&mut self) {
        self.log.append("Resetting system to initial state...", LogType::Info);
        self.table.reset(&mut self.chooser);
        self.update_status();
        self.log.append("System reset completed successfully", LogType::Success);
        info!("Process table reset");
    }

    /// Lets the cpu load of running processes wander a little. Returns the number of touched processes.
    pub fn tick(&mut self) -> usize {
        let mut touched = 0;
        for process in self.table.records_mut() {
            if process.state == ProcessState::Running && process.cpu < DRIFT_CPU_CEILING {
                let delta = self.chooser.uniform(-DRIFT_DELTA, DRIFT_DELTA);
                process.cpu = (process.cpu + delta).clamp(DRIFT_CPU_MIN, DRIFT_CPU_MAX);
                touched += 1;
            }
        }
        self.update_status();
        touched
    }

    pub fn analyze_algorithms(&mut self) -> AlgorithmReport {
        self.log.append("Generating algorithm comparison analysis...", LogType::Info);
        let report = analyze_algorithms(self.table.list(), &self.algorithms);
        self.log.append("Algorithm comparison analysis completed", LogType::Success);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::Simulator;
    use crate::error::info_err;
    use crate::model::{AlgorithmsConfig, LogType, ProcessRecord, ProcessState, SimulationConfig};
    use crate::simulation::chooser::pinned::PinnedChooser;
    use crate::simulation::{round_one_decimal, RandomChooser, SnapshotOrigin};

    fn record(pid: u32, cpu: f64, memory: f64, state: ProcessState) -> ProcessRecord {
        ProcessRecord { pid, name: format!("p{pid}"), cpu, memory, state, priority: 3, burst_time: 4 }
    }

    fn seeded(seed: u64, processes: Vec<ProcessRecord>) -> Simulator {
        Simulator::new(RandomChooser::new(Some(seed)), 50, AlgorithmsConfig::default()).with_processes(processes)
    }

    fn assert_status_consistent<C: crate::simulation::Chooser>(sim: &Simulator<C>) {
        let list = sim.table().list();
        let status = sim.status();
        assert_eq!(status.process_count, list.len());
        #[allow(clippy::cast_precision_loss)]
        let mean = list.iter().map(|p| p.cpu).sum::<f64>() / list.len() as f64;
        assert!((status.cpu_usage - round_one_decimal(mean)).abs() < 1e-9);
    }

    #[test]
    fn test_pinned_cpu_overload_scenario() {
        let sim = Simulator::new(PinnedChooser::default(), 50, AlgorithmsConfig::default());
        let mut sim = sim.with_processes(vec![
            record(1, 10.0, 10.0, ProcessState::Ready),
            record(2, 20.0, 20.0, ProcessState::Ready),
        ]);
        assert!(sim.inject_fault("cpu_overload"));
        let list = sim.table().list();
        assert!((list[0].cpu - 100.0).abs() < f64::EPSILON);
        assert!((list[1].cpu - 20.0).abs() < f64::EPSILON);
        assert!((sim.status().cpu_usage - 60.0).abs() < f64::EPSILON);
        assert!((sim.status().memory_usage - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_table_deadlock_is_silent() {
        let mut sim = seeded(1, vec![]);
        assert!(sim.inject_fault("deadlock"));
        assert!(sim.table().is_empty());
        assert!(sim.event_log().is_empty());
        assert_eq!(sim.status().process_count, 0);
    }

    #[test]
    fn test_unknown_fault_is_noop() {
        let processes = vec![record(1, 95.0, 85.0, ProcessState::Waiting), record(2, 20.0, 20.0, ProcessState::Running)];
        let mut sim = seeded(2, processes.clone());
        assert!(!sim.inject_fault("kernel_panic"));
        assert!(!sim.recover_fault("kernel_panic"));
        assert_eq!(sim.table().list(), processes.as_slice());
        assert!(sim.event_log().is_empty());
    }

    #[test]
    fn test_status_consistent_after_every_operation() {
        let processes = (1..=6).map(|pid| record(pid, f64::from(pid) * 3.3, 12.0, ProcessState::Ready)).collect();
        let mut sim = seeded(3, processes);
        for name in ["deadlock", "cpu_overload", "memory_thrashing"] {
            sim.inject_fault(name);
            assert_status_consistent(&sim);
            sim.recover_fault(name);
            assert_status_consistent(&sim);
        }
        sim.reset();
        assert_status_consistent(&sim);
        sim.tick();
        assert_status_consistent(&sim);
    }

    #[test]
    fn test_recoveries_clear_symptoms() {
        let processes = (1..=8).map(|pid| record(pid, 10.0, 45.0, ProcessState::Ready)).collect();
        let mut sim = seeded(4, processes);
        sim.inject_fault("deadlock");
        sim.inject_fault("cpu_overload");
        sim.inject_fault("memory_thrashing");
        sim.recover_fault("deadlock");
        sim.recover_fault("cpu_overload");
        sim.recover_fault("memory_thrashing");
        let list = sim.table().list();
        assert!(list.iter().all(|p| p.state != ProcessState::Waiting));
        assert!(list.iter().all(|p| p.cpu <= 90.0));
        assert!(list.iter().all(|p| p.memory <= 80.0));
    }

    #[test]
    fn test_initialize_logs_and_falls_back() {
        let mut sim = Simulator::from_config(&SimulationConfig::default(), &AlgorithmsConfig::default());
        let origin = sim.initialize(Err(info_err!("denied")));
        assert_eq!(origin, SnapshotOrigin::Fallback(8));
        let logs = sim.logs(20);
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0].message, "OS Fault Simulator ready");
        assert_eq!(logs[1].log_type, LogType::Success);
        assert_eq!(logs[2].message, "Initializing OS Fault Simulator...");
        assert_eq!(sim.status().process_count, 8);
    }

    #[test]
    fn test_initialize_from_snapshot() {
        let mut sim = seeded(5, vec![]);
        let origin = sim.initialize(Ok(vec![record(42, 3.0, 4.0, ProcessState::Running)]));
        assert_eq!(origin, SnapshotOrigin::Snapshot(1));
        assert_eq!(sim.logs(2)[1].message, "Loaded 1 processes from system");
        let response = sim.processes();
        assert_eq!(response.processes.len(), 1);
        assert_eq!(response.system_status.process_count, 1);
    }

    #[test]
    fn test_reset_logs() {
        let mut sim = seeded(6, vec![record(1, 99.0, 99.0, ProcessState::Waiting)]);
        sim.reset();
        assert_eq!(sim.table().list()[0].state, ProcessState::Running);
        let logs = sim.logs(5);
        assert_eq!(logs[0].message, "System reset completed successfully");
        assert_eq!(logs[1].message, "Resetting system to initial state...");
    }

    #[test]
    fn test_tick_only_moves_running_below_ceiling() {
        let mut sim = seeded(7, vec![
            record(1, 50.0, 10.0, ProcessState::Running),
            record(2, 50.0, 10.0, ProcessState::Ready),
            record(3, 95.0, 10.0, ProcessState::Running),
            record(4, 0.5, 10.0, ProcessState::Running),
        ]);
        for _ in 0..50 {
            let expected = 1 + usize::from(sim.table().list()[0].cpu < 90.0);
            assert_eq!(sim.tick(), expected);
        }
        let list = sim.table().list();
        assert!((list[1].cpu - 50.0).abs() < f64::EPSILON);
        assert!((list[2].cpu - 95.0).abs() < f64::EPSILON);
        assert!(list.iter().all(|p| (0.1..=100.0).contains(&p.cpu)));
        assert!(list.iter().all(|p| p.state != ProcessState::Waiting));
    }

    #[test]
    fn test_analyze_algorithms_logs() {
        let mut sim = seeded(8, vec![record(1, 5.0, 5.0, ProcessState::Ready)]);
        let report = sim.analyze_algorithms();
        assert_eq!(report.scheduling.round_robin.execution_order, vec![1, 1]);
        assert_eq!(sim.logs(1)[0].message, "Algorithm comparison analysis completed");
    }
}
