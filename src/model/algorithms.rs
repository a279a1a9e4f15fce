use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SchedulingResult {
    pub name: String,
    pub execution_order: Vec<u32>,
    pub total_time: u32,
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    pub context_switches: u32,
    /// Completed processes per 100 time units.
    pub throughput: f64,
    pub pros: Vec<&'static str>,
    pub cons: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageReplacementResult {
    pub name: String,
    pub page_faults: usize,
    pub hits: usize,
    /// Hit ratio in percent.
    pub efficiency: f64,
    /// Frame contents after each reference, `None` for an empty frame.
    pub frames: Vec<Vec<Option<u32>>>,
    pub pros: Vec<&'static str>,
    pub cons: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BankersResult {
    pub name: String,
    pub safe_state: bool,
    pub safe_sequence: Vec<u32>,
    pub available: u32,
    pub waiting_processes: usize,
    pub pros: Vec<&'static str>,
    pub cons: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SchedulingReport {
    pub round_robin: SchedulingResult,
    pub priority: SchedulingResult,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MemoryReport {
    pub fifo: PageReplacementResult,
    pub lru: PageReplacementResult,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeadlockReport {
    pub bankers: BankersResult,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlgorithmReport {
    pub scheduling: SchedulingReport,
    pub memory: MemoryReport,
    pub deadlock: DeadlockReport,
}
