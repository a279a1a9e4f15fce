use crate::model::{AlgorithmReport, AlgorithmsConfig, BankersResult, DeadlockReport, MemoryReport, PageReplacementResult, ProcessRecord, ProcessState, SchedulingReport, SchedulingResult};
use crate::simulation::round_one_decimal;

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[u32]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        round_one_decimal(values.iter().map(|v| f64::from(*v)).sum::<f64>() / values.len() as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
fn throughput(processes: usize, total_time: u32) -> f64 {
    if total_time == 0 {
        0.0
    } else {
        round_one_decimal(processes as f64 / f64::from(total_time) * 100.0)
    }
}

fn count_switches(order: &[u32]) -> u32 {
    u32::try_from(order.windows(2).filter(|w| w[0] != w[1]).count()).unwrap_or(u32::MAX)
}

/// Every process arrives at time 0 and is served in table order, `quantum` units per turn.
pub fn round_robin(processes: &[ProcessRecord], quantum: u32) -> SchedulingResult {
    let quantum = quantum.max(1);
    let mut remaining: Vec<u32> = processes.iter().map(|p| p.burst_time).collect();
    let mut completion = vec![0u32; processes.len()];
    let mut order = vec![];
    let mut time = 0u32;

    while remaining.iter().any(|r| *r > 0) {
        for (idx, process) in processes.iter().enumerate() {
            if remaining[idx] == 0 {
                continue;
            }
            let slice = remaining[idx].min(quantum);
            time += slice;
            remaining[idx] -= slice;
            order.push(process.pid);
            if remaining[idx] == 0 {
                completion[idx] = time;
            }
        }
    }

    let waiting: Vec<u32> = completion.iter().zip(processes).map(|(c, p)| c - p.burst_time).collect();
    SchedulingResult {
        name: format!("Round Robin (Time Quantum: {quantum}ms)"),
        context_switches: count_switches(&order),
        execution_order: order,
        total_time: time,
        avg_turnaround: mean(&completion),
        avg_waiting: mean(&waiting),
        throughput: throughput(processes.len(), time),
        pros: vec!["Fair allocation", "Good for interactive processes", "No starvation"],
        cons: vec!["Higher context switching overhead", "Not optimal for CPU-bound tasks"],
    }
}

/// Non preemptive, lower number runs first, ties keep table order.
pub fn priority_scheduling(processes: &[ProcessRecord]) -> SchedulingResult {
    let mut ordered: Vec<&ProcessRecord> = processes.iter().collect();
    ordered.sort_by_key(|p| p.priority);

    let mut time = 0u32;
    let mut completion = Vec::with_capacity(ordered.len());
    let mut waiting = Vec::with_capacity(ordered.len());
    for process in &ordered {
        waiting.push(time);
        time += process.burst_time;
        completion.push(time);
    }
    let order: Vec<u32> = ordered.iter().map(|p| p.pid).collect();

    SchedulingResult {
        name: "Priority Scheduling".to_string(),
        context_switches: count_switches(&order),
        execution_order: order,
        total_time: time,
        avg_turnaround: mean(&completion),
        avg_waiting: mean(&waiting),
        throughput: throughput(processes.len(), time),
        pros: vec!["Efficient for system processes", "Lower turnaround time", "Good for real-time systems"],
        cons: vec!["Possible starvation", "Priority inversion problems"],
    }
}

#[allow(clippy::cast_precision_loss)]
fn hit_ratio(hits: usize, references: usize) -> f64 {
    if references == 0 {
        0.0
    } else {
        round_one_decimal(hits as f64 / references as f64 * 100.0)
    }
}

pub fn fifo_page_replacement(references: &[u32], frame_count: usize) -> PageReplacementResult {
    let frame_count = frame_count.max(1);
    let mut frames: Vec<Option<u32>> = vec![None; frame_count];
    let mut front = 0;
    let mut faults = 0;
    let mut history = Vec::with_capacity(references.len());

    for page in references {
        if !frames.contains(&Some(*page)) {
            frames[front] = Some(*page);
            front = (front + 1) % frame_count;
            faults += 1;
        }
        history.push(frames.clone());
    }

    let hits = references.len() - faults;
    PageReplacementResult {
        name: "FIFO Page Replacement".to_string(),
        page_faults: faults,
        hits,
        efficiency: hit_ratio(hits, references.len()),
        frames: history,
        pros: vec!["Simple implementation", "Low overhead"],
        cons: vec!["Poor performance", "Belady's anomaly possible"],
    }
}

pub fn lru_page_replacement(references: &[u32], frame_count: usize) -> PageReplacementResult {
    let frame_count = frame_count.max(1);
    let mut frames: Vec<Option<u32>> = vec![None; frame_count];
    // empty frames carry no timestamp and are filled first
    let mut last_used: Vec<Option<usize>> = vec![None; frame_count];
    let mut faults = 0;
    let mut history = Vec::with_capacity(references.len());

    for (time, page) in references.iter().enumerate() {
        if let Some(idx) = frames.iter().position(|f| *f == Some(*page)) {
            last_used[idx] = Some(time);
        } else {
            let victim = last_used
                .iter()
                .enumerate()
                .min_by_key(|(_, used)| **used)
                .map_or(0, |(idx, _)| idx);
            frames[victim] = Some(*page);
            last_used[victim] = Some(time);
            faults += 1;
        }
        history.push(frames.clone());
    }

    let hits = references.len() - faults;
    PageReplacementResult {
        name: "LRU Page Replacement".to_string(),
        page_faults: faults,
        hits,
        efficiency: hit_ratio(hits, references.len()),
        frames: history,
        pros: vec!["Better performance", "Good locality of reference"],
        cons: vec!["Higher implementation complexity", "More overhead"],
    }
}

/// Safety check for one resource type.
///
/// A process holds `ceil(memory / 10)` units and still needs `burst_time` units.
pub fn bankers_safety(processes: &[ProcessRecord], available: u32) -> BankersResult {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let allocation: Vec<u32> = processes.iter().map(|p| (p.memory / 10.0).ceil().max(0.0) as u32).collect();
    let mut finished = vec![false; processes.len()];
    let mut sequence = Vec::with_capacity(processes.len());
    let mut work = available;

    while let Some(idx) = (0..processes.len()).find(|&i| !finished[i] && processes[i].burst_time <= work) {
        finished[idx] = true;
        work = work.saturating_add(allocation[idx]);
        sequence.push(processes[idx].pid);
    }

    BankersResult {
        name: "Banker's Algorithm".to_string(),
        safe_state: finished.iter().all(|f| *f),
        safe_sequence: sequence,
        available,
        waiting_processes: processes.iter().filter(|p| p.state == ProcessState::Waiting).count(),
        pros: vec!["Prevents deadlock", "Safe resource allocation"],
        cons: vec!["Requires advance knowledge", "Conservative approach"],
    }
}

pub fn analyze_algorithms(processes: &[ProcessRecord], config: &AlgorithmsConfig) -> AlgorithmReport {
    AlgorithmReport {
        scheduling: SchedulingReport {
            round_robin: round_robin(processes, config.time_quantum),
            priority: priority_scheduling(processes),
        },
        memory: MemoryReport {
            fifo: fifo_page_replacement(&config.page_references, config.page_frames),
            lru: lru_page_replacement(&config.page_references, config.page_frames),
        },
        deadlock: DeadlockReport {
            bankers: bankers_safety(processes, config.bankers_available),
        },
    }
}
