use crate::model::{FaultType, LogType, ProcessState};
use crate::simulation::{Chooser, EventLog, ProcessTable};
use log::{debug, info};

pub const OVERLOAD_CPU: f64 = 100.0;
pub const CPU_RECOVERY_THRESHOLD: f64 = 90.0;
pub const THRASHING_DRAW_THRESHOLD: f64 = 0.6;
pub const THRASHING_MEMORY_CAP: f64 = 95.0;
pub const MEMORY_RECOVERY_THRESHOLD: f64 = 80.0;

/// Applies `fault` to the table and records it in the event log.
///
/// Returns the number of affected processes, `None` when the table is too small for the fault.
pub fn inject_fault<C: Chooser + ?Sized>(table: &mut ProcessTable, log: &mut EventLog, fault: FaultType, chooser: &mut C) -> Option<usize> {
    let affected = match fault {
        FaultType::Deadlock => inject_deadlock(table, log, chooser),
        FaultType::CpuOverload => inject_cpu_overload(table, log, chooser),
        FaultType::MemoryThrashing => Some(inject_memory_thrashing(table, log, chooser)),
    };
    match affected {
        Some(count) => info!("Fault {fault} injected, {count} processes affected"),
        None => debug!("Fault {fault} skipped, table has {} processes", table.len()),
    }
    affected
}

/// Reverses `fault` on every process showing its symptom. Returns the recovered count.
pub fn recover_fault<C: Chooser + ?Sized>(table: &mut ProcessTable, log: &mut EventLog, fault: FaultType, chooser: &mut C) -> usize {
    let recovered = match fault {
        FaultType::Deadlock => recover_deadlock(table, log),
        FaultType::CpuOverload => recover_cpu_overload(table, log, chooser),
        FaultType::MemoryThrashing => recover_memory_thrashing(table, log, chooser),
    };
    info!("Recovery from {fault} completed, {recovered} processes recovered");
    recovered
}

fn inject_deadlock<C: Chooser + ?Sized>(table: &mut ProcessTable, log: &mut EventLog, chooser: &mut C) -> Option<usize> {
    if table.len() < 2 {
        return None;
    }
    let (first, second) = chooser.pick_pair(table.len());
    let records = table.records_mut();
    records[first].state = ProcessState::Waiting;
    records[second].state = ProcessState::Waiting;
    log.append(
        format!("Deadlock injected: Processes {} and {} are now waiting", records[first].pid, records[second].pid),
        LogType::Error,
    );
    Some(2)
}

fn inject_cpu_overload<C: Chooser + ?Sized>(table: &mut ProcessTable, log: &mut EventLog, chooser: &mut C) -> Option<usize> {
    if table.is_empty() {
        return None;
    }
    let idx = chooser.pick_index(table.len());
    let process = &mut table.records_mut()[idx];
    process.cpu = OVERLOAD_CPU;
    log.append(format!("CPU overload injected: Process {} consuming 100% CPU", process.name), LogType::Warning);
    Some(1)
}

fn inject_memory_thrashing<C: Chooser + ?Sized>(table: &mut ProcessTable, log: &mut EventLog, chooser: &mut C) -> usize {
    let mut affected = 0;
    for process in table.records_mut() {
        if chooser.chance() > THRASHING_DRAW_THRESHOLD {
            process.memory = (process.memory * 2.0).min(THRASHING_MEMORY_CAP);
            affected += 1;
        }
    }
    log.append(format!("Memory thrashing injected: {affected} processes experiencing high memory usage"), LogType::Warning);
    affected
}

// Prior state is not tracked, every waiting process goes back to the ready queue.
fn recover_deadlock(table: &mut ProcessTable, log: &mut EventLog) -> usize {
    let mut recovered = 0;
    for process in table.records_mut().iter_mut().filter(|p| p.state == ProcessState::Waiting) {
        process.state = ProcessState::Ready;
        recovered += 1;
    }
    log.append(format!("Deadlock resolved: {recovered} processes recovered using resource preemption"), LogType::Success);
    recovered
}

fn recover_cpu_overload<C: Chooser + ?Sized>(table: &mut ProcessTable, log: &mut EventLog, chooser: &mut C) -> usize {
    let mut recovered = 0;
    for process in table.records_mut().iter_mut().filter(|p| p.cpu > CPU_RECOVERY_THRESHOLD) {
        process.cpu = chooser.uniform(5.0, 25.0);
        recovered += 1;
    }
    log.append(format!("CPU overload resolved: {recovered} processes normalized using priority scheduling"), LogType::Success);
    recovered
}

fn recover_memory_thrashing<C: Chooser + ?Sized>(table: &mut ProcessTable, log: &mut EventLog, chooser: &mut C) -> usize {
    let mut recovered = 0;
    for process in table.records_mut().iter_mut().filter(|p| p.memory > MEMORY_RECOVERY_THRESHOLD) {
        process.memory = chooser.uniform(10.0, 35.0);
        recovered += 1;
    }
    log.append(format!("Memory thrashing resolved: {recovered} processes optimized using LRU page replacement"), LogType::Success);
    recovered
}
