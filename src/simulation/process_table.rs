use crate::error::SimError;
use crate::model::{ProcessRecord, ProcessState, SystemStatus};
use crate::simulation::{generate_synthetic_processes, Chooser};
use log::warn;

/// Where the current table content came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SnapshotOrigin {
    Snapshot(usize),
    // synthetic list after a failed or empty snapshot
    Fallback(usize),
}

impl SnapshotOrigin {
    pub fn count(&self) -> usize {
        match self {
            SnapshotOrigin::Snapshot(count) | SnapshotOrigin::Fallback(count) => *count,
        }
    }
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Default, Clone)]
pub struct ProcessTable {
    records: Vec<ProcessRecord>,
}

impl ProcessTable {
    pub fn new(records: Vec<ProcessRecord>) -> Self {
        Self { records }
    }

    /// Replaces the table with a snapshot.
    ///
    /// Unusable records are dropped one by one. A failed or empty snapshot falls back
    /// to the synthetic process list, so the table is never empty afterwards.
    pub fn initialize<C: Chooser + ?Sized>(&mut self, snapshot: Result<Vec<ProcessRecord>, SimError>, chooser: &mut C) -> SnapshotOrigin {
        let records: Vec<ProcessRecord> = match snapshot {
            Ok(records) => records
                .into_iter()
                .filter(ProcessRecord::is_usable)
                .map(|mut rec| {
                    rec.normalize();
                    rec
                })
                .collect(),
            Err(err) => {
                warn!("Process snapshot failed, using synthetic processes: {err}");
                vec![]
            }
        };

        if records.is_empty() {
            self.records = generate_synthetic_processes(chooser);
            SnapshotOrigin::Fallback(self.records.len())
        } else {
            self.records = records;
            SnapshotOrigin::Snapshot(self.records.len())
        }
    }

    pub fn list(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [ProcessRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn count_in_state(&self, state: ProcessState) -> usize {
        self.records.iter().filter(|p| p.state == state).count()
    }

    /// Fresh load values for every record, the first two run, the rest wait in the ready queue.
    pub fn reset<C: Chooser + ?Sized>(&mut self, chooser: &mut C) {
        for (idx, process) in self.records.iter_mut().enumerate() {
            process.cpu = chooser.uniform(2.0, 15.0);
            process.memory = chooser.uniform(5.0, 25.0);
            process.state = if idx < 2 { ProcessState::Running } else { ProcessState::Ready };
        }
    }

    /// Recomputes the aggregate into `status`.
    ///
    /// Returns `false` and leaves `status` untouched for an empty table.
    pub fn update_status(&self, status: &mut SystemStatus) -> bool {
        if self.records.is_empty() {
            return false;
        }
        let count = self.records.len();
        #[allow(clippy::cast_precision_loss)]
        let avg_cpu = self.records.iter().map(|p| p.cpu).sum::<f64>() / count as f64;
        let total_memory = self.records.iter().map(|p| p.memory).sum::<f64>();
        status.cpu_usage = round_one_decimal(avg_cpu);
        status.memory_usage = round_one_decimal(total_memory);
        status.process_count = count;
        true
    }
}
