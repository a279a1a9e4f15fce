mod chooser;
mod event_log;
mod process_table;
mod fault_engine;
mod snapshot;
mod algorithms;
mod simulator;

pub use self::chooser::*;
pub use self::event_log::*;
pub use self::process_table::*;
pub use self::fault_engine::*;
pub use self::snapshot::*;
pub use self::algorithms::*;
pub use self::simulator::*;
