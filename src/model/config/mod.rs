mod api;
mod log;
mod simulation;
mod algorithms;
mod app;

pub use self::api::*;
pub use self::log::*;
pub use self::simulation::*;
pub use self::algorithms::*;
pub use self::app::*;
