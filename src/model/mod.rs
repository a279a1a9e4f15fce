mod process;
mod system_status;
mod log_entry;
mod healthcheck;
mod algorithms;
mod fault;
mod api_response;
mod config;

pub use self::process::*;
pub use self::system_status::*;
pub use self::log_entry::*;
pub use self::healthcheck::*;
pub use self::algorithms::*;
pub use self::fault::*;
pub use self::api_response::*;
pub use self::config::*;
