mod sys_utils;
mod logging;
mod config_reader;
mod time_utils;

pub use self::sys_utils::*;
pub use self::logging::*;
pub use self::config_reader::*;
pub use self::time_utils::*;

#[macro_export]
macro_rules! trace_if_enabled {
    ($fmt:expr, $( $args:expr ),*) => {
        if log::log_enabled!(log::Level::Trace) {
            log::log!(log::Level::Trace, $fmt, $($args),*);
        }
    };

    ($txt:expr) => {
        if log::log_enabled!(log::Level::Trace) {
            log::log!(log::Level::Trace, $txt);
        }
    };
}

pub use trace_if_enabled;
