mod sim_error;

pub use self::sim_error::*;
