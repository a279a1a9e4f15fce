use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[macro_export]
macro_rules! info_err {
    // This matches any arguments (format string + variables) and forwards them
    // to format!, then wraps them in the error constructor.
    ($($arg:tt)*) => {
        $crate::error::SimError::new($crate::error::SimErrorKind::Info, format!($($arg)*))
    };
}

pub use info_err;

#[macro_export]
macro_rules! info_err_res {
    ($($arg:tt)*) => {
        Err($crate::error::SimError::new($crate::error::SimErrorKind::Info, format!($($arg)*)))
    };
}

pub use info_err_res;

#[macro_export]
macro_rules! fatal_err {
    ($($arg:tt)*) => {
        $crate::error::SimError::new($crate::error::SimErrorKind::Fatal, format!($($arg)*))
    };
}

pub use fatal_err;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SimErrorKind {
    // logged, caller degrades to a fallback
    Info,
    // startup only
    Fatal,
}

#[derive(Debug)]
pub struct SimError {
    pub kind: SimErrorKind,
    pub message: String,
}

impl SimError {
    pub const fn new(kind: SimErrorKind, message: String) -> Self {
        Self { kind, message }
    }

    pub fn is_fatal(&self) -> bool {
        self.kind == SimErrorKind::Fatal
    }
}

impl Display for SimError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "Simulator error: {}", self.message)
    }
}

impl Error for SimError {}

pub fn to_io_error<E>(err: E) -> std::io::Error
where
    E: std::error::Error,
{ std::io::Error::other(err.to_string()) }
