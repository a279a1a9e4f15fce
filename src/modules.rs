#[macro_export]
macro_rules! include_modules {
    () => {
        extern crate env_logger;
        pub mod api;
        pub mod error;
        pub mod model;
        pub mod simulation;
        pub mod utils;
    }
}
