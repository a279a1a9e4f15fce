pub mod model;
pub mod endpoints;
pub mod main_api;
pub mod serve;
pub mod ticker;
