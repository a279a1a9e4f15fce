pub mod sim_api;
pub mod web_index;
