pub mod error;
pub mod input_ports;
pub mod models;
pub mod ports;
pub mod use_cases;
