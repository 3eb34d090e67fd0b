pub mod dto;
pub mod state;
