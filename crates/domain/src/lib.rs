pub mod document;
pub mod reading_time;
pub mod site_config;
