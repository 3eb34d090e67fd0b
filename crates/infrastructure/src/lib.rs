pub mod content_repository;
pub mod site_config;
