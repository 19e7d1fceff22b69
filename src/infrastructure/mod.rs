// Infrastructure layer - External dependencies and adapters
pub mod chart_file_surface;
pub mod config;
pub mod http_api;
pub mod theme_store;
