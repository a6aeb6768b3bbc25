pub mod create_pool;
pub mod create_token;
pub mod initialize;
pub mod swap;
pub mod update_config;
