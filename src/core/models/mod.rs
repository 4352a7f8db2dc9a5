pub mod app_engine;
pub mod env_file;
pub mod kubernetes;
pub mod target;
