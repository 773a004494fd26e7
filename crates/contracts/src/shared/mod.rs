pub mod global_config;
pub mod lenient;
pub mod text;
