pub mod config;
pub mod generate;

pub use config::{init_config, show_config};
pub use generate::run_generate;
