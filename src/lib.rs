pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::{ConsoleSink, MemorySink};
pub use config::toml_config::TomlConfig;

pub use crate::core::{engine::DemoEngine, pipeline::DemoPipeline};
pub use domain::model::{Classification, Greeter, Parity, DEFAULT_GREETER_NAME, DEFAULT_SEQUENCE};
pub use utils::error::{DemoError, Result};
