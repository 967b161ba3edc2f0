pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "parity-demo")]
#[command(about = "A small demo tool that classifies numbers and prints a greeting")]
pub struct CliConfig {
    #[arg(long, value_delimiter = ',', default_value = "1,2,3,4,5")]
    pub numbers: Vec<i64>,

    #[arg(long, default_value = "Test")]
    pub greeter_name: String,

    #[arg(long, help = "Print a Hello, World! banner before the numbers")]
    pub banner: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn sequence(&self) -> &[i64] {
        &self.numbers
    }

    fn greeter_name(&self) -> &str {
        &self.greeter_name
    }

    fn banner_enabled(&self) -> bool {
        self.banner
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_sequence("numbers", &self.numbers)?;
        validation::validate_non_empty_string("greeter_name", &self.greeter_name)?;
        Ok(())
    }
}
