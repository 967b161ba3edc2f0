pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{Classification, DemoReport, Greeter, Parity};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Sink};
pub use crate::utils::error::Result;
