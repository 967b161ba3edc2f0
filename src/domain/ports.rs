use crate::domain::model::DemoReport;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Sink: Send + Sync {
    fn write_line(&self, line: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn sequence(&self) -> &[i64];
    fn greeter_name(&self) -> &str;
    fn banner_enabled(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<i64>>;
    async fn transform(&self, values: Vec<i64>) -> Result<DemoReport>;
    async fn emit(&self, report: DemoReport) -> Result<usize>;
}
