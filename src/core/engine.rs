use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct DemoEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> DemoEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// 回傳實際發送的行數
    pub async fn run(&self) -> Result<usize> {
        tracing::info!("Starting demo run...");

        // Extract
        let values = self.pipeline.extract().await?;
        tracing::info!("Extracted {} values", values.len());
        self.monitor.log_stats("Extract");

        // Transform
        let report = self.pipeline.transform(values).await?;
        tracing::info!("Classified {} values", report.classifications.len());
        tracing::debug!("Run report: {}", serde_json::to_string(&report)?);
        self.monitor.log_stats("Transform");

        // Emit
        let emitted = self.pipeline.emit(report).await?;
        tracing::info!("Emitted {} lines", emitted);
        self.monitor.log_stats("Emit");

        self.monitor.log_final_stats();
        Ok(emitted)
    }
}
