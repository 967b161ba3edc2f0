use crate::core::{Classification, ConfigProvider, DemoReport, Greeter, Pipeline, Sink};
use crate::utils::error::{DemoError, Result};
use chrono::Utc;

pub struct DemoPipeline<S: Sink, C: ConfigProvider> {
    sink: S,
    config: C,
}

impl<S: Sink, C: ConfigProvider> DemoPipeline<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self { sink, config }
    }
}

#[async_trait::async_trait]
impl<S: Sink, C: ConfigProvider> Pipeline for DemoPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<i64>> {
        let values = self.config.sequence().to_vec();
        tracing::debug!("Using a sequence of {} values", values.len());

        // 預設數列固定不變，只有覆寫的數列可能為空
        if values.is_empty() {
            return Err(DemoError::ValidationError {
                message: "number sequence is empty".to_string(),
            });
        }

        Ok(values)
    }

    async fn transform(&self, values: Vec<i64>) -> Result<DemoReport> {
        let classifications: Vec<Classification> =
            values.into_iter().map(Classification::new).collect();

        let greeter = Greeter::new(self.config.greeter_name());
        tracing::debug!("Greeter ready: {}", greeter.name());

        let banner = self
            .config
            .banner_enabled()
            .then(|| "Hello, World!".to_string());

        Ok(DemoReport {
            banner,
            classifications,
            greeting: greeter.greet(),
            generated_at: Utc::now(),
        })
    }

    async fn emit(&self, report: DemoReport) -> Result<usize> {
        let lines = report.lines();

        for line in &lines {
            self.sink.write_line(line).await?;
        }

        tracing::debug!("All {} lines written to sink", lines.len());
        Ok(lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DEFAULT_GREETER_NAME, DEFAULT_SEQUENCE};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockSink {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl MockSink {
        fn new() -> Self {
            Self::default()
        }

        async fn lines(&self) -> Vec<String> {
            self.lines.lock().await.clone()
        }
    }

    impl Sink for MockSink {
        async fn write_line(&self, line: &str) -> Result<()> {
            self.lines.lock().await.push(line.to_string());
            Ok(())
        }
    }

    struct MockConfig {
        sequence: Vec<i64>,
        greeter_name: String,
        banner: bool,
    }

    impl MockConfig {
        fn demo_defaults() -> Self {
            Self {
                sequence: DEFAULT_SEQUENCE.to_vec(),
                greeter_name: DEFAULT_GREETER_NAME.to_string(),
                banner: false,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn sequence(&self) -> &[i64] {
            &self.sequence
        }

        fn greeter_name(&self) -> &str {
            &self.greeter_name
        }

        fn banner_enabled(&self) -> bool {
            self.banner
        }
    }

    #[tokio::test]
    async fn test_extract_returns_configured_sequence() {
        let pipeline = DemoPipeline::new(MockSink::new(), MockConfig::demo_defaults());

        let values = pipeline.extract().await.unwrap();

        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_extract_rejects_empty_sequence() {
        let config = MockConfig {
            sequence: vec![],
            ..MockConfig::demo_defaults()
        };
        let pipeline = DemoPipeline::new(MockSink::new(), config);

        let err = pipeline.extract().await.unwrap_err();

        assert!(matches!(err, DemoError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn test_transform_classifies_each_value_in_order() {
        let pipeline = DemoPipeline::new(MockSink::new(), MockConfig::demo_defaults());

        let report = pipeline.transform(vec![1, 2, 3, 4, 5]).await.unwrap();

        assert_eq!(report.classifications.len(), 5);
        assert_eq!(report.classifications[0].line(), "1 is odd");
        assert_eq!(report.classifications[1].line(), "2 is even");
        assert_eq!(report.classifications[4].line(), "5 is odd");
        assert_eq!(report.greeting, "Hello from Test");
        assert!(report.banner.is_none());
    }

    #[tokio::test]
    async fn test_transform_with_custom_greeter_name() {
        let config = MockConfig {
            greeter_name: "World".to_string(),
            ..MockConfig::demo_defaults()
        };
        let pipeline = DemoPipeline::new(MockSink::new(), config);

        let report = pipeline.transform(vec![2]).await.unwrap();

        assert_eq!(report.greeting, "Hello from World");
    }

    #[tokio::test]
    async fn test_transform_with_banner_enabled() {
        let config = MockConfig {
            banner: true,
            ..MockConfig::demo_defaults()
        };
        let pipeline = DemoPipeline::new(MockSink::new(), config);

        let report = pipeline.transform(vec![1]).await.unwrap();

        assert_eq!(report.banner.as_deref(), Some("Hello, World!"));
    }

    #[tokio::test]
    async fn test_emit_writes_lines_in_report_order() {
        let sink = MockSink::new();
        let pipeline = DemoPipeline::new(sink.clone(), MockConfig::demo_defaults());

        let report = DemoReport {
            banner: None,
            classifications: vec![Classification::new(1), Classification::new(2)],
            greeting: "Hello from Test".to_string(),
            generated_at: Utc::now(),
        };

        let emitted = pipeline.emit(report).await.unwrap();

        assert_eq!(emitted, 3);
        assert_eq!(
            sink.lines().await,
            vec!["1 is odd", "2 is even", "Hello from Test"]
        );
    }

    #[tokio::test]
    async fn test_full_pipeline_produces_expected_lines() {
        let sink = MockSink::new();
        let pipeline = DemoPipeline::new(sink.clone(), MockConfig::demo_defaults());

        let values = pipeline.extract().await.unwrap();
        let report = pipeline.transform(values).await.unwrap();
        let emitted = pipeline.emit(report).await.unwrap();

        assert_eq!(emitted, 6);
        assert_eq!(
            sink.lines().await,
            vec![
                "1 is odd",
                "2 is even",
                "3 is odd",
                "4 is even",
                "5 is odd",
                "Hello from Test",
            ]
        );
    }
}
