use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 預設示範數列
pub const DEFAULT_SEQUENCE: [i64; 5] = [1, 2, 3, 4, 5];

/// 預設問候者名稱
pub const DEFAULT_GREETER_NAME: &str = "Test";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub fn of(value: i64) -> Self {
        if value % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Parity::Odd => "odd",
            Parity::Even => "even",
        }
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub value: i64,
    pub parity: Parity,
}

impl Classification {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            parity: Parity::of(value),
        }
    }

    /// 輸出行格式: "<value> is <parity>"
    pub fn line(&self) -> String {
        format!("{} is {}", self.value, self.parity)
    }
}

/// 名稱在建構時固定，之後不可變更
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    name: String,
}

impl Greeter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn greet(&self) -> String {
        format!("Hello from {}", self.name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub banner: Option<String>,
    pub classifications: Vec<Classification>,
    pub greeting: String,
    pub generated_at: DateTime<Utc>,
}

impl DemoReport {
    /// 依發送順序取得所有輸出行
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.line_count());

        if let Some(banner) = &self.banner {
            lines.push(banner.clone());
        }

        for classification in &self.classifications {
            lines.push(classification.line());
        }

        lines.push(self.greeting.clone());
        lines
    }

    pub fn line_count(&self) -> usize {
        self.classifications.len() + 1 + usize::from(self.banner.is_some())
    }
}
