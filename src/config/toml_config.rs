use crate::core::ConfigProvider;
use crate::domain::model::{DEFAULT_GREETER_NAME, DEFAULT_SEQUENCE};
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub demo: DemoMeta,
    pub sequence: Option<SequenceConfig>,
    pub greeter: Option<GreeterConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoMeta {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SequenceConfig {
    pub values: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GreeterConfig {
    pub name: Option<String>,
    pub banner: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GREETER_NAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(values) = self.sequence.as_ref().and_then(|s| s.values.as_deref()) {
            validation::validate_sequence("sequence.values", values)?;
        }

        if let Some(name) = self.greeter.as_ref().and_then(|g| g.name.as_deref()) {
            validation::validate_non_empty_string("greeter.name", name)?;
        }

        Ok(())
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn sequence(&self) -> &[i64] {
        self.sequence
            .as_ref()
            .and_then(|s| s.values.as_deref())
            .unwrap_or(&DEFAULT_SEQUENCE)
    }

    fn greeter_name(&self) -> &str {
        self.greeter
            .as_ref()
            .and_then(|g| g.name.as_deref())
            .unwrap_or(DEFAULT_GREETER_NAME)
    }

    fn banner_enabled(&self) -> bool {
        self.greeter
            .as_ref()
            .and_then(|g| g.banner)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[demo]
name = "weekday-demo"
description = "Demo run for the team meeting"
version = "1.0.0"

[sequence]
values = [10, 11, 12]

[greeter]
name = "Team"
banner = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.demo.name, "weekday-demo");
        assert_eq!(config.sequence(), &[10, 11, 12]);
        assert_eq!(config.greeter_name(), "Team");
        assert!(config.banner_enabled());
    }

    #[test]
    fn test_missing_sections_fall_back_to_demo_defaults() {
        let toml_content = r#"
[demo]
name = "bare"
description = "No overrides"
version = "0.1"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.sequence(), &[1, 2, 3, 4, 5]);
        assert_eq!(config.greeter_name(), "Test");
        assert!(!config.banner_enabled());
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_GREETER_NAME", "EnvGreeter");

        let toml_content = r#"
[demo]
name = "env"
description = "env test"
version = "1.0"

[greeter]
name = "${TEST_GREETER_NAME}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.greeter_name(), "EnvGreeter");

        std::env::remove_var("TEST_GREETER_NAME");
    }

    #[test]
    fn test_config_validation_rejects_empty_sequence() {
        let toml_content = r#"
[demo]
name = "bad"
description = "empty sequence"
version = "1.0"

[sequence]
values = []
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_blank_greeter_name() {
        let toml_content = r#"
[demo]
name = "bad"
description = "blank name"
version = "1.0"

[greeter]
name = "  "
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[demo]
name = "file-test"
description = "File test"
version = "1.0"

[sequence]
values = [7]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.demo.name, "file-test");
        assert_eq!(config.sequence(), &[7]);
    }
}
