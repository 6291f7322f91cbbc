use crate::error::ResultsError;
use serde::Deserialize;

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
page_size = 10
export_stem = "component-results"
"#;

/// Настройки подсистемы результатов.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultsConfig {
    /// Строк на страницу, строго положительное
    pub page_size: usize,

    /// Базовое имя файлов экспорта (к нему добавляются дата и расширение)
    pub export_stem: String,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            export_stem: "component-results".to_string(),
        }
    }
}

impl ResultsConfig {
    /// Load configuration from a TOML string; falls back to the embedded
    /// default when the host passes nothing.
    pub fn load(contents: Option<&str>) -> Result<Self, ResultsError> {
        let contents = contents.unwrap_or(DEFAULT_CONFIG);
        let config: ResultsConfig =
            toml::from_str(contents).map_err(|e| ResultsError::validation(e.to_string()))?;
        if config.page_size == 0 {
            return Err(ResultsError::validation("page_size must be positive"));
        }
        if config.export_stem.trim().is_empty() {
            return Err(ResultsError::validation("export_stem must not be empty"));
        }
        Ok(config)
    }
}
