use crate::core::ConfigProvider;
use crate::domain::model::{ChartKind, InputFormat, OutputFormat};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{
    validate_file_extensions, validate_hex_colors, validate_non_empty_list,
    validate_non_empty_string, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub transform: TransformConfig,
    pub load: LoadConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
    pub format: Option<InputFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    #[serde(default = "default_charts")]
    pub charts: Vec<ChartKind>,
    pub palette: Option<Vec<String>>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            charts: default_charts(),
            palette: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    #[serde(default = "default_output_formats")]
    pub output_formats: Vec<OutputFormat>,
    pub archive: Option<ArchiveConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    pub enabled: bool,
    pub filename: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub json: bool,
}

fn default_charts() -> Vec<ChartKind> {
    ChartKind::ALL.to_vec()
}

fn default_output_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Json]
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INCOME_DATA_DIR})；未設定的變數保留原文
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("pipeline.name", &self.pipeline.name)?;

        validate_path("source.path", &self.source.path)?;
        if self.source.format.is_none() {
            validate_file_extensions(
                "source.path",
                std::slice::from_ref(&self.source.path),
                &["csv", "json"],
            )?;
        }

        validate_non_empty_list("transform.charts", &self.transform.charts)?;
        if let Some(palette) = &self.transform.palette {
            validate_non_empty_list("transform.palette", palette)?;
            validate_hex_colors("transform.palette", palette)?;
        }

        validate_path("load.output_path", &self.load.output_path)?;
        validate_non_empty_list("load.output_formats", &self.load.output_formats)?;
        if let Some(archive) = &self.load.archive {
            if archive.enabled {
                validate_file_extensions(
                    "load.archive.filename",
                    std::slice::from_ref(&archive.filename),
                    &["zip"],
                )?;
            }
        }

        Ok(())
    }

    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.path
    }

    fn input_format(&self) -> Option<InputFormat> {
        self.source.format
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn charts(&self) -> &[ChartKind] {
        &self.transform.charts
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.load.output_formats
    }

    fn palette(&self) -> Option<&[String]> {
        self.transform.palette.as_deref()
    }

    fn archive(&self) -> Option<&str> {
        self.load
            .archive
            .as_ref()
            .filter(|archive| archive.enabled)
            .map(|archive| archive.filename.as_str())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
