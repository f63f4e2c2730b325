use crate::core::presets::DEFAULT_RANDOM_RANGE;
use crate::domain::model::{ColorScale, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_finite, validate_one_of, validate_ordered, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const VALID_FORMATS: [&str; 2] = ["text", "json"];
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub display: Option<DisplayConfig>,
    pub color: Option<ColorConfig>,
    pub random: Option<RandomConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorConfig {
    pub cold_fahrenheit: Option<f64>,
    pub hot_fahrenheit: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomConfig {
    pub min_fahrenheit: Option<i32>,
    pub max_fahrenheit: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TEMP_CALC_FORMAT})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigParseError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(format) = self.display.as_ref().and_then(|d| d.format.as_deref()) {
            validate_one_of("display.format", format, &VALID_FORMATS)?;
        }

        let scale = self.color_scale();
        validate_finite("color.cold_fahrenheit", scale.cold_fahrenheit)?;
        validate_finite("color.hot_fahrenheit", scale.hot_fahrenheit)?;
        validate_ordered("color", scale.cold_fahrenheit, scale.hot_fahrenheit, false)?;

        let (min, max) = self.random_range();
        validate_ordered("random", min, max, true)?;

        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &VALID_LOG_LEVELS)?;
        }

        Ok(())
    }

    /// 命令列覆蓋輸出格式
    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.display
            .get_or_insert_with(DisplayConfig::default)
            .format = Some(format.as_str().to_string());
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn output_format(&self) -> OutputFormat {
        match self.display.as_ref().and_then(|d| d.format.as_deref()) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }

    fn color_scale(&self) -> ColorScale {
        let defaults = ColorScale::default();
        let color = self.color.clone().unwrap_or_default();
        ColorScale {
            cold_fahrenheit: color.cold_fahrenheit.unwrap_or(defaults.cold_fahrenheit),
            hot_fahrenheit: color.hot_fahrenheit.unwrap_or(defaults.hot_fahrenheit),
        }
    }

    fn random_range(&self) -> (i32, i32) {
        let (default_min, default_max) = DEFAULT_RANDOM_RANGE;
        let random = self.random.clone().unwrap_or_default();
        (
            random.min_fahrenheit.unwrap_or(default_min),
            random.max_fahrenheit.unwrap_or(default_max),
        )
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
