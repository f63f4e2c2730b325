use crate::config::toml_config::TomlConfig;
use crate::core::sync::parse_field;
use crate::domain::model::{OutputFormat, Preset, Reading};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{ArgGroup, Parser};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "temp-calc")]
#[command(about = "Convert temperatures between Fahrenheit, Celsius and Kelvin")]
#[command(group(ArgGroup::new("input").multiple(false)))]
pub struct CliConfig {
    #[arg(short = 'f', long, group = "input", allow_hyphen_values = true)]
    pub fahrenheit: Option<String>,

    #[arg(short = 'c', long, group = "input", allow_hyphen_values = true)]
    pub celsius: Option<String>,

    #[arg(short = 'k', long, group = "input", allow_hyphen_values = true)]
    pub kelvin: Option<String>,

    #[arg(short, long, value_enum, group = "input")]
    pub preset: Option<Preset>,

    #[arg(short, long, group = "input", help = "Read commands from stdin")]
    pub interactive: bool,

    #[arg(long, value_enum, help = "Output format, overrides the config file")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// What the user asked the calculator to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Show,
    Edit(Reading),
    Preset(Preset),
    Interactive,
}

impl CliConfig {
    pub fn action(&self) -> Action {
        if self.interactive {
            return Action::Interactive;
        }
        if let Some(preset) = self.preset {
            return Action::Preset(preset);
        }

        let fields: [(Option<&str>, fn(f64) -> Reading); 3] = [
            (self.fahrenheit.as_deref(), Reading::fahrenheit),
            (self.celsius.as_deref(), Reading::celsius),
            (self.kelvin.as_deref(), Reading::kelvin),
        ];
        let edit = fields
            .into_iter()
            .find_map(|(text, reading)| text.map(|t| reading(parse_field(t))));

        edit.map(Action::Edit).unwrap_or(Action::Show)
    }

    /// Where the configuration comes from, for the startup log line.
    pub fn describe_config_source(&self) -> String {
        match &self.config {
            Some(path) => format!("file {}", path),
            None => "built-in defaults".to_string(),
        }
    }

    /// 載入配置檔 (若有指定) 並套用命令列覆蓋設定
    pub fn load_config(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(format) = self.format {
            config.set_output_format(format);
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
