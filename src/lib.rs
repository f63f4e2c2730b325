pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{Action, CliConfig};
pub use config::TomlConfig;

pub use core::classification::{classify, color, snapshot};
pub use core::conversion::{
    celsius_to_fahrenheit, celsius_to_kelvin, convert, fahrenheit_to_celsius, kelvin_to_celsius,
};
pub use core::presets::ThreadRandom;
pub use core::session::Session;
pub use core::sync::{parse_field, FormState, Transition};
pub use domain::model::{ColorScale, OutputFormat, Preset, Reading, Snapshot, Triplet, Unit};
pub use utils::error::{CalcError, Result};
