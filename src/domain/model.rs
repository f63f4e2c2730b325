use crate::utils::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Fahrenheit,
    Celsius,
    Kelvin,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Fahrenheit, Unit::Celsius, Unit::Kelvin];

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Fahrenheit => "°F",
            Unit::Celsius => "°C",
            Unit::Kelvin => "K",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "fahrenheit" => Ok(Unit::Fahrenheit),
            "c" | "celsius" => Ok(Unit::Celsius),
            "k" | "kelvin" => Ok(Unit::Kelvin),
            other => Err(CalcError::InvalidCommandError {
                command: other.to_string(),
                reason: "expected one of f, c, k".to_string(),
            }),
        }
    }
}

/// A single temperature value tagged with the scale it was entered on.
///
/// This is also the unit of change for the form: editing a field is
/// expressed as the reading that field now holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub value: f64,
    pub unit: Unit,
}

impl Reading {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub const fn fahrenheit(value: f64) -> Self {
        Self::new(value, Unit::Fahrenheit)
    }

    pub const fn celsius(value: f64) -> Self {
        Self::new(value, Unit::Celsius)
    }

    pub const fn kelvin(value: f64) -> Self {
        Self::new(value, Unit::Kelvin)
    }
}

/// The three display fields, always derived from one underlying quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triplet {
    pub fahrenheit: f64,
    pub celsius: f64,
    pub kelvin: f64,
}

impl Triplet {
    pub fn get(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Fahrenheit => self.fahrenheit,
            Unit::Celsius => self.celsius,
            Unit::Kelvin => self.kelvin,
        }
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0} {} | {:.1} {} | {:.2} {}",
            self.fahrenheit,
            Unit::Fahrenheit,
            self.celsius,
            Unit::Celsius,
            self.kelvin,
            Unit::Kelvin
        )
    }
}

/// Everything the form shows for one state: the fields, the condition label
/// and the color hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(flatten)]
    pub triplet: Triplet,
    pub condition: String,
    pub color: String,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.triplet, self.condition, self.color)
    }
}

/// Fahrenheit bounds of the cold-to-hot hue spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub cold_fahrenheit: f64,
    pub hot_fahrenheit: f64,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            cold_fahrenheit: 32.0,
            hot_fahrenheit: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Ice,
    Boiling,
    Random,
    AbsoluteZero,
}

impl FromStr for Preset {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ice" => Ok(Preset::Ice),
            "boiling" => Ok(Preset::Boiling),
            "random" => Ok(Preset::Random),
            "absolute-zero" | "absolute_zero" | "zero" => Ok(Preset::AbsoluteZero),
            other => Err(CalcError::InvalidCommandError {
                command: other.to_string(),
                reason: "expected one of ice, boiling, random, absolute-zero".to_string(),
            }),
        }
    }
}
