//! Unit conversions between Fahrenheit, Celsius and Kelvin.
//!
//! Every field has a fixed display precision: Fahrenheit is shown as an
//! integer, Celsius with one decimal and Kelvin with two. The conversions
//! round their output to the precision of the target field so a value read
//! back from the form converts to the same result again.

use crate::domain::model::{Reading, Triplet, Unit};

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

const CELSIUS_PER_FAHRENHEIT: f64 = 5.0 / 9.0;
const FAHRENHEIT_PER_CELSIUS: f64 = 9.0 / 5.0;

pub const FAHRENHEIT_DECIMALS: i32 = 0;
pub const CELSIUS_DECIMALS: i32 = 1;
pub const KELVIN_DECIMALS: i32 = 2;

/// Rounds half-up (toward positive infinity) to `decimals` places.
///
/// NaN, infinities and values too large to scale pass through unchanged.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    if !(value.abs() * factor).is_finite() {
        return value;
    }

    let scaled = value * factor;
    let floor = scaled.floor();
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / factor
}

pub fn decimals_for(unit: Unit) -> i32 {
    match unit {
        Unit::Fahrenheit => FAHRENHEIT_DECIMALS,
        Unit::Celsius => CELSIUS_DECIMALS,
        Unit::Kelvin => KELVIN_DECIMALS,
    }
}

/// Rounds a value to the display precision of its field.
pub fn round_for(unit: Unit, value: f64) -> f64 {
    round_to(value, decimals_for(unit))
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    round_to((fahrenheit - 32.0) * CELSIUS_PER_FAHRENHEIT, CELSIUS_DECIMALS)
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    round_to(celsius * FAHRENHEIT_PER_CELSIUS + 32.0, FAHRENHEIT_DECIMALS)
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    round_to(celsius + KELVIN_OFFSET, KELVIN_DECIMALS)
}

/// Left unrounded; callers that display the result round it themselves.
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// Derives all three fields from a single reading.
///
/// The reading is first rounded to the precision of its own field and the
/// other two are computed from that rounded value, so the result depends
/// only on what the edited field displays.
pub fn convert(reading: Reading) -> Triplet {
    let value = round_for(reading.unit, reading.value);
    match reading.unit {
        Unit::Fahrenheit => {
            let celsius = fahrenheit_to_celsius(value);
            Triplet {
                fahrenheit: value,
                celsius,
                kelvin: celsius_to_kelvin(celsius),
            }
        }
        Unit::Celsius => Triplet {
            fahrenheit: celsius_to_fahrenheit(value),
            celsius: value,
            kelvin: celsius_to_kelvin(value),
        },
        Unit::Kelvin => {
            let celsius = kelvin_to_celsius(value);
            Triplet {
                fahrenheit: celsius_to_fahrenheit(celsius),
                celsius: round_for(Unit::Celsius, celsius),
                kelvin: value,
            }
        }
    }
}
