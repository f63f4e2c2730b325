use crate::core::classification::snapshot;
use crate::core::conversion::convert;
use crate::domain::model::{ColorScale, Reading, Snapshot, Triplet};

/// The three form fields. Replaced as a whole on every edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormState {
    triplet: Triplet,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: FormState,
    pub changed: bool,
}

impl Default for FormState {
    /// 32°F / 0.0°C / 273.15 K
    fn default() -> Self {
        Self::from_reading(Reading::fahrenheit(32.0))
    }
}

impl FormState {
    pub fn from_reading(reading: Reading) -> Self {
        Self {
            triplet: convert(reading),
        }
    }

    pub fn triplet(&self) -> Triplet {
        self.triplet
    }

    /// Applies an edit to one field and recomputes the other two.
    ///
    /// The new state depends only on the edit. `changed` is false when the
    /// recomputed fields equal the current ones, so writing a field's own
    /// value back never notifies anyone and cannot start another round of
    /// updates.
    pub fn apply(&self, edit: Reading) -> Transition {
        let next = Self::from_reading(edit);

        if same_triplet(&next.triplet, &self.triplet) {
            tracing::trace!(unit = ?edit.unit, value = edit.value, "edit unchanged, skipping");
            return Transition {
                state: *self,
                changed: false,
            };
        }

        tracing::debug!(
            unit = ?edit.unit,
            value = edit.value,
            fahrenheit = next.triplet.fahrenheit,
            celsius = next.triplet.celsius,
            kelvin = next.triplet.kelvin,
            "fields synchronized"
        );

        Transition {
            state: next,
            changed: true,
        }
    }

    pub fn snapshot(&self, scale: &ColorScale) -> Snapshot {
        snapshot(self.triplet, scale)
    }
}

/// Equality for dedup purposes: NaN matches NaN.
fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

fn same_triplet(a: &Triplet, b: &Triplet) -> bool {
    same_value(a.fahrenheit, b.fahrenheit)
        && same_value(a.celsius, b.celsius)
        && same_value(a.kelvin, b.kelvin)
}

/// Coerces field text to a number. Anything unparseable, including empty
/// text, becomes NaN.
pub fn parse_field(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
