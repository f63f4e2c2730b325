use crate::domain::model::{Preset, Reading};
use crate::domain::ports::RandomSource;
use rand::Rng;

pub const DEFAULT_RANDOM_RANGE: (i32, i32) = (32, 100);

impl Preset {
    /// The field edit this preset button performs.
    pub fn to_reading<R: RandomSource + ?Sized>(&self, rng: &mut R, range: (i32, i32)) -> Reading {
        match self {
            Preset::Ice => Reading::celsius(0.0),
            Preset::Boiling => Reading::fahrenheit(212.0),
            Preset::Random => {
                let (min, max) = range;
                Reading::fahrenheit(rng.next_in(min, max) as f64)
            }
            Preset::AbsoluteZero => Reading::kelvin(0.0),
        }
    }
}

/// Random source backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in(&mut self, min: i32, max: i32) -> i32 {
        rand::rng().random_range(min..=max)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::FixedRandom;
    use super::*;
    use crate::core::sync::FormState;
    use crate::domain::model::Unit;

    #[test]
    fn test_fixed_presets() {
        let mut rng = FixedRandom(50);
        assert_eq!(
            Preset::Ice.to_reading(&mut rng, DEFAULT_RANDOM_RANGE),
            Reading::celsius(0.0)
        );
        assert_eq!(
            Preset::Boiling.to_reading(&mut rng, DEFAULT_RANDOM_RANGE),
            Reading::fahrenheit(212.0)
        );
        assert_eq!(
            Preset::AbsoluteZero.to_reading(&mut rng, DEFAULT_RANDOM_RANGE),
            Reading::kelvin(0.0)
        );
    }

    #[test]
    fn test_random_preset_uses_source() {
        let mut rng = FixedRandom(75);
        let reading = Preset::Random.to_reading(&mut rng, DEFAULT_RANDOM_RANGE);
        assert_eq!(reading.unit, Unit::Fahrenheit);
        assert_eq!(reading.value, 75.0);

        let mut low = FixedRandom(-10);
        assert_eq!(Preset::Random.to_reading(&mut low, DEFAULT_RANDOM_RANGE).value, 32.0);
    }

    #[test]
    fn test_thread_random_stays_in_range() {
        let mut rng = ThreadRandom;
        for _ in 0..500 {
            let value = rng.next_in(32, 100);
            assert!((32..=100).contains(&value));
        }
        assert_eq!(rng.next_in(7, 7), 7);
    }

    #[test]
    fn test_absolute_zero_lands_in_its_band() {
        let mut rng = FixedRandom(0);
        let reading = Preset::AbsoluteZero.to_reading(&mut rng, DEFAULT_RANDOM_RANGE);
        let triplet = FormState::from_reading(reading).triplet();
        assert_eq!(triplet.kelvin, 0.0);
        assert_eq!(triplet.fahrenheit, -460.0);
        assert!((triplet.celsius + 273.15).abs() <= 0.051);
    }
}
