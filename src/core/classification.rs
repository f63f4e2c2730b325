use crate::domain::model::{ColorScale, Snapshot, Triplet};

/// Ordered Fahrenheit bands. Bounds are inclusive and the first match wins.
///
/// The thresholds are kept exactly as published, including the overlap at
/// -459 (claimed by "Below Zero" first) and the uncovered space between
/// integer bands, which classifies as an empty label.
const BANDS: &[(f64, f64, &str)] = &[
    (212.0, 212.0, "Boiling"),
    (108.0, 211.0, "Way too Hot"),
    (100.0, 107.0, "Very Hot"),
    (90.0, 99.0, "Hot"),
    (80.0, 89.0, "Getting Hot"),
    (73.0, 79.0, "Warm"),
    (67.0, 72.0, "Nice"),
    (61.0, 66.0, "Pleasant"),
    (51.0, 60.0, "Cool"),
    (37.0, 50.0, "Cold"),
    (33.0, 36.0, "Freezing"),
    (0.0, 32.0, "Frozen"),
    (-459.0, -1.0, "Below Zero"),
    (-460.0, -459.0, "Absolute Zero"),
];

const MAX_HUE: f64 = 240.0;

pub fn classify(fahrenheit: f64) -> &'static str {
    if fahrenheit > 212.0 {
        return "Unspeakably Hot";
    }

    if let Some((_, _, label)) = BANDS
        .iter()
        .find(|(low, high, _)| fahrenheit >= *low && fahrenheit <= *high)
    {
        return *label;
    }

    if fahrenheit <= -461.0 {
        return "Impossible";
    }

    ""
}

impl ColorScale {
    /// Hue on a cold (240) to hot (0) spectrum.
    ///
    /// Bounds that are NaN, infinite or equal give NaN. Inverted bounds flip
    /// the spectrum instead of failing.
    pub fn hue(&self, fahrenheit: f64) -> f64 {
        let (cold, hot) = (self.cold_fahrenheit, self.hot_fahrenheit);
        let span = hot - cold;
        if fahrenheit.is_nan() || !span.is_finite() || span == 0.0 {
            return f64::NAN;
        }

        let clamped = fahrenheit.max(cold.min(hot)).min(cold.max(hot));
        let normalized = (clamped - cold) / span;
        (1.0 - normalized) * MAX_HUE
    }

    pub fn color(&self, fahrenheit: f64) -> String {
        format!("hsl({},100%,50%)", self.hue(fahrenheit))
    }
}

pub fn color(fahrenheit: f64) -> String {
    ColorScale::default().color(fahrenheit)
}

pub fn snapshot(triplet: Triplet, scale: &ColorScale) -> Snapshot {
    Snapshot {
        triplet,
        condition: classify(triplet.fahrenheit).to_string(),
        color: scale.color(triplet.fahrenheit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_points() {
        assert_eq!(classify(212.0), "Boiling");
        assert_eq!(classify(213.0), "Unspeakably Hot");
        assert_eq!(classify(72.0), "Nice");
        assert_eq!(classify(-461.0), "Impossible");
    }

    #[test]
    fn test_band_edges() {
        let cases = [
            (211.0, "Way too Hot"),
            (108.0, "Way too Hot"),
            (107.0, "Very Hot"),
            (100.0, "Very Hot"),
            (99.0, "Hot"),
            (90.0, "Hot"),
            (89.0, "Getting Hot"),
            (80.0, "Getting Hot"),
            (79.0, "Warm"),
            (73.0, "Warm"),
            (67.0, "Nice"),
            (66.0, "Pleasant"),
            (61.0, "Pleasant"),
            (60.0, "Cool"),
            (51.0, "Cool"),
            (50.0, "Cold"),
            (37.0, "Cold"),
            (36.0, "Freezing"),
            (33.0, "Freezing"),
            (32.0, "Frozen"),
            (0.0, "Frozen"),
            (-1.0, "Below Zero"),
            (-459.0, "Below Zero"),
            (-460.0, "Absolute Zero"),
            (-1000.0, "Impossible"),
        ];

        for (fahrenheit, expected) in cases {
            assert_eq!(classify(fahrenheit), expected, "at {}°F", fahrenheit);
        }
    }

    #[test]
    fn test_gaps_between_bands_are_unlabelled() {
        assert_eq!(classify(211.5), "");
        assert_eq!(classify(72.5), "");
        assert_eq!(classify(-0.5), "");
        assert_eq!(classify(-460.5), "");
        assert_eq!(classify(f64::NAN), "");
    }

    #[test]
    fn test_color_endpoints() {
        assert_eq!(color(32.0), "hsl(240,100%,50%)");
        assert_eq!(color(100.0), "hsl(0,100%,50%)");
        assert_eq!(color(66.0), "hsl(120,100%,50%)");
    }

    #[test]
    fn test_color_clamps() {
        assert_eq!(color(-40.0), "hsl(240,100%,50%)");
        assert_eq!(color(500.0), "hsl(0,100%,50%)");
    }

    #[test]
    fn test_custom_scale() {
        let scale = ColorScale {
            cold_fahrenheit: 0.0,
            hot_fahrenheit: 120.0,
        };
        assert_eq!(scale.hue(60.0), 120.0);
        assert_eq!(scale.color(0.0), "hsl(240,100%,50%)");
    }

    #[test]
    fn test_inverted_scale_flips_spectrum() {
        let scale = ColorScale {
            cold_fahrenheit: 100.0,
            hot_fahrenheit: 32.0,
        };
        assert_eq!(scale.color(32.0), "hsl(0,100%,50%)");
        assert_eq!(scale.color(100.0), "hsl(240,100%,50%)");
        assert_eq!(scale.color(500.0), "hsl(240,100%,50%)");
    }

    #[test]
    fn test_degenerate_scale_gives_nan_hue() {
        let nan_bound = ColorScale {
            cold_fahrenheit: f64::NAN,
            hot_fahrenheit: 100.0,
        };
        assert_eq!(nan_bound.color(50.0), "hsl(NaN,100%,50%)");

        let flat = ColorScale {
            cold_fahrenheit: 50.0,
            hot_fahrenheit: 50.0,
        };
        assert!(flat.hue(50.0).is_nan());

        let unbounded = ColorScale {
            cold_fahrenheit: f64::NEG_INFINITY,
            hot_fahrenheit: 100.0,
        };
        assert!(unbounded.hue(50.0).is_nan());
    }

    #[test]
    fn test_snapshot_bundles_label_and_color() {
        let triplet = Triplet {
            fahrenheit: 212.0,
            celsius: 100.0,
            kelvin: 373.15,
        };
        let snapshot = snapshot(triplet, &ColorScale::default());
        assert_eq!(snapshot.condition, "Boiling");
        assert_eq!(snapshot.color, "hsl(0,100%,50%)");
        assert_eq!(snapshot.triplet, triplet);
    }
}
