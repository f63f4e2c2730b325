use crate::domain::model::{ColorScale, OutputFormat};

pub trait ConfigProvider {
    fn output_format(&self) -> OutputFormat;
    fn color_scale(&self) -> ColorScale;
    /// Inclusive Fahrenheit bounds for the random preset.
    fn random_range(&self) -> (i32, i32);
}

pub trait RandomSource {
    /// Returns an integer in `min..=max`.
    fn next_in(&mut self, min: i32, max: i32) -> i32;
}
