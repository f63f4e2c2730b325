pub mod classification;
pub mod conversion;
pub mod presets;
pub mod session;
pub mod sync;

pub use crate::domain::model::{ColorScale, OutputFormat, Preset, Reading, Snapshot, Triplet, Unit};
pub use crate::domain::ports::{ConfigProvider, RandomSource};
pub use crate::utils::error::Result;
