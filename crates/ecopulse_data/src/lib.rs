//! EcoPulse Data
//!
//! The embedded pollution dataset the dashboard renders: six world regions,
//! three statistic families (air, water, light), and the severity labels
//! derived from the scenario sliders. The dataset is compiled in; there is
//! no network fetch and no runtime loading.

mod levels;
mod region;
mod stats;

pub use levels::Category;
pub use region::Region;
pub use stats::{AirQuality, Dataset, LightPollution, WaterQuality};
