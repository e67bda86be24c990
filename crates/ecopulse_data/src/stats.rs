//! Per-region pollution statistics
//!
//! Values are snapshots of published environmental figures, embedded
//! directly so the dashboard works offline.

use crate::region::Region;
use serde::{Deserialize, Serialize};

/// Air quality figures for one region
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    /// Fine particulate concentration in ug/m3
    pub pm25: f32,
    /// Air quality index
    pub aqi: u32,
    /// Estimated yearly deaths attributable to air pollution
    pub deaths_yearly: u64,
}

/// Water quality figures for one region
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaterQuality {
    /// Chemical pollution index
    pub chemical_pollution: f32,
    /// Microplastic particles per liter
    pub microplastics: f32,
    /// Share of population with clean water access, percent
    pub clean_water_access: f32,
}

/// Light pollution figures for one region
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightPollution {
    /// Mean sky brightness in mag/arcsec2
    pub sky_brightness: f32,
    /// Share of stars still visible to the naked eye, percent
    pub visible_stars: f32,
    /// Composite light pollution index
    pub light_pollution_index: f32,
}

/// The embedded dataset, one record per region per statistic family
#[derive(Clone, Copy, Debug, Default)]
pub struct Dataset;

impl Dataset {
    pub fn air(&self, region: Region) -> AirQuality {
        let (pm25, aqi, deaths_yearly) = match region {
            Region::NorthAmerica => (12.3, 65, 140_000),
            Region::Europe => (13.8, 68, 400_000),
            Region::Asia => (45.2, 156, 4_200_000),
            Region::SouthAmerica => (18.9, 78, 95_000),
            Region::Africa => (32.8, 112, 780_000),
            Region::Oceania => (8.4, 42, 12_000),
        };
        AirQuality {
            pm25,
            aqi,
            deaths_yearly,
        }
    }

    pub fn water(&self, region: Region) -> WaterQuality {
        let (chemical_pollution, microplastics, clean_water_access) = match region {
            Region::NorthAmerica => (8.2, 15.7, 97.3),
            Region::Europe => (6.1, 12.4, 98.7),
            Region::Asia => (24.8, 45.3, 71.2),
            Region::SouthAmerica => (16.4, 28.1, 83.6),
            Region::Africa => (19.7, 22.8, 63.1),
            Region::Oceania => (4.3, 18.9, 94.8),
        };
        WaterQuality {
            chemical_pollution,
            microplastics,
            clean_water_access,
        }
    }

    pub fn light(&self, region: Region) -> LightPollution {
        let (sky_brightness, visible_stars, light_pollution_index) = match region {
            Region::NorthAmerica => (19.2, 32.1, 6.8),
            Region::Europe => (18.9, 28.7, 7.2),
            Region::Asia => (17.4, 15.3, 8.9),
            Region::SouthAmerica => (20.1, 45.8, 5.4),
            Region::Africa => (20.8, 58.2, 4.1),
            Region::Oceania => (21.1, 67.4, 3.2),
        };
        LightPollution {
            sky_brightness,
            visible_stars,
            light_pollution_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_region_has_all_three_records() {
        let data = Dataset;
        for region in Region::ALL {
            assert!(data.air(region).aqi > 0);
            assert!(data.water(region).clean_water_access > 0.0);
            assert!(data.light(region).sky_brightness > 0.0);
        }
    }

    #[test]
    fn test_asia_carries_the_worst_air() {
        let data = Dataset;
        let asia = data.air(Region::Asia);
        assert_eq!(asia.aqi, 156);
        assert_eq!(asia.deaths_yearly, 4_200_000);
        for region in Region::ALL {
            assert!(data.air(region).aqi <= asia.aqi);
        }
    }

    #[test]
    fn test_air_quality_serializes() {
        let record = Dataset.air(Region::Oceania);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"aqi\":42"));
    }
}
