//! World regions covered by the dataset

use serde::{Deserialize, Serialize};

/// One of the six populated world regions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NorthAmerica,
    Europe,
    Asia,
    SouthAmerica,
    Africa,
    Oceania,
}

impl Region {
    /// All regions, in display order
    pub const ALL: [Region; 6] = [
        Region::NorthAmerica,
        Region::Europe,
        Region::Asia,
        Region::SouthAmerica,
        Region::Africa,
        Region::Oceania,
    ];

    /// Human-readable region name
    pub fn name(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
            Region::SouthAmerica => "South America",
            Region::Africa => "Africa",
            Region::Oceania => "Oceania",
        }
    }

    /// Approximate population
    pub fn population(&self) -> u64 {
        match self {
            Region::NorthAmerica => 579_000_000,
            Region::Europe => 747_000_000,
            Region::Asia => 4_600_000_000,
            Region::SouthAmerica => 434_000_000,
            Region::Africa => 1_340_000_000,
            Region::Oceania => 45_000_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_regions_named() {
        for region in Region::ALL {
            assert!(!region.name().is_empty());
            assert!(region.population() > 0);
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Region::NorthAmerica).unwrap();
        assert_eq!(json, "\"north_america\"");

        let back: Region = serde_json::from_str("\"south_america\"").unwrap();
        assert_eq!(back, Region::SouthAmerica);
    }
}
