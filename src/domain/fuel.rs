use crate::error::StationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The grades of fuel a station sells. Pumps, prices and statistics are all
/// keyed by this type.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Diesel,
    Regular,
    Super,
}

impl FuelType {
    pub const ALL: [FuelType; 3] = [FuelType::Diesel, FuelType::Regular, FuelType::Super];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Diesel => "diesel",
            FuelType::Regular => "regular",
            FuelType::Super => "super",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = StationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "diesel" => Ok(FuelType::Diesel),
            "regular" => Ok(FuelType::Regular),
            "super" => Ok(FuelType::Super),
            other => Err(StationError::ValidationError(format!(
                "unknown fuel type '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Diesel".parse::<FuelType>().unwrap(), FuelType::Diesel);
        assert_eq!(" SUPER ".parse::<FuelType>().unwrap(), FuelType::Super);
        assert!(matches!(
            "kerosene".parse::<FuelType>(),
            Err(StationError::ValidationError(_))
        ));
    }

    #[test]
    fn test_serialization_is_lowercase() {
        let json = serde_json::to_string(&FuelType::Regular).unwrap();
        assert_eq!(json, "\"regular\"");
    }
}
