use crate::application::engine::StationEngine;
use crate::domain::fuel::FuelType;
use crate::domain::pump::Pump;
use crate::error::{Result, StationError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// A `FUEL=VALUE` pair as given on the command line, e.g. `diesel=70`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelSetting {
    pub fuel: FuelType,
    pub value: Decimal,
}

impl FromStr for FuelSetting {
    type Err = StationError;

    fn from_str(s: &str) -> Result<Self> {
        let (fuel, value) = s.split_once('=').ok_or_else(|| {
            StationError::ConfigError(format!("expected FUEL=VALUE, got '{s}'"))
        })?;
        let fuel = fuel
            .parse()
            .map_err(|e: StationError| StationError::ConfigError(e.to_string()))?;
        let value = value.trim().parse::<Decimal>().map_err(|e| {
            StationError::ConfigError(format!("invalid number '{}': {e}", value.trim()))
        })?;
        Ok(Self { fuel, value })
    }
}

/// Station layout: pumps in registration order and the opening prices.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StationConfig {
    pub pumps: Vec<FuelSetting>,
    pub prices: Vec<FuelSetting>,
}

impl StationConfig {
    pub fn new(pumps: Vec<FuelSetting>, prices: Vec<FuelSetting>) -> Self {
        Self { pumps, prices }
    }

    /// Registers every pump and sets every price on a fresh engine. Later
    /// prices for the same fuel override earlier ones.
    pub fn build_engine(&self) -> Result<StationEngine> {
        let engine = StationEngine::new();
        for pump in &self.pumps {
            engine.register_pump(Pump::new(pump.fuel, pump.value)?);
        }
        for price in &self.prices {
            engine.set_price(price.fuel, price.value)?;
        }
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_fuel_setting() {
        let setting: FuelSetting = "diesel=70".parse().unwrap();
        assert_eq!(setting.fuel, FuelType::Diesel);
        assert_eq!(setting.value, dec!(70));

        let setting: FuelSetting = "Super = 1.5".parse().unwrap();
        assert_eq!(setting.fuel, FuelType::Super);
        assert_eq!(setting.value, dec!(1.5));
    }

    #[test]
    fn test_parse_fuel_setting_errors() {
        for bad in ["diesel", "petrol=1", "diesel=abc", "=1"] {
            assert!(
                matches!(bad.parse::<FuelSetting>(), Err(StationError::ConfigError(_))),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn test_build_engine() {
        let config = StationConfig::new(
            vec![
                "diesel=70".parse().unwrap(),
                "regular=50".parse().unwrap(),
                "diesel=30".parse().unwrap(),
            ],
            vec![
                "diesel=1.2".parse().unwrap(),
                "regular=1.45".parse().unwrap(),
                "diesel=1".parse().unwrap(),
            ],
        );

        let engine = config.build_engine().unwrap();
        let pumps = engine.pumps();
        assert_eq!(pumps.len(), 3);
        assert_eq!(pumps[2].fuel(), FuelType::Diesel);
        assert_eq!(pumps[2].remaining(), dec!(30));
        assert_eq!(engine.price(FuelType::Diesel), Some(dec!(1)));
        assert_eq!(engine.price(FuelType::Super), None);
    }

    #[test]
    fn test_build_engine_rejects_negative_values() {
        let config = StationConfig::new(vec!["diesel=-5".parse().unwrap()], Vec::new());
        assert!(matches!(
            config.build_engine(),
            Err(StationError::ValidationError(_))
        ));

        let config = StationConfig::new(Vec::new(), vec!["super=-1".parse().unwrap()]);
        assert!(config.build_engine().is_err());
    }
}
