use crate::domain::fuel::FuelType;
use crate::error::{Result, StationError};
use rust_decimal::Decimal;
use serde::Serialize;

/// Represents a positive quantity of fuel requested by a customer.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Liters(Decimal);

impl Liters {
    pub fn new(value: Decimal) -> Result<Self> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(StationError::ValidationError(format!(
                "Amount must be positive, got {value}"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// A single dispenser holding the remaining stock of one fuel type.
///
/// The stock only ever goes down, and never below zero.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Pump {
    fuel: FuelType,
    remaining: Decimal,
}

impl Pump {
    pub fn new(fuel: FuelType, remaining: Decimal) -> Result<Self> {
        if remaining < Decimal::ZERO {
            return Err(StationError::ValidationError(format!(
                "Pump capacity must not be negative, got {remaining}"
            )));
        }
        Ok(Self { fuel, remaining })
    }

    pub fn fuel(&self) -> FuelType {
        self.fuel
    }

    pub fn remaining(&self) -> Decimal {
        self.remaining
    }

    /// Whether this pump can serve `amount` of `fuel` in one go.
    pub fn can_serve(&self, fuel: FuelType, amount: Liters) -> bool {
        self.fuel == fuel && self.remaining >= amount.value()
    }

    /// Draws `amount` from the pump if enough is left.
    pub fn dispense(&mut self, amount: Liters) -> Result<()> {
        if self.remaining >= amount.value() {
            self.remaining -= amount.value();
            Ok(())
        } else {
            Err(StationError::InsufficientSupply {
                fuel: self.fuel,
                requested: amount.value(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_liters_validation() {
        assert!(Liters::new(dec!(0.5)).is_ok());
        assert!(matches!(
            Liters::new(dec!(0.0)),
            Err(StationError::ValidationError(_))
        ));
        assert!(matches!(
            Liters::new(dec!(-3)),
            Err(StationError::ValidationError(_))
        ));
    }

    #[test]
    fn test_pump_rejects_negative_capacity() {
        assert!(Pump::new(FuelType::Diesel, dec!(0)).is_ok());
        assert!(matches!(
            Pump::new(FuelType::Diesel, dec!(-1)),
            Err(StationError::ValidationError(_))
        ));
    }

    #[test]
    fn test_dispense_leaves_correct_remaining() {
        let mut pump = Pump::new(FuelType::Diesel, dec!(50)).unwrap();
        pump.dispense(Liters::new(dec!(40)).unwrap()).unwrap();
        assert_eq!(pump.remaining(), dec!(10));
        assert_eq!(pump.fuel(), FuelType::Diesel);
    }

    #[test]
    fn test_dispense_never_goes_negative() {
        let mut pump = Pump::new(FuelType::Super, dec!(20)).unwrap();
        let result = pump.dispense(Liters::new(dec!(30)).unwrap());
        assert!(matches!(
            result,
            Err(StationError::InsufficientSupply { .. })
        ));
        assert_eq!(pump.remaining(), dec!(20));

        pump.dispense(Liters::new(dec!(20)).unwrap()).unwrap();
        assert_eq!(pump.remaining(), dec!(0));
    }

    #[test]
    fn test_can_serve_checks_fuel_and_stock() {
        let pump = Pump::new(FuelType::Regular, dec!(30)).unwrap();
        let thirty = Liters::new(dec!(30)).unwrap();
        assert!(pump.can_serve(FuelType::Regular, thirty));
        assert!(!pump.can_serve(FuelType::Diesel, thirty));
        assert!(!pump.can_serve(FuelType::Regular, Liters::new(dec!(30.01)).unwrap()));
    }
}
