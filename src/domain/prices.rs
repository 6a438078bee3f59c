use crate::domain::fuel::FuelType;
use crate::error::{Result, StationError};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Current price per liter for each fuel type. Only the latest price is kept.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PriceTable {
    prices: HashMap<FuelType, Decimal>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until a price has been set for `fuel`.
    pub fn get(&self, fuel: FuelType) -> Option<Decimal> {
        self.prices.get(&fuel).copied()
    }

    pub fn set(&mut self, fuel: FuelType, price: Decimal) -> Result<()> {
        if price < Decimal::ZERO {
            return Err(StationError::ValidationError(format!(
                "Price must not be negative, got {price}"
            )));
        }
        self.prices.insert(fuel, price);
        Ok(())
    }
}
