use crate::domain::fuel::FuelType;
use crate::domain::pump::Liters;
use crate::error::{Result, StationError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sales statistics for one fuel type, or the sum over all of them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FuelStats {
    /// Liters dispensed by successful sales.
    pub volume_sold: Decimal,
    /// Money earned, each sale priced at the moment it happened.
    pub revenue: Decimal,
    /// Number of successful sales.
    pub sales: u64,
    /// Sales turned away because no pump had enough left.
    pub cancelled_no_supply: u64,
    /// Sales turned away because the price was above the customer's ceiling.
    pub cancelled_too_expensive: u64,
}

impl FuelStats {
    /// These stats with one more sale, or `None` if a sum leaves the `Decimal` range.
    fn with_sale(self, amount: Decimal, cost: Decimal) -> Option<Self> {
        Some(Self {
            volume_sold: self.volume_sold.checked_add(amount)?,
            revenue: self.revenue.checked_add(cost)?,
            sales: self.sales.checked_add(1)?,
            ..self
        })
    }
}

/// A sale that fits in the ledger but has not been booked yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingSale {
    fuel: FuelType,
    stats: FuelStats,
    totals: FuelStats,
}

/// Per-fuel counters plus a running total over every fuel.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatsLedger {
    per_fuel: HashMap<FuelType, FuelStats>,
    totals: FuelStats,
}

impl StatsLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Works out the counters after selling `amount` of `fuel` for `cost`
    /// without touching the ledger. Fails if any sum would overflow.
    pub fn prepare_sale(
        &self,
        fuel: FuelType,
        amount: Liters,
        cost: Decimal,
    ) -> Result<PendingSale> {
        let overflow = || {
            StationError::ValidationError(format!(
                "Sale of {} liters of {fuel} for {cost} overflows the ledger",
                amount.value()
            ))
        };
        let stats = self
            .stats(fuel)
            .with_sale(amount.value(), cost)
            .ok_or_else(overflow)?;
        let totals = self
            .totals
            .with_sale(amount.value(), cost)
            .ok_or_else(overflow)?;
        Ok(PendingSale {
            fuel,
            stats,
            totals,
        })
    }

    pub fn book(&mut self, sale: PendingSale) {
        self.per_fuel.insert(sale.fuel, sale.stats);
        self.totals = sale.totals;
    }

    pub fn record_no_supply(&mut self, fuel: FuelType) {
        self.per_fuel.entry(fuel).or_default().cancelled_no_supply += 1;
        self.totals.cancelled_no_supply += 1;
    }

    pub fn record_too_expensive(&mut self, fuel: FuelType) {
        self.per_fuel.entry(fuel).or_default().cancelled_too_expensive += 1;
        self.totals.cancelled_too_expensive += 1;
    }

    pub fn stats(&self, fuel: FuelType) -> FuelStats {
        self.per_fuel.get(&fuel).copied().unwrap_or_default()
    }

    pub fn totals(&self) -> FuelStats {
        self.totals
    }
}
