use super::fuel::FuelType;
use super::ledger::FuelStats;
use super::pump::Pump;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct FuelReport {
    pub fuel: FuelType,
    pub price: Option<Decimal>,
    #[serde(flatten)]
    pub stats: FuelStats,
}

/// Point-in-time view of a station: prices, statistics and pump stock, all
/// read under the same lock.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct StationReport {
    pub fuels: Vec<FuelReport>,
    pub totals: FuelStats,
    pub pumps: Vec<Pump>,
}
