use crate::application::dispatch::FirstFit;
use crate::domain::fuel::FuelType;
use crate::domain::ledger::{FuelStats, StatsLedger};
use crate::domain::ports::PumpSelectorBox;
use crate::domain::prices::PriceTable;
use crate::domain::pump::{Liters, Pump};
use crate::domain::report::{FuelReport, StationReport};
use crate::error::{Result, StationError};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct StationState {
    pumps: Vec<Pump>,
    prices: PriceTable,
    ledger: StatsLedger,
}

/// The shared heart of a fuel station.
///
/// `StationEngine` owns the pumps, the price table and the sales ledger behind
/// a single lock. A purchase holds that lock from the price check through the
/// pump debit and the ledger update, so concurrent customers are served as if
/// one at a time: a pump is never promised twice, no counter update is lost,
/// and a price change lands either before or after a whole purchase.
///
/// The engine is `Send + Sync`; share it by reference or wrap it in an `Arc`.
pub struct StationEngine {
    state: Mutex<StationState>,
    selector: PumpSelectorBox,
}

impl Default for StationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StationEngine {
    /// Creates an empty station that serves customers first-fit.
    pub fn new() -> Self {
        Self::with_selector(Box::new(FirstFit))
    }

    /// Creates an empty station with a custom pump selection policy.
    pub fn with_selector(selector: PumpSelectorBox) -> Self {
        Self {
            state: Mutex::new(StationState::default()),
            selector,
        }
    }

    /// Adds a pump behind the existing ones. Meant for setup, before traffic.
    pub fn register_pump(&self, pump: Pump) {
        debug!(fuel = %pump.fuel(), remaining = %pump.remaining(), "registering pump");
        self.state.lock().pumps.push(pump);
    }

    pub fn set_price(&self, fuel: FuelType, price: Decimal) -> Result<()> {
        self.state.lock().prices.set(fuel, price)?;
        debug!(%fuel, %price, "price updated");
        Ok(())
    }

    pub fn price(&self, fuel: FuelType) -> Option<Decimal> {
        self.state.lock().prices.get(fuel)
    }

    /// A copy of the pumps in registration order. Changing it does not touch
    /// the station.
    pub fn pumps(&self) -> Vec<Pump> {
        self.state.lock().pumps.clone()
    }

    /// Sells `amount` liters of `fuel` to a customer paying at most
    /// `max_unit_price` per liter, returning the total cost.
    ///
    /// # Errors
    ///
    /// * `PriceTooHigh` when the current price exceeds the ceiling.
    /// * `InsufficientSupply` when no pump holds the whole amount.
    /// * `ValidationError` / `UnpricedFuel` for malformed requests, including
    ///   a cost or running total too large for `Decimal`. These are not
    ///   counted in the ledger and leave the pumps alone.
    #[tracing::instrument(skip(self))]
    pub fn purchase(
        &self,
        fuel: FuelType,
        amount: Decimal,
        max_unit_price: Decimal,
    ) -> Result<Decimal> {
        let amount = Liters::new(amount).inspect_err(|e| warn!(error = %e, "bad request"))?;
        if max_unit_price < Decimal::ZERO {
            warn!("negative price ceiling");
            return Err(StationError::ValidationError(format!(
                "Price ceiling must not be negative, got {max_unit_price}"
            )));
        }

        let mut state = self.state.lock();
        let StationState {
            pumps,
            prices,
            ledger,
        } = &mut *state;

        let Some(price) = prices.get(fuel) else {
            warn!("fuel has no price");
            return Err(StationError::UnpricedFuel(fuel));
        };

        if price > max_unit_price {
            ledger.record_too_expensive(fuel);
            info!(%price, "too expensive");
            return Err(StationError::PriceTooHigh {
                fuel,
                price,
                ceiling: max_unit_price,
            });
        }

        let Some(index) = self.selector.select(pumps, fuel, amount) else {
            ledger.record_no_supply(fuel);
            info!("not enough fuel left");
            return Err(StationError::InsufficientSupply {
                fuel,
                requested: amount.value(),
            });
        };

        // A selector may hand back a pump that cannot serve; treat it as no supply.
        let Some(pump) = pumps
            .get_mut(index)
            .filter(|pump| pump.can_serve(fuel, amount))
        else {
            ledger.record_no_supply(fuel);
            warn!(pump = index, "selector picked a pump that cannot serve");
            return Err(StationError::InsufficientSupply {
                fuel,
                requested: amount.value(),
            });
        };

        // Nothing changes until the cost and the new counters are known to fit.
        let cost = amount
            .value()
            .checked_mul(price)
            .ok_or_else(|| {
                StationError::ValidationError(format!(
                    "Cost of {} liters at {price} is out of range",
                    amount.value()
                ))
            })
            .inspect_err(|e| warn!(error = %e, "bad request"))?;
        let sale = ledger
            .prepare_sale(fuel, amount, cost)
            .inspect_err(|e| warn!(error = %e, "bad request"))?;

        pump.dispense(amount)?;
        ledger.book(sale);
        debug!(pump = index, %cost, "sold");
        Ok(cost)
    }

    pub fn stats(&self, fuel: FuelType) -> FuelStats {
        self.state.lock().ledger.stats(fuel)
    }

    pub fn totals(&self) -> FuelStats {
        self.state.lock().ledger.totals()
    }

    pub fn amount_sold(&self, fuel: FuelType) -> Decimal {
        self.stats(fuel).volume_sold
    }

    pub fn revenue(&self, fuel: FuelType) -> Decimal {
        self.stats(fuel).revenue
    }

    pub fn total_revenue(&self) -> Decimal {
        self.totals().revenue
    }

    pub fn sales(&self, fuel: FuelType) -> u64 {
        self.stats(fuel).sales
    }

    pub fn total_sales(&self) -> u64 {
        self.totals().sales
    }

    pub fn no_supply_cancellations(&self, fuel: FuelType) -> u64 {
        self.stats(fuel).cancelled_no_supply
    }

    pub fn total_no_supply_cancellations(&self) -> u64 {
        self.totals().cancelled_no_supply
    }

    pub fn too_expensive_cancellations(&self, fuel: FuelType) -> u64 {
        self.stats(fuel).cancelled_too_expensive
    }

    pub fn total_too_expensive_cancellations(&self) -> u64 {
        self.totals().cancelled_too_expensive
    }

    /// Prices, statistics and pump stock read in one go.
    pub fn report(&self) -> StationReport {
        let state = self.state.lock();
        let fuels = FuelType::ALL
            .into_iter()
            .map(|fuel| FuelReport {
                fuel,
                price: state.prices.get(fuel),
                stats: state.ledger.stats(fuel),
            })
            .collect();

        StationReport {
            fuels,
            totals: state.ledger.totals(),
            pumps: state.pumps.clone(),
        }
    }
}
