use super::fuel::FuelType;
use super::pump::{Liters, Pump};

/// Chooses which pump serves a request.
///
/// Called with the engine lock held, so implementations see a stable pump
/// list and must not block.
pub trait PumpSelector: Send + Sync {
    /// Index into `pumps` of the pump that should serve `amount` of `fuel`,
    /// or `None` when no pump can.
    fn select(&self, pumps: &[Pump], fuel: FuelType, amount: Liters) -> Option<usize>;
}

pub type PumpSelectorBox = Box<dyn PumpSelector>;
