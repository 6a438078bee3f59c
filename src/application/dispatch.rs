use crate::domain::fuel::FuelType;
use crate::domain::ports::PumpSelector;
use crate::domain::pump::{Liters, Pump};

/// Picks the first pump, in registration order, that carries the fuel and
/// still holds the whole amount.
///
/// There is no load balancing: a later pump of the same fuel is only used
/// once every earlier one is too low for the request, so later pumps can sit
/// idle while earlier ones drain.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstFit;

impl PumpSelector for FirstFit {
    fn select(&self, pumps: &[Pump], fuel: FuelType, amount: Liters) -> Option<usize> {
        pumps.iter().position(|pump| pump.can_serve(fuel, amount))
    }
}
