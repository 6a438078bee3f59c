use crate::application::engine::StationEngine;
use crate::domain::customer::{Customer, Outcome, Visit};
use crate::error::StationError;
use std::sync::Barrier;
use std::thread;
use tracing::{debug, info};

/// Most customers let onto the forecourt at once, one thread each.
pub const WAVE_SIZE: usize = 256;

/// Lets a batch of customers loose on the station.
///
/// Customers arrive in waves of at most [`WAVE_SIZE`]. Everyone in a wave gets
/// their own thread; the threads wait at a barrier and then make exactly one
/// purchase each. The next wave starts once the previous one has left. Visits
/// come back in input order.
pub fn rush(engine: &StationEngine, customers: Vec<Customer>) -> Vec<Visit> {
    let mut visits = Vec::with_capacity(customers.len());
    let mut queue = customers.into_iter().peekable();
    while queue.peek().is_some() {
        let wave: Vec<Customer> = queue.by_ref().take(WAVE_SIZE).collect();
        visits.extend(rush_wave(engine, wave));
    }
    visits
}

fn rush_wave(engine: &StationEngine, customers: Vec<Customer>) -> Vec<Visit> {
    debug!(customers = customers.len(), "wave arriving");
    let gate = Barrier::new(customers.len());
    thread::scope(|scope| {
        let handles: Vec<_> = customers
            .into_iter()
            .map(|customer| {
                let gate = &gate;
                scope.spawn(move || {
                    gate.wait();
                    visit(engine, customer)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(visit) => visit,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}

/// One customer making one purchase.
pub fn visit(engine: &StationEngine, customer: Customer) -> Visit {
    info!(
        customer = %customer.name,
        fuel = %customer.fuel,
        liters = %customer.liters,
        max_price = %customer.max_price,
        "pulling over"
    );

    let outcome = match engine.purchase(customer.fuel, customer.liters, customer.max_price) {
        Ok(cost) => Outcome::Served { cost },
        Err(StationError::PriceTooHigh { .. }) => Outcome::TooExpensive,
        Err(StationError::InsufficientSupply { .. }) => Outcome::NoSupply,
        Err(e) => Outcome::Refused {
            reason: e.to_string(),
        },
    };

    info!(customer = %customer.name, ?outcome, "left the station");
    Visit { customer, outcome }
}
