//! Domain types: fuel grades, pumps, prices, sales statistics and the
//! selection policy port.

pub mod customer;
pub mod fuel;
pub mod ledger;
pub mod ports;
pub mod prices;
pub mod pump;
pub mod report;
