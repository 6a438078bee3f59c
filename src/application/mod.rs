//! Application layer containing the station's business logic.
//!
//! This module defines the `StationEngine`, which serializes every purchase
//! behind one lock, the first-fit pump selection policy, and the rush driver
//! that releases a batch of customers onto the engine at once.

pub mod dispatch;
pub mod engine;
pub mod rush;
