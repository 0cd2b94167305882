//! Domain types for the trip estimator.
//!
//! These are the validated values handed back to callers. They are built
//! once from a provider response and never mutated afterwards.

mod coordinates;
mod route;
mod transportation;

pub use coordinates::Coordinates;
pub use route::Route;
pub use transportation::{InvalidTransportationMode, Transportation, TransportationMode};
