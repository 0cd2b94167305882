//! Trip estimator server.
//!
//! A web service that answers: "how far, how long and how much is it to get
//! from here to there by this mode of transport?" by asking the Google
//! Routes API and normalizing its answer.

pub mod domain;
pub mod itinerary;
pub mod routes_api;
pub mod web;
