//! Transit route finder server.
//!
//! A web application that answers: "which stations do I ride through to
//! get from here to there with the fewest hops?"

pub mod cache;
pub mod config;
pub mod domain;
pub mod graph;
pub mod network;
pub mod pata;
pub mod planner;
pub mod web;
