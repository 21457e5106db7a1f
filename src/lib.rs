//! Converts a Flighty flight-log export into FlightRadar24 or AirTrail
//! import files.
//!
//! The [`knowledge::knowledge_base::KnowledgeBase`] is the core: airport and
//! airline resolution, aircraft type matching and time-zone aware flight
//! durations over pre-loaded reference tables.

pub mod aircraft;
pub mod airline;
pub mod airport;
pub mod error;
pub mod export;
pub mod flight;
pub mod knowledge;
pub mod reference;
pub mod time;
