//! waypoint-core — Assessment scoring and career pathway matching.
//!
//! This crate defines the content data model, the profile calculators, and
//! the pathway matching engine that the rest of the waypoint system builds on.

pub mod confidence;
pub mod content;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod model;
pub mod profile;
pub mod recommend;
pub mod report;
pub mod session;
pub mod tags;
