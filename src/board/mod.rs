//! Board and checklist state engine.
//!
//! The board is an ordered sequence of cards. Lanes are derived from it by
//! stage, drag gestures are translated into board reorders, and the detail
//! projection is resolved from the board on every read so it can never go
//! stale. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Engine limits and defaults in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
