//! Adapter implementations of board ports.

pub mod ids;
pub mod memory;
