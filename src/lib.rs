//! Cardwall: board and checklist state engine for project cards.
//!
//! This crate tracks work items ("cards") through a fixed set of pipeline
//! stages, keeps a checklist of sub-tasks on each card, reorders cards across
//! stages from drag gestures, and keeps an optional detail view of one card
//! consistent with the board.
//!
//! # Architecture
//!
//! Cardwall follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence and identifiers
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Board store, lane derivation, drag reordering, checklists and
//!   the create/edit/delete workflow

pub mod board;
