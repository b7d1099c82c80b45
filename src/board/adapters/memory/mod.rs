//! In-memory adapters for hosts without durable storage and for tests.

mod board;

pub use board::InMemoryBoardRepository;
