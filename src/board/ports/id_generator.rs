//! Identifier generation port.

/// Source of fresh identifiers for cards and checklist tasks.
///
/// Implementations must not repeat an identifier for the lifetime of a
/// board. The store still checks every generated identifier and rejects the
/// operation if one collides.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Returns the next identifier.
    fn next_id(&self) -> String;
}
