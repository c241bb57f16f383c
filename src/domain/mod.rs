pub mod item;
pub mod supplier;

/// Entity identifiers fit a single signed byte; the public API accepts
/// `0..=127` and rejects everything else before it reaches the backend.
pub type EntityId = i8;
