/// Bitset of still-possible tiles for one cell
pub mod bitset;
/// Edge index over the tile catalog used during propagation
pub mod cache;
/// Solver orchestration, configuration and one-call generation
pub mod executor;
/// Constraint propagation to a fixed point with contradiction detection
pub mod propagation;
/// Minimum-entropy cell choice, weighted collapse and the random source
pub mod selection;
