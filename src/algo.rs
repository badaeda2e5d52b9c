//! Algorithms built on top of the traversals.

pub mod connected;
pub mod cycle;
pub mod toposort;

pub use connected::is_connected;
pub use cycle::is_cyclic;
pub use toposort::toposort;
