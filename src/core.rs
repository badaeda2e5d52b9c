//! The storage contract and the types it is expressed in.
//!
//! Everything else in the crate (the [`Graph`](crate::graph::Graph) facade,
//! traversals, algorithms) is written against the [`Graphable`] trait, never
//! against a concrete [storage](crate::storage).

pub mod edge;
pub mod error;
pub mod graphable;
pub mod marker;

pub use edge::Edge;
pub use error::{AddEdgeError, AddEdgeErrorKind, CapacityError};
pub use graphable::{Graphable, VertexType};
pub use marker::Direction;
