/// Direction of edges incident to a vertex, relative to that vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Outgoing,
    Incoming,
}

pub use Direction::*;

impl Direction {
    pub fn all() -> [Direction; 2] {
        [Outgoing, Incoming]
    }
}
