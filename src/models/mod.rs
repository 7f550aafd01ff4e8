pub mod node;

pub use node::{Neighbor, Node, TraversalDirection};
