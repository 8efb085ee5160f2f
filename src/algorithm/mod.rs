pub mod traits;
pub mod brute_force;
pub mod dijkstra;

pub use traits::{DistanceMap, ShortestPathAlgorithm};
