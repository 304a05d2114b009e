//! # terrain_pathfinding
//!
//! Random terrain maps and weighted shortest routes on a 4-connected grid. Every cell is
//! [Field](TerrainKind::Field), [Forest](TerrainKind::Forest) or
//! [Water](TerrainKind::Water); water blocks movement and forest doubles the cost of
//! every step entering or leaving it. Routes are found with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) using the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//! Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! [World] bundles a map, a traveler and a destination behind the operations a
//! front end needs.
pub mod entities;
pub mod error;
pub mod grid_map;
mod search;
pub mod solver;
pub mod terrain;
pub mod world;

pub use crate::entities::{Entity, EntityTracker};
pub use crate::error::MapError;
pub use crate::grid_map::{Cell, GridMap};
pub use crate::solver::{astar::AstarSolver, dijkstra::DijkstraSolver, Route, RouteSolver};
pub use crate::terrain::{TerrainDistribution, TerrainKind};
pub use crate::world::{World, WorldConfig};
pub use grid_util::point::Point;
