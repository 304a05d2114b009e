use grid_util::point::Point;

use crate::solver::{manhattan_distance, RouteSolver};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the heuristic. Values above 1.0 expand fewer nodes but may return
    /// routes that are not of minimal cost. Negative and NaN factors are treated as 0,
    /// which degrades the search to Dijkstra.
    pub heuristic_factor: f32,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl RouteSolver for AstarSolver {
    /// Manhattan distance times the heuristic factor. Every step costs at least 1, so
    /// with the default factor this never overestimates.
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        // f32::max returns the other operand for NaN
        let factor = self.heuristic_factor.max(0.0);
        (manhattan_distance(p1, p2) as f32 * factor) as i32
    }
}
