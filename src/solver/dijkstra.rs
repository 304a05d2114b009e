use grid_util::point::Point;

use crate::solver::RouteSolver;

/// Uninformed search; expands nodes purely by accumulated cost.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl RouteSolver for DijkstraSolver {
    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }
}
