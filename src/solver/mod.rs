use crate::error::MapError;
use crate::grid_map::{Cell, GridMap};
use crate::search::astar;
use grid_util::point::Point;
use itertools::Itertools;
use log::{debug, warn};
use smallvec::SmallVec;

pub mod astar;
pub mod dijkstra;

/// Manhattan distance between two points.
pub fn manhattan_distance(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}

/// An ordered sequence of cells from start to goal, both inclusive, with its total cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub cells: Vec<Cell>,
    pub cost: i32,
}

impl Route {
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    /// Always false for routes returned by a solver, which hold at least the start cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn start(&self) -> Option<&Cell> {
        self.cells.first()
    }
    pub fn goal(&self) -> Option<&Cell> {
        self.cells.last()
    }
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().map(|c| c.position)
    }
}

pub trait RouteSolver {
    /// Estimate of the remaining cost from `p1` to `p2`.
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;

    /// Cost of moving from `from` to `to`: the Manhattan distance scaled by the move cost
    /// of both cells, so a step into or out of forest costs double and forest to forest
    /// costs four times a field step. [None] if either cell is impassable.
    fn cost(&self, from: &Cell, to: &Cell) -> Option<i32> {
        let distance = manhattan_distance(&from.position, &to.position);
        Some(distance * from.terrain.move_cost()? * to.terrain.move_cost()?)
    }

    fn successors(&self, map: &GridMap, node: &Point) -> SmallVec<[(Point, i32); 4]> {
        let current = map.cell(*node);
        map.passable_neighbours(*node)
            .into_iter()
            .filter_map(|n| self.cost(&current, &n).map(|c| (n.position, c)))
            .collect()
    }

    /// Recomputes the cost of following `cells` on `map`. [None] if a cell is off the
    /// map or impassable.
    fn route_cost(&self, map: &GridMap, cells: &[Cell]) -> Option<i32> {
        let cells = cells
            .iter()
            .map(|c| map.cell_at(c.x(), c.y()).ok())
            .collect::<Option<Vec<Cell>>>()?;
        cells
            .iter()
            .tuple_windows()
            .map(|(a, b)| self.cost(a, b))
            .sum()
    }

    /// Computes a minimal cost route from `start` to `end`. Fails only if an endpoint lies
    /// off the map; a well-formed query without a connecting route yields `Ok(None)`.
    /// The terrain of both endpoints is re-read from `map`.
    fn find_shortest_path(
        &self,
        map: &GridMap,
        start: &Cell,
        end: &Cell,
    ) -> Result<Option<Route>, MapError> {
        let start = map.cell_at(start.x(), start.y())?;
        let end = map.cell_at(end.x(), end.y())?;
        if start == end {
            return Ok(Some(Route {
                cells: vec![start],
                cost: 0,
            }));
        }
        // Check if start and goal are on the same connected component.
        if !map.reachable(&start, &end) {
            debug!("{} is not reachable from {}", end, start);
            return Ok(None);
        }
        debug!("{} is reachable from {}, computing path", end, start);
        let goal = end.position;
        let result = astar(
            &start.position,
            |node| self.successors(map, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        );
        match result {
            Some((points, cost)) => Ok(Some(Route {
                cells: points.into_iter().map(|p| map.cell(p)).collect(),
                cost,
            })),
            None => {
                warn!("Reachable goal could not be pathed to, is reachable graph correct?");
                Ok(None)
            }
        }
    }
}
