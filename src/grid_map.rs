use crate::error::MapError;
use crate::terrain::{TerrainDistribution, TerrainKind};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;
use grid_util::point::Point;
use itertools::iproduct;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use rand::Rng;
use smallvec::SmallVec;

/// Offsets of the 4-neighbourhood, in the order left, right, up, down.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A single map position together with its terrain. Cells compare and hash by
/// position only.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub position: Point,
    pub terrain: TerrainKind,
}

impl Cell {
    pub fn new(x: i32, y: i32, terrain: TerrainKind) -> Cell {
        Cell {
            position: Point::new(x, y),
            terrain,
        }
    }
    pub fn x(&self) -> i32 {
        self.position.x
    }
    pub fn y(&self) -> i32 {
        self.position.y
    }
    pub fn is_passable(&self) -> bool {
        self.terrain.is_passable()
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}) {}", self.x(), self.y(), self.terrain)
    }
}

/// [GridMap] stores the terrain of a `width * height` map in a flat row-major array and
/// maintains the connected components of its passable cells using a [UnionFind]
/// structure, so that unreachable queries can be answered without searching.
#[derive(Clone, Debug)]
pub struct GridMap {
    width: usize,
    height: usize,
    terrain: Vec<TerrainKind>,
    components: UnionFind<usize>,
}

impl Default for GridMap {
    fn default() -> GridMap {
        GridMap {
            width: 0,
            height: 0,
            terrain: Vec::new(),
            components: UnionFind::new(0),
        }
    }
}

/// Returns the number of cells of a `width * height` map. Both dimensions must be
/// positive and addressable by `i32` coordinates.
fn check_dimensions(width: usize, height: usize) -> Result<usize, MapError> {
    if width == 0 || height == 0 {
        return Err(MapError::invalid(format!(
            "map dimensions must be positive, got {width}x{height}"
        )));
    }
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(MapError::invalid(format!(
            "map dimensions {width}x{height} exceed the coordinate range"
        )));
    }
    width.checked_mul(height).ok_or_else(|| {
        MapError::invalid(format!("a {width}x{height} map has too many cells"))
    })
}

impl GridMap {
    /// Draws an independent terrain kind for every cell from `distribution`.
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        distribution: &TerrainDistribution,
        rng: &mut R,
    ) -> Result<GridMap, MapError> {
        let len = check_dimensions(width, height)?;
        let terrain = (0..len)
            .map(|_| distribution.sample(&mut *rng))
            .collect::<Vec<TerrainKind>>();
        info!("Generated {}x{} terrain map", width, height);
        Ok(GridMap::build(width, height, terrain))
    }

    /// Builds a map from row-major terrain values.
    pub fn from_terrain(
        width: usize,
        height: usize,
        terrain: Vec<TerrainKind>,
    ) -> Result<GridMap, MapError> {
        let len = check_dimensions(width, height)?;
        if terrain.len() != len {
            return Err(MapError::invalid(format!(
                "expected {len} terrain values for a {width}x{height} map, got {}",
                terrain.len()
            )));
        }
        Ok(GridMap::build(width, height, terrain))
    }

    /// Parses the text form of a map, one row per string. See [TerrainKind::symbol].
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<GridMap, MapError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut terrain = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(MapError::invalid(format!(
                    "row {y} has {} cells, expected {width}",
                    row.chars().count()
                )));
            }
            for symbol in row.chars() {
                let kind = TerrainKind::from_symbol(symbol).ok_or_else(|| {
                    MapError::invalid(format!("unknown terrain symbol {symbol:?} in row {y}"))
                })?;
                terrain.push(kind);
            }
        }
        GridMap::from_terrain(width, height, terrain)
    }

    fn build(width: usize, height: usize, terrain: Vec<TerrainKind>) -> GridMap {
        let mut map = GridMap {
            width,
            height,
            terrain,
            components: UnionFind::new(width * height),
        };
        map.generate_components();
        map
    }

    /// Links every passable cell to its passable right and lower neighbours.
    fn generate_components(&mut self) {
        info!("Generating connected components");
        self.components = UnionFind::new(self.width * self.height);
        for (y, x) in iproduct!(0..self.height as i32, 0..self.width as i32) {
            let point = Point::new(x, y);
            if !self.can_move_to(point) {
                continue;
            }
            let parent_ix = self.ix(point);
            for n in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                if self.can_move_to(n) {
                    let ix = self.ix(n);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    fn ix(&self, point: Point) -> usize {
        point.y as usize * self.width + point.x as usize
    }

    pub(crate) fn can_move_to(&self, point: Point) -> bool {
        self.in_bounds(point) && self.terrain[self.ix(point)].is_passable()
    }

    fn check_bounds(&self, point: Point) -> Result<(), MapError> {
        if self.in_bounds(point) {
            Ok(())
        } else {
            Err(MapError::OutOfBounds {
                x: point.x,
                y: point.y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Unchecked lookup; `point` must be in bounds.
    pub(crate) fn cell(&self, point: Point) -> Cell {
        Cell {
            position: point,
            terrain: self.terrain[self.ix(point)],
        }
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, MapError> {
        let point = Point::new(x, y);
        self.check_bounds(point)?;
        Ok(self.cell(point))
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        iproduct!(0..self.height as i32, 0..self.width as i32)
            .map(move |(y, x)| self.cell(Point::new(x, y)))
    }

    /// The orthogonally adjacent cells of `cell` that are on the map and passable.
    pub fn neighbours(&self, cell: &Cell) -> Result<SmallVec<[Cell; 4]>, MapError> {
        self.check_bounds(cell.position)?;
        Ok(self.passable_neighbours(cell.position))
    }

    pub(crate) fn passable_neighbours(&self, point: Point) -> SmallVec<[Cell; 4]> {
        NEUMANN_OFFSETS
            .iter()
            .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|&p| self.can_move_to(p))
            .map(|p| self.cell(p))
            .collect()
    }

    /// Retrieves the component id a given [Point] belongs to. `point` must be in bounds.
    pub fn get_component(&self, point: Point) -> usize {
        self.components.find(self.ix(point))
    }

    /// Checks if both cells are passable and on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        if !self.can_move_to(start.position) || !self.can_move_to(goal.position) {
            return false;
        }
        let equiv = self
            .components
            .equiv(self.ix(start.position), self.ix(goal.position));
        if !equiv {
            debug!("{} and {} are on different components", start, goal);
        }
        equiv
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.terrain.chunks(self.width.max(1)) {
            let line = row.iter().map(|kind| kind.symbol()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for GridMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<GridMap, MapError> {
        let rows = s.lines().collect::<Vec<&str>>();
        GridMap::from_rows(&rows)
    }
}
