use crate::entities::{Entity, EntityTracker};
use crate::error::MapError;
use crate::grid_map::{Cell, GridMap};
use crate::solver::astar::AstarSolver;
use crate::solver::{Route, RouteSolver};
use crate::terrain::TerrainDistribution;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

pub const MAX_WIDTH: usize = 110;
pub const MAX_HEIGHT: usize = 60;

#[derive(Clone, Debug)]
pub struct WorldConfig {
    pub max_width: usize,
    pub max_height: usize,
    /// Seed for map generation. Without one the generator is seeded from entropy.
    pub seed: Option<u64>,
    pub distribution: TerrainDistribution,
}

impl Default for WorldConfig {
    fn default() -> WorldConfig {
        WorldConfig {
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
            seed: None,
            distribution: TerrainDistribution::default(),
        }
    }
}

/// Owns the current map, the entity positions and the random source used to generate
/// maps. Until [generate](World::generate) succeeds the map is empty and every lookup
/// is out of bounds.
#[derive(Clone, Debug)]
pub struct World {
    config: WorldConfig,
    map: GridMap,
    entities: EntityTracker,
    solver: AstarSolver,
    rng: StdRng,
}

impl Default for World {
    fn default() -> World {
        World::new(WorldConfig::default())
    }
}

impl World {
    pub fn new(config: WorldConfig) -> World {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        World {
            config,
            map: GridMap::default(),
            entities: EntityTracker::new(),
            solver: AstarSolver::new(),
            rng,
        }
    }

    pub fn with_seed(seed: u64) -> World {
        World::new(WorldConfig {
            seed: Some(seed),
            ..WorldConfig::default()
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }
    pub fn map(&self) -> &GridMap {
        &self.map
    }
    pub fn entities(&self) -> &EntityTracker {
        &self.entities
    }

    /// Replaces the map with a freshly generated one and clears both entities, whose
    /// positions referred to the old map.
    pub fn generate(&mut self, width: usize, height: usize) -> Result<(), MapError> {
        self.check_size(width, height)?;
        self.map = GridMap::generate(width, height, &self.config.distribution, &mut self.rng)?;
        self.entities.clear();
        Ok(())
    }

    /// Installs an existing map, e.g. one parsed from its text form. The map is subject
    /// to the same size limit as generated ones.
    pub fn load(&mut self, map: GridMap) -> Result<(), MapError> {
        self.check_size(map.width(), map.height())?;
        info!("Loaded {}x{} terrain map", map.width(), map.height());
        self.map = map;
        self.entities.clear();
        Ok(())
    }

    fn check_size(&self, width: usize, height: usize) -> Result<(), MapError> {
        if width > self.config.max_width || height > self.config.max_height {
            return Err(MapError::TooLarge {
                width,
                height,
                max_width: self.config.max_width,
                max_height: self.config.max_height,
            });
        }
        Ok(())
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, MapError> {
        self.map.cell_at(x, y)
    }

    pub fn neighbours_of(&self, cell: &Cell) -> Result<SmallVec<[Cell; 4]>, MapError> {
        self.map.neighbours(cell)
    }

    pub fn find_path(&self, start: &Cell, end: &Cell) -> Result<Option<Route>, MapError> {
        self.solver.find_shortest_path(&self.map, start, end)
    }

    /// Route from the traveler to the destination. Both must have been placed.
    pub fn find_route(&self) -> Result<Option<Route>, MapError> {
        let start = self.placed(Entity::Traveler)?;
        let end = self.placed(Entity::Destination)?;
        let route = self.find_path(&start, &end)?;
        match &route {
            Some(route) => debug!("Route of {} cells costs {}", route.len(), route.cost),
            None => debug!("No route from {} to {}", start, end),
        }
        Ok(route)
    }

    fn placed(&self, entity: Entity) -> Result<Cell, MapError> {
        self.entities
            .position(entity)
            .ok_or_else(|| MapError::invalid(format!("the {entity} has not been placed")))
    }

    pub fn place_traveler(&mut self, cell: &Cell) -> Result<Option<Cell>, MapError> {
        self.entities.place_traveler(&self.map, cell)
    }

    pub fn place_destination(&mut self, cell: &Cell) -> Result<Option<Cell>, MapError> {
        self.entities.place_destination(&self.map, cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::TerrainKind;

    #[test]
    fn rejects_oversized_maps() {
        let mut world = World::with_seed(0);
        assert_eq!(
            world.generate(111, 10),
            Err(MapError::TooLarge {
                width: 111,
                height: 10,
                max_width: 110,
                max_height: 60
            })
        );
        assert!(world.generate(10, 61).is_err());
        assert!(matches!(
            world.generate(0, 10),
            Err(MapError::InvalidArgument(_))
        ));
        assert!(world.generate(110, 60).is_ok());
    }

    #[test]
    fn rejects_oversized_loaded_maps() {
        let mut world = World::with_seed(0);
        world.load(GridMap::from_rows(&["..."]).unwrap()).unwrap();
        let oversized =
            GridMap::from_terrain(200, 100, vec![TerrainKind::Field; 200 * 100]).unwrap();
        assert!(matches!(
            world.load(oversized),
            Err(MapError::TooLarge {
                width: 200,
                height: 100,
                ..
            })
        ));
        // The previous map stays in place.
        assert_eq!((world.map().width(), world.map().height()), (3, 1));
        assert!(matches!(
            world.cell_at(150, 80),
            Err(MapError::OutOfBounds { .. })
        ));
        let widest = GridMap::from_terrain(110, 60, vec![TerrainKind::Forest; 110 * 60]).unwrap();
        assert!(world.load(widest).is_ok());
    }

    #[test]
    fn empty_until_generated() {
        let world = World::with_seed(0);
        assert!(matches!(
            world.cell_at(0, 0),
            Err(MapError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn regeneration_invalidates_old_coordinates() {
        let mut world = World::with_seed(1);
        world.generate(20, 20).unwrap();
        assert!(world.cell_at(15, 15).is_ok());
        world.generate(10, 10).unwrap();
        assert!(matches!(
            world.cell_at(15, 15),
            Err(MapError::OutOfBounds {
                x: 15,
                y: 15,
                width: 10,
                height: 10
            })
        ));
    }

    #[test]
    fn seeded_worlds_match() {
        let mut a = World::with_seed(42);
        let mut b = World::with_seed(42);
        a.generate(30, 20).unwrap();
        b.generate(30, 20).unwrap();
        assert_eq!(a.map().to_string(), b.map().to_string());
    }

    #[test]
    fn route_between_entities() {
        let mut world = World::with_seed(0);
        //  ____
        // |S.~G|
        // |.T..|
        //  ____
        world.load("..~.\n.T..\n".parse().unwrap()).unwrap();
        assert!(matches!(
            world.find_route(),
            Err(MapError::InvalidArgument(_))
        ));
        let start = world.cell_at(0, 0).unwrap();
        let end = world.cell_at(3, 0).unwrap();
        assert_eq!(world.place_traveler(&start), Ok(None));
        assert!(matches!(
            world.find_route(),
            Err(MapError::InvalidArgument(_))
        ));
        assert_eq!(world.place_destination(&end), Ok(None));
        let route = world.find_route().unwrap().unwrap();
        // Every route has to cross the forest at (1, 1).
        assert_eq!(route.start(), Some(&start));
        assert_eq!(route.goal(), Some(&end));
        assert_eq!(route.cost, 7);
        assert!(route.cells.iter().all(|c| c.terrain != TerrainKind::Water));
    }

    #[test]
    fn generation_clears_entities() {
        let mut world = World::with_seed(5);
        world.load(GridMap::from_rows(&["..."]).unwrap()).unwrap();
        let cell = world.cell_at(1, 0).unwrap();
        world.place_traveler(&cell).unwrap();
        world.generate(5, 5).unwrap();
        assert_eq!(world.entities().traveler(), None);
    }

    #[test]
    fn neighbours_through_world() {
        let mut world = World::default();
        world.load(GridMap::from_rows(&["~.~", "...", "~.~"]).unwrap()).unwrap();
        let centre = world.cell_at(1, 1).unwrap();
        assert_eq!(world.neighbours_of(&centre).unwrap().len(), 4);
        let corner = world.cell_at(0, 0).unwrap();
        assert_eq!(world.neighbours_of(&corner).unwrap().len(), 2);
    }
}
