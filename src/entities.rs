use crate::error::MapError;
use crate::grid_map::{Cell, GridMap};
use core::fmt;
use log::debug;

/// The two placeable entities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Traveler,
    Destination,
}

impl Entity {
    fn other(self) -> Entity {
        match self {
            Entity::Traveler => Entity::Destination,
            Entity::Destination => Entity::Traveler,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Entity::Traveler => f.write_str("traveler"),
            Entity::Destination => f.write_str("destination"),
        }
    }
}

/// Current positions of the traveler and the destination. Both must stand on passable
/// terrain and never share a cell.
#[derive(Clone, Debug, Default)]
pub struct EntityTracker {
    traveler: Option<Cell>,
    destination: Option<Cell>,
}

impl EntityTracker {
    pub fn new() -> EntityTracker {
        EntityTracker::default()
    }

    pub fn traveler(&self) -> Option<Cell> {
        self.traveler
    }
    pub fn destination(&self) -> Option<Cell> {
        self.destination
    }

    pub fn position(&self, entity: Entity) -> Option<Cell> {
        match entity {
            Entity::Traveler => self.traveler,
            Entity::Destination => self.destination,
        }
    }

    fn slot(&mut self, entity: Entity) -> &mut Option<Cell> {
        match entity {
            Entity::Traveler => &mut self.traveler,
            Entity::Destination => &mut self.destination,
        }
    }

    /// Moves `entity` to `cell` and returns its previous position. The terrain is taken
    /// from `map`. On error the stored position is left untouched.
    pub fn place(
        &mut self,
        entity: Entity,
        map: &GridMap,
        cell: &Cell,
    ) -> Result<Option<Cell>, MapError> {
        let target = map.cell_at(cell.x(), cell.y())?;
        if !target.is_passable() {
            return Err(MapError::Impassable {
                x: target.x(),
                y: target.y(),
            });
        }
        if self.position(entity.other()) == Some(target) {
            return Err(MapError::Occupied {
                x: target.x(),
                y: target.y(),
            });
        }
        debug!("Placing {} at {}", entity, target);
        Ok(self.slot(entity).replace(target))
    }

    pub fn place_traveler(&mut self, map: &GridMap, cell: &Cell) -> Result<Option<Cell>, MapError> {
        self.place(Entity::Traveler, map, cell)
    }

    pub fn place_destination(
        &mut self,
        map: &GridMap,
        cell: &Cell,
    ) -> Result<Option<Cell>, MapError> {
        self.place(Entity::Destination, map, cell)
    }

    /// Forgets both positions.
    pub fn clear(&mut self) {
        self.traveler = None;
        self.destination = None;
    }
}
