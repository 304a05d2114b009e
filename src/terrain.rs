use crate::error::MapError;
use core::fmt;
use rand::Rng;

/// The kinds of terrain a map cell can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerrainKind {
    Field,
    Forest,
    Water,
}

impl TerrainKind {
    pub const ALL: [TerrainKind; 3] = [TerrainKind::Field, TerrainKind::Forest, TerrainKind::Water];

    pub fn is_passable(self) -> bool {
        self != TerrainKind::Water
    }

    /// Multiplier applied to every step entering or leaving a cell of this kind.
    /// [None] for impassable terrain.
    pub fn move_cost(self) -> Option<i32> {
        match self {
            TerrainKind::Field => Some(1),
            TerrainKind::Forest => Some(2),
            TerrainKind::Water => None,
        }
    }

    /// Character used by the text form of a map.
    pub fn symbol(self) -> char {
        match self {
            TerrainKind::Field => '.',
            TerrainKind::Forest => 'T',
            TerrainKind::Water => '~',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<TerrainKind> {
        TerrainKind::ALL.into_iter().find(|kind| kind.symbol() == symbol)
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TerrainKind::Field => "field",
            TerrainKind::Forest => "forest",
            TerrainKind::Water => "water",
        };
        f.write_str(name)
    }
}

/// Categorical distribution used during map generation. A roll `r` drawn uniformly
/// from `0..100` becomes Field below `field_below`, Forest below `forest_below` and
/// Water otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerrainDistribution {
    field_below: u32,
    forest_below: u32,
}

impl Default for TerrainDistribution {
    fn default() -> TerrainDistribution {
        TerrainDistribution {
            field_below: 40,
            forest_below: 70,
        }
    }
}

impl TerrainDistribution {
    pub const ROLL_RANGE: u32 = 100;

    pub fn new(field_below: u32, forest_below: u32) -> Result<TerrainDistribution, MapError> {
        if field_below > forest_below || forest_below > Self::ROLL_RANGE {
            return Err(MapError::invalid(format!(
                "terrain thresholds must satisfy {field_below} <= {forest_below} <= {}",
                Self::ROLL_RANGE
            )));
        }
        Ok(TerrainDistribution {
            field_below,
            forest_below,
        })
    }

    pub fn from_roll(&self, roll: u32) -> TerrainKind {
        if roll < self.field_below {
            TerrainKind::Field
        } else if roll < self.forest_below {
            TerrainKind::Forest
        } else {
            TerrainKind::Water
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TerrainKind {
        self.from_roll(rng.gen_range(0..Self::ROLL_RANGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_water_blocks() {
        assert!(TerrainKind::Field.is_passable());
        assert!(TerrainKind::Forest.is_passable());
        assert!(!TerrainKind::Water.is_passable());
        assert_eq!(TerrainKind::Water.move_cost(), None);
        assert!(TerrainKind::Forest.move_cost() > TerrainKind::Field.move_cost());
    }

    #[test]
    fn symbols_are_distinct() {
        for kind in TerrainKind::ALL {
            assert_eq!(TerrainKind::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(TerrainKind::from_symbol('#'), None);
    }

    /// The default thresholds split the roll range 40/30/30.
    #[test]
    fn default_thresholds() {
        let dist = TerrainDistribution::default();
        assert_eq!(dist.from_roll(0), TerrainKind::Field);
        assert_eq!(dist.from_roll(39), TerrainKind::Field);
        assert_eq!(dist.from_roll(40), TerrainKind::Forest);
        assert_eq!(dist.from_roll(69), TerrainKind::Forest);
        assert_eq!(dist.from_roll(70), TerrainKind::Water);
        assert_eq!(dist.from_roll(99), TerrainKind::Water);
    }

    #[test]
    fn rejects_unordered_thresholds() {
        assert!(TerrainDistribution::new(70, 40).is_err());
        assert!(TerrainDistribution::new(40, 101).is_err());
        assert!(TerrainDistribution::new(100, 100).is_ok());
    }
}
