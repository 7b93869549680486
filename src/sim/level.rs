//! Level geometry and the level catalog
//!
//! A level is a flat strip of ground `ground_width` units wide with obstacles
//! placed along it. Obstacle heights are measured up from the ground surface.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tuning::Tuning;

/// Errors from loading a custom level catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no levels")]
    Empty,

    #[error("level {index} has no room for the duck at its spawn point")]
    LevelTooNarrow { index: usize },
}

/// A static piece of level geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Obstacle {
    /// Solid block standing on the ground
    Block { x: f32, width: f32, height: f32 },
    /// Missing ground
    Gap { x: f32, width: f32 },
    /// End-of-level flag, never collides
    Finish { x: f32, width: f32, height: f32 },
}

impl Obstacle {
    /// Left edge and width of the obstacle's horizontal span
    pub fn span(&self) -> (f32, f32) {
        match *self {
            Obstacle::Block { x, width, .. }
            | Obstacle::Gap { x, width }
            | Obstacle::Finish { x, width, .. } => (x, width),
        }
    }

    pub fn is_hazard(&self) -> bool {
        !matches!(self, Obstacle::Finish { .. })
    }
}

/// One level: obstacles in placement order plus the traversable width
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub obstacles: Vec<Obstacle>,
    #[serde(alias = "groundWidth")]
    pub ground_width: f32,
}

impl Level {
    pub fn new(obstacles: Vec<Obstacle>, ground_width: f32) -> Self {
        Self {
            obstacles,
            ground_width,
        }
    }

    /// Largest x the duck's left edge may reach
    #[inline]
    pub fn max_x(&self, actor_size: f32) -> f32 {
        (self.ground_width - actor_size).max(0.0)
    }

    /// Whether a gap swallows the whole footprint `[x, x + width)`
    pub fn over_gap(&self, x: f32, width: f32) -> bool {
        self.obstacles.iter().any(|o| match *o {
            Obstacle::Gap { x: gx, width: gw } => x >= gx && x + width <= gx + gw,
            _ => false,
        })
    }

    /// Gap overlapping the footprint `[x, x + width)`, as `(x, width)`
    pub fn gap_at(&self, x: f32, width: f32) -> Option<(f32, f32)> {
        self.obstacles.iter().find_map(|o| match *o {
            Obstacle::Gap { x: gx, width: gw } if x + width > gx && x < gx + gw => Some((gx, gw)),
            _ => None,
        })
    }
}

/// Ordered, immutable list of levels (never empty)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl Default for LevelCatalog {
    /// The built-in three-level campaign
    fn default() -> Self {
        use Obstacle::*;

        Self {
            levels: vec![
                Level::new(
                    vec![
                        Block { x: 200.0, width: 40.0, height: 40.0 },
                        Block { x: 400.0, width: 40.0, height: 60.0 },
                        Block { x: 600.0, width: 40.0, height: 50.0 },
                    ],
                    1200.0,
                ),
                Level::new(
                    vec![
                        Block { x: 200.0, width: 40.0, height: 40.0 },
                        Block { x: 500.0, width: 40.0, height: 60.0 },
                        Block { x: 700.0, width: 40.0, height: 80.0 },
                    ],
                    1500.0,
                ),
                Level::new(
                    vec![
                        Block { x: 300.0, width: 40.0, height: 60.0 },
                        Gap { x: 600.0, width: 100.0 },
                        Block { x: 800.0, width: 40.0, height: 70.0 },
                        Finish { x: 1800.0, width: 40.0, height: 120.0 },
                    ],
                    1840.0,
                ),
            ],
        }
    }
}

impl LevelCatalog {
    /// Build a catalog from levels, rejecting ones the duck cannot spawn in
    ///
    /// The spawn point `start_x` must lie within `[0, ground_width - actor_size]`
    /// of every level.
    pub fn new(levels: Vec<Level>, tuning: &Tuning) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }
        if let Some(index) = levels
            .iter()
            .position(|l| l.ground_width - tuning.actor_size < tuning.start_x)
        {
            return Err(CatalogError::LevelTooNarrow { index });
        }
        Ok(Self { levels })
    }

    /// Parse a JSON array of levels
    pub fn from_json(json: &str, tuning: &Tuning) -> Result<Self, CatalogError> {
        let levels: Vec<Level> = serde_json::from_str(json)?;
        Self::new(levels, tuning)
    }

    /// Level at `index`. Out-of-range indices are a logic error and panic.
    #[inline]
    pub fn level(&self, index: usize) -> &Level {
        &self.levels[index]
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    #[inline]
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.levels.len()
    }
}
