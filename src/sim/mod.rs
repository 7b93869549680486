//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Input consumed only at tick boundaries
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod game;
pub mod level;
pub mod physics;
pub mod state;
pub mod tick;

pub use camera::camera_offset;
pub use collision::{check_collision, hits_obstacle, spans_overlap};
pub use game::{Game, GameSnapshot};
pub use level::{CatalogError, Level, LevelCatalog, Obstacle};
pub use physics::{MovementIntent, accumulate_charge, begin_charge, integrate, release_jump};
pub use state::{Actor, ActorSnapshot, GamePhase, GameState};
pub use tick::{GameEvent, JumpEdge, TickInput, tick};
