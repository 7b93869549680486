//! Duck Dash - A side-scrolling platformer with a charge jump
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `platform`: Fixed-timestep driver and browser host bindings
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod sim;
pub mod tuning;

pub use platform::FixedTimestep;
pub use sim::{Game, GamePhase, GameSnapshot, LevelCatalog};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (~60 Hz)
    pub const TICK_MS: f32 = 16.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Downward acceleration per tick while airborne
    pub const GRAVITY: f32 = 0.8;
    /// Launch velocity with no charge (negative is up)
    pub const MIN_JUMP_FORCE: f32 = -15.0;
    /// Strongest launch velocity
    pub const MAX_JUMP_FORCE: f32 = -25.0;
    /// Horizontal speed per tick
    pub const MOVE_SPEED: f32 = 5.0;
    /// Charge gained per tick while the jump is held
    pub const CHARGE_RATE: f32 = 1.5;

    /// Y coordinate of the ground surface
    pub const GROUND_HEIGHT: f32 = 480.0;
    /// The duck is a square bounding box
    pub const ACTOR_SIZE: f32 = 40.0;
    /// Spawn x at the start of every level
    pub const START_X: f32 = 50.0;

    pub const INITIAL_LIVES: u8 = 3;

    /// Camera scrolls once the duck passes this x
    pub const CAMERA_DEAD_ZONE: f32 = 300.0;
    /// Level completes when the duck is this close to the right edge
    pub const PROGRESS_MARGIN: f32 = 100.0;
    /// How far below the ground surface the duck must sink into a gap
    pub const GAP_TOLERANCE: f32 = 20.0;
}
