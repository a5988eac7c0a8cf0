//! Brickrush - a fixed-timestep brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, fixed-step tick)
//! - `input`: Shared control-intent flags sampled by the frontend
//! - `app`: eframe frontend with accumulator loop and extrapolated drawing
//! - `assets`: Font/asset resolution
//! - `settings`: Preferences and collision tuning

pub mod app;
pub mod assets;
pub mod input;
pub mod settings;
pub mod sim;

pub use settings::{Settings, Tuning};

use glam::Vec2;
use log::LevelFilter;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep. Deliberately finer than common display
    /// refresh rates, so physics fidelity never depends on frame rate.
    pub const SIM_DT: f32 = 1.0 / 299.0;
    /// Maximum sim steps per frame to prevent spiral of death
    pub const MAX_STEPS_PER_FRAME: u32 = 16;

    /// Logical arena the simulation runs in; the frontend scales to the window
    pub const ARENA_WIDTH: f32 = 1920.0;
    pub const ARENA_HEIGHT: f32 = 1080.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 16.0;
    pub const BALL_SPEED: f32 = 450.0; // pixels / s
    /// Collider shrink relative to the ball's bounding box, softens corner hits
    pub const BALL_COLLIDER_SCALE: f32 = 0.75;
    /// Ball spawns this far above the bottom edge
    pub const BALL_SPAWN_MARGIN: f32 = 100.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 200.0;
    pub const PADDLE_HEIGHT: f32 = 40.0;
    pub const PADDLE_SPEED: f32 = 600.0; // pixels / s
    /// Paddle center rests this far above the bottom edge
    pub const PADDLE_BOTTOM_MARGIN: f32 = 25.0;

    /// Aim indicator
    pub const AIM_ROTATION_SPEED: f32 = 100.0; // degrees / s
    pub const AIM_MAX_ANGLE: f32 = 60.0; // degrees off vertical
    pub const AIM_LENGTH: f32 = 70.0;
    pub const AIM_THICKNESS: f32 = 4.0;

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 150.0;
    pub const BRICK_HEIGHT: f32 = 40.0;
    pub const BRICK_GAP: f32 = 4.0;
    /// Shifts the whole grid left so the first column hugs the wall
    pub const BRICK_GRID_OFFSET: f32 = 5.0;
    pub const BRICK_COLUMNS: u32 = 8;
    pub const BRICK_ROWS: u32 = 5;
}

/// Unit vector of `v`, or zero when `v` is degenerate.
///
/// Callers are expected to keep direction vectors unit length; this guard
/// turns a zero vector into "no movement" instead of NaN.
#[inline]
pub fn unit_or_zero(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

pub fn init_logging() {
    env_logger::builder()
        .format_target(false)
        .format_timestamp_secs()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init()
}
