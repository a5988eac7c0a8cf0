//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (bricks stay in row-major insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{ball_brick_collision, ball_paddle_collision, Aabb};
pub use state::{Ball, Brick, GamePhase, GameState, Paddle};
pub use tick::{tick, TickInput};
