//! Game state and core simulation types
//!
//! One session owns one ball, one paddle and the brick grid. Entities never
//! reference each other; the collision resolver borrows what it needs for
//! the duration of one check.

use glam::Vec2;

use super::collision::Aabb;
use crate::consts::*;
use crate::settings::Tuning;
use crate::unit_or_zero;

/// Current phase of gameplay.
///
/// `GameOver` doubles as the awaiting-restart state: entering it immediately
/// starts presenting the restart prompt; there is no separate state between
/// losing the ball and waiting for confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball rides the paddle, waiting for launch input
    Serve,
    /// Active gameplay
    Playing,
    /// Ball went past the bottom edge; waiting for restart or quit
    GameOver,
}

/// The moving ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Unit direction of travel. Zero while attached during serve.
    pub dir: Vec2,
    pub radius: f32,
    pub speed: f32,
    /// Shrunk bounding box, recentred each step
    pub collider: Aabb,
    /// Set when the ball crosses the bottom edge; read by the tick
    pub hit_bottom: bool,
}

impl Ball {
    pub fn new(arena: Vec2) -> Self {
        let pos = Self::spawn_pos(arena);
        let collider_size = Vec2::splat(BALL_RADIUS * 2.0 * BALL_COLLIDER_SCALE);
        Self {
            pos,
            dir: Vec2::ZERO,
            radius: BALL_RADIUS,
            speed: BALL_SPEED,
            collider: Aabb::from_center(pos, collider_size),
            hit_bottom: false,
        }
    }

    fn spawn_pos(arena: Vec2) -> Vec2 {
        Vec2::new(arena.x / 2.0, arena.y - BALL_SPAWN_MARGIN)
    }

    /// Put the ball back at its spawn point, direction cleared for serve
    pub fn reset(&mut self, arena: Vec2) {
        self.pos = Self::spawn_pos(arena);
        self.dir = Vec2::ZERO;
        self.hit_bottom = false;
        self.collider.recenter(self.pos);
    }

    /// Displace by `speed * dt` along the unit direction of `dir`.
    ///
    /// Normalizing here keeps diagonal travel from being faster than axis
    /// travel even if a caller hands in a non-unit direction.
    pub fn move_by_speed(&mut self, dt: f32) {
        self.pos += unit_or_zero(self.dir) * self.speed * dt;
    }

    /// Advance one step: move, check the bottom edge, recentre the collider,
    /// bounce off the side and top walls.
    ///
    /// Crossing the bottom edge sets `hit_bottom` and returns immediately;
    /// the collider is left stale, which is fine since the session is ending.
    pub fn update(&mut self, dt: f32, arena: Vec2) {
        self.move_by_speed(dt);

        if self.pos.y + self.radius >= arena.y {
            self.hit_bottom = true;
            return;
        }

        self.collider.recenter(self.pos);

        if self.pos.x + self.radius >= arena.x || self.pos.x - self.radius <= 0.0 {
            self.dir.x = -self.dir.x;
        }

        if self.pos.y - self.radius <= 0.0 {
            self.dir.y = -self.dir.y;
        }
    }

    /// Rest on top of the paddle during serve
    pub fn follow_paddle(&mut self, paddle: &Paddle) {
        self.pos = Vec2::new(
            paddle.pos.x,
            paddle.pos.y - paddle.height / 2.0 - self.radius,
        );
        self.collider.recenter(self.pos);
    }
}

/// The player's paddle with its aim indicator
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    /// Applied horizontal intent in {-1, 0, +1}; kept so drawing can
    /// extrapolate the paddle the same way it was last moved
    pub vel_x: f32,
    /// Applied aim-rotation intent in {-1, 0, +1}
    pub aim_vel: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Exact bounding box
    pub collider: Aabb,
    /// Aim indicator angle in degrees off vertical, positive leaning right
    pub aim_angle: f32,
}

impl Paddle {
    pub fn new(arena: Vec2) -> Self {
        let pos = Self::spawn_pos(arena);
        Self {
            pos,
            vel_x: 0.0,
            aim_vel: 0.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            collider: Aabb::from_center(pos, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT)),
            aim_angle: 0.0,
        }
    }

    fn spawn_pos(arena: Vec2) -> Vec2 {
        Vec2::new(arena.x / 2.0, arena.y - PADDLE_BOTTOM_MARGIN)
    }

    pub fn reset(&mut self, arena: Vec2) {
        self.pos = Self::spawn_pos(arena);
        self.vel_x = 0.0;
        self.aim_vel = 0.0;
        self.aim_angle = 0.0;
        self.collider.recenter(self.pos);
    }

    /// Displace horizontally by the applied intent
    pub fn move_by_speed(&mut self, dt: f32) {
        self.pos.x += self.vel_x * self.speed * dt;
    }

    fn rotate_aim(&mut self, dt: f32) {
        self.aim_angle = (self.aim_angle + self.aim_vel * AIM_ROTATION_SPEED * dt)
            .clamp(-AIM_MAX_ANGLE, AIM_MAX_ANGLE);
    }

    /// Advance one step from the sampled intents: move, rotate the aim
    /// indicator, clamp into the arena, recompute the collider
    pub fn update(&mut self, dt: f32, move_dir: f32, aim_dir: f32, arena: Vec2) {
        self.vel_x = move_dir;
        self.aim_vel = aim_dir;

        self.move_by_speed(dt);
        self.rotate_aim(dt);

        self.pos.x = self
            .pos
            .x
            .clamp(self.width / 2.0, arena.x - self.width / 2.0);

        self.collider.recenter(self.pos);
    }

    /// Unit launch/reflection direction for the current aim angle.
    /// Zero degrees maps to straight up.
    pub fn aim_direction(&self) -> Vec2 {
        let theta = self.aim_angle.to_radians();
        Vec2::new(theta.sin(), -theta.cos())
    }
}

/// A destructible brick, static once placed
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub collider: Aabb,
    pub destroyed: bool,
}

impl Brick {
    /// Place a brick on the grid from its (column, row) cell
    pub fn new(column: u32, row: u32) -> Self {
        let pos = Vec2::new(
            (column + 1) as f32 * (BRICK_WIDTH + BRICK_GAP) - BRICK_GRID_OFFSET,
            (row + 2) as f32 * (BRICK_HEIGHT + BRICK_GAP),
        );
        Self {
            pos,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            collider: Aabb::from_center(pos, Vec2::new(BRICK_WIDTH, BRICK_HEIGHT)),
            destroyed: false,
        }
    }
}

/// Complete session state. Owns every entity; no globals, no singletons.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Logical playfield size
    pub arena: Vec2,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Row-major grid order; stable for deterministic iteration
    pub bricks: Vec<Brick>,
    pub score: u32,
    /// Simulation step counter
    pub time_ticks: u64,
    pub tuning: Tuning,
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        Self::with_arena(Vec2::new(ARENA_WIDTH, ARENA_HEIGHT), tuning)
    }

    pub fn with_arena(arena: Vec2, tuning: Tuning) -> Self {
        Self {
            arena,
            phase: GamePhase::Serve,
            ball: Ball::new(arena),
            paddle: Paddle::new(arena),
            bricks: Self::brick_grid(),
            score: 0,
            time_ticks: 0,
            tuning,
        }
    }

    fn brick_grid() -> Vec<Brick> {
        let mut bricks = Vec::with_capacity((BRICK_COLUMNS * BRICK_ROWS) as usize);
        for column in 0..BRICK_COLUMNS {
            for row in 0..BRICK_ROWS {
                bricks.push(Brick::new(column, row));
            }
        }
        bricks
    }

    /// Start a fresh session: reposition ball and paddle, rebuild the grid,
    /// clear the terminal flag and score
    pub fn reset(&mut self) {
        self.phase = GamePhase::Serve;
        self.ball.reset(self.arena);
        self.paddle.reset(self.arena);
        self.bricks = Self::brick_grid();
        self.score = 0;
        self.time_ticks = 0;
        log::info!("New game started");
    }

    /// Refill the field once every brick is gone, keeping score and ball
    pub fn next_wave(&mut self) {
        self.bricks = Self::brick_grid();
        log::info!("Field cleared at score {}, respawning bricks", self.score);
    }
}
