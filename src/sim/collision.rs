//! Collision detection and response
//!
//! Everything here is an axis-aligned overlap test plus a directional bounce
//! response. Side effects are limited to flipping direction components and
//! marking bricks destroyed; position correction is left to the wall clamps.

use glam::Vec2;

use super::state::{Ball, Brick, Paddle};
use crate::settings::Tuning;

/// Axis-aligned bounding box, derived fresh from an entity's center and size
/// every step. Never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            left: center.x - size.x / 2.0,
            top: center.y - size.y / 2.0,
            width: size.x,
            height: size.y,
        }
    }

    /// Move the box so it is centered on `center`, keeping its size
    pub fn recenter(&mut self, center: Vec2) {
        self.left = center.x - self.width / 2.0;
        self.top = center.y - self.height / 2.0;
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

/// Resolve a ball/paddle contact.
///
/// A hit inside the central aim zone redirects the ball along the aim
/// indicator; anywhere else it reflects vertically, with an edge override
/// that keeps the ball from re-entering the paddle from the side. The zone
/// check deliberately takes precedence over the edge override.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle, tuning: &Tuning) {
    if !ball.collider.intersects(&paddle.collider) {
        return;
    }

    let offset = ball.pos.x - paddle.pos.x;
    let aim_zone = paddle.width * tuning.aim_zone_frac;
    if offset.abs() < aim_zone {
        ball.dir = paddle.aim_direction();
        return;
    }

    ball.dir.y = -ball.dir.y;

    // Edge band: a ball this far out, still moving across the paddle, would
    // immediately clip back into it after the vertical reflection
    let edge = paddle.width / 2.0 - paddle.width * tuning.edge_zone_frac;
    if offset > edge && ball.dir.x < 0.0 {
        ball.dir.x = -ball.dir.x;
    } else if offset < -edge && ball.dir.x > 0.0 {
        ball.dir.x = -ball.dir.x;
    }
}

/// Resolve a ball/brick contact. One hit destroys the brick.
///
/// Each axis bounces independently: the x check catches top/bottom hits, the
/// y check catches side hits, and a corner hit fires both, which is what
/// produces the diagonal reflection off corners. The slop widens both checks
/// so a fast ball cannot slip past a corner within one step. A component is
/// only inverted while still travelling toward the brick, so a corner hit
/// never double-inverts.
pub fn ball_brick_collision(ball: &mut Ball, brick: &mut Brick, tuning: &Tuning) {
    if brick.destroyed || !ball.collider.intersects(&brick.collider) {
        return;
    }

    brick.destroyed = true;

    let distance_x = (ball.pos.x - brick.pos.x).abs();
    let distance_y = (ball.pos.y - brick.pos.y).abs();

    // Hit from top or bottom
    if distance_x <= brick.width / 2.0 + tuning.corner_slop {
        if ball.pos.y > brick.pos.y {
            if ball.dir.y < 0.0 {
                ball.dir.y = -ball.dir.y;
            }
        } else if ball.dir.y > 0.0 {
            ball.dir.y = -ball.dir.y;
        }
    }

    // Hit from left or right
    if distance_y <= brick.height / 2.0 + tuning.corner_slop {
        if ball.pos.x > brick.pos.x {
            if ball.dir.x < 0.0 {
                ball.dir.x = -ball.dir.x;
            }
        } else if ball.dir.x > 0.0 {
            ball.dir.x = -ball.dir.x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn arena() -> Vec2 {
        Vec2::new(ARENA_WIDTH, ARENA_HEIGHT)
    }

    fn ball_at(pos: Vec2, dir: Vec2) -> Ball {
        let mut ball = Ball::new(arena());
        ball.pos = pos;
        ball.dir = dir.normalize();
        ball.collider.recenter(pos);
        ball
    }

    fn paddle_at(x: f32) -> Paddle {
        let mut paddle = Paddle::new(arena());
        paddle.pos.x = x;
        paddle.collider.recenter(paddle.pos);
        paddle
    }

    fn brick_at(pos: Vec2) -> Brick {
        let mut brick = Brick::new(0, 0);
        brick.pos = pos;
        brick.collider.recenter(pos);
        brick
    }

    #[test]
    fn test_aabb_intersects() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_center(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0));
        let c = Aabb::from_center(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_intersect() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::from_center(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_paddle_miss_is_noop() {
        let paddle = paddle_at(960.0);
        let mut ball = ball_at(Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0));
        let dir_before = ball.dir;
        ball_paddle_collision(&mut ball, &paddle, &Tuning::default());
        assert_eq!(ball.dir, dir_before);
    }

    #[test]
    fn test_paddle_center_hit_redirects_along_aim() {
        let mut paddle = paddle_at(960.0);
        paddle.aim_angle = 30.0;
        let mut ball = ball_at(paddle.pos, Vec2::new(0.3, 1.0));

        ball_paddle_collision(&mut ball, &paddle, &Tuning::default());

        let expected = paddle.aim_direction();
        assert!((ball.dir - expected).length() < 1e-6);
        // Aimed direction always points upward
        assert!(ball.dir.y < 0.0);
    }

    #[test]
    fn test_paddle_outer_hit_reflects_vertically() {
        let paddle = paddle_at(960.0);
        // Outside the central half, inside the edge band
        let mut ball = ball_at(paddle.pos + Vec2::new(60.0, 0.0), Vec2::new(1.0, 1.0));
        let dir_before = ball.dir;

        ball_paddle_collision(&mut ball, &paddle, &Tuning::default());

        assert_eq!(ball.dir.x, dir_before.x);
        assert_eq!(ball.dir.y, -dir_before.y);
    }

    #[test]
    fn test_paddle_edge_override_forces_ball_outward() {
        let paddle = paddle_at(960.0);
        // Beyond width/2 - width/16 = 87.5 from center, moving inward
        let mut ball = ball_at(paddle.pos + Vec2::new(95.0, 0.0), Vec2::new(-1.0, 1.0));

        ball_paddle_collision(&mut ball, &paddle, &Tuning::default());

        assert!(ball.dir.x > 0.0);
        assert!(ball.dir.y < 0.0);
    }

    #[test]
    fn test_paddle_edge_hit_moving_outward_keeps_direction() {
        let paddle = paddle_at(960.0);
        let mut ball = ball_at(paddle.pos + Vec2::new(95.0, 0.0), Vec2::new(1.0, 1.0));

        ball_paddle_collision(&mut ball, &paddle, &Tuning::default());

        assert!(ball.dir.x > 0.0);
    }

    #[test]
    fn test_brick_miss_is_noop() {
        let mut brick = brick_at(Vec2::new(500.0, 200.0));
        let mut ball = ball_at(Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0));
        ball_brick_collision(&mut ball, &mut brick, &Tuning::default());
        assert!(!brick.destroyed);
    }

    #[test]
    fn test_brick_top_hit_inverts_y_only() {
        let mut brick = brick_at(Vec2::new(500.0, 200.0));
        // Ball just above the brick, falling onto it; vertical distance past
        // the side-check slop so only the top/bottom check fires
        let mut ball = ball_at(Vec2::new(500.0, 169.5), Vec2::new(1.0, 1.0));
        let dir_before = ball.dir;

        ball_brick_collision(&mut ball, &mut brick, &Tuning::default());

        assert!(brick.destroyed);
        assert_eq!(ball.dir.x, dir_before.x);
        assert_eq!(ball.dir.y, -dir_before.y);
    }

    #[test]
    fn test_brick_side_hit_inverts_x_only() {
        let mut brick = brick_at(Vec2::new(500.0, 200.0));
        // Ball to the right of the brick, moving left into it; horizontal
        // distance past the top/bottom slop so only the side check fires
        let mut ball = ball_at(Vec2::new(586.0, 200.0), Vec2::new(-1.0, 0.5));
        let dir_before = ball.dir;

        ball_brick_collision(&mut ball, &mut brick, &Tuning::default());

        assert!(brick.destroyed);
        assert_eq!(ball.dir.x, -dir_before.x);
        assert_eq!(ball.dir.y, dir_before.y);
    }

    #[test]
    fn test_brick_corner_hit_inverts_both_components() {
        // Ball center coincides with brick center: distance 0 on both axes,
        // well inside both slop thresholds (85 and 30)
        let mut brick = brick_at(Vec2::new(100.0, 100.0));
        let mut ball = ball_at(Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0));
        let dir_before = ball.dir;

        ball_brick_collision(&mut ball, &mut brick, &Tuning::default());

        assert!(brick.destroyed);
        assert_eq!(ball.dir.x, -dir_before.x);
        assert_eq!(ball.dir.y, -dir_before.y);
    }

    #[test]
    fn test_brick_no_double_inversion_when_moving_away() {
        let mut brick = brick_at(Vec2::new(500.0, 200.0));
        // Overlapping from below but already heading down and away; a plain
        // sign-flip here would bounce the ball back into the brick field
        let mut ball = ball_at(Vec2::new(500.0, 231.0), Vec2::new(1.0, 1.0));
        let dir_before = ball.dir;

        ball_brick_collision(&mut ball, &mut brick, &Tuning::default());

        assert!(brick.destroyed);
        assert_eq!(ball.dir, dir_before);
    }

    #[test]
    fn test_brick_destroyed_flag_short_circuits() {
        let mut brick = brick_at(Vec2::new(500.0, 200.0));
        brick.destroyed = true;
        let mut ball = ball_at(Vec2::new(500.0, 200.0), Vec2::new(1.0, 1.0));
        let dir_before = ball.dir;

        ball_brick_collision(&mut ball, &mut brick, &Tuning::default());

        assert_eq!(ball.dir, dir_before);
    }

    #[test]
    fn test_corner_slop_is_tunable() {
        let tuning = Tuning {
            corner_slop: 0.0,
            ..Tuning::default()
        };
        let mut brick = brick_at(Vec2::new(500.0, 200.0));
        // Overlapping via the collider, but past width/2 horizontally, so
        // with zero slop only the side check can fire
        let mut ball = ball_at(Vec2::new(582.0, 195.0), Vec2::new(-1.0, 1.0));
        let dir_before = ball.dir;

        ball_brick_collision(&mut ball, &mut brick, &tuning);

        assert!(brick.destroyed);
        assert_eq!(ball.dir.x, -dir_before.x);
        assert_eq!(ball.dir.y, dir_before.y);
    }
}
