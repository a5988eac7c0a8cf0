//! Fixed timestep simulation tick
//!
//! One call advances the session by exactly one `dt`. The frame loop drains
//! its time accumulator by calling this repeatedly; rendering never touches
//! the state mutated here.

use super::collision::{ball_brick_collision, ball_paddle_collision};
use super::state::{GamePhase, GameState};

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Horizontal paddle intent: -1 left, +1 right, 0 idle
    pub paddle_dir: f32,
    /// Aim indicator rotation intent: -1 left, +1 right, 0 idle
    pub aim_dir: f32,
    /// Launch the ball (one-shot)
    pub launch: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.phase == GamePhase::GameOver {
        // Restart is a loop-controller concern; nothing moves here
        return;
    }

    state.time_ticks += 1;

    match state.phase {
        GamePhase::Serve => {
            state
                .paddle
                .update(dt, input.paddle_dir, input.aim_dir, state.arena);
            state.ball.follow_paddle(&state.paddle);

            if input.launch {
                state.ball.dir = state.paddle.aim_direction();
                state.phase = GamePhase::Playing;
                log::debug!(
                    "Ball launched at {:.1} degrees off vertical",
                    state.paddle.aim_angle
                );
            }
        }

        GamePhase::Playing => {
            state.ball.update(dt, state.arena);

            // Ball past the bottom edge ends the session; nothing else moves
            // this step
            if state.ball.hit_bottom {
                state.phase = GamePhase::GameOver;
                log::info!("Ball lost, final score {}", state.score);
                return;
            }

            state
                .paddle
                .update(dt, input.paddle_dir, input.aim_dir, state.arena);

            ball_paddle_collision(&mut state.ball, &state.paddle, &state.tuning);

            for brick in &mut state.bricks {
                ball_brick_collision(&mut state.ball, brick, &state.tuning);
            }

            // Compact destroyed bricks so they are gone before the next step
            let before = state.bricks.len();
            state.bricks.retain(|brick| !brick.destroyed);
            state.score += (before - state.bricks.len()) as u32;

            if state.bricks.is_empty() {
                state.next_wave();
            }
        }

        GamePhase::GameOver => unreachable!("handled above"),
    }
}
