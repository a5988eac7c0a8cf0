//! eframe frontend
//!
//! Owns the loop controller: accumulates real frame time, drains it in fixed
//! simulation steps, then draws extrapolated copies of the moving entities so
//! motion stays smooth between steps. The authoritative simulation state is
//! never mutated by drawing.

use std::sync::Arc;
use std::time::Instant;

use egui::epaint::{CircleShape, RectShape};
use egui::{
    Align2, Color32, Context, FontId, Id, LayerId, Order, Pos2, Rect, Rounding, Shape, Stroke,
    Vec2 as UiVec2,
};

use crate::consts::*;
use crate::input::{IntentState, Steer};
use crate::settings::Settings;
use crate::sim::{tick, GamePhase, GameState};

/// Frames kept for the FPS estimate
const FPS_WINDOW: usize = 60;

pub struct BrickrushApp {
    state: GameState,
    /// Shared intent flags; this frame loop is the single sampler writing
    /// them for the lifetime of the session
    intents: Arc<IntentState>,
    settings: Settings,
    /// Unconsumed real time, drained in whole SIM_DT increments
    accumulator: f32,
    last_frame: Instant,
    frame_times: [Instant; FPS_WINDOW],
    frame_index: usize,
}

impl BrickrushApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        match crate::assets::load_game_font() {
            Ok(fonts) => cc.egui_ctx.set_fonts(fonts),
            Err(err) => log::warn!("Using default fonts: {err:#}"),
        }
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self {
            state: GameState::new(settings.tuning),
            intents: Arc::new(IntentState::default()),
            settings,
            accumulator: 0.0,
            last_frame: Instant::now(),
            frame_times: [Instant::now(); FPS_WINDOW],
            frame_index: 0,
        }
    }

    /// Poll raw key states into the shared intent flags
    fn sample_input(&self, ctx: &Context) {
        let (left, right, aim_left, aim_right, launch) = ctx.input(|i| {
            (
                i.key_down(egui::Key::A),
                i.key_down(egui::Key::D),
                i.key_down(egui::Key::ArrowLeft),
                i.key_down(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::Space),
            )
        });

        self.intents.set_paddle_dir(Steer::from_keys(left, right));
        self.intents.set_aim_dir(Steer::from_keys(aim_left, aim_right));
        if launch {
            self.intents.request_launch();
        }
    }

    /// Drain the accumulator in fixed steps. Stops the moment the session
    /// goes terminal so no further steps run this frame.
    fn step_simulation(&mut self) {
        let mut input = self.intents.snapshot();
        let mut steps = 0;
        while self.accumulator >= SIM_DT
            && steps < MAX_STEPS_PER_FRAME
            && self.state.phase != GamePhase::GameOver
        {
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            steps += 1;
            // One-shot intents only apply to the first step of a frame
            input.launch = false;
        }
    }

    fn restart(&mut self) {
        self.state.reset();
        self.intents.clear();
        self.accumulator = 0.0;
    }

    fn track_fps(&mut self) -> u32 {
        self.frame_times[self.frame_index] = Instant::now();
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        let oldest = self.frame_times[self.frame_index];
        let elapsed = oldest.elapsed().as_secs_f32();
        if elapsed > 0.0 {
            (FPS_WINDOW as f32 / elapsed).round() as u32
        } else {
            0
        }
    }

    fn draw_game(&self, ctx: &Context) {
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("game")));
        let drawer = GameDrawer::new(painter.clip_rect(), &self.state);
        for shape in drawer.shapes(self.accumulator / SIM_DT) {
            painter.add(shape);
        }

        painter.text(
            Pos2::new(painter.clip_rect().right() - 20.0, 10.0),
            Align2::RIGHT_TOP,
            format!("Score: {}", self.state.score),
            FontId::proportional(24.0),
            Color32::WHITE,
        );

        if self.state.phase == GamePhase::GameOver {
            painter.text(
                Pos2::new(20.0, 10.0),
                Align2::LEFT_TOP,
                "Press Enter to play again...",
                FontId::proportional(24.0),
                Color32::WHITE,
            );
        }
    }
}

impl eframe::App for BrickrushApp {
    fn update(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        let frame_time = self.last_frame.elapsed().as_secs_f32().min(0.1);
        self.last_frame = Instant::now();
        self.accumulator += frame_time;

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            frame.close();
            return;
        }

        self.sample_input(ctx);

        if self.state.phase == GamePhase::GameOver
            && ctx.input(|i| i.key_pressed(egui::Key::Enter))
        {
            self.restart();
        }

        self.step_simulation();
        self.draw_game(ctx);

        let fps = self.track_fps();
        if self.settings.show_fps {
            let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("hud")));
            painter.text(
                Pos2::new(20.0, painter.clip_rect().bottom() - 10.0),
                Align2::LEFT_BOTTOM,
                format!("{fps} fps"),
                FontId::proportional(14.0),
                Color32::GRAY,
            );
        }

        // Keep animating even without input events
        ctx.request_repaint();
    }

    fn on_exit(&mut self, _: Option<&eframe::glow::Context>) {
        if let Err(err) = self.settings.save() {
            log::warn!("Failed to save settings: {err:#}");
        }
    }
}

/// Maps the logical arena onto the window and produces the frame's shapes.
///
/// Works on copies of the moving entities, advanced by the leftover fraction
/// of the accumulator, so drawing never touches authoritative state.
struct GameDrawer<'a> {
    canvas: Rect,
    state: &'a GameState,
}

impl<'a> GameDrawer<'a> {
    fn new(canvas: Rect, state: &'a GameState) -> Self {
        Self { canvas, state }
    }

    fn scale_pos(&self, pos: glam::Vec2) -> Pos2 {
        Pos2::new(
            self.canvas.left() + pos.x * self.canvas.width() / self.state.arena.x,
            self.canvas.top() + pos.y * self.canvas.height() / self.state.arena.y,
        )
    }

    fn scale_x(&self, len: f32) -> f32 {
        len * self.canvas.width() / self.state.arena.x
    }

    fn scale_size(&self, size: glam::Vec2) -> UiVec2 {
        UiVec2::new(
            size.x * self.canvas.width() / self.state.arena.x,
            size.y * self.canvas.height() / self.state.arena.y,
        )
    }

    fn shapes(&self, alpha: f32) -> Vec<Shape> {
        // Extrapolate the moving entities ahead by the unconsumed fraction
        // of a step
        let lookahead = (1.0 + alpha) * SIM_DT;
        let mut ball = self.state.ball.clone();
        let mut paddle = self.state.paddle.clone();
        match self.state.phase {
            GamePhase::Playing => {
                ball.move_by_speed(lookahead);
                paddle.move_by_speed(lookahead);
            }
            GamePhase::Serve => {
                paddle.move_by_speed(lookahead);
                ball.follow_paddle(&paddle);
            }
            GamePhase::GameOver => {}
        }

        let mut shapes = Vec::with_capacity(self.state.bricks.len() + 3);
        for brick in &self.state.bricks {
            shapes.push(self.brick_shape(brick));
        }
        shapes.push(self.aim_indicator_shape(&paddle));
        shapes.push(self.paddle_shape(&paddle));
        shapes.push(self.ball_shape(&ball));
        shapes
    }

    fn ball_shape(&self, ball: &crate::sim::Ball) -> Shape {
        CircleShape::filled(
            self.scale_pos(ball.pos),
            self.scale_x(ball.radius),
            Color32::from_rgb(0, 255, 255),
        )
        .into()
    }

    fn paddle_shape(&self, paddle: &crate::sim::Paddle) -> Shape {
        let center = self.scale_pos(paddle.pos);
        let size = self.scale_size(glam::Vec2::new(paddle.width, paddle.height));
        RectShape::filled(
            Rect::from_center_size(center, size),
            Rounding::none(),
            Color32::RED,
        )
        .into()
    }

    /// The indicator hangs off the paddle top, leaning with the aim angle
    fn aim_indicator_shape(&self, paddle: &crate::sim::Paddle) -> Shape {
        let base = glam::Vec2::new(paddle.pos.x, paddle.pos.y - paddle.height / 2.0);
        let tip = base + paddle.aim_direction() * AIM_LENGTH;
        Shape::line_segment(
            [self.scale_pos(base), self.scale_pos(tip)],
            Stroke::new(self.scale_x(AIM_THICKNESS), Color32::WHITE),
        )
    }

    fn brick_shape(&self, brick: &crate::sim::Brick) -> Shape {
        let center = self.scale_pos(brick.pos);
        let size = self.scale_size(glam::Vec2::new(brick.width, brick.height));
        RectShape::filled(
            Rect::from_center_size(center, size),
            Rounding::none(),
            Color32::WHITE,
        )
        .into()
    }
}
