//! Game controller
//!
//! Owns the paddle and the ball, applies keyboard commands and advances the
//! session one frame at a time.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{bounce_off_paddle, paddle_contact};
use super::entity::{Entity, Shape};
use super::input::Key;
use crate::consts::*;
use crate::surface::{Bounds, Color, Surface};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Ball waiting for launch, paddle movable
    Idle,
    /// Ball in play
    Active,
    /// Ball reached the bottom edge
    Over,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Schedule another frame
    Continue,
    /// The ball latched on the floor during this tick
    GameOver,
    /// Nothing was done (paused or already over)
    Halted,
}

pub struct GameController<R = Pcg32> {
    phase: GamePhase,
    /// Set by the pause key; there is no way back
    paused: bool,
    paddle: Entity,
    ball: Entity,
    rng: R,
    frames: u64,
}

impl GameController<Pcg32> {
    /// Create a session with a seeded bounce jitter source
    pub fn new(bounds: Bounds, seed: u64) -> Self {
        Self::with_rng(bounds, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GameController<R> {
    pub fn with_rng(bounds: Bounds, rng: R) -> Self {
        let paddle = Entity::new(
            bounds,
            DVec2::new(PADDLE_X, PADDLE_Y),
            DVec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            Color::BLUE,
            Shape::Rect,
        );
        let ball = Entity::new(
            bounds,
            DVec2::new(BALL_X, BALL_Y),
            DVec2::splat(BALL_SIZE),
            Color::RED,
            Shape::Circle,
        );

        Self {
            phase: GamePhase::Idle,
            paused: false,
            paddle,
            ball,
            rng,
            frames: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn paddle(&self) -> &Entity {
        &self.paddle
    }

    pub fn ball(&self) -> &Entity {
        &self.ball
    }

    /// Ticks that did work so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Stop the loop. Logical phase is left as is.
    pub fn pause(&mut self) {
        if !self.paused {
            log::info!("Paused at frame {} ({:?})", self.frames, self.phase);
        }
        self.paused = true;
    }

    pub fn key_down(&mut self, key: Key) {
        if self.phase == GamePhase::Over {
            return;
        }

        match key {
            Key::Left => self.paddle.set_horizontal_velocity(-PADDLE_SPEED),
            Key::Right => self.paddle.set_horizontal_velocity(PADDLE_SPEED),
            Key::Launch => {
                if self.phase == GamePhase::Idle {
                    self.phase = GamePhase::Active;
                    self.ball.set_velocity(DVec2::new(LAUNCH_DX, LAUNCH_DY));
                    log::info!("Ball launched");
                }
            }
            Key::Pause => self.pause(),
        }
    }

    pub fn key_up(&mut self, key: Key) {
        if key.is_paddle() {
            self.paddle.set_horizontal_velocity(0.0);
        }
    }

    /// Draw both entities without advancing anything
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.paddle.draw(surface);
        self.ball.draw(surface);
    }

    /// Advance the session by one frame and redraw it
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> TickOutcome {
        if self.paused || self.phase == GamePhase::Over {
            return TickOutcome::Halted;
        }
        self.frames += 1;

        surface.clear();
        self.paddle.advance();

        if self.phase == GamePhase::Active {
            self.ball.advance_ball();
            if !self.ball.is_terminal() && paddle_contact(&self.ball, &self.paddle) {
                let jitter = bounce_off_paddle(&mut self.ball, &mut self.rng);
                log::debug!(
                    "Paddle bounce at x={:.1} (jitter {:+.3})",
                    self.ball.left(),
                    jitter
                );
            }
        }

        self.draw(surface);

        if self.ball.is_terminal() {
            self.phase = GamePhase::Over;
            log::info!("Game over after {} frames", self.frames);
            return TickOutcome::GameOver;
        }

        TickOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    fn controller() -> GameController {
        GameController::new(Bounds::default(), 12345)
    }

    #[test]
    fn test_initial_layout() {
        let game = controller();
        assert_eq!(game.phase(), GamePhase::Idle);
        assert_eq!(game.ball().position(), DVec2::new(280.0, 280.0));
        assert_eq!(game.paddle().position(), DVec2::new(256.0, 290.0));
        assert_eq!(game.paddle().width(), 60.0);
        assert_eq!(game.ball().velocity(), DVec2::ZERO);
    }

    #[test]
    fn test_launch_and_first_tick() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();

        game.key_down(Key::Launch);
        assert_eq!(game.phase(), GamePhase::Active);
        assert_eq!(game.ball().velocity(), DVec2::new(3.0, -4.0));

        assert_eq!(game.tick(&mut surface), TickOutcome::Continue);
        assert_eq!(game.ball().position(), DVec2::new(283.0, 276.0));
        assert_eq!(surface.clears(), 1);
        assert_eq!(surface.commands().len(), 2);
    }

    #[test]
    fn test_launch_only_once() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();
        game.key_down(Key::Launch);
        game.tick(&mut surface);
        let vel = game.ball().velocity();

        game.key_down(Key::Launch);
        assert_eq!(game.ball().velocity(), vel);
    }

    #[test]
    fn test_idle_ball_stays_put_while_paddle_moves() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();

        game.key_down(Key::Right);
        game.key_down(Key::Right);
        for _ in 0..3 {
            assert_eq!(game.tick(&mut surface), TickOutcome::Continue);
        }
        assert_eq!(game.paddle().position().x, 271.0);
        assert_eq!(game.ball().position(), DVec2::new(280.0, 280.0));

        game.key_up(Key::Right);
        game.tick(&mut surface);
        assert_eq!(game.paddle().position().x, 271.0);
    }

    #[test]
    fn test_unrelated_key_up_keeps_paddle_moving() {
        let mut game = controller();
        game.key_down(Key::Left);
        game.key_up(Key::Launch);
        assert_eq!(game.paddle().velocity().x, -5.0);
    }

    #[test]
    fn test_pause_halts_without_changing_phase() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();
        game.key_down(Key::Launch);
        game.tick(&mut surface);

        game.key_down(Key::Pause);
        let pos = game.ball().position();
        assert_eq!(game.tick(&mut surface), TickOutcome::Halted);
        assert_eq!(game.phase(), GamePhase::Active);
        assert_eq!(game.ball().position(), pos);
        assert_eq!(game.frame_count(), 1);
    }

    #[test]
    fn test_draw_order_paddle_then_ball() {
        let game = controller();
        let mut surface = RecordingSurface::default();
        game.draw(&mut surface);
        assert!(matches!(surface.commands()[0], DrawCommand::Rect { .. }));
        assert!(matches!(surface.commands()[1], DrawCommand::Circle { .. }));
    }

    #[test]
    fn test_ball_missing_paddle_ends_game() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();
        game.key_down(Key::Launch);

        let mut outcome = TickOutcome::Continue;
        for _ in 0..1000 {
            outcome = game.tick(&mut surface);
            if outcome != TickOutcome::Continue {
                break;
            }
        }

        assert_eq!(outcome, TickOutcome::GameOver);
        assert_eq!(game.phase(), GamePhase::Over);
        assert!(game.ball().is_terminal());
        assert_eq!(game.ball().position().y, 290.0);
        assert_eq!(game.ball().velocity(), DVec2::ZERO);

        // Session is finished: no more ticks, no more input
        let frames = game.frame_count();
        assert_eq!(game.tick(&mut surface), TickOutcome::Halted);
        assert_eq!(game.frame_count(), frames);
        game.key_down(Key::Left);
        assert_eq!(game.paddle().velocity().x, 0.0);
    }

    #[test]
    fn test_tick_bounces_ball_off_steered_paddle() {
        let seed = 12345;
        let mut game = GameController::new(Bounds::default(), seed);
        let mut surface = RecordingSurface::default();
        game.key_down(Key::Launch);

        // Slide the paddle from 256 to 336, under where the ball comes down
        game.key_down(Key::Right);
        for _ in 0..16 {
            game.tick(&mut surface);
        }
        game.key_up(Key::Right);
        assert_eq!(game.paddle().position().x, 336.0);

        while game.frame_count() < 141 {
            assert_eq!(game.tick(&mut surface), TickOutcome::Continue);
        }
        assert_eq!(game.ball().position(), DVec2::new(397.0, 284.0));
        assert_eq!(game.ball().velocity(), DVec2::new(-3.0, 4.0));

        // Next step lands the ball's bottom edge in the paddle band
        assert_eq!(game.tick(&mut surface), TickOutcome::Continue);
        let jitter: f64 = Pcg32::seed_from_u64(seed).random_range(-1.0..1.0);
        assert_eq!(game.ball().position(), DVec2::new(394.0, 288.0));
        assert_eq!(game.ball().velocity(), DVec2::new(-3.0 + jitter, -4.0));
        assert_eq!(game.phase(), GamePhase::Active);

        // Heading up again on the following frame
        game.tick(&mut surface);
        assert_eq!(game.ball().position().y, 284.0);
    }

    #[test]
    fn test_floor_contact_tick_skips_bounce() {
        let mut game = controller();
        let mut surface = RecordingSurface::default();
        game.key_down(Key::Launch);

        // One step above the floor, right over the paddle
        let mut ball = Entity::new(
            Bounds::default(),
            DVec2::new(280.0, 288.0),
            DVec2::splat(BALL_SIZE),
            Color::RED,
            Shape::Circle,
        );
        ball.set_velocity(DVec2::new(2.0, 4.0));
        game.ball = ball;

        assert_eq!(game.tick(&mut surface), TickOutcome::GameOver);
        // Clamped ball still sits in the paddle band, but no bounce is applied
        assert!(paddle_contact(game.ball(), game.paddle()));
        assert_eq!(game.ball().position(), DVec2::new(280.0, 290.0));
        assert_eq!(game.ball().velocity(), DVec2::ZERO);
        assert_eq!(game.phase(), GamePhase::Over);
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = controller();
        let mut b = controller();
        let mut surface = RecordingSurface::default();
        a.key_down(Key::Launch);
        b.key_down(Key::Launch);

        for frame in 0..400 {
            if frame % 50 == 0 {
                a.key_down(Key::Left);
                b.key_down(Key::Left);
            }
            if frame % 50 == 25 {
                a.key_up(Key::Left);
                b.key_up(Key::Left);
            }
            a.tick(&mut surface);
            b.tick(&mut surface);
        }

        assert_eq!(a.ball().position(), b.ball().position());
        assert_eq!(a.ball().velocity(), b.ball().velocity());
        assert_eq!(a.phase(), b.phase());
    }
}
