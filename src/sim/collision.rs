//! Ball vs. paddle collision
//!
//! Pure box geometry. The paddle's hit band is the fixed [`PADDLE_HEIGHT`]
//! below its top edge; the ball counts as landing when its bottom edge is
//! inside that band and the horizontal spans overlap (touching included).

use glam::DVec2;
use rand::Rng;

use super::entity::Entity;
use crate::consts::{BOUNCE_JITTER, PADDLE_HEIGHT};

/// Whether the ball is landing on the paddle
pub fn paddle_contact(ball: &Entity, paddle: &Entity) -> bool {
    let ball_bottom = ball.bottom();
    ball_bottom >= paddle.top()
        && ball_bottom <= paddle.top() + PADDLE_HEIGHT
        && ball.right() >= paddle.left()
        && ball.left() <= paddle.right()
}

/// Send the ball back up and nudge its horizontal speed by a uniform
/// amount in `[-BOUNCE_JITTER, BOUNCE_JITTER)`.
///
/// Returns the jitter that was applied.
pub fn bounce_off_paddle<R: Rng + ?Sized>(ball: &mut Entity, rng: &mut R) -> f64 {
    let vel = ball.velocity();
    let jitter = rng.random_range(-BOUNCE_JITTER..BOUNCE_JITTER);
    ball.set_velocity(DVec2::new(vel.x + jitter, -vel.y.abs()));
    jitter
}
