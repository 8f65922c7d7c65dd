use crate::Ball;
use hecs::World;

/// Move ball along its direction
pub fn move_ball(world: &mut World, speed: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.update(speed);
    }
}
