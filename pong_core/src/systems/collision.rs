use crate::{Ball, Board, Paddle};
use hecs::World;

/// Keep every paddle inside the board
pub fn clamp_paddles(world: &mut World, board: &Board) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        board.interact_paddle(paddle);
    }
}

/// Bounce the ball off the walls and detect goals. Returns the scoring signal.
pub fn check_goals(world: &mut World, board: &Board) -> i8 {
    let mut reward = 0;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        reward = board.interact_ball(ball);
        debug_assert!(board.contains(ball.pos), "ball left the board");
    }
    reward
}

/// Let each paddle bounce the ball, left paddle first
pub fn paddle_bounces(world: &mut World) {
    // Collect paddles without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_entity, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side.index());

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            paddle.interact(ball);
        }
    }
}
