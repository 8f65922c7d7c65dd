use glam::Vec2;

use crate::{Ball, Paddle};

/// Rectangular playing field spanning `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    width: f32,
    height: f32,
}

impl Board {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// Clamp both paddles, then resolve the ball against the walls.
    /// Returns the scoring signal from [`Board::interact_ball`].
    pub fn interact(&self, ball: &mut Ball, left: &mut Paddle, right: &mut Paddle) -> i8 {
        self.interact_paddle(left);
        self.interact_paddle(right);
        self.interact_ball(ball)
    }

    /// Bounce the ball off the board edges.
    ///
    /// Returns +1 when the ball crossed the right goal line, -1 for the left
    /// one and 0 otherwise. Top and bottom are plain walls.
    pub fn interact_ball(&self, ball: &mut Ball) -> i8 {
        let mut value = 0;

        // Goal lines
        if ball.pos.x > self.width {
            ball.pos.x = self.width;
            ball.dir.x = -ball.dir.x;
            value = 1;
        }
        if ball.pos.x < 0.0 {
            ball.pos.x = 0.0;
            ball.dir.x = -ball.dir.x;
            value = -1;
        }

        // Walls
        if ball.pos.y > self.height {
            ball.pos.y = self.height;
            ball.dir.y = -ball.dir.y;
        }
        if ball.pos.y < 0.0 {
            ball.pos.y = 0.0;
            ball.dir.y = -ball.dir.y;
        }

        value
    }

    /// Keep the paddle rectangle inside the board on all four sides
    pub fn interact_paddle(&self, paddle: &mut Paddle) {
        let half_length = paddle.length / 2.0;
        let half_width = paddle.width / 2.0;

        if paddle.pos.y + half_length > self.height {
            paddle.pos.y = self.height - half_length;
        }
        if paddle.pos.y - half_length < 0.0 {
            paddle.pos.y = half_length;
        }
        if paddle.pos.x + half_width > self.width {
            paddle.pos.x = self.width - half_width;
        }
        if paddle.pos.x - half_width < 0.0 {
            paddle.pos.x = half_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    fn board() -> Board {
        Board::new(800.0, 400.0)
    }

    fn ball_at(x: f32, y: f32, ux: f32, uy: f32) -> Ball {
        let mut ball = Ball::new(Vec2::new(x, y), 6.0);
        ball.dir = Vec2::new(ux, uy);
        ball
    }

    #[test]
    fn test_ball_past_right_goal_scores_plus_one() {
        let board = board();
        for x in [800.5, 808.0, 1200.0] {
            let mut ball = ball_at(x, 200.0, 1.0, 1.0);
            assert_eq!(board.interact_ball(&mut ball), 1);
            assert_eq!(ball.pos.x, 800.0, "Ball clamped to the goal line");
            assert_eq!(ball.dir.x, -1.0, "X direction flipped");
            assert_eq!(ball.dir.y, 1.0, "Y direction untouched");
        }
    }

    #[test]
    fn test_ball_past_left_goal_scores_minus_one() {
        let board = board();
        for x in [-0.5, -8.0, -300.0] {
            let mut ball = ball_at(x, 100.0, -1.0, -1.0);
            assert_eq!(board.interact_ball(&mut ball), -1);
            assert_eq!(ball.pos.x, 0.0);
            assert_eq!(ball.dir.x, 1.0);
        }
    }

    #[test]
    fn test_ball_bounces_off_walls_without_scoring() {
        let board = board();

        let mut ball = ball_at(300.0, 404.0, 1.0, 1.0);
        assert_eq!(board.interact_ball(&mut ball), 0);
        assert_eq!(ball.pos.y, 400.0);
        assert_eq!(ball.dir.y, -1.0);

        let mut ball = ball_at(300.0, -4.0, -1.0, -1.0);
        assert_eq!(board.interact_ball(&mut ball), 0);
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.dir.y, 1.0);
        assert_eq!(ball.dir.x, -1.0, "Walls leave x alone");
    }

    #[test]
    fn test_corner_exit_scores_and_bounces() {
        let board = board();
        let mut ball = ball_at(805.0, -3.0, 1.0, -1.0);
        assert_eq!(board.interact_ball(&mut ball), 1, "Wall does not mask the goal");
        assert_eq!(ball.pos, Vec2::new(800.0, 0.0));
        assert_eq!(ball.dir, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn test_ball_in_bounds_is_untouched() {
        let board = board();
        let mut ball = ball_at(400.0, 200.0, 1.0, -1.0);
        let before = ball;
        assert_eq!(board.interact_ball(&mut ball), 0);
        assert_eq!(ball, before);
        assert!(board.contains(ball.pos));
    }

    #[test]
    fn test_paddle_clamped_on_all_sides() {
        let board = board();

        let mut paddle = Paddle::new(Side::Left, Vec2::new(-10.0, -50.0), 80.0, 8.0);
        board.interact_paddle(&mut paddle);
        assert_eq!(paddle.pos, Vec2::new(4.0, 40.0));

        let mut paddle = Paddle::new(Side::Right, Vec2::new(900.0, 390.0), 80.0, 8.0);
        board.interact_paddle(&mut paddle);
        assert_eq!(paddle.pos, Vec2::new(796.0, 360.0));
    }

    #[test]
    fn test_paddle_clamp_is_idempotent() {
        let board = board();
        let positions = [
            Vec2::new(-10.0, -50.0),
            Vec2::new(900.0, 390.0),
            Vec2::new(40.0, 200.0),
            Vec2::new(3.0, 41.0),
        ];
        for pos in positions {
            let mut once = Paddle::new(Side::Left, pos, 80.0, 8.0);
            board.interact_paddle(&mut once);
            let mut twice = once;
            board.interact_paddle(&mut twice);
            assert_eq!(once.pos, twice.pos, "Clamping {pos:?} twice changed it");
        }
    }

    #[test]
    fn test_interact_clamps_paddles_before_scoring() {
        let board = board();
        let mut ball = ball_at(-2.0, 200.0, -1.0, 1.0);
        let mut left = Paddle::new(Side::Left, Vec2::new(40.0, 500.0), 80.0, 8.0);
        let mut right = Paddle::new(Side::Right, Vec2::new(760.0, -20.0), 80.0, 8.0);

        let value = board.interact(&mut ball, &mut left, &mut right);

        assert_eq!(value, -1);
        assert_eq!(left.pos.y, 360.0);
        assert_eq!(right.pos.y, 40.0);
    }
}
