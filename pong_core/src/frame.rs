//! Read-only render snapshot

use serde::Serialize;

use crate::{Ball, Paddle};

/// What the renderer needs to draw one paddle and its label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaddleView {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub width: f32,
    pub ready: bool,
    pub label: &'static str,
}

impl PaddleView {
    pub fn new(paddle: &Paddle, ready: bool, label: &'static str) -> Self {
        Self {
            x: paddle.pos.x,
            y: paddle.pos.y,
            length: paddle.length,
            width: paddle.width,
            ready,
            label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
}

impl From<&Ball> for BallView {
    fn from(ball: &Ball) -> Self {
        Self {
            x: ball.pos.x,
            y: ball.pos.y,
            diameter: ball.diameter,
        }
    }
}

/// Everything drawn for one animation frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub board_width: f32,
    pub board_height: f32,
    pub left: PaddleView,
    pub right: PaddleView,
    pub ball: BallView,
    pub score: i32, // positive favours the left player
    pub points_left: u32,
    pub points_right: u32,
    pub running: bool,
}
