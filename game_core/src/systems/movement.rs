use crate::{Ball, Paddle, PaddleInput, Params};

/// Apply one navswitch push to the paddle, clamping silently at the walls.
///
/// The board is mounted rotated, so "up" on the switch lowers the row index.
pub fn move_paddle(paddle: &mut Paddle, input: PaddleInput) {
    match input {
        PaddleInput::Up if paddle.bottom().y > Params::BOTTOM_WALL_Y => paddle.shift(-1),
        PaddleInput::Down if paddle.top().y < Params::TOP_WALL_Y => paddle.shift(1),
        _ => {}
    }
}

/// Move the ball one cell along its current direction
pub fn move_ball(ball: &mut Ball) {
    ball.pos.x += ball.dir_x.step();
    ball.pos.y += ball.dir_y.step();
}

impl Paddle {
    pub fn handle_input(&mut self, input: PaddleInput) {
        move_paddle(self, input);
    }
}
