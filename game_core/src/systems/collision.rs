use tracing::debug;

use crate::systems::move_ball;
use crate::{Ball, DirX, DirY, Paddle, Params};

/// What happened to the ball during one game tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallOutcome {
    /// Ball sat on the goal column; the local player lost the point
    ScoredAgainstLocal,
    /// Ball left through the border column and now belongs to the peer
    CrossedToPeer,
    /// Ball moved one cell
    Moved,
}

fn scored_against(ball: &Ball) -> bool {
    ball.pos.x == Params::GOAL_X
}

fn hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.x == Params::ONE_FROM_GOAL_X
        && ball.dir_x == DirX::TowardPaddle
        && paddle.covers_row(ball.pos.y)
}

fn hits_wall(ball: &Ball) -> bool {
    (ball.pos.y == Params::TOP_WALL_Y && ball.dir_y == DirY::TowardTop)
        || (ball.pos.y == Params::BOTTOM_WALL_Y && ball.dir_y == DirY::TowardBottom)
}

fn crossing_border(ball: &Ball) -> bool {
    ball.pos.x == Params::BORDER_X && ball.dir_x == DirX::AwayFromPaddle
}

/// Rebound off the paddle. The end of the paddle that was hit picks the angle.
fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle) {
    ball.dir_x = DirX::AwayFromPaddle;
    ball.dir_y = if ball.pos.y == paddle.bottom().y {
        DirY::TowardBottom
    } else if ball.pos.y == paddle.top().y {
        DirY::TowardTop
    } else {
        DirY::Straight
    };
}

/// Run one tick of ball physics against the local paddle.
///
/// Checks run in a fixed order and each one sees the direction left by the
/// previous one:
///
/// 1. goal column: scored against, nothing moves
/// 2. paddle bounce
/// 3. wall bounce, using the direction from step 2
/// 4. border crossing: the wall predicate is evaluated again on the updated
///    direction and, if true, the vertical direction is flipped once more
/// 5. otherwise move one cell
pub fn advance_ball(ball: &mut Ball, paddle: &Paddle) -> BallOutcome {
    if scored_against(ball) {
        debug!(x = ball.pos.x, y = ball.pos.y, "Ball reached goal column");
        return BallOutcome::ScoredAgainstLocal;
    }

    if hits_paddle(ball, paddle) {
        bounce_off_paddle(ball, paddle);
        debug!(y = ball.pos.y, dir_y = ?ball.dir_y, "Ball hit paddle");
    }

    if hits_wall(ball) {
        ball.dir_y = ball.dir_y.reversed();
    }

    if crossing_border(ball) {
        // Second wall test, on the direction as updated above
        if hits_wall(ball) {
            ball.dir_y = ball.dir_y.reversed();
        }
        debug!(y = ball.pos.y, dir_y = ?ball.dir_y, "Ball crossing to peer");
        return BallOutcome::CrossedToPeer;
    }

    move_ball(ball);
    BallOutcome::Moved
}

impl Ball {
    pub fn advance_one_tick(&mut self, paddle: &Paddle) -> BallOutcome {
        advance_ball(self, paddle)
    }
}
