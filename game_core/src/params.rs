/// Fixed geometry and default tuning for the LED-matrix board
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Grid (5 columns x 7 rows)
    pub const GRID_WIDTH: i32 = 5;
    pub const GRID_HEIGHT: i32 = 7;
    pub const TOP_WALL_Y: i32 = 6;
    pub const BOTTOM_WALL_Y: i32 = 0;

    // Columns the ball logic cares about
    pub const BORDER_X: i32 = 0; // Edge shared with the peer board
    pub const ONE_FROM_GOAL_X: i32 = 3; // Column in front of the paddle
    pub const GOAL_X: i32 = 4;

    // Paddle
    pub const PADDLE_X: i32 = 4;
    pub const PADDLE_TOP_INIT_Y: i32 = 4;
    pub const PADDLE_BOTTOM_INIT_Y: i32 = 2;
    pub const PADDLE_SPAN: i32 = Self::PADDLE_TOP_INIT_Y - Self::PADDLE_BOTTOM_INIT_Y;

    // Ball serve position
    pub const BALL_START_X: i32 = 0;
    pub const BALL_START_Y: i32 = 3;

    // Score
    pub const WIN_SCORE: u8 = 3;

    // Task cadence (Hz)
    pub const SCHEDULER_RATE: u32 = 10_000;
    pub const DISPLAY_TASK_RATE: u32 = 300;
    pub const GAME_TASK_RATE: u32 = 2;
    pub const INPUT_TASK_RATE: u32 = 20;

    // Text
    pub const TEXT_SCROLL_SPEED: u32 = 10;
    pub const START_MESSAGE: &'static str = "PONG - Press down to start";
}
