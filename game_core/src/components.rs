use glam::IVec2;

use crate::params::Params;

/// A cell on the LED grid: column `x` in 0..=4, row `y` in 0..=6
pub type Point = IVec2;

/// Horizontal ball direction, relative to the local paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirX {
    TowardPaddle,
    AwayFromPaddle,
}

impl DirX {
    /// Column delta for one move
    pub fn step(self) -> i32 {
        match self {
            DirX::TowardPaddle => 1,
            DirX::AwayFromPaddle => -1,
        }
    }
}

/// Vertical ball direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirY {
    TowardTop,
    Straight,
    TowardBottom,
}

impl DirY {
    /// Row delta for one move
    pub fn step(self) -> i32 {
        self.to_wire() as i32
    }

    pub fn reversed(self) -> Self {
        match self {
            DirY::TowardTop => DirY::TowardBottom,
            DirY::Straight => DirY::Straight,
            DirY::TowardBottom => DirY::TowardTop,
        }
    }

    pub fn to_wire(self) -> i8 {
        match self {
            DirY::TowardTop => 1,
            DirY::Straight => 0,
            DirY::TowardBottom => -1,
        }
    }

    /// Any value other than +1/-1 neither moves the ball nor bounces it
    pub fn from_wire(value: i8) -> Self {
        match value {
            1 => DirY::TowardTop,
            -1 => DirY::TowardBottom,
            _ => DirY::Straight,
        }
    }
}

/// Ball component - the single pixel handed between boards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: Point,
    pub dir_x: DirX,
    pub dir_y: DirY,
}

impl Ball {
    /// Place the ball heading for the local paddle in a straight line
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            pos: Point::new(x, y),
            dir_x: DirX::TowardPaddle,
            dir_y: DirY::Straight,
        }
    }

    pub fn initialize(&mut self, x: i32, y: i32) {
        *self = Self::new(x, y);
    }

    pub fn current_position(&self) -> Point {
        self.pos
    }

    /// Back to the serve position after a point
    pub fn reset(&mut self) {
        self.initialize(Params::BALL_START_X, Params::BALL_START_Y);
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(Params::BALL_START_X, Params::BALL_START_Y)
    }
}

/// Debounced navswitch push, as seen by the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleInput {
    Up,
    Down,
    #[default]
    None,
}

/// Paddle component - a vertical bar on the goal column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    top: Point,
    bottom: Point,
}

impl Paddle {
    pub fn new() -> Self {
        Self {
            top: Point::new(Params::PADDLE_X, Params::PADDLE_TOP_INIT_Y),
            bottom: Point::new(Params::PADDLE_X, Params::PADDLE_BOTTOM_INIT_Y),
        }
    }

    pub fn initialize(&mut self) {
        *self = Self::new();
    }

    pub fn top(&self) -> Point {
        self.top
    }

    pub fn bottom(&self) -> Point {
        self.bottom
    }

    /// Inclusive row test against the paddle's extent
    pub fn covers_row(&self, y: i32) -> bool {
        y >= self.bottom.y && y <= self.top.y
    }

    /// Shift by `dy` rows. Callers keep the paddle on the grid.
    pub(crate) fn shift(&mut self, dy: i32) {
        self.top.y += dy;
        self.bottom.y += dy;
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}
