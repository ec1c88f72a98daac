//! Text-mode stand-in for the 5x7 LED matrix

use game_core::hal::{Display, Indicator};
use game_core::{Params, Point};
use tracing::debug;

const WIDTH: usize = Params::GRID_WIDTH as usize;
const HEIGHT: usize = Params::GRID_HEIGHT as usize;

#[derive(Debug, Default)]
pub struct MatrixDisplay {
    pixels: [[bool; WIDTH]; HEIGHT],
    text: Option<String>,
}

impl MatrixDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&mut self, point: Point) {
        let on_grid = (0..Params::GRID_WIDTH).contains(&point.x)
            && (0..Params::GRID_HEIGHT).contains(&point.y);
        if on_grid {
            self.pixels[point.y as usize][point.x as usize] = true;
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Rows of `#`/`.`, top wall first
    pub fn rows(&self) -> Vec<String> {
        self.pixels
            .iter()
            .rev()
            .map(|row| row.iter().map(|&on| if on { '#' } else { '.' }).collect())
            .collect()
    }
}

impl Display for MatrixDisplay {
    fn clear(&mut self) {
        self.pixels = [[false; WIDTH]; HEIGHT];
        self.text = None;
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs());
        let step = delta.signum();
        let mut point = from;
        for _ in 0..=steps {
            self.set(point);
            point += step;
        }
    }

    fn draw_point(&mut self, point: Point) {
        self.set(point);
    }

    fn scroll_text(&mut self, msg: &str, speed: u32) {
        self.clear();
        debug!(msg, speed, "Scrolling text");
        self.text = Some(msg.to_string());
    }

    fn update(&mut self) {}
}

/// Status LED that only reports changes
#[derive(Debug, Default)]
pub struct ConsoleLed {
    name: char,
    on: bool,
    pulses: u32,
}

impl ConsoleLed {
    pub fn new(name: char) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    pub fn pulses(&self) -> u32 {
        self.pulses
    }
}

impl Indicator for ConsoleLed {
    fn set(&mut self, on: bool) {
        if on != self.on {
            debug!(board = %self.name, on, "LED");
            if on {
                self.pulses += 1;
            }
        }
        self.on = on;
    }
}
