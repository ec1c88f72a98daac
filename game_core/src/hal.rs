//! Board peripherals the game consumes
//!
//! Every call here is a non-blocking poll or a fire-and-forget write; the
//! game never waits on hardware.

use crate::Point;

/// Infrared serial link to the peer board
pub trait IrLink {
    /// True when at least one byte can be read
    fn read_ready(&mut self) -> bool;

    /// Consume one byte. Only meaningful after `read_ready` returned true.
    fn getc(&mut self) -> u8;

    /// Send one byte; no delivery feedback
    fn putc(&mut self, byte: u8);
}

/// Navswitch directions the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    North,
    South,
    Push,
}

/// Debounced, edge-triggered navswitch
pub trait NavSwitch {
    /// Sample the switch; push events refer to the latest sample
    fn update(&mut self);

    /// True if `button` went down between the last two samples
    fn push_event(&mut self, button: NavButton) -> bool;
}

/// 5x7 LED matrix with a text scroller
pub trait Display {
    fn clear(&mut self);
    fn draw_line(&mut self, from: Point, to: Point);
    fn draw_point(&mut self, point: Point);

    /// Clear the matrix and start scrolling `msg`
    fn scroll_text(&mut self, msg: &str, speed: u32);

    /// Refresh one step of the matrix multiplexing / scroller
    fn update(&mut self);
}

/// Single status LED
pub trait Indicator {
    fn set(&mut self, on: bool);
}

/// In-memory link between two boards in one process
pub mod loopback {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::IrLink;

    type Queue = Rc<RefCell<VecDeque<u8>>>;

    /// One end of a cross-connected byte pipe
    #[derive(Debug, Clone)]
    pub struct LoopbackLink {
        rx: Queue,
        tx: Queue,
    }

    impl LoopbackLink {
        /// Two endpoints; what one writes the other reads
        pub fn pair() -> (Self, Self) {
            let a_to_b: Queue = Rc::default();
            let b_to_a: Queue = Rc::default();
            (
                Self {
                    rx: Rc::clone(&b_to_a),
                    tx: Rc::clone(&a_to_b),
                },
                Self {
                    rx: a_to_b,
                    tx: b_to_a,
                },
            )
        }

        /// Bytes waiting to be read on this end
        pub fn pending(&self) -> usize {
            self.rx.borrow().len()
        }
    }

    impl IrLink for LoopbackLink {
        fn read_ready(&mut self) -> bool {
            !self.rx.borrow().is_empty()
        }

        /// A real UART would wait for the byte; an empty queue reads as 0.
        fn getc(&mut self) -> u8 {
            self.rx.borrow_mut().pop_front().unwrap_or(0)
        }

        fn putc(&mut self, byte: u8) {
            self.tx.borrow_mut().push_back(byte);
        }
    }

}
