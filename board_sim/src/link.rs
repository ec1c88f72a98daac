//! Simulated infrared link with optional byte loss and a traffic log

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use game_core::hal::loopback::LoopbackLink;
use game_core::hal::IrLink;
use game_core::GameRng;
use proto::{HandoffPacket, Signal};
use rand::Rng;
use serde::Serialize;
use tracing::warn;

/// What a sent byte completed, as its sender meant it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WireMessage {
    Signal(Signal),
    Handoff(HandoffPacket),
}

/// One byte put on the wire
#[derive(Debug, Clone, Serialize)]
pub struct TraceEntry {
    pub tick: u64,
    pub from: char,
    pub byte: u8,
    pub dropped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<WireMessage>,
}

pub type Trace = Rc<RefCell<Vec<TraceEntry>>>;

/// Shared scheduler tick counter, so trace entries line up across boards
pub type Clock = Rc<Cell<u64>>;

pub struct SimLink {
    inner: LoopbackLink,
    name: char,
    loss: f64,
    rng: GameRng,
    trace: Trace,
    clock: Clock,
    /// Sender has left Init, so its bytes are packet halves
    in_match: bool,
    first_half: Option<u8>,
}

impl SimLink {
    pub fn new(
        inner: LoopbackLink,
        name: char,
        loss: f64,
        seed: u64,
        trace: Trace,
        clock: Clock,
    ) -> Self {
        Self {
            inner,
            name,
            loss,
            rng: GameRng::new(seed),
            trace,
            clock,
            in_match: false,
            first_half: None,
        }
    }

    pub fn set_in_match(&mut self, in_match: bool) {
        self.in_match = in_match;
    }

    fn decode_sent(&mut self, byte: u8) -> Option<WireMessage> {
        if !self.in_match {
            return Signal::from_byte(byte).map(WireMessage::Signal);
        }
        match self.first_half.take() {
            Some(first) => Some(WireMessage::Handoff(HandoffPacket::from_bytes([
                first, byte,
            ]))),
            None => {
                self.first_half = Some(byte);
                None
            }
        }
    }
}

impl IrLink for SimLink {
    fn read_ready(&mut self) -> bool {
        self.inner.read_ready()
    }

    fn getc(&mut self) -> u8 {
        if !self.inner.read_ready() {
            // The second byte of a packet went missing
            warn!(board = %self.name, "Read from an empty link");
        }
        self.inner.getc()
    }

    fn putc(&mut self, byte: u8) {
        let dropped = self.loss > 0.0 && self.rng.0.gen_bool(self.loss);
        if dropped {
            warn!(board = %self.name, byte, "Byte lost in transit");
        } else {
            self.inner.putc(byte);
        }
        let message = self.decode_sent(byte);
        self.trace.borrow_mut().push(TraceEntry {
            tick: self.clock.get(),
            from: self.name,
            byte,
            dropped,
            message,
        });
    }
}
