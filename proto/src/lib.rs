//! Infrared link protocol for two-board Pong
//!
//! The link carries single bytes with no framing, acknowledgment or checksum.
//! Three kinds of traffic exist:
//!
//! * `READY` - exchanged once by both boards before play
//! * `START` - sent by whichever board's player starts the match
//! * handoff packet - two bytes sent whenever the ball leaves a board
//!
//! Handoff packet layout:
//!
//! ```text
//! byte 0:  7 6 5 4 | 3 2 1 0
//!          row     | score
//! byte 1:  direction_y as i8 (two's complement)
//! ```
//!
//! `row` is already expressed in the receiver's frame and `score` is truncated
//! to its low nibble. A garbled or half-received packet cannot be told apart
//! from a valid one.

use serde::Serialize;

// ============================================================================
// Sentinel signals
// ============================================================================

/// Handshake byte, sent once by each board when its player confirms
pub const READY: u8 = b'R';

/// Start-of-match byte
pub const START: u8 = b'P';

/// Number of bytes in a handoff packet
pub const PACKET_LEN: usize = 2;

const ROW_SHIFT: u8 = 4;
const NIBBLE_MASK: u8 = 0b0000_1111;

/// Largest score the packet can carry
pub const MAX_WIRE_SCORE: u8 = NIBBLE_MASK;

/// Single-byte control signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Signal {
    Ready,
    Start,
}

impl Signal {
    pub fn to_byte(self) -> u8 {
        match self {
            Signal::Ready => READY,
            Signal::Start => START,
        }
    }

    /// Returns `None` for any byte that is not a known sentinel
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            READY => Some(Signal::Ready),
            START => Some(Signal::Start),
            _ => None,
        }
    }
}

// ============================================================================
// Handoff packet
// ============================================================================

/// Ball handoff, already mirrored into the receiver's coordinate frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandoffPacket {
    /// Ball row as the receiver sees it (4 bits on the wire)
    pub row: u8,
    /// Sender's tally for the receiver's player (4 bits on the wire)
    pub score: u8,
    /// Vertical direction in the receiver's frame: 1, 0 or -1
    pub dir_y: i8,
}

impl HandoffPacket {
    pub fn new(row: u8, score: u8, dir_y: i8) -> Self {
        Self { row, score, dir_y }
    }

    /// Pack into the two wire bytes. Fields wider than a nibble are truncated.
    pub fn to_bytes(&self) -> [u8; PACKET_LEN] {
        let row_and_score = ((self.row & NIBBLE_MASK) << ROW_SHIFT) | (self.score & NIBBLE_MASK);
        [row_and_score, self.dir_y as u8]
    }

    /// Unpack the two wire bytes. Total: every byte pair decodes to something.
    pub fn from_bytes(bytes: [u8; PACKET_LEN]) -> Self {
        Self {
            row: bytes[0] >> ROW_SHIFT,
            score: bytes[0] & NIBBLE_MASK,
            dir_y: bytes[1] as i8,
        }
    }
}
