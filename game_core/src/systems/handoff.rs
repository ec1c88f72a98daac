use proto::{HandoffPacket, PACKET_LEN};
use tracing::debug;

use crate::{Ball, DirX, DirY, Params};

/// The two boards face each other, so rows are mirrored top-to-bottom.
fn mirror_row(y: i32) -> i32 {
    Params::TOP_WALL_Y - y
}

/// Build the packet that hands the ball to the peer.
///
/// `local_score` is this board's tally of points conceded, which the peer
/// adopts as its own score.
pub fn encode_handoff(ball: &Ball, local_score: u8) -> HandoffPacket {
    HandoffPacket {
        row: mirror_row(ball.pos.y) as u8,
        score: local_score,
        dir_y: ball.dir_y.reversed().to_wire(),
    }
}

/// Take over the ball from a received packet and return the score it carried.
///
/// The ball re-enters on the border column heading for the local paddle. Rows
/// beyond the top wall (only possible from a garbled packet) are clamped so
/// the ball stays on the grid.
pub fn apply_handoff(ball: &mut Ball, packet: HandoffPacket) -> u8 {
    ball.pos.x = Params::BORDER_X;
    ball.pos.y = i32::from(packet.row).min(Params::TOP_WALL_Y);
    ball.dir_x = DirX::TowardPaddle;
    ball.dir_y = DirY::from_wire(packet.dir_y);
    debug!(row = ball.pos.y, dir_y = ?ball.dir_y, score = packet.score, "Ball received");
    packet.score
}

impl Ball {
    pub fn encode_for_transfer(&self, local_score: u8) -> [u8; PACKET_LEN] {
        encode_handoff(self, local_score).to_bytes()
    }

    pub fn decode_from_transfer(&mut self, bytes: [u8; PACKET_LEN]) -> u8 {
        apply_handoff(self, HandoffPacket::from_bytes(bytes))
    }
}
