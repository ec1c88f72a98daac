/// Per-board score tracking
///
/// `this` is adopted from the peer's handoff packets; `their` counts the
/// points this board has conceded and travels in every packet it sends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub this: u8,
    pub their: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn concede(&mut self) {
        self.their = self.their.saturating_add(1);
    }

    /// Take the score reported by the peer as our own
    pub fn adopt(&mut self, reported: u8) {
        self.this = reported;
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Outcome> {
        if self.this >= win_score {
            Some(Outcome::Win)
        } else if self.their >= win_score {
            Some(Outcome::Lose)
        } else {
            None
        }
    }
}

/// Final result as shown on this board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// Random number generator for simulated players
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during the last game tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub scored_against: bool,
    pub ball_sent: bool,
    pub ball_received: bool,
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }
}
