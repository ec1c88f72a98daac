use proto::Signal;
use tracing::{debug, info};

use crate::fsm::{GameAction, GameFsm, GameState};
use crate::hal::{Indicator, IrLink};
use crate::{Ball, BallOutcome, Events, Outcome, Paddle, PaddleInput, Params, Score};

/// Everything one board knows about the current match.
///
/// The ball is only meaningful while `ball_visible` is true; while the peer
/// owns it the local copy is stale until the next handoff overwrites it.
///
/// The link has no framing: a packet is read as "any byte ready, then read
/// two". A byte lost in flight shifts every later packet by one byte, and a
/// packet that never arrives leaves the ball invisible on both boards for the
/// rest of the match. Neither case is detected.
#[derive(Debug, Clone)]
pub struct Session {
    fsm: GameFsm,
    score: Score,
    ball: Ball,
    paddle: Paddle,
    ball_visible: bool,
    player_num: u8,
    just_scored: bool,
    win_score: u8,
}

impl Session {
    pub fn new(win_score: u8) -> Self {
        Self {
            fsm: GameFsm::new(),
            score: Score::new(),
            ball: Ball::default(),
            paddle: Paddle::new(),
            ball_visible: false,
            player_num: 0,
            just_scored: false,
            win_score,
        }
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn ball_visible(&self) -> bool {
        self.ball_visible
    }

    /// 1 on the board whose player started the match, 0 otherwise
    pub fn player_num(&self) -> u8 {
        self.player_num
    }

    pub fn just_scored(&self) -> bool {
        self.just_scored
    }

    pub fn win_score(&self) -> u8 {
        self.win_score
    }

    /// Final result, once the match has ended
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.fsm.is_game_over() {
            return None;
        }
        Some(if self.score.this >= self.win_score {
            Outcome::Win
        } else {
            Outcome::Lose
        })
    }

    /// Local player started the match: tell the peer and serve.
    ///
    /// Returns false outside Init.
    pub fn start_local(&mut self, link: &mut impl IrLink, led: &mut impl Indicator) -> bool {
        if !self.fsm.transition(GameAction::StartLocal).success {
            return false;
        }
        link.putc(Signal::Start.to_byte());
        self.player_num = 1;
        self.ball_visible = true;
        self.ball.initialize(Params::BALL_START_X, Params::BALL_START_Y);
        led.set(false);
        info!("Match started locally, serving");
        true
    }

    /// Peer started the match; the ball begins on its side.
    ///
    /// Returns false outside Init.
    pub fn start_remote(&mut self, led: &mut impl Indicator) -> bool {
        if !self.fsm.transition(GameAction::StartRemote).success {
            return false;
        }
        led.set(false);
        info!("Match started by peer");
        true
    }

    /// Feed one navswitch reading to the paddle while playing
    pub fn handle_paddle_input(&mut self, input: PaddleInput) {
        if self.fsm.is_playing() {
            self.paddle.handle_input(input);
        }
    }

    /// One game-logic tick
    pub fn game_tick(&mut self, link: &mut impl IrLink, led: &mut impl Indicator) -> Events {
        let mut events = Events::new();
        if !self.fsm.is_playing() {
            return events;
        }

        // Score pulse lasts exactly one game tick
        if self.just_scored {
            self.just_scored = false;
            led.set(false);
        }

        if self.score.has_winner(self.win_score).is_some() {
            // Final packet so the peer learns the terminal score
            self.send_ball(link);
            self.fsm.transition(GameAction::GameOver);
            info!(this = self.score.this, their = self.score.their, "Match over");
            events.game_over = true;
        } else if self.ball_visible {
            match self.ball.advance_one_tick(&self.paddle) {
                BallOutcome::ScoredAgainstLocal => {
                    self.score.concede();
                    self.ball.reset();
                    led.set(true);
                    self.just_scored = true;
                    info!(their = self.score.their, "Point conceded");
                    events.scored_against = true;
                }
                BallOutcome::CrossedToPeer => {
                    self.send_ball(link);
                    self.ball_visible = false;
                    events.ball_sent = true;
                }
                BallOutcome::Moved => {}
            }
        } else if link.read_ready() {
            let bytes = [link.getc(), link.getc()];
            let reported = self.ball.decode_from_transfer(bytes);
            self.score.adopt(reported);
            self.ball_visible = true;
            debug!(this = self.score.this, "Ball back on this board");
            events.ball_received = true;
        }

        events
    }

    fn send_ball(&self, link: &mut impl IrLink) {
        let bytes = self.ball.encode_for_transfer(self.score.their);
        debug!(?bytes, "Sending ball");
        for byte in bytes {
            link.putc(byte);
        }
    }
}
