//! Simulated player pressing the navswitch

use game_core::hal::{NavButton, NavSwitch};
use game_core::{DirX, GameRng, GameState, Params, Session};
use rand::Rng;

/// Rows between the ball and the paddle centre when the bot lets a ball through
const MISS_DISTANCE: i32 = Params::PADDLE_SPAN / 2 + 2;

/// What the bot can see of its own board before deciding on a press
pub struct BotView<'a> {
    pub session: &'a Session,
    pub connected: bool,
}

/// How the bot means to meet the ball currently heading for its paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Aim {
    /// Hit it with the bottom end (-1), the centre (0) or the top end (1)
    Return(i32),
    Miss,
}

/// Navswitch driven by a seeded bot instead of a thumb
pub struct BotNav {
    rng: GameRng,
    /// Chance of returning each incoming ball, 0.0..=1.0
    skill: f64,
    serves: bool,
    aim: Option<Aim>,
    pending: Option<NavButton>,
    current: Option<NavButton>,
}

impl BotNav {
    pub fn new(seed: u64, skill: f64, serves: bool) -> Self {
        Self {
            rng: GameRng::new(seed),
            skill,
            serves,
            aim: None,
            pending: None,
            current: None,
        }
    }

    /// Choose the press the next navswitch sample will report
    pub fn plan(&mut self, view: BotView<'_>) {
        self.pending = if !view.connected {
            Some(NavButton::Push)
        } else {
            match view.session.state() {
                GameState::Init if self.serves => Some(NavButton::Push),
                GameState::Playing => self.chase(view.session),
                _ => None,
            }
        };
    }

    /// Decided once per approach, so one ball gets one plan
    fn aim_at(&mut self, session: &Session) -> Option<Aim> {
        let incoming = session.ball_visible()
            && session.ball().dir_x == DirX::TowardPaddle
            && !session.just_scored();
        if !incoming {
            self.aim = None;
            return None;
        }
        if self.aim.is_none() {
            self.aim = Some(if self.rng.0.gen_bool(self.skill) {
                Aim::Return(self.rng.0.gen_range(-1..=1))
            } else {
                Aim::Miss
            });
        }
        self.aim
    }

    /// Steer the paddle centre toward the row the current aim calls for
    fn chase(&mut self, session: &Session) -> Option<NavButton> {
        let aim = self.aim_at(session)?;
        let ball_row = session.ball().current_position().y;
        let target = match aim {
            Aim::Return(end) => ball_row - end,
            Aim::Miss if ball_row >= MISS_DISTANCE => ball_row - MISS_DISTANCE,
            Aim::Miss => ball_row + MISS_DISTANCE,
        };
        let centre = session.paddle().bottom().y + Params::PADDLE_SPAN / 2;
        if target > centre {
            Some(NavButton::South)
        } else if target < centre {
            Some(NavButton::North)
        } else {
            None
        }
    }
}

impl NavSwitch for BotNav {
    fn update(&mut self) {
        self.current = self.pending.take();
    }

    fn push_event(&mut self, button: NavButton) -> bool {
        self.current == Some(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::hal::loopback::LoopbackLink;
    use game_core::hal::Indicator;
    use game_core::PaddleInput;

    struct NoLed;

    impl Indicator for NoLed {
        fn set(&mut self, _on: bool) {}
    }

    fn serving_session() -> Session {
        let (mut link, _peer) = LoopbackLink::pair();
        let mut session = Session::new(Params::WIN_SCORE);
        session.start_local(&mut link, &mut NoLed);
        session
    }

    /// Let the bot steer for a few input polls, as between two game ticks
    fn steer(bot: &mut BotNav, session: &mut Session) {
        for _ in 0..10 {
            bot.plan(BotView {
                session: &*session,
                connected: true,
            });
            bot.update();
            let input = if bot.push_event(NavButton::North) {
                PaddleInput::Up
            } else if bot.push_event(NavButton::South) {
                PaddleInput::Down
            } else {
                PaddleInput::None
            };
            session.handle_paddle_input(input);
        }
    }

    #[test]
    fn test_bot_confirms_handshake() {
        let session = Session::new(Params::WIN_SCORE);
        let mut bot = BotNav::new(1, 1.0, false);
        bot.plan(BotView {
            session: &session,
            connected: false,
        });
        bot.update();
        assert!(bot.push_event(NavButton::Push));
    }

    #[test]
    fn test_only_server_starts_match() {
        let session = Session::new(Params::WIN_SCORE);
        let mut server = BotNav::new(1, 1.0, true);
        let mut receiver = BotNav::new(2, 1.0, false);
        for bot in [&mut server, &mut receiver] {
            bot.plan(BotView {
                session: &session,
                connected: true,
            });
            bot.update();
        }
        assert!(server.push_event(NavButton::Push));
        assert!(!receiver.push_event(NavButton::Push));
    }

    #[test]
    fn test_skilled_bot_covers_ball_row() {
        for seed in 0..20 {
            let mut session = serving_session();
            let mut bot = BotNav::new(seed, 1.0, true);
            steer(&mut bot, &mut session);
            assert!(
                session.paddle().covers_row(Params::BALL_START_Y),
                "seed {seed}: paddle should meet the serve"
            );
        }
    }

    #[test]
    fn test_skilled_bot_varies_the_hit() {
        let centres: Vec<i32> = (0..20)
            .map(|seed| {
                let mut session = serving_session();
                let mut bot = BotNav::new(seed, 1.0, true);
                steer(&mut bot, &mut session);
                session.paddle().bottom().y + 1
            })
            .collect();
        assert!(
            centres.iter().any(|&c| c != Params::BALL_START_Y),
            "Some returns should come off a paddle end"
        );
    }

    #[test]
    fn test_unskilled_bot_leaves_the_row_open() {
        for seed in 0..20 {
            let mut session = serving_session();
            let mut bot = BotNav::new(seed, 0.0, true);
            steer(&mut bot, &mut session);
            assert!(!session.paddle().covers_row(Params::BALL_START_Y));
        }
    }
}
