use proto::Signal;
use tracing::{debug, info};

use crate::fsm::GameState;
use crate::hal::{Display, Indicator, IrLink, NavButton, NavSwitch};
use crate::scheduler::{Scheduler, Task};
use crate::{Config, ConfigError, Events, Outcome, PaddleInput, Params, Session};

/// Pre-game link check: each side presses confirm to send `READY` and waits
/// to hear the peer's `READY`. Bytes other than `READY` are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Handshake {
    sent: bool,
    received: bool,
}

impl Handshake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.sent && self.received
    }

    /// One pass of the handshake loop. Returns true once complete.
    pub fn poll(
        &mut self,
        navswitch: &mut impl NavSwitch,
        link: &mut impl IrLink,
        led: &mut impl Indicator,
    ) -> bool {
        if self.is_complete() {
            return true;
        }

        navswitch.update();
        if link.read_ready() {
            let byte = link.getc();
            if Signal::from_byte(byte) == Some(Signal::Ready) {
                self.received = true;
            } else {
                debug!(byte, "Ignoring byte during handshake");
            }
        }
        if navswitch.push_event(NavButton::Push) {
            link.putc(Signal::Ready.to_byte());
            self.sent = true;
        }

        if self.is_complete() {
            led.set(true);
            info!("Link established");
        }
        self.is_complete()
    }
}

/// One board: session state, its peripherals and the task dispatcher
pub struct Board<L, N, D, I> {
    pub link: L,
    pub navswitch: N,
    pub display: D,
    pub led: I,
    session: Session,
    scheduler: Scheduler,
    handshake: Handshake,
    config: Config,
    end_text_shown: bool,
}

impl<L, N, D, I> Board<L, N, D, I>
where
    L: IrLink,
    N: NavSwitch,
    D: Display,
    I: Indicator,
{
    pub fn new(
        config: Config,
        link: L,
        navswitch: N,
        display: D,
        mut led: I,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        led.set(false);
        Ok(Self {
            link,
            navswitch,
            display,
            led,
            session: Session::new(config.win_score),
            scheduler: Scheduler::new(&config),
            handshake: Handshake::new(),
            config,
            end_text_shown: false,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_connected(&self) -> bool {
        self.handshake.is_complete()
    }

    /// Scheduler ticks run since the handshake completed
    pub fn uptime_ticks(&self) -> u64 {
        self.scheduler.ticks()
    }

    /// Run the handshake once; shows the start banner when it completes
    pub fn poll_handshake(&mut self) -> bool {
        if self.handshake.is_complete() {
            return true;
        }
        let done = self
            .handshake
            .poll(&mut self.navswitch, &mut self.link, &mut self.led);
        if done {
            self.display
                .scroll_text(Params::START_MESSAGE, self.config.text_scroll_speed);
        }
        done
    }

    /// One scheduler tick. Until the handshake completes this only polls the
    /// handshake. Returns the game events of any game task that ran.
    pub fn tick(&mut self) -> Events {
        if !self.poll_handshake() {
            return Events::new();
        }

        let mut events = Events::new();
        for task in self.scheduler.tick() {
            match task {
                Task::Input => self.input_task(),
                Task::Game => events = self.game_task(),
                Task::Display => self.display_task(),
            }
        }
        events
    }

    /// Navswitch polling: match start in Init, paddle movement while playing
    pub fn input_task(&mut self) {
        self.navswitch.update();
        match self.session.state() {
            GameState::Init => {
                if self.navswitch.push_event(NavButton::Push) {
                    self.session.start_local(&mut self.link, &mut self.led);
                }
                if self.link.read_ready() {
                    let byte = self.link.getc();
                    if Signal::from_byte(byte) == Some(Signal::Start) {
                        self.session.start_remote(&mut self.led);
                    } else {
                        debug!(byte, "Ignoring byte before match start");
                    }
                }
            }
            GameState::Playing => {
                let input = if self.navswitch.push_event(NavButton::North) {
                    PaddleInput::Up
                } else if self.navswitch.push_event(NavButton::South) {
                    PaddleInput::Down
                } else {
                    PaddleInput::None
                };
                self.session.handle_paddle_input(input);
            }
            GameState::End => {}
        }
    }

    pub fn game_task(&mut self) -> Events {
        self.session.game_tick(&mut self.link, &mut self.led)
    }

    /// Display refresh: paddle and ball while playing, result text at the end
    pub fn display_task(&mut self) {
        self.display.update();
        match self.session.state() {
            GameState::Init => {}
            GameState::Playing => {
                let paddle = self.session.paddle();
                self.display.clear();
                self.display.draw_line(paddle.top(), paddle.bottom());
                if self.session.ball_visible() {
                    self.display
                        .draw_point(self.session.ball().current_position());
                }
            }
            GameState::End => {
                if !self.end_text_shown {
                    let msg = end_message(&self.session);
                    self.display
                        .scroll_text(&msg, self.config.text_scroll_speed);
                    self.end_text_shown = true;
                }
            }
        }
    }
}

/// "Win N" or "Lose N", N being this board's score
pub fn end_message(session: &Session) -> String {
    let score = session.score().this;
    match session.outcome() {
        Some(Outcome::Win) => format!("Win {score}"),
        _ => format!("Lose {score}"),
    }
}
