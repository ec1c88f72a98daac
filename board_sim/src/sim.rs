//! Two boards wired back to back, stepped one scheduler tick at a time

use std::rc::Rc;

use game_core::hal::loopback::LoopbackLink;
use game_core::{Board, Config, ConfigError, Events, GameState};
use tracing::{debug, info};

use crate::bot::{BotNav, BotView};
use crate::display::{ConsoleLed, MatrixDisplay};
use crate::link::{Clock, SimLink, Trace};

pub type SimBoard = Board<SimLink, BotNav, MatrixDisplay, ConsoleLed>;

/// Scheduler ticks a run gets by default: 200 s at the default 10 kHz
pub const DEFAULT_TICKS: u64 = 2_000_000;

#[derive(Debug, Clone, Copy)]
pub struct SimOptions {
    pub seed: u64,
    pub loss: f64,
    pub skill: f64,
}

pub struct Simulation {
    pub a: SimBoard,
    pub b: SimBoard,
    trace: Trace,
    clock: Clock,
}

impl Simulation {
    /// Board A's bot serves; B waits for the start signal
    pub fn new(config: Config, options: SimOptions) -> Result<Self, ConfigError> {
        let trace = Trace::default();
        let clock = Clock::default();
        let (wire_a, wire_b) = LoopbackLink::pair();
        let link = |wire, name, seed| {
            SimLink::new(
                wire,
                name,
                options.loss,
                seed,
                Rc::clone(&trace),
                Rc::clone(&clock),
            )
        };
        let seed = options.seed;

        let a = Board::new(
            config.clone(),
            link(wire_a, 'A', seed),
            BotNav::new(seed.wrapping_add(1), options.skill, true),
            MatrixDisplay::new(),
            ConsoleLed::new('A'),
        )?;
        let b = Board::new(
            config,
            link(wire_b, 'B', seed.wrapping_add(2)),
            BotNav::new(seed.wrapping_add(3), options.skill, false),
            MatrixDisplay::new(),
            ConsoleLed::new('B'),
        )?;

        Ok(Self { a, b, trace, clock })
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn is_finished(&self) -> bool {
        self.a.session().state() == GameState::End && self.b.session().state() == GameState::End
    }

    /// Let both bots look at their boards, then run one tick on each
    pub fn step(&mut self, tick: u64) {
        self.clock.set(tick);
        let events_a = Self::step_board(&mut self.a);
        let events_b = Self::step_board(&mut self.b);
        for (name, events) in [('A', events_a), ('B', events_b)] {
            if events.scored_against {
                info!(board = %name, tick, "Point conceded");
            }
            if events.game_over {
                info!(board = %name, tick, "Game over");
            }
            if events.ball_received {
                debug!(board = %name, tick, "Ball received");
            }
        }
    }

    fn step_board(board: &mut SimBoard) -> Events {
        let session = board.session().clone();
        let connected = board.is_connected();
        board.navswitch.plan(BotView {
            session: &session,
            connected,
        });
        board.link.set_in_match(session.state() != GameState::Init);
        board.tick()
    }

    /// Run until both boards reach End or `ticks` run out. Returns the tick
    /// the match finished on; `on_tick` sees the boards after every tick.
    pub fn run(&mut self, ticks: u64, mut on_tick: impl FnMut(u64, &Self)) -> Option<u64> {
        for tick in 0..ticks {
            self.step(tick);
            on_tick(tick, self);
            if self.is_finished() {
                // Put the result text up without waiting for the display slot
                self.a.display_task();
                self.b.display_task();
                return Some(tick);
            }
        }
        None
    }

    /// Both LED matrices side by side, or the scrolling text where one is up
    pub fn render(&self) -> String {
        let rows = |board: &SimBoard| match board.display.text() {
            Some(text) => vec![format!("{text:<5}")],
            None => board.display.rows(),
        };
        let (left, right) = (rows(&self.a), rows(&self.b));
        (0..left.len().max(right.len()))
            .map(|i| {
                let l = left.get(i).map(String::as_str).unwrap_or("     ");
                let r = right.get(i).map(String::as_str).unwrap_or("");
                format!("  {l}   {r}\n")
            })
            .collect()
    }
}
