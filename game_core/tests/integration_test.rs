use game_core::hal::loopback::LoopbackLink;
use game_core::hal::{Display, Indicator, IrLink, NavButton, NavSwitch};
use game_core::*;

#[derive(Default)]
struct ScriptedNav {
    pending: Vec<NavButton>,
    current: Vec<NavButton>,
}

impl ScriptedNav {
    fn press(&mut self, button: NavButton) {
        self.pending.push(button);
    }
}

impl NavSwitch for ScriptedNav {
    fn update(&mut self) {
        self.current = std::mem::take(&mut self.pending);
    }

    fn push_event(&mut self, button: NavButton) -> bool {
        self.current.contains(&button)
    }
}

#[derive(Default)]
struct TextDisplay {
    texts: Vec<String>,
}

impl Display for TextDisplay {
    fn clear(&mut self) {}
    fn draw_line(&mut self, _from: Point, _to: Point) {}
    fn draw_point(&mut self, _point: Point) {}
    fn scroll_text(&mut self, msg: &str, _speed: u32) {
        self.texts.push(msg.to_string());
    }
    fn update(&mut self) {}
}

#[derive(Default)]
struct Led {
    on: bool,
    pulses: usize,
}

impl Indicator for Led {
    fn set(&mut self, on: bool) {
        if on && !self.on {
            self.pulses += 1;
        }
        self.on = on;
    }
}

type TestBoard = Board<LoopbackLink, ScriptedNav, TextDisplay, Led>;

/// Low scheduler rate so a whole match fits in a few hundred ticks
fn fast_config() -> Config {
    Config {
        scheduler_rate: 20,
        input_rate: 20,
        game_rate: 2,
        display_rate: 20,
        ..Config::default()
    }
}

fn board_pair() -> (TestBoard, TestBoard) {
    let (a, b) = LoopbackLink::pair();
    let make = |link| {
        Board::new(
            fast_config(),
            link,
            ScriptedNav::default(),
            TextDisplay::default(),
            Led::default(),
        )
        .unwrap()
    };
    (make(a), make(b))
}

fn connect(a: &mut TestBoard, b: &mut TestBoard) {
    a.navswitch.press(NavButton::Push);
    b.navswitch.press(NavButton::Push);
    for _ in 0..4 {
        a.tick();
        b.tick();
    }
    assert!(a.is_connected() && b.is_connected());
}

#[test]
fn test_full_match_over_loopback() {
    let (mut a, mut b) = board_pair();
    connect(&mut a, &mut b);
    assert_eq!(a.display.texts, vec![Params::START_MESSAGE.to_string()]);

    // A serves
    a.navswitch.press(NavButton::Push);
    a.tick();
    b.tick();
    assert_eq!(a.session().state(), GameState::Playing);
    assert_eq!(b.session().state(), GameState::Playing);
    assert!(!a.led.on && !b.led.on, "LED goes dark when play starts");

    // B parks its paddle on rows 4..=6, leaving the serve row open
    for _ in 0..2 {
        b.navswitch.press(NavButton::South);
        b.tick();
        a.tick();
    }
    assert_eq!(b.session().paddle().bottom().y, 4);

    let mut ticks = 0;
    while !(a.session().state() == GameState::End && b.session().state() == GameState::End) {
        a.tick();
        b.tick();
        ticks += 1;
        assert!(ticks < 2_000, "Match did not finish");
    }
    // Let the display tasks render the result
    a.tick();
    b.tick();

    assert_eq!(a.session().outcome(), Some(Outcome::Win));
    assert_eq!(b.session().outcome(), Some(Outcome::Lose));
    assert_eq!(a.session().score().this, 3);
    assert_eq!(b.session().score().their, 3);
    assert_eq!(a.display.texts.last().map(String::as_str), Some("Win 3"));
    assert_eq!(b.display.texts.last().map(String::as_str), Some("Lose 0"));
    assert_eq!(b.led.pulses, 1 + 3, "Handshake plus one pulse per point");
}

struct Pair {
    a: Session,
    b: Session,
    link_a: LoopbackLink,
    link_b: LoopbackLink,
    led: Led,
}

impl Pair {
    /// A serves; B has already consumed the start byte
    fn started() -> Self {
        let (mut link_a, mut link_b) = LoopbackLink::pair();
        let mut led = Led::default();
        let mut a = Session::new(Params::WIN_SCORE);
        let mut b = Session::new(Params::WIN_SCORE);
        a.start_local(&mut link_a, &mut led);
        assert_eq!(link_b.getc(), proto::START);
        b.start_remote(&mut led);
        Self {
            a,
            b,
            link_a,
            link_b,
            led,
        }
    }

    fn step(&mut self) -> (Events, Events) {
        let ea = self.a.game_tick(&mut self.link_a, &mut self.led);
        let eb = self.b.game_tick(&mut self.link_b, &mut self.led);
        (ea, eb)
    }

    /// Tick both boards until A hands the ball over. B skips that last tick,
    /// so the packet is still on the wire.
    fn run_until_a_sends(&mut self) {
        loop {
            let ea = self.a.game_tick(&mut self.link_a, &mut self.led);
            if ea.ball_sent {
                return;
            }
            self.b.game_tick(&mut self.link_b, &mut self.led);
        }
    }

    fn packets_in_flight(&self) -> usize {
        (self.link_a.pending() + self.link_b.pending()) / proto::PACKET_LEN
    }
}

#[test]
fn test_ball_owned_by_exactly_one_board() {
    let mut pair = Pair::started();
    let mut handoffs = 0;

    for _ in 0..200 {
        let (ea, eb) = pair.step();
        handoffs += usize::from(ea.ball_sent) + usize::from(eb.ball_sent);

        let visible = usize::from(pair.a.ball_visible()) + usize::from(pair.b.ball_visible());
        assert_eq!(
            visible + pair.packets_in_flight(),
            1,
            "Ball must be on one board or on the wire"
        );
    }

    // Centre hits on both sides: endless straight rally, nobody scores
    assert!(handoffs > 10, "Ball should bounce between boards");
    assert_eq!(pair.a.score(), Score::new());
    assert_eq!(pair.b.score(), Score::new());
}

#[test]
fn test_ball_row_mirrors_across_boards() {
    let mut pair = Pair::started();
    // Serve row meets the bottom end of A's paddle: ball leaves heading down
    pair.a.handle_paddle_input(PaddleInput::Down);

    pair.run_until_a_sends();
    let sent_from = *pair.a.ball();
    assert_eq!(pair.packets_in_flight(), 1);

    pair.b.game_tick(&mut pair.link_b, &mut pair.led);

    assert!(pair.b.ball_visible());
    let received = pair.b.ball();
    assert_eq!(received.pos.x, Params::BORDER_X);
    assert_eq!(received.pos.y, Params::TOP_WALL_Y - sent_from.pos.y);
    assert_eq!(received.dir_y, sent_from.dir_y.reversed());
    assert_eq!(received.dir_x, DirX::TowardPaddle);
}

#[test]
fn test_lost_packet_stalls_both_boards() {
    let mut pair = Pair::started();
    pair.run_until_a_sends();

    // Packet lost in flight
    while pair.link_b.read_ready() {
        pair.link_b.getc();
    }

    for _ in 0..50 {
        let (ea, eb) = pair.step();
        assert_eq!(ea, Events::new());
        assert_eq!(eb, Events::new());
    }
    assert!(!pair.a.ball_visible() && !pair.b.ball_visible());
    assert_eq!(pair.a.state(), GameState::Playing);
    assert_eq!(pair.b.state(), GameState::Playing);
}

#[test]
fn test_conceded_points_reach_the_other_board() {
    let mut pair = Pair::started();
    // B leaves the serve row open and concedes every point it receives
    pair.b.handle_paddle_input(PaddleInput::Down);
    pair.b.handle_paddle_input(PaddleInput::Down);

    let mut steps = 0;
    while pair.a.state() != GameState::End {
        pair.step();
        steps += 1;
        assert!(steps < 200);
    }

    assert_eq!(pair.b.score().their, 3);
    assert_eq!(pair.a.score().this, 3, "A adopts B's conceded tally");
    assert_eq!(pair.a.outcome(), Some(Outcome::Win));
    assert_eq!(pair.b.outcome(), Some(Outcome::Lose));
}
