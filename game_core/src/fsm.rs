//! Game state machine
//!
//! `Init -> Playing -> End`. End is terminal for the life of the process.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Init,
    Playing,
    End,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Local player pressed confirm; this board serves
    StartLocal,
    /// Start signal received from the peer
    StartRemote,
    /// A score reached the win threshold
    GameOver,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: GameState,
    pub to_state: GameState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Attempt a transition; invalid actions leave the state untouched
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;
        let next = self.next_state(action);
        if let Some(to_state) = next {
            self.state = to_state;
        }
        TransitionResult {
            success: next.is_some(),
            from_state,
            to_state: self.state,
            action,
        }
    }

    fn next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            (GameState::Init, GameAction::StartLocal) => Some(GameState::Playing),
            (GameState::Init, GameAction::StartRemote) => Some(GameState::Playing),
            (GameState::Playing, GameAction::GameOver) => Some(GameState::End),
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.state == GameState::End
    }
}
