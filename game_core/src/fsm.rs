//! Game State Machine
//!
//! Menu -> Playing -> GameOver -> Playing -> ...

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Menu,
    Playing,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Collide,
    PlayAgain,
}

/// Result of a state transition
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_state: FsmState,
    to_state: FsmState,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> FsmState {
        self.from_state
    }

    pub fn to_state(&self) -> FsmState {
        self.to_state
    }
}

/// Game Finite State Machine
#[derive(Debug)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Menu,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
            }
        } else {
            log::warn!("Rejected {:?} while in {:?}", action, from_state);
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Menu, GameAction::Start) => Some(FsmState::Playing),
            (FsmState::Playing, GameAction::Collide) => Some(FsmState::GameOver),
            (FsmState::GameOver, GameAction::PlayAgain) => Some(FsmState::Playing),

            // Invalid transition
            _ => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), FsmState::Menu);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Start);
        assert!(result.success());
        assert_eq!(result.from_state(), FsmState::Menu);
        assert_eq!(result.to_state(), FsmState::Playing);
        assert_eq!(fsm.state(), FsmState::Playing);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut fsm = GameFsm::new();
        assert!(!fsm.transition(GameAction::Collide).success());
        assert!(!fsm.transition(GameAction::PlayAgain).success());
        assert_eq!(fsm.state(), FsmState::Menu);

        fsm.transition(GameAction::Start);
        assert!(!fsm.transition(GameAction::Start).success());
        assert!(!fsm.transition(GameAction::PlayAgain).success());
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_full_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::Collide);
        assert_eq!(fsm.state(), FsmState::GameOver);
        assert!(!fsm.is_playing());
        fsm.transition(GameAction::PlayAgain);
        assert!(fsm.is_playing());
    }
}
