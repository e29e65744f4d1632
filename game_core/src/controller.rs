//! Session controller: drives the FSM and owns the frame loop bookkeeping.
//!
//! Entry into `Playing` registers the frame request and jump input; exit
//! releases both. At most one frame request is pending at any time, and a
//! callback carrying any other handle is ignored, so a restart can never
//! leave a second loop running.

use crate::{
    record_high_score, Config, FsmState, GameAction, GameFsm, GameRng, HighScoreStore, Metrics,
    SceneView, Session, TransitionResult,
};
use rand::Rng;

/// Identifier of a scheduled frame callback (e.g. a `requestAnimationFrame` id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host services the controller needs: scheduling, input wiring, and display.
pub trait Platform {
    /// Schedule one call to [`GameController::on_frame`]
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Start delivering jump events to [`GameController::on_jump`]
    fn attach_jump_input(&mut self);
    fn detach_jump_input(&mut self);

    /// Lay out the ground tiles for the session's viewport
    fn build_ground(&mut self, config: &Config);
    fn present(&mut self, scene: &SceneView);

    fn show_state(&mut self, state: FsmState);
    fn show_score(&mut self, score: u32);
    fn show_final(&mut self, score: u32, high_score: u32);
}

/// Final numbers of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverInfo {
    pub score: u32,
    pub high_score: u32,
}

pub struct GameController<P, S, M> {
    platform: P,
    store: S,
    metrics: M,
    fsm: GameFsm,
    rng: GameRng,
    session: Option<Session>,
    pending_frame: Option<FrameHandle>,
    input_attached: bool,
    last_result: Option<GameOverInfo>,
}

impl<P: Platform, S: HighScoreStore, M: Metrics> GameController<P, S, M> {
    pub fn new(platform: P, store: S, metrics: M, rng: GameRng) -> Self {
        Self {
            platform,
            store,
            metrics,
            fsm: GameFsm::new(),
            rng,
            session: None,
            pending_frame: None,
            input_attached: false,
            last_result: None,
        }
    }

    /// Show the menu with the ground already laid out
    pub fn init(&mut self) {
        let config = Config::from_metrics(&self.metrics.snapshot());
        self.platform.build_ground(&config);
        self.platform.show_state(self.fsm.state());
    }

    /// Menu -> Playing
    pub fn start(&mut self) -> TransitionResult {
        self.enter_playing(GameAction::Start)
    }

    /// GameOver -> Playing
    pub fn play_again(&mut self) -> TransitionResult {
        self.enter_playing(GameAction::PlayAgain)
    }

    fn enter_playing(&mut self, action: GameAction) -> TransitionResult {
        let result = self.fsm.transition(action);
        if !result.success() {
            return result;
        }

        self.release_loop();

        let session = Session::new(&self.metrics, GameRng::new(self.rng.0.gen()));
        self.platform.build_ground(&session.config);
        self.platform.show_score(0);
        self.platform.present(&session.scene());
        self.session = Some(session);

        self.platform.attach_jump_input();
        self.input_attached = true;
        self.pending_frame = Some(self.platform.request_frame());

        self.platform.show_state(FsmState::Playing);
        log::info!("Session started ({:?})", action);
        result
    }

    /// Frame callback. Steps the session unless `handle` is stale.
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if self.pending_frame != Some(handle) {
            log::debug!("Ignoring stale frame {:?}", handle);
            return;
        }
        self.pending_frame = None;

        if !self.fsm.is_playing() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let ended = session.step();
        self.platform.present(&session.scene());
        if session.events.pipes_passed > 0 {
            self.platform.show_score(session.score.points);
        }

        if ended {
            self.game_over();
        } else {
            self.pending_frame = Some(self.platform.request_frame());
        }
    }

    /// Jump input. Ignored outside `Playing`.
    pub fn on_jump(&mut self) {
        if !self.fsm.is_playing() {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            session.jump();
        }
    }

    fn game_over(&mut self) {
        self.fsm.transition(GameAction::Collide);
        self.release_loop();

        let score = self.score();
        let high_score = record_high_score(&mut self.store, score);
        let info = GameOverInfo { score, high_score };
        self.last_result = Some(info);

        if let Some(session) = &self.session {
            log::info!(
                "Game over after {} frames: score {}, high score {}",
                session.frame,
                score,
                high_score
            );
        }

        self.platform.show_state(FsmState::GameOver);
        self.platform.show_final(score, high_score);
    }

    /// Cancel the pending frame and unhook jump input, if either is live
    fn release_loop(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.platform.cancel_frame(handle);
        }
        if self.input_attached {
            self.platform.detach_jump_input();
            self.input_attached = false;
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn score(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.score.points)
    }

    pub fn high_score(&self) -> u32 {
        self.store.high_score()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn last_result(&self) -> Option<GameOverInfo> {
        self.last_result
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}
