//! DOM-backed [`Platform`]: `requestAnimationFrame` scheduling, jump
//! listeners, and positioned elements that mirror the simulation.

use crate::dom::{create_div, ground_tile_count, html_element, set_px, set_style, set_visible};
use crate::input::{get_code_from_event, is_jump_key};
use game_core::{Aabb, Config, FrameHandle, FsmState, Platform, SceneView};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement, KeyboardEvent, MouseEvent, Window};

/// Element ids the page must provide
pub mod ids {
    pub const CONTAINER: &str = "game-container";
    pub const PLAYER: &str = "player";
    pub const GROUND: &str = "ground";
    pub const MENU: &str = "main-menu";
    pub const GAME_OVER: &str = "game-over-screen";
    pub const FINAL_SCORE: &str = "final-score";
    pub const HIGH_SCORE: &str = "high-score";
    pub const JUMP_BUTTON: &str = "Jump";
}

struct PipeElements {
    bottom: HtmlElement,
    top: HtmlElement,
}

pub struct DomPlatform {
    window: Window,
    document: Document,
    container: HtmlElement,
    player: HtmlElement,
    ground: HtmlElement,
    menu: HtmlElement,
    game_over: HtmlElement,
    final_score: HtmlElement,
    high_score: HtmlElement,
    score: HtmlElement,
    jump_button: Option<HtmlElement>,
    pipes: Vec<PipeElements>,
    // rAF id the frame callback is waiting on
    scheduled: Rc<Cell<Option<i32>>>,
    frame_cb: Closure<dyn FnMut(f64)>,
    jump_key_cb: Closure<dyn FnMut(KeyboardEvent)>,
    jump_click_cb: Closure<dyn FnMut(MouseEvent)>,
}

impl DomPlatform {
    pub fn new(window: Window, document: Document) -> Result<Self, JsValue> {
        let container = html_element(&document, ids::CONTAINER)?;
        let player = html_element(&document, ids::PLAYER)?;
        let ground = html_element(&document, ids::GROUND)?;
        let menu = html_element(&document, ids::MENU)?;
        let game_over = html_element(&document, ids::GAME_OVER)?;
        let final_score = html_element(&document, ids::FINAL_SCORE)?;
        let high_score = html_element(&document, ids::HIGH_SCORE)?;
        let jump_button = html_element(&document, ids::JUMP_BUTTON).ok();
        if jump_button.is_none() {
            log::info!("No #{} button, keyboard jump only", ids::JUMP_BUTTON);
        }

        let score = create_div(&document, &["score"])?;
        for (prop, value) in [
            ("position", "absolute"),
            ("top", "20px"),
            ("left", "20px"),
            ("color", "white"),
            ("text-shadow", "2px 2px 4px #000"),
            ("z-index", "2"),
        ] {
            set_style(&score, prop, value);
        }
        container.append_child(&score)?;

        set_style(&player, "position", "absolute");

        let scheduled = Rc::new(Cell::new(None));
        let frame_cb = {
            let scheduled = scheduled.clone();
            Closure::wrap(Box::new(move |_ts: f64| {
                if let Some(id) = scheduled.take() {
                    crate::with_controller(|c| c.on_frame(FrameHandle(id)));
                }
            }) as Box<dyn FnMut(f64)>)
        };
        let jump_key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if is_jump_key(&get_code_from_event(&event)) {
                event.prevent_default();
                crate::with_controller(|c| c.on_jump());
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        let jump_click_cb = Closure::wrap(Box::new(move |_event: MouseEvent| {
            crate::with_controller(|c| c.on_jump());
        }) as Box<dyn FnMut(MouseEvent)>);

        Ok(Self {
            window,
            document,
            container,
            player,
            ground,
            menu,
            game_over,
            final_score,
            high_score,
            score,
            jump_button,
            pipes: Vec::new(),
            scheduled,
            frame_cb,
            jump_key_cb,
            jump_click_cb,
        })
    }

    /// Pipe elements are created once per slot and reused across sessions
    fn ensure_pipes(&mut self, count: usize) -> Result<(), JsValue> {
        while self.pipes.len() < count {
            let slot = self.pipes.len().to_string();
            let bottom = create_div(&self.document, &["pipe", "bottom"])?;
            let top = create_div(&self.document, &["pipe", "top"])?;
            for (el, anchor) in [(&bottom, "bottom"), (&top, "top")] {
                el.set_attribute("data-id", &slot)?;
                set_style(el, "position", "absolute");
                set_style(el, anchor, "0");
                self.container.append_child(el)?;
            }
            self.pipes.push(PipeElements { bottom, top });
        }
        Ok(())
    }

    fn place_segment(el: &HtmlElement, bounds: &Aabb) {
        set_px(el, "left", bounds.left());
        set_px(el, "width", bounds.right() - bounds.left());
        set_px(el, "height", bounds.bottom() - bounds.top());
    }

    fn build_ground_tiles(&self, config: &Config) -> Result<(), JsValue> {
        self.ground.set_inner_html("");
        for _ in 0..ground_tile_count(config.viewport_width, config.ground_size) {
            let grass = self
                .document
                .create_element("img")?
                .dyn_into::<HtmlImageElement>()?;
            grass.set_src("grass.png");
            grass.set_alt("Grass");
            grass.set_width(1);
            self.ground.append_child(&grass)?;
        }
        Ok(())
    }
}

impl Platform for DomPlatform {
    fn request_frame(&mut self) -> FrameHandle {
        match self
            .window
            .request_animation_frame(self.frame_cb.as_ref().unchecked_ref())
        {
            Ok(id) => {
                self.scheduled.set(Some(id));
                FrameHandle(id)
            }
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                FrameHandle(-1)
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle.0);
        if self.scheduled.get() == Some(handle.0) {
            self.scheduled.set(None);
        }
    }

    fn attach_jump_input(&mut self) {
        if let Err(e) = self
            .document
            .add_event_listener_with_callback("keydown", self.jump_key_cb.as_ref().unchecked_ref())
        {
            log::error!("Failed to attach jump key listener: {:?}", e);
        }
        if let Some(button) = &self.jump_button {
            if let Err(e) = button
                .add_event_listener_with_callback("click", self.jump_click_cb.as_ref().unchecked_ref())
            {
                log::error!("Failed to attach jump button listener: {:?}", e);
            }
        }
    }

    fn detach_jump_input(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            "keydown",
            self.jump_key_cb.as_ref().unchecked_ref(),
        );
        if let Some(button) = &self.jump_button {
            let _ = button.remove_event_listener_with_callback(
                "click",
                self.jump_click_cb.as_ref().unchecked_ref(),
            );
        }
    }

    fn build_ground(&mut self, config: &Config) {
        if let Err(e) = self.build_ground_tiles(config) {
            log::warn!("Failed to build ground: {:?}", e);
        }
    }

    fn present(&mut self, scene: &SceneView) {
        set_px(&self.player, "left", scene.player.left());
        set_px(&self.player, "top", scene.player.top());
        set_px(&self.player, "width", scene.player.right() - scene.player.left());
        set_px(&self.player, "height", scene.player.bottom() - scene.player.top());

        let slots = scene.pipes.iter().map(|(slot, _)| slot + 1).max().unwrap_or(0);
        if let Err(e) = self.ensure_pipes(slots) {
            log::warn!("Failed to create pipe elements: {:?}", e);
            return;
        }
        for (slot, bounds) in &scene.pipes {
            let els = &self.pipes[*slot];
            Self::place_segment(&els.bottom, &bounds.bottom);
            Self::place_segment(&els.top, &bounds.top);
        }
    }

    fn show_state(&mut self, state: FsmState) {
        set_visible(&self.menu, state == FsmState::Menu);
        set_visible(&self.container, state == FsmState::Playing);
        set_visible(&self.game_over, state == FsmState::GameOver);
    }

    fn show_score(&mut self, score: u32) {
        self.score.set_text_content(Some(&score.to_string()));
    }

    fn show_final(&mut self, score: u32, high_score: u32) {
        self.final_score
            .set_text_content(Some(&format!("Score: {}", score)));
        self.high_score
            .set_text_content(Some(&format!("High Score: {}", high_score)));
    }
}
