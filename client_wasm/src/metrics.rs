//! Display metrics read from CSS custom properties on `#app`

use game_core::{parse_length, Metrics, Params};
use web_sys::{Element, Window};

pub struct DomMetrics {
    window: Option<Window>,
    app: Option<Element>,
}

impl DomMetrics {
    pub fn new(app_id: &str) -> Self {
        let window = web_sys::window();
        let app = window
            .as_ref()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(app_id));
        if app.is_none() {
            log::warn!("#{} not found, using default metrics", app_id);
        }
        Self { window, app }
    }

    fn css_length(&self, name: &str, default: f32) -> f32 {
        let (Some(window), Some(app)) = (&self.window, &self.app) else {
            return default;
        };
        window
            .get_computed_style(app)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(name).ok())
            .map_or(default, |raw| parse_length(&raw, default))
    }

    fn viewport(&self, read: fn(&Window) -> Option<f64>, default: f32) -> f32 {
        self.window
            .as_ref()
            .and_then(read)
            .filter(|v| *v > 0.0)
            .map_or(default, |v| v as f32)
    }
}

impl Metrics for DomMetrics {
    fn block_size(&self) -> f32 {
        self.css_length("--block-size", Params::BLOCK_SIZE)
    }

    fn pipe_size(&self) -> f32 {
        self.css_length("--pipe-size", Params::PIPE_SIZE)
    }

    fn player_size(&self) -> f32 {
        self.css_length("--player-size", Params::PLAYER_SIZE)
    }

    fn ground_size(&self) -> f32 {
        self.css_length("--ground-size", Params::GROUND_SIZE)
    }

    fn viewport_width(&self) -> f32 {
        self.viewport(
            |w| w.inner_width().ok().and_then(|v| v.as_f64()),
            Params::VIEWPORT_WIDTH,
        )
    }

    fn viewport_height(&self) -> f32 {
        self.viewport(
            |w| w.inner_height().ok().and_then(|v| v.as_f64()),
            Params::VIEWPORT_HEIGHT,
        )
    }
}
