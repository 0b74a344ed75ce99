use crate::controllers::zoom_pan::state::ZoomPanState;
use crate::controllers::zoom_pan::types::{CanvasSize, TouchPoint, ZoomState};
use crate::core::data::fractal_bounds::FractalBounds;

/// Stateful wrapper over [`ZoomPanState`] for a canvas of fixed size.
///
/// The caller keeps owning the bounds; every method that can move the view
/// returns the new bounds for the caller to store and render.
#[derive(Debug, Clone)]
pub struct ZoomPanController {
    canvas: CanvasSize,
    state: ZoomPanState,
}

impl ZoomPanController {
    #[must_use]
    pub fn new(canvas_width: u32, canvas_height: u32, initial_bounds: &FractalBounds) -> Self {
        Self {
            canvas: CanvasSize {
                width: canvas_width,
                height: canvas_height,
            },
            state: ZoomPanState::from_bounds(initial_bounds),
        }
    }

    /// A new canvas size starts over from `bounds`, dropping any drag.
    pub fn resize(&mut self, canvas_width: u32, canvas_height: u32, bounds: &FractalBounds) {
        *self = Self::new(canvas_width, canvas_height, bounds);
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn state(&self) -> ZoomPanState {
        self.state
    }

    #[must_use]
    pub fn zoom_state(&self) -> ZoomState {
        self.state.zoom_state()
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn pointer_down(&mut self, px: f64, py: f64) {
        self.state = self.state.pointer_down(px, py);
    }

    pub fn pointer_move(
        &mut self,
        px: f64,
        py: f64,
        bounds: &FractalBounds,
    ) -> Option<FractalBounds> {
        let transition = self.state.pointer_move(px, py, self.canvas, bounds);
        self.state = transition.state;
        transition.bounds
    }

    pub fn pointer_up(&mut self) {
        self.state = self.state.pointer_up();
    }

    pub fn wheel(
        &mut self,
        delta_y: f64,
        px: f64,
        py: f64,
        bounds: &FractalBounds,
    ) -> Option<FractalBounds> {
        let transition = self.state.wheel(delta_y, px, py, self.canvas, bounds);
        self.state = transition.state;
        transition.bounds
    }

    /// Returns `bounds` unchanged when `factor` is not finite and positive.
    pub fn zoom(&mut self, px: f64, py: f64, factor: f64, bounds: &FractalBounds) -> FractalBounds {
        let transition = self.state.zoom(px, py, factor, self.canvas, bounds);
        self.state = transition.state;
        transition.bounds.unwrap_or(*bounds)
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        self.state = self.state.touch_start(touches);
    }

    pub fn touch_move(
        &mut self,
        touches: &[TouchPoint],
        bounds: &FractalBounds,
    ) -> Option<FractalBounds> {
        let transition = self.state.touch_move(touches, self.canvas, bounds);
        self.state = transition.state;
        transition.bounds
    }

    pub fn touch_end(&mut self) {
        self.state = self.state.touch_end();
    }

    pub fn reset(&mut self, default_bounds: &FractalBounds) {
        self.state = self.state.reset(default_bounds);
    }
}
