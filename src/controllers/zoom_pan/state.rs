use crate::controllers::zoom_pan::types::{
    CanvasSize, TouchPoint, WHEEL_ZOOM_IN_FACTOR, WHEEL_ZOOM_OUT_FACTOR, ZoomState,
};
use crate::core::data::fractal_bounds::FractalBounds;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex;
use crate::core::util::zoom_bounds::zoom_bounds;

/// Result of feeding one gesture into a [`ZoomPanState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub state: ZoomPanState,
    pub bounds: Option<FractalBounds>,
}

impl Transition {
    fn unchanged(state: ZoomPanState) -> Self {
        Self {
            state,
            bounds: None,
        }
    }
}

/// Gesture state: where the view is centred, how far it is zoomed, and
/// whether a drag is in progress.
///
/// Each transition consumes the state and returns the next one, together
/// with new bounds when the gesture moved the view. Idle and Dragging are
/// the two modes; `dragging` tells them apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPanState {
    center_x: f64,
    center_y: f64,
    scale: f64,
    dragging: bool,
    last_pointer_x: f64,
    last_pointer_y: f64,
}

impl ZoomPanState {
    /// Idle at scale 1, centred on `bounds`.
    #[must_use]
    pub fn from_bounds(bounds: &FractalBounds) -> Self {
        let center = bounds.center();

        Self {
            center_x: center.real,
            center_y: center.imag,
            scale: 1.0,
            dragging: false,
            last_pointer_x: 0.0,
            last_pointer_y: 0.0,
        }
    }

    #[must_use]
    pub fn zoom_state(&self) -> ZoomState {
        ZoomState {
            center_x: self.center_x,
            center_y: self.center_y,
            scale: self.scale,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub fn last_pointer(&self) -> (f64, f64) {
        (self.last_pointer_x, self.last_pointer_y)
    }

    #[must_use]
    pub fn pointer_down(self, px: f64, py: f64) -> Self {
        Self {
            dragging: true,
            last_pointer_x: px,
            last_pointer_y: py,
            ..self
        }
    }

    /// Drags the view so the point under the pointer follows it. Ignored
    /// unless a drag is in progress.
    #[must_use]
    pub fn pointer_move(
        self,
        px: f64,
        py: f64,
        canvas: CanvasSize,
        bounds: &FractalBounds,
    ) -> Transition {
        if !self.dragging {
            return Transition::unchanged(self);
        }

        let delta_x = px - self.last_pointer_x;
        let delta_y = py - self.last_pointer_y;

        let real_delta = -(delta_x / f64::from(canvas.width)) * bounds.width();
        let imag_delta = -(delta_y / f64::from(canvas.height)) * bounds.height();

        Transition {
            state: Self {
                center_x: self.center_x + real_delta,
                center_y: self.center_y + imag_delta,
                last_pointer_x: px,
                last_pointer_y: py,
                ..self
            },
            bounds: Some(bounds.translate(real_delta, imag_delta)),
        }
    }

    #[must_use]
    pub fn pointer_up(self) -> Self {
        Self {
            dragging: false,
            ..self
        }
    }

    /// Zooms about the point under `(px, py)`, which stays under the cursor.
    /// Works whether or not a drag is in progress.
    #[must_use]
    pub fn wheel(
        self,
        delta_y: f64,
        px: f64,
        py: f64,
        canvas: CanvasSize,
        bounds: &FractalBounds,
    ) -> Transition {
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT_FACTOR
        } else {
            WHEEL_ZOOM_IN_FACTOR
        };

        self.zoom(px, py, factor, canvas, bounds)
    }

    /// Programmatic zoom: `factor > 1` zooms in, `factor < 1` zooms out.
    ///
    /// The complex point under `(px, py)` maps to the same pixel before and
    /// after. A factor that is not finite and positive leaves the state and
    /// bounds unchanged.
    #[must_use]
    pub fn zoom(
        self,
        px: f64,
        py: f64,
        factor: f64,
        canvas: CanvasSize,
        bounds: &FractalBounds,
    ) -> Transition {
        let scale = self.scale * factor;
        if !(factor.is_finite() && factor > 0.0 && scale.is_finite() && scale > 0.0) {
            return Transition::unchanged(self);
        }

        let anchor = pixel_to_complex(px, py, canvas.width, canvas.height, bounds);
        let extent = zoom_bounds(0.0, 0.0, scale);
        let fraction_x = px / f64::from(canvas.width);
        let fraction_y = py / f64::from(canvas.height);

        let center_x = anchor.real + (0.5 - fraction_x) * extent.width();
        let center_y = anchor.imag + (0.5 - fraction_y) * extent.height();

        Transition {
            state: Self {
                center_x,
                center_y,
                scale,
                ..self
            },
            bounds: Some(zoom_bounds(center_x, center_y, scale)),
        }
    }

    /// Starts a drag only for a single touch; multi-touch is ignored.
    #[must_use]
    pub fn touch_start(self, touches: &[TouchPoint]) -> Self {
        match touches {
            [touch] => self.pointer_down(touch.x, touch.y),
            _ => self,
        }
    }

    #[must_use]
    pub fn touch_move(
        self,
        touches: &[TouchPoint],
        canvas: CanvasSize,
        bounds: &FractalBounds,
    ) -> Transition {
        match touches {
            [touch] if self.dragging => self.pointer_move(touch.x, touch.y, canvas, bounds),
            _ => Transition::unchanged(self),
        }
    }

    #[must_use]
    pub fn touch_end(self) -> Self {
        self.pointer_up()
    }

    /// Back to scale 1 centred on `default_bounds`, not dragging.
    #[must_use]
    pub fn reset(self, default_bounds: &FractalBounds) -> Self {
        Self::from_bounds(default_bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::util::zoom_bounds::{BASE_VIEW_HEIGHT, BASE_VIEW_WIDTH};

    const TOLERANCE: f64 = 1e-9;

    const CANVAS: CanvasSize = CanvasSize {
        width: 800,
        height: 600,
    };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn starts_idle_centred_on_bounds() {
        let state = ZoomPanState::from_bounds(&FractalBounds::default());
        let zoom = state.zoom_state();

        assert!(!state.is_dragging());
        assert!(close(zoom.center_x, -0.75));
        assert!(close(zoom.center_y, 0.0));
        assert_eq!(zoom.scale, 1.0);
    }

    #[test]
    fn move_without_press_does_nothing() {
        let state = ZoomPanState::from_bounds(&FractalBounds::default());

        let transition = state.pointer_move(10.0, 10.0, CANVAS, &FractalBounds::default());

        assert_eq!(transition.bounds, None);
        assert_eq!(transition.state, state);
    }

    #[test]
    fn drag_translates_against_pointer() {
        let bounds = FractalBounds::default();
        let state = ZoomPanState::from_bounds(&bounds).pointer_down(100.0, 100.0);

        // 80 px right on an 800 px canvas spanning 3.5 units
        let transition = state.pointer_move(180.0, 100.0, CANVAS, &bounds);
        let moved = transition.bounds.unwrap();

        assert!(close(moved.min_real(), -2.5 - 0.35));
        assert!(close(moved.max_real(), 1.0 - 0.35));
        assert!(close(moved.min_imaginary(), -1.25));
        assert!(close(transition.state.zoom_state().center_x, -0.75 - 0.35));
        assert_eq!(transition.state.last_pointer(), (180.0, 100.0));
    }

    #[test]
    fn vertical_drag_uses_canvas_height() {
        let bounds = FractalBounds::default();
        let state = ZoomPanState::from_bounds(&bounds).pointer_down(0.0, 0.0);

        let moved = state
            .pointer_move(0.0, -60.0, CANVAS, &bounds)
            .bounds
            .unwrap();

        assert!(close(moved.min_imaginary(), -1.25 + 0.25));
        assert!(close(moved.max_imaginary(), 1.25 + 0.25));
    }

    #[test]
    fn release_returns_to_idle() {
        let state = ZoomPanState::from_bounds(&FractalBounds::default())
            .pointer_down(1.0, 2.0)
            .pointer_up();

        assert!(!state.is_dragging());
    }

    #[test]
    fn wheel_down_zooms_out_around_pointer() {
        let bounds = FractalBounds::default();
        let state = ZoomPanState::from_bounds(&bounds);

        let transition = state.wheel(120.0, 400.0, 300.0, CANVAS, &bounds);
        let zoom = transition.state.zoom_state();

        assert!(close(zoom.scale, 0.9));
        let new_bounds = transition.bounds.unwrap();
        assert!(close(new_bounds.width(), BASE_VIEW_WIDTH / 0.9));
        assert!(close(new_bounds.height(), BASE_VIEW_HEIGHT / 0.9));
    }

    #[test]
    fn wheel_up_zooms_in_keeping_cursor_point_fixed() {
        let bounds = FractalBounds::default();
        let state = ZoomPanState::from_bounds(&bounds);
        let before = pixel_to_complex(200.0, 150.0, 800, 600, &bounds);

        let transition = state.wheel(-3.0, 200.0, 150.0, CANVAS, &bounds);
        let new_bounds = transition.bounds.unwrap();
        let after = pixel_to_complex(200.0, 150.0, 800, 600, &new_bounds);

        assert!(close(transition.state.zoom_state().scale, 1.1));
        assert!(close(new_bounds.width(), BASE_VIEW_WIDTH / 1.1));
        // the pixel (200, 150) is the complex point -1.625 - 0.625i
        assert!(close(before.real, -1.625));
        assert!(close(before.imag, -0.625));
        assert!(close(after.real, before.real));
        assert!(close(after.imag, before.imag));
    }

    #[test]
    fn zoom_keeps_cursor_point_fixed_on_panned_bounds() {
        let bounds = FractalBounds::new(-0.9, -0.4, 0.1, 0.5).unwrap();
        let state = ZoomPanState::from_bounds(&bounds);

        for (px, py, factor) in [(0.0, 0.0, 1.1), (731.0, 12.0, 0.9), (799.0, 599.0, 3.0)] {
            let before = pixel_to_complex(px, py, 800, 600, &bounds);
            let zoomed = state.zoom(px, py, factor, CANVAS, &bounds).bounds.unwrap();
            let after = pixel_to_complex(px, py, 800, 600, &zoomed);

            assert!(close(after.real, before.real));
            assert!(close(after.imag, before.imag));
        }
    }

    #[test]
    fn zoom_state_centre_matches_returned_bounds() {
        let bounds = FractalBounds::default();

        let transition =
            ZoomPanState::from_bounds(&bounds).zoom(600.0, 450.0, 2.0, CANVAS, &bounds);
        let zoom = transition.state.zoom_state();
        let new_bounds = transition.bounds.unwrap();

        assert!(close(zoom.center_x, new_bounds.center().real));
        assert!(close(zoom.center_y, new_bounds.center().imag));
    }

    #[test]
    fn non_positive_or_non_finite_factor_is_ignored() {
        let bounds = FractalBounds::default();
        let state = ZoomPanState::from_bounds(&bounds)
            .zoom(400.0, 300.0, 2.0, CANVAS, &bounds)
            .state;

        for factor in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let transition = state.zoom(400.0, 300.0, factor, CANVAS, &bounds);

            assert_eq!(transition.bounds, None);
            assert_eq!(transition.state, state);
        }
    }

    #[test]
    fn zero_wheel_delta_zooms_in() {
        let bounds = FractalBounds::default();

        let transition =
            ZoomPanState::from_bounds(&bounds).wheel(0.0, 400.0, 300.0, CANVAS, &bounds);

        assert!(close(transition.state.zoom_state().scale, 1.1));
    }

    #[test]
    fn wheel_during_drag_keeps_dragging() {
        let bounds = FractalBounds::default();
        let state = ZoomPanState::from_bounds(&bounds).pointer_down(5.0, 5.0);

        let transition = state.wheel(1.0, 400.0, 300.0, CANVAS, &bounds);

        assert!(transition.state.is_dragging());
        assert!(transition.bounds.is_some());
    }

    #[test]
    fn scale_compounds_over_repeated_zoom() {
        let mut bounds = FractalBounds::default();
        let mut state = ZoomPanState::from_bounds(&bounds);

        for _ in 0..3 {
            let transition = state.zoom(400.0, 300.0, 2.0, CANVAS, &bounds);
            state = transition.state;
            bounds = transition.bounds.unwrap();
        }

        assert!(close(state.zoom_state().scale, 8.0));
        assert!(close(bounds.width(), BASE_VIEW_WIDTH / 8.0));
    }

    #[test]
    fn single_touch_drives_a_drag() {
        let bounds = FractalBounds::default();
        let state = ZoomPanState::from_bounds(&bounds)
            .touch_start(&[TouchPoint { x: 100.0, y: 100.0 }]);

        assert!(state.is_dragging());

        let transition = state.touch_move(&[TouchPoint { x: 180.0, y: 100.0 }], CANVAS, &bounds);
        assert!(close(transition.bounds.unwrap().min_real(), -2.85));

        assert!(!transition.state.touch_end().is_dragging());
    }

    #[test]
    fn multi_touch_is_ignored() {
        let bounds = FractalBounds::default();
        let two = [TouchPoint { x: 1.0, y: 1.0 }, TouchPoint { x: 9.0, y: 9.0 }];

        let state = ZoomPanState::from_bounds(&bounds).touch_start(&two);
        assert!(!state.is_dragging());

        let dragging = state.touch_start(&[TouchPoint { x: 1.0, y: 1.0 }]);
        let transition = dragging.touch_move(&two, CANVAS, &bounds);
        assert_eq!(transition.bounds, None);
        assert_eq!(transition.state, dragging);
    }

    #[test]
    fn reset_restores_defaults() {
        let bounds = FractalBounds::default();
        let state = ZoomPanState::from_bounds(&bounds)
            .pointer_down(1.0, 1.0)
            .zoom(10.0, 10.0, 4.0, CANVAS, &bounds)
            .state
            .reset(&bounds);

        assert_eq!(state, ZoomPanState::from_bounds(&bounds));
    }
}
