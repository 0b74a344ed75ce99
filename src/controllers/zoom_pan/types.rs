/// Scroll towards the user (positive delta) zooms out by this factor.
pub const WHEEL_ZOOM_OUT_FACTOR: f64 = 0.9;
/// Scroll away from the user zooms in by this factor.
pub const WHEEL_ZOOM_IN_FACTOR: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// Centre and magnification of the current view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub center_x: f64,
    pub center_y: f64,
    pub scale: f64,
}

/// A touch point in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}
