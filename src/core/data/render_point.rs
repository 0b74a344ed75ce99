/// Escape time of a single pixel, as produced by the scanline stage.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderPoint {
    pub x: u32,
    pub y: u32,
    pub iterations: f64,
}
