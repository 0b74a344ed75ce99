/// Evaluates the escape time for a single pixel of a fixed frame.
pub trait FractalAlgorithm: Send + Sync {
    fn compute(&self, x: u32, y: u32) -> f64;
}
