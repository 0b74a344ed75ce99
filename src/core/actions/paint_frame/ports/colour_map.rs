use crate::core::data::colour::Colour;

/// Turns a (possibly fractional) escape time into a colour.
pub trait ColourMap: Send + Sync {
    fn map(&self, iterations: f64) -> Colour;

    fn display_name(&self) -> &str;
}
