pub mod errors;
pub mod ports;
pub mod renderer;
pub mod types;
