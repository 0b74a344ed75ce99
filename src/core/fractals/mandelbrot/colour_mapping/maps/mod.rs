pub mod classic;
pub mod fire;
pub mod grayscale;
pub mod ocean;
pub mod rainbow;
