pub mod preset_store;
pub mod write_ppm;
