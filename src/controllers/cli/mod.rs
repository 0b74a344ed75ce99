pub mod args;
pub mod controller;
