pub mod components;
pub mod config;
pub mod constants;
pub mod markers;
pub mod resources;
pub mod systems;
